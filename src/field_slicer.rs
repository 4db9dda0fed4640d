// Whitespace field slicing that keeps the source text intact.
//
// Fields are located by byte offset so a selected span is cut straight out of
// the line and keeps whatever spacing sat between the fields.

use crate::slice_spec::SliceSpec;

/// A maximal run of non-whitespace characters within one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

/// Split `line` on runs of whitespace, recording where each field sits.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (offset, ch) in line.char_indices() {
        match (ch.is_whitespace(), start) {
            (false, None) => start = Some(offset),
            (true, Some(begin)) => {
                tokens.push(Token {
                    text: &line[begin..offset],
                    start: begin,
                    end: offset,
                });
                start = None;
            }
            _ => {}
        }
    }
    if let Some(begin) = start {
        tokens.push(Token {
            text: &line[begin..],
            start: begin,
            end: line.len(),
        });
    }
    tokens
}

/// A line with its terminator (`\n` or `\r\n`) removed.
pub fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Selected span of a line, along with where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpan<'a> {
    pub text: &'a str,
    /// Byte offset of `text` within the line.
    pub offset: usize,
}

/// Cut the fields selected by `spec` out of `line`.
///
/// Negative column bounds resolve against this line's field count. Returns
/// `None` when the line has no fields or the selection is empty.
pub fn slice_fields<'a>(line: &'a str, spec: &SliceSpec) -> Option<&'a str> {
    slice_span(line, spec).map(|span| span.text)
}

/// Like [`slice_fields`] but also reports the byte offset of the span.
pub fn slice_span<'a>(line: &'a str, spec: &SliceSpec) -> Option<FieldSpan<'a>> {
    let line = strip_terminator(line);
    let tokens = tokenize(line);
    if tokens.is_empty() {
        return None;
    }

    let (first, last) = spec.resolve(tokens.len()).clamp_to(tokens.len())?;
    let start = tokens[first].start;
    let end = tokens[last - 1].end;
    Some(FieldSpan {
        text: &line[start..end],
        offset: start,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(line: &str, spec: &str) -> Option<String> {
        slice_fields(line, &SliceSpec::parse(spec).unwrap()).map(str::to_string)
    }

    #[test]
    fn test_tokenize_offsets() {
        let tokens = tokenize("  ab\tcd   e ");
        let triples: Vec<_> = tokens.iter().map(|t| (t.text, t.start, t.end)).collect();
        assert_eq!(triples, vec![("ab", 2, 4), ("cd", 5, 7), ("e", 10, 11)]);
    }

    #[test]
    fn test_tokenize_blank_lines() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t  ").is_empty());
    }

    #[test]
    fn test_tokenize_multibyte() {
        let tokens = tokenize("héllo\u{3000}wörld");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "héllo");
        assert_eq!(tokens[1].text, "wörld");
        assert_eq!(tokens[1].start, "héllo\u{3000}".len());
    }

    #[test]
    fn test_interior_whitespace_preserved() {
        assert_eq!(cols("a   b", "0:").as_deref(), Some("a   b"));
        assert_eq!(cols("x  y\t\tz", "1:").as_deref(), Some("y\t\tz"));
    }

    #[test]
    fn test_leading_and_trailing_whitespace_dropped() {
        assert_eq!(cols("   a  b   ", ":").as_deref(), Some("a  b"));
        assert_eq!(cols("\tbert24-base-v2.yaml\n", ":").as_deref(), Some("bert24-base-v2.yaml"));
    }

    #[test]
    fn test_single_columns() {
        let line = "drwxr-xr-x - oldalexis 2023-09-17 14:13 alexis_1";
        assert_eq!(cols(line, "0").as_deref(), Some("drwxr-xr-x"));
        assert_eq!(cols(line, "2").as_deref(), Some("oldalexis"));
        assert_eq!(cols(line, "-1").as_deref(), Some("alexis_1"));
        assert_eq!(cols(line, "-2").as_deref(), Some("14:13"));
    }

    #[test]
    fn test_negative_column_range() {
        let line = "drwxr-xr-x - oldalexis 2023-09-17 14:13 alexis_1";
        assert_eq!(cols(line, "-3:-1").as_deref(), Some("2023-09-17 14:13"));
        let padded = "drwxrwxrwt - root      2024-11-21 12:25 Shared";
        assert_eq!(cols(padded, "2:4").as_deref(), Some("root      2024-11-21"));
    }

    #[test]
    fn test_out_of_range_selects_nothing() {
        assert_eq!(cols("a b c", "5"), None);
        assert_eq!(cols("a b c", "3:"), None);
        assert_eq!(cols("a b c", "2:1"), None);
        assert_eq!(cols("a b c", "-9:-5"), None);
        assert_eq!(cols("a b c", "1:99").as_deref(), Some("b c"));
        assert_eq!(cols("a b c", "-9:").as_deref(), Some("a b c"));
    }

    #[test]
    fn test_empty_lines_select_nothing() {
        assert_eq!(cols("", ":"), None);
        assert_eq!(cols("   \r\n", "0"), None);
    }

    #[test]
    fn test_terminator_not_part_of_last_field() {
        assert_eq!(cols("a b\r\n", "-1").as_deref(), Some("b"));
        assert_eq!(cols("a b\n", "0:").as_deref(), Some("a b"));
    }

    #[test]
    fn test_span_offset() {
        let spec = SliceSpec::parse("1:").unwrap();
        let span = slice_span("ab  cd ef", &spec).unwrap();
        assert_eq!(span, FieldSpan { text: "cd ef", offset: 4 });
    }
}
