// Slice spec parsing and resolution against a concrete length.
// Bounds stay signed until a total is known; `None` marks an open end.

use crate::error::{PickError, Result};

/// Half-open range `[begin, end)` as written by the user.
///
/// Negative bounds count from the end of a sequence whose length may not be
/// known yet. `end == None` means "through the end".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceSpec {
    pub begin: i64,
    pub end: Option<i64>,
}

impl SliceSpec {
    /// Everything: `:`.
    pub const ALL: SliceSpec = SliceSpec { begin: 0, end: None };

    /// Parse `N`, `N:M`, `N:`, `:M` or `:` with zero-based indices.
    ///
    /// A lone `N` selects exactly one element, except `-1` which selects the
    /// last element through the end (so it never resolves to an empty
    /// `[len-1, len-1+1)`-style wraparound at zero).
    pub fn parse(spec: &str) -> Result<Self> {
        Self::parse_with(spec, false)
    }

    /// Same as [`SliceSpec::parse`] but positive indices are one-based.
    ///
    /// Only positive values are shifted; zero, negative values and omitted
    /// bounds mean the same thing in both conventions.
    pub fn parse_one_based(spec: &str) -> Result<Self> {
        Self::parse_with(spec, true)
    }

    fn parse_with(spec: &str, one_based: bool) -> Result<Self> {
        let shift = |value: i64| if one_based && value > 0 { value - 1 } else { value };

        let mut parts = spec.split(':');
        let first = parts.next().unwrap_or_default();
        let Some(second) = parts.next() else {
            let index = shift(parse_index(spec, first)?);
            let end = if index == -1 { None } else { index.checked_add(1) };
            return Ok(SliceSpec { begin: index, end });
        };
        if parts.next().is_some() {
            return Err(PickError::invalid_spec(spec, "more than one ':'"));
        }

        let begin = match first.trim() {
            "" => 0,
            text => shift(parse_index(spec, text)?),
        };
        let end = match second.trim() {
            "" => None,
            text => Some(shift(parse_index(spec, text)?)),
        };
        Ok(SliceSpec { begin, end })
    }

    /// True when resolving this spec needs the total length.
    pub fn has_negative_bound(&self) -> bool {
        self.begin < 0 || self.end.is_some_and(|end| end < 0)
    }

    /// Magnitude of the most negative bound, zero when there is none.
    ///
    /// This is how many trailing elements must be kept to resolve the spec
    /// once the length becomes known.
    pub fn lookback(&self) -> usize {
        let magnitude = |bound: i64| {
            if bound < 0 {
                usize::try_from(bound.unsigned_abs()).unwrap_or(usize::MAX)
            } else {
                0
            }
        };
        magnitude(self.begin).max(self.end.map_or(0, magnitude))
    }

    /// Resolve against a known length. Negative bounds become `bound + total`
    /// clamped at zero; an open end stays open.
    pub fn resolve(&self, total: usize) -> ResolvedRange {
        ResolvedRange {
            begin: resolve_bound(self.begin, total),
            end: self.end.map(|end| resolve_bound(end, total)),
        }
    }

    /// Resolve only when no bound depends on the length.
    pub fn resolve_forward(&self) -> Option<ResolvedRange> {
        if self.has_negative_bound() {
            None
        } else {
            // Any total works here since every bound is already absolute.
            Some(self.resolve(0))
        }
    }
}

impl std::fmt::Display for SliceSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}:{}", self.begin, end),
            None => write!(f, "{}:", self.begin),
        }
    }
}

/// A range with absolute, non-negative bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRange {
    pub begin: usize,
    pub end: Option<usize>,
}

impl ResolvedRange {
    pub fn contains(&self, index: usize) -> bool {
        self.begin <= index && self.end.map_or(true, |end| index < end)
    }

    /// True once `index` and everything after it falls outside the range.
    pub fn is_exhausted_at(&self, index: usize) -> bool {
        self.end.is_some_and(|end| index >= end)
    }

    /// Concrete `[begin, end)` inside a sequence of `len` elements, or `None`
    /// when the selection is empty.
    pub fn clamp_to(&self, len: usize) -> Option<(usize, usize)> {
        let end = self.end.map_or(len, |end| end.min(len));
        (self.begin < end).then_some((self.begin, end))
    }
}

fn parse_index(spec: &str, text: &str) -> Result<i64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(PickError::invalid_spec(spec, "expected an index"));
    }
    text.parse::<i64>()
        .map_err(|e| PickError::invalid_spec(spec, format!("'{text}' is not an integer ({e})")))
}

fn resolve_bound(bound: i64, total: usize) -> usize {
    if bound >= 0 {
        return usize::try_from(bound).unwrap_or(usize::MAX);
    }
    let magnitude = usize::try_from(bound.unsigned_abs()).unwrap_or(usize::MAX);
    total.saturating_sub(magnitude)
}
