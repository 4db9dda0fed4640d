// Row selection feeding field slicing, and the writer loop around it.

use std::io::{self, Write};

use tracing::info;

use crate::error::Result;
use crate::field_slicer::slice_span;
use crate::row_selector::select;
use crate::slice_spec::SliceSpec;

/// Knobs that change how specs are read and lines are printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PickerConfig {
    /// Positive indices in both specs count from 1.
    pub one_based: bool,
    /// Pad each output line so the first picked field keeps its column.
    pub align: bool,
}

/// Counters for one run of [`Picker::write_to`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PickStats {
    pub lines_emitted: u64,
    /// Emitted lines whose column selection was empty.
    pub blank_lines: u64,
}

/// A row spec and a column spec applied together.
#[derive(Debug, Clone, Copy)]
pub struct Picker {
    rows: SliceSpec,
    columns: SliceSpec,
    config: PickerConfig,
}

impl Picker {
    pub fn new(rows: SliceSpec, columns: SliceSpec, config: PickerConfig) -> Self {
        Self {
            rows,
            columns,
            config,
        }
    }

    /// Parse both specs, honouring `config.one_based`.
    pub fn from_specs(row_spec: &str, column_spec: &str, config: PickerConfig) -> Result<Self> {
        let parse = if config.one_based {
            SliceSpec::parse_one_based
        } else {
            SliceSpec::parse
        };
        Ok(Self::new(parse(row_spec)?, parse(column_spec)?, config))
    }

    /// Output lines for `lines`, lazily. Every selected row produces exactly
    /// one output line; rows whose column selection is empty come out blank.
    pub fn pick<I, L, E>(&self, lines: I, known_total: Option<usize>) -> impl Iterator<Item = std::result::Result<String, E>>
    where
        I: IntoIterator<Item = std::result::Result<L, E>>,
        L: AsRef<str>,
    {
        let picker = *self;
        select(lines, self.rows, known_total).map(move |row| row.map(|line| picker.format_line(line.as_ref())))
    }

    /// The column span of one line, as it should be printed.
    pub fn format_line(&self, line: &str) -> String {
        match slice_span(line, &self.columns) {
            None => String::new(),
            Some(span) if self.config.align => {
                let indent = line[..span.offset].chars().count();
                let mut out = String::with_capacity(indent + span.text.len());
                out.extend(std::iter::repeat(' ').take(indent));
                out.push_str(span.text);
                out
            }
            Some(span) => span.text.to_string(),
        }
    }

    /// Run the picker over `lines` and write each output line to `out`.
    ///
    /// The first read or write failure stops the run; everything before it has
    /// already been written.
    pub fn write_to<I, L, W>(&self, lines: I, known_total: Option<usize>, mut out: W) -> Result<PickStats>
    where
        I: IntoIterator<Item = io::Result<L>>,
        L: AsRef<str>,
        W: Write,
    {
        let mut stats = PickStats::default();
        for line in self.pick(lines, known_total) {
            let line = line?;
            if line.is_empty() {
                stats.blank_lines += 1;
            }
            out.write_all(line.as_bytes())?;
            out.write_all(b"\n")?;
            stats.lines_emitted += 1;
        }
        out.flush()?;

        info!(
            rows = %self.rows,
            columns = %self.columns,
            lines_emitted = stats.lines_emitted,
            blank_lines = stats.blank_lines,
            "Pick completed"
        );
        Ok(stats)
    }
}
