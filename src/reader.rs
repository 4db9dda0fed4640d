use memmap2::MmapOptions;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::Result;

/// Configuration for input reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for line reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_size: 8192,
        }
    }
}

/// Where lines come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

/// Lines of the input, terminators removed, plus the line count when it could
/// be learned ahead of time.
pub struct LineSource {
    lines: io::Lines<Box<dyn BufRead>>,
    known_total: Option<usize>,
}

impl LineSource {
    /// Wrap any buffered reader. The total is left unknown.
    pub fn from_reader<R: BufRead + 'static>(reader: R) -> Self {
        let reader: Box<dyn BufRead> = Box::new(reader);
        Self {
            lines: reader.lines(),
            known_total: None,
        }
    }

    /// Line count from a pre-scan, if one was done.
    pub fn known_total(&self) -> Option<usize> {
        self.known_total
    }
}

impl Iterator for LineSource {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next()
    }
}

/// Open `source` for line-by-line reading.
///
/// Regular files are counted first so negative row bounds can resolve
/// without buffering. Stdin, pipes and pseudo-files (which report a length of
/// zero whatever they hold) are left uncounted.
pub fn open_lines(source: &InputSource, config: &ReaderConfig) -> Result<LineSource> {
    match source {
        InputSource::Stdin => {
            debug!("Reading lines from stdin");
            Ok(LineSource::from_reader(BufReader::with_capacity(
                config.buffer_size,
                io::stdin(),
            )))
        }
        InputSource::File(path) => {
            let total = prescan_total(path)?;
            let file = File::open(path)?;
            match total {
                Some(total) => info!("Reading {}: {} lines", path.display(), total),
                None => info!("Reading {}: not a regular file, line count unknown", path.display()),
            }
            let mut lines = LineSource::from_reader(BufReader::with_capacity(config.buffer_size, file));
            lines.known_total = total;
            Ok(lines)
        }
    }
}

/// Line count of `path` when it can be trusted: only regular files report a
/// length that matches their content.
fn prescan_total(path: &Path) -> Result<Option<usize>> {
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Ok(None);
    }
    count_lines(path).map(Some)
}

/// Count the lines of a file the same way `BufRead::lines` splits them: one
/// per `\n`, plus one for a final line without a terminator.
pub fn count_lines<P: AsRef<Path>>(path: P) -> Result<usize> {
    let path = path.as_ref();
    let file = File::open(path)?;
    // Mapping an empty file fails on some platforms.
    if file.metadata()?.len() == 0 {
        return Ok(0);
    }

    let mmap = unsafe { MmapOptions::new().map(&file)? };
    let newlines = mmap.iter().filter(|&&b| b == b'\n').count();
    let unterminated = usize::from(mmap.last().is_some_and(|&b| b != b'\n'));
    debug!("Counted {} lines in {}", newlines + unterminated, path.display());
    Ok(newlines + unterminated)
}
