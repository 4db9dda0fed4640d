// Row selection over a single pass of the input.
// Forward-only specs stream; specs with negative bounds keep a trailing window
// sized to the largest negative magnitude and resolve it at end of input.

use tracing::debug;

use crate::lookback::LookbackBuffer;
use crate::slice_spec::{ResolvedRange, SliceSpec};

/// Select the rows of `lines` that fall in `spec`.
///
/// `known_total` lets negative bounds resolve up front (e.g. after counting
/// the lines of a file) so that nothing needs buffering. The source is pulled
/// lazily and at most once; the first error it yields ends the selection.
pub fn select<I, T, E>(lines: I, spec: SliceSpec, known_total: Option<usize>) -> RowSelection<I::IntoIter, T>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let source = lines.into_iter();
    let range = match known_total {
        Some(total) => Some(spec.resolve(total)),
        None => spec.resolve_forward(),
    };

    let state = match range {
        Some(range) => {
            debug!(%spec, ?range, ?known_total, "streaming row selection");
            State::Streaming {
                source,
                next_index: 0,
                range,
            }
        }
        None => {
            let capacity = spec.lookback();
            debug!(%spec, capacity, "buffering row selection until end of input");
            State::Buffering {
                source,
                next_index: 0,
                spec,
                window: LookbackBuffer::new(capacity),
            }
        }
    };

    RowSelection {
        state,
        max_buffered: 0,
    }
}

/// Lazy iterator returned by [`select`].
pub struct RowSelection<I, T> {
    state: State<I, T>,
    max_buffered: usize,
}

enum State<I, T> {
    Streaming {
        source: I,
        next_index: usize,
        range: ResolvedRange,
    },
    Buffering {
        source: I,
        next_index: usize,
        spec: SliceSpec,
        window: LookbackBuffer<T>,
    },
    Replaying {
        entries: std::vec::IntoIter<(usize, T)>,
        range: ResolvedRange,
    },
    Done,
}

impl<I, T> RowSelection<I, T> {
    /// Largest number of lines held in the lookback window so far.
    pub fn max_buffered(&self) -> usize {
        self.max_buffered
    }

    /// True when the selection streams without a lookback window.
    #[cfg(test)]
    fn is_streaming(&self) -> bool {
        matches!(self.state, State::Streaming { .. })
    }
}

impl<I, T, E> Iterator for RowSelection<I, T>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match &mut self.state {
                State::Streaming {
                    source,
                    next_index,
                    range,
                } => {
                    if range.is_exhausted_at(*next_index) {
                        self.state = State::Done;
                        return None;
                    }
                    match source.next() {
                        Some(Ok(line)) => {
                            let index = *next_index;
                            *next_index += 1;
                            if range.contains(index) {
                                return Some(Ok(line));
                            }
                        }
                        Some(Err(e)) => {
                            self.state = State::Done;
                            return Some(Err(e));
                        }
                        None => {
                            self.state = State::Done;
                            return None;
                        }
                    }
                }
                State::Buffering {
                    source,
                    next_index,
                    spec,
                    window,
                } => match source.next() {
                    Some(Ok(line)) => {
                        let index = *next_index;
                        *next_index += 1;
                        let evicted = window.push(index, line);
                        self.max_buffered = self.max_buffered.max(window.len());
                        if let Some((old_index, old_line)) = evicted {
                            if evicted_is_selected(spec, old_index) {
                                return Some(Ok(old_line));
                            }
                        }
                    }
                    Some(Err(e)) => {
                        self.state = State::Done;
                        return Some(Err(e));
                    }
                    None => {
                        let total = *next_index;
                        let range = spec.resolve(total);
                        debug!(total, ?range, buffered = window.len(), "input exhausted, replaying window");
                        let window = std::mem::replace(window, LookbackBuffer::new(0));
                        self.state = State::Replaying {
                            entries: window.into_ordered(),
                            range,
                        };
                    }
                },
                State::Replaying { entries, range } => {
                    let range = *range;
                    if let Some((_, line)) = entries.find(|(index, _)| range.contains(*index)) {
                        return Some(Ok(line));
                    }
                    self.state = State::Done;
                    return None;
                }
                State::Done => return None,
            }
        }
    }
}

/// Decide an entry pushed out of a full window of capacity `spec.lookback()`.
///
/// Such an entry has at least `capacity` lines after it, so it lies before
/// every resolved negative bound: a negative `begin` excludes it and a
/// negative `end` admits it.
fn evicted_is_selected(spec: &SliceSpec, index: usize) -> bool {
    let Ok(begin) = usize::try_from(spec.begin) else {
        return false;
    };
    let below_end = match spec.end {
        Some(end) if end >= 0 => index < usize::try_from(end).unwrap_or(usize::MAX),
        _ => true,
    };
    index >= begin && below_end
}
