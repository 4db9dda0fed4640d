pub mod error;
pub mod field_slicer;
pub mod lookback;
pub mod pipeline;
pub mod reader;
pub mod row_selector;
pub mod slice_spec;

// Re-export main types for convenient access
pub use error::PickError;
pub use field_slicer::{slice_fields, tokenize, Token};
pub use pipeline::{PickStats, Picker, PickerConfig};
pub use row_selector::{select, RowSelection};
pub use slice_spec::{ResolvedRange, SliceSpec};

// Re-export input helpers used by the binary and integration tests
pub use reader::{count_lines, open_lines, InputSource, LineSource, ReaderConfig};
