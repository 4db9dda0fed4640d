use thiserror::Error;

/// Errors raised while parsing slice specs or moving lines through the picker.
#[derive(Debug, Error)]
pub enum PickError {
    /// A slice spec is not `N`, `N:M`, `N:`, `:M` or `:`.
    #[error("invalid slice spec '{spec}': {reason}")]
    InvalidSpec {
        /// The text as given on the command line.
        spec: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Reading input or writing output failed.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

impl PickError {
    pub(crate) fn invalid_spec(spec: &str, reason: impl Into<String>) -> Self {
        PickError::InvalidSpec {
            spec: spec.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PickError>;
