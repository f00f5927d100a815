use std::fmt;

/// Unified error type for the cardfile crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The bridge has no handler registered for the requested method name.
    NotImplemented,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::NotImplemented => write!(f, "not implemented"),
        }
    }
}

impl std::error::Error for CoreError {}

/// Result type alias using [`CoreError`].
pub type CoreResult<T> = Result<T, CoreError>;
