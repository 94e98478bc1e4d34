use thiserror::Error;

/// Faults that can reach the top-level boundary in `main`.
///
/// A failed argument parse is handled locally by the dispatch and never
/// escapes; the categories exist so that any fault which does escape is
/// reported with a recognizable message instead of aborting the process.
#[derive(Debug, Error)]
pub enum EmuError {
    // A malformed or out-of-range argument value
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // Any other recognized failure
    #[error("{0}")]
    Other(String),

    // A failure nothing could describe
    #[error("unknown error")]
    Unknown,
}

impl EmuError {
    /// The line the fault boundary writes to standard error.
    pub fn fault_report(&self) -> String {
        match self {
            EmuError::InvalidArgument(detail) => {
                format!("Caught invalid argument: {}", detail)
            }
            EmuError::Other(detail) => format!("Caught generic error: {}", detail),
            EmuError::Unknown => "Unknown error! Please retry!".to_string(),
        }
    }
}
