// Error types for Summify
use thiserror::Error;

/// Result type used across the crate
pub type Result<T> = std::result::Result<T, SummifyError>;

/// Errors surfaced to callers.
///
/// The summarization engine itself only ever produces `InvalidInput`;
/// the remaining variants come from the file and report collaborators.
#[derive(Error, Debug)]
pub enum SummifyError {
    /// Missing, empty or oversized text rejected before summarization
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Text extraction failed: {0}")]
    Extraction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = SummifyError::InvalidInput("Empty text provided".to_string());
        assert_eq!(err.to_string(), "Invalid input: Empty text provided");
    }

    #[test]
    fn test_io_error_conversion() {
        fn open_missing() -> Result<()> {
            std::fs::File::open("/definitely/not/here.txt")?;
            Ok(())
        }
        assert!(matches!(open_missing(), Err(SummifyError::Io(_))));
    }
}
