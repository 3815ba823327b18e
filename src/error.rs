use thiserror::Error;

/// Main error type for nidmstore
#[derive(Error, Debug)]
pub enum NidmError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Triple store transport or status errors
    #[error("Store error: {0}")]
    Store(String),

    /// Query response parse errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Delimited output errors
    #[error("TSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenient Result type using NidmError
pub type Result<T> = std::result::Result<T, NidmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NidmError::Config("Test error".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("Test error"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let nidm_err: NidmError = io_err.into();
        assert!(matches!(nidm_err, NidmError::Io(_)));
    }

    #[test]
    fn test_parse_error_display() {
        let err = NidmError::Parse("missing results.bindings".to_string());
        assert_eq!(err.to_string(), "Parse error: missing results.bindings");
    }
}
