use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParasurfError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Index {index} out of range for {len} control points")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ParasurfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ParasurfError::IndexOutOfRange { index: 7, len: 6 };
        assert_eq!(err.to_string(), "Index 7 out of range for 6 control points");

        let err = ParasurfError::InvalidParameter("slice_count must be >= 1".into());
        assert_eq!(err.to_string(), "Invalid parameter: slice_count must be >= 1");
    }

    #[test]
    fn test_parse_error_conversion() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: ParasurfError = parse.unwrap_err().into();
        assert!(matches!(err, ParasurfError::Parse(_)));
    }
}
