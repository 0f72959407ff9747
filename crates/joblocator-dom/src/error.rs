//! Page import errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("Invalid CSS selector: {0}")]
    InvalidSelector(String),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_selector_error() {
        let err = DomError::InvalidSelector("a[".to_string());
        assert!(err.to_string().contains("Invalid CSS selector"));
        assert!(err.to_string().contains("a["));
    }

    #[test]
    fn test_invalid_snapshot_error() {
        let err = DomError::InvalidSnapshot("root must be html".to_string());
        assert!(err.to_string().contains("root must be html"));
    }

    #[test]
    fn test_json_error_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DomError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }
}
