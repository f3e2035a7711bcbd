use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct Ai4xError {
    pub code: String,
    pub message: String,
}

impl Ai4xError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn display_joins_code_and_message() {
        let error = Ai4xError::new("SAVE_DIR_CREATE", "permission denied");
        assert_eq!(error.to_string(), "SAVE_DIR_CREATE: permission denied");
    }
}
