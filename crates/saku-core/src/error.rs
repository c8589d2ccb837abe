//! Error types for Saku

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to load model: {0}")]
    ModelLoad(String),

    #[error("Model inference failed: {0}")]
    ModelInference(String),

    #[error("Income must be greater than 0 (got {0})")]
    InvalidIncome(f64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Cannot allocate a reduction across categories that sum to zero")]
    DegenerateAllocation,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether the error came from bad user input rather than the models or environment
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::InvalidIncome(_) | Error::InvalidInput(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_errors() {
        assert!(Error::InvalidIncome(0.0).is_user_error());
        assert!(Error::InvalidInput("food cannot be negative".into()).is_user_error());
        assert!(!Error::ModelInference("bad output".into()).is_user_error());
        assert!(!Error::ModelLoad("missing".into()).is_user_error());
        assert!(!Error::DegenerateAllocation.is_user_error());
    }
}
