use thiserror::Error;

/// Custom error types for autofill
#[derive(Debug, Error)]
pub enum AutofillError {
    #[error("Invalid dataset: {0}\n\nExpected an array of [label, value] pairs or {{\"label\", \"value\"}} objects.")]
    InvalidData(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
