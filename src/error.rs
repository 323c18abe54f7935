use thiserror::Error;

/// Errors raised while bootstrapping askterm
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid config in {path}: {message}")]
    Config { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
