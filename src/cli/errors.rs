use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input directory not found: {path}")]
    InputDirNotFound { path: String },
}
