//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and raster adapter errors, and provides semantic
//! variants for discovery, validation, and conversion failures.
use std::path::PathBuf;
use thiserror::Error;

use crate::types::Role;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Raster error: {0}")]
    Raster(#[from] crate::io::RasterError),

    #[error("No {role} file found: {}", path.display())]
    FileNotFound { role: Role, path: PathBuf },

    #[error("Multiple {role} files found: {paths:?}")]
    DuplicateFile { role: Role, paths: Vec<PathBuf> },

    #[error("Invalid {role} file: {}", path.display())]
    InvalidFile { role: Role, path: PathBuf },

    #[error("Directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error(
        "Reference grid of {} is {}x{}, source grid is {}x{}; refusing to borrow referencing across mismatched grids",
        reference.display(), actual.0, actual.1, expected.0, expected.1
    )]
    GridMismatch {
        reference: PathBuf,
        /// Source grid as (cols, rows)
        expected: (usize, usize),
        /// Reference grid as (cols, rows)
        actual: (usize, usize),
    },

    #[error("Failed to write {}: {message}", path.display())]
    Write { path: PathBuf, message: String },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
