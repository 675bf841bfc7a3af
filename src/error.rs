use std::path::PathBuf;

use thiserror::Error;

use crate::config::BuildEnv;

/// Custom error types for ghsuggest
#[derive(Debug, Error)]
pub enum GhSuggestError {
    #[error(
        "Missing GitHub credential: {var} is not set ({env} build).\n\nExport it or add it to a .env file."
    )]
    MissingCredential { var: &'static str, env: BuildEnv },

    #[error("Invalid config file {}: {message}", path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
