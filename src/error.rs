//! Error types for Dockpick

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DockpickError {
    #[error("container runtime '{name}' not found: {source}")]
    RuntimeNotFound {
        name: String,
        #[source]
        source: which::Error,
    },

    #[error("error reading containers info: {0}")]
    Listing(String),

    #[error("error parsing container listing at line {line}: {message}\nJSON: <{content}>")]
    ListingParse {
        line: usize,
        content: String,
        message: String,
    },

    #[error("container error: {0}")]
    Exec(String),

    #[error("error reading input: {0}")]
    Input(String),

    #[error("error parsing config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("error fetching latest version: {0}")]
    Http(#[from] reqwest::Error),

    #[error("version error: {0}")]
    Version(String),

    #[error("install failed: {0}")]
    Install(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DockpickError>;
