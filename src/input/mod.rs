use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Unsupported format: {0} (only .txt files can be loaded)")]
    UnsupportedFormat(PathBuf),

    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Nothing to read in {0}")]
    EmptySource(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Fetch failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Raw text handed to the reader session, plus a label for the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub text: String,
    pub source: String,
}

impl LoadedDocument {
    /// Text typed into the command deck
    pub fn manual(text: &str) -> Result<Self, LoadError> {
        if text.trim().is_empty() {
            return Err(LoadError::EmptySource("typed text".to_string()));
        }
        Ok(Self {
            text: text.to_string(),
            source: "typed text".to_string(),
        })
    }
}

pub mod clipboard;
pub mod file;
pub mod web;
