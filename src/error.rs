//! Error types for the dynasty league tools

use std::{io, path::Path};
use thiserror::Error;


pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("Source file not found: {path}")]
    SourceNotFound { path: String },

    #[error("Unreadable tabular data in {path}: {reason}")]
    UnreadableFormat { path: String, reason: String },

    #[error("Sheet '{sheet}' not found. Available sheets: {}", available.join(", "))]
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },

    #[error("Practice squad total {total} exceeds the league cap of {cap}")]
    CapExceeded { total: usize, cap: usize },

    #[error("Permission denied writing {path}")]
    WritePermissionDenied { path: String },

    #[error("Invalid output path {path}: {reason}")]
    PathInvalid { path: String, reason: String },

    #[error("Network error: {0}")]
    NetworkError(#[source] reqwest::Error),

    #[error("Upstream error from {url}: {message}")]
    UpstreamError { url: String, message: String },

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Invalid league ID '{value}': expected a numeric Sleeper league ID")]
    InvalidLeagueId { value: String },
}

impl LeagueError {
    /// Map a failure to open or read an input file.
    pub fn from_read(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => LeagueError::SourceNotFound {
                path: path.display().to_string(),
            },
            _ => LeagueError::UnreadableFormat {
                path: path.display().to_string(),
                reason: err.to_string(),
            },
        }
    }

    /// Map a failure while creating, writing or moving an output file.
    pub fn from_write(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => LeagueError::WritePermissionDenied {
                path: path.display().to_string(),
            },
            _ => LeagueError::PathInvalid {
                path: path.display().to_string(),
                reason: err.to_string(),
            },
        }
    }

    pub fn unreadable(path: &Path, reason: impl ToString) -> Self {
        LeagueError::UnreadableFormat {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Map a `reqwest` failure. Status errors are upstream failures; everything
    /// else (connect, timeout, body transfer) is a network failure.
    pub fn from_http(url: &str, err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => LeagueError::UpstreamError {
                url: url.to_string(),
                message: format!("HTTP status {status}"),
            },
            None => LeagueError::NetworkError(err),
        }
    }

    /// A body that did not match the expected JSON shape.
    pub fn malformed_body(url: &str, err: serde_json::Error) -> Self {
        LeagueError::UpstreamError {
            url: url.to_string(),
            message: format!("malformed JSON body: {err}"),
        }
    }
}
