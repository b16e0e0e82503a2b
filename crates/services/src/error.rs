//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `BackendClient`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BackendError {
    #[error("backend request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by speech-capture capabilities.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SpeechError {
    #[error("speech capture is not supported on this device")]
    Unsupported,
    #[error("speech capture is already running")]
    AlreadyRunning,
}

/// Errors emitted while exporting an answer to PDF.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error("nothing to export yet")]
    Empty,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("pdf rendering failed: {0}")]
    Pdf(String),
}
