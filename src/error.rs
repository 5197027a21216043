//! Error types for the capsolver library.

use thiserror::Error;

/// Main error type for the capsolver library.
///
/// Failures reported by the CapSolver backend itself (`errorId == 1`) are
/// not errors at this level; they come back as response values so the
/// caller sees the service's `errorCode`/`errorDescription` verbatim.
#[derive(Error, Debug)]
pub enum CapSolverError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] rquest::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid response from server
    #[error("Invalid server response: {0}")]
    InvalidResponse(String),
}

/// Result type alias for capsolver operations.
pub type Result<T> = std::result::Result<T, CapSolverError>;
