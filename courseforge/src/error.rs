//! Error types and exit-code mapping for the courseforge CLI.

use courseforge_core::CatalogError;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for courseforge CLI operations, following Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution; all modules generated or cleanly skipped.
    pub const SUCCESS: i32 = 0;

    /// General error, including a batch with failed modules.
    pub const ERROR: i32 = 1;

    /// Catalog or validation error (invalid YAML, missing descriptors).
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied).
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments).
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C).
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM.
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for courseforge commands, aggregating the domain
/// errors and mapping each to an exit code.
#[derive(Debug, Error)]
pub enum CourseforgeError {
    /// Catalog loading or lookup error.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// One or more modules in a batch failed; details were printed in the
    /// summary.
    #[error("{failed} module(s) failed to generate")]
    BatchFailed {
        /// Number of failed modules.
        failed: usize,
    },

    /// Catalog validation found errors (strict mode also counts warnings).
    #[error("{errors} validation error(s)")]
    Validation {
        /// Number of errors found.
        errors: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CourseforgeError {
    /// Returns the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Catalog(_) | Self::Validation { .. } | Self::Json(_) => ExitCode::CONFIG_ERROR,
            Self::BatchFailed { .. } => ExitCode::ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

/// Result type alias for courseforge operations.
pub type Result<T> = std::result::Result<T, CourseforgeError>;

// ============================================================================
// Tests
// ============================================================================
