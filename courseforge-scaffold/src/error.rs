//! Error types for module scaffolding.

use std::path::PathBuf;

use courseforge_core::CatalogError;
use thiserror::Error;

/// Errors fatal to a single module's generation. The batch driver records
/// these per module and continues with the rest of the range.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Descriptor lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Filesystem operation failed.
    #[error("{path}: {source}")]
    Io {
        /// Path the operation was acting on.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
