//! Error types for TxnForge

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for TxnForge operations
pub type Result<T> = std::result::Result<T, TxnForgeError>;

/// Errors that can occur in TxnForge
#[derive(Debug, Error)]
pub enum TxnForgeError {
    /// Failed to write a single session file
    #[error("failed to write session file {}: {source}", path.display())]
    SessionWrite {
        /// Path of the session file that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// JSON serialization error
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
