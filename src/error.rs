use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures of a migration run. None of them are retried.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// The policy file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        /// Path of the policy file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The policy file is not a JSON array of policy records.
    #[error("invalid policy JSON in {}: {source}", path.display())]
    ParseInput {
        /// Path of the policy file, or `<memory>` for in-memory input.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },

    /// A record parsed but violates a record invariant.
    #[error("invalid policy record #{index}: {reason}")]
    InvalidRecord {
        /// Zero-based position of the record in the input array.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// The migration file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    WriteOutput {
        /// Path of the migration file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
