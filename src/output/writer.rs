use std::path::Path;

use tracing::debug;

use crate::error::MigrationError;
use crate::generator::migration::Migration;

/// Write `migration` to `path`, replacing any existing file.
///
/// Parent directories are not created; a missing directory is an error.
pub fn write_migration(path: &Path, migration: &Migration) -> Result<(), MigrationError> {
    std::fs::write(path, &migration.sql).map_err(|source| MigrationError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = migration.sql.len(), "wrote migration");
    Ok(())
}
