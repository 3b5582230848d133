use std::path::Path;

use tracing::debug;

use crate::error::MigrationError;
use crate::input::policy::PolicyRecord;

/// Read and parse the policy export at `path`.
pub fn load_policies(path: &Path) -> Result<Vec<PolicyRecord>, MigrationError> {
    let content = std::fs::read_to_string(path).map_err(|source| MigrationError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let policies = parse_policies_from(&content, path)?;
    debug!(path = %path.display(), count = policies.len(), "loaded policy export");
    Ok(policies)
}

/// Parse a JSON array of policy records held in memory.
pub fn parse_policies(json: &str) -> Result<Vec<PolicyRecord>, MigrationError> {
    parse_policies_from(json, Path::new("<memory>"))
}

fn parse_policies_from(json: &str, path: &Path) -> Result<Vec<PolicyRecord>, MigrationError> {
    let policies: Vec<PolicyRecord> =
        serde_json::from_str(json).map_err(|source| MigrationError::ParseInput {
            path: path.to_path_buf(),
            source,
        })?;

    if let Some(index) = policies
        .iter()
        .position(|policy| policy.tablename.trim().is_empty())
    {
        return Err(MigrationError::InvalidRecord {
            index,
            reason: "tablename must not be empty".to_string(),
        });
    }

    Ok(policies)
}
