use serde::{Deserialize, Serialize};

/// One row of a `pg_policies` export.
///
/// Fields are kept as the raw strings found in the export; they are
/// interpolated verbatim into the generated migration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRecord {
    /// Table the policy is attached to.
    pub tablename: String,
    /// Policy name, unique within its table.
    pub policyname: String,
    /// Command verb (`SELECT`, `INSERT`, `UPDATE`, `DELETE` or `ALL`).
    pub cmd: String,
    /// `USING` predicate, absent for INSERT-only policies.
    #[serde(default)]
    pub using_clause: Option<String>,
    /// `WITH CHECK` predicate, absent for SELECT/DELETE policies.
    #[serde(default)]
    pub with_check_clause: Option<String>,
}

impl PolicyRecord {
    /// Build a record with no clauses.
    pub fn new(
        tablename: impl Into<String>,
        policyname: impl Into<String>,
        cmd: impl Into<String>,
    ) -> Self {
        Self {
            tablename: tablename.into(),
            policyname: policyname.into(),
            cmd: cmd.into(),
            using_clause: None,
            with_check_clause: None,
        }
    }

    /// Set the `USING` predicate.
    #[must_use]
    pub fn with_using(mut self, clause: impl Into<String>) -> Self {
        self.using_clause = Some(clause.into());
        self
    }

    /// Set the `WITH CHECK` predicate.
    #[must_use]
    pub fn with_check(mut self, clause: impl Into<String>) -> Self {
        self.with_check_clause = Some(clause.into());
        self
    }
}
