use std::collections::BTreeMap;

use crate::input::policy::PolicyRecord;

/// Policies bucketed by table name.
///
/// Tables iterate in lexicographic order; policies within a table keep their input order.
#[derive(Debug, Default)]
pub struct TableGroups<'a> {
    tables: BTreeMap<&'a str, Vec<&'a PolicyRecord>>,
}

impl<'a> TableGroups<'a> {
    /// Number of distinct tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Policies attached to `table`, in input order.
    pub fn policies(&self, table: &str) -> Option<&[&'a PolicyRecord]> {
        self.tables.get(table).map(Vec::as_slice)
    }

    /// Iterate `(table, policies)` pairs in lexicographic table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a PolicyRecord])> + '_ {
        self.tables
            .iter()
            .map(|(table, policies)| (*table, policies.as_slice()))
    }
}

/// Group `policies` by their `tablename`.
pub fn group_by_table(policies: &[PolicyRecord]) -> TableGroups<'_> {
    let mut tables: BTreeMap<&str, Vec<&PolicyRecord>> = BTreeMap::new();
    for policy in policies {
        tables
            .entry(policy.tablename.as_str())
            .or_default()
            .push(policy);
    }
    TableGroups { tables }
}
