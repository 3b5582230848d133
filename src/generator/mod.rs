/// Whole-document assembly: header, per-table sections, verification footer.
pub mod migration;
/// DROP/CREATE POLICY rendering for a single policy.
pub mod policy_sql;
/// Grouping policies by table.
pub mod table_groups;
