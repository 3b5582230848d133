/// Reading the JSON policy export from disk.
pub mod loader;
/// The policy record type as exported from `pg_policies`.
pub mod policy;
