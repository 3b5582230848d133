//! Rewrite `PostgreSQL` RLS policies so `auth.uid()` is evaluated once per query,
//! and emit the DROP/CREATE POLICY migration that applies the rewrite.
#![warn(missing_docs)]

/// Error type shared by every stage.
pub mod error;
/// SQL migration generation from policy records.
pub mod generator;
/// Policy records and the JSON loader.
pub mod input;
/// Clause rewriting.
pub mod optimizer;
/// File output.
pub mod output;

pub use error::MigrationError;
