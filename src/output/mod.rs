/// Writes the generated migration to disk.
pub mod writer;
