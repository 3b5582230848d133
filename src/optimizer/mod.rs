/// Text rewrites that wrap `auth.uid()` calls in scalar subqueries.
pub mod clause;
