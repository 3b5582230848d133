use std::fmt::Write;

use crate::input::policy::PolicyRecord;
use crate::optimizer::clause::{optimize_clause_with_stats, ClauseRewrite};

/// DROP/CREATE statements for one policy, with its rewrite count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPolicy {
    /// The SQL text, terminated by `;\n`.
    pub sql: String,
    /// `auth.uid()` calls wrapped across both clauses.
    pub wrapped_calls: usize,
}

/// Render `DROP POLICY IF EXISTS` + `CREATE POLICY` for `policy` with optimized clauses.
pub fn policy_sql(policy: &PolicyRecord) -> String {
    render_policy(policy).sql
}

/// Like [`policy_sql`], also reporting how many calls were wrapped.
pub fn render_policy(policy: &PolicyRecord) -> RenderedPolicy {
    let using = optimize_clause_with_stats(policy.using_clause.as_deref());
    let with_check = optimize_clause_with_stats(policy.with_check_clause.as_deref());

    let name = &policy.policyname;
    let table = &policy.tablename;
    let mut sql = String::new();

    writeln!(sql, "DROP POLICY IF EXISTS \"{name}\" ON {table};").unwrap();
    writeln!(sql, "CREATE POLICY \"{name}\"").unwrap();
    writeln!(sql, "  ON {table} FOR {}", policy.cmd).unwrap();

    if let Some(ClauseRewrite { text, .. }) = &using {
        write!(sql, "  USING (\n    {text}\n  )").unwrap();
    }
    if let Some(ClauseRewrite { text, .. }) = &with_check {
        write!(sql, "\n  WITH CHECK (\n    {text}\n  )").unwrap();
    }
    sql.push_str(";\n");

    let wrapped_calls = [&using, &with_check]
        .into_iter()
        .flatten()
        .map(|rewrite| rewrite.wrapped_calls)
        .sum();

    RenderedPolicy { sql, wrapped_calls }
}
