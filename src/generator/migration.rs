use std::fmt::Write;

use tracing::debug;

use crate::generator::policy_sql::render_policy;
use crate::generator::table_groups::group_by_table;
use crate::input::policy::PolicyRecord;

const RULE: &str =
    "-- ============================================================================";
const TABLE_RULE: &str =
    "-- ----------------------------------------------------------------------------";

/// Manual check appended to every migration; it should return 0 once applied.
pub const VERIFICATION_QUERY: &str = "\
-- SELECT COUNT(*) as remaining_unoptimized
-- FROM pg_policies
-- WHERE schemaname = 'public'
--   AND (
--     qual LIKE '%auth.uid()%'
--     OR qual LIKE '%has_role(auth.uid()%'
--     OR qual LIKE '%is_dev_admin(auth.uid()%'
--   )
--   AND (
--     qual NOT LIKE '%(SELECT auth.uid())%'
--     AND COALESCE(with_check, '') NOT LIKE '%(SELECT auth.uid())%'
--   );
";

/// A fully assembled migration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migration {
    /// Complete SQL text.
    pub sql: String,
    /// Number of policies re-created.
    pub policy_count: usize,
    /// Number of distinct tables touched.
    pub table_count: usize,
    /// `auth.uid()` calls wrapped across all policies.
    pub wrapped_calls: usize,
}

/// Assemble the migration for `policies`.
pub fn build_migration(policies: &[PolicyRecord]) -> Migration {
    let groups = group_by_table(policies);
    let policy_count = policies.len();
    let table_count = groups.table_count();
    let mut wrapped_calls = 0usize;

    let mut sql = header(policy_count, table_count);

    for (table, table_policies) in groups.iter() {
        writeln!(sql, "{TABLE_RULE}").unwrap();
        writeln!(sql, "-- TABLE: {table} ({} policies)", table_policies.len()).unwrap();
        writeln!(sql, "{TABLE_RULE}").unwrap();
        writeln!(sql).unwrap();

        for policy in table_policies {
            let rendered = render_policy(policy);
            if rendered.wrapped_calls == 0 {
                debug!(
                    table,
                    policy = %policy.policyname,
                    "policy had no auth.uid() calls to wrap"
                );
            }
            wrapped_calls += rendered.wrapped_calls;
            sql.push_str(&rendered.sql);
            sql.push('\n');
        }
    }

    sql.push_str(&footer());

    Migration {
        sql,
        policy_count,
        table_count,
        wrapped_calls,
    }
}

fn header(policy_count: usize, table_count: usize) -> String {
    let mut out = String::new();
    writeln!(out, "{RULE}").unwrap();
    writeln!(
        out,
        "-- RLS Policy Optimization - Phase 8: COMPLETE DATABASE OPTIMIZATION"
    )
    .unwrap();
    writeln!(out, "{RULE}").unwrap();
    writeln!(out, "--").unwrap();
    writeln!(
        out,
        "-- This migration fixes ALL remaining unoptimized RLS policies in the database."
    )
    .unwrap();
    writeln!(
        out,
        "-- Total: {policy_count} policies across {table_count} tables"
    )
    .unwrap();
    writeln!(out, "--").unwrap();
    writeln!(
        out,
        "-- Pattern: Wrap ALL auth.uid(), has_role(), is_dev_admin() calls in (SELECT ...)"
    )
    .unwrap();
    writeln!(
        out,
        "-- to ensure per-query evaluation instead of per-row evaluation."
    )
    .unwrap();
    writeln!(out, "--").unwrap();
    writeln!(
        out,
        "-- Performance Impact: 10-100x faster queries, eliminates all performance warnings"
    )
    .unwrap();
    writeln!(out, "{RULE}").unwrap();
    writeln!(out).unwrap();
    out
}

fn footer() -> String {
    let mut out = String::new();
    writeln!(out, "{RULE}").unwrap();
    writeln!(out, "-- End of Phase 8 Migration").unwrap();
    writeln!(out, "{RULE}").unwrap();
    writeln!(out, "--").unwrap();
    writeln!(
        out,
        "-- Verification: Run this query to confirm no unoptimized policies remain"
    )
    .unwrap();
    writeln!(out, "--").unwrap();
    out.push_str(VERIFICATION_QUERY);
    writeln!(out, "--").unwrap();
    writeln!(out, "-- Expected result: 0").unwrap();
    writeln!(out, "{RULE}").unwrap();
    out
}
