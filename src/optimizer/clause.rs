use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Helper functions whose first argument is the current user's id.
pub const HELPER_FUNCTIONS: [&str; 4] = [
    "has_role",
    "is_dev_admin",
    "has_permission",
    "is_event_manager",
];

const WRAPPED_UID: &str = "(SELECT auth.uid())";
const SUBQUERY_PREFIX: &str = "(SELECT ";

static HELPER_CALL: LazyLock<Regex> = LazyLock::new(|| {
    let names = HELPER_FUNCTIONS
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"({names})\(auth\.uid\(\)")).expect("helper call pattern is valid")
});

static AUTH_UID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bauth\.uid\(\)").expect("auth.uid pattern is valid"));

/// Result of rewriting one clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseRewrite {
    /// The rewritten clause text.
    pub text: String,
    /// How many `auth.uid()` calls were wrapped in a scalar subquery.
    pub wrapped_calls: usize,
}

/// Wrap `auth.uid()` calls in `(SELECT ...)` so the planner evaluates them once per query.
///
/// Absent or empty clauses yield `None`. The rewrite is idempotent.
pub fn optimize_clause(clause: Option<&str>) -> Option<String> {
    optimize_clause_with_stats(clause).map(|rewrite| rewrite.text)
}

/// Same as [`optimize_clause`], also counting the calls that were wrapped.
///
/// Helper calls such as `has_role(auth.uid(), ...)` are rewritten first, then
/// every remaining bare `auth.uid()` that is not already directly inside
/// `(SELECT `. Both passes wrap the same text, so their order does not change
/// the output.
pub fn optimize_clause_with_stats(clause: Option<&str>) -> Option<ClauseRewrite> {
    let clause = clause.filter(|c| !c.is_empty())?;
    let mut wrapped_calls = 0usize;

    let helpers_wrapped = HELPER_CALL.replace_all(clause, |caps: &Captures<'_>| {
        wrapped_calls += 1;
        format!("{}({WRAPPED_UID}", &caps[1])
    });

    let haystack: &str = &helpers_wrapped;
    let text = AUTH_UID
        .replace_all(haystack, |caps: &Captures<'_>| {
            let already_wrapped = caps
                .get(0)
                .is_some_and(|m| haystack[..m.start()].ends_with(SUBQUERY_PREFIX));
            if already_wrapped {
                caps[0].to_string()
            } else {
                wrapped_calls += 1;
                WRAPPED_UID.to_string()
            }
        })
        .into_owned();

    Some(ClauseRewrite {
        text,
        wrapped_calls,
    })
}
