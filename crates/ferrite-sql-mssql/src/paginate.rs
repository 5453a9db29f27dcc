//! Pagination clause synthesis.
//!
//! T-SQL only accepts `OFFSET`/`FETCH` after an `ORDER BY`, and a fetch
//! count requires an explicit offset. Parenthesized regions are stripped
//! with a greedy single-line regex before scanning for an existing
//! `order by`; this is a documented approximation, not a full parse.

use regex::Regex;

/// Appends `ORDER BY` / `OFFSET` / `FETCH` clauses as requested.
pub(crate) fn limit(sql: &str, offset: Option<u64>, limit: Option<u32>) -> String {
    let mut sql = sql.to_owned();
    if (offset.is_some() || limit.is_some()) && !has_order_by(&sql) {
        sql.push_str(" ORDER BY 1");
    }
    // a fetch count is only valid with an explicit offset
    let offset = match (offset, limit) {
        (None, Some(_)) => Some(0),
        _ => offset,
    };
    if let Some(offset) = offset {
        sql.push_str(&format!(" OFFSET {offset} ROWS"));
    }
    if let Some(limit) = limit {
        sql.push_str(&format!(" FETCH NEXT {limit} ROWS ONLY"));
    }
    sql
}

/// Scans for an `order by` outside parenthesized sub-expressions.
fn has_order_by(sql: &str) -> bool {
    let parenthesized = Regex::new(r"\(.*\)").unwrap();
    parenthesized
        .replace_all(sql, "")
        .to_lowercase()
        .contains("order by")
}
