//! Upsert-to-MERGE statement rewriting.
//!
//! T-SQL has no `insert … on conflict` form and no boolean literals. The
//! rewriter first folds standalone `true`/`false` into `1`/`0`, then
//! probes the statement for the portable upsert shape; on a hit it is
//! re-emitted as a `merge` over a `union all` row source, otherwise the
//! statement passes through unchanged.
//!
//! The probe and the update-clause alias injection are textual
//! heuristics. Field names in the update clause are matched as whole
//! tokens without re-parsing the expression, so a field name that also
//! occurs inside a string literal there would be aliased as well.

use ferrite_sql_core::error::Result;
use ferrite_sql_core::lexer::Lexer;
use regex::Regex;
use tracing::debug;

use crate::upsert::{parse_upsert, UpsertStatement};

/// Alias given to the merge target table.
const TARGET_ALIAS: &str = "tt";
/// Alias given to the row source, mirroring the portable `excluded`
/// pseudo-table so the update clause keeps working verbatim.
const SOURCE_ALIAS: &str = "excluded";

/// Rewrites a portable statement into T-SQL.
pub(crate) fn rewrite(sql: &str) -> Result<String> {
    let sql = rewrite_booleans(sql);
    let upsert_shape =
        Regex::new(r"(?is)^\s*\binsert into\b.*\bon conflict\b.*\bdo update\b.*$").unwrap();
    if !upsert_shape.is_match(&sql) {
        return Ok(sql);
    }
    let tokens = Lexer::new(&sql).tokenize();
    let statement = parse_upsert(&tokens)?;
    Ok(emit_merge(&statement))
}

/// Folds standalone boolean literals into the numeric form.
fn rewrite_booleans(sql: &str) -> String {
    let true_literal = Regex::new(r"\btrue\b").unwrap();
    let false_literal = Regex::new(r"\bfalse\b").unwrap();
    let sql = true_literal.replace_all(sql, "1");
    false_literal.replace_all(&sql, "0").into_owned()
}

/// Emits the MERGE statement for a parsed upsert.
fn emit_merge(statement: &UpsertStatement) -> String {
    debug!(alias = TARGET_ALIAS, "merge target alias");
    let mut sql = format!("merge into {} {TARGET_ALIAS} using (", statement.table);
    for (index, row) in statement.rows.iter().enumerate() {
        if index == 0 {
            sql.push_str("select ");
        } else {
            sql.push_str(" union all select ");
        }
        for (column, (value, field)) in row.iter().zip(&statement.fields).enumerate() {
            if column > 0 {
                sql.push_str(", ");
            }
            sql.push_str(value);
            sql.push_str(" as ");
            sql.push_str(field);
        }
        sql.push_str(" from dual");
    }
    sql.push_str(&format!(") {SOURCE_ALIAS} on ("));
    for (index, conflict) in statement.conflicts.iter().enumerate() {
        if index > 0 {
            sql.push_str(" and ");
        }
        sql.push_str(&format!(
            "{TARGET_ALIAS}.{conflict} = {SOURCE_ALIAS}.{conflict}"
        ));
    }
    sql.push_str(") when matched then update set");
    for token in &statement.update_tokens {
        if token != "," {
            sql.push(' ');
        }
        // a bare field name refers to the target side; qualify it
        if statement.fields.contains(token) {
            sql.push_str(&format!("{TARGET_ALIAS}.{token}"));
        } else {
            sql.push_str(token);
        }
    }
    sql.push_str(" when not matched then insert (");
    for (index, field) in statement.fields.iter().enumerate() {
        if index > 0 {
            sql.push_str(", ");
        }
        sql.push_str(&format!("{TARGET_ALIAS}.{field}"));
    }
    sql.push_str(") values (");
    for (index, field) in statement.fields.iter().enumerate() {
        if index > 0 {
            sql.push_str(", ");
        }
        sql.push_str(&format!("{SOURCE_ALIAS}.{field}"));
    }
    sql.push(')');
    sql
}
