//! Schema-driven `INSERT` generation.
//!
//! Walks the entity's simple-typed fields in declared order and renders
//! each record value as a T-SQL literal. Missing and explicitly-null
//! values on required columns are defaulted deterministically (fresh
//! UUID, the statement timestamp, zero, false) instead of emitting
//! `null` into a not-null column; callers trading strict fidelity for
//! insert success need to be aware of this.

use chrono::{DateTime, Utc};
use ferrite_sql_core::schema::{sql_name, Field, FieldType, FormatHint, Record, SimpleType};
use ferrite_sql_core::value::Value;
use uuid::Uuid;

/// Generates an `insert` statement for one record.
pub(crate) fn insert_sql(record: &Record<'_>) -> String {
    // one timestamp per statement so every defaulted date column agrees
    let now = Utc::now();
    let mut columns: Vec<String> = Vec::new();
    let mut literals: Vec<String> = Vec::new();
    for field in &record.entity().fields {
        let FieldType::Simple(simple) = &field.ty else {
            continue;
        };
        columns.push(sql_name(&field.name));
        // an explicit null on a required column counts as missing
        let value = match record.get(&field.name) {
            None | Some(Value::Null) if field.is_required() => default_value(simple, now),
            value => value.cloned(),
        };
        literals.push(match value {
            None | Some(Value::Null) => String::from("null"),
            Some(value) => literal(&value, field),
        });
    }
    format!(
        "insert into {} (\n\t{}\n) values (\n\t{}\n);",
        record.entity().table_name(),
        columns.join(",\n\t"),
        literals.join(",\n\t"),
    )
}

/// Deterministic default for a missing required value.
fn default_value(simple: &SimpleType, now: DateTime<Utc>) -> Option<Value> {
    match simple {
        SimpleType::Uuid => Some(Value::Uuid(Uuid::new_v4())),
        SimpleType::Date => Some(Value::DateTime(now)),
        SimpleType::Int
        | SimpleType::Long
        | SimpleType::BigInteger
        | SimpleType::BigDecimal
        | SimpleType::Double
        | SimpleType::Float
        | SimpleType::Short => Some(Value::Int(0)),
        SimpleType::Boolean => Some(Value::Bool(false)),
        _ => None,
    }
}

/// Renders a value as a T-SQL literal.
fn literal(value: &Value, field: &Field) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(true) => String::from("1"),
        Value::Bool(false) => String::from("0"),
        Value::Int(n) => n.to_string(),
        Value::Float(x) => x.to_string(),
        Value::Text(text) => quoted(text),
        Value::Uuid(uuid) => format!("'{uuid}'"),
        Value::DateTime(when) => date_literal(*when, field.format),
        Value::Bytes(bytes) => {
            let hex: String = bytes.iter().map(|byte| format!("{byte:02x}")).collect();
            format!("0x{hex}")
        }
    }
}

/// Single-quotes a string, doubling embedded quotes.
fn quoted(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Formats a timestamp in UTC with the pattern selected by the format
/// hint and wraps it in the dialect date literal.
fn date_literal(when: DateTime<Utc>, format: Option<FormatHint>) -> String {
    match format {
        Some(FormatHint::Date) => format!("cast('{}' as date)", when.format("%Y-%m-%d")),
        Some(FormatHint::Time) => format!("cast('{}' as time)", when.format("%H:%M:%S")),
        _ => format!(
            "cast('{}' as datetime2)",
            when.format("%Y-%m-%d %H:%M:%S%.3f")
        ),
    }
}
