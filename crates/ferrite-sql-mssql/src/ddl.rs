//! Schema-driven `CREATE TABLE` generation.
//!
//! Walks an entity's declared fields in order and emits the column list
//! plus the collected foreign-key and uniqueness constraints. Entity
//! references are flattened to a single `<name>_id` column (one level of
//! denormalization, never a recursive resolve of the referenced entity).

use ferrite_sql_core::error::{DialectError, Result};
use ferrite_sql_core::schema::{
    sql_name, Field, FieldType, FormatHint, SchemaEntity, SimpleType, TypeRegistry,
};

/// Column type used for UUIDs and flattened entity references.
const UUID_COLUMN: &str = "varchar(36)";

/// Generates `create table` DDL for an entity.
pub(crate) fn create_table_sql(
    entity: &SchemaEntity,
    registry: &dyn TypeRegistry,
) -> Result<String> {
    let mut columns: Vec<String> = Vec::new();
    let mut constraints: Vec<String> = Vec::new();
    for field in &entity.fields {
        let column = sql_name(&field.name);
        let mut line = match &field.ty {
            FieldType::Reference(_) => format!("\t{column}_id {UUID_COLUMN}"),
            FieldType::Simple(_) => format!("\t{column} {}", column_type(field)?),
        };
        if let Some(reference) = &field.foreign_key {
            if let Some(constraint) = foreign_key_constraint(&column, reference, registry)? {
                constraints.push(constraint);
            }
        }
        if field.name == "id" {
            line.push_str(" primary key");
        } else if field.is_required() {
            line.push_str(" not null");
        }
        if field.unique {
            constraints.push(format!(
                "\tconstraint {column}_unique unique ({})",
                field.name
            ));
        }
        columns.push(line);
    }
    let mut sql = format!("create table {} (\n", entity.table_name());
    sql.push_str(&columns.join(",\n"));
    if !constraints.is_empty() {
        sql.push_str(",\n");
        sql.push_str(&constraints.join(",\n"));
    }
    sql.push_str("\n);");
    Ok(sql)
}

/// Builds a foreign-key constraint from a `type:column` reference.
///
/// References without exactly one `:` separator are ignored, matching the
/// lenient shape of the upstream schema annotations; the referenced type
/// must resolve through the registry.
fn foreign_key_constraint(
    column: &str,
    reference: &str,
    registry: &dyn TypeRegistry,
) -> Result<Option<String>> {
    let parts: Vec<&str> = reference.split(':').collect();
    let &[target, target_column] = parts.as_slice() else {
        return Ok(None);
    };
    let entity = registry
        .resolve(target)
        .ok_or_else(|| DialectError::UnknownTypeReference {
            reference: target.to_owned(),
        })?;
    Ok(Some(format!(
        "\tconstraint {column} foreign key references {}({target_column})",
        entity.table_name()
    )))
}

/// The column type for a field.
pub(crate) fn column_type(field: &Field) -> Result<String> {
    match &field.ty {
        FieldType::Reference(_) => Ok(UUID_COLUMN.to_owned()),
        FieldType::Simple(simple) => predefined_type(simple, field.format)
            .map(ToOwned::to_owned)
            .ok_or_else(|| DialectError::UnsupportedType {
                type_name: simple.to_string(),
            }),
    }
}

/// The fixed simple-type mapping table.
fn predefined_type(simple: &SimpleType, format: Option<FormatHint>) -> Option<&'static str> {
    match simple {
        SimpleType::Text | SimpleType::CharArray | SimpleType::Uri | SimpleType::Enum => {
            Some("varchar(max)")
        }
        SimpleType::Bytes => Some("varbinary"),
        SimpleType::Int => Some("int"),
        SimpleType::Long => Some("bigint"),
        SimpleType::BigInteger => Some("numeric(38, 0)"),
        SimpleType::BigDecimal => Some("decimal(38, 10)"),
        SimpleType::Double => Some("float(53)"),
        SimpleType::Float => Some("float(24)"),
        SimpleType::Short => Some("shortinteger"),
        SimpleType::Boolean => Some("bit"),
        SimpleType::Uuid => Some(UUID_COLUMN),
        SimpleType::Date => Some(match format {
            Some(FormatHint::Date) => "date",
            Some(FormatHint::Time) => "time",
            _ => "datetime2",
        }),
        SimpleType::Custom(_) => None,
    }
}
