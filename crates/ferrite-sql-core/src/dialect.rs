//! The dialect seam.
//!
//! A dialect is a set of text-generation rules mapping portable statement
//! shapes and the abstract schema model to one database vendor's concrete
//! syntax.

use crate::error::Result;
use crate::schema::{Field, Record, SchemaEntity, TypeRegistry};

/// Text-generation rules for one database vendor.
///
/// Every operation is a pure, synchronous transformation over its inputs;
/// implementations hold no mutable state and may be shared freely across
/// threads.
pub trait Dialect {
    /// The dialect name.
    fn name(&self) -> &'static str;

    /// Rewrites a portable SQL statement into this dialect's syntax.
    ///
    /// SQL that needs no rewriting is returned unchanged.
    fn rewrite(&self, sql: &str) -> Result<String>;

    /// Appends pagination clauses for the requested offset and fetch
    /// count. A no-op when neither is given.
    fn limit(&self, sql: &str, offset: Option<u64>, limit: Option<u32>) -> String;

    /// Generates `CREATE TABLE` DDL for an entity, resolving foreign-key
    /// references through the registry.
    fn create_table_sql(
        &self,
        entity: &SchemaEntity,
        registry: &dyn TypeRegistry,
    ) -> Result<String>;

    /// Generates an `INSERT` statement for one record.
    fn insert_sql(&self, record: &Record<'_>) -> String;

    /// The column type for a field.
    fn column_type(&self, field: &Field) -> Result<String>;

    /// Whether the dialect can bind array parameters for a field.
    fn supports_arrays(&self, field: &Field) -> bool;
}
