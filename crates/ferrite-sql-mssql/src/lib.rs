//! # ferrite-sql-mssql
//!
//! The Microsoft SQL Server dialect for ferrite-sql. It rewrites portable
//! upsert statements (`insert … on conflict … do update set …`) into
//! T-SQL `MERGE`, generates `CREATE TABLE` and `INSERT` statements from
//! the abstract schema model, and appends `ORDER BY` / `OFFSET` / `FETCH`
//! pagination clauses.
//!
//! ```rust
//! use ferrite_sql_core::Dialect;
//! use ferrite_sql_mssql::MssqlDialect;
//!
//! let dialect = MssqlDialect::new();
//! let sql = dialect
//!     .rewrite("insert into t (a) values (1) on conflict (a) do update set a = excluded.a")
//!     .unwrap();
//! assert!(sql.starts_with("merge into t tt"));
//! ```

mod ddl;
mod insert;
mod merge;
mod paginate;
mod upsert;

use ferrite_sql_core::error::Result;
use ferrite_sql_core::schema::{Field, Record, SchemaEntity, TypeRegistry};
use ferrite_sql_core::Dialect;

/// The Microsoft SQL Server dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct MssqlDialect;

impl MssqlDialect {
    /// Creates a new dialect instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for MssqlDialect {
    fn name(&self) -> &'static str {
        "mssql"
    }

    fn rewrite(&self, sql: &str) -> Result<String> {
        merge::rewrite(sql)
    }

    fn limit(&self, sql: &str, offset: Option<u64>, limit: Option<u32>) -> String {
        paginate::limit(sql, offset, limit)
    }

    fn create_table_sql(
        &self,
        entity: &SchemaEntity,
        registry: &dyn TypeRegistry,
    ) -> Result<String> {
        ddl::create_table_sql(entity, registry)
    }

    fn insert_sql(&self, record: &Record<'_>) -> String {
        insert::insert_sql(record)
    }

    fn column_type(&self, field: &Field) -> Result<String> {
        ddl::column_type(field)
    }

    // array parameters need driver-side support this dialect does not have
    fn supports_arrays(&self, _field: &Field) -> bool {
        false
    }
}
