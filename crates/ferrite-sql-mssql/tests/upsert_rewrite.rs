//! End-to-end statement rewriting through the `Dialect` trait.

use ferrite_sql_core::error::DialectError;
use ferrite_sql_core::Dialect;
use ferrite_sql_mssql::MssqlDialect;

#[test]
fn test_multi_row_upsert_rewrites_to_merge() {
    let dialect = MssqlDialect::new();
    let sql = dialect
        .rewrite("insert into t (a,b) values (1,2),(3,4) on conflict (a) do update set b = excluded.b")
        .unwrap();
    assert_eq!(
        sql,
        "merge into t tt using (select 1 as a, 2 as b from dual \
         union all select 3 as a, 4 as b from dual) excluded \
         on (tt.a = excluded.a) \
         when matched then update set tt.b = excluded.b \
         when not matched then insert (tt.a, tt.b) values (excluded.a, excluded.b)"
    );
}

#[test]
fn test_insert_columns_match_the_original_field_list() {
    let dialect = MssqlDialect::new();
    let sql = dialect
        .rewrite(
            "insert into orders (id, total, state) values (:id, :total, :state) \
             on conflict (id) do update set state = excluded.state",
        )
        .unwrap();
    assert!(sql.contains("using (select :id as id, :total as total, :state as state from dual)"));
    assert!(sql.contains("insert (tt.id, tt.total, tt.state)"));
    assert!(sql.contains("values (excluded.id, excluded.total, excluded.state)"));
}

#[test]
fn test_unknown_conflict_column_is_a_semantic_error() {
    let dialect = MssqlDialect::new();
    let err = dialect
        .rewrite("insert into t (a,b) values (1,2) on conflict (missing) do update set b = 1")
        .unwrap_err();
    assert_eq!(
        err,
        DialectError::ConflictFieldUnknown {
            field: String::from("missing"),
        }
    );
}

#[test]
fn test_sql_without_the_upsert_shape_passes_through() {
    let dialect = MssqlDialect::new();
    let sql = "delete from sessions where expired_at < getdate()";
    assert_eq!(dialect.rewrite(sql).unwrap(), sql);
}

#[test]
fn test_boolean_literals_fold_in_any_statement() {
    let dialect = MssqlDialect::new();
    assert_eq!(
        dialect.rewrite("select * from users where active = true").unwrap(),
        "select * from users where active = 1"
    );
}

#[test]
fn test_pagination_contract() {
    let dialect = MssqlDialect::new();

    let paged = dialect.limit("select * from t", None, Some(10));
    assert!(paged.contains("ORDER BY 1"));
    assert!(paged.contains("OFFSET 0 ROWS"));
    assert!(paged.contains("FETCH NEXT 10 ROWS ONLY"));

    let offset_only = dialect.limit("select * from t order by x", Some(5), None);
    assert!(!offset_only.contains("ORDER BY 1"));
    assert!(offset_only.contains("OFFSET 5 ROWS"));
    assert!(!offset_only.contains("FETCH"));
}
