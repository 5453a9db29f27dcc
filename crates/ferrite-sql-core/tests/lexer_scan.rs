//! Lexing whole statements through the public API.

use ferrite_sql_core::lexer::{Lexer, TokenKind};

fn texts(sql: &str) -> Vec<String> {
    Lexer::new(sql)
        .tokenize()
        .into_iter()
        .map(|token| token.text)
        .collect()
}

#[test]
fn test_tokenizes_a_full_upsert_statement() {
    let tokens = texts(
        "insert into orders (id, total) values (:id, 12.50) \
         on conflict (id) do update set total = excluded.total",
    );
    assert_eq!(
        tokens,
        vec![
            "insert", "into", "orders", "(", "id", ",", "total", ")", "values", "(", ":", "id",
            ",", "12.50", ")", "on", "conflict", "(", "id", ")", "do", "update", "set", "total",
            "=", "excluded.total",
        ]
    );
}

#[test]
fn test_string_literals_survive_with_quotes_and_escapes() {
    let tokens = texts("update t set note = 'it''s fine' where id = 3");
    assert!(tokens.contains(&String::from("'it''s fine'")));
}

#[test]
fn test_lexing_is_total_over_garbage_input() {
    let tokens = Lexer::new("@@ §§ 'unterminated").tokenize();
    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[4].text, "'unterminated");
    assert_eq!(tokens[4].kind, TokenKind::Literal);
}

#[test]
fn test_comparison_operators_in_where_clauses() {
    let tokens = texts("select * from t where a <= 5 and b <> 'x'");
    assert!(tokens.contains(&String::from("<=")));
    assert!(tokens.contains(&String::from("<>")));
}

#[test]
fn test_spans_index_back_into_the_source() {
    let sql = "select excluded.b from t";
    for token in Lexer::new(sql).tokenize() {
        assert_eq!(&sql[token.span.start..token.span.end], token.text);
    }
}
