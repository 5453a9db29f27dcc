//! Portable upsert statement parsing.
//!
//! Recognizes the fixed grammar
//!
//! ```text
//! insert into <table> ( <field> [, <field>]* )
//! values ( <value> [, <value>]* ) [, ( ... )]*
//! on conflict ( <field> [, <field>]* )
//! do update set <verbatim token stream>
//! ```
//!
//! with a single forward-only token cursor. The VALUES loop carries an
//! explicit row-open flag: `(` opens a row, `)` closes it, `,` separates,
//! and any other token seen while no row is open ends the value listing.
//! A `:` marks the following value as bound by name; it is stored
//! re-tagged as `:name` so the emitter can tell named from positional
//! bindings. Conflict columns are checked against the insert column list
//! at parse time so a merge is never built on a column it does not
//! insert.

use ferrite_sql_core::error::{DialectError, Result};
use ferrite_sql_core::lexer::Token;
use tracing::debug;

/// A parsed portable upsert statement.
///
/// Lives only between parsing and MERGE emission.
#[derive(Debug)]
pub(crate) struct UpsertStatement {
    /// Target table name.
    pub table: String,
    /// Insert columns, in declared order.
    pub fields: Vec<String>,
    /// Value rows; named values carry a leading `:`.
    pub rows: Vec<Vec<String>>,
    /// Conflict columns, in declared order; always a subset of `fields`.
    pub conflicts: Vec<String>,
    /// The `do update set` tail, verbatim.
    pub update_tokens: Vec<String>,
}

/// Forward-only cursor over the token sequence.
struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Cursor<'_> {
    /// Consumes the expected lexeme or fails with its position.
    fn expect(&mut self, expected: &str) -> Result<()> {
        if self.peek_is(expected) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn peek_is(&self, expected: &str) -> bool {
        self.tokens
            .get(self.pos)
            .is_some_and(|token| token.matches(expected))
    }

    /// Consumes the lexeme if present.
    fn take(&mut self, expected: &str) -> bool {
        let hit = self.peek_is(expected);
        if hit {
            self.pos += 1;
        }
        hit
    }

    /// Consumes any token and returns its text.
    fn next_text(&mut self, expected: &str) -> Result<String> {
        let token = self
            .tokens
            .get(self.pos)
            .ok_or_else(|| self.unexpected(expected))?;
        self.pos += 1;
        Ok(token.text.clone())
    }

    fn unexpected(&self, expected: &str) -> DialectError {
        DialectError::Syntax {
            expected: expected.to_owned(),
            position: self.pos,
        }
    }

    fn exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}

/// Parses a token sequence as a portable upsert statement.
pub(crate) fn parse_upsert(tokens: &[Token]) -> Result<UpsertStatement> {
    let mut cursor = Cursor { tokens, pos: 0 };
    cursor.expect("insert")?;
    cursor.expect("into")?;
    let table = cursor.next_text("a table name")?;
    debug!(table = %table, "parsing upsert");

    cursor.expect("(")?;
    let mut fields: Vec<String> = Vec::new();
    while !cursor.exhausted() {
        if cursor.take(")") {
            break;
        }
        if !fields.is_empty() {
            cursor.expect(",")?;
        }
        fields.push(cursor.next_text("a column name")?);
    }
    debug!(?fields, "insert column list");

    cursor.expect("values")?;
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row_open = false;
    let mut named = false;
    while let Some(token) = cursor.tokens.get(cursor.pos) {
        if token.matches("(") {
            if row_open {
                return Err(cursor.unexpected("')' closing the previous value row"));
            }
            cursor.pos += 1;
            rows.push(Vec::new());
            row_open = true;
        } else if token.matches(")") {
            cursor.pos += 1;
            row_open = false;
        } else if token.matches(",") {
            if rows.is_empty() {
                return Err(cursor.unexpected("'(' opening a value row"));
            }
            cursor.pos += 1;
        } else if token.matches(":") {
            named = true;
            cursor.pos += 1;
        } else if !row_open {
            // any other token outside a row ends the value listing
            break;
        } else {
            let text = token.text.clone();
            cursor.pos += 1;
            if let Some(row) = rows.last_mut() {
                if named {
                    row.push(format!(":{text}"));
                    named = false;
                } else {
                    row.push(text);
                }
            }
        }
    }
    debug!(?rows, "value rows");

    cursor.expect("on")?;
    cursor.expect("conflict")?;
    cursor.expect("(")?;
    let mut conflicts: Vec<String> = Vec::new();
    while !cursor.exhausted() {
        if cursor.take(")") {
            break;
        }
        if !conflicts.is_empty() {
            cursor.expect(",")?;
        }
        let conflict = cursor.next_text("a conflict column")?;
        if !fields.contains(&conflict) {
            return Err(DialectError::ConflictFieldUnknown { field: conflict });
        }
        conflicts.push(conflict);
    }
    debug!(?conflicts, "conflict columns");

    cursor.expect("do")?;
    cursor.expect("update")?;
    cursor.expect("set")?;
    let update_tokens = cursor.tokens[cursor.pos..]
        .iter()
        .map(|token| token.text.clone())
        .collect();

    Ok(UpsertStatement {
        table,
        fields,
        rows,
        conflicts,
        update_tokens,
    })
}
