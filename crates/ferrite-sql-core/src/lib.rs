//! # ferrite-sql-core
//!
//! Dialect-independent building blocks for SQL dialect adapters:
//!
//! - a hand-written, total SQL tokenizer ([`lexer`])
//! - an abstract typed schema model ([`schema`])
//! - the runtime [`Value`] model carried by records
//! - the [`Dialect`] trait every vendor adapter implements
//!
//! Dialect crates (such as `ferrite-sql-mssql`) consume these to rewrite
//! portable statements and to generate vendor-specific DDL.
//!
//! ```rust
//! use ferrite_sql_core::lexer::Lexer;
//!
//! let tokens = Lexer::new("select id from users").tokenize();
//! assert_eq!(tokens.len(), 4);
//! assert!(tokens[0].matches("SELECT"));
//! ```

pub mod dialect;
pub mod error;
pub mod lexer;
pub mod schema;
pub mod value;

pub use dialect::Dialect;
pub use error::{DialectError, Result};
pub use lexer::{Lexer, Span, Token, TokenKind};
pub use schema::{
    Field, FieldType, FormatHint, MapRegistry, Record, SchemaEntity, SimpleType, TypeRegistry,
};
pub use value::Value;
