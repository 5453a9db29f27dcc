//! Error taxonomy shared by every dialect.

use thiserror::Error;

/// Errors raised by dialect text and schema transformations.
///
/// All of these are deterministic transformation failures raised
/// synchronously from the failing call; retrying with the same input
/// fails identically, so none are retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialectError {
    /// An expected token was absent during statement parsing.
    #[error("expected {expected} at token {position}")]
    Syntax {
        /// The expected lexeme.
        expected: String,
        /// The token cursor position at the failure.
        position: usize,
    },

    /// A conflict column does not appear in the insert column list.
    #[error("conflict column '{field}' is not in the insert column list")]
    ConflictFieldUnknown {
        /// The offending conflict column.
        field: String,
    },

    /// A simple type has no column type mapping in the dialect.
    #[error("no column type mapping for '{type_name}'")]
    UnsupportedType {
        /// Display name of the unmapped type.
        type_name: String,
    },

    /// A foreign-key reference names a type the registry cannot resolve.
    #[error("unresolved type reference '{reference}'")]
    UnknownTypeReference {
        /// The unresolved reference.
        reference: String,
    },
}

/// Result alias for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;
