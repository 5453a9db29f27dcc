//! Abstract typed schema model.
//!
//! Entities describe the shape the DDL and INSERT generators consume:
//! ordered field declarations with simple types, references, occurrence
//! and uniqueness constraints. The model is caller-owned and read-only
//! during generation.

mod record;
mod registry;

pub use record::Record;
pub use registry::{MapRegistry, TypeRegistry};

use convert_case::{Case, Casing};

/// Converts a schema name (usually camelCase) to its SQL form.
#[must_use]
pub fn sql_name(name: &str) -> String {
    name.to_case(Case::Snake)
}

/// Abstract simple types, mapped to column types by each dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleType {
    /// Unbounded text.
    Text,
    /// Character array.
    CharArray,
    /// URI, stored as text.
    Uri,
    /// Enumeration, stored as text.
    Enum,
    /// Byte sequence.
    Bytes,
    /// 32-bit integer.
    Int,
    /// 64-bit integer.
    Long,
    /// Arbitrary-precision integer.
    BigInteger,
    /// Arbitrary-precision decimal.
    BigDecimal,
    /// 64-bit float.
    Double,
    /// 32-bit float.
    Float,
    /// 16-bit integer.
    Short,
    /// Boolean.
    Boolean,
    /// UUID.
    Uuid,
    /// Date-like value; narrowed by a [`FormatHint`].
    Date,
    /// A caller-defined type with no predefined dialect mapping.
    Custom(String),
}

impl core::fmt::Display for SimpleType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::CharArray => "char-array",
            Self::Uri => "uri",
            Self::Enum => "enum",
            Self::Bytes => "bytes",
            Self::Int => "int",
            Self::Long => "long",
            Self::BigInteger => "big-integer",
            Self::BigDecimal => "big-decimal",
            Self::Double => "double",
            Self::Float => "float",
            Self::Short => "short",
            Self::Boolean => "boolean",
            Self::Uuid => "uuid",
            Self::Date => "date",
            Self::Custom(name) => name.as_str(),
        };
        f.write_str(name)
    }
}

/// Narrows the generic [`SimpleType::Date`] to one representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatHint {
    /// Date only.
    Date,
    /// Time of day only.
    Time,
    /// Full timestamp.
    Timestamp,
}

/// A field is either simple-typed or a reference to another entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// A simple-typed column.
    Simple(SimpleType),
    /// Reference to another entity by type name. Dialects flatten this to
    /// a single id column rather than joining the referenced entity in.
    Reference(String),
}

/// One declared schema field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Declared field name.
    pub name: String,
    /// Simple type or entity reference.
    pub ty: FieldType,
    /// Minimum occurrence count; absent counts as required.
    pub min_occurs: Option<u32>,
    /// Whether the field carries a uniqueness constraint.
    pub unique: bool,
    /// Foreign-key reference in `type:column` form, resolved against a
    /// [`TypeRegistry`] at generation time.
    pub foreign_key: Option<String>,
    /// Representation hint for date-like fields.
    pub format: Option<FormatHint>,
}

impl Field {
    /// Creates a simple-typed field.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: SimpleType) -> Self {
        Self {
            name: name.into(),
            ty: FieldType::Simple(ty),
            min_occurs: None,
            unique: false,
            foreign_key: None,
            format: None,
        }
    }

    /// Creates a field referencing another entity.
    #[must_use]
    pub fn reference(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: FieldType::Reference(target.into()),
            min_occurs: None,
            unique: false,
            foreign_key: None,
            format: None,
        }
    }

    /// Marks the field optional (`min_occurs = 0`).
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.min_occurs = Some(0);
        self
    }

    /// Sets an explicit minimum occurrence count.
    #[must_use]
    pub fn min_occurs(mut self, count: u32) -> Self {
        self.min_occurs = Some(count);
        self
    }

    /// Marks the field unique.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Declares a `type:column` foreign key.
    #[must_use]
    pub fn foreign_key(mut self, reference: impl Into<String>) -> Self {
        self.foreign_key = Some(reference.into());
        self
    }

    /// Narrows a date field to one representation.
    #[must_use]
    pub fn format(mut self, hint: FormatHint) -> Self {
        self.format = Some(hint);
        self
    }

    /// A field is required unless `min_occurs` is explicitly zero.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.min_occurs.map_or(true, |count| count > 0)
    }
}

/// A schema entity: a named, ordered collection of fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntity {
    /// Type name of the entity.
    pub name: String,
    /// Explicit collection (table) name; the type name is used otherwise.
    pub collection: Option<String>,
    /// Ordered field declarations.
    pub fields: Vec<Field>,
}

impl SchemaEntity {
    /// Creates an entity with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collection: None,
            fields: Vec::new(),
        }
    }

    /// Sets the collection (table) name.
    #[must_use]
    pub fn collection(mut self, name: impl Into<String>) -> Self {
        self.collection = Some(name.into());
        self
    }

    /// Appends a field declaration.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// The SQL table name: the collection name when set, the type name
    /// otherwise, converted to its SQL form.
    #[must_use]
    pub fn table_name(&self) -> String {
        sql_name(self.collection.as_deref().unwrap_or(&self.name))
    }
}
