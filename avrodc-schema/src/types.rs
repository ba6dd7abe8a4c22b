//! Schema type definitions.
//!
//! This module contains the in-memory representation of the Avro type
//! algebra: primitives, records and their fields, unions, arrays, maps,
//! enums, fixed types, and references to previously registered named types.

use crate::name::Name;
use serde_json::Value;

/// A node of the schema type algebra.
///
/// The variant set is closed; consumers are expected to match on it
/// exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// Primitive type.
    Primitive(PrimitiveType),
    /// Record definition.
    Record(RecordSchema),
    /// Enum definition.
    Enum(EnumSchema),
    /// Fixed-size byte sequence definition.
    Fixed(FixedSchema),
    /// Union of alternatives, in declaration order.
    Union(Vec<SchemaNode>),
    /// Array of items.
    Array(Box<SchemaNode>),
    /// Map from string keys to values.
    Map(Box<SchemaNode>),
    /// Reference to a registered named type, by fullname.
    Reference(String),
}

impl SchemaNode {
    /// Returns a short description of the node kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Primitive(p) => p.avro_name(),
            Self::Record(_) => "record",
            Self::Enum(_) => "enum",
            Self::Fixed(_) => "fixed",
            Self::Union(_) => "union",
            Self::Array(_) => "array",
            Self::Map(_) => "map",
            Self::Reference(_) => "reference",
        }
    }

    /// Returns the name of a named type definition.
    #[must_use]
    pub fn name(&self) -> Option<&Name> {
        match self {
            Self::Record(r) => Some(&r.name),
            Self::Enum(e) => Some(&e.name),
            Self::Fixed(f) => Some(&f.name),
            _ => None,
        }
    }

    /// Returns true if this is the `null` primitive.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Primitive(PrimitiveType::Null))
    }

    /// Returns the record definition if this node is a record.
    #[must_use]
    pub const fn as_record(&self) -> Option<&RecordSchema> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the optional branch if this is a `[null, T]` union.
    #[must_use]
    pub fn optional_inner(&self) -> Option<&SchemaNode> {
        match self {
            Self::Union(alternatives) if alternatives.len() == 2 && alternatives[0].is_null() => {
                Some(&alternatives[1])
            }
            _ => None,
        }
    }
}

/// Avro primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// No value.
    Null,
    /// Unicode character sequence.
    String,
    /// Sequence of 8-bit bytes.
    Bytes,
    /// 64-bit signed integer.
    Long,
    /// 32-bit signed integer.
    Int,
    /// Single precision floating point.
    Float,
    /// Double precision floating point.
    Double,
    /// Binary value.
    Boolean,
}

impl PrimitiveType {
    /// Every primitive kind, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Null,
        Self::String,
        Self::Bytes,
        Self::Long,
        Self::Int,
        Self::Float,
        Self::Double,
        Self::Boolean,
    ];

    /// Returns the Avro type name.
    #[must_use]
    pub const fn avro_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Long => "long",
            Self::Int => "int",
            Self::Float => "float",
            Self::Double => "double",
            Self::Boolean => "boolean",
        }
    }

    /// Parses a primitive type from its Avro name.
    #[must_use]
    pub fn from_avro_name(name: &str) -> Option<Self> {
        match name {
            "null" => Some(Self::Null),
            "string" => Some(Self::String),
            "bytes" => Some(Self::Bytes),
            "long" => Some(Self::Long),
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            "boolean" => Some(Self::Boolean),
            _ => None,
        }
    }
}

/// Record type definition.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    /// Record name.
    pub name: Name,
    /// Fields, in declaration order.
    pub fields: Vec<Field>,
    /// Documentation.
    pub doc: Option<String>,
}

impl RecordSchema {
    /// Creates a new record definition with no fields.
    #[must_use]
    pub fn new(name: Name) -> Self {
        Self {
            name,
            fields: Vec::new(),
            doc: None,
        }
    }

    /// Adds a field to the record.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Field within a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Field type.
    pub schema: SchemaNode,
    /// Default value, as written in the schema document.
    pub default: Option<Value>,
    /// Documentation.
    pub doc: Option<String>,
}

impl Field {
    /// Creates a new field without default or documentation.
    #[must_use]
    pub fn new(name: impl Into<String>, schema: SchemaNode) -> Self {
        Self {
            name: name.into(),
            schema,
            default: None,
            doc: None,
        }
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Returns true if the field declares a default, including `null`.
    #[must_use]
    pub const fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// Enum type definition.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumSchema {
    /// Enum name.
    pub name: Name,
    /// Symbols, in declaration order.
    pub symbols: Vec<String>,
    /// Documentation.
    pub doc: Option<String>,
    /// Default symbol.
    pub default: Option<String>,
}

/// Fixed type definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedSchema {
    /// Fixed name.
    pub name: Name,
    /// Size in bytes.
    pub size: usize,
}
