//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] avrodc_schema::ParseError),

    /// Registry error.
    #[error("schema error: {0}")]
    Schema(#[from] avrodc_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Union that is not `[null, T]`.
    #[error(
        "unsupported union with {count} alternatives (first is '{first_kind}'); only [\"null\", T] is supported"
    )]
    UnsupportedUnionShape {
        /// Number of alternatives.
        count: usize,
        /// Kind of the first alternative.
        first_kind: String,
    },

    /// Record defined inline as a field type.
    #[error("nested record '{name}' cannot be used as a field type; define it separately and refer to it by name")]
    UnsupportedNestedRecord {
        /// Fullname of the nested record.
        name: String,
    },

    /// Named records referring to each other in a cycle.
    #[error("cyclic schema reference: {path}")]
    CyclicSchema {
        /// Reference path, ending at the repeated name.
        path: String,
    },

    /// Schema type with no mapping.
    #[error("unsupported {kind} type '{name}'")]
    UnsupportedType {
        /// Kind of the type.
        kind: String,
        /// Name of the type.
        name: String,
    },

    /// Default value with no exact Python literal.
    #[error("default value {value} cannot be expressed as a Python literal")]
    UnrepresentableDefault {
        /// Offending value.
        value: String,
    },

    /// Schema name that is a reserved word in Python.
    #[error("{kind} name '{name}' is a Python keyword")]
    ReservedIdentifier {
        /// What the name is used for (`class` or `field`).
        kind: String,
        /// Offending name, as it would appear in the output.
        name: String,
    },

    /// Generation target that is not a record.
    #[error("top-level schema is '{kind}', expected a record")]
    NotARecord {
        /// Kind of the top-level schema.
        kind: String,
    },

    /// Error within a specific record field.
    #[error("in field '{field}' of record '{record}'")]
    InField {
        /// Record fullname.
        record: String,
        /// Field name.
        field: String,
        /// Underlying error.
        #[source]
        source: Box<CodegenError>,
    },

    /// Error within a specific schema document.
    #[error("in schema document '{}'", path.display())]
    Document {
        /// Document path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: Box<CodegenError>,
    },
}

impl CodegenError {
    /// Creates an unsupported type error.
    pub fn unsupported_type(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Attaches record and field context to the error.
    #[must_use]
    pub fn in_field(self, record: impl Into<String>, field: impl Into<String>) -> Self {
        Self::InField {
            record: record.into(),
            field: field.into(),
            source: Box::new(self),
        }
    }

    /// Attaches the document path to the error.
    #[must_use]
    pub fn in_document(self, path: impl Into<PathBuf>) -> Self {
        Self::Document {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, without record, field or document
    /// context.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::InField { source, .. } | Self::Document { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
