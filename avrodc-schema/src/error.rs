//! Error types for schema parsing and name resolution.

use thiserror::Error;

/// Error type for schema document parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on {element}")]
    MissingAttribute {
        /// Schema element kind (record, field, enum, ...).
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Invalid attribute value.
    #[error("invalid value '{value}' for attribute '{attribute}' on {element}")]
    InvalidAttribute {
        /// Schema element kind.
        element: String,
        /// Attribute name.
        attribute: String,
        /// Invalid value.
        value: String,
    },

    /// Type name that is neither a primitive nor a complex type keyword.
    #[error("unknown type '{type_name}' in {context}")]
    UnknownType {
        /// Type name.
        type_name: String,
        /// Where the type was found.
        context: String,
    },

    /// Invalid union definition.
    #[error("invalid union: {message}")]
    InvalidUnion {
        /// Error message.
        message: String,
    },

    /// Invalid schema structure.
    #[error("invalid schema structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// Registry error raised while registering or resolving a named type.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Error type for named-type registry operations.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A named type with the same fullname is already registered.
    #[error("duplicate named type '{name}'")]
    DuplicateName {
        /// Fully-qualified name.
        name: String,
    },

    /// A referenced name is not registered.
    #[error("unknown named type '{name}'")]
    NameResolution {
        /// Fully-qualified name that failed to resolve.
        name: String,
    },

    /// Only named types (record, enum, fixed) can be registered.
    #[error("cannot register unnamed {kind} schema")]
    NotNamed {
        /// Kind of the rejected node.
        kind: &'static str,
    },
}

impl ParseError {
    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid attribute error.
    pub fn invalid_attr(
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            element: element.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Creates an unknown type error.
    pub fn unknown_type(type_name: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
            context: context.into(),
        }
    }

    /// Creates an invalid union error.
    pub fn invalid_union(message: impl Into<String>) -> Self {
        Self::InvalidUnion {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_messages() {
        let err = ParseError::missing_attr("record", "name");
        assert_eq!(
            err.to_string(),
            "missing required attribute 'name' on record"
        );

        let err = ParseError::invalid_attr("fixed", "size", "-1");
        assert_eq!(
            err.to_string(),
            "invalid value '-1' for attribute 'size' on fixed"
        );
    }

    #[test]
    fn test_schema_error_is_transparent_in_parse_error() {
        let err: ParseError = SchemaError::DuplicateName {
            name: "com.example.Person".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "duplicate named type 'com.example.Person'");
    }
}
