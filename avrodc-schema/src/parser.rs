//! Avro JSON schema parser.
//!
//! This module parses Avro schema documents (`.avsc`) into the schema model,
//! registering every named type the document defines in the shared
//! [`Registry`] and resolving every name it references against it.

use crate::error::{ParseError, SchemaError};
use crate::name::{Name, reference_candidates};
use crate::registry::Registry;
use crate::types::{EnumSchema, Field, FixedSchema, PrimitiveType, RecordSchema, SchemaNode};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Parses an Avro schema document from a string.
///
/// Named types defined anywhere in the document are added to `registry`;
/// names referenced by the document must already be registered (or be
/// defined earlier in the same document).
///
/// # Arguments
/// * `json` - Schema document content
/// * `registry` - Registry shared by all documents of the run
///
/// # Returns
/// The top-level schema node of the document.
///
/// A document that fails to parse leaves the registry as it was before.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed, the document is not a
/// valid schema, a name is defined twice, or a reference does not resolve.
pub fn parse_schema(json: &str, registry: &mut Registry) -> Result<SchemaNode, ParseError> {
    let value: Value = serde_json::from_str(json)?;
    parse_value(&value, registry)
}

/// Parses an already-decoded JSON value as a schema document.
///
/// # Errors
/// Returns `ParseError` under the same conditions as [`parse_schema`].
pub fn parse_value(value: &Value, registry: &mut Registry) -> Result<SchemaNode, ParseError> {
    let registered = registry.len();
    let result = Parser {
        registry: &mut *registry,
    }
    .parse(value, None);

    if result.is_err() && registry.len() > registered {
        tracing::debug!(
            "Discarding {} types registered by the failed document",
            registry.len() - registered
        );
        registry.truncate(registered);
    }
    result
}

struct Parser<'a> {
    registry: &'a mut Registry,
}

impl Parser<'_> {
    fn parse(&mut self, value: &Value, namespace: Option<&str>) -> Result<SchemaNode, ParseError> {
        match value {
            Value::String(type_name) => self.parse_type_name(type_name, namespace),
            Value::Array(alternatives) => self.parse_union(alternatives, namespace),
            Value::Object(attrs) => self.parse_object(attrs, namespace),
            other => Err(ParseError::InvalidStructure {
                message: format!("expected a type name, union or object, found {other}"),
            }),
        }
    }

    /// Parses a type written by name: a primitive or a reference.
    fn parse_type_name(
        &mut self,
        type_name: &str,
        namespace: Option<&str>,
    ) -> Result<SchemaNode, ParseError> {
        if let Some(primitive) = PrimitiveType::from_avro_name(type_name) {
            return Ok(SchemaNode::Primitive(primitive));
        }

        reference_candidates(type_name, namespace)
            .into_iter()
            .find(|candidate| self.registry.contains(candidate))
            .map(SchemaNode::Reference)
            .ok_or_else(|| {
                SchemaError::NameResolution {
                    name: type_name.to_string(),
                }
                .into()
            })
    }

    fn parse_union(
        &mut self,
        alternatives: &[Value],
        namespace: Option<&str>,
    ) -> Result<SchemaNode, ParseError> {
        if alternatives.is_empty() {
            return Err(ParseError::invalid_union("a union needs at least one type"));
        }

        let mut seen = HashSet::new();
        let mut nodes = Vec::with_capacity(alternatives.len());

        for alternative in alternatives {
            let node = self.parse(alternative, namespace)?;
            let key = match &node {
                SchemaNode::Union(_) => {
                    return Err(ParseError::invalid_union(
                        "unions may not immediately contain other unions",
                    ));
                }
                SchemaNode::Reference(fullname) => fullname.clone(),
                named @ (SchemaNode::Record(_) | SchemaNode::Enum(_) | SchemaNode::Fixed(_)) => {
                    named.name().map(|n| n.fullname().to_string()).unwrap_or_default()
                }
                unnamed => unnamed.kind().to_string(),
            };
            if !seen.insert(key.clone()) {
                return Err(ParseError::invalid_union(format!(
                    "duplicate type '{key}' in union"
                )));
            }
            nodes.push(node);
        }

        Ok(SchemaNode::Union(nodes))
    }

    fn parse_object(
        &mut self,
        attrs: &Map<String, Value>,
        namespace: Option<&str>,
    ) -> Result<SchemaNode, ParseError> {
        let type_value = attrs
            .get("type")
            .ok_or_else(|| ParseError::missing_attr("schema object", "type"))?;

        let type_name = match type_value {
            Value::String(s) => s.as_str(),
            nested => return self.parse(nested, namespace),
        };

        match type_name {
            "record" | "error" => self.parse_record(attrs, namespace),
            "enum" => self.parse_enum(attrs, namespace),
            "fixed" => self.parse_fixed(attrs, namespace),
            "array" => {
                let items = attrs
                    .get("items")
                    .ok_or_else(|| ParseError::missing_attr("array", "items"))?;
                Ok(SchemaNode::Array(Box::new(self.parse(items, namespace)?)))
            }
            "map" => {
                let values = attrs
                    .get("values")
                    .ok_or_else(|| ParseError::missing_attr("map", "values"))?;
                Ok(SchemaNode::Map(Box::new(self.parse(values, namespace)?)))
            }
            other => self.parse_type_name(other, namespace),
        }
    }

    fn parse_record(
        &mut self,
        attrs: &Map<String, Value>,
        namespace: Option<&str>,
    ) -> Result<SchemaNode, ParseError> {
        let name = parse_name("record", attrs, namespace)?;
        let mut record = RecordSchema::new(name);
        record.doc = optional_str("record", attrs, "doc")?;

        // Registered before the fields so that the record's own name resolves
        // while its fields are parsed.
        self.registry.register(SchemaNode::Record(record.clone()))?;

        let fields = match attrs.get("fields") {
            Some(Value::Array(fields)) => fields,
            Some(other) => {
                return Err(ParseError::invalid_attr("record", "fields", other.to_string()));
            }
            None => return Err(ParseError::missing_attr("record", "fields")),
        };

        let field_namespace = record.name.namespace().map(str::to_string);
        for field in fields {
            let field = self.parse_field(field, field_namespace.as_deref())?;
            if record.get_field(&field.name).is_some() {
                return Err(ParseError::InvalidStructure {
                    message: format!(
                        "duplicate field '{}' in record '{}'",
                        field.name, record.name
                    ),
                });
            }
            record.add_field(field);
        }

        let node = SchemaNode::Record(record);
        self.registry.complete(node.clone());
        Ok(node)
    }

    fn parse_field(&mut self, value: &Value, namespace: Option<&str>) -> Result<Field, ParseError> {
        let Value::Object(attrs) = value else {
            return Err(ParseError::InvalidStructure {
                message: format!("expected a field object, found {value}"),
            });
        };

        let name = required_str("field", attrs, "name")?;
        validate_identifier("field", "name", &name)?;
        let type_value = attrs
            .get("type")
            .ok_or_else(|| ParseError::missing_attr(format!("field '{name}'"), "type"))?;

        Ok(Field {
            schema: self.parse(type_value, namespace)?,
            default: attrs.get("default").cloned(),
            doc: optional_str("field", attrs, "doc")?,
            name,
        })
    }

    fn parse_enum(
        &mut self,
        attrs: &Map<String, Value>,
        namespace: Option<&str>,
    ) -> Result<SchemaNode, ParseError> {
        let name = parse_name("enum", attrs, namespace)?;
        let symbols = match attrs.get("symbols") {
            Some(Value::Array(symbols)) => symbols
                .iter()
                .map(|symbol| match symbol {
                    Value::String(s) => {
                        validate_identifier("enum", "symbols", s)?;
                        Ok(s.clone())
                    }
                    other => Err(ParseError::invalid_attr("enum", "symbols", other.to_string())),
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => {
                return Err(ParseError::invalid_attr("enum", "symbols", other.to_string()));
            }
            None => return Err(ParseError::missing_attr("enum", "symbols")),
        };

        let node = SchemaNode::Enum(EnumSchema {
            name,
            symbols,
            doc: optional_str("enum", attrs, "doc")?,
            default: optional_str("enum", attrs, "default")?,
        });
        self.registry.register(node.clone())?;
        Ok(node)
    }

    fn parse_fixed(
        &mut self,
        attrs: &Map<String, Value>,
        namespace: Option<&str>,
    ) -> Result<SchemaNode, ParseError> {
        let name = parse_name("fixed", attrs, namespace)?;
        let size = match attrs.get("size") {
            Some(Value::Number(n)) => n
                .as_u64()
                .and_then(|n| usize::try_from(n).ok())
                .ok_or_else(|| ParseError::invalid_attr("fixed", "size", n.to_string()))?,
            Some(other) => return Err(ParseError::invalid_attr("fixed", "size", other.to_string())),
            None => return Err(ParseError::missing_attr("fixed", "size")),
        };

        let node = SchemaNode::Fixed(FixedSchema { name, size });
        self.registry.register(node.clone())?;
        Ok(node)
    }
}

/// Reads the `name`/`namespace` attributes of a named type.
///
/// A missing `namespace` inherits the enclosing one.
fn parse_name(
    element: &str,
    attrs: &Map<String, Value>,
    enclosing_namespace: Option<&str>,
) -> Result<Name, ParseError> {
    let name = required_str(element, attrs, "name")?;
    let namespace = optional_str(element, attrs, "namespace")?;
    let namespace = namespace.as_deref().or(enclosing_namespace);

    let parsed = Name::new(&name, namespace);
    validate_identifier(element, "name", parsed.name())?;
    if let Some(namespace) = parsed.namespace() {
        let attribute = if name.contains('.') { "name" } else { "namespace" };
        for part in namespace.split('.') {
            validate_identifier(element, attribute, part)
                .map_err(|_| ParseError::invalid_attr(element, attribute, namespace))?;
        }
    }
    Ok(parsed)
}

fn required_str(
    element: &str,
    attrs: &Map<String, Value>,
    attribute: &str,
) -> Result<String, ParseError> {
    optional_str(element, attrs, attribute)?
        .ok_or_else(|| ParseError::missing_attr(element, attribute))
}

fn optional_str(
    element: &str,
    attrs: &Map<String, Value>,
    attribute: &str,
) -> Result<Option<String>, ParseError> {
    match attrs.get(attribute) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ParseError::invalid_attr(element, attribute, other.to_string())),
    }
}

/// Checks the Avro name grammar `[A-Za-z_][A-Za-z0-9_]*`.
fn validate_identifier(element: &str, attribute: &str, name: &str) -> Result<(), ParseError> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(ParseError::invalid_attr(element, attribute, name))
    }
}
