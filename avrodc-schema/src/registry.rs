//! Named-type registry.
//!
//! The registry is the namespace shared by every document parsed during a
//! run. It is append-only: a fullname is registered at most once and never
//! overwritten. The only removal is the parser discarding what a failed
//! document registered.

use crate::error::SchemaError;
use crate::types::SchemaNode;
use indexmap::IndexMap;

/// Registry of named types, keyed by fullname, in registration order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    types: IndexMap<String, SchemaNode>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a named type under its fullname.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateName` if the fullname is already
    /// registered, or `SchemaError::NotNamed` if `node` is not a record,
    /// enum or fixed type.
    pub fn register(&mut self, node: SchemaNode) -> Result<(), SchemaError> {
        let Some(name) = node.name() else {
            return Err(SchemaError::NotNamed { kind: node.kind() });
        };
        let fullname = name.fullname().to_string();

        if self.types.contains_key(&fullname) {
            return Err(SchemaError::DuplicateName { name: fullname });
        }

        tracing::debug!("Registered {} '{}'", node.kind(), fullname);
        self.types.insert(fullname, node);
        Ok(())
    }

    /// Replaces the definition of an already registered name.
    ///
    /// Used by the parser to fill in a record's fields after the record was
    /// registered with its name only.
    pub(crate) fn complete(&mut self, node: SchemaNode) {
        if let Some(name) = node.name() {
            if let Some(slot) = self.types.get_mut(name.fullname()) {
                *slot = node;
            }
        }
    }

    /// Drops every type registered after the first `len`.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.types.truncate(len);
    }

    /// Resolves a fullname to its registered definition.
    ///
    /// # Errors
    /// Returns `SchemaError::NameResolution` if the name is not registered.
    pub fn resolve(&self, fullname: &str) -> Result<&SchemaNode, SchemaError> {
        self.types
            .get(fullname)
            .ok_or_else(|| SchemaError::NameResolution {
                name: fullname.to_string(),
            })
    }

    /// Returns true if a type with the given fullname is registered.
    #[must_use]
    pub fn contains(&self, fullname: &str) -> bool {
        self.types.contains_key(fullname)
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates over `(fullname, definition)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.types.iter().map(|(name, node)| (name.as_str(), node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::Name;
    use crate::types::{Field, FixedSchema, PrimitiveType, RecordSchema};

    fn record(name: &str, namespace: Option<&str>) -> SchemaNode {
        SchemaNode::Record(RecordSchema::new(Name::new(name, namespace)))
    }

    #[test]
    fn test_register_and_resolve() {
        let mut registry = Registry::new();
        registry
            .register(record("Person", Some("com.example")))
            .expect("Failed to register");

        assert!(registry.contains("com.example.Person"));
        assert!(!registry.contains("Person"));
        let node = registry.resolve("com.example.Person").unwrap();
        assert_eq!(node.kind(), "record");
    }

    #[test]
    fn test_register_duplicate_name() {
        let mut registry = Registry::new();
        registry.register(record("Person", Some("com.example"))).unwrap();

        let result = registry.register(record("com.example.Person", None));
        assert!(matches!(
            result,
            Err(SchemaError::DuplicateName { ref name }) if name == "com.example.Person"
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_same_short_name_in_different_namespaces() {
        let mut registry = Registry::new();
        registry.register(record("Person", Some("a"))).unwrap();
        registry.register(record("Person", Some("b"))).unwrap();
        registry.register(record("Person", None)).unwrap();
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_resolve_unknown_name() {
        let registry = Registry::new();
        let result = registry.resolve("com.example.Missing");
        assert!(matches!(
            result,
            Err(SchemaError::NameResolution { ref name }) if name == "com.example.Missing"
        ));
    }

    #[test]
    fn test_register_unnamed_node() {
        let mut registry = Registry::new();
        let result = registry.register(SchemaNode::Primitive(PrimitiveType::Long));
        assert!(matches!(result, Err(SchemaError::NotNamed { kind: "long" })));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_first_registrant_is_kept() {
        let mut registry = Registry::new();
        registry
            .register(SchemaNode::Fixed(FixedSchema {
                name: Name::new("Hash", None),
                size: 16,
            }))
            .unwrap();
        assert!(registry.register(record("Hash", None)).is_err());
        assert_eq!(registry.resolve("Hash").unwrap().kind(), "fixed");
    }

    #[test]
    fn test_complete_fills_in_registered_record() {
        let mut registry = Registry::new();
        registry.register(record("Person", None)).unwrap();

        let mut full = RecordSchema::new(Name::new("Person", None));
        full.add_field(Field::new("name", SchemaNode::Primitive(PrimitiveType::String)));
        registry.complete(SchemaNode::Record(full));

        let resolved = registry.resolve("Person").unwrap().as_record().unwrap();
        assert_eq!(resolved.fields.len(), 1);
    }

    #[test]
    fn test_iter_preserves_registration_order() {
        let mut registry = Registry::new();
        for name in ["Zeta", "Alpha", "Mid"] {
            registry.register(record(name, None)).unwrap();
        }
        let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
    }
}
