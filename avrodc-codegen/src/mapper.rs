//! Recursive type mapping from Avro schema nodes to Python type annotations.

use crate::error::CodegenError;
use crate::python::is_keyword;
use avrodc_schema::{PrimitiveType, Registry, SchemaNode, capital_case};
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;

/// Python type annotation produced for a schema node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// `None`.
    None,
    /// `str`.
    Str,
    /// `bytes`.
    Bytes,
    /// `int`.
    Int,
    /// `float`.
    Float,
    /// `bool`.
    Bool,
    /// `List[T]`.
    List(Box<TypeDescriptor>),
    /// `Dict[str, T]`.
    Dict(Box<TypeDescriptor>),
    /// `Optional[T]`.
    Optional(Box<TypeDescriptor>),
    /// A generated dataclass, by class name.
    Named(String),
}

impl TypeDescriptor {
    /// Returns the descriptor for a primitive type.
    #[must_use]
    pub const fn from_primitive(primitive: PrimitiveType) -> Self {
        match primitive {
            PrimitiveType::Null => Self::None,
            PrimitiveType::String => Self::Str,
            PrimitiveType::Bytes => Self::Bytes,
            PrimitiveType::Long | PrimitiveType::Int => Self::Int,
            PrimitiveType::Float | PrimitiveType::Double => Self::Float,
            PrimitiveType::Boolean => Self::Bool,
        }
    }

    /// Returns true if this is `Optional[T]`.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Str => f.write_str("str"),
            Self::Bytes => f.write_str("bytes"),
            Self::Int => f.write_str("int"),
            Self::Float => f.write_str("float"),
            Self::Bool => f.write_str("bool"),
            Self::List(item) => write!(f, "List[{item}]"),
            Self::Dict(value) => write!(f, "Dict[str, {value}]"),
            Self::Optional(inner) => write!(f, "Optional[{inner}]"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Maps schema nodes to type descriptors, resolving references through a
/// registry.
#[derive(Debug, Clone)]
pub struct TypeMapper<'a> {
    registry: &'a Registry,
    /// Records whose fields all map, with no cycle reachable from them.
    checked: RefCell<HashSet<String>>,
}

impl<'a> TypeMapper<'a> {
    /// Creates a new type mapper.
    #[must_use]
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            checked: RefCell::new(HashSet::new()),
        }
    }

    /// Maps a schema node to its type descriptor.
    ///
    /// # Errors
    /// Returns `CodegenError` if the node (or anything it contains or
    /// references) has no mapping.
    pub fn map_type(&self, node: &SchemaNode) -> Result<TypeDescriptor, CodegenError> {
        self.map(node, &mut Vec::new())
    }

    /// Maps the type of a field of the record `enclosing`.
    ///
    /// References back to `enclosing` are reported as cycles.
    ///
    /// # Errors
    /// Returns `CodegenError` as [`TypeMapper::map_type`] does.
    pub fn map_field_type(
        &self,
        node: &SchemaNode,
        enclosing: &str,
    ) -> Result<TypeDescriptor, CodegenError> {
        self.map(node, &mut vec![enclosing.to_string()])
    }

    fn map(
        &self,
        node: &SchemaNode,
        in_progress: &mut Vec<String>,
    ) -> Result<TypeDescriptor, CodegenError> {
        match node {
            SchemaNode::Primitive(primitive) => Ok(TypeDescriptor::from_primitive(*primitive)),
            SchemaNode::Array(item) => Ok(TypeDescriptor::List(Box::new(
                self.map(item, in_progress)?,
            ))),
            SchemaNode::Map(value) => Ok(TypeDescriptor::Dict(Box::new(
                self.map(value, in_progress)?,
            ))),
            SchemaNode::Union(alternatives) => match node.optional_inner() {
                Some(inner) => Ok(TypeDescriptor::Optional(Box::new(
                    self.map(inner, in_progress)?,
                ))),
                None => Err(CodegenError::UnsupportedUnionShape {
                    count: alternatives.len(),
                    first_kind: alternatives
                        .first()
                        .map_or("nothing", SchemaNode::kind)
                        .to_string(),
                }),
            },
            SchemaNode::Record(record) => Err(CodegenError::UnsupportedNestedRecord {
                name: record.name.fullname().to_string(),
            }),
            SchemaNode::Enum(e) => Err(CodegenError::unsupported_type("enum", e.name.fullname())),
            SchemaNode::Fixed(f) => {
                Err(CodegenError::unsupported_type("fixed", f.name.fullname()))
            }
            SchemaNode::Reference(fullname) => self.map_reference(fullname, in_progress),
        }
    }

    /// Maps a reference to the class generated for the referenced record,
    /// after checking that every field of that record maps too.
    fn map_reference(
        &self,
        fullname: &str,
        in_progress: &mut Vec<String>,
    ) -> Result<TypeDescriptor, CodegenError> {
        if in_progress.iter().any(|name| name == fullname) {
            let mut path = in_progress.join(" -> ");
            path.push_str(" -> ");
            path.push_str(fullname);
            return Err(CodegenError::CyclicSchema { path });
        }

        let record = match self.registry.resolve(fullname)? {
            SchemaNode::Record(record) => record,
            other => return Err(CodegenError::unsupported_type(other.kind(), fullname)),
        };

        if !self.checked.borrow().contains(fullname) {
            in_progress.push(fullname.to_string());
            for field in &record.fields {
                self.map(&field.schema, in_progress)
                    .map_err(|e| e.in_field(fullname, &field.name))?;
            }
            in_progress.pop();
            self.checked.borrow_mut().insert(fullname.to_string());
        }

        let class_name = capital_case(record.name.name());
        if is_keyword(&class_name) {
            return Err(CodegenError::ReservedIdentifier {
                kind: "class".to_string(),
                name: class_name,
            });
        }
        Ok(TypeDescriptor::Named(class_name))
    }
}

/// Maps a schema node to its type descriptor.
///
/// # Errors
/// Returns `CodegenError` if the node has no mapping.
pub fn map_type(node: &SchemaNode, registry: &Registry) -> Result<TypeDescriptor, CodegenError> {
    TypeMapper::new(registry).map_type(node)
}
