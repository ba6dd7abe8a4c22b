//! # avrodc Schema
//!
//! Avro schema model and named-type registry.
//!
//! This crate provides:
//! - The closed schema type algebra ([`SchemaNode`])
//! - Avro naming rules and identifier casing
//! - A run-scoped registry of named types shared across documents
//! - A parser for Avro JSON schema documents

pub mod error;
pub mod name;
pub mod parser;
pub mod registry;
pub mod types;

pub use error::{ParseError, SchemaError};
pub use name::{Name, capital_case};
pub use parser::{parse_schema, parse_value};
pub use registry::Registry;
pub use types::{EnumSchema, Field, FixedSchema, PrimitiveType, RecordSchema, SchemaNode};
