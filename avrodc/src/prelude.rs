//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use avrodc::prelude::*;
//! ```

// Schema types
pub use avrodc_schema::{
    Field, Name, ParseError, PrimitiveType, RecordSchema, Registry, SchemaError, SchemaNode,
    parse_schema,
};

// Codegen types
pub use avrodc_codegen::{
    CodegenError, Declaration, Emitter, FieldDeclaration, Generator, GeneratorConfig,
    TypeDescriptor, TypeMapper, generate_from_str, map_type,
};
