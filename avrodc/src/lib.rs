//! # avrodc
//!
//! Generate Python dataclasses from Apache Avro schemas.
//!
//! avrodc reads Avro schema documents (`.avsc`), resolves named types across
//! files, and writes one Python module with a `@dataclasses.dataclass` per
//! record.
//!
//! ## Quick Start
//!
//! ```ignore
//! use avrodc::prelude::*;
//!
//! let source = generate_from_str(r#"{
//!     "type": "record",
//!     "name": "Person",
//!     "fields": [{"name": "name", "type": "string"}]
//! }"#)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema model, named-type registry, JSON schema parser
//! - [`codegen`] - Type mapping, declaration emission, Python rendering
//! - [`cli`] - Command-line front end

pub mod cli;
pub mod prelude;

/// Schema model, registry and parsing.
pub mod schema {
    pub use avrodc_schema::*;
}

/// Python dataclass generation.
pub mod codegen {
    pub use avrodc_codegen::*;
}

// Re-export commonly used items at the crate root
pub use avrodc_codegen::{
    CodegenError, Generator, GeneratorConfig, generate_from_files, generate_from_str, run,
};
pub use avrodc_schema::{Registry, SchemaNode};
