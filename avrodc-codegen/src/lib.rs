//! # avrodc Codegen
//!
//! Python dataclass generation from Avro schemas.
//!
//! This crate provides:
//! - Recursive mapping of Avro types to Python type annotations
//! - Declaration emission with Python default literals
//! - Dataclass module rendering
//! - Run orchestration over include and generate documents

pub mod emitter;
pub mod error;
pub mod generator;
pub mod mapper;
pub mod python;

pub use emitter::{Declaration, Emitter, FieldDeclaration};
pub use error::CodegenError;
pub use generator::{Generator, GeneratorConfig, run};
pub use mapper::{TypeDescriptor, TypeMapper, map_type};

/// Generates Python dataclasses from a single Avro schema document.
///
/// # Arguments
/// * `json` - Avro schema document whose top-level type is a record
///
/// # Returns
/// Generated Python source as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_str(json: &str) -> Result<String, CodegenError> {
    generate_from_strs(&[json], &[])
}

/// Generates Python dataclasses from in-memory schema documents.
///
/// # Arguments
/// * `generate` - Documents to generate dataclasses for, in output order
/// * `include` - Documents whose named types may be referenced
///
/// # Returns
/// Generated Python source as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_strs(generate: &[&str], include: &[&str]) -> Result<String, CodegenError> {
    let mut generator = Generator::default();
    for json in include {
        generator.include_str(json)?;
    }
    for json in generate {
        generator.add_str(json)?;
    }
    generator.generate()
}

/// Generates Python dataclasses from schema files.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_files<P, Q>(generate: &[P], include: &[Q]) -> Result<String, CodegenError>
where
    P: AsRef<std::path::Path>,
    Q: AsRef<std::path::Path>,
{
    let mut generator = Generator::default();
    for path in include {
        generator.include_file(path.as_ref())?;
    }
    for path in generate {
        generator.add_file(path.as_ref())?;
    }
    generator.generate()
}
