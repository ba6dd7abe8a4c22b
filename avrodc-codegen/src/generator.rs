//! Generation run orchestration.
//!
//! A [`Generator`] owns the registry for one run. Include documents are
//! loaded into it first, for their named types only; generate documents are
//! then parsed against it and collected, in order, as generation targets.

use crate::emitter::{Declaration, Emitter};
use crate::error::CodegenError;
use crate::python::DataclassGenerator;
use avrodc_schema::{RecordSchema, Registry, SchemaNode, parse_schema};
use std::path::Path;

/// Options for a generation run.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Comment written at the top of the generated module.
    pub header: Option<String>,
}

/// Collects schema documents and generates Python dataclasses from them.
#[derive(Debug, Default)]
pub struct Generator {
    config: GeneratorConfig,
    registry: Registry,
    records: Vec<RecordSchema>,
}

impl Generator {
    /// Creates a new generator with an empty registry.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            registry: Registry::new(),
            records: Vec::new(),
        }
    }

    /// Loads an include document: its named types become available to
    /// later documents, but it produces no output.
    ///
    /// A document that fails to parse registers nothing, so the generator
    /// stays usable after an error.
    ///
    /// # Errors
    /// Returns `CodegenError` if the document fails to parse.
    pub fn include_str(&mut self, json: &str) -> Result<(), CodegenError> {
        parse_schema(json, &mut self.registry)?;
        Ok(())
    }

    /// Loads an include document from a file.
    ///
    /// # Errors
    /// Returns `CodegenError` (with the file path) if reading or parsing
    /// fails.
    pub fn include_file(&mut self, path: &Path) -> Result<(), CodegenError> {
        tracing::info!("Including {}", path.display());
        read_document(path)
            .and_then(|json| self.include_str(&json))
            .map_err(|e| e.in_document(path))
    }

    /// Adds a generate document; its top-level record becomes a
    /// generation target.
    ///
    /// # Errors
    /// Returns `CodegenError` if the document fails to parse or its
    /// top-level schema is not a record.
    pub fn add_str(&mut self, json: &str) -> Result<(), CodegenError> {
        match parse_schema(json, &mut self.registry)? {
            SchemaNode::Record(record) => {
                self.records.push(record);
                Ok(())
            }
            other => Err(CodegenError::NotARecord {
                kind: other.kind().to_string(),
            }),
        }
    }

    /// Adds a generate document from a file.
    ///
    /// # Errors
    /// Returns `CodegenError` (with the file path) if reading, parsing or
    /// the record check fails.
    pub fn add_file(&mut self, path: &Path) -> Result<(), CodegenError> {
        tracing::info!("Loading {}", path.display());
        read_document(path)
            .and_then(|json| self.add_str(&json))
            .map_err(|e| e.in_document(path))
    }

    /// Returns the registry of named types loaded so far.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the generation targets, in the order they were added.
    #[must_use]
    pub fn records(&self) -> &[RecordSchema] {
        &self.records
    }

    /// Emits the declarations for all generation targets.
    ///
    /// # Errors
    /// Returns `CodegenError` if any field cannot be mapped.
    pub fn declarations(&self) -> Result<Vec<Declaration>, CodegenError> {
        Emitter::new(&self.registry).emit(&self.records)
    }

    /// Generates the Python module for all generation targets.
    ///
    /// # Errors
    /// Returns `CodegenError` if any field cannot be mapped.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let declarations = self.declarations()?;
        let mut generator = DataclassGenerator::new(&declarations);
        if let Some(header) = &self.config.header {
            generator = generator.with_header(header.clone());
        }
        Ok(generator.generate())
    }
}

fn read_document(path: &Path) -> Result<String, CodegenError> {
    Ok(std::fs::read_to_string(path)?)
}

/// Runs a complete generation: loads `include` then `generate` documents,
/// and writes the Python module to `out`.
///
/// Nothing is written unless every document loads and every declaration
/// is produced.
///
/// # Errors
/// Returns the first `CodegenError` encountered.
pub fn run<P, Q>(
    generate: &[P],
    include: &[Q],
    out: &Path,
    config: GeneratorConfig,
) -> Result<(), CodegenError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let mut generator = Generator::new(config);

    for path in include {
        generator.include_file(path.as_ref())?;
    }
    for path in generate {
        generator.add_file(path.as_ref())?;
    }

    let source = generator.generate()?;
    std::fs::write(out, source)?;
    tracing::info!(
        "Wrote {} dataclasses to {}",
        generator.records().len(),
        out.display()
    );
    Ok(())
}
