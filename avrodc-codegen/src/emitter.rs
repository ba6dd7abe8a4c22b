//! Declaration emission.
//!
//! Turns record schemas into render-ready [`Declaration`]s: one per record,
//! in input order, with every field type mapped and every default rendered
//! as a Python literal.

use crate::error::CodegenError;
use crate::mapper::{TypeDescriptor, TypeMapper};
use crate::python::{is_keyword, python_default};
use avrodc_schema::{Field, RecordSchema, Registry, capital_case};

/// Render-ready description of one generated dataclass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Class name (capital-cased record name).
    pub class_name: String,
    /// Record fullname.
    pub full_name: String,
    /// Record namespace, empty if the record has none.
    pub namespace: String,
    /// Record documentation, empty if absent.
    pub doc: String,
    /// Fields, in declaration order.
    pub fields: Vec<FieldDeclaration>,
}

/// Render-ready description of one dataclass field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    /// Field name, unchanged from the schema.
    pub name: String,
    /// Mapped field type.
    pub type_descriptor: TypeDescriptor,
    /// Python literal of the default value, if the field declares one.
    pub default: Option<String>,
    /// Field documentation, empty if absent.
    pub doc: String,
}

/// Emits declarations for record schemas.
#[derive(Debug, Clone)]
pub struct Emitter<'a> {
    mapper: TypeMapper<'a>,
}

impl<'a> Emitter<'a> {
    /// Creates a new emitter resolving references through `registry`.
    #[must_use]
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            mapper: TypeMapper::new(registry),
        }
    }

    /// Emits one declaration per record, in input order.
    ///
    /// # Errors
    /// Returns `CodegenError` (with record and field context) for the first
    /// field whose type or default cannot be expressed.
    pub fn emit(&self, records: &[RecordSchema]) -> Result<Vec<Declaration>, CodegenError> {
        records.iter().map(|record| self.emit_record(record)).collect()
    }

    /// Emits the declaration for a single record.
    ///
    /// # Errors
    /// Returns `CodegenError` as [`Emitter::emit`] does.
    pub fn emit_record(&self, record: &RecordSchema) -> Result<Declaration, CodegenError> {
        let full_name = record.name.fullname();
        let class_name = capital_case(record.name.name());
        check_identifier("class", &class_name)?;

        let fields = record
            .fields
            .iter()
            .map(|field| {
                self.emit_field(field, full_name)
                    .map_err(|e| e.in_field(full_name, &field.name))
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            "Emitted declaration for '{}' with {} fields",
            full_name,
            fields.len()
        );

        Ok(Declaration {
            class_name,
            full_name: full_name.to_string(),
            namespace: record.name.namespace().unwrap_or_default().to_string(),
            doc: record.doc.clone().unwrap_or_default(),
            fields,
        })
    }

    fn emit_field(&self, field: &Field, record: &str) -> Result<FieldDeclaration, CodegenError> {
        check_identifier("field", &field.name)?;
        let type_descriptor = self.mapper.map_field_type(&field.schema, record)?;
        let default = field.default.as_ref().map(python_default).transpose()?;

        Ok(FieldDeclaration {
            name: field.name.clone(),
            type_descriptor,
            default,
            doc: field.doc.clone().unwrap_or_default(),
        })
    }
}

/// Rejects Python keywords; names are emitted unchanged.
fn check_identifier(kind: &str, name: &str) -> Result<(), CodegenError> {
    if is_keyword(name) {
        return Err(CodegenError::ReservedIdentifier {
            kind: kind.to_string(),
            name: name.to_string(),
        });
    }
    Ok(())
}
