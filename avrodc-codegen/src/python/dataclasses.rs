//! Python dataclass rendering.

use crate::emitter::{Declaration, FieldDeclaration};
use crate::python::literal::python_quoted;

const PREAMBLE: &str = "from __future__ import annotations\n\
\n\
import dataclasses\n\
from typing import Dict, Final, List, Optional\n";

/// Generator for Python dataclass source.
pub struct DataclassGenerator<'a> {
    declarations: &'a [Declaration],
    header: Option<String>,
}

impl<'a> DataclassGenerator<'a> {
    /// Creates a new dataclass generator.
    #[must_use]
    pub fn new(declarations: &'a [Declaration]) -> Self {
        Self {
            declarations,
            header: None,
        }
    }

    /// Sets a comment emitted on the first lines of the output.
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Generates the complete Python module.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        if let Some(header) = &self.header {
            for line in header.lines() {
                output.push_str(&format!("# {line}\n"));
            }
            output.push('\n');
        }
        output.push_str(PREAMBLE);

        for decl in self.declarations {
            output.push_str("\n\n");
            output.push_str(&self.generate_class(decl));
        }

        output
    }

    /// Generates one dataclass definition.
    fn generate_class(&self, decl: &Declaration) -> String {
        let mut output = String::new();

        output.push_str("@dataclasses.dataclass\n");
        output.push_str(&format!("class {}:\n", decl.class_name));

        if !decl.doc.is_empty() {
            output.push_str(&docstring(&decl.doc, "    "));
            output.push('\n');
        }

        for field in &decl.fields {
            output.push_str(&self.generate_field(field));
        }

        // Identity attributes
        output.push_str(&format!(
            "    _avro_fullname: Final[str] = {}\n",
            python_quoted(&decl.full_name, '"')
        ));
        output.push_str(&format!(
            "    _avro_namespace: Final[str] = {}\n",
            python_quoted(&decl.namespace, '"')
        ));

        output
    }

    /// Generates a field annotation line, preceded by its doc comment.
    fn generate_field(&self, field: &FieldDeclaration) -> String {
        let mut output = String::new();

        for line in field.doc.lines() {
            output.push_str(&format!("    #: {}\n", line.trim_end()));
        }

        output.push_str(&format!("    {}: {}", field.name, field.type_descriptor));
        if let Some(default) = &field.default {
            output.push_str(&format!(" = {default}"));
        }
        output.push('\n');

        output
    }
}

/// Renders a docstring at the given indentation.
fn docstring(doc: &str, indent: &str) -> String {
    let mut escaped = doc.replace('\\', "\\\\").replace("\"\"\"", "\\\"\\\"\\\"");
    if escaped.ends_with('"') {
        escaped.pop();
        escaped.push_str("\\\"");
    }

    if escaped.contains('\n') {
        let mut output = format!("{indent}\"\"\"");
        for (i, line) in escaped.lines().enumerate() {
            if i > 0 && !line.trim().is_empty() {
                output.push_str(indent);
            }
            output.push_str(line.trim_end());
            output.push('\n');
        }
        output.push_str(&format!("{indent}\"\"\"\n"));
        output
    } else {
        format!("{indent}\"\"\"{escaped}\"\"\"\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::TypeDescriptor;

    fn person() -> Declaration {
        Declaration {
            class_name: "Person".to_string(),
            full_name: "com.example.Person".to_string(),
            namespace: "com.example".to_string(),
            doc: "A person.".to_string(),
            fields: vec![
                FieldDeclaration {
                    name: "name".to_string(),
                    type_descriptor: TypeDescriptor::Str,
                    default: None,
                    doc: String::new(),
                },
                FieldDeclaration {
                    name: "age".to_string(),
                    type_descriptor: TypeDescriptor::Optional(Box::new(TypeDescriptor::Int)),
                    default: Some("None".to_string()),
                    doc: "Age in years.".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_generate_person() {
        let declarations = [person()];
        let output = DataclassGenerator::new(&declarations).generate();

        let expected = "\
from __future__ import annotations

import dataclasses
from typing import Dict, Final, List, Optional


@dataclasses.dataclass
class Person:
    \"\"\"A person.\"\"\"

    name: str
    #: Age in years.
    age: Optional[int] = None
    _avro_fullname: Final[str] = \"com.example.Person\"
    _avro_namespace: Final[str] = \"com.example\"
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_generate_without_doc_or_namespace() {
        let declarations = [Declaration {
            class_name: "Empty".to_string(),
            full_name: "Empty".to_string(),
            namespace: String::new(),
            doc: String::new(),
            fields: Vec::new(),
        }];
        let output = DataclassGenerator::new(&declarations).generate();

        assert!(output.ends_with(
            "@dataclasses.dataclass\n\
             class Empty:\n    \
             _avro_fullname: Final[str] = \"Empty\"\n    \
             _avro_namespace: Final[str] = \"\"\n"
        ));
        assert!(!output.contains("\"\"\""));
    }

    #[test]
    fn test_every_class_is_decorated() {
        let mut second = person();
        second.class_name = "Other".to_string();
        let declarations = [person(), second];
        let output = DataclassGenerator::new(&declarations).generate();

        assert_eq!(output.matches("@dataclasses.dataclass\n").count(), 2);
        let person_at = output.find("class Person:").unwrap();
        let other_at = output.find("class Other:").unwrap();
        assert!(person_at < other_at);
    }

    #[test]
    fn test_identity_strings_are_escaped() {
        let declarations = [Declaration {
            class_name: "R".to_string(),
            full_name: "a\"b\\c.R".to_string(),
            namespace: "a\"b\\c".to_string(),
            doc: String::new(),
            fields: Vec::new(),
        }];
        let output = DataclassGenerator::new(&declarations).generate();

        assert!(output.contains("    _avro_fullname: Final[str] = \"a\\\"b\\\\c.R\"\n"));
        assert!(output.contains("    _avro_namespace: Final[str] = \"a\\\"b\\\\c\"\n"));
    }

    #[test]
    fn test_generate_empty() {
        let output = DataclassGenerator::new(&[]).generate();
        assert_eq!(output, PREAMBLE);
    }

    #[test]
    fn test_header() {
        let output = DataclassGenerator::new(&[])
            .with_header("Generated by avrodc.\nDo not edit.")
            .generate();
        assert!(output.starts_with("# Generated by avrodc.\n# Do not edit.\n\nfrom __future__"));
    }

    #[test]
    fn test_docstring_escaping() {
        assert_eq!(docstring("plain", "    "), "    \"\"\"plain\"\"\"\n");
        assert_eq!(
            docstring("a \"\"\" b", ""),
            "\"\"\"a \\\"\\\"\\\" b\"\"\"\n"
        );
        assert_eq!(docstring("ends \"", ""), "\"\"\"ends \\\"\"\"\"\n");
        assert_eq!(docstring("back\\slash", ""), "\"\"\"back\\\\slash\"\"\"\n");
    }

    #[test]
    fn test_multiline_docstring() {
        assert_eq!(
            docstring("First line.\n\nMore detail.", "    "),
            "    \"\"\"First line.\n\n    More detail.\n    \"\"\"\n"
        );
    }
}
