//! Python code generation modules.

pub mod dataclasses;
pub mod keywords;
pub mod literal;

pub use dataclasses::DataclassGenerator;
pub use keywords::is_keyword;
pub use literal::{python_default, python_literal};
