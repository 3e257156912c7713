//! Specification model, parser, and member extractor

pub mod extract;
pub mod model;
pub mod parser;

pub use extract::{field_from_node, method_from_node};
pub use model::{
    FieldSpecs, MethodSpecs, RequiredField, RequiredMethod, RequiredParam, Visibility,
};
pub use parser::{parse_fields, parse_methods, COMMA_ESCAPE};
