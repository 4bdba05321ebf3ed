//! Stylesheet engine: value tokenizer, rule model, parser, typed properties.

pub mod model;
pub mod parser;
pub mod properties;
pub mod scalar;
pub mod tokenizer;

pub use model::{Declaration, PropertyMap, Selector, StyleRule, Stylesheet};
pub use parser::{parse_declarations, parse_stylesheet};
pub use properties::{Property, PropertyError};
pub use scalar::{Scalar, ScalarBox, Unit};
