//! Markup documents: element tree model and the XML-backed parser.

pub mod element;
pub mod parser;

pub use element::{Attributes, MarkupDocument, MarkupElement};
pub use parser::{parse_markup, read_markup, MarkupError};
