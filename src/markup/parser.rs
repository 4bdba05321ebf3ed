//! Markup parser: XML text into a [`MarkupDocument`].
//!
//! The XML itself is parsed by `roxmltree`; this module walks the resulting
//! tree once and copies tags, attributes, element children and text into the
//! owned [`MarkupElement`] model. Malformed input fails fast: there is no
//! partial recovery.

use std::path::{Path, PathBuf};

use super::element::{Attributes, MarkupDocument, MarkupElement};

/// Errors from reading or parsing markup.
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    #[error("malformed markup: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("cannot read markup file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parse markup text into a document.
pub fn parse_markup(input: &str) -> Result<MarkupDocument, MarkupError> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = roxmltree::Document::parse_with_options(input, options)?;
    Ok(MarkupDocument::new(convert_node(doc.root_element())))
}

/// Read and parse a markup file.
pub fn read_markup(path: impl AsRef<Path>) -> Result<MarkupDocument, MarkupError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| MarkupError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_markup(&text)
}

/// Copy one element (and, recursively, its element children).
fn convert_node(node: roxmltree::Node<'_, '_>) -> MarkupElement {
    let tag = node.tag_name();
    let attributes: Attributes = node
        .attributes()
        .map(|attr| (attr.name(), attr.value()))
        .collect();

    let mut children = Vec::new();
    let mut text_content = None;
    for child in node.children() {
        if child.is_element() {
            children.push(convert_node(child));
        } else if child.is_text() {
            // Last non-blank text node wins.
            if let Some(text) = child.text().map(str::trim).filter(|t| !t.is_empty()) {
                text_content = Some(text.to_owned());
            }
        }
    }

    MarkupElement {
        tag_name: tag.name().to_owned(),
        namespace: tag.namespace().map(str::to_owned),
        attributes,
        children,
        text_content,
    }
}
