//! Element tree: MarkupElement, Attributes, MarkupDocument.

/// Ordered attribute map. Keys are unique; lookups are by exact name and the
/// source order is preserved for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an attribute, keeping its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up an attribute value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the attribute is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate `(name, value)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

/// One element of a markup document.
///
/// Attribute values are copied verbatim; no type coercion happens at parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupElement {
    /// Local tag name (without namespace prefix), e.g. `"Button"`.
    pub tag_name: String,
    /// Namespace the tag was declared in, e.g. `"UnityEngine.UIElements"`.
    pub namespace: Option<String>,
    pub attributes: Attributes,
    pub children: Vec<MarkupElement>,
    /// Last trimmed, non-empty text node directly under this element.
    pub text_content: Option<String>,
}

impl MarkupElement {
    /// Create an element with no attributes, children or text.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            namespace: None,
            attributes: Attributes::new(),
            children: Vec::new(),
            text_content: None,
        }
    }

    /// Set an attribute (builder).
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    /// Append a child element (builder).
    pub fn with_child(mut self, child: MarkupElement) -> Self {
        self.children.push(child);
        self
    }

    /// Set the text content (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_content = Some(text.into());
        self
    }

    /// Set the namespace (builder).
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Shorthand for `attributes.get(name)`.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// The `name` attribute, which doubles as the element id for `#id` selectors.
    pub fn name(&self) -> Option<&str> {
        self.attr("name")
    }

    /// Whether the whitespace-separated `class` attribute contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    /// The type name used for kind resolution: the namespace-qualified name when
    /// the namespace looks like a type namespace, the bare tag otherwise.
    pub fn qualified_type_name(&self) -> String {
        match self.namespace.as_deref() {
            Some(ns) if !ns.is_empty() && !ns.contains(':') && !ns.contains('/') => {
                format!("{ns}.{}", self.tag_name)
            }
            _ => self.tag_name.clone(),
        }
    }

    /// Text for text-bearing widgets: inner text first, then the `text` attribute.
    pub fn display_text(&self) -> Option<&str> {
        self.text_content.as_deref().or_else(|| self.attr("text"))
    }

    /// Number of elements in this subtree, including `self`.
    pub fn element_count(&self) -> usize {
        1 + self.children.iter().map(MarkupElement::element_count).sum::<usize>()
    }
}

/// A parsed markup document with a single root element.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupDocument {
    pub root: MarkupElement,
}

impl MarkupDocument {
    pub fn new(root: MarkupElement) -> Self {
        Self { root }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_overwrite_in_place() {
        let mut attrs = Attributes::new();
        attrs.insert("a", "1");
        attrs.insert("b", "2");
        attrs.insert("a", "3");
        let pairs: Vec<_> = attrs.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn class_token_list() {
        let el = MarkupElement::new("Button").with_attribute("class", "primary  big");
        assert!(el.has_class("primary"));
        assert!(el.has_class("big"));
        assert!(!el.has_class("prim"));
    }

    #[test]
    fn qualified_name_uses_type_namespace() {
        let el = MarkupElement::new("Button").with_namespace("UnityEngine.UIElements");
        assert_eq!(el.qualified_type_name(), "UnityEngine.UIElements.Button");

        let el = MarkupElement::new("Button").with_namespace("http://www.w3.org/1999/xhtml");
        assert_eq!(el.qualified_type_name(), "Button");
    }

    #[test]
    fn display_text_prefers_inner_text() {
        let el = MarkupElement::new("Label")
            .with_attribute("text", "attr")
            .with_text("inner");
        assert_eq!(el.display_text(), Some("inner"));
        let el = MarkupElement::new("Label").with_attribute("text", "attr");
        assert_eq!(el.display_text(), Some("attr"));
    }

    #[test]
    fn element_count_walks_subtree() {
        let el = MarkupElement::new("Root")
            .with_child(MarkupElement::new("A").with_child(MarkupElement::new("B")))
            .with_child(MarkupElement::new("C"));
        assert_eq!(el.element_count(), 4);
    }
}
