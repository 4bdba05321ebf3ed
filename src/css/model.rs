//! Stylesheet model: Selector, PropertyMap, StyleRule, Stylesheet.
//!
//! Only single selector atoms are supported: `.class`, `#id` and a bare tag
//! name. Anything else (combinators, compound selectors, pseudo-classes) is kept
//! as a rule for diagnostics but never matches an element.

use crate::markup::MarkupElement;

/// A single selector atom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Class selector: `.classname`, matched against the `class` token list.
    Class(String),
    /// ID selector: `#id`, matched against the `name` attribute.
    Id(String),
    /// Type selector: `Button`, matched case-insensitively against the local tag.
    Tag(String),
}

impl Selector {
    /// Parse selector text into an atom. Returns `None` for anything that is
    /// not exactly one atom.
    pub fn parse(text: &str) -> Option<Selector> {
        let text = text.trim();
        if let Some(class) = text.strip_prefix('.') {
            is_atom_name(class).then(|| Selector::Class(class.to_string()))
        } else if let Some(id) = text.strip_prefix('#') {
            is_atom_name(id).then(|| Selector::Id(id.to_string()))
        } else {
            is_atom_name(text).then(|| Selector::Tag(text.to_string()))
        }
    }

    /// Whether this atom matches the element.
    pub fn matches(&self, element: &MarkupElement) -> bool {
        match self {
            Selector::Class(class) => element.has_class(class),
            Selector::Id(id) => element.name() == Some(id.as_str()),
            Selector::Tag(tag) => element.tag_name.eq_ignore_ascii_case(tag),
        }
    }
}

fn is_atom_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

/// Ordered property map with unique names. Setting a property twice keeps the
/// first position and the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    declarations: Vec<Declaration>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a property.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.declarations.iter_mut().find(|d| d.property == property) {
            Some(decl) => decl.value = value,
            None => self.declarations.push(Declaration { property, value }),
        }
    }

    /// Look up a property value by exact name.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    /// Declarations in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = PropertyMap::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

/// A selector and its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    /// The selector exactly as written (trimmed).
    pub selector_text: String,
    /// The parsed atom, `None` when the selector is not supported.
    pub selector: Option<Selector>,
    pub properties: PropertyMap,
}

impl StyleRule {
    pub fn new(selector_text: impl Into<String>, properties: PropertyMap) -> Self {
        let selector_text = selector_text.into();
        Self {
            selector: Selector::parse(&selector_text),
            selector_text,
            properties,
        }
    }

    pub fn matches(&self, element: &MarkupElement) -> bool {
        self.selector.as_ref().is_some_and(|s| s.matches(element))
    }
}

/// An ordered set of rules keyed by selector text.
///
/// Inserting a rule whose selector text already exists replaces that rule in
/// place (overwrite, not merge).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    rules: Vec<StyleRule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule, replacing any rule with the same selector text.
    pub fn insert(&mut self, rule: StyleRule) {
        match self
            .rules
            .iter_mut()
            .find(|r| r.selector_text == rule.selector_text)
        {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }

    /// The rule registered under exactly this selector text.
    pub fn get(&self, selector_text: &str) -> Option<&StyleRule> {
        self.rules.iter().find(|r| r.selector_text == selector_text)
    }

    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules matching `element`, in stylesheet order.
    pub fn matching<'a>(
        &'a self,
        element: &'a MarkupElement,
    ) -> impl Iterator<Item = &'a StyleRule> + 'a {
        self.rules.iter().filter(move |r| r.matches(element))
    }

    /// Flatten all matching rules into one map; later rules win per property.
    pub fn computed_for(&self, element: &MarkupElement) -> PropertyMap {
        let mut map = PropertyMap::new();
        for rule in self.matching(element) {
            for decl in rule.properties.iter() {
                map.set(decl.property.clone(), decl.value.clone());
            }
        }
        map
    }

    /// Value of `property` from the last matching rule that sets it.
    pub fn lookup<'a>(&'a self, element: &'a MarkupElement, property: &str) -> Option<&'a str> {
        self.matching(element)
            .filter_map(|r| r.properties.get(property))
            .last()
    }
}
