//! Tag name to [`WidgetKind`] resolution.
//!
//! A tag name is first resolved to a registered type through five tiers, most
//! confident first:
//!
//! 1. a namespace-qualified name looked up directly
//! 2. built-in namespaces probed with the literal and capitalized name
//! 3. exact short-name match
//! 4. case-insensitive short-name match
//! 5. substring containment in a short or full name (logged on every use)
//!
//! The type is then classified by walking its base chain and interface set
//! against an ordered matcher list, most specific first.

use super::kind::WidgetKind;
use super::registry::{generic_definition, TypeDescriptor, TypeRegistry, UI_NAMESPACE};

/// Shortest name the containment tier will consider.
const MIN_FUZZY_LEN: usize = 3;

/// Which resolution tier found a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveTier {
    Qualified,
    Namespace,
    Exact,
    CaseInsensitive,
    Fuzzy,
}

/// Tests a type reference from a base chain or interface set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeMatcher {
    /// The full name equals this one exactly.
    Exact(String),
    /// The generic definition (type arguments stripped) equals this one.
    OpenGeneric(String),
    /// The type or one of its bases implements this interface.
    Interface(String),
}

/// Outcome of resolving one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindResolution {
    pub kind: WidgetKind,
    /// Full name of the resolved type, if any.
    pub type_name: Option<String>,
    pub tier: Option<ResolveTier>,
}

/// Resolves markup tags against a [`TypeRegistry`].
#[derive(Debug, Clone)]
pub struct KindResolver {
    registry: TypeRegistry,
    namespaces: Vec<String>,
    matchers: Vec<(TypeMatcher, WidgetKind)>,
    aliases: Vec<(String, String)>,
}

impl Default for KindResolver {
    fn default() -> Self {
        Self::new(TypeRegistry::builtin())
    }
}

impl KindResolver {
    /// A resolver over `registry` with the built-in namespaces and matchers.
    pub fn new(registry: TypeRegistry) -> Self {
        let ui = |name: &str| format!("{UI_NAMESPACE}.{name}");
        Self {
            registry,
            namespaces: vec![UI_NAMESPACE.to_string(), "UnityEngine.UI".to_string()],
            matchers: vec![
                (TypeMatcher::Exact(ui("Button")), WidgetKind::Button),
                (TypeMatcher::Exact(ui("TextField")), WidgetKind::TextField),
                (TypeMatcher::Exact(ui("DropdownField")), WidgetKind::DropdownField),
                (TypeMatcher::OpenGeneric(ui("BaseSlider`1")), WidgetKind::Slider),
                (TypeMatcher::Exact(ui("Toggle")), WidgetKind::Toggle),
                (TypeMatcher::Exact(ui("Label")), WidgetKind::Label),
                (TypeMatcher::Exact(ui("Image")), WidgetKind::Image),
                (TypeMatcher::Exact(ui("ScrollView")), WidgetKind::ScrollView),
                (TypeMatcher::OpenGeneric(ui("BaseField`1")), WidgetKind::GenericField),
                (TypeMatcher::Exact(ui("VisualElement")), WidgetKind::Container),
            ],
            aliases: vec![("UXML".to_string(), ui("TemplateContainer"))],
        }
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Register an additional element type.
    pub fn register(&mut self, descriptor: TypeDescriptor) {
        self.registry.register(descriptor);
    }

    /// Insert a matcher ahead of the built-in ones.
    pub fn with_matcher(mut self, matcher: TypeMatcher, kind: WidgetKind) -> Self {
        self.matchers.insert(0, (matcher, kind));
        self
    }

    /// Add a namespace probed by tier 2 (builder).
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespaces.push(namespace.into());
        self
    }

    /// Resolve a tag name (short or namespace-qualified) to a kind.
    pub fn resolve(&self, name: &str) -> KindResolution {
        match self.resolve_type(name) {
            Some((descriptor, tier)) => KindResolution {
                kind: self.classify(descriptor),
                type_name: Some(descriptor.full_name()),
                tier: Some(tier),
            },
            None => KindResolution {
                kind: WidgetKind::Unrecognized,
                type_name: None,
                tier: None,
            },
        }
    }

    /// Find the registered type a tag name denotes.
    pub fn resolve_type(&self, name: &str) -> Option<(&TypeDescriptor, ResolveTier)> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let name = self
            .aliases
            .iter()
            .find(|(alias, _)| alias == name)
            .map_or(name, |(_, target)| target.as_str());

        let short = if name.contains('.') {
            if let Some(found) = self.lookup_qualified(name) {
                return Some((found, ResolveTier::Qualified));
            }
            name.rsplit('.').next().unwrap_or(name)
        } else {
            name
        };

        let capitalized = capitalize(short);
        let probed = self.namespaces.iter().find_map(|ns| {
            self.lookup_qualified(&format!("{ns}.{short}"))
                .or_else(|| self.lookup_qualified(&format!("{ns}.{capitalized}")))
        });
        if let Some(found) = probed {
            return Some((found, ResolveTier::Namespace));
        }

        if let Some(found) = self.registry.iter().find(|t| t.display_name() == short) {
            return Some((found, ResolveTier::Exact));
        }

        if let Some(found) = self
            .registry
            .iter()
            .find(|t| t.display_name().eq_ignore_ascii_case(short))
        {
            return Some((found, ResolveTier::CaseInsensitive));
        }

        if short.len() < MIN_FUZZY_LEN {
            return None;
        }
        let needle = short.to_ascii_lowercase();
        let found = self.registry.iter().find(|t| {
            t.display_name().to_ascii_lowercase().contains(&needle)
                || t.full_name().to_ascii_lowercase().contains(&needle)
        })?;
        tracing::warn!(
            tag = name,
            resolved = %found.full_name(),
            "tag resolved by name containment only"
        );
        Some((found, ResolveTier::Fuzzy))
    }

    /// Classify a registered type by its base chain and interfaces.
    pub fn classify(&self, descriptor: &TypeDescriptor) -> WidgetKind {
        let chain = self.registry.base_chain(descriptor);
        let interfaces = self.registry.interfaces(descriptor);
        self.matchers
            .iter()
            .find(|(matcher, _)| match matcher {
                TypeMatcher::Exact(full) => chain.iter().any(|t| t == full),
                TypeMatcher::OpenGeneric(def) => {
                    chain.iter().any(|t| generic_definition(t) == def.as_str())
                }
                TypeMatcher::Interface(iface) => interfaces.iter().any(|i| i == iface),
            })
            .map_or(WidgetKind::Unrecognized, |(_, kind)| *kind)
    }

    /// Qualified lookup: the exact full name first, then a scan ignoring the
    /// generic arity suffix.
    fn lookup_qualified(&self, full: &str) -> Option<&TypeDescriptor> {
        self.registry.get(full).or_else(|| {
            let (ns, short) = full.rsplit_once('.')?;
            self.registry
                .iter()
                .find(|t| t.namespace == ns && t.display_name() == short)
        })
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
