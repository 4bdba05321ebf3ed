//! Registry of the element types markup tags can name.
//!
//! Each [`TypeDescriptor`] records a type's namespace, its direct base type and
//! the interfaces it implements. Base references may name a closed generic,
//! e.g. ``UnityEngine.UIElements.BaseField`1[System.Single]``; the type
//! arguments are stripped when following the chain.

/// Namespace of the built-in UI element types.
pub const UI_NAMESPACE: &str = "UnityEngine.UIElements";

/// One element type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub namespace: String,
    /// Short name, with a ``` `N ``` arity suffix for generic definitions.
    pub name: String,
    /// Full name of the direct base type, possibly with type arguments.
    pub base: Option<String>,
    pub interfaces: Vec<String>,
}

impl TypeDescriptor {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            base: None,
            interfaces: Vec::new(),
        }
    }

    /// Set the base type (builder).
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Add an implemented interface (builder).
    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Namespace-qualified name.
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Short name without the generic arity suffix.
    pub fn display_name(&self) -> &str {
        strip_arity(&self.name)
    }
}

/// Drop type arguments: ``BaseField`1[System.Single]`` becomes ``BaseField`1``.
pub fn generic_definition(type_ref: &str) -> &str {
    type_ref.split_once('[').map_or(type_ref, |(def, _)| def)
}

fn strip_arity(name: &str) -> &str {
    name.split_once('`').map_or(name, |(base, _)| base)
}

/// An ordered set of type descriptors.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: Vec<TypeDescriptor>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The UI toolkit's element types.
    pub fn builtin() -> Self {
        let ui = |name: &str| TypeDescriptor::new(UI_NAMESPACE, name);
        let base = |name: &str| format!("{UI_NAMESPACE}.{name}");
        let mut registry = Self::new();
        for descriptor in [
            ui("VisualElement").with_interface("ITransform"),
            ui("BindableElement")
                .with_base(base("VisualElement"))
                .with_interface("IBindable"),
            ui("TextElement")
                .with_base(base("BindableElement"))
                .with_interface("ITextElement"),
            ui("Label").with_base(base("TextElement")),
            ui("Button").with_base(base("TextElement")),
            ui("Image").with_base(base("VisualElement")),
            ui("ScrollView").with_base(base("VisualElement")),
            ui("Box").with_base(base("VisualElement")),
            ui("GroupBox").with_base(base("BindableElement")),
            ui("Foldout").with_base(base("BindableElement")),
            ui("TemplateContainer").with_base(base("BindableElement")),
            ui("BaseVerticalCollectionView").with_base(base("BindableElement")),
            ui("ListView").with_base(base("BaseVerticalCollectionView")),
            ui("AbstractProgressBar").with_base(base("BindableElement")),
            ui("ProgressBar").with_base(base("AbstractProgressBar")),
            ui("BaseField`1")
                .with_base(base("BindableElement"))
                .with_interface("INotifyValueChanged`1"),
            ui("TextInputBaseField`1").with_base(base("BaseField`1[System.String]")),
            ui("TextField").with_base(base("TextInputBaseField`1[System.String]")),
            ui("TextValueField`1").with_base(base("TextInputBaseField`1[System.String]")),
            ui("IntegerField").with_base(base("TextValueField`1[System.Int32]")),
            ui("FloatField").with_base(base("TextValueField`1[System.Single]")),
            ui("BasePopupField`2").with_base(base("BaseField`1[System.String]")),
            ui("PopupField`1").with_base(base("BasePopupField`2[System.String,System.String]")),
            ui("DropdownField").with_base(base("PopupField`1[System.String]")),
            ui("EnumField").with_base(base("BaseField`1[System.Enum]")),
            ui("BaseSlider`1").with_base(base("BaseField`1[System.Single]")),
            ui("Slider").with_base(base("BaseSlider`1[System.Single]")),
            ui("SliderInt").with_base(base("BaseSlider`1[System.Int32]")),
            ui("MinMaxSlider").with_base(base("BaseField`1[UnityEngine.Vector2]")),
            ui("BaseBoolField").with_base(base("BaseField`1[System.Boolean]")),
            ui("Toggle").with_base(base("BaseBoolField")),
        ] {
            registry.register(descriptor);
        }
        registry
    }

    /// Add a type, replacing any descriptor with the same full name.
    pub fn register(&mut self, descriptor: TypeDescriptor) {
        let full = descriptor.full_name();
        match self.types.iter_mut().find(|t| t.full_name() == full) {
            Some(existing) => *existing = descriptor,
            None => self.types.push(descriptor),
        }
    }

    /// Look up a type by full name; type arguments are ignored.
    pub fn get(&self, full_name: &str) -> Option<&TypeDescriptor> {
        let wanted = generic_definition(full_name);
        self.types.iter().find(|t| t.full_name() == wanted)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Base type references from `descriptor` upwards, most-derived first,
    /// starting with the descriptor's own full name. Stops at unknown bases and
    /// at cycles.
    pub fn base_chain(&self, descriptor: &TypeDescriptor) -> Vec<String> {
        let mut chain = vec![descriptor.full_name()];
        let mut current = descriptor.base.clone();
        while let Some(type_ref) = current {
            if chain
                .iter()
                .any(|seen| generic_definition(seen) == generic_definition(&type_ref))
            {
                break;
            }
            current = self.get(&type_ref).and_then(|t| t.base.clone());
            chain.push(type_ref);
        }
        chain
    }

    /// Interfaces implemented by the descriptor or any of its bases.
    pub fn interfaces(&self, descriptor: &TypeDescriptor) -> Vec<String> {
        self.base_chain(descriptor)
            .iter()
            .filter_map(|type_ref| self.get(type_ref))
            .flat_map(|t| t.interfaces.iter().cloned())
            .collect()
    }
}
