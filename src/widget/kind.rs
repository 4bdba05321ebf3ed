//! The closed classification a markup element resolves to before construction.

use std::fmt;

/// Which construction recipe builds an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Button,
    TextField,
    DropdownField,
    Slider,
    Toggle,
    Label,
    Image,
    ScrollView,
    /// A single-value input field with no dedicated recipe.
    GenericField,
    /// A plain element that only groups children.
    Container,
    /// A tag that could not be classified.
    Unrecognized,
}

impl WidgetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetKind::Button => "Button",
            WidgetKind::TextField => "TextField",
            WidgetKind::DropdownField => "DropdownField",
            WidgetKind::Slider => "Slider",
            WidgetKind::Toggle => "Toggle",
            WidgetKind::Label => "Label",
            WidgetKind::Image => "Image",
            WidgetKind::ScrollView => "ScrollView",
            WidgetKind::GenericField => "GenericField",
            WidgetKind::Container => "Container",
            WidgetKind::Unrecognized => "Unrecognized",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
