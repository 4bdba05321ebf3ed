//! Per-element state threaded through the style cascade.

use crate::css::{parse_declarations, PropertyMap, Stylesheet};
use crate::geometry::{Axis, Size};
use crate::markup::MarkupElement;
use crate::resource::ResourceResolver;
use crate::scene::{LayoutGroup, NodeId, SceneHost};
use crate::widget::WidgetKind;

use super::flex;

/// Everything the cascade needs to style one element's root node.
///
/// The parent element is carried here so a child can inspect its parent's
/// declared layout without a side table from nodes back to elements.
pub struct LayoutContext<'a> {
    pub element: &'a MarkupElement,
    pub kind: WidgetKind,
    pub node: NodeId,
    pub parent_element: Option<&'a MarkupElement>,
    /// Node the element was parented under (the parent widget's content node).
    pub parent_node: Option<NodeId>,
    /// Pixel size of the canvas, for `vw`/`vh`.
    pub canvas: Size,
    pub stylesheet: &'a Stylesheet,
    pub resources: &'a mut ResourceResolver,
    pub default_font_size: f32,
    pub is_root: bool,
    /// Warnings raised so far; drained by the driver.
    pub warnings: Vec<String>,
}

impl<'a> LayoutContext<'a> {
    /// Short description of the element for warnings, e.g. `<Button name="Ok">`.
    pub fn label(&self) -> String {
        describe(self.element)
    }

    /// Record a warning against this element.
    pub fn warn(&mut self, message: impl std::fmt::Display) {
        let message = format!("{}: {message}", self.label());
        tracing::warn!("{message}");
        self.warnings.push(message);
    }

    /// Matched stylesheet properties overlaid with the inline `style`.
    pub fn own_style(&self) -> PropertyMap {
        declared_style(self.stylesheet, self.element)
    }

    /// Declared style of the parent element, if there is one.
    pub fn parent_style(&self) -> Option<PropertyMap> {
        self.parent_element
            .map(|parent| declared_style(self.stylesheet, parent))
    }

    /// Main axis of the flow this node sits in: the parent's layout group
    /// axis, else the parent's declared `flex-direction`, else vertical.
    pub fn parent_main_axis<H: SceneHost>(&self, host: &H) -> Axis {
        if let Some(group) = self
            .parent_node
            .and_then(|parent| host.component::<LayoutGroup>(parent))
        {
            return group.axis;
        }
        self.parent_style()
            .map(|style| flex::direction(&style).0)
            .unwrap_or(Axis::Vertical)
    }

    /// Whether the parent node arranges its children with a layout group.
    pub fn parent_has_group<H: SceneHost>(&self, host: &H) -> bool {
        self.parent_node
            .is_some_and(|parent| host.component::<LayoutGroup>(parent).is_some())
    }
}

/// Matched rules of `stylesheet` for `element` (later rules win), overlaid
/// with the element's inline `style` attribute.
pub fn declared_style(stylesheet: &Stylesheet, element: &MarkupElement) -> PropertyMap {
    let mut style = stylesheet.computed_for(element);
    if let Some(inline) = element.attr("style") {
        for decl in parse_declarations(inline).iter() {
            style.set(decl.property.clone(), decl.value.clone());
        }
    }
    style
}

/// `<Tag name="..">` or `<Tag>`.
pub fn describe(element: &MarkupElement) -> String {
    match element.name() {
        Some(name) => format!("<{} name=\"{name}\">", element.tag_name),
        None => format!("<{}>", element.tag_name),
    }
}
