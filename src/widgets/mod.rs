//! Widget construction recipes.
//!
//! Each [`WidgetKind`] builds a fixed sub-tree of scene nodes with its
//! components and cross-references wired up. Geometry is kept minimal (a
//! 100x30 rectangle pinned to the parent's top-left corner); the style cascade
//! decides the final layout.

pub mod button;
pub mod container;
pub mod dropdown;
pub mod image;
pub mod label;
pub mod scroll_view;
pub mod slider;
pub mod text_field;
pub mod toggle;

use crate::geometry::{RectTransform, Vec2};
use crate::markup::MarkupElement;
use crate::resource::ResourceResolver;
use crate::scene::{NodeId, SceneError, SceneHost, Text};
use crate::widget::WidgetKind;

/// Default width of a freshly built widget root.
pub const DEFAULT_WIDTH: f32 = 100.0;
/// Default height of a freshly built widget root.
pub const DEFAULT_HEIGHT: f32 = 30.0;

/// A recipe failure. The driver replaces the element with a generic container.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error("invalid value {value:?} for attribute '{attribute}'")]
    InvalidAttribute { attribute: String, value: String },
}

/// Inputs shared by every recipe.
pub struct WidgetContext<'a> {
    pub element: &'a MarkupElement,
    /// Node the widget root is created under.
    pub parent: NodeId,
    pub resources: &'a mut ResourceResolver,
    pub font: &'a str,
    pub font_size: f32,
}

impl WidgetContext<'_> {
    /// Node name for the widget root: the `name` attribute, else the tag.
    pub fn node_name(&self) -> &str {
        self.element
            .name()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.element.tag_name)
    }

    /// A text component in the default font.
    pub fn text(&self, content: impl Into<String>) -> Text {
        Text::new(content, self.font, self.font_size)
    }

    /// Parse an optional numeric attribute.
    pub fn number_attr(&self, attribute: &str) -> Result<Option<f32>, BuildError> {
        let Some(raw) = self.element.attr(attribute) else {
            return Ok(None);
        };
        match raw.trim().parse::<f32>() {
            Ok(value) if value.is_finite() => Ok(Some(value)),
            _ => Err(BuildError::InvalidAttribute {
                attribute: attribute.to_string(),
                value: raw.to_string(),
            }),
        }
    }
}

/// What a recipe produced.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltWidget {
    /// The node standing for the element; styled by the cascade.
    pub root: NodeId,
    /// Where the element's markup children are parented.
    pub content: NodeId,
    /// Warnings raised while building.
    pub warnings: Vec<String>,
}

impl BuiltWidget {
    fn new(root: NodeId) -> Self {
        Self {
            root,
            content: root,
            warnings: Vec::new(),
        }
    }
}

/// Build the sub-tree for `kind`.
pub fn build<H: SceneHost>(
    host: &mut H,
    kind: WidgetKind,
    ctx: &mut WidgetContext<'_>,
) -> Result<BuiltWidget, BuildError> {
    match kind {
        WidgetKind::Button => button::build(host, ctx),
        WidgetKind::TextField => text_field::build(host, ctx),
        WidgetKind::DropdownField => dropdown::build(host, ctx),
        WidgetKind::Slider => slider::build(host, ctx),
        WidgetKind::Toggle => toggle::build(host, ctx),
        WidgetKind::Label => label::build(host, ctx),
        WidgetKind::Image => image::build(host, ctx),
        WidgetKind::ScrollView => scroll_view::build(host, ctx),
        WidgetKind::GenericField | WidgetKind::Container | WidgetKind::Unrecognized => {
            container::build(host, ctx, kind)
        }
    }
}

/// Create the widget root with the default rectangle.
fn create_root<H: SceneHost>(host: &mut H, ctx: &WidgetContext<'_>) -> Result<NodeId, BuildError> {
    let node = host.create_node(ctx.node_name(), ctx.parent)?;
    host.set_rect(node, RectTransform::top_left(DEFAULT_WIDTH, DEFAULT_HEIGHT))?;
    Ok(node)
}

/// Create an internal helper node.
fn create_child<H: SceneHost>(
    host: &mut H,
    name: &str,
    parent: NodeId,
    rect: RectTransform,
) -> Result<NodeId, BuildError> {
    let node = host.create_node(name, parent)?;
    host.set_rect(node, rect)?;
    Ok(node)
}

/// A rectangle filling the parent, inset by `min` (left, bottom) and `max`
/// (right, top, usually negative) edge offsets.
fn inset(min: Vec2, max: Vec2) -> RectTransform {
    RectTransform::stretched().with_offsets(min, max)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::resource::MemoryAssetSource;
    use crate::scene::Scene;

    /// A canvas scene, a resolver over `source` and the canvas root.
    pub fn fixture(source: MemoryAssetSource) -> (Scene, ResourceResolver, NodeId) {
        let scene = Scene::with_canvas(800.0, 600.0);
        let root = scene.root().unwrap();
        (scene, ResourceResolver::new(source), root)
    }

    pub fn build_element(
        scene: &mut Scene,
        resources: &mut ResourceResolver,
        parent: NodeId,
        element: &MarkupElement,
        kind: WidgetKind,
    ) -> Result<BuiltWidget, BuildError> {
        let mut ctx = WidgetContext {
            element,
            parent,
            resources,
            font: "LegacyRuntime",
            font_size: 14.0,
        };
        build(scene, kind, &mut ctx)
    }

    /// Child of `node` with the given name.
    pub fn child(scene: &Scene, node: NodeId, name: &str) -> NodeId {
        scene
            .children(node)
            .iter()
            .copied()
            .find(|&c| scene.name(c) == Some(name))
            .unwrap_or_else(|| panic!("no child named {name}"))
    }
}
