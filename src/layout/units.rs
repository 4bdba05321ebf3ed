//! Length resolution against the parent rectangle, the font size and the canvas.

use crate::css::{Scalar, Unit};
use crate::geometry::{Axis, Size};
use crate::scene::{LayoutElement, NodeId, SceneHost, Text};

/// Font size assumed for `em` when a node has no text.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;
/// Fixed root font size for `rem`.
pub const ROOT_FONT_SIZE: f32 = 16.0;

/// Average glyph advance as a fraction of the font size.
const CHAR_WIDTH: f32 = 0.6;
const LINE_HEIGHT: f32 = 1.2;

/// Converts [`Scalar`]s to pixels for one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitResolver {
    /// Current size of the parent rectangle (`%`).
    pub parent: Size,
    /// Canvas size (`vw`, `vh`).
    pub canvas: Size,
    /// The node's font size (`em`).
    pub font_size: f32,
}

impl UnitResolver {
    pub fn for_node<H: SceneHost>(host: &H, node: NodeId, canvas: Size, default_font_size: f32) -> Self {
        let font_size = text_target(host, node)
            .and_then(|t| host.component::<Text>(t))
            .map_or(default_font_size, |text| text.font_size);
        Self {
            parent: host.parent_size(node),
            canvas,
            font_size,
        }
    }

    /// Pixels for `scalar` along `axis`; `None` for `auto` and for results that
    /// are not finite.
    pub fn length(&self, scalar: Scalar, axis: Axis) -> Option<f32> {
        let px = match scalar.unit {
            Unit::Px => scalar.value,
            Unit::Percent => self.parent.get(axis) * scalar.value / 100.0,
            Unit::Em => self.font_size * scalar.value,
            Unit::Rem => ROOT_FONT_SIZE * scalar.value,
            Unit::Vw => self.canvas.width * scalar.value / 100.0,
            Unit::Vh => self.canvas.height * scalar.value / 100.0,
            Unit::Auto => return None,
        };
        px.is_finite().then_some(px)
    }
}

/// The node carrying the text of `node`: itself, or a direct child named
/// "Text" or "Label" with a text component.
pub fn text_target<H: SceneHost>(host: &H, node: NodeId) -> Option<NodeId> {
    if host.component::<Text>(node).is_some() {
        return Some(node);
    }
    host.children(node).iter().copied().find(|&child| {
        matches!(host.name(child), Some("Text" | "Label")) && host.component::<Text>(child).is_some()
    })
}

/// Best-effort content size for `auto`: a preferred-size hint, else text
/// metrics, else the current size.
pub fn auto_size<H: SceneHost>(host: &H, node: NodeId, axis: Axis) -> f32 {
    if let Some(preferred) = host
        .component::<LayoutElement>(node)
        .and_then(|hints| hints.preferred(axis))
    {
        return preferred;
    }
    if let Some(text) = text_target(host, node).and_then(|t| host.component::<Text>(t)) {
        return match axis {
            Axis::Horizontal => text.text.chars().count() as f32 * text.font_size * CHAR_WIDTH,
            Axis::Vertical => text.font_size * LINE_HEIGHT,
        };
    }
    host.rect_size(node).get(axis)
}
