//! Flex emulation on top of [`LayoutGroup`].
//!
//! A parent element that declares `flex-direction`, `justify-content` or
//! `align-items` gets a layout group the first time one of its children is
//! styled. Only one alignment is available per group, so `space-*` values
//! collapse to centering.

use crate::css::properties::{parse_scalar_box, Align, FlexDirection, Justify};
use crate::css::PropertyMap;
use crate::geometry::{Axis, Spacing, TextAnchor};
use crate::scene::{LayoutGroup, SceneError, SceneHost};

use super::context::{describe, LayoutContext};
use super::units::UnitResolver;

/// Properties whose presence on an element calls for a layout group.
pub const LAYOUT_PROPERTIES: [&str; 3] = ["flex-direction", "justify-content", "align-items"];

/// Whether `style` declares any flex container property.
pub fn declares_layout(style: &PropertyMap) -> bool {
    LAYOUT_PROPERTIES.iter().any(|p| style.contains(p))
}

/// Main axis and reversal declared by `style`; column when absent or invalid.
pub fn direction(style: &PropertyMap) -> (Axis, bool) {
    let parsed = style
        .get("flex-direction")
        .and_then(|v| FlexDirection::parse("flex-direction", v).ok())
        .unwrap_or(FlexDirection::Column);
    match parsed {
        FlexDirection::Row => (Axis::Horizontal, false),
        FlexDirection::RowReverse => (Axis::Horizontal, true),
        FlexDirection::Column => (Axis::Vertical, false),
        FlexDirection::ColumnReverse => (Axis::Vertical, true),
    }
}

/// Point `group` at the direction and alignment declared by `style`.
/// Invalid values fall back to the defaults; they are reported when the
/// declaring element itself is styled.
pub fn configure(group: &mut LayoutGroup, style: &PropertyMap) {
    let (axis, reverse) = direction(style);
    let justify = style
        .get("justify-content")
        .and_then(|v| Justify::parse("justify-content", v).ok())
        .unwrap_or(Justify::Start);
    let align = style
        .get("align-items")
        .and_then(|v| Align::parse("align-items", v).ok())
        .unwrap_or(Align::Start);

    group.axis = axis;
    group.reverse = reverse;
    group.child_alignment = child_alignment(axis, justify, align);
    let stretch = align == Align::Stretch;
    match axis.cross() {
        Axis::Horizontal => group.child_force_expand_width = stretch,
        Axis::Vertical => group.child_force_expand_height = stretch,
    }
}

/// Fraction along a flow axis measured from its start edge.
fn justify_fraction(justify: Justify) -> f32 {
    match justify {
        Justify::Start => 0.0,
        Justify::End => 1.0,
        Justify::Center | Justify::SpaceBetween | Justify::SpaceAround | Justify::SpaceEvenly => 0.5,
    }
}

fn align_fraction(align: Align) -> f32 {
    match align {
        Align::Auto | Align::Start | Align::Stretch => 0.0,
        Align::Center => 0.5,
        Align::End => 1.0,
    }
}

/// The single anchor combining main-axis justification and cross-axis
/// alignment.
pub fn child_alignment(main: Axis, justify: Justify, align: Align) -> TextAnchor {
    let (from_left, from_top) = match main {
        Axis::Horizontal => (justify_fraction(justify), align_fraction(align)),
        Axis::Vertical => (align_fraction(align), justify_fraction(justify)),
    };
    anchor_at(from_left, from_top)
}

fn anchor_at(from_left: f32, from_top: f32) -> TextAnchor {
    let column = (from_left * 2.0).round() as u8;
    let row = (from_top * 2.0).round() as u8;
    match (row, column) {
        (0, 0) => TextAnchor::UpperLeft,
        (0, 1) => TextAnchor::UpperCenter,
        (0, _) => TextAnchor::UpperRight,
        (1, 0) => TextAnchor::MiddleLeft,
        (1, 1) => TextAnchor::MiddleCenter,
        (1, _) => TextAnchor::MiddleRight,
        (_, 0) => TextAnchor::LowerLeft,
        (_, 1) => TextAnchor::LowerCenter,
        _ => TextAnchor::LowerRight,
    }
}

/// Padding declared by `style` (shorthand then per-side), resolved with
/// `units`. Unparsable values count as zero.
pub fn declared_padding(style: &PropertyMap, units: &UnitResolver) -> Spacing {
    let mut padding = Spacing::ZERO;
    let px = |scalar, axis| units.length(scalar, axis).unwrap_or(0.0);
    for decl in style.iter() {
        let property = decl.property.to_ascii_lowercase();
        let Ok(values) = parse_scalar_box(&property, &decl.value) else {
            continue;
        };
        match property.as_str() {
            "padding" => {
                padding = Spacing::new(
                    px(values.top, Axis::Vertical),
                    px(values.right, Axis::Horizontal),
                    px(values.bottom, Axis::Vertical),
                    px(values.left, Axis::Horizontal),
                );
            }
            "padding-top" => padding.top = px(values.top, Axis::Vertical),
            "padding-right" => padding.right = px(values.top, Axis::Horizontal),
            "padding-bottom" => padding.bottom = px(values.top, Axis::Vertical),
            "padding-left" => padding.left = px(values.top, Axis::Horizontal),
            _ => {}
        }
    }
    padding
}

/// Attach a layout group to the parent node if the parent element declares
/// flex layout and has none yet. Returns whether a group was attached.
pub fn ensure_parent_group<H: SceneHost>(
    host: &mut H,
    ctx: &LayoutContext<'_>,
) -> Result<bool, SceneError> {
    let Some(parent_node) = ctx.parent_node else {
        return Ok(false);
    };
    let Some(style) = ctx.parent_style() else {
        return Ok(false);
    };
    if !declares_layout(&style) || host.component::<LayoutGroup>(parent_node).is_some() {
        return Ok(false);
    }

    let (axis, _) = direction(&style);
    let mut group = LayoutGroup::new(axis);
    configure(&mut group, &style);
    let units = UnitResolver {
        parent: host.rect_size(parent_node),
        canvas: ctx.canvas,
        font_size: ctx.default_font_size,
    };
    group.padding = declared_padding(&style, &units);
    host.attach(parent_node, group.into())?;
    tracing::debug!(
        parent = %ctx.parent_element.map(describe).unwrap_or_default(),
        ?axis,
        "attached layout group"
    );
    Ok(true)
}
