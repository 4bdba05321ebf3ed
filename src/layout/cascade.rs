//! The three-tier cascade and the size reconciliation that follows it.
//!
//! Tiers, lowest priority first:
//!
//! 1. built-in defaults (the recipe's geometry; the document root is sized to
//!    the canvas and marked as layout root)
//! 2. matching stylesheet rules in stylesheet order
//! 3. the inline `style` attribute, then bare `width`/`height` attributes
//!
//! Reconciliation then re-reads the winning `width`/`height` (attribute, else
//! inline style, else stylesheet) and corrects the rectangle if it drifted by
//! more than [`SIZE_EPSILON`].

use crate::css::{parse_declarations, properties::parse_scalar};
use crate::geometry::{Axis, RectTransform};
use crate::scene::{ComponentKind, LayoutRoot, SceneError, SceneHost};

use super::apply::{apply_property, set_size};
use super::context::LayoutContext;
use super::flex;
use super::units::UnitResolver;

/// Largest size difference reconciliation tolerates.
pub const SIZE_EPSILON: f32 = 0.1;

/// Attributes applied after the inline style.
const SIZE_ATTRIBUTES: [(&str, Axis); 2] = [("width", Axis::Horizontal), ("height", Axis::Vertical)];

/// Style the context's node.
pub fn apply_cascade<H: SceneHost>(host: &mut H, ctx: &mut LayoutContext<'_>) {
    if let Err(err) = flex::ensure_parent_group(host, ctx) {
        ctx.warn(err);
    }
    apply_defaults(host, ctx);
    apply_stylesheet(host, ctx);
    apply_inline(host, ctx);
    reconcile_size(host, ctx);
}

fn apply_defaults<H: SceneHost>(host: &mut H, ctx: &mut LayoutContext<'_>) {
    if ctx.is_root {
        if let Err(err) = mark_root(host, ctx) {
            ctx.warn(err);
        }
    }
}

/// Size the document root to the canvas and tag it as a layout root.
fn mark_root<H: SceneHost>(host: &mut H, ctx: &LayoutContext<'_>) -> Result<(), SceneError> {
    let canvas = ctx.canvas;
    host.set_rect(ctx.node, RectTransform::centered(canvas.width, canvas.height))?;
    if !host.has_component(ctx.node, ComponentKind::LayoutRoot) {
        let root = LayoutRoot {
            reference_size: canvas,
        };
        host.attach(ctx.node, root.into())?;
    }
    Ok(())
}

fn apply_stylesheet<H: SceneHost>(host: &mut H, ctx: &mut LayoutContext<'_>) {
    let (stylesheet, element) = (ctx.stylesheet, ctx.element);
    for rule in stylesheet.matching(element) {
        for decl in rule.properties.iter() {
            apply_property(host, ctx, &decl.property, &decl.value);
        }
    }
}

fn apply_inline<H: SceneHost>(host: &mut H, ctx: &mut LayoutContext<'_>) {
    let element = ctx.element;
    if let Some(style) = element.attr("style") {
        for decl in parse_declarations(style).iter() {
            apply_property(host, ctx, &decl.property, &decl.value);
        }
    }
    for (attribute, _) in SIZE_ATTRIBUTES {
        if let Some(value) = element.attr(attribute) {
            apply_property(host, ctx, attribute, value);
        }
    }
}

/// Force the final size to the highest-priority declaration.
fn reconcile_size<H: SceneHost>(host: &mut H, ctx: &mut LayoutContext<'_>) {
    let (stylesheet, element) = (ctx.stylesheet, ctx.element);
    let inline = element.attr("style").map(parse_declarations).unwrap_or_default();
    for (property, axis) in SIZE_ATTRIBUTES {
        let declared = element
            .attr(property)
            .or_else(|| inline.get(property))
            .or_else(|| stylesheet.lookup(element, property));
        let Some(scalar) = declared.and_then(|v| parse_scalar(property, v).ok()) else {
            continue;
        };
        let units = UnitResolver::for_node(host, ctx.node, ctx.canvas, ctx.default_font_size);
        let Some(expected) = units.length(scalar, axis).filter(|px| *px >= 0.0) else {
            continue;
        };
        let actual = host.rect_size(ctx.node).get(axis);
        if (actual - expected).abs() > SIZE_EPSILON {
            tracing::debug!(element = %ctx.label(), property, actual, expected, "size corrected");
            if let Err(err) = set_size(host, ctx.node, axis, expected) {
                ctx.warn(err);
            }
        }
    }
}
