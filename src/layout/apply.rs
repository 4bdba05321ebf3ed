//! Property handlers, one per property family, selected by an exhaustive
//! match on [`Property`].
//!
//! Every failure comes back as an [`ApplyError`] and is recorded as a warning
//! on the element; the node keeps whatever it had before.

use crate::css::properties::{
    parse_color, parse_font_weight, parse_number, parse_scalar, parse_scalar_box, parse_text_align,
    Align, BackgroundRepeat, BackgroundSize, Display, FlexDirection, FontStyle, Justify, Overflow,
    Position, WhiteSpace,
};
use crate::css::{Property, PropertyError, Unit};
use crate::geometry::{Axis, Color, RectTransform, TextAnchor, Vec2};
use crate::resource::normalize_path;
use crate::scene::{
    CanvasGroup, ComponentKind, CrossAlign, Graphic, ImageType, LayoutElement, LayoutGroup,
    NodeId, RectMask, SceneError, SceneHost, Text,
};

use super::context::LayoutContext;
use super::flex;
use super::units::{auto_size, text_target, UnitResolver};

/// Why a declaration could not be applied.
#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    #[error(transparent)]
    Property(#[from] PropertyError),
    #[error(transparent)]
    Scene(#[from] SceneError),
}

type Handler<H> = fn(&mut H, &mut LayoutContext<'_>, Property, &str) -> Result<(), ApplyError>;

/// Apply one `name: value` declaration to the context's node.
pub fn apply_property<H: SceneHost>(host: &mut H, ctx: &mut LayoutContext<'_>, name: &str, value: &str) {
    let property = match Property::from_name(name) {
        Ok(property) => property,
        Err(err) => {
            ctx.warn(err);
            return;
        }
    };
    tracing::debug!(element = %ctx.label(), property = property.name(), value, "apply property");
    if let Err(err) = handler::<H>(property)(host, ctx, property, value) {
        ctx.warn(err);
    }
}

fn handler<H: SceneHost>(property: Property) -> Handler<H> {
    match property {
        Property::Width | Property::Height => apply_size,
        Property::MinWidth | Property::MinHeight | Property::MaxWidth | Property::MaxHeight => {
            apply_size_hint
        }
        Property::FlexBasis => apply_flex_basis,
        Property::FlexGrow | Property::FlexShrink => apply_flex_factor,
        Property::Left | Property::Top | Property::Right | Property::Bottom => apply_inset,
        Property::Position => apply_position,
        Property::Margin
        | Property::MarginTop
        | Property::MarginRight
        | Property::MarginBottom
        | Property::MarginLeft => apply_margin,
        Property::Padding
        | Property::PaddingTop
        | Property::PaddingRight
        | Property::PaddingBottom
        | Property::PaddingLeft => apply_padding,
        Property::FlexDirection | Property::JustifyContent | Property::AlignItems => {
            apply_flex_container
        }
        Property::AlignSelf => apply_align_self,
        Property::Display => apply_display,
        Property::BackgroundColor | Property::ImageTintColor => apply_graphic_color,
        Property::BackgroundImage => apply_background_image,
        Property::BackgroundSize | Property::BackgroundRepeat => apply_background_mode,
        Property::Opacity => apply_opacity,
        Property::Overflow => apply_overflow,
        Property::Color
        | Property::FontSize
        | Property::FontWeight
        | Property::FontStyle
        | Property::TextAlign
        | Property::WhiteSpace => apply_text,
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn invalid(property: Property, message: impl Into<String>) -> ApplyError {
    ApplyError::Property(PropertyError::InvalidValue {
        property: property.name().to_string(),
        message: message.into(),
    })
}

fn units<H: SceneHost>(host: &H, ctx: &LayoutContext<'_>) -> UnitResolver {
    UnitResolver::for_node(host, ctx.node, ctx.canvas, ctx.default_font_size)
}

fn size_axis(property: Property) -> Axis {
    match property {
        Property::Width | Property::MinWidth | Property::MaxWidth => Axis::Horizontal,
        _ => Axis::Vertical,
    }
}

/// Set the resolved size of `node` along `axis`, keeping its anchors.
pub(crate) fn set_size<H: SceneHost>(
    host: &mut H,
    node: NodeId,
    axis: Axis,
    size: f32,
) -> Result<(), SceneError> {
    let parent = host.parent_size(node);
    host.update_rect(node, |rect| {
        rect.set_size_with_current_anchors(axis, size, parent)
    })
}

fn set_flexible(hints: &mut LayoutElement, axis: Axis, value: Option<f32>) {
    match axis {
        Axis::Horizontal => hints.flexible_width = value,
        Axis::Vertical => hints.flexible_height = value,
    }
}

fn set_preferred(hints: &mut LayoutElement, axis: Axis, value: Option<f32>) {
    match axis {
        Axis::Horizontal => hints.preferred_width = value,
        Axis::Vertical => hints.preferred_height = value,
    }
}

/// Per-side pixel values (top, right, bottom, left) of a box property; side
/// properties fill only their own side.
fn box_sides<H: SceneHost>(
    host: &H,
    ctx: &LayoutContext<'_>,
    property: Property,
    value: &str,
) -> Result<[Option<f32>; 4], ApplyError> {
    let units = units(host, ctx);
    let px = |scalar, axis| units.length(scalar, axis).unwrap_or(0.0);
    let name = property.name();
    let side = |index: usize, axis: Axis| -> Result<[Option<f32>; 4], ApplyError> {
        let mut sides = [None; 4];
        sides[index] = Some(px(parse_scalar(name, value)?, axis));
        Ok(sides)
    };
    match property {
        Property::Margin | Property::Padding => {
            let values = parse_scalar_box(name, value)?;
            Ok([
                Some(px(values.top, Axis::Vertical)),
                Some(px(values.right, Axis::Horizontal)),
                Some(px(values.bottom, Axis::Vertical)),
                Some(px(values.left, Axis::Horizontal)),
            ])
        }
        Property::MarginTop | Property::PaddingTop => side(0, Axis::Vertical),
        Property::MarginRight | Property::PaddingRight => side(1, Axis::Horizontal),
        Property::MarginBottom | Property::PaddingBottom => side(2, Axis::Vertical),
        _ => side(3, Axis::Horizontal),
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

fn apply_size<H: SceneHost>(
    host: &mut H,
    ctx: &mut LayoutContext<'_>,
    property: Property,
    value: &str,
) -> Result<(), ApplyError> {
    let axis = size_axis(property);
    let scalar = parse_scalar(property.name(), value)?;
    let size = match units(host, ctx).length(scalar, axis) {
        Some(px) if px < 0.0 => return Err(invalid(property, "negative size")),
        Some(px) => px,
        None => auto_size(host, ctx.node, axis),
    };
    set_size(host, ctx.node, axis, size)?;
    Ok(())
}

fn apply_size_hint<H: SceneHost>(
    host: &mut H,
    ctx: &mut LayoutContext<'_>,
    property: Property,
    value: &str,
) -> Result<(), ApplyError> {
    let axis = size_axis(property);
    let px = units(host, ctx).length(parse_scalar(property.name(), value)?, axis);
    let hints = host.ensure_component::<LayoutElement>(ctx.node)?;
    match property {
        Property::MinWidth => hints.min_width = px,
        Property::MinHeight => hints.min_height = px,
        _ => set_preferred(hints, axis, px),
    }
    Ok(())
}

fn apply_flex_basis<H: SceneHost>(
    host: &mut H,
    ctx: &mut LayoutContext<'_>,
    property: Property,
    value: &str,
) -> Result<(), ApplyError> {
    let main = ctx.parent_main_axis(host);
    let px = units(host, ctx).length(parse_scalar(property.name(), value)?, main);
    set_preferred(host.ensure_component::<LayoutElement>(ctx.node)?, main, px);
    Ok(())
}

fn apply_flex_factor<H: SceneHost>(
    host: &mut H,
    ctx: &mut LayoutContext<'_>,
    property: Property,
    value: &str,
) -> Result<(), ApplyError> {
    let factor = parse_number(property.name(), value)?;
    if factor < 0.0 {
        return Err(invalid(property, "must not be negative"));
    }
    if property == Property::FlexShrink {
        // Layout groups never shrink children below their preferred size.
        tracing::debug!(element = %ctx.label(), factor, "flex-shrink accepted without effect");
        return Ok(());
    }
    let main = ctx.parent_main_axis(host);
    set_flexible(host.ensure_component::<LayoutElement>(ctx.node)?, main, Some(factor));
    Ok(())
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

fn apply_inset<H: SceneHost>(
    host: &mut H,
    ctx: &mut LayoutContext<'_>,
    property: Property,
    value: &str,
) -> Result<(), ApplyError> {
    let axis = match property {
        Property::Left | Property::Right => Axis::Horizontal,
        _ => Axis::Vertical,
    };
    let scalar = parse_scalar(property.name(), value)?;
    let Some(distance) = units(host, ctx).length(scalar, axis) else {
        return Ok(());
    };
    // CSS measures top/bottom downward; the scene's y axis points up.
    let (fraction, offset) = match property {
        Property::Left => (0.0, distance),
        Property::Right => (1.0, -distance),
        Property::Top => (1.0, -distance),
        _ => (0.0, distance),
    };
    let parent = host.parent_size(ctx.node);
    host.update_rect(ctx.node, |rect| {
        rect.pin_axis(axis, fraction, parent);
        rect.anchored_position.set(axis, offset);
    })?;
    Ok(())
}

fn apply_position<H: SceneHost>(
    host: &mut H,
    ctx: &mut LayoutContext<'_>,
    property: Property,
    value: &str,
) -> Result<(), ApplyError> {
    if Position::parse(property.name(), value)? == Position::Absolute {
        host.set_rect(ctx.node, RectTransform::stretched())?;
        // Out of flow: the parent's layout group must leave it alone.
        host.ensure_component::<LayoutElement>(ctx.node)?.ignore_layout = true;
    }
    Ok(())
}

fn apply_margin<H: SceneHost>(
    host: &mut H,
    ctx: &mut LayoutContext<'_>,
    property: Property,
    value: &str,
) -> Result<(), ApplyError> {
    let [top, right, bottom, left] = box_sides(host, ctx, property, value)?.map(|s| s.unwrap_or(0.0));
    host.update_rect(ctx.node, |rect| {
        rect.anchored_position = rect.anchored_position + Vec2::new(left - right, bottom - top);
    })?;
    Ok(())
}

fn apply_padding<H: SceneHost>(
    host: &mut H,
    ctx: &mut LayoutContext<'_>,
    property: Property,
    value: &str,
) -> Result<(), ApplyError> {
    let sides = box_sides(host, ctx, property, value)?;
    if let Some(group) = host.component_mut::<LayoutGroup>(ctx.node) {
        let padding = &mut group.padding;
        for (slot, side) in [
            &mut padding.top,
            &mut padding.right,
            &mut padding.bottom,
            &mut padding.left,
        ]
        .into_iter()
        .zip(sides)
        {
            if let Some(px) = side {
                *slot = px;
            }
        }
        return Ok(());
    }
    if flex::declares_layout(&ctx.own_style()) {
        // The layout group attached for the first child reads the padding.
        return Ok(());
    }
    let [top, right, bottom, left] = sides.map(|s| s.unwrap_or(0.0));
    host.update_rect(ctx.node, |rect| {
        let min = rect.offset_min();
        let max = rect.offset_max();
        rect.set_offset_min(min + Vec2::new(left, bottom));
        rect.set_offset_max(max - Vec2::new(right, top));
    })?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Flex
// ---------------------------------------------------------------------------

fn apply_flex_container<H: SceneHost>(
    host: &mut H,
    ctx: &mut LayoutContext<'_>,
    property: Property,
    value: &str,
) -> Result<(), ApplyError> {
    match property {
        Property::FlexDirection => {
            FlexDirection::parse(property.name(), value)?;
        }
        Property::JustifyContent => {
            Justify::parse(property.name(), value)?;
        }
        _ => {
            Align::parse(property.name(), value)?;
        }
    }
    let style = ctx.own_style();
    if let Some(group) = host.component_mut::<LayoutGroup>(ctx.node) {
        flex::configure(group, &style);
    }
    Ok(())
}

fn apply_align_self<H: SceneHost>(
    host: &mut H,
    ctx: &mut LayoutContext<'_>,
    property: Property,
    value: &str,
) -> Result<(), ApplyError> {
    let align = Align::parse(property.name(), value)?;
    let cross = ctx.parent_main_axis(host).cross();

    if ctx.parent_has_group(host) {
        let hints = host.ensure_component::<LayoutElement>(ctx.node)?;
        hints.align_self = match align {
            Align::Auto => None,
            Align::Start => Some(CrossAlign::Start),
            Align::Center => Some(CrossAlign::Center),
            Align::End => Some(CrossAlign::End),
            Align::Stretch => Some(CrossAlign::Stretch),
        };
        if align == Align::Stretch {
            set_flexible(hints, cross, Some(1.0));
        }
        return Ok(());
    }

    // No group: move the node itself along the cross axis.
    let start = match cross {
        Axis::Horizontal => 0.0,
        Axis::Vertical => 1.0,
    };
    let fraction = match align {
        Align::Auto => return Ok(()),
        Align::Stretch => {
            set_flexible(host.ensure_component::<LayoutElement>(ctx.node)?, cross, Some(1.0));
            host.update_rect(ctx.node, |rect| rect.stretch_axis(cross))?;
            return Ok(());
        }
        Align::Start => start,
        Align::Center => 0.5,
        Align::End => 1.0 - start,
    };
    let parent = host.parent_size(ctx.node);
    host.update_rect(ctx.node, |rect| {
        rect.pin_axis(cross, fraction, parent);
        rect.anchored_position.set(cross, 0.0);
    })?;
    Ok(())
}

fn apply_display<H: SceneHost>(
    host: &mut H,
    ctx: &mut LayoutContext<'_>,
    property: Property,
    value: &str,
) -> Result<(), ApplyError> {
    let display = Display::parse(property.name(), value)?;
    host.set_active(ctx.node, display != Display::None)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Visuals
// ---------------------------------------------------------------------------

fn apply_graphic_color<H: SceneHost>(
    host: &mut H,
    ctx: &mut LayoutContext<'_>,
    property: Property,
    value: &str,
) -> Result<(), ApplyError> {
    let color = parse_color(property.name(), value)?;
    host.ensure_component::<Graphic>(ctx.node)?.color = color;
    Ok(())
}

fn apply_background_image<H: SceneHost>(
    host: &mut H,
    ctx: &mut LayoutContext<'_>,
    _property: Property,
    value: &str,
) -> Result<(), ApplyError> {
    let path = normalize_path(value);
    if path.is_empty() || path.eq_ignore_ascii_case("none") {
        if let Some(graphic) = host.component_mut::<Graphic>(ctx.node) {
            graphic.sprite = None;
        }
        return Ok(());
    }
    match ctx.resources.resolve(&path) {
        Some(sprite) => {
            if sprite.is_placeholder() {
                ctx.warn(format_args!("vector image '{path}' replaced by a placeholder texture"));
            }
            host.ensure_component::<Graphic>(ctx.node)?.sprite = Some(sprite);
        }
        None => ctx.warn(format_args!("background image '{path}' could not be resolved")),
    }
    Ok(())
}

fn apply_background_mode<H: SceneHost>(
    host: &mut H,
    ctx: &mut LayoutContext<'_>,
    property: Property,
    value: &str,
) -> Result<(), ApplyError> {
    if property == Property::BackgroundSize {
        let size = BackgroundSize::parse(property.name(), value)?;
        host.ensure_component::<Graphic>(ctx.node)?.preserve_aspect = size.preserves_aspect();
    } else {
        let image_type = match BackgroundRepeat::parse(property.name(), value)? {
            BackgroundRepeat::Repeat => ImageType::Tiled,
            BackgroundRepeat::NoRepeat => ImageType::Simple,
        };
        host.ensure_component::<Graphic>(ctx.node)?.image_type = image_type;
    }
    Ok(())
}

fn apply_opacity<H: SceneHost>(
    host: &mut H,
    ctx: &mut LayoutContext<'_>,
    property: Property,
    value: &str,
) -> Result<(), ApplyError> {
    let alpha = parse_number(property.name(), value)?.clamp(0.0, 1.0);
    match host.component_mut::<CanvasGroup>(ctx.node) {
        Some(group) => group.alpha = alpha,
        None => host.attach(ctx.node, CanvasGroup { alpha }.into())?,
    }
    Ok(())
}

fn apply_overflow<H: SceneHost>(
    host: &mut H,
    ctx: &mut LayoutContext<'_>,
    property: Property,
    value: &str,
) -> Result<(), ApplyError> {
    let clipped = host.has_component(ctx.node, ComponentKind::RectMask)
        || host.has_component(ctx.node, ComponentKind::Mask);
    if Overflow::parse(property.name(), value)? == Overflow::Hidden && !clipped {
        host.attach(ctx.node, RectMask.into())?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

enum TextChange {
    Color(Color),
    Size(f32),
    Bold(bool),
    Style { bold: bool, italic: bool },
    Align(TextAnchor),
    Wrap(bool),
}

fn apply_text<H: SceneHost>(
    host: &mut H,
    ctx: &mut LayoutContext<'_>,
    property: Property,
    value: &str,
) -> Result<(), ApplyError> {
    let name = property.name();
    let change = match property {
        Property::Color => TextChange::Color(parse_color(name, value)?),
        Property::FontSize => {
            let scalar = parse_scalar(name, value)?;
            let units = units(host, ctx);
            let size = match scalar.unit {
                Unit::Percent => Some(units.font_size * scalar.value / 100.0),
                Unit::Auto => None,
                _ => units.length(scalar, Axis::Vertical),
            };
            match size {
                Some(px) if px > 0.0 && px.is_finite() => TextChange::Size(px),
                _ => return Err(invalid(property, "font size must be a positive length")),
            }
        }
        Property::FontWeight => TextChange::Bold(parse_font_weight(name, value)?),
        Property::FontStyle => {
            let (bold, italic) = FontStyle::parse(name, value)?.flags();
            TextChange::Style { bold, italic }
        }
        Property::TextAlign => TextChange::Align(parse_text_align(name, value)?),
        _ => TextChange::Wrap(WhiteSpace::parse(name, value)? == WhiteSpace::Normal),
    };

    let Some(target) = text_target(host, ctx.node) else {
        tracing::debug!(element = %ctx.label(), property = name, "no text to style");
        return Ok(());
    };
    let Some(text) = host.component_mut::<Text>(target) else {
        return Ok(());
    };
    match change {
        TextChange::Color(color) => text.color = color,
        TextChange::Size(size) => text.font_size = size,
        TextChange::Bold(bold) => text.bold = bold,
        TextChange::Style { bold, italic } => {
            text.bold = bold;
            text.italic = italic;
        }
        TextChange::Align(anchor) => text.alignment = anchor,
        TextChange::Wrap(wrap) => text.wrap = wrap,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::test_support::Fixture;
    use crate::markup::MarkupElement;

    fn fixture() -> Fixture {
        Fixture::new(MarkupElement::new("VisualElement").with_attribute("name", "Box"), "")
    }

    // ── dispatch ───────────────────────────────────────────────────

    #[test]
    fn unknown_property_warns() {
        let mut fx = fixture();
        let warnings = fx.apply("text-shadow", "1px 1px black");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("<VisualElement name=\"Box\">"));
        assert!(warnings[0].contains("unknown property: text-shadow"));
    }

    #[test]
    fn invalid_value_keeps_previous_state() {
        let mut fx = fixture();
        let warnings = fx.apply("width", "wide");
        assert_eq!(warnings.len(), 1);
        assert_eq!(fx.size(), (100.0, 30.0));
        assert_eq!(fx.apply("width", "-5px").len(), 1);
        assert_eq!(fx.size(), (100.0, 30.0));
    }

    // ── size ───────────────────────────────────────────────────────

    #[test]
    fn size_units() {
        let mut fx = fixture();
        assert!(fx.apply("width", "50%").is_empty());
        assert!(fx.apply("height", "10vh").is_empty());
        assert_eq!(fx.size(), (200.0, 60.0));
        fx.apply("width", "2em");
        assert_eq!(fx.size().0, 28.0);
    }

    #[test]
    fn auto_width_measures_text() {
        let mut fx = fixture();
        fx.scene
            .attach(fx.node, Text::new("abcd", "Font", 10.0).into())
            .unwrap();
        fx.apply("width", "auto");
        assert!((fx.size().0 - 24.0).abs() < 1e-4);
    }

    #[test]
    fn size_hints() {
        let mut fx = fixture();
        fx.apply("min-width", "40px");
        fx.apply("max-height", "80px");
        fx.apply("flex-grow", "2");
        let hints = fx.scene.component::<LayoutElement>(fx.node).unwrap();
        assert_eq!(hints.min_width, Some(40.0));
        assert_eq!(hints.preferred_height, Some(80.0));
        // Parent flows vertically by default.
        assert_eq!(hints.flexible_height, Some(2.0));
    }

    #[test]
    fn flex_shrink_is_validated() {
        let mut fx = fixture();
        assert!(fx.apply("flex-shrink", "1").is_empty());
        assert_eq!(fx.apply("flex-shrink", "lots").len(), 1);
        assert_eq!(fx.apply("flex-grow", "-1").len(), 1);
    }

    // ── position ───────────────────────────────────────────────────

    #[test]
    fn insets_pin_to_edges() {
        let mut fx = fixture();
        fx.apply("left", "20px");
        fx.apply("top", "10px");
        let rect = fx.rect();
        assert_eq!(rect.anchor_min, Vec2::new(0.0, 1.0));
        assert_eq!(rect.anchored_position, Vec2::new(20.0, -10.0));
        assert_eq!(fx.size(), (100.0, 30.0));

        fx.apply("right", "5px");
        let rect = fx.rect();
        assert_eq!(rect.anchor_max.x, 1.0);
        assert_eq!(rect.anchored_position.x, -5.0);
    }

    #[test]
    fn bottom_inset_measures_upward() {
        let mut fx = fixture();
        assert!(fx.apply("bottom", "12px").is_empty());
        let rect = fx.rect();
        assert_eq!(rect.anchor_min.y, 0.0);
        assert_eq!(rect.anchor_max.y, 0.0);
        assert_eq!(rect.pivot.y, 0.0);
        assert_eq!(rect.anchored_position.y, 12.0);
        assert_eq!(fx.size(), (100.0, 30.0));

        fx.apply("bottom", "10%");
        assert_eq!(fx.rect().anchored_position.y, 30.0);
    }

    #[test]
    fn margin_shifts_position() {
        let mut fx = fixture();
        fx.apply("margin-left", "10px");
        fx.apply("margin-top", "5px");
        assert_eq!(fx.rect().anchored_position, Vec2::new(10.0, -5.0));
        fx.apply("margin", "0 0 0 2px");
        assert_eq!(fx.rect().anchored_position, Vec2::new(12.0, -5.0));
    }

    #[test]
    fn absolute_position_stretches() {
        let mut fx = fixture();
        fx.apply("position", "absolute");
        assert_eq!(fx.rect(), RectTransform::stretched());
        assert_eq!(fx.size(), (400.0, 300.0));
        let hints = fx.scene.component::<LayoutElement>(fx.node).unwrap();
        assert!(hints.ignore_layout);
    }

    #[test]
    fn relative_position_stays_in_flow() {
        let mut fx = fixture();
        assert!(fx.apply("position", "relative").is_empty());
        assert_eq!(fx.size(), (100.0, 30.0));
        assert!(fx.scene.component::<LayoutElement>(fx.node).is_none());
    }

    #[test]
    fn padding_without_group_shrinks_rect() {
        let mut fx = fixture();
        fx.apply("padding", "5px 10px");
        assert_eq!(fx.size(), (80.0, 20.0));
    }

    #[test]
    fn padding_goes_to_existing_group() {
        let mut fx = fixture();
        fx.scene
            .attach(fx.node, LayoutGroup::new(Axis::Horizontal).into())
            .unwrap();
        fx.apply("padding-left", "6px");
        let group = fx.scene.component::<LayoutGroup>(fx.node).unwrap();
        assert_eq!(group.padding.left, 6.0);
        assert_eq!(group.padding.top, 0.0);
        assert_eq!(fx.size(), (100.0, 30.0));
    }

    #[test]
    fn padding_on_childless_flex_container_has_no_effect() {
        let mut fx = Fixture::new(
            MarkupElement::new("VisualElement").with_attribute("class", "row"),
            ".row { flex-direction: row; padding: 5px; }",
        );
        assert!(fx.apply("padding", "5px").is_empty());
        assert_eq!(fx.size(), (100.0, 30.0));
        assert!(fx.scene.component::<LayoutGroup>(fx.node).is_none());
    }

    #[test]
    fn align_self_without_group_moves_node() {
        let mut fx = fixture();
        fx.apply("align-self", "center");
        let rect = fx.rect();
        assert_eq!(rect.anchor_min.x, 0.5);
        assert_eq!(rect.pivot.x, 0.5);
        assert_eq!(fx.size().0, 100.0);

        fx.apply("align-self", "stretch");
        assert_eq!(fx.size().0, 400.0);
    }

    #[test]
    fn align_self_with_group_sets_hint() {
        let mut fx = fixture();
        fx.scene
            .attach(fx.parent, LayoutGroup::new(Axis::Horizontal).into())
            .unwrap();
        fx.apply("align-self", "flex-end");
        let hints = fx.scene.component::<LayoutElement>(fx.node).unwrap();
        assert_eq!(hints.align_self, Some(CrossAlign::End));
    }

    #[test]
    fn display_none_deactivates() {
        let mut fx = fixture();
        fx.apply("display", "none");
        assert!(!fx.scene.is_active(fx.node));
        fx.apply("display", "flex");
        assert!(fx.scene.is_active(fx.node));
    }

    // ── visuals ────────────────────────────────────────────────────

    #[test]
    fn background_color_with_alpha() {
        let mut fx = fixture();
        assert!(fx.apply("background-color", "rgba(255, 0, 0, 0.25)").is_empty());
        let color = fx.scene.component::<Graphic>(fx.node).unwrap().color;
        assert_eq!(color.r, 1.0);
        assert!((color.a - 0.25).abs() < 1e-6);
    }

    #[test]
    fn tint_color_aliases_set_graphic_color() {
        let mut fx = fixture();
        assert!(fx.apply("-unity-background-image-tint-color", "rgba(0, 0, 255, 0.5)").is_empty());
        let color = fx.scene.component::<Graphic>(fx.node).unwrap().color;
        assert_eq!((color.r, color.b), (0.0, 1.0));
        assert!((color.a - 0.5).abs() < 1e-6);

        assert!(fx.apply("tint-color", "#00ff00").is_empty());
        assert_eq!(fx.scene.component::<Graphic>(fx.node).unwrap().color, Color::rgb(0.0, 1.0, 0.0));
        assert_eq!(fx.apply("tint-color", "greenish").len(), 1);
    }

    #[test]
    fn background_size_and_repeat() {
        let mut fx = fixture();
        assert!(fx.apply("background-size", "contain").is_empty());
        assert!(fx.scene.component::<Graphic>(fx.node).unwrap().preserve_aspect);
        fx.apply("-unity-background-scale-mode", "stretch-to-fill");
        assert!(!fx.scene.component::<Graphic>(fx.node).unwrap().preserve_aspect);

        assert!(fx.apply("background-repeat", "repeat").is_empty());
        assert_eq!(fx.scene.component::<Graphic>(fx.node).unwrap().image_type, ImageType::Tiled);
        fx.apply("background-repeat", "no-repeat");
        assert_eq!(fx.scene.component::<Graphic>(fx.node).unwrap().image_type, ImageType::Simple);

        assert_eq!(fx.apply("background-size", "huge").len(), 1);
        assert_eq!(fx.apply("background-repeat", "sometimes").len(), 1);
    }

    #[test]
    fn background_image_placeholder_warns() {
        let mut fx = fixture();
        let warnings = fx.apply("background-image", "url('icons/star.svg')");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("icons/star.svg"));
        let graphic = fx.scene.component::<Graphic>(fx.node).unwrap();
        assert!(graphic.sprite.as_ref().is_some_and(|s| s.is_placeholder()));

        assert!(fx.apply("background-image", "none").is_empty());
        let graphic = fx.scene.component::<Graphic>(fx.node).unwrap();
        assert!(graphic.sprite.is_none());
    }

    #[test]
    fn unresolved_background_image_warns() {
        let mut fx = fixture();
        let warnings = fx.apply("background-image", "url(missing.png)");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("could not be resolved"));
    }

    #[test]
    fn opacity_and_overflow() {
        let mut fx = fixture();
        fx.apply("opacity", "0.4");
        fx.apply("opacity", "3");
        assert_eq!(fx.scene.component::<CanvasGroup>(fx.node).unwrap().alpha, 1.0);

        fx.apply("overflow", "hidden");
        fx.apply("overflow", "hidden");
        let masks = fx
            .scene
            .components(fx.node)
            .iter()
            .filter(|c| c.kind() == ComponentKind::RectMask)
            .count();
        assert_eq!(masks, 1);
    }

    // ── text ───────────────────────────────────────────────────────

    #[test]
    fn text_properties_reach_label_child() {
        let mut fx = fixture();
        let label = fx.scene.create_node("Label", fx.node).unwrap();
        fx.scene.attach(label, Text::new("Hi", "Font", 14.0).into()).unwrap();

        fx.apply("font-size", "150%");
        fx.apply("-unity-font-style", "bold-and-italic");
        fx.apply("-unity-text-align", "middle-center");
        fx.apply("color", "#ff0000");
        fx.apply("white-space", "nowrap");

        let text = fx.scene.component::<Text>(label).unwrap();
        assert_eq!(text.font_size, 21.0);
        assert!(text.bold && text.italic);
        assert_eq!(text.alignment, TextAnchor::MiddleCenter);
        assert_eq!(text.color, Color::rgb(1.0, 0.0, 0.0));
        assert!(!text.wrap);
    }

    #[test]
    fn text_property_without_text_is_ignored() {
        let mut fx = fixture();
        assert!(fx.apply("font-size", "18px").is_empty());
        assert_eq!(fx.apply("font-size", "0px").len(), 1);
    }
}
