//! Slider: background, fill area/fill and handle slide area/handle.
//!
//! The fill's right anchor and the handle's anchors sit at the normalized
//! value. `low-value`/`high-value`/`value` must be numbers.

use crate::geometry::{Color, RectTransform, Vec2};
use crate::scene::{Graphic, SceneHost, Slider};

use super::{create_child, create_root, inset, BuildError, BuiltWidget, WidgetContext};

const TRACK_COLOR: Color = Color::rgba(0.8, 0.8, 0.8, 1.0);
const FILL_COLOR: Color = Color::rgba(0.3, 0.55, 0.9, 1.0);

pub fn build<H: SceneHost>(host: &mut H, ctx: &mut WidgetContext<'_>) -> Result<BuiltWidget, BuildError> {
    let min_value = ctx.number_attr("low-value")?.unwrap_or(0.0);
    let max_value = ctx.number_attr("high-value")?.unwrap_or(1.0);
    if !(max_value - min_value).is_finite() {
        return Err(BuildError::InvalidAttribute {
            attribute: "high-value".to_string(),
            value: ctx.element.attr("high-value").unwrap_or_default().to_string(),
        });
    }
    let value = ctx
        .number_attr("value")?
        .unwrap_or(min_value + (max_value - min_value) * 0.5);
    let mut slider = Slider {
        fill_rect: None,
        handle_rect: None,
        target_graphic: None,
        min_value,
        max_value,
        value: value.clamp(min_value.min(max_value), max_value.max(min_value)),
        whole_numbers: ctx.element.tag_name == "SliderInt",
    };
    let t = slider.normalized_value();

    let root = create_root(host, ctx)?;

    let track = RectTransform::stretched().with_anchors(Vec2::new(0.0, 0.25), Vec2::new(1.0, 0.75));
    let background = create_child(host, "Background", root, track)?;
    host.attach(background, Graphic::colored(TRACK_COLOR).into())?;

    let fill_area = create_child(
        host,
        "Fill Area",
        root,
        track.with_offsets(Vec2::new(5.0, 0.0), Vec2::new(-15.0, 0.0)),
    )?;
    let fill = create_child(
        host,
        "Fill",
        fill_area,
        RectTransform::stretched()
            .with_anchors(Vec2::ZERO, Vec2::new(t, 1.0))
            .with_size_delta(Vec2::new(10.0, 0.0)),
    )?;
    host.attach(fill, Graphic::colored(FILL_COLOR).into())?;

    let slide_area = create_child(
        host,
        "Handle Slide Area",
        root,
        inset(Vec2::new(10.0, 0.0), Vec2::new(-10.0, 0.0)),
    )?;
    let handle = create_child(
        host,
        "Handle",
        slide_area,
        RectTransform::stretched()
            .with_anchors(Vec2::new(t, 0.0), Vec2::new(t, 1.0))
            .with_size_delta(Vec2::new(20.0, 0.0)),
    )?;
    host.attach(handle, Graphic::colored(Color::WHITE).into())?;

    slider.fill_rect = Some(fill);
    slider.handle_rect = Some(handle);
    slider.target_graphic = Some(handle);
    host.attach(root, slider.into())?;
    Ok(BuiltWidget::new(root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::MarkupElement;
    use crate::resource::MemoryAssetSource;
    use crate::widget::WidgetKind;
    use crate::widgets::test_support::{build_element, child, fixture};

    #[test]
    fn default_range_and_wiring() {
        let (mut scene, mut res, canvas) = fixture(MemoryAssetSource::new());
        let el = MarkupElement::new("Slider");
        let built = build_element(&mut scene, &mut res, canvas, &el, WidgetKind::Slider).unwrap();
        let slider = *scene.component::<Slider>(built.root).unwrap();
        assert_eq!((slider.min_value, slider.max_value, slider.value), (0.0, 1.0, 0.5));

        let fill = child(&scene, child(&scene, built.root, "Fill Area"), "Fill");
        let handle = child(&scene, child(&scene, built.root, "Handle Slide Area"), "Handle");
        assert_eq!(slider.fill_rect, Some(fill));
        assert_eq!(slider.handle_rect, Some(handle));
        assert_eq!(slider.target_graphic, Some(handle));
        assert_eq!(scene.rect(fill).unwrap().anchor_max.x, 0.5);
        assert!(scene.component::<Graphic>(child(&scene, built.root, "Background")).is_some());
    }

    #[test]
    fn range_attributes() {
        let (mut scene, mut res, canvas) = fixture(MemoryAssetSource::new());
        let el = MarkupElement::new("SliderInt")
            .with_attribute("low-value", "0")
            .with_attribute("high-value", "10")
            .with_attribute("value", "4");
        let built = build_element(&mut scene, &mut res, canvas, &el, WidgetKind::Slider).unwrap();
        let slider = scene.component::<Slider>(built.root).unwrap();
        assert!(slider.whole_numbers);
        assert_eq!(slider.value, 4.0);
        let handle = child(&scene, child(&scene, built.root, "Handle Slide Area"), "Handle");
        assert!((scene.rect(handle).unwrap().anchor_min.x - 0.4).abs() < 1e-6);
    }

    #[test]
    fn invalid_number_fails_before_creating_nodes() {
        let (mut scene, mut res, canvas) = fixture(MemoryAssetSource::new());
        let before = scene.len();
        let el = MarkupElement::new("Slider").with_attribute("high-value", "lots");
        let err = build_element(&mut scene, &mut res, canvas, &el, WidgetKind::Slider).unwrap_err();
        assert_eq!(
            err,
            BuildError::InvalidAttribute {
                attribute: "high-value".into(),
                value: "lots".into()
            }
        );
        assert_eq!(scene.len(), before);
    }

    #[test]
    fn overflowing_range_is_rejected() {
        let (mut scene, mut res, canvas) = fixture(MemoryAssetSource::new());
        let before = scene.len();
        let el = MarkupElement::new("Slider")
            .with_attribute("low-value", "-3e38")
            .with_attribute("high-value", "3e38");
        let err = build_element(&mut scene, &mut res, canvas, &el, WidgetKind::Slider).unwrap_err();
        assert!(matches!(err, BuildError::InvalidAttribute { attribute, .. } if attribute == "high-value"));
        assert_eq!(scene.len(), before);
    }
}
