//! Toggle: background + checkmark pair and a label.

use crate::geometry::{Color, RectTransform, Vec2};
use crate::scene::{Graphic, SceneHost, Toggle};

use super::{create_child, create_root, inset, BuildError, BuiltWidget, WidgetContext};

const CHECK_COLOR: Color = Color::rgba(0.196, 0.196, 0.196, 1.0);

pub fn build<H: SceneHost>(host: &mut H, ctx: &mut WidgetContext<'_>) -> Result<BuiltWidget, BuildError> {
    let is_on = ctx
        .element
        .attr("value")
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"));
    let caption = ctx
        .element
        .attr("label")
        .or_else(|| ctx.element.display_text())
        .unwrap_or_default();

    let root = create_root(host, ctx)?;

    let background = create_child(
        host,
        "Background",
        root,
        RectTransform::top_left(20.0, 20.0).with_position(Vec2::new(0.0, -5.0)),
    )?;
    host.attach(background, Graphic::colored(Color::WHITE).into())?;

    let checkmark = create_child(host, "Checkmark", background, RectTransform::stretched())?;
    host.attach(checkmark, Graphic::colored(CHECK_COLOR).into())?;

    let label = create_child(
        host,
        "Label",
        root,
        inset(Vec2::new(23.0, 1.0), Vec2::new(-5.0, -2.0)),
    )?;
    host.attach(label, ctx.text(caption).into())?;

    host.attach(
        root,
        Toggle {
            target_graphic: Some(background),
            graphic: Some(checkmark),
            is_on,
        }
        .into(),
    )?;
    Ok(BuiltWidget::new(root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::MarkupElement;
    use crate::resource::MemoryAssetSource;
    use crate::scene::Text;
    use crate::widget::WidgetKind;
    use crate::widgets::test_support::{build_element, child, fixture};

    #[test]
    fn wiring_and_label() {
        let (mut scene, mut res, canvas) = fixture(MemoryAssetSource::new());
        let el = MarkupElement::new("Toggle")
            .with_attribute("label", "Sound")
            .with_attribute("value", "TRUE");
        let built = build_element(&mut scene, &mut res, canvas, &el, WidgetKind::Toggle).unwrap();
        let background = child(&scene, built.root, "Background");
        let checkmark = child(&scene, background, "Checkmark");
        let toggle = scene.component::<Toggle>(built.root).unwrap();
        assert!(toggle.is_on);
        assert_eq!(toggle.target_graphic, Some(background));
        assert_eq!(toggle.graphic, Some(checkmark));
        let label = child(&scene, built.root, "Label");
        assert_eq!(scene.component::<Text>(label).unwrap().text, "Sound");
    }

    #[test]
    fn off_unless_value_is_true() {
        let (mut scene, mut res, canvas) = fixture(MemoryAssetSource::new());
        for value in [None, Some("false"), Some("yes")] {
            let mut el = MarkupElement::new("Toggle");
            if let Some(v) = value {
                el = el.with_attribute("value", v);
            }
            let built = build_element(&mut scene, &mut res, canvas, &el, WidgetKind::Toggle).unwrap();
            assert!(!scene.component::<Toggle>(built.root).unwrap().is_on);
        }
    }
}
