//! Text field: a background with an input behaviour and two overlapping text
//! children, the placeholder below the live text.

use crate::geometry::{Color, Vec2};
use crate::scene::{Graphic, InputField, SceneHost};

use super::{create_child, create_root, inset, BuildError, BuiltWidget, WidgetContext};

const PLACEHOLDER_COLOR: Color = Color::rgba(0.196, 0.196, 0.196, 0.5);

pub fn build<H: SceneHost>(host: &mut H, ctx: &mut WidgetContext<'_>) -> Result<BuiltWidget, BuildError> {
    let element = ctx.element;
    let value = element.attr("value").unwrap_or_default().to_string();
    let hint = element
        .attr("placeholder-text")
        .or_else(|| element.attr("placeholder"))
        .unwrap_or_default();

    let root = create_root(host, ctx)?;
    host.attach(root, Graphic::colored(Color::WHITE).into())?;

    let text_area = inset(Vec2::new(10.0, 6.0), Vec2::new(-10.0, -7.0));
    let placeholder = create_child(host, "Placeholder", root, text_area)?;
    let mut hint_text = ctx.text(hint);
    hint_text.italic = true;
    hint_text.color = PLACEHOLDER_COLOR;
    host.attach(placeholder, hint_text.into())?;
    if !value.is_empty() {
        // Shown again by the field once its text is cleared.
        host.set_active(placeholder, false)?;
    }

    let live = create_child(host, "Text", root, text_area)?;
    host.attach(live, ctx.text(value.clone()).into())?;

    host.attach(
        root,
        InputField {
            text_component: Some(live),
            placeholder: Some(placeholder),
            target_graphic: Some(root),
            text: value,
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
    fn wires_text_and_placeholder() {
        let (mut scene, mut res, canvas) = fixture(MemoryAssetSource::new());
        let el = MarkupElement::new("TextField")
            .with_attribute("value", "hello")
            .with_attribute("placeholder-text", "Type here");
        let built = build_element(&mut scene, &mut res, canvas, &el, WidgetKind::TextField).unwrap();

        let placeholder = child(&scene, built.root, "Placeholder");
        let live = child(&scene, built.root, "Text");
        assert_eq!(scene.children(built.root), &[placeholder, live]);

        let field = scene.component::<InputField>(built.root).unwrap();
        assert_eq!(field.text, "hello");
        assert_eq!(field.text_component, Some(live));
        assert_eq!(field.placeholder, Some(placeholder));

        let hint = scene.component::<Text>(placeholder).unwrap();
        assert_eq!(hint.text, "Type here");
        assert!(hint.italic);
        assert!(!hint.color.is_opaque());
        assert_eq!(scene.component::<Text>(live).unwrap().text, "hello");
        assert!(!scene.is_active(placeholder));
    }

    #[test]
    fn placeholder_visible_without_value() {
        let (mut scene, mut res, canvas) = fixture(MemoryAssetSource::new());
        let el = MarkupElement::new("TextField").with_attribute("placeholder", "Name");
        let built = build_element(&mut scene, &mut res, canvas, &el, WidgetKind::TextField).unwrap();
        let placeholder = child(&scene, built.root, "Placeholder");
        assert!(scene.is_active(placeholder));
        assert_eq!(scene.component::<Text>(placeholder).unwrap().text, "Name");
    }
}
