//! Dropdown: caption label, arrow and an inactive option template.
//!
//! ```text
//! Dropdown
//! ├── Label
//! ├── Arrow
//! └── Template        (inactive, ScrollRect)
//!     └── Viewport    (Mask)
//!         └── Content
//!             └── Item             (Toggle)
//!                 ├── Item Background
//!                 ├── Item Checkmark
//!                 └── Item Label
//! ```

use crate::geometry::{Color, RectTransform, TextAnchor, Vec2};
use crate::scene::{Dropdown, Graphic, Mask, SceneHost, ScrollRect, Toggle};

use super::{create_child, create_root, inset, BuildError, BuiltWidget, WidgetContext};

const ARROW_COLOR: Color = Color::rgba(0.196, 0.196, 0.196, 1.0);
const ITEM_COLOR: Color = Color::rgba(0.96, 0.96, 0.96, 1.0);

/// Options used when the element declares no `choices`.
pub const DEFAULT_OPTIONS: [&str; 3] = ["Option A", "Option B", "Option C"];

pub fn build<H: SceneHost>(host: &mut H, ctx: &mut WidgetContext<'_>) -> Result<BuiltWidget, BuildError> {
    let options = options(ctx);
    let value = selected_index(ctx, &options)?;

    let root = create_root(host, ctx)?;
    host.attach(root, Graphic::colored(Color::WHITE).into())?;

    let label = create_child(
        host,
        "Label",
        root,
        inset(Vec2::new(10.0, 6.0), Vec2::new(-25.0, -7.0)),
    )?;
    host.attach(label, ctx.text(options[value].clone()).into())?;

    let arrow = create_child(
        host,
        "Arrow",
        root,
        RectTransform::top_left(20.0, 20.0)
            .with_anchors(Vec2::new(1.0, 0.5), Vec2::new(1.0, 0.5))
            .with_pivot(Vec2::HALF)
            .with_position(Vec2::new(-15.0, 0.0)),
    )?;
    host.attach(arrow, Graphic::colored(ARROW_COLOR).into())?;

    // Option list template, shown by the dropdown behaviour when opened.
    let template = create_child(
        host,
        "Template",
        root,
        RectTransform::stretched()
            .with_anchors(Vec2::ZERO, Vec2::new(1.0, 0.0))
            .with_pivot(Vec2::new(0.5, 1.0))
            .with_position(Vec2::new(0.0, 2.0))
            .with_size_delta(Vec2::new(0.0, 150.0)),
    )?;
    host.attach(template, Graphic::colored(Color::WHITE).into())?;

    let viewport = create_child(host, "Viewport", template, RectTransform::stretched())?;
    host.attach(viewport, Graphic::colored(Color::WHITE).into())?;
    host.attach(
        viewport,
        Mask {
            show_mask_graphic: false,
        }
        .into(),
    )?;

    let content = create_child(
        host,
        "Content",
        viewport,
        RectTransform::stretched()
            .with_anchors(Vec2::TOP_LEFT, Vec2::ONE)
            .with_pivot(Vec2::new(0.5, 1.0))
            .with_size_delta(Vec2::new(0.0, 28.0)),
    )?;
    host.attach(
        template,
        ScrollRect {
            content: Some(content),
            viewport: Some(viewport),
            horizontal: false,
            vertical: true,
        }
        .into(),
    )?;

    let item = create_child(
        host,
        "Item",
        content,
        RectTransform::stretched()
            .with_anchors(Vec2::new(0.0, 0.5), Vec2::new(1.0, 0.5))
            .with_size_delta(Vec2::new(0.0, 20.0)),
    )?;
    let item_background = create_child(host, "Item Background", item, RectTransform::stretched())?;
    host.attach(item_background, Graphic::colored(ITEM_COLOR).into())?;
    let item_checkmark = create_child(
        host,
        "Item Checkmark",
        item,
        RectTransform::top_left(20.0, 20.0)
            .with_anchors(Vec2::new(0.0, 0.5), Vec2::new(0.0, 0.5))
            .with_pivot(Vec2::HALF)
            .with_position(Vec2::new(10.0, 0.0)),
    )?;
    host.attach(item_checkmark, Graphic::colored(ARROW_COLOR).into())?;
    let item_label = create_child(
        host,
        "Item Label",
        item,
        inset(Vec2::new(20.0, 1.0), Vec2::new(-10.0, -2.0)),
    )?;
    let mut item_text = ctx.text(options[value].clone());
    item_text.alignment = TextAnchor::MiddleLeft;
    host.attach(item_label, item_text.into())?;
    host.attach(
        item,
        Toggle {
            target_graphic: Some(item_background),
            graphic: Some(item_checkmark),
            is_on: true,
        }
        .into(),
    )?;

    host.set_active(template, false)?;
    host.attach(
        root,
        Dropdown {
            target_graphic: Some(root),
            template: Some(template),
            caption_text: Some(label),
            item_text: Some(item_label),
            options,
            value,
        }
        .into(),
    )?;
    Ok(BuiltWidget::new(root))
}

/// `choices` split on commas, or the three defaults. Never empty.
fn options(ctx: &WidgetContext<'_>) -> Vec<String> {
    let declared: Vec<String> = ctx
        .element
        .attr("choices")
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    if declared.is_empty() {
        DEFAULT_OPTIONS.iter().map(|o| o.to_string()).collect()
    } else {
        declared
    }
}

/// Selected option from `index`, else from a `value` naming an option.
fn selected_index(ctx: &WidgetContext<'_>, options: &[String]) -> Result<usize, BuildError> {
    if let Some(raw) = ctx.element.attr("index") {
        return match raw.trim().parse::<usize>() {
            Ok(index) if index < options.len() => Ok(index),
            _ => Err(BuildError::InvalidAttribute {
                attribute: "index".to_string(),
                value: raw.to_string(),
            }),
        };
    }
    Ok(ctx
        .element
        .attr("value")
        .and_then(|v| options.iter().position(|o| o == v.trim()))
        .unwrap_or(0))
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
    fn template_is_wired_and_hidden() {
        let (mut scene, mut res, canvas) = fixture(MemoryAssetSource::new());
        let el = MarkupElement::new("DropdownField");
        let built = build_element(&mut scene, &mut res, canvas, &el, WidgetKind::DropdownField).unwrap();

        let dropdown = scene.component::<Dropdown>(built.root).unwrap().clone();
        assert_eq!(dropdown.options, DEFAULT_OPTIONS.map(String::from).to_vec());
        assert_eq!(dropdown.value, 0);

        let template = child(&scene, built.root, "Template");
        assert_eq!(dropdown.template, Some(template));
        assert!(!scene.is_active(template));
        let viewport = child(&scene, template, "Viewport");
        assert_eq!(
            scene.component::<Mask>(viewport),
            Some(&Mask { show_mask_graphic: false })
        );
        let content = child(&scene, viewport, "Content");
        let item = child(&scene, content, "Item");
        let item_label = child(&scene, item, "Item Label");
        assert_eq!(dropdown.item_text, Some(item_label));
        assert_eq!(scene.component::<ScrollRect>(template).and_then(|s| s.content), Some(content));

        let caption = child(&scene, built.root, "Label");
        assert_eq!(scene.component::<Text>(caption).unwrap().text, "Option A");
        assert!(scene.component::<Graphic>(child(&scene, built.root, "Arrow")).is_some());
    }

    #[test]
    fn choices_and_selection() {
        let (mut scene, mut res, canvas) = fixture(MemoryAssetSource::new());
        let el = MarkupElement::new("DropdownField")
            .with_attribute("choices", "Low, Medium ,High,")
            .with_attribute("value", "Medium");
        let built = build_element(&mut scene, &mut res, canvas, &el, WidgetKind::DropdownField).unwrap();
        let dropdown = scene.component::<Dropdown>(built.root).unwrap();
        assert_eq!(dropdown.options, vec!["Low", "Medium", "High"]);
        assert_eq!(dropdown.value, 1);

        let bad = MarkupElement::new("DropdownField").with_attribute("index", "7");
        assert!(matches!(
            build_element(&mut scene, &mut res, canvas, &bad, WidgetKind::DropdownField),
            Err(BuildError::InvalidAttribute { .. })
        ));
    }
}
