//! Scroll view: viewport with a hidden mask and a content node that receives
//! the element's children.

use crate::geometry::{Color, RectTransform, Vec2};
use crate::scene::{Graphic, Mask, SceneHost, ScrollRect};

use super::{create_child, create_root, BuildError, BuiltWidget, WidgetContext};

const BACKGROUND_COLOR: Color = Color::rgba(1.0, 1.0, 1.0, 0.1);

pub fn build<H: SceneHost>(host: &mut H, ctx: &mut WidgetContext<'_>) -> Result<BuiltWidget, BuildError> {
    let root = create_root(host, ctx)?;
    host.attach(root, Graphic::colored(BACKGROUND_COLOR).into())?;

    let viewport = create_child(host, "Viewport", root, RectTransform::stretched())?;
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
            .with_pivot(Vec2::TOP_LEFT)
            .with_size_delta(Vec2::new(0.0, 300.0)),
    )?;

    host.attach(
        root,
        ScrollRect {
            content: Some(content),
            viewport: Some(viewport),
            horizontal: true,
            vertical: true,
        }
        .into(),
    )?;
    Ok(BuiltWidget {
        root,
        content,
        warnings: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::MarkupElement;
    use crate::resource::MemoryAssetSource;
    use crate::widget::WidgetKind;
    use crate::widgets::test_support::{build_element, child, fixture};

    #[test]
    fn children_go_under_content() {
        let (mut scene, mut res, canvas) = fixture(MemoryAssetSource::new());
        let el = MarkupElement::new("ScrollView");
        let built = build_element(&mut scene, &mut res, canvas, &el, WidgetKind::ScrollView).unwrap();
        let viewport = child(&scene, built.root, "Viewport");
        let content = child(&scene, viewport, "Content");
        assert_eq!(built.content, content);

        let scroll = scene.component::<ScrollRect>(built.root).unwrap();
        assert!(scroll.horizontal && scroll.vertical);
        assert_eq!(scroll.viewport, Some(viewport));
        assert!(!scene.component::<Mask>(viewport).unwrap().show_mask_graphic);
        // Content spans the viewport width, 300 tall.
        let size = scene.rect_size(content);
        assert_eq!((size.width, size.height), (100.0, 300.0));
    }
}
