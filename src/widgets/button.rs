//! Button: a background graphic that doubles as the click target.
//!
//! A "Text" child is only created when the element has a caption (`text`
//! attribute or inner text); a caption-less button is a plain colored
//! hit-target.

use crate::geometry::{Color, RectTransform, TextAnchor};
use crate::scene::{Button, Graphic, SceneHost};

use super::{create_child, create_root, BuildError, BuiltWidget, WidgetContext};

pub fn build<H: SceneHost>(host: &mut H, ctx: &mut WidgetContext<'_>) -> Result<BuiltWidget, BuildError> {
    let root = create_root(host, ctx)?;
    host.attach(root, Graphic::colored(Color::WHITE).into())?;
    host.attach(
        root,
        Button {
            target_graphic: Some(root),
            interactable: true,
        }
        .into(),
    )?;

    if let Some(caption) = ctx.element.display_text().filter(|t| !t.is_empty()) {
        let label = create_child(host, "Text", root, RectTransform::stretched())?;
        let mut text = ctx.text(caption);
        text.alignment = TextAnchor::MiddleCenter;
        host.attach(label, text.into())?;
    }
    Ok(BuiltWidget::new(root))
}
