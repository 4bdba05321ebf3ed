//! Label: one node with a text component.

use crate::scene::SceneHost;

use super::{create_root, BuildError, BuiltWidget, WidgetContext};

pub fn build<H: SceneHost>(host: &mut H, ctx: &mut WidgetContext<'_>) -> Result<BuiltWidget, BuildError> {
    let root = create_root(host, ctx)?;
    let text = ctx.text(ctx.element.display_text().unwrap_or_default());
    host.attach(root, text.into())?;
    Ok(BuiltWidget::new(root))
}
