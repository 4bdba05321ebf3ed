//! Image: a graphic whose sprite comes from the `src`, `source` or `image`
//! attribute through the resource resolver.

use crate::scene::{Graphic, SceneHost};

use super::{create_root, BuildError, BuiltWidget, WidgetContext};

const SOURCE_ATTRIBUTES: [&str; 3] = ["src", "source", "image"];

pub fn build<H: SceneHost>(host: &mut H, ctx: &mut WidgetContext<'_>) -> Result<BuiltWidget, BuildError> {
    let root = create_root(host, ctx)?;
    let mut built = BuiltWidget::new(root);
    let mut graphic = Graphic {
        preserve_aspect: true,
        ..Graphic::default()
    };

    let source = SOURCE_ATTRIBUTES
        .iter()
        .find_map(|attr| ctx.element.attr(attr))
        .filter(|path| !path.trim().is_empty());
    if let Some(path) = source {
        match ctx.resources.resolve(path) {
            Some(sprite) => {
                if sprite.is_placeholder() {
                    built
                        .warnings
                        .push(format!("vector image '{path}' replaced by a placeholder texture"));
                }
                graphic.sprite = Some(sprite);
            }
            None => built.warnings.push(format!("image '{path}' could not be resolved")),
        }
    }

    host.attach(root, graphic.into())?;
    Ok(built)
}
