//! Plain containers, generic fields and unrecognized tags.
//!
//! All three build a single node with a translucent background so the element
//! stays visible; unrecognized tags are magenta and raise a warning.

use crate::geometry::Color;
use crate::scene::{Graphic, SceneHost};
use crate::widget::WidgetKind;

use super::{create_root, BuildError, BuiltWidget, WidgetContext};

pub const CONTAINER_COLOR: Color = Color::rgba(0.2, 0.2, 0.2, 0.1);
pub const FIELD_COLOR: Color = Color::rgba(0.3, 0.3, 0.3, 0.25);
pub const UNRECOGNIZED_COLOR: Color = Color::rgba(1.0, 0.0, 1.0, 0.25);

pub fn build<H: SceneHost>(
    host: &mut H,
    ctx: &mut WidgetContext<'_>,
    kind: WidgetKind,
) -> Result<BuiltWidget, BuildError> {
    let root = create_root(host, ctx)?;
    let color = match kind {
        WidgetKind::GenericField => FIELD_COLOR,
        WidgetKind::Unrecognized => UNRECOGNIZED_COLOR,
        _ => CONTAINER_COLOR,
    };
    host.attach(root, Graphic::colored(color).into())?;

    let mut built = BuiltWidget::new(root);
    if kind == WidgetKind::Unrecognized {
        built.warnings.push(format!(
            "unrecognized element <{}>, built as a plain container",
            ctx.element.tag_name
        ));
    }
    Ok(built)
}
