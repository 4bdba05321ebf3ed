//! Scene dumps.
//!
//! [`dump_scene`] prints a subtree as an indented outline, one node per line:
//! the node name, its resolved size, its anchored position and its
//! components. Numbers are rounded to two decimals so dumps are stable enough
//! for `insta` snapshots.

use std::fmt::Write;

use crate::scene::{Component, NodeId, SceneHost};

/// Render the subtree of `root` as text. Lines are joined with `'\n'`; there
/// is no trailing newline.
///
/// ```ignore
/// let dump = dump_scene(&scene, result.root().unwrap());
/// insta::assert_snapshot!(dump);
/// ```
pub fn dump_scene<H: SceneHost>(host: &H, root: NodeId) -> String {
    let mut lines = Vec::new();
    dump_node(host, root, 0, &mut lines);
    lines.join("\n")
}

fn dump_node<H: SceneHost>(host: &H, node: NodeId, depth: usize, lines: &mut Vec<String>) {
    let mut line = "  ".repeat(depth);
    line.push_str(host.name(node).unwrap_or("?"));

    let size = host.rect_size(node);
    let _ = write!(line, " {}x{}", num(size.width), num(size.height));
    if let Some(rect) = host.rect(node) {
        let pos = rect.anchored_position;
        let _ = write!(line, " @{},{}", num(pos.x), num(pos.y));
    }
    if !host.is_active(node) {
        line.push_str(" (inactive)");
    }

    let components: Vec<String> = host.components(node).iter().map(describe).collect();
    if !components.is_empty() {
        let _ = write!(line, " [{}]", components.join(", "));
    }
    lines.push(line);

    for &child in host.children(node) {
        dump_node(host, child, depth + 1, lines);
    }
}

/// Short form of a component: the kind plus its most telling field.
fn describe(component: &Component) -> String {
    match component {
        Component::Image(graphic) => match &graphic.sprite {
            Some(sprite) => format!("Image({})", sprite.name),
            None => format!("Image(a={})", num(graphic.color.a)),
        },
        Component::Text(text) => format!("Text({:?})", text.text),
        Component::LayoutGroup(group) => format!("LayoutGroup({:?})", group.axis),
        Component::CanvasGroup(group) => format!("CanvasGroup({})", num(group.alpha)),
        other => format!("{:?}", other.kind()),
    }
}

/// Round to two decimals and drop negative zero.
fn num(value: f32) -> f32 {
    (value * 100.0).round() / 100.0 + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Axis, RectTransform};
    use crate::scene::{Graphic, LayoutGroup, Scene, Text};

    #[test]
    fn outline_lists_sizes_and_components() {
        let mut scene = Scene::with_canvas(800.0, 600.0);
        let canvas = scene.root().unwrap();
        let panel = scene.create_node("Panel", canvas).unwrap();
        scene.set_rect(panel, RectTransform::top_left(200.0, 50.0)).unwrap();
        scene.attach(panel, Graphic::default().into()).unwrap();
        scene.attach(panel, LayoutGroup::new(Axis::Horizontal).into()).unwrap();
        let label = scene.create_node("Label", panel).unwrap();
        scene.attach(label, Text::new("Hi", "Font", 14.0).into()).unwrap();
        scene.set_active(label, false).unwrap();

        let dump = dump_scene(&scene, panel);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines[0], "Panel 200x50 @0,0 [Image(a=1), LayoutGroup(Horizontal)]");
        assert!(lines[1].starts_with("  Label "));
        assert!(lines[1].ends_with("(inactive) [Text(\"Hi\")]"));
    }

    #[test]
    fn rounding() {
        assert_eq!(num(-0.001), 0.0);
        assert_eq!(num(1.234_5), 1.23);
    }
}
