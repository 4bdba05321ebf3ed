//! Layout-group arrangement backed by taffy flexbox.
//!
//! For every active node carrying a [`LayoutGroup`], its active, non-ignored
//! direct children are laid out as flex items of a one-off taffy tree sized to
//! the node's rectangle. Results are written back as top-left anchored
//! rectangles. Parents are processed before children, so nested groups see the
//! sizes their parents assigned.

use taffy::prelude::{
    AlignItems, AvailableSpace, Dimension, Display, FlexDirection, FromLength, JustifyContent,
    LengthPercentage, TaffyAuto, TaffyTree,
};

use crate::geometry::{Axis, RectTransform, Size, TextAnchor, Vec2};

use super::component::{CrossAlign, LayoutElement, LayoutGroup};
use super::host::SceneHost;
use super::node::NodeId;
use super::tree::Scene;

/// Arrange every layout group in the subtree of `root`.
pub(crate) fn rebuild(scene: &mut Scene, root: NodeId) {
    for node in scene.walk_depth_first(root) {
        if !scene.is_active(node) {
            continue;
        }
        let Some(group) = scene.component::<LayoutGroup>(node).copied() else {
            continue;
        };
        if let Err(err) = arrange_group(scene, node, &group) {
            tracing::warn!(node = %scene.path(node), error = %err, "layout group arrangement failed");
        }
    }
}

fn arrange_group(scene: &mut Scene, node: NodeId, group: &LayoutGroup) -> taffy::TaffyResult<()> {
    let container = scene.rect_size(node);
    let items: Vec<NodeId> = scene
        .children(node)
        .iter()
        .copied()
        .filter(|&child| {
            scene.is_active(child)
                && !scene
                    .component::<LayoutElement>(child)
                    .is_some_and(|e| e.ignore_layout)
        })
        .collect();
    if items.is_empty() {
        return Ok(());
    }

    let mut tree: TaffyTree<()> = TaffyTree::new();
    let mut leaves = Vec::with_capacity(items.len());
    for &child in &items {
        let hints = scene.component::<LayoutElement>(child).copied().unwrap_or_default();
        leaves.push(tree.new_leaf(item_style(scene.rect_size(child), &hints, group))?);
    }
    let flex_root = tree.new_with_children(container_style(group, container), &leaves)?;
    tree.compute_layout(
        flex_root,
        taffy::geometry::Size {
            width: AvailableSpace::Definite(container.width),
            height: AvailableSpace::Definite(container.height),
        },
    )?;

    for (&child, &leaf) in items.iter().zip(&leaves) {
        let layout = tree.layout(leaf)?;
        // taffy's y grows downward; the scene's grows upward.
        let rect = RectTransform::top_left(layout.size.width, layout.size.height)
            .with_position(Vec2::new(layout.location.x, -layout.location.y));
        if let Some(data) = scene.get_mut(child) {
            data.rect = rect;
        }
    }
    Ok(())
}

/// Fraction along `axis` measured from the flex start edge (left or top).
fn start_fraction(anchor: TextAnchor, axis: Axis) -> f32 {
    match axis {
        Axis::Horizontal => anchor.horizontal(),
        Axis::Vertical => 1.0 - anchor.vertical(),
    }
}

fn justify_for(fraction: f32) -> JustifyContent {
    if fraction < 0.25 {
        JustifyContent::FlexStart
    } else if fraction > 0.75 {
        JustifyContent::FlexEnd
    } else {
        JustifyContent::Center
    }
}

fn align_for(fraction: f32) -> AlignItems {
    if fraction < 0.25 {
        AlignItems::FlexStart
    } else if fraction > 0.75 {
        AlignItems::FlexEnd
    } else {
        AlignItems::Center
    }
}

fn force_expand(group: &LayoutGroup, axis: Axis) -> bool {
    match axis {
        Axis::Horizontal => group.child_force_expand_width,
        Axis::Vertical => group.child_force_expand_height,
    }
}

fn container_style(group: &LayoutGroup, size: Size) -> taffy::Style {
    let main = group.axis;
    let cross = main.cross();

    let mut style = taffy::Style::default();
    style.display = Display::Flex;
    style.flex_direction = match (main, group.reverse) {
        (Axis::Horizontal, false) => FlexDirection::Row,
        (Axis::Horizontal, true) => FlexDirection::RowReverse,
        (Axis::Vertical, false) => FlexDirection::Column,
        (Axis::Vertical, true) => FlexDirection::ColumnReverse,
    };
    style.size = taffy::geometry::Size {
        width: Dimension::from_length(size.width),
        height: Dimension::from_length(size.height),
    };
    style.padding = taffy::geometry::Rect {
        top: LengthPercentage::from_length(group.padding.top),
        right: LengthPercentage::from_length(group.padding.right),
        bottom: LengthPercentage::from_length(group.padding.bottom),
        left: LengthPercentage::from_length(group.padding.left),
    };
    let gap = LengthPercentage::from_length(group.spacing);
    style.gap = taffy::geometry::Size {
        width: gap,
        height: gap,
    };
    style.justify_content = Some(justify_for(start_fraction(group.child_alignment, main)));
    style.align_items = Some(if force_expand(group, cross) {
        AlignItems::Stretch
    } else {
        align_for(start_fraction(group.child_alignment, cross))
    });
    style
}

fn item_style(current: Size, hints: &LayoutElement, group: &LayoutGroup) -> taffy::Style {
    let main = group.axis;
    let cross = main.cross();
    let stretch_cross = hints.align_self == Some(CrossAlign::Stretch) || force_expand(group, cross);

    let extent = |axis: Axis| -> Dimension {
        if axis == cross && stretch_cross {
            Dimension::AUTO
        } else {
            Dimension::from_length(hints.preferred(axis).unwrap_or(current.get(axis)).max(0.0))
        }
    };
    let min = |axis: Axis| -> Dimension {
        hints
            .min(axis)
            .map(Dimension::from_length)
            .unwrap_or(Dimension::AUTO)
    };

    let mut style = taffy::Style::default();
    style.size = taffy::geometry::Size {
        width: extent(Axis::Horizontal),
        height: extent(Axis::Vertical),
    };
    style.min_size = taffy::geometry::Size {
        width: min(Axis::Horizontal),
        height: min(Axis::Vertical),
    };
    style.flex_grow = hints.flexible(main).unwrap_or(0.0).max(0.0);
    if force_expand(group, main) && style.flex_grow == 0.0 {
        style.flex_grow = 1.0;
    }
    style.flex_shrink = 0.0;
    style.align_self = hints.align_self.map(|align| match align {
        CrossAlign::Start => AlignItems::FlexStart,
        CrossAlign::Center => AlignItems::Center,
        CrossAlign::End => AlignItems::FlexEnd,
        CrossAlign::Stretch => AlignItems::Stretch,
    });
    style
}
