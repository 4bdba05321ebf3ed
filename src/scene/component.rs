//! Components attachable to scene nodes.
//!
//! Widget behaviours reference other nodes (a slider's fill rect, a toggle's
//! checkmark graphic) by [`NodeId`]; the graphic of a node is its [`Graphic`]
//! component.

use std::sync::Arc;

use crate::geometry::{Axis, Color, Size, Spacing, TextAnchor};
use crate::resource::Sprite;

use super::node::NodeId;

// ---------------------------------------------------------------------------
// Graphics
// ---------------------------------------------------------------------------

/// How a sprite fills its rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageType {
    #[default]
    Simple,
    Tiled,
}

/// A colored, optionally textured, rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Graphic {
    pub color: Color,
    pub sprite: Option<Arc<Sprite>>,
    pub preserve_aspect: bool,
    pub image_type: ImageType,
    pub raycast_target: bool,
}

impl Default for Graphic {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            sprite: None,
            preserve_aspect: false,
            image_type: ImageType::Simple,
            raycast_target: true,
        }
    }
}

impl Graphic {
    pub fn colored(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }
}

/// A text renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub text: String,
    pub font: String,
    pub font_size: f32,
    pub color: Color,
    pub alignment: TextAnchor,
    pub bold: bool,
    pub italic: bool,
    /// Wrap horizontally instead of overflowing.
    pub wrap: bool,
}

impl Text {
    pub fn new(text: impl Into<String>, font: impl Into<String>, font_size: f32) -> Self {
        Self {
            text: text.into(),
            font: font.into(),
            font_size,
            color: Color::rgb(0.196, 0.196, 0.196),
            alignment: TextAnchor::MiddleLeft,
            bold: false,
            italic: false,
            wrap: true,
        }
    }
}

/// Stencil mask clipping children to the node's graphic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask {
    pub show_mask_graphic: bool,
}

/// Rectangular clipping of children without a graphic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RectMask;

// ---------------------------------------------------------------------------
// Widget behaviours
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub target_graphic: Option<NodeId>,
    pub interactable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    /// Click target (the background).
    pub target_graphic: Option<NodeId>,
    /// On/off visual (the checkmark).
    pub graphic: Option<NodeId>,
    pub is_on: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    pub fill_rect: Option<NodeId>,
    pub handle_rect: Option<NodeId>,
    pub target_graphic: Option<NodeId>,
    pub min_value: f32,
    pub max_value: f32,
    pub value: f32,
    pub whole_numbers: bool,
}

impl Slider {
    /// Value mapped into `0..=1`; a degenerate or overflowing range maps to 0.
    pub fn normalized_value(&self) -> f32 {
        let range = self.max_value - self.min_value;
        if range.abs() <= f32::EPSILON || !range.is_finite() {
            return 0.0;
        }
        ((self.value - self.min_value) / range).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    pub text_component: Option<NodeId>,
    pub placeholder: Option<NodeId>,
    pub target_graphic: Option<NodeId>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    pub target_graphic: Option<NodeId>,
    pub template: Option<NodeId>,
    pub caption_text: Option<NodeId>,
    pub item_text: Option<NodeId>,
    pub options: Vec<String>,
    pub value: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRect {
    pub content: Option<NodeId>,
    pub viewport: Option<NodeId>,
    pub horizontal: bool,
    pub vertical: bool,
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Arranges the node's direct children along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutGroup {
    pub axis: Axis,
    pub reverse: bool,
    pub child_alignment: TextAnchor,
    pub spacing: f32,
    pub padding: Spacing,
    pub child_force_expand_width: bool,
    pub child_force_expand_height: bool,
}

impl LayoutGroup {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            reverse: false,
            child_alignment: TextAnchor::UpperLeft,
            spacing: 0.0,
            padding: Spacing::ZERO,
            child_force_expand_width: false,
            child_force_expand_height: false,
        }
    }
}

/// Cross-axis placement of one child inside a layout group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossAlign {
    Start,
    Center,
    End,
    Stretch,
}

/// Size hints consumed by a parent's [`LayoutGroup`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutElement {
    pub min_width: Option<f32>,
    pub min_height: Option<f32>,
    pub preferred_width: Option<f32>,
    pub preferred_height: Option<f32>,
    pub flexible_width: Option<f32>,
    pub flexible_height: Option<f32>,
    pub align_self: Option<CrossAlign>,
    pub ignore_layout: bool,
}

impl LayoutElement {
    pub fn preferred(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.preferred_width,
            Axis::Vertical => self.preferred_height,
        }
    }

    pub fn flexible(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.flexible_width,
            Axis::Vertical => self.flexible_height,
        }
    }

    pub fn min(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.min_width,
            Axis::Vertical => self.min_height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasGroup {
    pub alpha: f32,
}

/// Marks the root of a converted document and the canvas it was built for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRoot {
    pub reference_size: Size,
}

// ---------------------------------------------------------------------------
// Component enum
// ---------------------------------------------------------------------------

/// Every component a node can carry.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Image(Graphic),
    Text(Text),
    Mask(Mask),
    RectMask(RectMask),
    Button(Button),
    Toggle(Toggle),
    Slider(Slider),
    InputField(InputField),
    Dropdown(Dropdown),
    ScrollRect(ScrollRect),
    LayoutGroup(LayoutGroup),
    LayoutElement(LayoutElement),
    CanvasGroup(CanvasGroup),
    LayoutRoot(LayoutRoot),
}

/// Discriminant of [`Component`], for queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Image,
    Text,
    Mask,
    RectMask,
    Button,
    Toggle,
    Slider,
    InputField,
    Dropdown,
    ScrollRect,
    LayoutGroup,
    LayoutElement,
    CanvasGroup,
    LayoutRoot,
}

/// Typed access to one [`Component`] variant.
pub trait ComponentData: Sized {
    const KIND: ComponentKind;
    fn from_component(component: &Component) -> Option<&Self>;
    fn from_component_mut(component: &mut Component) -> Option<&mut Self>;
}

macro_rules! component_variants {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        impl Component {
            pub fn kind(&self) -> ComponentKind {
                match self {
                    $(Component::$variant(_) => ComponentKind::$variant,)+
                }
            }
        }

        $(
            impl ComponentData for $ty {
                const KIND: ComponentKind = ComponentKind::$variant;

                fn from_component(component: &Component) -> Option<&Self> {
                    match component {
                        Component::$variant(data) => Some(data),
                        _ => None,
                    }
                }

                fn from_component_mut(component: &mut Component) -> Option<&mut Self> {
                    match component {
                        Component::$variant(data) => Some(data),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for Component {
                fn from(data: $ty) -> Self {
                    Component::$variant(data)
                }
            }
        )+
    };
}

component_variants! {
    Image(Graphic),
    Text(Text),
    Mask(Mask),
    RectMask(RectMask),
    Button(Button),
    Toggle(Toggle),
    Slider(Slider),
    InputField(InputField),
    Dropdown(Dropdown),
    ScrollRect(ScrollRect),
    LayoutGroup(LayoutGroup),
    LayoutElement(LayoutElement),
    CanvasGroup(CanvasGroup),
    LayoutRoot(LayoutRoot),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_access() {
        let mut c = Component::from(Graphic::colored(Color::BLACK));
        assert_eq!(c.kind(), ComponentKind::Image);
        assert_eq!(Graphic::from_component(&c).map(|g| g.color), Some(Color::BLACK));
        assert!(Text::from_component(&c).is_none());
        if let Some(g) = Graphic::from_component_mut(&mut c) {
            g.preserve_aspect = true;
        }
        assert!(matches!(c, Component::Image(Graphic { preserve_aspect: true, .. })));
    }

    #[test]
    fn slider_normalized_value() {
        let slider = Slider {
            fill_rect: None,
            handle_rect: None,
            target_graphic: None,
            min_value: 10.0,
            max_value: 20.0,
            value: 12.5,
            whole_numbers: false,
        };
        assert!((slider.normalized_value() - 0.25).abs() < 1e-6);
        let flat = Slider { max_value: 10.0, ..slider };
        assert_eq!(flat.normalized_value(), 0.0);
        let huge = Slider { min_value: -3e38, max_value: 3e38, value: 0.0, ..slider };
        assert_eq!(huge.normalized_value(), 0.0);
    }

    #[test]
    fn layout_element_axis_access() {
        let el = LayoutElement {
            preferred_width: Some(50.0),
            flexible_height: Some(1.0),
            ..LayoutElement::default()
        };
        assert_eq!(el.preferred(Axis::Horizontal), Some(50.0));
        assert_eq!(el.preferred(Axis::Vertical), None);
        assert_eq!(el.flexible(Axis::Vertical), Some(1.0));
    }
}
