//! Core geometry types: Vec2, Size, Axis, RectTransform, Spacing, Color.
//!
//! Scene nodes are positioned relative to their parent through anchors, a pivot
//! and a pixel offset rather than absolute coordinates. [`RectTransform`] holds
//! that description and implements the conversions between the stored fields and
//! the derived edge offsets.

use std::ops::{Add, Mul, Neg, Sub};

// ---------------------------------------------------------------------------
// Vec2
// ---------------------------------------------------------------------------

/// A 2D vector in canvas pixels (x right, y up).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const ONE: Vec2 = Vec2 { x: 1.0, y: 1.0 };
    pub const HALF: Vec2 = Vec2 { x: 0.5, y: 0.5 };
    /// The top-left corner in anchor space.
    pub const TOP_LEFT: Vec2 = Vec2 { x: 0.0, y: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise product.
    #[inline]
    pub fn scale(self, other: Vec2) -> Vec2 {
        Vec2 { x: self.x * other.x, y: self.y * other.y }
    }

    /// Read the component along `axis`.
    #[inline]
    pub fn get(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Write the component along `axis`.
    #[inline]
    pub fn set(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
    }

    /// Whether both components are within `epsilon` of `other`.
    pub fn approx_eq(self, other: Vec2, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2 { x: -self.x, y: -self.y }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2 { x: self.x * rhs, y: self.y * rhs }
    }
}

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

/// One of the two layout axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The other axis.
    #[inline]
    pub const fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A width/height pair in canvas pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The extent along `axis`.
    #[inline]
    pub fn get(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2 { x: self.width, y: self.height }
    }
}

impl From<Vec2> for Size {
    fn from(v: Vec2) -> Self {
        Size { width: v.x, height: v.y }
    }
}

// ---------------------------------------------------------------------------
// RectTransform
// ---------------------------------------------------------------------------

/// Parent-relative rectangle: two anchors (fractions of the parent size), a
/// pivot (fraction of the own size), the pivot's offset from the anchor
/// reference point, and the size beyond the anchored extent.
///
/// The resolved size against a parent of size `P` is
/// `P * (anchor_max - anchor_min) + size_delta`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RectTransform {
    pub anchor_min: Vec2,
    pub anchor_max: Vec2,
    pub pivot: Vec2,
    pub anchored_position: Vec2,
    pub size_delta: Vec2,
}

impl Default for RectTransform {
    /// Centered 100x100, matching a freshly created host node.
    fn default() -> Self {
        Self {
            anchor_min: Vec2::HALF,
            anchor_max: Vec2::HALF,
            pivot: Vec2::HALF,
            anchored_position: Vec2::ZERO,
            size_delta: Vec2::new(100.0, 100.0),
        }
    }
}

impl RectTransform {
    /// A rectangle pinned to the parent's top-left corner with a fixed size.
    pub fn top_left(width: f32, height: f32) -> Self {
        Self {
            anchor_min: Vec2::TOP_LEFT,
            anchor_max: Vec2::TOP_LEFT,
            pivot: Vec2::TOP_LEFT,
            anchored_position: Vec2::ZERO,
            size_delta: Vec2::new(width, height),
        }
    }

    /// A rectangle that fills its parent exactly.
    pub fn stretched() -> Self {
        Self {
            anchor_min: Vec2::ZERO,
            anchor_max: Vec2::ONE,
            pivot: Vec2::HALF,
            anchored_position: Vec2::ZERO,
            size_delta: Vec2::ZERO,
        }
    }

    /// A rectangle centered on the parent with a fixed size.
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            size_delta: Vec2::new(width, height),
            ..Self::default()
        }
    }

    /// Builder: set both anchors.
    pub fn with_anchors(mut self, min: Vec2, max: Vec2) -> Self {
        self.anchor_min = min;
        self.anchor_max = max;
        self
    }

    /// Builder: set the pivot.
    pub fn with_pivot(mut self, pivot: Vec2) -> Self {
        self.pivot = pivot;
        self
    }

    /// Builder: set the anchored position.
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.anchored_position = position;
        self
    }

    /// Builder: set the size delta.
    pub fn with_size_delta(mut self, size_delta: Vec2) -> Self {
        self.size_delta = size_delta;
        self
    }

    /// Builder: set edge offsets (lower-left and upper-right corners).
    pub fn with_offsets(mut self, min: Vec2, max: Vec2) -> Self {
        self.set_offset_min(min);
        self.set_offset_max(max);
        self
    }

    /// Whether the anchors on `axis` coincide (fixed size along that axis).
    #[inline]
    pub fn is_fixed(&self, axis: Axis) -> bool {
        self.anchor_min.get(axis) == self.anchor_max.get(axis)
    }

    /// Resolved size against a parent of `parent` size.
    pub fn size(&self, parent: Size) -> Size {
        let span = self.anchor_max - self.anchor_min;
        Size {
            width: parent.width * span.x + self.size_delta.x,
            height: parent.height * span.y + self.size_delta.y,
        }
    }

    /// Set the resolved size along `axis`, keeping the current anchors.
    pub fn set_size_with_current_anchors(&mut self, axis: Axis, size: f32, parent: Size) {
        let span = self.anchor_max.get(axis) - self.anchor_min.get(axis);
        self.size_delta.set(axis, size - parent.get(axis) * span);
    }

    /// Offset of the lower-left corner from the lower-left anchor.
    pub fn offset_min(&self) -> Vec2 {
        self.anchored_position - self.size_delta.scale(self.pivot)
    }

    /// Offset of the upper-right corner from the upper-right anchor.
    pub fn offset_max(&self) -> Vec2 {
        self.anchored_position + self.size_delta.scale(Vec2::ONE - self.pivot)
    }

    /// Move the lower-left corner, keeping the upper-right one in place.
    pub fn set_offset_min(&mut self, value: Vec2) {
        let delta = value - self.offset_min();
        self.size_delta = self.size_delta - delta;
        self.anchored_position = self.anchored_position + delta.scale(Vec2::ONE - self.pivot);
    }

    /// Move the upper-right corner, keeping the lower-left one in place.
    pub fn set_offset_max(&mut self, value: Vec2) {
        let delta = value - self.offset_max();
        self.size_delta = self.size_delta + delta;
        self.anchored_position = self.anchored_position + delta.scale(self.pivot);
    }

    /// Re-anchor one axis to the same fraction on both anchors and the pivot,
    /// preserving the resolved size along that axis.
    pub fn pin_axis(&mut self, axis: Axis, fraction: f32, parent: Size) {
        let size = self.size(parent).get(axis);
        self.anchor_min.set(axis, fraction);
        self.anchor_max.set(axis, fraction);
        self.pivot.set(axis, fraction);
        self.size_delta.set(axis, size);
    }

    /// Stretch one axis across the whole parent with no offsets.
    pub fn stretch_axis(&mut self, axis: Axis) {
        self.anchor_min.set(axis, 0.0);
        self.anchor_max.set(axis, 1.0);
        self.anchored_position.set(axis, 0.0);
        self.size_delta.set(axis, 0.0);
    }

    /// Geometric equality within `epsilon` on every field.
    pub fn approx_eq(&self, other: &RectTransform, epsilon: f32) -> bool {
        self.anchor_min.approx_eq(other.anchor_min, epsilon)
            && self.anchor_max.approx_eq(other.anchor_max, epsilon)
            && self.pivot.approx_eq(other.pivot, epsilon)
            && self.anchored_position.approx_eq(other.anchored_position, epsilon)
            && self.size_delta.approx_eq(other.size_delta, epsilon)
    }
}

// ---------------------------------------------------------------------------
// Spacing
// ---------------------------------------------------------------------------

/// Spacing around the four sides of a rectangle, used for margin and padding.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Spacing {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Spacing {
    /// Zero spacing on all sides.
    pub const ZERO: Spacing = Spacing { top: 0.0, right: 0.0, bottom: 0.0, left: 0.0 };

    /// Create spacing with explicit values for each side.
    #[inline]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    /// All four sides set to the same value.
    #[inline]
    pub const fn all(value: f32) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    /// Symmetric spacing: `vertical` for top/bottom, `horizontal` for left/right.
    #[inline]
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self { top: vertical, right: horizontal, bottom: vertical, left: horizontal }
    }

    /// Total horizontal extent: `left + right`.
    #[inline]
    pub fn width(self) -> f32 {
        self.left + self.right
    }

    /// Total vertical extent: `top + bottom`.
    #[inline]
    pub fn height(self) -> f32 {
        self.top + self.bottom
    }
}

impl Add for Spacing {
    type Output = Spacing;
    #[inline]
    fn add(self, rhs: Spacing) -> Spacing {
        Spacing {
            top: self.top + rhs.top,
            right: self.right + rhs.right,
            bottom: self.bottom + rhs.bottom,
            left: self.left + rhs.left,
        }
    }
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// Linear RGBA color with components in `0.0..=1.0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const CLEAR: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Whether the color is fully opaque.
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

// ---------------------------------------------------------------------------
// TextAnchor
// ---------------------------------------------------------------------------

/// Where text sits inside its rectangle: a 3×3 grid of vertical and
/// horizontal placements.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    UpperLeft,
    UpperCenter,
    UpperRight,
    #[default]
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    LowerLeft,
    LowerCenter,
    LowerRight,
}

impl TextAnchor {
    /// Horizontal placement as a fraction of the width (0 left, 1 right).
    pub fn horizontal(self) -> f32 {
        match self {
            TextAnchor::UpperLeft | TextAnchor::MiddleLeft | TextAnchor::LowerLeft => 0.0,
            TextAnchor::UpperCenter | TextAnchor::MiddleCenter | TextAnchor::LowerCenter => 0.5,
            TextAnchor::UpperRight | TextAnchor::MiddleRight | TextAnchor::LowerRight => 1.0,
        }
    }

    /// Vertical placement as a fraction of the height (0 bottom, 1 top).
    pub fn vertical(self) -> f32 {
        match self {
            TextAnchor::UpperLeft | TextAnchor::UpperCenter | TextAnchor::UpperRight => 1.0,
            TextAnchor::MiddleLeft | TextAnchor::MiddleCenter | TextAnchor::MiddleRight => 0.5,
            TextAnchor::LowerLeft | TextAnchor::LowerCenter | TextAnchor::LowerRight => 0.0,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
