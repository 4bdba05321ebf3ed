//! CSS scalar values: Scalar, Unit (px, %, em, rem, vw, vh, auto).

use std::fmt;

/// A CSS length unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Canvas pixels (the default when a number has no unit).
    Px,
    /// Percentage of the parent rectangle's current dimension.
    Percent,
    /// Multiple of the node's font size.
    Em,
    /// Multiple of the fixed root font size.
    Rem,
    /// Percentage of the canvas width.
    Vw,
    /// Percentage of the canvas height.
    Vh,
    /// Content-based size.
    Auto,
}

impl Unit {
    fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Percent => "%",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
            Unit::Auto => "",
        }
    }
}

/// A scalar value with a unit, e.g. `10px`, `50%`, `1.5em`, `auto`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scalar {
    pub value: f32,
    pub unit: Unit,
}

impl Scalar {
    pub const ZERO: Scalar = Scalar::px(0.0);

    /// Create a scalar in pixels.
    pub const fn px(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Px,
        }
    }

    /// Create a scalar as a percentage.
    pub const fn percent(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Percent,
        }
    }

    pub const fn em(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Em,
        }
    }

    pub const fn rem(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Rem,
        }
    }

    /// Create a scalar in viewport-width units.
    pub const fn vw(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Vw,
        }
    }

    /// Create a scalar in viewport-height units.
    pub const fn vh(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Vh,
        }
    }

    /// Create an auto scalar.
    pub const fn auto() -> Self {
        Self {
            value: 0.0,
            unit: Unit::Auto,
        }
    }

    /// Returns `true` if this scalar is auto-sized.
    pub fn is_auto(&self) -> bool {
        self.unit == Unit::Auto
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit == Unit::Auto {
            return write!(f, "auto");
        }
        if self.value.fract() == 0.0 {
            write!(f, "{}{}", self.value as i64, self.unit.suffix())
        } else {
            write!(f, "{}{}", self.value, self.unit.suffix())
        }
    }
}

/// Four-sided scalar values (top, right, bottom, left) like CSS margin/padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarBox {
    pub top: Scalar,
    pub right: Scalar,
    pub bottom: Scalar,
    pub left: Scalar,
}

impl ScalarBox {
    /// Create a box with the same scalar on all four sides.
    pub fn all(v: Scalar) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// Create a box with symmetric vertical and horizontal values.
    pub fn symmetric(vertical: Scalar, horizontal: Scalar) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create a box with explicit values for all four sides.
    pub fn new(top: Scalar, right: Scalar, bottom: Scalar, left: Scalar) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}
