//! Property parsing: property names and value strings into typed values.
//!
//! Property names resolve to the closed [`Property`] enum (including the
//! `-unity-*` aliases). Values are interpreted lazily by the cascade through
//! the `parse_*` functions here; every failure is a [`PropertyError`] that the
//! cascade turns into a warning while leaving the node unchanged.

use crate::css::scalar::{Scalar, ScalarBox, Unit};
use crate::css::tokenizer::{tokenize, Token};
use crate::geometry::{Color, TextAnchor};

/// Errors from property parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PropertyError {
    #[error("unknown property: {0}")]
    UnknownProperty(String),
    #[error("invalid value for {property}: {message}")]
    InvalidValue { property: String, message: String },
}

fn invalid(property: &str, message: impl Into<String>) -> PropertyError {
    PropertyError::InvalidValue {
        property: property.to_string(),
        message: message.into(),
    }
}

// ---------------------------------------------------------------------------
// Property names
// ---------------------------------------------------------------------------

/// Every style property the cascade knows how to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
    FlexBasis,
    FlexGrow,
    FlexShrink,
    Left,
    Top,
    Right,
    Bottom,
    Position,
    Margin,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    Padding,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    FlexDirection,
    JustifyContent,
    AlignItems,
    AlignSelf,
    Display,
    BackgroundColor,
    Color,
    FontSize,
    FontWeight,
    FontStyle,
    BackgroundImage,
    BackgroundSize,
    BackgroundRepeat,
    ImageTintColor,
    Opacity,
    TextAlign,
    WhiteSpace,
    Overflow,
}

/// Accepted spellings, including USS aliases. Canonical name first per property.
const NAMES: &[(&str, Property)] = &[
    ("width", Property::Width),
    ("height", Property::Height),
    ("min-width", Property::MinWidth),
    ("min-height", Property::MinHeight),
    ("max-width", Property::MaxWidth),
    ("max-height", Property::MaxHeight),
    ("flex-basis", Property::FlexBasis),
    ("flex-grow", Property::FlexGrow),
    ("flex-shrink", Property::FlexShrink),
    ("left", Property::Left),
    ("top", Property::Top),
    ("right", Property::Right),
    ("bottom", Property::Bottom),
    ("position", Property::Position),
    ("margin", Property::Margin),
    ("margin-top", Property::MarginTop),
    ("margin-right", Property::MarginRight),
    ("margin-bottom", Property::MarginBottom),
    ("margin-left", Property::MarginLeft),
    ("padding", Property::Padding),
    ("padding-top", Property::PaddingTop),
    ("padding-right", Property::PaddingRight),
    ("padding-bottom", Property::PaddingBottom),
    ("padding-left", Property::PaddingLeft),
    ("flex-direction", Property::FlexDirection),
    ("justify-content", Property::JustifyContent),
    ("align-items", Property::AlignItems),
    ("align-self", Property::AlignSelf),
    ("display", Property::Display),
    ("background-color", Property::BackgroundColor),
    ("color", Property::Color),
    ("font-size", Property::FontSize),
    ("font-weight", Property::FontWeight),
    ("font-style", Property::FontStyle),
    ("-unity-font-style", Property::FontStyle),
    ("background-image", Property::BackgroundImage),
    ("background-size", Property::BackgroundSize),
    ("-unity-background-scale-mode", Property::BackgroundSize),
    ("background-repeat", Property::BackgroundRepeat),
    ("image-tint-color", Property::ImageTintColor),
    ("tint-color", Property::ImageTintColor),
    ("-unity-background-image-tint-color", Property::ImageTintColor),
    ("opacity", Property::Opacity),
    ("text-align", Property::TextAlign),
    ("-unity-text-align", Property::TextAlign),
    ("white-space", Property::WhiteSpace),
    ("overflow", Property::Overflow),
];

impl Property {
    /// Resolve a property name (case-insensitive, aliases included).
    pub fn from_name(name: &str) -> Result<Property, PropertyError> {
        let lower = name.trim().to_ascii_lowercase();
        NAMES
            .iter()
            .find(|(n, _)| *n == lower)
            .map(|(_, p)| *p)
            .ok_or_else(|| PropertyError::UnknownProperty(name.trim().to_string()))
    }

    /// Canonical CSS name.
    pub fn name(self) -> &'static str {
        NAMES
            .iter()
            .find(|(_, p)| *p == self)
            .map(|(n, _)| *n)
            .unwrap_or("?")
    }
}

// ---------------------------------------------------------------------------
// Lengths and numbers
// ---------------------------------------------------------------------------

/// Value tokens with `!important` dropped.
fn value_tokens(property: &str, text: &str) -> Result<Vec<(Token, String)>, PropertyError> {
    let tokens = tokenize(text).map_err(|e| invalid(property, e.to_string()))?;
    Ok(tokens
        .into_iter()
        .filter(|(t, _)| *t != Token::Important)
        .collect())
}

fn parse_float(property: &str, text: &str) -> Result<f32, PropertyError> {
    match text.parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(invalid(property, format!("not a finite number: {text:?}"))),
    }
}

fn scalar_from_token(property: &str, token: &Token, text: &str) -> Result<Scalar, PropertyError> {
    match token {
        Token::Number => Ok(Scalar::px(parse_float(property, text)?)),
        Token::Dimension => {
            let split = text
                .find(|c: char| c.is_ascii_alphabetic() || c == '%')
                .unwrap_or(text.len());
            let value = parse_float(property, &text[..split])?;
            let unit = match &text[split..] {
                "px" => Unit::Px,
                "%" => Unit::Percent,
                "em" => Unit::Em,
                "rem" => Unit::Rem,
                "vw" => Unit::Vw,
                "vh" => Unit::Vh,
                other => return Err(invalid(property, format!("unsupported unit: {other}"))),
            };
            Ok(Scalar { value, unit })
        }
        Token::Ident if text.eq_ignore_ascii_case("auto") => Ok(Scalar::auto()),
        _ => Err(invalid(
            property,
            format!("expected number, length or 'auto', got {text:?}"),
        )),
    }
}

/// Parse a single length (`12`, `12px`, `50%`, `1.5em`, `2rem`, `10vw`, `auto`).
pub fn parse_scalar(property: &str, text: &str) -> Result<Scalar, PropertyError> {
    let tokens = value_tokens(property, text)?;
    match tokens.as_slice() {
        [(token, text)] => scalar_from_token(property, token, text),
        [] => Err(invalid(property, "empty value")),
        _ => Err(invalid(property, format!("expected one value, got {text:?}"))),
    }
}

/// Parse 1-4 lengths into a [`ScalarBox`] (CSS shorthand).
///
/// - 1 value: all sides
/// - 2 values: vertical, horizontal
/// - 3 values: top, horizontal, bottom
/// - 4 values: top, right, bottom, left
pub fn parse_scalar_box(property: &str, text: &str) -> Result<ScalarBox, PropertyError> {
    let values = value_tokens(property, text)?
        .iter()
        .map(|(token, text)| scalar_from_token(property, token, text))
        .collect::<Result<Vec<_>, _>>()?;
    match values.as_slice() {
        [all] => Ok(ScalarBox::all(*all)),
        [vertical, horizontal] => Ok(ScalarBox::symmetric(*vertical, *horizontal)),
        [top, horizontal, bottom] => Ok(ScalarBox::new(*top, *horizontal, *bottom, *horizontal)),
        [top, right, bottom, left] => Ok(ScalarBox::new(*top, *right, *bottom, *left)),
        other => Err(invalid(
            property,
            format!("expected 1-4 values, got {}", other.len()),
        )),
    }
}

/// Parse a plain number (`flex-grow`, `opacity`). A percentage is divided by 100.
pub fn parse_number(property: &str, text: &str) -> Result<f32, PropertyError> {
    let tokens = value_tokens(property, text)?;
    match tokens.as_slice() {
        [(Token::Number, text)] => parse_float(property, text),
        [(Token::Dimension, text)] if text.ends_with('%') => {
            Ok(parse_float(property, text.trim_end_matches('%'))? / 100.0)
        }
        _ => Err(invalid(property, format!("expected a number, got {text:?}"))),
    }
}

// ---------------------------------------------------------------------------
// Colors and text
// ---------------------------------------------------------------------------

/// Parse any CSS color syntax (`#rgb[a]`, `#rrggbb[aa]`, `rgb()`, `rgba()`,
/// `hsl()`, named colors, `transparent`).
pub fn parse_color(property: &str, text: &str) -> Result<Color, PropertyError> {
    let text = text.trim().trim_end_matches("!important").trim();
    let parsed = csscolorparser::parse(text).map_err(|e| invalid(property, e.to_string()))?;
    Ok(Color::rgba(
        parsed.r as f32,
        parsed.g as f32,
        parsed.b as f32,
        parsed.a as f32,
    ))
}

/// Parse `font-weight`: `true` for bold.
pub fn parse_font_weight(property: &str, text: &str) -> Result<bool, PropertyError> {
    let keyword = text.trim().to_ascii_lowercase();
    match keyword.as_str() {
        "bold" | "bolder" => Ok(true),
        "normal" | "lighter" => Ok(false),
        numeric => match numeric.parse::<u32>() {
            Ok(weight) => Ok(weight >= 600),
            Err(_) => Err(invalid(property, format!("unknown weight {keyword:?}"))),
        },
    }
}

/// Parse `text-align` / `-unity-text-align`.
///
/// CSS horizontal keywords center vertically; the nine `upper-left` ..
/// `lower-right` keywords map one-to-one.
pub fn parse_text_align(property: &str, text: &str) -> Result<TextAnchor, PropertyError> {
    let keyword = text.trim().to_ascii_lowercase();
    let anchor = match keyword.as_str() {
        "left" | "start" | "justify" => TextAnchor::MiddleLeft,
        "center" => TextAnchor::MiddleCenter,
        "right" | "end" => TextAnchor::MiddleRight,
        "upper-left" => TextAnchor::UpperLeft,
        "upper-center" => TextAnchor::UpperCenter,
        "upper-right" => TextAnchor::UpperRight,
        "middle-left" => TextAnchor::MiddleLeft,
        "middle-center" => TextAnchor::MiddleCenter,
        "middle-right" => TextAnchor::MiddleRight,
        "lower-left" => TextAnchor::LowerLeft,
        "lower-center" => TextAnchor::LowerCenter,
        "lower-right" => TextAnchor::LowerRight,
        _ => return Err(invalid(property, format!("unknown alignment {keyword:?}"))),
    };
    Ok(anchor)
}

// ---------------------------------------------------------------------------
// Keyword properties
// ---------------------------------------------------------------------------

macro_rules! keyword_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => [$($kw:literal),+]),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Parse a keyword (case-insensitive).
            pub fn parse(property: &str, text: &str) -> Result<Self, PropertyError> {
                let keyword = text.trim().to_ascii_lowercase();
                match keyword.as_str() {
                    $($($kw)|+ => Ok($name::$variant),)+
                    _ => Err(invalid(property, format!("unknown keyword {:?}", keyword))),
                }
            }
        }
    };
}

keyword_enum! {
    /// `flex-direction`.
    FlexDirection {
        Row => ["row"],
        RowReverse => ["row-reverse"],
        Column => ["column"],
        ColumnReverse => ["column-reverse"],
    }
}

keyword_enum! {
    /// `justify-content`.
    Justify {
        Start => ["flex-start", "start", "left"],
        End => ["flex-end", "end", "right"],
        Center => ["center"],
        SpaceBetween => ["space-between"],
        SpaceAround => ["space-around"],
        SpaceEvenly => ["space-evenly"],
    }
}

keyword_enum! {
    /// `align-items` and `align-self`.
    Align {
        Auto => ["auto"],
        Start => ["flex-start", "start", "baseline"],
        End => ["flex-end", "end"],
        Center => ["center"],
        Stretch => ["stretch"],
    }
}

keyword_enum! {
    /// `position`.
    Position {
        Relative => ["relative", "static"],
        Absolute => ["absolute", "fixed"],
    }
}

keyword_enum! {
    /// `display`.
    Display {
        Flex => ["flex", "block", "inline", "inline-block", "grid", "contents"],
        None => ["none"],
    }
}

keyword_enum! {
    /// `font-style` and `-unity-font-style`.
    FontStyle {
        Normal => ["normal"],
        Bold => ["bold"],
        Italic => ["italic", "oblique"],
        BoldAndItalic => ["bold-and-italic"],
    }
}

impl FontStyle {
    /// `(bold, italic)` for this style.
    pub fn flags(self) -> (bool, bool) {
        match self {
            FontStyle::Normal => (false, false),
            FontStyle::Bold => (true, false),
            FontStyle::Italic => (false, true),
            FontStyle::BoldAndItalic => (true, true),
        }
    }
}

keyword_enum! {
    /// `white-space`.
    WhiteSpace {
        Normal => ["normal", "pre-wrap", "pre-line", "break-spaces"],
        NoWrap => ["nowrap", "pre"],
    }
}

keyword_enum! {
    /// `overflow`.
    Overflow {
        Visible => ["visible"],
        Hidden => ["hidden", "clip"],
        Scroll => ["scroll", "auto"],
    }
}

keyword_enum! {
    /// `background-size` and `-unity-background-scale-mode`.
    BackgroundSize {
        Stretch => ["auto", "stretch-to-fill", "100% 100%", "stretch"],
        Contain => ["contain", "scale-to-fit"],
        Cover => ["cover", "scale-and-crop"],
    }
}

impl BackgroundSize {
    pub fn preserves_aspect(self) -> bool {
        !matches!(self, BackgroundSize::Stretch)
    }
}

keyword_enum! {
    /// `background-repeat`.
    BackgroundRepeat {
        Repeat => ["repeat", "repeat-x", "repeat-y", "round", "space"],
        NoRepeat => ["no-repeat"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    // ── Names ────────────────────────────────────────────────────────

    #[test]
    fn property_names_and_aliases() {
        assert_eq!(Property::from_name("Width"), Ok(Property::Width));
        assert_eq!(Property::from_name("-unity-font-style"), Ok(Property::FontStyle));
        assert_eq!(Property::from_name("tint-color"), Ok(Property::ImageTintColor));
        assert_eq!(
            Property::from_name("-unity-background-image-tint-color"),
            Ok(Property::ImageTintColor)
        );
        assert_eq!(Property::FontStyle.name(), "font-style");
        assert!(matches!(
            Property::from_name("grid-area"),
            Err(PropertyError::UnknownProperty(name)) if name == "grid-area"
        ));
    }

    // ── Scalars ──────────────────────────────────────────────────────

    #[test]
    fn parse_scalar_units() {
        assert_eq!(parse_scalar("width", "200"), Ok(Scalar::px(200.0)));
        assert_eq!(parse_scalar("width", " 200px "), Ok(Scalar::px(200.0)));
        assert_eq!(parse_scalar("width", "20%"), Ok(Scalar::percent(20.0)));
        assert_eq!(parse_scalar("width", "1.5em"), Ok(Scalar::em(1.5)));
        assert_eq!(parse_scalar("width", "2rem"), Ok(Scalar::rem(2.0)));
        assert_eq!(parse_scalar("width", "10vw"), Ok(Scalar::vw(10.0)));
        assert_eq!(parse_scalar("width", "-5vh"), Ok(Scalar::vh(-5.0)));
        assert_eq!(parse_scalar("width", "AUTO"), Ok(Scalar::auto()));
        assert_eq!(parse_scalar("width", "12px !important"), Ok(Scalar::px(12.0)));
    }

    #[test]
    fn parse_scalar_rejects_garbage() {
        assert!(parse_scalar("width", "wide").is_err());
        assert!(parse_scalar("width", "10deg").is_err());
        assert!(parse_scalar("width", "10px 20px").is_err());
        assert!(parse_scalar("width", "").is_err());
        assert!(parse_scalar("width", "12p@").is_err());
    }

    #[test]
    fn parse_scalar_box_shorthand() {
        let b = parse_scalar_box("margin", "1px").unwrap();
        assert_eq!(b, ScalarBox::all(Scalar::px(1.0)));

        let b = parse_scalar_box("margin", "1px 2px").unwrap();
        assert_eq!(b.top, Scalar::px(1.0));
        assert_eq!(b.left, Scalar::px(2.0));

        let b = parse_scalar_box("margin", "1px 2px 3px").unwrap();
        assert_eq!(b, ScalarBox::new(Scalar::px(1.0), Scalar::px(2.0), Scalar::px(3.0), Scalar::px(2.0)));

        let b = parse_scalar_box("padding", "1 2% 3em 4").unwrap();
        assert_eq!(b.right, Scalar::percent(2.0));
        assert_eq!(b.bottom, Scalar::em(3.0));
        assert_eq!(b.left, Scalar::px(4.0));

        assert!(parse_scalar_box("padding", "1 2 3 4 5").is_err());
        assert!(parse_scalar_box("padding", "").is_err());
    }

    #[test]
    fn parse_numbers() {
        assert_eq!(parse_number("flex-grow", "2"), Ok(2.0));
        assert_eq!(parse_number("opacity", "50%"), Ok(0.5));
        assert!(parse_number("flex-shrink", "lots").is_err());
    }

    // ── Colors ───────────────────────────────────────────────────────

    #[test]
    fn parse_rgba_color() {
        let c = parse_color("background-color", "rgba(10,20,30,0.5)").unwrap();
        assert!((c.r - 10.0 / 255.0).abs() < EPS);
        assert!((c.g - 20.0 / 255.0).abs() < EPS);
        assert!((c.b - 30.0 / 255.0).abs() < EPS);
        assert!((c.a - 0.5).abs() < EPS);
    }

    #[test]
    fn parse_hex_and_named_colors() {
        let c = parse_color("color", "#ff000080").unwrap();
        assert!((c.r - 1.0).abs() < EPS);
        assert!((c.a - 128.0 / 255.0).abs() < EPS);
        assert_eq!(parse_color("color", "white").unwrap(), Color::WHITE);
        assert!(parse_color("color", "not-a-color").is_err());
    }

    #[test]
    fn parse_text_settings() {
        assert_eq!(parse_font_weight("font-weight", "700"), Ok(true));
        assert_eq!(parse_font_weight("font-weight", "normal"), Ok(false));
        assert!(parse_font_weight("font-weight", "heavy").is_err());
        assert_eq!(parse_text_align("text-align", "center"), Ok(TextAnchor::MiddleCenter));
        assert_eq!(parse_text_align("-unity-text-align", "upper-right"), Ok(TextAnchor::UpperRight));
        assert_eq!(FontStyle::parse("font-style", "Bold-And-Italic"), Ok(FontStyle::BoldAndItalic));
        assert_eq!(FontStyle::BoldAndItalic.flags(), (true, true));
    }

    // ── Keywords ─────────────────────────────────────────────────────

    #[test]
    fn parse_keywords() {
        assert_eq!(FlexDirection::parse("flex-direction", "row"), Ok(FlexDirection::Row));
        assert_eq!(Justify::parse("justify-content", "space-between"), Ok(Justify::SpaceBetween));
        assert_eq!(Align::parse("align-self", "stretch"), Ok(Align::Stretch));
        assert_eq!(Position::parse("position", "absolute"), Ok(Position::Absolute));
        assert_eq!(Display::parse("display", "none"), Ok(Display::None));
        assert_eq!(Overflow::parse("overflow", "hidden"), Ok(Overflow::Hidden));
        assert_eq!(WhiteSpace::parse("white-space", "nowrap"), Ok(WhiteSpace::NoWrap));
        assert!(BackgroundSize::parse("background-size", "cover").unwrap().preserves_aspect());
        assert_eq!(BackgroundRepeat::parse("background-repeat", "no-repeat"), Ok(BackgroundRepeat::NoRepeat));
        assert!(matches!(
            FlexDirection::parse("flex-direction", "diagonal"),
            Err(PropertyError::InvalidValue { property, .. }) if property == "flex-direction"
        ));
    }
}
