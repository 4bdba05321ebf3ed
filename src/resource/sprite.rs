//! Drawable sprites produced by the resource resolver.

use std::fmt;

use image::RgbaImage;

/// How a sprite was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpriteOrigin {
    /// An asset already set up as a drawable sprite.
    Asset { path: String },
    /// A raster texture converted into a sprite on demand.
    Converted { path: String },
    /// The synthetic pattern generated for a vector image.
    Placeholder { path: String },
}

impl SpriteOrigin {
    pub fn path(&self) -> &str {
        match self {
            SpriteOrigin::Asset { path }
            | SpriteOrigin::Converted { path }
            | SpriteOrigin::Placeholder { path } => path,
        }
    }
}

/// A named RGBA image ready to be drawn by a [`crate::scene::Graphic`].
#[derive(Clone, PartialEq)]
pub struct Sprite {
    pub name: String,
    pub image: RgbaImage,
    pub origin: SpriteOrigin,
}

impl Sprite {
    pub fn new(name: impl Into<String>, image: RgbaImage, origin: SpriteOrigin) -> Self {
        Self {
            name: name.into(),
            image,
            origin,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.origin, SpriteOrigin::Placeholder { .. })
    }
}

impl fmt::Debug for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sprite")
            .field("name", &self.name)
            .field("size", &(self.width(), self.height()))
            .field("origin", &self.origin)
            .finish()
    }
}

/// Sprite name for a path: the file stem.
pub(crate) fn sprite_name(path: &str) -> String {
    let file = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match file.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => file.to_string(),
    }
}
