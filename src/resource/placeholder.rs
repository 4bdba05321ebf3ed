//! Deterministic placeholder texture for images that cannot be rasterized.
//!
//! The pattern is a checkerboard tinted by a diagonal gradient with a
//! cross-hair through the center, so a placeholder is obvious on screen and
//! byte-for-byte reproducible in tests.

use image::{Rgba, RgbaImage};

use super::sprite::{sprite_name, Sprite, SpriteOrigin};

/// Edge length of the placeholder texture in pixels.
pub const PLACEHOLDER_SIZE: u32 = 64;

const CELL: u32 = 8;
const CROSSHAIR: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Generate the placeholder pattern.
pub fn placeholder_image() -> RgbaImage {
    let max = (PLACEHOLDER_SIZE - 1) as f32;
    let center = PLACEHOLDER_SIZE / 2;
    RgbaImage::from_fn(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, |x, y| {
        if x == center || y == center || x == y || x + y == PLACEHOLDER_SIZE - 1 {
            return CROSSHAIR;
        }
        let base: f32 = if (x / CELL + y / CELL) % 2 == 0 { 200.0 } else { 120.0 };
        let tx = x as f32 / max;
        let ty = y as f32 / max;
        Rgba([
            (base * (1.0 - 0.5 * tx)) as u8,
            (base * 0.8) as u8,
            (base * (0.5 + 0.5 * ty)) as u8,
            255,
        ])
    })
}

/// A placeholder sprite standing in for the image at `path`.
pub fn placeholder_sprite(path: &str) -> Sprite {
    Sprite::new(
        sprite_name(path),
        placeholder_image(),
        SpriteOrigin::Placeholder {
            path: path.to_string(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_deterministic() {
        assert_eq!(placeholder_image(), placeholder_image());
    }

    #[test]
    fn placeholder_pattern() {
        let img = placeholder_image();
        assert_eq!(img.dimensions(), (PLACEHOLDER_SIZE, PLACEHOLDER_SIZE));
        assert_eq!(*img.get_pixel(32, 5), CROSSHAIR);
        assert_eq!(*img.get_pixel(10, 10), CROSSHAIR);
        assert_eq!(*img.get_pixel(63, 0), CROSSHAIR);
        // Neighbouring checker cells differ.
        assert_ne!(img.get_pixel(1, 3), img.get_pixel(9, 3));
        assert!(img.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn placeholder_sprite_records_path() {
        let sprite = placeholder_sprite("Assets/icons/logo.svg");
        assert!(sprite.is_placeholder());
        assert_eq!(sprite.name, "logo");
        assert_eq!(sprite.origin.path(), "Assets/icons/logo.svg");
    }
}
