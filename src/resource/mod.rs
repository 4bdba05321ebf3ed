//! Image resources: asset sources, sprites and path resolution.

pub mod assets;
pub mod placeholder;
pub mod resolver;
pub mod sprite;

pub use assets::{AssetKind, AssetSource, FsAssetSource, MemoryAssetSource};
pub use placeholder::{placeholder_image, placeholder_sprite, PLACEHOLDER_SIZE};
pub use resolver::{normalize_path, ResourceOptions, ResourceResolver};
pub use sprite::{Sprite, SpriteOrigin};
