//! Asset sources: where the resource resolver looks for images.
//!
//! Paths are project-relative with `/` separators (`Assets/UI/icon.png`).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use image::RgbaImage;

/// What kind of asset lives at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// A raster image imported as a drawable sprite.
    Sprite,
    /// A raster image imported as a plain texture (not directly drawable).
    Texture,
    /// A vector image (`.svg`).
    Vector,
    /// Anything else.
    Other,
}

impl AssetKind {
    pub fn is_raster(self) -> bool {
        matches!(self, AssetKind::Sprite | AssetKind::Texture)
    }

    /// Kind implied by a file extension alone.
    pub fn from_extension(path: &str) -> AssetKind {
        let ext = path
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "tga" => AssetKind::Sprite,
            "svg" => AssetKind::Vector,
            _ => AssetKind::Other,
        }
    }
}

/// Read access to a project's image assets.
pub trait AssetSource {
    /// Kind of the asset at `path`, `None` if there is none.
    fn kind_of(&self, path: &str) -> Option<AssetKind>;

    /// Decode the raster image at `path`.
    fn load_image(&self, path: &str) -> Option<RgbaImage>;

    /// Paths whose file name contains `fragment` (case-insensitive), optionally
    /// restricted to raster assets (`Some(Texture)` accepts both raster kinds)
    /// or to exactly one other kind. Sorted.
    fn search(&self, fragment: &str, filter: Option<AssetKind>) -> Vec<String>;

    /// Path of the asset with the given GUID.
    fn guid_to_path(&self, guid: &str) -> Option<String>;

    /// Path of the asset addressed by a logical resource name: a path below a
    /// `Resources/` folder without its extension (`icons/logo`).
    fn resource(&self, name: &str) -> Option<String> {
        let name = name.trim_matches('/');
        let stem = name.rsplit('/').next().unwrap_or(name);
        self.search(stem, None).into_iter().find(|path| {
            let Some(idx) = path.find("Resources/") else {
                return false;
            };
            let logical = &path[idx + "Resources/".len()..];
            let logical = logical.rsplit_once('.').map_or(logical, |(l, _)| l);
            logical == name
        })
    }
}

fn kind_matches(kind: AssetKind, filter: Option<AssetKind>) -> bool {
    match filter {
        None => true,
        Some(AssetKind::Texture) => kind.is_raster(),
        Some(wanted) => kind == wanted,
    }
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

// ---------------------------------------------------------------------------
// Filesystem
// ---------------------------------------------------------------------------

/// Assets on disk below a project root.
///
/// A raster file with a sibling `.meta` file declaring a non-sprite texture
/// type is a [`AssetKind::Texture`]; GUIDs are read from `.meta` files too.
#[derive(Debug, Clone)]
pub struct FsAssetSource {
    root: PathBuf,
}

impl FsAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn full_path(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }

    fn meta_text(&self, path: &str) -> Option<String> {
        let mut meta = self.full_path(path).into_os_string();
        meta.push(".meta");
        std::fs::read_to_string(meta).ok()
    }

    /// All files below the root as relative `/`-separated paths, sorted.
    fn walk(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut stack = vec![self.root.clone()];
        while let Some(dir) = stack.pop() {
            let Ok(entries) = std::fs::read_dir(&dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    stack.push(path);
                } else if let Ok(rel) = path.strip_prefix(&self.root) {
                    let rel: Vec<_> = rel
                        .components()
                        .map(|c| c.as_os_str().to_string_lossy().into_owned())
                        .collect();
                    out.push(rel.join("/"));
                }
            }
        }
        out.sort();
        out
    }
}

/// The `guid:` value of a `.meta` file.
fn meta_guid(meta: &str) -> Option<&str> {
    meta.lines()
        .find_map(|line| line.trim().strip_prefix("guid:"))
        .map(str::trim)
}

/// Whether a texture `.meta` file declares a sprite import (`textureType: 8`).
fn meta_is_sprite(meta: &str) -> bool {
    meta.lines()
        .find_map(|line| line.trim().strip_prefix("textureType:"))
        .map_or(true, |v| v.trim() == "8")
}

impl AssetSource for FsAssetSource {
    fn kind_of(&self, path: &str) -> Option<AssetKind> {
        if !self.full_path(path).is_file() {
            return None;
        }
        let kind = AssetKind::from_extension(path);
        if kind == AssetKind::Sprite {
            if let Some(meta) = self.meta_text(path) {
                if !meta_is_sprite(&meta) {
                    return Some(AssetKind::Texture);
                }
            }
        }
        Some(kind)
    }

    fn load_image(&self, path: &str) -> Option<RgbaImage> {
        match image::open(self.full_path(path)) {
            Ok(img) => Some(img.to_rgba8()),
            Err(err) => {
                tracing::debug!(path, error = %err, "image decode failed");
                None
            }
        }
    }

    fn search(&self, fragment: &str, filter: Option<AssetKind>) -> Vec<String> {
        let needle = fragment.to_ascii_lowercase();
        self.walk()
            .into_iter()
            .filter(|p| !p.ends_with(".meta"))
            .filter(|p| file_name(p).to_ascii_lowercase().contains(&needle))
            .filter(|p| self.kind_of(p).is_some_and(|k| kind_matches(k, filter)))
            .collect()
    }

    fn guid_to_path(&self, guid: &str) -> Option<String> {
        self.walk().into_iter().find_map(|p| {
            let asset = p.strip_suffix(".meta")?;
            let meta = std::fs::read_to_string(self.full_path(&p)).ok()?;
            (meta_guid(&meta) == Some(guid)).then(|| asset.to_string())
        })
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct MemoryAsset {
    kind: AssetKind,
    image: Option<RgbaImage>,
    guid: Option<String>,
}

/// An in-memory asset table, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetSource {
    assets: BTreeMap<String, MemoryAsset>,
}

impl MemoryAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a drawable sprite (builder).
    pub fn with_sprite(self, path: impl Into<String>, image: RgbaImage) -> Self {
        self.with_asset(path, AssetKind::Sprite, Some(image))
    }

    /// Add a raster texture that needs conversion to be drawn (builder).
    pub fn with_texture(self, path: impl Into<String>, image: RgbaImage) -> Self {
        self.with_asset(path, AssetKind::Texture, Some(image))
    }

    /// Add a vector image (builder).
    pub fn with_vector(self, path: impl Into<String>) -> Self {
        self.with_asset(path, AssetKind::Vector, None)
    }

    /// Assign a GUID to an existing asset (builder).
    pub fn with_guid(mut self, path: &str, guid: impl Into<String>) -> Self {
        if let Some(asset) = self.assets.get_mut(path) {
            asset.guid = Some(guid.into());
        }
        self
    }

    fn with_asset(mut self, path: impl Into<String>, kind: AssetKind, image: Option<RgbaImage>) -> Self {
        self.assets.insert(
            path.into(),
            MemoryAsset {
                kind,
                image,
                guid: None,
            },
        );
        self
    }
}

impl AssetSource for MemoryAssetSource {
    fn kind_of(&self, path: &str) -> Option<AssetKind> {
        self.assets.get(path).map(|a| a.kind)
    }

    fn load_image(&self, path: &str) -> Option<RgbaImage> {
        self.assets.get(path).and_then(|a| a.image.clone())
    }

    fn search(&self, fragment: &str, filter: Option<AssetKind>) -> Vec<String> {
        let needle = fragment.to_ascii_lowercase();
        self.assets
            .iter()
            .filter(|(path, asset)| {
                file_name(path).to_ascii_lowercase().contains(&needle)
                    && kind_matches(asset.kind, filter)
            })
            .map(|(path, _)| path.clone())
            .collect()
    }

    fn guid_to_path(&self, guid: &str) -> Option<String> {
        self.assets
            .iter()
            .find(|(_, a)| a.guid.as_deref() == Some(guid))
            .map(|(path, _)| path.clone())
    }
}
