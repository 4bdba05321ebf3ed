//! Image path resolution through an ordered chain of lookup strategies.
//!
//! A path is normalized (`url(...)` wrapper and quotes stripped) and then
//! tried against each strategy in turn until one yields a sprite:
//!
//! 1. direct project-relative lookup (texture conversion, vector placeholder)
//! 2. `project://database/...` URI decoding (GUID first, then path)
//! 3. retry assuming the path is relative to `Assets/`
//! 4. logical resource-name lookup (`Resources/` folders)
//! 5. project-wide search for a sprite by file name
//! 6. project-wide search for a raster texture, converted on demand
//! 7. direct construction from whatever image decodes at the exact path
//!
//! Both successes and definitive failures are cached per normalized path.

use std::collections::HashMap;
use std::sync::Arc;

use super::assets::{AssetKind, AssetSource};
use super::placeholder::placeholder_sprite;
use super::sprite::{sprite_name, Sprite, SpriteOrigin};

const DATABASE_SCHEME: &str = "project://database/";

/// Loading options for the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceOptions {
    /// Convert plain raster textures into sprites when found.
    pub enable_texture_conversion: bool,
    /// Substitute the placeholder pattern for vector images.
    pub enable_svg_conversion: bool,
    /// Remember results (including failures) per path.
    pub enable_caching: bool,
    /// Log every strategy attempt at debug level.
    pub enable_debug_logging: bool,
}

impl Default for ResourceOptions {
    fn default() -> Self {
        Self {
            enable_texture_conversion: true,
            enable_svg_conversion: true,
            enable_caching: true,
            enable_debug_logging: false,
        }
    }
}

/// Resolves image paths to sprites with caching.
///
/// The cache and options are plain state of this value: callers reset them
/// with [`ResourceResolver::clear_cache`] and [`ResourceResolver::configure`].
pub struct ResourceResolver {
    source: Box<dyn AssetSource>,
    options: ResourceOptions,
    cache: HashMap<String, Option<Arc<Sprite>>>,
}

impl ResourceResolver {
    pub fn new(source: impl AssetSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            options: ResourceOptions::default(),
            cache: HashMap::new(),
        }
    }

    /// Set the options (builder).
    pub fn with_options(mut self, options: ResourceOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the loading options. Cached results are kept.
    pub fn configure(&mut self, options: ResourceOptions) {
        self.options = options;
    }

    pub fn options(&self) -> &ResourceOptions {
        &self.options
    }

    /// Forget every cached result.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// The cached outcome for a raw path: `None` if never tried,
    /// `Some(None)` if tried and failed.
    pub fn cached(&self, raw: &str) -> Option<Option<&Arc<Sprite>>> {
        self.cache.get(&normalize_path(raw)).map(Option::as_ref)
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Resolve a raw image path to a sprite.
    pub fn resolve(&mut self, raw: &str) -> Option<Arc<Sprite>> {
        let path = normalize_path(raw);
        if path.is_empty() || path.eq_ignore_ascii_case("none") {
            return None;
        }
        if self.options.enable_caching {
            if let Some(hit) = self.cache.get(&path) {
                self.trace(&path, "cache", hit.is_some());
                return hit.clone();
            }
        }

        let resolved = self.run_strategies(&path).map(Arc::new);
        if self.options.enable_caching {
            self.cache.insert(path, resolved.clone());
        }
        resolved
    }

    fn run_strategies(&self, path: &str) -> Option<Sprite> {
        let strategies: [(&str, fn(&Self, &str) -> Option<Sprite>); 7] = [
            ("direct", Self::direct),
            ("database-uri", Self::database_uri),
            ("assets-relative", Self::assets_relative),
            ("resource-name", Self::resource_name),
            ("sprite-search", Self::sprite_search),
            ("texture-search", Self::texture_search),
            ("last-resort", Self::last_resort),
        ];
        strategies.iter().find_map(|(name, strategy)| {
            let found = strategy(self, path);
            self.trace(path, name, found.is_some());
            found
        })
    }

    fn trace(&self, path: &str, strategy: &str, found: bool) {
        if self.options.enable_debug_logging {
            tracing::debug!(path, strategy, found, "sprite lookup");
        }
    }

    // ── Strategies ───────────────────────────────────────────────────

    fn direct(&self, path: &str) -> Option<Sprite> {
        let kind = self
            .source
            .kind_of(path)
            .or_else(|| (AssetKind::from_extension(path) == AssetKind::Vector).then_some(AssetKind::Vector))?;
        match kind {
            AssetKind::Sprite => self.load(path, SpriteOrigin::Asset { path: path.to_string() }),
            AssetKind::Texture if self.options.enable_texture_conversion => self.load(
                path,
                SpriteOrigin::Converted {
                    path: path.to_string(),
                },
            ),
            AssetKind::Vector if self.options.enable_svg_conversion => Some(placeholder_sprite(path)),
            _ => None,
        }
    }

    fn database_uri(&self, path: &str) -> Option<Sprite> {
        let rest = path.strip_prefix(DATABASE_SCHEME)?;
        let rest = rest.split_once('#').map_or(rest, |(before, _)| before);
        let (asset_path, query) = rest.split_once('?').unwrap_or((rest, ""));
        let guid = query
            .split('&')
            .find_map(|pair| pair.strip_prefix("guid="))
            .filter(|g| !g.is_empty());
        guid.and_then(|g| self.source.guid_to_path(&percent_decode(g)))
            .and_then(|p| self.direct(&p))
            .or_else(|| self.direct(&percent_decode(asset_path)))
    }

    fn assets_relative(&self, path: &str) -> Option<Sprite> {
        if path.starts_with("Assets/") || path.contains("://") {
            return None;
        }
        self.direct(&format!("Assets/{}", path.trim_start_matches('/')))
    }

    fn resource_name(&self, path: &str) -> Option<Sprite> {
        let logical = path.rsplit_once('.').map_or(path, |(stem, _)| stem);
        let logical = logical
            .find("Resources/")
            .map_or(logical, |idx| &logical[idx + "Resources/".len()..]);
        let found = self.source.resource(logical)?;
        self.direct(&found)
    }

    fn sprite_search(&self, path: &str) -> Option<Sprite> {
        let stem = sprite_name(path);
        self.source
            .search(&stem, Some(AssetKind::Sprite))
            .iter()
            .find_map(|candidate| self.direct(candidate))
    }

    fn texture_search(&self, path: &str) -> Option<Sprite> {
        if !self.options.enable_texture_conversion {
            return None;
        }
        let stem = sprite_name(path);
        self.source
            .search(&stem, Some(AssetKind::Texture))
            .iter()
            .find_map(|candidate| {
                self.load(
                    candidate,
                    SpriteOrigin::Converted {
                        path: candidate.clone(),
                    },
                )
            })
    }

    fn last_resort(&self, path: &str) -> Option<Sprite> {
        self.load(
            path,
            SpriteOrigin::Converted {
                path: path.to_string(),
            },
        )
    }

    fn load(&self, path: &str, origin: SpriteOrigin) -> Option<Sprite> {
        let image = self.source.load_image(path)?;
        Some(Sprite::new(sprite_name(path), image, origin))
    }
}

/// Strip a `url(...)` wrapper, surrounding quotes and whitespace.
pub fn normalize_path(raw: &str) -> String {
    let mut value = raw.trim();
    if let Some(inner) = value
        .strip_prefix("url(")
        .or_else(|| value.strip_prefix("URL("))
        .and_then(|v| v.strip_suffix(')'))
    {
        value = inner.trim();
    }
    for quote in ['"', '\''] {
        if let Some(inner) = value.strip_prefix(quote).and_then(|v| v.strip_suffix(quote)) {
            value = inner.trim();
        }
    }
    value.to_string()
}

/// Decode `%XX` escapes; text that does not decode to UTF-8 is kept as is.
fn percent_decode(input: &str) -> String {
    urlencoding::decode(input).map_or_else(|_| input.to_string(), |decoded| decoded.into_owned())
}
