//! # markup-scene
//!
//! Compiles declarative UI markup (UXML-style XML) and stylesheets (USS-style
//! CSS) into a tree of anchored scene nodes with widget components attached.
//!
//! The converter is generic over a [`scene::SceneHost`]; [`scene::Scene`] is
//! the bundled slotmap-backed host, with a taffy-powered auto-layout pass.
//!
//! ## Core Systems
//!
//! - **[`markup`]**: XML markup into an owned element tree
//! - **[`css`]**: stylesheet tokenizer, selectors, cascade lookup and unit parsing
//! - **[`scene`]**: host interface, components and the reference scene arena
//! - **[`widget`]**: closed widget kinds and the tag-to-kind resolver
//! - **[`widgets`]**: per-kind construction recipes
//! - **[`layout`]**: style cascade, unit resolution and flex mapping
//! - **[`resource`]**: image path resolution with a sprite cache
//! - **[`convert`]**: the conversion driver and batch mode
//! - **[`geometry`]**: Vec2, Size, RectTransform, Spacing, Color primitives
//!
//! ```ignore
//! use markup_scene::convert::Converter;
//! use markup_scene::resource::FsAssetSource;
//! use markup_scene::scene::Scene;
//!
//! let mut scene = Scene::with_canvas(1920.0, 1080.0);
//! let canvas = scene.root().unwrap();
//! let mut converter = Converter::new(FsAssetSource::new("."));
//! let result = converter.convert_file(&mut scene, "Assets/UI/menu.uxml", canvas)?;
//! println!("{}", result.summary());
//! ```

// Foundation
pub mod geometry;

// Input formats
pub mod css;
pub mod markup;

// Scene host
pub mod scene;

// Widgets
pub mod widget;
pub mod widgets;

// Styling and resources
pub mod layout;
pub mod resource;

// Driver
pub mod config;
pub mod convert;

// Test helpers
pub mod testing;
