//! Scene graph: the host interface and a slotmap-backed reference host.
//!
//! The converter talks to any [`SceneHost`]. [`Scene`] is the in-memory
//! implementation used by the file entry points and the tests; its
//! [`SceneHost::force_layout_rebuild`] arranges layout groups with taffy.

mod arrange;
pub mod component;
pub mod host;
pub mod node;
pub mod query;
pub mod tree;

pub use component::{
    Button, CanvasGroup, Component, ComponentData, ComponentKind, CrossAlign, Dropdown, Graphic,
    ImageType, InputField, LayoutElement, LayoutGroup, LayoutRoot, Mask, RectMask, ScrollRect,
    Slider, Text, Toggle,
};
pub use host::{SceneError, SceneHost};
pub use node::{NodeData, NodeId};
pub use tree::Scene;
