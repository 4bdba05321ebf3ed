//! Node types: NodeId, NodeData.

use slotmap::new_key_type;

use crate::geometry::RectTransform;

use super::component::{Component, ComponentData, ComponentKind};

new_key_type! {
    /// Unique identifier for a scene node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Data associated with a single scene node.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Display name (e.g. "Ok", "Fill Area").
    pub name: String,
    /// Parent-relative rectangle.
    pub rect: RectTransform,
    /// Attached components, in attachment order.
    pub components: Vec<Component>,
    /// Inactive nodes (and their subtrees) are hidden and skipped by layout groups.
    pub active: bool,
}

impl NodeData {
    /// Create a new `NodeData` with a default rectangle and no components.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rect: RectTransform::default(),
            components: Vec::new(),
            active: true,
        }
    }

    /// Set the rectangle (builder).
    pub fn with_rect(mut self, rect: RectTransform) -> Self {
        self.rect = rect;
        self
    }

    /// Attach a component (builder).
    pub fn with_component(mut self, component: impl Into<Component>) -> Self {
        self.components.push(component.into());
        self
    }

    /// Whether a component of this kind is attached.
    pub fn has(&self, kind: ComponentKind) -> bool {
        self.components.iter().any(|c| c.kind() == kind)
    }

    /// First attached component of type `T`.
    pub fn get<T: ComponentData>(&self) -> Option<&T> {
        self.components.iter().find_map(T::from_component)
    }

    /// First attached component of type `T`, mutably.
    pub fn get_mut<T: ComponentData>(&mut self) -> Option<&mut T> {
        self.components.iter_mut().find_map(T::from_component_mut)
    }
}
