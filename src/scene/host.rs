//! The host scene-graph interface the converter builds into.

use crate::geometry::{RectTransform, Size};

use super::component::{Component, ComponentData, ComponentKind};
use super::node::NodeId;

/// Errors reported by a scene host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error("scene node {0:?} does not exist")]
    MissingNode(NodeId),
    #[error("parent node {0:?} does not exist")]
    MissingParent(NodeId),
}

/// A retained scene graph of named rectangles carrying components.
///
/// Implementors own the nodes; the converter only holds [`NodeId`]s. All calls
/// happen on one thread, synchronously.
pub trait SceneHost {
    /// Create a node named `name` under `parent`, with a default rectangle.
    fn create_node(&mut self, name: &str, parent: NodeId) -> Result<NodeId, SceneError>;

    /// Destroy a node and its subtree.
    fn destroy_node(&mut self, node: NodeId) -> Result<(), SceneError>;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Direct children in creation order. Empty for unknown nodes.
    fn children(&self, node: NodeId) -> &[NodeId];

    fn name(&self, node: NodeId) -> Option<&str>;

    fn rect(&self, node: NodeId) -> Option<RectTransform>;

    fn set_rect(&mut self, node: NodeId, rect: RectTransform) -> Result<(), SceneError>;

    /// Attach a component (with its wiring) to a node.
    fn attach(&mut self, node: NodeId, component: Component) -> Result<(), SceneError>;

    /// Attached components. Empty for unknown nodes.
    fn components(&self, node: NodeId) -> &[Component];

    /// Attached components, mutably. Empty for unknown nodes.
    fn components_mut(&mut self, node: NodeId) -> &mut [Component];

    fn set_active(&mut self, node: NodeId, active: bool) -> Result<(), SceneError>;

    fn is_active(&self, node: NodeId) -> bool;

    /// Re-run automatic layout below `root`. Hosts without layout groups may
    /// leave this a no-op.
    fn force_layout_rebuild(&mut self, _root: NodeId) {}

    /// Resolved size of a node's rectangle, following the parent chain. A node
    /// without a parent resolves against a zero-sized parent.
    fn rect_size(&self, node: NodeId) -> Size {
        let Some(rect) = self.rect(node) else {
            return Size::ZERO;
        };
        let parent = self
            .parent(node)
            .map(|p| self.rect_size(p))
            .unwrap_or(Size::ZERO);
        rect.size(parent)
    }

    /// Resolved size of a node's parent rectangle.
    fn parent_size(&self, node: NodeId) -> Size {
        self.parent(node)
            .map(|p| self.rect_size(p))
            .unwrap_or(Size::ZERO)
    }

    fn has_component(&self, node: NodeId, kind: ComponentKind) -> bool {
        self.components(node).iter().any(|c| c.kind() == kind)
    }

    /// First component of type `T` on `node`.
    fn component<T: ComponentData>(&self, node: NodeId) -> Option<&T>
    where
        Self: Sized,
    {
        self.components(node).iter().find_map(T::from_component)
    }

    /// First component of type `T` on `node`, mutably.
    fn component_mut<T: ComponentData>(&mut self, node: NodeId) -> Option<&mut T>
    where
        Self: Sized,
    {
        self.components_mut(node)
            .iter_mut()
            .find_map(T::from_component_mut)
    }

    /// The node's `T` component, attaching a default one first if missing.
    fn ensure_component<T>(&mut self, node: NodeId) -> Result<&mut T, SceneError>
    where
        Self: Sized,
        T: ComponentData + Default + Into<Component>,
    {
        if !self.has_component(node, T::KIND) {
            self.attach(node, T::default().into())?;
        }
        self.component_mut::<T>(node)
            .ok_or(SceneError::MissingNode(node))
    }

    /// Update a node's rectangle in place.
    fn update_rect(
        &mut self,
        node: NodeId,
        f: impl FnOnce(&mut RectTransform),
    ) -> Result<(), SceneError>
    where
        Self: Sized,
    {
        let mut rect = self.rect(node).ok_or(SceneError::MissingNode(node))?;
        f(&mut rect);
        self.set_rect(node, rect)
    }
}
