//! Tree operations: insert, remove, walk, and the [`SceneHost`] implementation.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};

use crate::geometry::{RectTransform, Size};

use super::component::{Component, LayoutRoot};
use super::host::{SceneError, SceneHost};
use super::node::{NodeData, NodeId};

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// An in-memory scene graph, backed by a slotmap arena.
///
/// All nodes live in a single `SlotMap`. Parent/child relationships are stored
/// in secondary maps so that node removal is O(subtree size) and lookup is O(1).
pub struct Scene {
    pub(crate) nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    root: Option<NodeId>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
        }
    }

    /// Create a scene whose root is a "Canvas" node of the given pixel size.
    pub fn with_canvas(width: f32, height: f32) -> Self {
        let mut scene = Self::new();
        let size = Size::new(width, height);
        scene.insert(
            NodeData::new("Canvas")
                .with_rect(RectTransform::centered(width, height))
                .with_component(LayoutRoot {
                    reference_size: size,
                }),
        );
        scene
    }

    /// Insert a root-level node (no parent).
    ///
    /// If no root has been set yet, this node becomes the root.
    pub fn insert(&mut self, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Insert a node as the last child of `parent`.
    pub fn insert_child(&mut self, parent: NodeId, data: NodeData) -> Result<NodeId, SceneError> {
        if !self.nodes.contains_key(parent) {
            return Err(SceneError::MissingParent(parent));
        }
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
        }
        Ok(id)
    }

    /// Remove a node and all its descendants.
    ///
    /// Returns the `NodeData` for the removed node, or `None` if it didn't exist.
    pub fn remove(&mut self, id: NodeId) -> Option<NodeData> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent_id) {
                siblings.retain(|&child| child != id);
            }
        }

        if self.root == Some(id) {
            self.root = None;
        }

        let mut to_remove = VecDeque::new();
        to_remove.push_back(id);
        let mut removed_root_data = None;

        while let Some(current) = to_remove.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                to_remove.extend(kids);
            }
            self.parent.remove(current);
            let data = self.nodes.remove(current);
            if current == id {
                removed_root_data = data;
            }
        }

        removed_root_data
    }

    /// Walk from `id` up to the root, collecting ancestor node ids.
    ///
    /// The returned vec does **not** include `id` itself; it starts with the
    /// immediate parent and ends at the root.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Immutable access to a node's data.
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// Mutable access to a node's data.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    /// The root node (the canvas for [`Scene::with_canvas`]).
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes in the scene.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push children in reverse so the first child is visited first.
            for &child in self.children_of(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// Slash-separated names from the root down to `id`, e.g. `Canvas/Root/Ok`.
    pub fn path(&self, id: NodeId) -> String {
        let names: Vec<&str> = self
            .ancestors(id)
            .into_iter()
            .rev()
            .chain(std::iter::once(id))
            .filter_map(|n| self.nodes.get(n).map(|d| d.name.as_str()))
            .collect();
        names.join("/")
    }

    fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut NodeData, SceneError> {
        self.nodes.get_mut(id).ok_or(SceneError::MissingNode(id))
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneHost for Scene {
    fn create_node(&mut self, name: &str, parent: NodeId) -> Result<NodeId, SceneError> {
        self.insert_child(parent, NodeData::new(name))
    }

    fn destroy_node(&mut self, node: NodeId) -> Result<(), SceneError> {
        self.remove(node)
            .map(|_| ())
            .ok_or(SceneError::MissingNode(node))
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parent.get(node).copied()
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        self.children_of(node)
    }

    fn name(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node).map(|d| d.name.as_str())
    }

    fn rect(&self, node: NodeId) -> Option<RectTransform> {
        self.nodes.get(node).map(|d| d.rect)
    }

    fn set_rect(&mut self, node: NodeId, rect: RectTransform) -> Result<(), SceneError> {
        self.node_mut(node)?.rect = rect;
        Ok(())
    }

    fn attach(&mut self, node: NodeId, component: Component) -> Result<(), SceneError> {
        self.node_mut(node)?.components.push(component);
        Ok(())
    }

    fn components(&self, node: NodeId) -> &[Component] {
        self.nodes
            .get(node)
            .map(|d| d.components.as_slice())
            .unwrap_or_default()
    }

    fn components_mut(&mut self, node: NodeId) -> &mut [Component] {
        self.nodes
            .get_mut(node)
            .map(|d| d.components.as_mut_slice())
            .unwrap_or_default()
    }

    fn set_active(&mut self, node: NodeId, active: bool) -> Result<(), SceneError> {
        self.node_mut(node)?.active = active;
        Ok(())
    }

    fn is_active(&self, node: NodeId) -> bool {
        self.nodes.get(node).is_some_and(|d| d.active)
    }

    fn force_layout_rebuild(&mut self, root: NodeId) {
        super::arrange::rebuild(self, root);
    }
}
