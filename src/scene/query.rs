//! Scene queries: by name, by component kind, subtree listing.

use super::component::ComponentKind;
use super::node::NodeId;
use super::tree::Scene;

impl Scene {
    /// First node named `name`, in tree order from the root.
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.tree_order()
            .into_iter()
            .find(|&id| self.get(id).is_some_and(|d| d.name == name))
    }

    /// First node named `name` inside the subtree of `start` (excluding `start`).
    pub fn find_in(&self, start: NodeId, name: &str) -> Option<NodeId> {
        self.descendants(start)
            .into_iter()
            .find(|&id| self.get(id).is_some_and(|d| d.name == name))
    }

    /// All nodes carrying a component of `kind`, in tree order.
    pub fn nodes_with_component(&self, kind: ComponentKind) -> Vec<NodeId> {
        self.tree_order()
            .into_iter()
            .filter(|&id| self.get(id).is_some_and(|d| d.has(kind)))
            .collect()
    }

    /// Every node below `start`, pre-order, excluding `start` itself.
    pub fn descendants(&self, start: NodeId) -> Vec<NodeId> {
        let mut nodes = self.walk_depth_first(start);
        if !nodes.is_empty() {
            nodes.remove(0);
        }
        nodes
    }

    fn tree_order(&self) -> Vec<NodeId> {
        self.root()
            .map(|root| self.walk_depth_first(root))
            .unwrap_or_default()
    }
}
