//! Scene graph: named transform nodes in a slotmap arena.
//!
//! Every game object hangs off a node. Moving or scaling a node moves its
//! whole subtree, which is what keeps a model and its collider in lockstep:
//! both are authored at the node origin and the node itself is placed.

use std::collections::HashMap;

use glam::{Mat4, Vec3, Vec4};
use slotmap::SlotMap;

use crate::transform::Transform;

slotmap::new_key_type! {
    /// Stable handle to a scene node.
    pub struct NodeId;
}

/// A single node carrying a name, a local transform, and an optional color tint.
#[derive(Debug)]
pub struct SceneNode {
    pub name: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub transform: Transform,
    pub color_tint: Option<Vec4>,
}

/// Arena of scene nodes with parent/child links and name lookup.
pub struct SceneGraph {
    nodes: SlotMap<NodeId, SceneNode>,
    root: NodeId,
    by_name: HashMap<String, NodeId>,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    /// Create a scene graph containing only the root node.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(SceneNode {
            name: "root".to_string(),
            parent: None,
            children: Vec::new(),
            transform: Transform::default(),
            color_tint: None,
        });
        let mut by_name = HashMap::new();
        by_name.insert("root".to_string(), root);
        Self {
            nodes,
            root,
            by_name,
        }
    }

    /// The root node every other node descends from.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Attach a new node under `parent`. Later nodes with a duplicate name
    /// shadow earlier ones in `find`.
    pub fn attach(&mut self, parent: NodeId, name: &str) -> NodeId {
        let id = self.nodes.insert(SceneNode {
            name: name.to_string(),
            parent: Some(parent),
            children: Vec::new(),
            transform: Transform::default(),
            color_tint: None,
        });
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(id);
        }
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Look up a node by name.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Borrow a node.
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    /// Borrow a node mutably.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id)
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Set a node's local position.
    pub fn set_position(&mut self, id: NodeId, position: Vec3) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.transform.position = position;
        }
    }

    /// Get a node's local position.
    pub fn position(&self, id: NodeId) -> Vec3 {
        self.nodes
            .get(id)
            .map(|n| n.transform.position)
            .unwrap_or(Vec3::ZERO)
    }

    /// Set a node's local scale.
    pub fn set_scale(&mut self, id: NodeId, scale: Vec3) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.transform.scale = scale;
        }
    }

    /// Set the same scale on all three axes.
    pub fn set_uniform_scale(&mut self, id: NodeId, scale: f32) {
        self.set_scale(id, Vec3::splat(scale));
    }

    /// Set a node's color tint. The tint multiplies the node's subtree when drawn.
    pub fn set_color_tint(&mut self, id: NodeId, tint: Vec4) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.color_tint = Some(tint);
        }
    }

    /// Get a node's color tint, if one was set.
    pub fn color_tint(&self, id: NodeId) -> Option<Vec4> {
        self.nodes.get(id).and_then(|n| n.color_tint)
    }

    /// World matrix of a node, accumulated through the parent chain.
    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let mut matrix = Mat4::IDENTITY;
        let mut current = Some(id);
        while let Some(node_id) = current {
            let Some(node) = self.nodes.get(node_id) else {
                break;
            };
            matrix = node.transform.to_matrix() * matrix;
            current = node.parent;
        }
        matrix
    }

    /// World position of a node (its origin pushed through the parent chain).
    pub fn world_position(&self, id: NodeId) -> Vec3 {
        self.world_matrix(id).transform_point3(Vec3::ZERO)
    }

    /// Accumulated scale of a node, componentwise through the parent chain.
    pub fn world_scale(&self, id: NodeId) -> Vec3 {
        let mut scale = Vec3::ONE;
        let mut current = Some(id);
        while let Some(node_id) = current {
            let Some(node) = self.nodes.get(node_id) else {
                break;
            };
            scale *= node.transform.scale;
            current = node.parent;
        }
        scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_links_parent_and_child() {
        let mut scene = SceneGraph::new();
        let base = scene.attach(scene.root(), "base");
        let child = scene.attach(base, "child");

        assert_eq!(scene.node(child).unwrap().parent, Some(base));
        assert!(scene.node(base).unwrap().children.contains(&child));
        assert_eq!(scene.node_count(), 3);
    }

    #[test]
    fn find_returns_named_node() {
        let mut scene = SceneGraph::new();
        let planet = scene.attach(scene.root(), "Mercury");
        assert_eq!(scene.find("Mercury"), Some(planet));
        assert_eq!(scene.find("Pluto"), None);
    }

    #[test]
    fn world_position_accumulates_parent_scale_and_offset() {
        let mut scene = SceneGraph::new();
        let base = scene.attach(scene.root(), "base");
        scene.set_position(base, Vec3::new(10.0, 0.0, 0.0));
        scene.set_uniform_scale(base, 2.0);

        let child = scene.attach(base, "child");
        scene.set_position(child, Vec3::new(1.0, 1.0, -1.0));

        // Child offset is scaled by the parent before translation.
        assert_eq!(scene.world_position(child), Vec3::new(12.0, 2.0, -2.0));
    }

    #[test]
    fn world_scale_multiplies_through_the_parent_chain() {
        let mut scene = SceneGraph::new();
        let base = scene.attach(scene.root(), "base");
        scene.set_uniform_scale(base, 1.5);
        let child = scene.attach(base, "child");
        scene.set_uniform_scale(child, 0.5);

        assert_eq!(scene.world_scale(base), Vec3::splat(1.5));
        assert_eq!(scene.world_scale(child), Vec3::splat(0.75));
    }

    #[test]
    fn color_tint_round_trips() {
        let mut scene = SceneGraph::new();
        let node = scene.attach(scene.root(), "tinted");
        assert_eq!(scene.color_tint(node), None);

        scene.set_color_tint(node, Vec4::new(1.0, 0.75, 0.75, 1.0));
        assert_eq!(scene.color_tint(node), Some(Vec4::new(1.0, 0.75, 0.75, 1.0)));
    }
}
