//! Model + collider composites bound to a single scene node.
//!
//! An entity owns a node, a model handle, and a collider handle rather than
//! inheriting from engine types. Both the model and the collision volume are
//! authored at the node origin, so placing or scaling the node moves them
//! together.

use engine_core::{AssetError, Loader, Model, NodeId, SceneGraph, Vec3, Vec4};
use physics::{ColliderHandle, ColliderShape, CollisionWorld};

/// A visual model with a matching collision volume under one scene node.
pub struct ModelCollider {
    node: NodeId,
    model: Model,
    collider: ColliderHandle,
}

impl ModelCollider {
    /// Load `model_path` and bind it with `shape` under a new node named
    /// `name`, parented to `parent`.
    pub fn new(
        loader: &Loader,
        scene: &mut SceneGraph,
        collision: &mut CollisionWorld,
        model_path: &str,
        parent: NodeId,
        name: &str,
        shape: ColliderShape,
    ) -> Result<Self, AssetError> {
        let model = loader.load_model(model_path)?;
        let node = scene.attach(parent, name);
        let collider = collision.add_volume(node, scene.world_position(node), shape);
        Ok(Self {
            node,
            model,
            collider,
        })
    }

    /// The node both the model and the collider hang off.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// The loaded model.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The collision volume handle.
    pub fn collider(&self) -> ColliderHandle {
        self.collider
    }

    /// Place the node (and with it, model and collider) at a local position.
    pub fn set_position(&self, scene: &mut SceneGraph, position: Vec3) {
        scene.set_position(self.node, position);
    }

    /// Uniformly scale the node. The collision world refits the volume from
    /// the node's accumulated scale on its next `sync`.
    pub fn set_uniform_scale(&self, scene: &mut SceneGraph, scale: f32) {
        scene.set_uniform_scale(self.node, scale);
    }

    /// Tint the node's subtree.
    pub fn set_color_tint(&self, scene: &mut SceneGraph, tint: Vec4) {
        scene.set_color_tint(self.node, tint);
    }

    /// Swap the texture applied over the model's own materials.
    pub fn replace_texture(
        &mut self,
        loader: &Loader,
        texture_path: &str,
    ) -> Result<(), AssetError> {
        let texture = loader.load_texture(texture_path)?;
        self.model.set_texture(texture);
        Ok(())
    }
}

/// A visual-only model node, for secondary geometry that needs no collider.
pub struct ModelNode {
    node: NodeId,
    model: Model,
}

impl ModelNode {
    /// Load `model_path` under a new node parented to `parent`.
    pub fn new(
        loader: &Loader,
        scene: &mut SceneGraph,
        model_path: &str,
        parent: NodeId,
        name: &str,
    ) -> Result<Self, AssetError> {
        let model = loader.load_model(model_path)?;
        let node = scene.attach(parent, name);
        Ok(Self { node, model })
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn model(&self) -> &Model {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_assets_root;

    #[test]
    fn composite_moves_model_and_collider_together() {
        let loader = Loader::new(test_assets_root());
        let mut scene = SceneGraph::new();
        let mut collision = CollisionWorld::new();

        let root = scene.root();
        let composite = ModelCollider::new(
            &loader,
            &mut scene,
            &mut collision,
            "planets/proto_planet.obj",
            root,
            "Scout",
            ColliderShape::Sphere { radius: 1.0 },
        )
        .unwrap();

        composite.set_position(&mut scene, Vec3::new(5.0, -2.0, 1.0));
        assert_eq!(scene.world_position(composite.node()), Vec3::new(5.0, -2.0, 1.0));
        assert_eq!(collision.node_of(composite.collider()), Some(composite.node()));
        assert_eq!(collision.volume_count(), 1);
    }

    #[test]
    fn rescaled_node_refits_its_collider_on_sync() {
        let loader = Loader::new(test_assets_root());
        let mut scene = SceneGraph::new();
        let mut collision = CollisionWorld::new();

        let root = scene.root();
        let composite = ModelCollider::new(
            &loader,
            &mut scene,
            &mut collision,
            "planets/proto_planet.obj",
            root,
            "Scout",
            ColliderShape::Sphere { radius: 1.0 },
        )
        .unwrap();

        composite.set_uniform_scale(&mut scene, 0.5);
        collision.sync(&scene);

        let collider = collision.collider_set.get(composite.collider()).unwrap();
        assert_eq!(collider.shape().as_ball().unwrap().radius, 0.5);
    }

    #[test]
    fn replace_texture_swaps_model_texture() {
        let loader = Loader::new(test_assets_root());
        let mut scene = SceneGraph::new();
        let mut collision = CollisionWorld::new();

        let root = scene.root();
        let mut composite = ModelCollider::new(
            &loader,
            &mut scene,
            &mut collision,
            "planets/proto_planet.obj",
            root,
            "Scout",
            ColliderShape::Sphere { radius: 1.0 },
        )
        .unwrap();
        assert!(composite.model().texture().is_none());

        composite
            .replace_texture(&loader, "planets/geom_patterns.png")
            .unwrap();
        assert!(composite.model().texture().is_some());
    }

    #[test]
    fn missing_model_is_fatal_to_construction() {
        let loader = Loader::new(test_assets_root());
        let mut scene = SceneGraph::new();
        let mut collision = CollisionWorld::new();

        let root = scene.root();
        let result = ModelCollider::new(
            &loader,
            &mut scene,
            &mut collision,
            "planets/not_there.obj",
            root,
            "Ghost",
            ColliderShape::Sphere { radius: 1.0 },
        );
        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }
}
