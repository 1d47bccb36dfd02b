//! The universe skybox entity.

use engine_core::{AssetError, Loader, NodeId, SceneGraph};
use physics::{ColliderShape, CollisionWorld};

use crate::model_collider::ModelCollider;

/// Model used for the universe sphere (and reused by bases for their hull).
pub const UNIVERSE_MODEL: &str = "universe/universe.obj";

/// Scale of the skybox sphere, big enough to contain the whole play area.
pub const UNIVERSE_SCALE: f32 = 90000.0;

/// Sphere-collided skybox enclosing the scene.
pub struct Universe {
    composite: ModelCollider,
}

impl Universe {
    /// Build the skybox under the scene root.
    pub fn new(
        loader: &Loader,
        scene: &mut SceneGraph,
        collision: &mut CollisionWorld,
    ) -> Result<Self, AssetError> {
        let root = scene.root();
        let composite = ModelCollider::new(
            loader,
            scene,
            collision,
            UNIVERSE_MODEL,
            root,
            "Universe",
            ColliderShape::Sphere { radius: 1.0 },
        )?;
        composite.set_uniform_scale(scene, UNIVERSE_SCALE);
        Ok(Self { composite })
    }

    pub fn node(&self) -> NodeId {
        self.composite.node()
    }
}
