//! Planets and the solar system container.

use engine_core::{AssetError, Loader, NodeId, SceneGraph, Vec3, Vec4};
use physics::{ColliderShape, CollisionWorld};

use crate::model_collider::ModelCollider;

/// Shared prototype model all planets start from.
pub const PLANET_MODEL: &str = "planets/proto_planet.obj";
/// Geometric-pattern texture used by most planets.
pub const GEOM_PATTERNS_TEXTURE: &str = "planets/geom_patterns.png";
/// Texture for the BBQ planet.
pub const BBQ_TEXTURE: &str = "planets/bbq.png";

/// Sphere-collided planet. The collider is authored at unit size so it
/// tracks the node when the planet is placed and scaled.
pub struct Planet {
    composite: ModelCollider,
}

impl Planet {
    /// Build a planet from `model_path`, placed and uniformly scaled.
    pub fn new(
        loader: &Loader,
        scene: &mut SceneGraph,
        collision: &mut CollisionWorld,
        model_path: &str,
        parent: NodeId,
        name: &str,
        position: Vec3,
        scale: f32,
    ) -> Result<Self, AssetError> {
        let composite = ModelCollider::new(
            loader,
            scene,
            collision,
            model_path,
            parent,
            name,
            ColliderShape::Sphere { radius: 1.0 },
        )?;
        // Position and scale go on the shared node so the collider stays
        // matched to the visual.
        composite.set_position(scene, position);
        composite.set_uniform_scale(scene, scale);
        Ok(Self { composite })
    }

    pub fn node(&self) -> NodeId {
        self.composite.node()
    }

    /// Tint the planet's subtree.
    pub fn set_color_tint(&self, scene: &mut SceneGraph, tint: Vec4) {
        self.composite.set_color_tint(scene, tint);
    }

    /// Swap the planet's texture.
    pub fn replace_texture(
        &mut self,
        loader: &Loader,
        texture_path: &str,
    ) -> Result<(), AssetError> {
        self.composite.replace_texture(loader, texture_path)
    }
}

/// Container of the named planets in the universe: Sun, Mercury, and BBQ.
pub struct SolarSystem {
    node: NodeId,
    pub sun: Planet,
    pub mercury: Planet,
    pub bbq: Planet,
}

impl SolarSystem {
    /// Build every planet under a "Solar System" node parented to `parent`.
    pub fn new(
        loader: &Loader,
        scene: &mut SceneGraph,
        collision: &mut CollisionWorld,
        parent: NodeId,
    ) -> Result<Self, AssetError> {
        let node = scene.attach(parent, "Solar System");

        let mut sun = Planet::new(
            loader, scene, collision, PLANET_MODEL, node, "Sun", Vec3::ZERO, 20.0,
        )?;
        sun.replace_texture(loader, GEOM_PATTERNS_TEXTURE)?;

        let mut mercury = Planet::new(
            loader,
            scene,
            collision,
            PLANET_MODEL,
            node,
            "Mercury",
            Vec3::new(30.0, 20.0, 10.0),
            7.0,
        )?;
        mercury.replace_texture(loader, GEOM_PATTERNS_TEXTURE)?;
        mercury.set_color_tint(scene, Vec4::new(1.0, 0.75, 0.75, 1.0));

        let mut bbq = Planet::new(
            loader,
            scene,
            collision,
            PLANET_MODEL,
            node,
            "BBQ",
            Vec3::new(50.0, 40.0, 30.0),
            14.0,
        )?;
        bbq.replace_texture(loader, BBQ_TEXTURE)?;

        Ok(Self {
            node,
            sun,
            mercury,
            bbq,
        })
    }

    pub fn node(&self) -> NodeId {
        self.node
    }
}
