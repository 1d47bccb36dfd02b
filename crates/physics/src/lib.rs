//! Collision detection for SpaceJam scene objects, built on Rapier3D.

pub mod collision_world;

pub use collision_world::*;

// Re-export common Rapier types
pub use rapier3d::prelude::ColliderHandle;
