//! Core engine types for SpaceJam.
//!
//! This crate provides the thin engine layer the scene objects sit on:
//! - Scene graph with named, parented transform nodes
//! - Transform and spatial types
//! - Frame timing
//! - Timed position tweening
//! - Asset loading for models and textures

pub mod assets;
pub mod scene;
pub mod time;
pub mod transform;
pub mod tween;

pub use assets::*;
pub use scene::*;
pub use time::*;
pub use transform::*;
pub use tween::*;

// Re-export commonly used math types
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
