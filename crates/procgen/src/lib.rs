//! Procedural placement for SpaceJam: spawn-position pattern generation.

pub mod patterns;

pub use patterns::*;
