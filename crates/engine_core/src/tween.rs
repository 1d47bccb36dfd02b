//! Timed position interpolation, advanced by the host frame loop.

use glam::Vec3;

use crate::scene::{NodeId, SceneGraph};

/// Linear position tween for a single scene node.
///
/// Advancing the tween writes the interpolated position straight into the
/// node's local transform. The tween does not own a clock: whoever runs the
/// frame loop feeds it delta time.
#[derive(Debug, Clone)]
pub struct PosTween {
    node: NodeId,
    start: Vec3,
    end: Vec3,
    duration: f32,
    elapsed: f32,
}

impl PosTween {
    /// Plan a tween from `start` to `end` over `duration` seconds.
    /// A non-positive duration completes on the first advance.
    pub fn new(node: NodeId, start: Vec3, end: Vec3, duration: f32) -> Self {
        Self {
            node,
            start,
            end,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    /// The node this tween moves.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// The position the tween ends at.
    pub fn target(&self) -> Vec3 {
        self.end
    }

    /// Fraction of the tween completed, in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    /// Advance by `dt` seconds, writing the interpolated position into the
    /// node. Returns true once the tween has reached its end; the position
    /// is clamped to the endpoint.
    pub fn advance(&mut self, scene: &mut SceneGraph, dt: f32) -> bool {
        self.elapsed += dt.max(0.0);
        let t = self.progress();
        scene.set_position(self.node, self.start.lerp(self.end, t));
        t >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_with_node() -> (SceneGraph, NodeId) {
        let mut scene = SceneGraph::new();
        let node = scene.attach(scene.root(), "mover");
        (scene, node)
    }

    #[test]
    fn advance_interpolates_linearly() {
        let (mut scene, node) = scene_with_node();
        let mut tween = PosTween::new(node, Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 2.0);

        assert!(!tween.advance(&mut scene, 0.5));
        assert_eq!(scene.position(node), Vec3::new(2.5, 0.0, 0.0));
        assert!((tween.progress() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn advance_clamps_at_endpoint() {
        let (mut scene, node) = scene_with_node();
        let mut tween = PosTween::new(node, Vec3::ZERO, Vec3::new(4.0, 4.0, 4.0), 1.0);

        assert!(tween.advance(&mut scene, 10.0));
        assert_eq!(scene.position(node), Vec3::new(4.0, 4.0, 4.0));
        assert_eq!(tween.progress(), 1.0);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let (mut scene, node) = scene_with_node();
        let mut tween = PosTween::new(node, Vec3::ONE, Vec3::new(2.0, 2.0, 2.0), 0.0);

        assert!(tween.advance(&mut scene, 0.0));
        assert_eq!(scene.position(node), Vec3::new(2.0, 2.0, 2.0));
    }
}
