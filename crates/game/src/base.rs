//! The space base and the defender swarm it spawns around itself.

use engine_core::{AssetError, Loader, NodeId, SceneGraph, Vec3, Vec4};
use physics::{ColliderShape, CollisionWorld};
use procgen::SpawnPattern;

use crate::model_collider::{ModelCollider, ModelNode};
use crate::planet::PLANET_MODEL;
use crate::universe::UNIVERSE_MODEL;

/// Defenders spawned per pattern call at full strength.
pub const DEFENDERS_PER_PATTERN: usize = 100;
/// Offset of the base's secondary hull section, in base-local units.
const SECTION_B_OFFSET: Vec3 = Vec3::new(0.75, 0.0, 0.0);

/// Tints for the two defender waves.
const LINE_TINT: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);
const GRID_TINT: Vec4 = Vec4::new(0.0, 1.0, 0.0, 1.0);

/// A small sphere-collided craft parented under its base.
pub struct Defender {
    name: String,
    composite: ModelCollider,
}

impl Defender {
    /// Spawn one defender at `position` (base-local), tinted and named.
    pub fn new(
        loader: &Loader,
        scene: &mut SceneGraph,
        collision: &mut CollisionWorld,
        parent: NodeId,
        position: Vec3,
        color_tint: Vec4,
        name: &str,
    ) -> Result<Self, AssetError> {
        let composite = ModelCollider::new(
            loader,
            scene,
            collision,
            PLANET_MODEL,
            parent,
            &format!("{name}Model"),
            ColliderShape::Sphere { radius: 1.0 },
        )?;
        composite.set_uniform_scale(scene, 0.5);
        composite.set_position(scene, position);
        composite.set_color_tint(scene, color_tint);
        Ok(Self {
            name: name.to_string(),
            composite,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn node(&self) -> NodeId {
        self.composite.node()
    }
}

/// Capsule-collided base that spawns a defender swarm at construction.
/// The defender list is fixed afterwards; defenders are never removed here.
pub struct Base {
    composite: ModelCollider,
    section_b: ModelNode,
    defenders: Vec<Defender>,
}

impl Base {
    /// Build a base spawning `count` defenders per pattern call (100 at full
    /// strength, see [`DEFENDERS_PER_PATTERN`]). The second
    /// pattern is a grid of `count / 2` lines of `count / 2` positions.
    pub fn with_defender_count(
        loader: &Loader,
        scene: &mut SceneGraph,
        collision: &mut CollisionWorld,
        parent: NodeId,
        position: Vec3,
        count: usize,
    ) -> Result<Self, AssetError> {
        let composite = ModelCollider::new(
            loader,
            scene,
            collision,
            UNIVERSE_MODEL,
            parent,
            "SpaceBase",
            // Capsule spanning from the primary hull toward section B.
            ColliderShape::Capsule {
                half_height: 0.375,
                radius: 1.0,
            },
        )?;
        let section_b =
            ModelNode::new(loader, scene, UNIVERSE_MODEL, composite.node(), "SpaceBaseB")?;
        scene.set_position(section_b.node(), SECTION_B_OFFSET);
        composite.set_position(scene, position);
        composite.set_uniform_scale(scene, 1.5);

        let mut base = Self {
            composite,
            section_b,
            defenders: Vec::new(),
        };
        base.spawn_defenders(
            loader,
            scene,
            collision,
            SpawnPattern::Line {
                count,
                step: Vec3::new(1.0, 1.0, -1.0),
            },
            LINE_TINT,
        )?;
        base.spawn_defenders(
            loader,
            scene,
            collision,
            SpawnPattern::GridOfLines {
                outer_count: count / 2,
                inner_count: count / 2,
                outer_step: Vec3::new(-1.0, 0.0, 1.0),
                inner_step: Vec3::new(1.0, -1.0, -1.0),
            },
            GRID_TINT,
        )?;
        Ok(base)
    }

    /// Spawn one wave of defenders around the base. Names continue the
    /// running index across waves, in pattern order.
    fn spawn_defenders(
        &mut self,
        loader: &Loader,
        scene: &mut SceneGraph,
        collision: &mut CollisionWorld,
        pattern: SpawnPattern,
        color_tint: Vec4,
    ) -> Result<(), AssetError> {
        self.defenders.reserve(pattern.len());
        let base_name = scene
            .node(self.composite.node())
            .map(|n| n.name.clone())
            .unwrap_or_default();
        for position in pattern.positions(Vec3::ZERO) {
            let name = format!("{base_name}def{}", self.defenders.len());
            self.defenders.push(Defender::new(
                loader,
                scene,
                collision,
                self.composite.node(),
                position,
                color_tint,
                &name,
            )?);
        }
        Ok(())
    }

    pub fn node(&self) -> NodeId {
        self.composite.node()
    }

    /// The secondary hull section.
    pub fn section_b(&self) -> &ModelNode {
        &self.section_b
    }

    /// The swarm, in spawn order.
    pub fn defenders(&self) -> &[Defender] {
        &self.defenders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_assets_root;

    fn small_base() -> (SceneGraph, CollisionWorld, Base) {
        let loader = Loader::new(test_assets_root());
        let mut scene = SceneGraph::new();
        let mut collision = CollisionWorld::new();
        let root = scene.root();
        let base = Base::with_defender_count(
            &loader,
            &mut scene,
            &mut collision,
            root,
            Vec3::new(100.0, 0.0, 0.0),
            4,
        )
        .unwrap();
        (scene, collision, base)
    }

    #[test]
    fn line_wave_defenders_sit_on_the_expected_offsets() {
        let (scene, _, base) = small_base();
        let expected = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, -1.0),
            Vec3::new(2.0, 2.0, -2.0),
            Vec3::new(3.0, 3.0, -3.0),
        ];
        for (defender, offset) in base.defenders().iter().take(4).zip(expected) {
            assert_eq!(scene.position(defender.node()), offset);
        }
    }

    #[test]
    fn defender_names_run_sequentially_across_waves() {
        let (_, _, base) = small_base();
        // 4 from the line wave + 2x2 from the grid wave.
        assert_eq!(base.defenders().len(), 8);
        for (i, defender) in base.defenders().iter().enumerate() {
            assert_eq!(defender.name(), format!("SpaceBasedef{i}"));
        }
    }

    #[test]
    fn defenders_are_parented_under_the_base() {
        let (scene, _, base) = small_base();
        for defender in base.defenders() {
            assert_eq!(scene.node(defender.node()).unwrap().parent, Some(base.node()));
        }
        // Base scale carries the swarm: first grid defender is at base-local
        // (0,0,0), so its world position is the base position.
        let first = base.defenders().first().unwrap();
        assert_eq!(scene.world_position(first.node()), Vec3::new(100.0, 0.0, 0.0));
    }

    #[test]
    fn waves_are_tinted_red_then_green() {
        let (scene, _, base) = small_base();
        assert_eq!(scene.color_tint(base.defenders()[0].node()), Some(LINE_TINT));
        assert_eq!(scene.color_tint(base.defenders()[7].node()), Some(GRID_TINT));
    }
}
