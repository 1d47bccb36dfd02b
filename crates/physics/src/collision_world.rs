//! Collision world: sensor volumes bound to scene nodes.
//!
//! Every collider is a sensor attached to a kinematic body. Each frame the
//! caller runs `sync` to copy node world positions in, then `step`, then
//! drains the intersections that started this frame. Nothing here applies
//! forces; the scene graph stays the single writer of positions.

use std::collections::{HashMap, HashSet};

use engine_core::{NodeId, SceneGraph, Vec3};
use rapier3d::prelude::*;

/// Collision volume shapes supported by the scene objects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderShape {
    Sphere {
        radius: f32,
    },
    /// Capsule along the node's local X axis.
    Capsule {
        half_height: f32,
        radius: f32,
    },
}

impl ColliderShape {
    /// The same shape with all dimensions multiplied by `factor`. Used to
    /// keep a collider in lockstep with its node's uniform scale.
    pub fn scaled(self, factor: f32) -> Self {
        match self {
            ColliderShape::Sphere { radius } => ColliderShape::Sphere {
                radius: radius * factor,
            },
            ColliderShape::Capsule {
                half_height,
                radius,
            } => ColliderShape::Capsule {
                half_height: half_height * factor,
                radius: radius * factor,
            },
        }
    }

    fn build(self) -> Collider {
        let builder = match self {
            ColliderShape::Sphere { radius } => ColliderBuilder::ball(radius),
            ColliderShape::Capsule {
                half_height,
                radius,
            } => ColliderBuilder::capsule_x(half_height, radius),
        };
        builder
            .sensor(true)
            // Kinematic-kinematic pairs are filtered out by default; these
            // volumes only ever sit on kinematic bodies.
            .active_collision_types(ActiveCollisionTypes::all())
            .build()
    }

    fn shared(self) -> SharedShape {
        match self {
            ColliderShape::Sphere { radius } => SharedShape::ball(radius),
            ColliderShape::Capsule {
                half_height,
                radius,
            } => SharedShape::capsule_x(half_height, radius),
        }
    }
}

/// A contact that started this frame between two node-bound volumes.
pub type Contact = (NodeId, NodeId);

/// Collision world containing all sensor volumes and the Rapier pipeline.
pub struct CollisionWorld {
    pub rigid_body_set: RigidBodySet,
    pub collider_set: ColliderSet,
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,
    /// Scene node each collider belongs to.
    node_of: HashMap<ColliderHandle, NodeId>,
    /// Body carrying each collider, for kinematic position sync.
    body_of: HashMap<ColliderHandle, RigidBodyHandle>,
    /// Each volume's shape at scale 1; `sync` refits it to the node's
    /// accumulated scene scale.
    base_shape_of: HashMap<ColliderHandle, ColliderShape>,
    /// Scale factor most recently folded into each volume.
    applied_scale_of: HashMap<ColliderHandle, f32>,
    /// Intersecting pairs seen on the previous step, to detect starts.
    previous_pairs: HashSet<(ColliderHandle, ColliderHandle)>,
    /// Contacts that started on the most recent step.
    started: Vec<Contact>,
}

impl Default for CollisionWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionWorld {
    /// Create an empty collision world. Gravity is zero: bodies here are
    /// kinematic carriers for sensors, never simulated dynamics.
    pub fn new() -> Self {
        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            gravity: vector![0.0, 0.0, 0.0],
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            node_of: HashMap::new(),
            body_of: HashMap::new(),
            base_shape_of: HashMap::new(),
            applied_scale_of: HashMap::new(),
            previous_pairs: HashSet::new(),
            started: Vec::new(),
        }
    }

    /// Attach a collision volume to a scene node at its current world position.
    pub fn add_volume(
        &mut self,
        node: NodeId,
        position: Vec3,
        shape: ColliderShape,
    ) -> ColliderHandle {
        let body = RigidBodyBuilder::kinematic_position_based()
            .translation(vector![position.x, position.y, position.z])
            .build();
        let body_handle = self.rigid_body_set.insert(body);
        let handle = self.collider_set.insert_with_parent(
            shape.build(),
            body_handle,
            &mut self.rigid_body_set,
        );
        self.node_of.insert(handle, node);
        self.body_of.insert(handle, body_handle);
        self.base_shape_of.insert(handle, shape);
        self.applied_scale_of.insert(handle, 1.0);
        handle
    }

    /// Replace a volume's scale-1 shape. `sync` refits it to the node's
    /// accumulated scene scale on the next call.
    pub fn set_shape(&mut self, handle: ColliderHandle, shape: ColliderShape) {
        if let Some(collider) = self.collider_set.get_mut(handle) {
            collider.set_shape(shape.shared());
            self.base_shape_of.insert(handle, shape);
            self.applied_scale_of.insert(handle, 1.0);
        }
    }

    /// The scene node a collider is bound to.
    pub fn node_of(&self, handle: ColliderHandle) -> Option<NodeId> {
        self.node_of.get(&handle).copied()
    }

    /// Number of volumes in the world.
    pub fn volume_count(&self) -> usize {
        self.collider_set.len()
    }

    /// Copy every bound node's world position and accumulated scale into its
    /// volume. Call once per frame before `step`.
    pub fn sync(&mut self, scene: &SceneGraph) {
        for (&handle, &node) in &self.node_of {
            let Some(&body_handle) = self.body_of.get(&handle) else {
                continue;
            };
            if let Some(body) = self.rigid_body_set.get_mut(body_handle) {
                let position = scene.world_position(node);
                // Teleport rather than set_next_kinematic_translation: that
                // target only lands at the end of a step, which would delay
                // contact detection by a frame.
                body.set_translation(vector![position.x, position.y, position.z], true);
            }

            // Volumes inherit the node's scene scale, ancestors included, so
            // a scaled parent grows its children's colliders along with their
            // visuals. Largest axis wins if an ancestor scaled non-uniformly.
            let scale = scene.world_scale(node).max_element();
            let applied = self.applied_scale_of.get(&handle).copied().unwrap_or(1.0);
            if (scale - applied).abs() > f32::EPSILON {
                if let Some(base) = self.base_shape_of.get(&handle).copied() {
                    if let Some(collider) = self.collider_set.get_mut(handle) {
                        collider.set_shape(base.scaled(scale).shared());
                        self.applied_scale_of.insert(handle, scale);
                    }
                }
            }
        }
    }

    /// Step the pipeline and record which intersections started this frame.
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );

        let mut current = HashSet::new();
        for (a, b, intersecting) in self.narrow_phase.intersection_pairs() {
            if intersecting {
                current.insert(ordered(a, b));
            }
        }
        for &(a, b) in current.difference(&self.previous_pairs) {
            if let (Some(&node_a), Some(&node_b)) = (self.node_of.get(&a), self.node_of.get(&b)) {
                self.started.push((node_a, node_b));
            }
        }
        self.previous_pairs = current;
    }

    /// Take the contacts that started since the last drain.
    pub fn drain_contacts(&mut self) -> Vec<Contact> {
        std::mem::take(&mut self.started)
    }
}

fn ordered(a: ColliderHandle, b: ColliderHandle) -> (ColliderHandle, ColliderHandle) {
    if a.into_raw_parts() <= b.into_raw_parts() {
        (a, b)
    } else {
        (b, a)
    }
}
