//! Projectile flight: a position tween gated by a lifecycle state machine.
//!
//! A flight walks Unprepared → Prepared → InFlight → Concluded. The caller
//! prepares a flight plan, commences it, and the frame loop advances it via
//! `update` until the tween completes (or a collision makes the caller
//! conclude early). Conclusion parks the model at a sentinel position far
//! outside the play area instead of destroying the node, and fires the
//! flight-concluded callback exactly once per flight.

use engine_core::{AssetError, Loader, NodeId, PosTween, SceneGraph, Vec3};
use physics::{ColliderShape, CollisionWorld};
use thiserror::Error;

use crate::model_collider::ModelCollider;

/// Parking spot for a concluded projectile, far outside the play area.
pub const CONCLUDED_PARK_POSITION: Vec3 = Vec3::new(9000.0, 9000.0, 9000.0);

/// Flight time from start to target, in seconds.
pub const DEFAULT_FLIGHT_DURATION: f32 = 2.0;

/// Lifecycle precondition violations. These are caller programming errors,
/// surfaced synchronously; the projectile state is left untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("commence_flight called without a prepared flight; nothing happened")]
    CommenceBeforePrepare,
    #[error("conclude_flight called without a commenced flight; nothing happened")]
    ConcludeBeforeCommence,
    #[error("prepare_flight called while a flight is in progress; nothing happened")]
    PrepareWhileInFlight,
}

/// Where a projectile is in its flight lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlightPhase {
    #[default]
    Unprepared,
    Prepared,
    InFlight,
    Concluded,
}

/// Sphere-collided projectile with a per-instance flight plan.
pub struct Projectile {
    composite: ModelCollider,
    phase: FlightPhase,
    flight_duration: f32,
    /// The current flight plan. Only present between prepare and conclude.
    tween: Option<PosTween>,
    /// Invoked exactly once per flight, synchronously, from conclusion.
    on_concluded: Box<dyn FnMut()>,
}

impl Projectile {
    /// Load the projectile model under `parent`. `on_concluded` is called
    /// once per flight when the flight concludes.
    pub fn new(
        loader: &Loader,
        scene: &mut SceneGraph,
        collision: &mut CollisionWorld,
        model_path: &str,
        parent: NodeId,
        name: &str,
        on_concluded: impl FnMut() + 'static,
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
        Ok(Self {
            composite,
            phase: FlightPhase::Unprepared,
            flight_duration: DEFAULT_FLIGHT_DURATION,
            tween: None,
            on_concluded: Box::new(on_concluded),
        })
    }

    /// Override the flight duration for subsequent flights.
    pub fn with_flight_duration(mut self, seconds: f32) -> Self {
        self.flight_duration = seconds;
        self
    }

    pub fn node(&self) -> NodeId {
        self.composite.node()
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    /// Plan a flight from `start` along `direction` for `distance` units and
    /// place the model at the start. Valid from any phase except InFlight;
    /// a concluded projectile becomes Prepared again for reuse.
    pub fn prepare_flight(
        &mut self,
        scene: &mut SceneGraph,
        start: Vec3,
        direction: Vec3,
        distance: f32,
    ) -> Result<(), LifecycleError> {
        if self.phase == FlightPhase::InFlight {
            return Err(LifecycleError::PrepareWhileInFlight);
        }
        let target = start + direction * distance;
        self.composite.set_position(scene, start);
        self.tween = Some(PosTween::new(
            self.composite.node(),
            start,
            target,
            self.flight_duration,
        ));
        self.phase = FlightPhase::Prepared;
        Ok(())
    }

    /// Begin the prepared flight. The tween only advances once the frame
    /// loop calls `update`, so nothing moves before then.
    pub fn commence_flight(&mut self) -> Result<(), LifecycleError> {
        if self.phase != FlightPhase::Prepared {
            return Err(LifecycleError::CommenceBeforePrepare);
        }
        self.phase = FlightPhase::InFlight;
        Ok(())
    }

    /// Advance an in-flight projectile by `dt` seconds; concludes the flight
    /// once the tween reaches its target. No-op in any other phase.
    pub fn update(&mut self, scene: &mut SceneGraph, dt: f32) {
        if self.phase != FlightPhase::InFlight {
            return;
        }
        let done = match self.tween.as_mut() {
            Some(tween) => tween.advance(scene, dt),
            None => true,
        };
        if done {
            // Phase is InFlight here, so conclusion cannot fail.
            self.conclude_flight(scene).ok();
        }
    }

    /// End the flight: clear the plan, park the model at the sentinel
    /// position, and fire the flight-concluded callback.
    pub fn conclude_flight(&mut self, scene: &mut SceneGraph) -> Result<(), LifecycleError> {
        if self.phase != FlightPhase::InFlight {
            return Err(LifecycleError::ConcludeBeforeCommence);
        }
        self.tween = None;
        self.composite.set_position(scene, CONCLUDED_PARK_POSITION);
        self.phase = FlightPhase::Concluded;
        (self.on_concluded)();
        Ok(())
    }
}
