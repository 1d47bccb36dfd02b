//! SpaceJam — scene assembly demo: a universe, a solar system, a defended
//! base, and one projectile flight driven through the fixed-step loop.

mod base;
mod config;
mod model_collider;
mod planet;
mod projectile;
mod universe;

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Result;
use engine_core::{Loader, SceneGraph, Time, Vec3};
use physics::CollisionWorld;

use base::Base;
use config::GameConfig;
use planet::{SolarSystem, PLANET_MODEL};
use projectile::Projectile;
use universe::Universe;

/// Assets root: `SPACEJAM_ASSETS` if set, otherwise `assets/` in the
/// working directory.
fn assets_root() -> PathBuf {
    std::env::var_os("SPACEJAM_ASSETS")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting SpaceJam scene demo");

    let config = GameConfig::load();
    let loader = Loader::new(assets_root());
    let mut scene = SceneGraph::new();
    let mut collision = CollisionWorld::new();

    let root = scene.root();
    let _universe = Universe::new(&loader, &mut scene, &mut collision)?;
    let _solar_system = SolarSystem::new(&loader, &mut scene, &mut collision, root)?;
    let base = Base::with_defender_count(
        &loader,
        &mut scene,
        &mut collision,
        root,
        Vec3::new(120.0, 60.0, 30.0),
        config.defenders_per_pattern,
    )?;
    log::info!(
        "Scene assembled: {} nodes, {} collision volumes, {} defenders",
        scene.node_count(),
        collision.volume_count(),
        base.defenders().len()
    );

    // One demo flight from the base toward the sun.
    let flight_done = Rc::new(Cell::new(false));
    let done_flag = Rc::clone(&flight_done);
    let mut projectile = Projectile::new(
        &loader,
        &mut scene,
        &mut collision,
        PLANET_MODEL,
        root,
        "DemoShot",
        move || {
            log::info!("Projectile flight concluded");
            done_flag.set(true);
        },
    )?
    .with_flight_duration(config.flight_duration);

    let start = scene.world_position(base.node());
    let direction = (Vec3::ZERO - start).normalize();
    projectile.prepare_flight(&mut scene, start, direction, 100.0)?;
    projectile.commence_flight()?;
    log::info!("Projectile commenced from {start}");

    let mut time = Time::new();
    time.set_fixed_rate(config.sim_rate_hz);
    let dt = time.fixed_timestep_seconds();
    let mut contact_total = 0usize;

    for step in 0..config.demo_steps {
        time.update();
        log::trace!("Step {step}: {:.4}s since last", time.delta_seconds());
        projectile.update(&mut scene, dt);
        collision.sync(&scene);
        collision.step();
        for (a, b) in collision.drain_contacts() {
            contact_total += 1;
            let name = |id| {
                scene
                    .node(id)
                    .map(|n| n.name.clone())
                    .unwrap_or_else(|| "?".to_string())
            };
            log::debug!("Contact on step {step}: {} <-> {}", name(a), name(b));
        }
    }

    log::info!(
        "Demo finished: {} fixed steps in {:.2}s wall time, {} contacts, flight concluded: {}",
        time.frame_count(),
        time.elapsed_seconds(),
        contact_total,
        flight_done.get()
    );
    log::info!(
        "Projectile parked in phase {:?} at {}",
        projectile.phase(),
        scene.position(projectile.node())
    );
    Ok(())
}

#[cfg(test)]
pub(crate) fn test_assets_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../assets")
}
