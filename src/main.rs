//! Astro Arena headless driver
//!
//! Reference embedding of the simulation core: a fixed-step 50 Hz loop that
//! seeds an arena, flies it for a stretch of simulated time, and logs a
//! periodic census. Rendering, input, and networking hang off this same
//! surface in a real client.

use std::path::Path;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use astro_arena::consts::TICK_RATE;
use astro_arena::sim::{ArenaContext, Bullet, BulletSource, World};
use astro_arena::Tuning;

const SIM_SECONDS: f64 = 30.0;
const CENSUS_EVERY_TICKS: u64 = 250;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let tuning = Tuning::load(Path::new("tuning.json")).sanitized();
    log::info!(
        "arena {}x{}, {} starting asteroids",
        tuning.world_width,
        tuning.world_height,
        tuning.starting_asteroids
    );

    let multiplayer = std::env::args().any(|a| a == "--multiplayer");
    let ctx = if multiplayer {
        ArenaContext::multiplayer(tuning.world_width, tuning.world_height)
    } else {
        ArenaContext::single_player()
    };

    let mut rng = Pcg32::seed_from_u64(0xA57E_401D);
    let mut world = World::new(ctx);
    world.spawn_field(tuning.starting_asteroids, 0.0, &mut rng);

    let dt = 1.0 / TICK_RATE;
    let total_ticks = (SIM_SECONDS * TICK_RATE as f64) as u64;

    for tick in 1..=total_ticks {
        let now = tick as f64 * dt as f64;

        // Exercise the weapon path: a shot every half second, bursts on the odd ones
        if tick % (TICK_RATE as u64 / 2) == 0 {
            let burst = (tick / (TICK_RATE as u64 / 2)) % 2 == 1;
            world.fire(Bullet::fire_with(
                &tuning,
                glam::Vec2::new(ctx.play_area().width / 2.0, ctx.play_area().height / 2.0),
                (tick as f32) * 0.37,
                BulletSource::Player,
                multiplayer.then_some(1),
                None,
                burst,
            ));
        }

        // Stand-in for the external collision system: pop a rock every 5s
        if tick % (TICK_RATE as u64 * 5) == 0 && !world.asteroids.is_empty() {
            world.shatter_asteroid(0, &mut rng);
        }

        world.tick(dt, now);

        if tick % CENSUS_EVERY_TICKS == 0 {
            log::info!(
                "t={:5.1}s asteroids={} bullets={} debris={}",
                now,
                world.asteroids.len(),
                world.bullets.len(),
                world.debris.len()
            );
        }
    }

    log::info!(
        "done: {} ticks, {} asteroids remaining",
        world.time_ticks,
        world.asteroids.len()
    );
}
