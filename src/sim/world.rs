//! Reference driver for the entity core
//!
//! `World` is the thin embedding a game loop talks to: it holds the entity
//! vectors plus the arena context, advances every entity with the same `dt`
//! and the same context snapshot, and sweeps spent bullets and dead debris
//! after each tick. Asteroid destruction stays a caller decision (collision
//! detection lives outside this crate); `shatter_asteroid` is the hook the
//! collision system calls once it has one.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::asteroid::{Asteroid, SizeTier};
use super::bullet::Bullet;
use super::context::ArenaContext;
use super::debris::Debris;

/// Debris fragments thrown per shattered asteroid
const SHATTER_DEBRIS: usize = 8;
/// Children spawned when a large or medium rock splits
const SPLIT_CHILDREN: usize = 2;

/// All simulated entities plus the mode/bounds snapshot they update against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub ctx: ArenaContext,
    pub asteroids: Vec<Asteroid>,
    pub bullets: Vec<Bullet>,
    pub debris: Vec<Debris>,
    /// Ticks advanced since creation
    pub time_ticks: u64,
}

impl World {
    pub fn new(ctx: ArenaContext) -> Self {
        Self {
            ctx,
            asteroids: Vec::new(),
            bullets: Vec::new(),
            debris: Vec::new(),
            time_ticks: 0,
        }
    }

    /// Seed the arena with large rocks. Multiplayer worlds with hard edges
    /// get synchronized asteroids (clients re-derive their paths from the
    /// shared records); everything else drifts.
    pub fn spawn_field(&mut self, count: usize, now: f64, rng: &mut impl Rng) {
        use std::f32::consts::TAU;

        let area = self.ctx.play_area();
        for _ in 0..count {
            let pos = Vec2::new(
                rng.random_range(0.0..area.width),
                rng.random_range(0.0..area.height),
            );
            let rock = if self.ctx.bounce_active() {
                let angle = rng.random_range(0.0..TAU);
                let tier = SizeTier::Large;
                Asteroid::synchronized(pos, tier, angle, tier.base_speed(), now, rng)
            } else {
                Asteroid::drift(pos, SizeTier::Large, rng)
            };
            self.asteroids.push(rock);
        }
        log::info!(
            "spawned {} asteroids ({} mode)",
            count,
            if self.ctx.bounce_active() {
                "bounce"
            } else {
                "wrap"
            }
        );
    }

    /// Register a fired bullet
    pub fn fire(&mut self, bullet: Bullet) {
        self.bullets.push(bullet);
    }

    /// Destroy the asteroid at `index`: larger tiers split into two drifting
    /// children, and every destruction scatters debris. Called by the
    /// external collision system once a hit is resolved.
    pub fn shatter_asteroid(&mut self, index: usize, rng: &mut impl Rng) {
        if index >= self.asteroids.len() {
            return;
        }
        let rock = self.asteroids.swap_remove(index);

        if let Some(child_tier) = rock.tier.split() {
            for _ in 0..SPLIT_CHILDREN {
                self.asteroids.push(Asteroid::drift(rock.pos, child_tier, rng));
            }
        }
        for _ in 0..SHATTER_DEBRIS {
            self.debris.push(Debris::scatter(rock.pos, rng));
        }
        log::debug!("shattered {:?} asteroid at {}", rock.tier, rock.pos);
    }

    /// Advance one frame. Every entity sees the same `dt` and the same
    /// context snapshot; spent bullets and dead debris are swept afterwards.
    pub fn tick(&mut self, dt: f32, now: f64) {
        let dt = dt.max(0.0);
        let ctx = self.ctx;

        for rock in &mut self.asteroids {
            rock.update(dt, now, &ctx);
        }
        for bullet in &mut self.bullets {
            bullet.update(dt);
        }
        for fragment in &mut self.debris {
            fragment.update(dt);
        }

        self.bullets.retain(|b| !b.is_expired(&ctx));
        self.debris.retain(|d| !d.is_dead());

        self.time_ticks += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::bullet::BulletSource;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const DT: f32 = 0.02;

    #[test]
    fn test_determinism_across_worlds() {
        let ctx = ArenaContext::multiplayer(1000.0, 800.0);
        let mut w1 = World::new(ctx);
        let mut w2 = World::new(ctx);
        w1.spawn_field(5, 0.0, &mut Pcg32::seed_from_u64(777));
        w2.spawn_field(5, 0.0, &mut Pcg32::seed_from_u64(777));

        for i in 1..=200 {
            let now = i as f64 * DT as f64;
            w1.tick(DT, now);
            w2.tick(DT, now);
        }

        assert_eq!(w1.time_ticks, w2.time_ticks);
        for (a, b) in w1.asteroids.iter().zip(&w2.asteroids) {
            assert_eq!(a.pos, b.pos);
        }
    }

    #[test]
    fn test_expired_bullets_are_swept() {
        let mut w = World::new(ArenaContext::single_player());
        w.fire(Bullet::fire(
            Vec2::new(400.0, 300.0),
            1.0,
            BulletSource::Player,
            None,
            None,
            true, // burst: 1.0s budget
        ));
        assert_eq!(w.bullets.len(), 1);

        // 0.0625 * 16 = exactly the 1.0s burst lifetime
        for i in 1..=16 {
            w.tick(0.0625, i as f64 * 0.0625);
        }
        assert!(w.bullets.is_empty());
    }

    #[test]
    fn test_dead_debris_is_swept() {
        let mut w = World::new(ArenaContext::single_player());
        let mut rng = Pcg32::seed_from_u64(9);
        w.debris.push(Debris::scatter(Vec2::new(100.0, 100.0), &mut rng));

        for i in 1..=16 {
            w.tick(0.0625, i as f64 * 0.0625);
        }
        assert!(w.debris.is_empty());
    }

    #[test]
    fn test_shatter_splits_and_scatters() {
        let mut w = World::new(ArenaContext::single_player());
        let mut rng = Pcg32::seed_from_u64(11);
        w.asteroids
            .push(Asteroid::drift(Vec2::new(200.0, 200.0), SizeTier::Large, &mut rng));

        w.shatter_asteroid(0, &mut rng);
        assert_eq!(w.asteroids.len(), 2);
        assert!(w.asteroids.iter().all(|a| a.tier == SizeTier::Medium));
        assert_eq!(w.debris.len(), SHATTER_DEBRIS);

        // Small rocks shatter clean: debris only, no children
        let mut w = World::new(ArenaContext::single_player());
        w.asteroids
            .push(Asteroid::drift(Vec2::ZERO, SizeTier::Small, &mut rng));
        w.shatter_asteroid(0, &mut rng);
        assert!(w.asteroids.is_empty());
        assert_eq!(w.debris.len(), SHATTER_DEBRIS);
    }

    #[test]
    fn test_shatter_out_of_range_is_ignored() {
        let mut w = World::new(ArenaContext::single_player());
        w.shatter_asteroid(3, &mut Pcg32::seed_from_u64(1));
        assert!(w.asteroids.is_empty());
        assert!(w.debris.is_empty());
    }

    #[test]
    fn test_multiplayer_field_is_synchronized() {
        let mut w = World::new(ArenaContext::multiplayer(1000.0, 1000.0));
        w.spawn_field(3, 5.0, &mut Pcg32::seed_from_u64(2));
        assert!(w
            .asteroids
            .iter()
            .all(|a| matches!(a.motion, crate::sim::asteroid::Motion::Synchronized { .. })));

        let mut w = World::new(ArenaContext::single_player());
        w.spawn_field(3, 5.0, &mut Pcg32::seed_from_u64(2));
        assert!(w
            .asteroids
            .iter()
            .all(|a| matches!(a.motion, crate::sim::asteroid::Motion::Drift { .. })));
    }
}
