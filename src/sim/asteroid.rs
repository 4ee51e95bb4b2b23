//! Asteroid hazard entity
//!
//! An asteroid carries one of two motion models, chosen at creation and
//! never switched:
//! - `Drift`: classic incremental integration with a fixed random velocity
//! - `Synchronized`: position computed in closed form from spawn timestamp,
//!   origin, launch angle, and base speed. Multiplayer clients re-derive the
//!   same position from the shared record and their own clock, so no
//!   per-frame position messages are needed for these asteroids.
//!
//! Radius, base speed, and the silhouette are fixed at construction;
//! position and velocity mutate only through `update`.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::boundary::{self, fold_direction, fold_into_span};
use super::context::ArenaContext;
use crate::consts::*;
use crate::heading_to_dir;

/// Asteroid size class, determining radius and base speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeTier {
    Large,
    Medium,
    Small,
}

impl SizeTier {
    /// Collision/boundary radius in position units
    #[inline]
    pub fn radius(&self) -> f32 {
        match self {
            SizeTier::Large => LARGE_RADIUS,
            SizeTier::Medium => MEDIUM_RADIUS,
            SizeTier::Small => SMALL_RADIUS,
        }
    }

    /// Base speed in position units per tick (smaller rocks move faster)
    #[inline]
    pub fn base_speed(&self) -> f32 {
        match self {
            SizeTier::Large => LARGE_SPEED,
            SizeTier::Medium => MEDIUM_SPEED,
            SizeTier::Small => SMALL_SPEED,
        }
    }

    /// Next tier down when split by a hit; None once small rocks shatter
    pub fn split(&self) -> Option<SizeTier> {
        match self {
            SizeTier::Large => Some(SizeTier::Medium),
            SizeTier::Medium => Some(SizeTier::Small),
            SizeTier::Small => None,
        }
    }
}

/// Jagged silhouette descriptor, fixed at creation so the rock doesn't
/// shimmer between frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidShape {
    /// Per-vertex distance from center as a ratio of the tier radius,
    /// each in [1 - jaggedness, 1]
    pub radius_ratios: Vec<f32>,
}

impl AsteroidShape {
    /// Draw a silhouette: 6-8 vertices, jaggedness in [0.1, 0.3)
    pub fn random(rng: &mut impl Rng) -> Self {
        let vertices = rng.random_range(SHAPE_MIN_VERTICES..=SHAPE_MAX_VERTICES);
        let jaggedness = rng.random_range(SHAPE_MIN_JAGGEDNESS..SHAPE_MAX_JAGGEDNESS);
        let radius_ratios = (0..vertices)
            .map(|_| rng.random_range(1.0 - jaggedness..=1.0))
            .collect();
        Self { radius_ratios }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.radius_ratios.len()
    }

    /// Outline points around a center at the given tier radius (for rendering)
    pub fn outline(&self, center: Vec2, radius: f32) -> Vec<Vec2> {
        let n = self.radius_ratios.len().max(1);
        self.radius_ratios
            .iter()
            .enumerate()
            .map(|(i, ratio)| {
                let theta = TAU * (i as f32 / n as f32);
                center + heading_to_dir(theta) * (radius * ratio)
            })
            .collect()
    }
}

/// Motion model, selected once at creation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Motion {
    /// Incremental integration with a fixed velocity (units per tick)
    Drift { vel: Vec2 },
    /// Closed-form timestamp-derived motion for multiplayer sync
    Synchronized {
        /// Wall-clock spawn time in seconds
        spawn_time: f64,
        origin: Vec2,
        /// Launch heading in radians, fixed
        angle: f32,
        /// Speed scalar in units per tick
        base_speed: f32,
    },
}

/// A hazard rock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    /// Current velocity in units per tick. Authoritative for `Drift`;
    /// derived each update for `Synchronized` (render/aim support only).
    pub vel: Vec2,
    pub tier: SizeTier,
    pub shape: AsteroidShape,
    pub motion: Motion,
}

impl Asteroid {
    /// Spawn a drifting asteroid with a uniformly random heading at the
    /// tier's base speed
    pub fn drift(pos: Vec2, tier: SizeTier, rng: &mut impl Rng) -> Self {
        let angle = rng.random_range(0.0..TAU);
        let vel = heading_to_dir(angle) * tier.base_speed();
        Self {
            pos,
            vel,
            tier,
            shape: AsteroidShape::random(rng),
            motion: Motion::Drift { vel },
        }
    }

    /// Spawn a synchronized asteroid from a shared motion record.
    ///
    /// Malformed records (non-finite timestamp, origin, angle, or speed)
    /// fall back to a standard drifting asteroid instead of failing; every
    /// client makes the same call, so the fallback stays consistent.
    pub fn synchronized(
        origin: Vec2,
        tier: SizeTier,
        angle: f32,
        base_speed: f32,
        spawn_time: f64,
        rng: &mut impl Rng,
    ) -> Self {
        let well_formed = spawn_time.is_finite()
            && origin.is_finite()
            && angle.is_finite()
            && base_speed.is_finite();
        if !well_formed {
            log::warn!("malformed synchronized-motion record, falling back to drift");
            return Self::drift(origin, tier, rng);
        }

        Self {
            pos: origin,
            vel: heading_to_dir(angle) * base_speed,
            tier,
            shape: AsteroidShape::random(rng),
            motion: Motion::Synchronized {
                spawn_time,
                origin,
                angle,
                base_speed,
            },
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.tier.radius()
    }

    /// Advance one tick. `now` is the wall-clock time in seconds; only the
    /// synchronized model reads it.
    pub fn update(&mut self, dt: f32, now: f64, ctx: &ArenaContext) {
        let dt = dt.max(0.0);

        match self.motion {
            Motion::Drift { ref mut vel } => {
                self.pos += *vel * TICK_RATE * dt;
                if ctx.bounce_active() {
                    boundary::bounce(&mut self.pos, vel, self.tier.radius(), &ctx.bounds);
                } else {
                    boundary::wrap(&mut self.pos, self.tier.radius(), ctx.play_area());
                }
                self.vel = *vel;
            }
            Motion::Synchronized {
                spawn_time,
                origin,
                angle,
                base_speed,
            } => {
                // Clock skew can put `now` before the spawn timestamp; hold
                // the rock at its origin rather than running time backwards.
                let elapsed = (now - spawn_time).max(0.0) as f32;
                let dir = heading_to_dir(angle);
                let raw = origin + dir * base_speed * elapsed * TICK_RATE;

                if ctx.bounce_active() {
                    let r = self.tier.radius();
                    let (w, h) = (ctx.bounds.width, ctx.bounds.height);
                    self.pos = Vec2::new(
                        fold_into_span(raw.x, r, w - r),
                        fold_into_span(raw.y, r, h - r),
                    );
                    self.vel = Vec2::new(
                        dir.x * base_speed * fold_direction(raw.x, r, w - r),
                        dir.y * base_speed * fold_direction(raw.y, r, h - r),
                    );
                } else {
                    // Bounds disabled: unbounded linear motion
                    self.pos = raw;
                    self.vel = dir * base_speed;
                }
            }
        }
    }

    /// Closed-form position for a synchronized record - the pure function
    /// every client evaluates. Returns None for drift asteroids.
    pub fn synchronized_position_at(&self, now: f64, ctx: &ArenaContext) -> Option<Vec2> {
        let Motion::Synchronized {
            spawn_time,
            origin,
            angle,
            base_speed,
        } = self.motion
        else {
            return None;
        };
        let elapsed = (now - spawn_time).max(0.0) as f32;
        let raw = origin + heading_to_dir(angle) * base_speed * elapsed * TICK_RATE;
        if !ctx.bounce_active() {
            return Some(raw);
        }
        let r = self.tier.radius();
        Some(Vec2::new(
            fold_into_span(raw.x, r, ctx.bounds.width - r),
            fold_into_span(raw.y, r, ctx.bounds.height - r),
        ))
    }
}
