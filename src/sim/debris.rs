//! Cosmetic debris fragments
//!
//! Spawned on destruction events, gone within a second. Debris has no
//! gameplay effect and gets no boundary handling - it is expected to expire
//! long before reaching an edge, so nothing clamps or wraps it.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::consts::{DEBRIS_FADE_START, DEBRIS_LIFE};
use crate::heading_to_dir;

/// Fixed spawn distribution: speed band in units per second
const MIN_SPEED: f32 = 30.0;
const MAX_SPEED: f32 = 120.0;
/// Spin band in radians per second, either direction
const MAX_SPIN: f32 = 8.0;
/// Visual fragment length band in position units
const MIN_LENGTH: f32 = 4.0;
const MAX_LENGTH: f32 = 12.0;

/// A short-lived fading line fragment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debris {
    pub pos: Vec2,
    /// Units per second, fixed at creation
    pub vel: Vec2,
    /// Current rotation in radians
    pub rot: f32,
    /// Radians per second, fixed at creation
    pub rot_speed: f32,
    /// Visual length in position units
    pub length: f32,
    /// Remaining lifetime in seconds, counts down from 1.0
    pub life: f32,
}

impl Debris {
    /// Scatter a fragment from a destruction point with random direction,
    /// speed, spin, and length drawn from the fixed distribution
    pub fn scatter(pos: Vec2, rng: &mut impl Rng) -> Self {
        let heading = rng.random_range(0.0..TAU);
        let speed = rng.random_range(MIN_SPEED..MAX_SPEED);
        Self {
            pos,
            vel: heading_to_dir(heading) * speed,
            rot: rng.random_range(0.0..TAU),
            rot_speed: rng.random_range(-MAX_SPIN..MAX_SPIN),
            length: rng.random_range(MIN_LENGTH..MAX_LENGTH),
            life: DEBRIS_LIFE,
        }
    }

    /// Advance one tick: integrate, spin, burn lifetime. No boundary checks.
    pub fn update(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.pos += self.vel * dt;
        self.rot += self.rot_speed * dt;
        self.life -= dt;
    }

    /// Spent fragments are swept by the driver
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.life <= 0.0
    }

    /// Render opacity derived from remaining lifetime: full above the fade
    /// threshold, then linear down to zero. Derived, never stored.
    pub fn opacity(&self) -> f32 {
        if self.life <= 0.0 {
            0.0
        } else if self.life >= DEBRIS_FADE_START {
            1.0
        } else {
            self.life / DEBRIS_FADE_START
        }
    }
}
