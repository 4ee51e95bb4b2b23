//! Astro Arena - entity simulation core for a dual-mode 2D arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entity motion, boundary policy, damage rules)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Leaderboard record keeping
//!
//! The same world runs in two modes: local single-player (screen-wrap
//! boundaries) and networked multiplayer (hard world edges). Multiplayer
//! asteroids use a closed-form, timestamp-derived motion model so clients
//! that tick independently stay visually consistent without exchanging
//! per-frame positions.

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use sim::{ArenaContext, Asteroid, Bullet, Debris, GameMode, World, WorldBounds};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Legacy tick rate the per-tick speed units assume (ticks per second).
    /// Drift velocities and bullet speeds are expressed in position-units per
    /// tick; multiplying by this converts them to per-second rates. The
    /// synchronized asteroid formula bakes in the same factor, so the two
    /// motion models move at identical visual speed.
    pub const TICK_RATE: f32 = 50.0;

    /// Canvas dimensions used as the single-player play area
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Asteroid size tiers: radius in position units
    pub const LARGE_RADIUS: f32 = 40.0;
    pub const MEDIUM_RADIUS: f32 = 25.0;
    pub const SMALL_RADIUS: f32 = 15.0;

    /// Asteroid size tiers: base speed in units per tick
    pub const LARGE_SPEED: f32 = 1.0;
    pub const MEDIUM_SPEED: f32 = 1.5;
    pub const SMALL_SPEED: f32 = 2.0;

    /// Asteroid silhouette: vertex count range and jaggedness band
    pub const SHAPE_MIN_VERTICES: u32 = 6;
    pub const SHAPE_MAX_VERTICES: u32 = 8;
    pub const SHAPE_MIN_JAGGEDNESS: f32 = 0.1;
    pub const SHAPE_MAX_JAGGEDNESS: f32 = 0.3;

    /// Bullet launch speed (units per tick) for a single-point shot
    pub const BULLET_SPEED: f32 = 10.0;
    /// Initial-speed multiplier when fired as part of a multi-point burst
    pub const BURST_SPEED_FACTOR: f32 = 0.75;
    /// Multiplicative speed decay applied once per tick
    pub const BULLET_DECAY: f32 = 0.99;
    /// Bullets at or below this speed are spent
    pub const BULLET_MIN_SPEED: f32 = 0.5;
    /// Maximum flight time in seconds
    pub const BULLET_LIFE: f32 = 1.5;
    pub const BURST_BULLET_LIFE: f32 = 1.0;

    /// Debris lifetime in seconds
    pub const DEBRIS_LIFE: f32 = 1.0;
    /// Remaining lifetime below which debris starts fading out
    pub const DEBRIS_FADE_START: f32 = 0.5;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Unit vector for a heading angle
#[inline]
pub fn heading_to_dir(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
