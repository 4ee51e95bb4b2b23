//! Bullet ballistics and damage authorization
//!
//! A bullet's travel direction is fixed at fire time; only its speed decays
//! (exponentially, 0.99 per tick), so the velocity is recomputed every tick
//! from the original angle and the shrunken magnitude. Expiry is the union
//! of three conditions: lifetime, speed floor, and leaving the play area.
//!
//! `can_damage_ship` is the authorization predicate the damage-resolution
//! collaborator consults before applying any hit; damage itself is applied
//! elsewhere.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::boundary;
use super::context::ArenaContext;
use crate::consts::*;
use crate::tuning::Tuning;
use crate::{heading_to_dir, normalize_angle};

/// Identifier of the player who fired a bullet (multiplayer only)
pub type PlayerId = u64;

/// Who fired the bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletSource {
    Player,
    Enemy,
}

/// What the damage resolver knows about a potential victim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipTarget {
    /// Owning player, if any
    pub owner: Option<PlayerId>,
    /// True for any player-controlled ship (as opposed to AI/enemy hulls)
    pub player_controlled: bool,
}

impl ShipTarget {
    pub fn player(id: PlayerId) -> Self {
        Self {
            owner: Some(id),
            player_controlled: true,
        }
    }

    pub fn enemy() -> Self {
        Self {
            owner: None,
            player_controlled: false,
        }
    }
}

/// A projectile in flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    /// Velocity in units per tick, recomputed each tick from `angle` and `speed`
    pub vel: Vec2,
    /// Travel heading in radians, fixed at fire time
    pub angle: f32,
    /// Current speed in units per tick, monotonically decaying
    pub speed: f32,
    /// Elapsed flight time in seconds
    pub life: f32,
    /// Flight time budget in seconds
    pub max_life: f32,
    pub source: BulletSource,
    pub owner: Option<PlayerId>,
}

impl Bullet {
    /// Fire a bullet from a weapon mount with the default balance values.
    ///
    /// `inherited_vel` is the shooter's velocity at fire time (units per
    /// tick); absent means zero. `burst` marks multi-point weapon fire,
    /// which trades initial speed and lifetime for volume.
    pub fn fire(
        pos: Vec2,
        angle: f32,
        source: BulletSource,
        owner: Option<PlayerId>,
        inherited_vel: Option<Vec2>,
        burst: bool,
    ) -> Self {
        Self::fire_with(&Tuning::default(), pos, angle, source, owner, inherited_vel, burst)
    }

    /// Fire a bullet with session tuning: launch speed, burst factor, and
    /// lifetime budgets come from the overrides instead of the defaults.
    pub fn fire_with(
        tuning: &Tuning,
        pos: Vec2,
        angle: f32,
        source: BulletSource,
        owner: Option<PlayerId>,
        inherited_vel: Option<Vec2>,
        burst: bool,
    ) -> Self {
        let launch_speed = if burst {
            tuning.bullet_speed * tuning.burst_speed_factor
        } else {
            tuning.bullet_speed
        };
        let max_life = if burst {
            tuning.burst_bullet_life
        } else {
            tuning.bullet_life
        };
        let angle = normalize_angle(angle);
        let vel = heading_to_dir(angle) * launch_speed + inherited_vel.unwrap_or(Vec2::ZERO);

        Self {
            pos,
            vel,
            angle,
            speed: launch_speed,
            life: 0.0,
            max_life,
            source,
            owner,
        }
    }

    /// Advance one tick: integrate, decay, re-aim the velocity along the
    /// fixed angle, accumulate lifetime.
    pub fn update(&mut self, dt: f32) {
        if dt < 0.0 {
            return;
        }
        self.pos += self.vel * TICK_RATE * dt;
        self.speed *= BULLET_DECAY;
        self.vel = heading_to_dir(self.angle) * self.speed;
        self.life += dt;
    }

    /// True once the bullet is spent: out of lifetime, below the speed
    /// floor, or outside the relevant play area (canvas in wrap mode, world
    /// bounds in bounce mode).
    pub fn is_expired(&self, ctx: &ArenaContext) -> bool {
        self.life >= self.max_life
            || self.speed <= BULLET_MIN_SPEED
            || boundary::outside(self.pos, ctx.play_area())
    }

    /// Damage authorization. Order matters: enemy fire is always live,
    /// single-player short-circuits before any ownership check, and
    /// multiplayer layers an identity check under blanket friendly-fire
    /// protection for player ships.
    pub fn can_damage_ship(&self, target: &ShipTarget, ctx: &ArenaContext) -> bool {
        if self.source == BulletSource::Enemy {
            return true;
        }
        if ctx.mode.is_single() {
            // The player cannot self-damage in single-player
            return false;
        }
        if self.owner.is_some() && self.owner == target.owner {
            return false;
        }
        if target.player_controlled {
            return false;
        }
        true
    }
}
