//! Data-driven game balance
//!
//! Balance values an embedder may override without recompiling, persisted as
//! JSON next to the binary. Defaults match the constants in `crate::consts`,
//! which the sim itself compiles against; `Tuning` is consumed by spawners
//! and drivers, not by the inner entity math.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts::*;

/// Tunable balance values for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Large rocks seeded into a fresh arena
    pub starting_asteroids: usize,
    /// Multiplayer world dimensions
    pub world_width: f32,
    pub world_height: f32,
    /// Bullet launch speed in units per tick
    pub bullet_speed: f32,
    /// Initial-speed multiplier for multi-point burst fire
    pub burst_speed_factor: f32,
    /// Flight time budgets in seconds
    pub bullet_life: f32,
    pub burst_bullet_life: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            starting_asteroids: 6,
            world_width: 2000.0,
            world_height: 2000.0,
            bullet_speed: BULLET_SPEED,
            burst_speed_factor: BURST_SPEED_FACTOR,
            bullet_life: BULLET_LIFE,
            burst_bullet_life: BURST_BULLET_LIFE,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults when the file
    /// is missing or malformed (a bad override never blocks a session)
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("Ignoring malformed tuning file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }

    /// Write tuning as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
        std::fs::write(path, json)?;
        log::info!("Tuning saved to {}", path.display());
        Ok(())
    }

    /// Clamp overrides into sane bands so a typo'd file cannot produce a
    /// degenerate arena
    pub fn sanitized(mut self) -> Self {
        self.starting_asteroids = self.starting_asteroids.clamp(1, 64);
        self.world_width = self.world_width.clamp(200.0, 100_000.0);
        self.world_height = self.world_height.clamp(200.0, 100_000.0);
        self.bullet_speed = self.bullet_speed.clamp(1.0, 100.0);
        self.burst_speed_factor = self.burst_speed_factor.clamp(0.1, 1.0);
        self.bullet_life = self.bullet_life.clamp(0.1, 10.0);
        self.burst_bullet_life = self.burst_bullet_life.clamp(0.1, self.bullet_life);
        self
    }
}
