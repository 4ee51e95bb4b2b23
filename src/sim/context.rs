//! World/mode context passed into every entity update
//!
//! Entities never reach into a global game object; the driver hands each
//! tick an immutable snapshot of the mode and bounds so wrap/bounce
//! decisions are consistent across all entities updated in one frame.

use serde::{Deserialize, Serialize};

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Which flavor of game this world is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameMode {
    #[default]
    Single,
    Multiplayer,
}

impl GameMode {
    #[inline]
    pub fn is_single(&self) -> bool {
        matches!(self, GameMode::Single)
    }

    #[inline]
    pub fn is_multiplayer(&self) -> bool {
        matches!(self, GameMode::Multiplayer)
    }
}

/// Hard world edges for multiplayer sessions
///
/// When disabled, the legacy screen-wrap behavior applies regardless of mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub enabled: bool,
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            enabled: true,
            width,
            height,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            width: 0.0,
            height: 0.0,
        }
    }
}

/// A rectangular play area, whichever policy selected it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

/// Immutable per-tick snapshot of mode and bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaContext {
    pub mode: GameMode,
    pub bounds: WorldBounds,
    pub canvas_width: f32,
    pub canvas_height: f32,
}

impl ArenaContext {
    /// Single-player arena over the default canvas
    pub fn single_player() -> Self {
        Self {
            mode: GameMode::Single,
            bounds: WorldBounds::disabled(),
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
        }
    }

    /// Multiplayer arena with hard world edges
    pub fn multiplayer(width: f32, height: f32) -> Self {
        Self {
            mode: GameMode::Multiplayer,
            bounds: WorldBounds::new(width, height),
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
        }
    }

    /// True when entities bounce off hard edges: multiplayer AND bounds enabled.
    /// Everything else (single-player, or multiplayer with bounds disabled)
    /// keeps the legacy screen-wrap behavior.
    #[inline]
    pub fn bounce_active(&self) -> bool {
        self.mode.is_multiplayer() && self.bounds.enabled
    }

    /// The rectangle that containment checks run against: world bounds when
    /// bouncing, the canvas otherwise.
    #[inline]
    pub fn play_area(&self) -> PlayArea {
        if self.bounce_active() {
            PlayArea {
                width: self.bounds.width,
                height: self.bounds.height,
            }
        } else {
            PlayArea {
                width: self.canvas_width,
                height: self.canvas_height,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_flags_mutually_exclusive() {
        assert!(GameMode::Single.is_single());
        assert!(!GameMode::Single.is_multiplayer());
        assert!(GameMode::Multiplayer.is_multiplayer());
        assert!(!GameMode::Multiplayer.is_single());
    }

    #[test]
    fn test_bounce_requires_multiplayer_and_bounds() {
        assert!(ArenaContext::multiplayer(1000.0, 1000.0).bounce_active());
        assert!(!ArenaContext::single_player().bounce_active());

        let mut ctx = ArenaContext::multiplayer(1000.0, 1000.0);
        ctx.bounds.enabled = false;
        assert!(!ctx.bounce_active());
    }

    #[test]
    fn test_play_area_follows_policy() {
        let mp = ArenaContext::multiplayer(1000.0, 900.0);
        assert_eq!(mp.play_area().width, 1000.0);

        let sp = ArenaContext::single_player();
        assert_eq!(sp.play_area().width, CANVAS_WIDTH);
        assert_eq!(sp.play_area().height, CANVAS_HEIGHT);

        // Multiplayer without bounds falls back to the canvas
        let mut unbounded = ArenaContext::multiplayer(1000.0, 900.0);
        unbounded.bounds.enabled = false;
        assert_eq!(unbounded.play_area().width, CANVAS_WIDTH);
    }
}
