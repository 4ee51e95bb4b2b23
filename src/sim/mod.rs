//! Deterministic simulation module
//!
//! All entity motion logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, injected at spawn time
//! - Wall-clock "now" and the arena context are passed in, never read ambiently
//! - No rendering or platform dependencies
//!
//! Every entity owns its state exclusively; one `update` call per entity per
//! tick, with all entities in a frame observing the same `dt` and the same
//! context snapshot.

pub mod asteroid;
pub mod boundary;
pub mod bullet;
pub mod context;
pub mod debris;
pub mod world;

pub use asteroid::{Asteroid, AsteroidShape, Motion, SizeTier};
pub use boundary::{bounce, fold_into_span, wrap};
pub use bullet::{Bullet, BulletSource, PlayerId, ShipTarget};
pub use context::{ArenaContext, GameMode, PlayArea, WorldBounds};
pub use debris::Debris;
pub use world::World;
