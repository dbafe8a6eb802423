//! Simulation module
//!
//! All gameplay logic lives here. This module has no rendering or platform
//! dependencies:
//! - One tick per displayed frame
//! - Time enters only as an explicit `now_ms` argument
//! - Input is read from the latch, never from events

pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use state::{Enemy, Facing, GamePhase, GameState, Platform, Player, Projectile};
pub use tick::{TickEvent, reset, tick};
