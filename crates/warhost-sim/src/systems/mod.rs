//! Systems that operate on the battle world each tick.
//!
//! Systems are plain functions over `&mut World`; they do not own state.
//! The engine runs them in a fixed order: movement, attack resolution,
//! projectiles, morale/status, then the win check.

pub mod attack;
pub mod morale;
pub mod movement;
pub mod projectile;
pub mod snapshot;
