//! Battle engine for WARHOST.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate, and
//! produces `BattleSnapshot`s for external consumers. Completely headless
//! (no timer, no I/O), enabling deterministic testing.

pub mod engine;
pub mod event_bus;
pub mod roster;
pub mod systems;

pub use engine::{BattleConfig, BattleEngine};
pub use event_bus::{EventBus, ListenerToken};
pub use warhost_core as core;
