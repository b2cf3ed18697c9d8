//! Domain events emitted by the simulation.
//!
//! Events are immutable once created: delivered synchronously to
//! subscribed listeners and appended to the engine's bounded log.

use serde::{Deserialize, Serialize};

use crate::types::UnitId;

/// Discriminant used to subscribe to one event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTag {
    Damage,
    UnitDeath,
    MoraleBreak,
    UnitRallied,
    ProjectileMiss,
    BattleEnded,
}

/// Type-specific event payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BattleEventKind {
    /// One resolution landed on a defender.
    Damage {
        attacker: UnitId,
        defender: UnitId,
        amount: f64,
        casualties: u32,
        /// True when the hit arrived via projectile.
        ranged: bool,
    },
    /// A unit's troops reached zero.
    UnitDeath { unit: UnitId, nation: String },
    /// Morale fell below the break threshold; the unit is retreating.
    MoraleBreak { unit: UnitId, morale: f64 },
    /// A retreating unit recovered and returned to the line.
    UnitRallied { unit: UnitId },
    /// A projectile arrived after its target died; no damage applied.
    ProjectileMiss { projectile: u32, target: UnitId },
    /// One side ran out of living units.
    BattleEnded {
        /// Winning nation, if either side still has living units.
        victor: Option<String>,
    },
}

impl BattleEventKind {
    /// The subscription tag for this payload.
    pub fn tag(&self) -> EventTag {
        match self {
            BattleEventKind::Damage { .. } => EventTag::Damage,
            BattleEventKind::UnitDeath { .. } => EventTag::UnitDeath,
            BattleEventKind::MoraleBreak { .. } => EventTag::MoraleBreak,
            BattleEventKind::UnitRallied { .. } => EventTag::UnitRallied,
            BattleEventKind::ProjectileMiss { .. } => EventTag::ProjectileMiss,
            BattleEventKind::BattleEnded { .. } => EventTag::BattleEnded,
        }
    }
}

/// An immutable record in the battle's event log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleEvent {
    /// Monotone event id, unique within one engine.
    pub id: u64,
    /// Tick at which the event was emitted.
    pub tick: u64,
    /// Simulated seconds at which the event was emitted.
    pub elapsed_secs: f64,
    pub kind: BattleEventKind,
}
