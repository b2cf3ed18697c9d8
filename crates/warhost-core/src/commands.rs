//! Host commands sent to the battle engine.
//!
//! Hosts may call the engine's methods directly, or transport a serialized
//! `BattleCommand` and hand it to `apply` — both take effect synchronously.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Position, UnitId};

/// Minimal unit specification supplied at creation time.
///
/// Derived fields (attack range, cooldown, march speed, empty buff list)
/// are filled deterministically from the type table; `max_troops` is fixed
/// to the initial troop count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitSpec {
    pub id: UnitId,
    pub name: String,
    pub general: String,
    pub unit_type: UnitType,
    pub nation: String,
    pub position: Position,
    pub troops: u32,
    pub morale: f64,
    pub training: f64,
    pub leadership: f64,
    pub strength: f64,
    pub intelligence: f64,
}

impl UnitSpec {
    /// Convenience constructor with middling attributes and full morale.
    pub fn new(
        id: UnitId,
        name: impl Into<String>,
        unit_type: UnitType,
        nation: impl Into<String>,
        position: Position,
        troops: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            general: String::new(),
            unit_type,
            nation: nation.into(),
            position,
            troops,
            morale: 100.0,
            training: 50.0,
            leadership: 50.0,
            strength: 50.0,
            intelligence: 50.0,
        }
    }
}

/// All possible host actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BattleCommand {
    // --- Unit management ---
    AddUnit { spec: UnitSpec },
    RemoveUnit { unit: UnitId },

    // --- Orders ---
    MoveUnit { unit: UnitId, target: Position },
    AttackTarget { unit: UnitId, target: UnitId },
    SetFormation { unit: UnitId, formation: Formation },
    SetStance { unit: UnitId, stance: Stance },

    // --- Battle control ---
    /// Begin the battle (Preparation -> Battle).
    Start,
    /// Halt time advancement without leaving the Battle phase.
    Pause,
    /// Resume time advancement after a pause.
    Resume,
    /// Halt ticking permanently, in any phase.
    Stop,
}
