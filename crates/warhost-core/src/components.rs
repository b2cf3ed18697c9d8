//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::combat::Combatant;
use crate::enums::*;
use crate::types::{Position, UnitId};

/// Identity of a battle unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitInfo {
    pub id: UnitId,
    /// Display name of the squad.
    pub name: String,
    /// Name of the commanding general.
    pub general: String,
    /// Nation/team affiliation.
    pub nation: String,
    pub unit_type: UnitType,
}

/// Numeric combat attributes of a unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatStats {
    /// Current troop count. Clamped to [0, max_troops].
    pub troops: u32,
    pub max_troops: u32,
    /// Morale in [0, 100].
    pub morale: f64,
    pub training: f64,
    pub leadership: f64,
    pub strength: f64,
    pub intelligence: f64,
}

/// Tactical posture and lifecycle state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tactics {
    pub formation: Formation,
    pub stance: Stance,
    pub state: UnitState,
}

/// Movement parameters and the active move order (if any).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Movement {
    /// March speed (m/s).
    pub speed: f64,
    /// Facing in radians (0 = North, clockwise).
    pub heading: f64,
    /// Destination of the active move order. Cleared on arrival and on
    /// transition to Fighting or Dead.
    pub target_position: Option<Position>,
}

/// Weapon bookkeeping and the active attack order (if any).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weapon {
    /// Maximum engagement range (meters), derived from the unit type.
    pub attack_range: f64,
    /// Seconds between attacks, derived from the unit type.
    pub cooldown_secs: f64,
    /// Tick of the most recent attack. `None` until the first swing.
    pub last_attack_tick: Option<u64>,
    /// Unit this attacker has been ordered against. Held until the host
    /// issues a new order, even if the target dies or leaves range.
    pub target: Option<UnitId>,
}

/// A timed buff or debuff.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusEffect {
    pub kind: EffectKind,
    /// Multiplier on outgoing damage while active.
    pub attack_mult: f64,
    /// Multiplier on received damage while active.
    pub defense_mult: f64,
    /// Tick after which the effect is removed.
    pub expires_at_tick: u64,
}

/// Ordered collection of a unit's active buffs/debuffs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusEffects {
    pub effects: Vec<StatusEffect>,
}

impl StatusEffects {
    /// Product of active attack multipliers, floored to stay positive.
    pub fn attack_mult(&self) -> f64 {
        self.effects
            .iter()
            .map(|e| e.attack_mult)
            .product::<f64>()
            .max(0.05)
    }

    /// Product of active defense multipliers, floored to stay positive.
    pub fn defense_mult(&self) -> f64 {
        self.effects
            .iter()
            .map(|e| e.defense_mult)
            .product::<f64>()
            .max(0.05)
    }
}

/// An in-flight ranged attack.
///
/// Carries a frozen attacker snapshot so damage resolves from the state at
/// launch time even if the shooter has since moved, fought, or died.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileState {
    pub id: u32,
    pub kind: ProjectileKind,
    pub origin: Position,
    pub destination: Position,
    /// Seconds in flight so far.
    pub elapsed_secs: f64,
    /// Total travel time (distance / kind speed).
    pub duration_secs: f64,
    /// Attacker snapshot taken at launch.
    pub attacker: Combatant,
    pub attacker_id: UnitId,
    pub target: UnitId,
}
