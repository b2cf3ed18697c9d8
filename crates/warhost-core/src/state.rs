//! Battle snapshot — the complete visible state handed to external
//! consumers. Snapshots are copies; mutating one never touches the engine.

use serde::{Deserialize, Serialize};

use crate::components::StatusEffect;
use crate::enums::*;
use crate::types::{Position, SimTime, UnitId};

/// Complete battle state built after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub battle_id: String,
    pub terrain: Terrain,
    pub attacker_nation: String,
    pub defender_nation: String,
    pub phase: BattlePhase,
    pub time: SimTime,
    pub units: Vec<UnitView>,
    pub projectiles: Vec<ProjectileView>,
}

/// One unit as visible to external consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub id: UnitId,
    pub name: String,
    pub general: String,
    pub nation: String,
    pub unit_type: UnitType,
    pub position: Position,
    /// Facing in radians (0 = North, clockwise).
    pub heading: f64,
    pub move_speed: f64,
    pub troops: u32,
    pub max_troops: u32,
    pub morale: f64,
    pub training: f64,
    pub leadership: f64,
    pub strength: f64,
    pub intelligence: f64,
    pub formation: Formation,
    pub stance: Stance,
    pub state: UnitState,
    pub attack_range: f64,
    pub cooldown_secs: f64,
    pub target_position: Option<Position>,
    pub target_unit: Option<UnitId>,
    pub effects: Vec<StatusEffect>,
}

/// One in-flight projectile as visible to external consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub kind: ProjectileKind,
    pub origin: Position,
    pub destination: Position,
    /// Interpolated current position along the flight path.
    pub position: Position,
    /// Flight completion in [0, 1].
    pub progress: f64,
    pub target: UnitId,
}
