//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Unit category. Drives the type-advantage matrix and derived defaults
/// (attack range, cooldown, projectile kind).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    #[default]
    MeleeInfantry,
    RangedInfantry,
    Cavalry,
    Siege,
    Caster,
}

impl UnitType {
    /// Whether this type resolves attacks by launching a projectile
    /// instead of striking in melee.
    pub fn is_ranged(&self) -> bool {
        matches!(self, UnitType::RangedInfantry | UnitType::Siege | UnitType::Caster)
    }
}

/// Tactical arrangement of a unit's troops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formation {
    #[default]
    Line,
    /// Offensive specialist: highest attack multiplier.
    Wedge,
    /// Defensive specialist: lowest received-damage multiplier.
    Square,
    /// Loose order, favored by ranged troops.
    Skirmish,
}

/// Combat posture, independent of formation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stance {
    Aggressive,
    #[default]
    Balanced,
    Defensive,
}

/// Unit lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitState {
    #[default]
    Idle,
    Moving,
    Fighting,
    Retreating,
    Dead,
}

/// Battle phase (top-level state). Transitions are monotonic:
/// Preparation -> Battle -> Ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePhase {
    #[default]
    Preparation,
    Battle,
    Ended,
}

/// Terrain category of the battlefield. Carried on the snapshot for
/// collaborators; the core applies no terrain modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terrain {
    #[default]
    Plains,
    Forest,
    Hills,
    Desert,
    Swamp,
}

/// Visual/weapon tag for an in-flight projectile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    #[default]
    Arrow,
    Stone,
    Bolt,
}

/// Category of a timed buff/debuff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Morale broke: outgoing damage reduced until the effect expires.
    Shaken,
    /// Generic attack buff applied by a host/scenario.
    Inspired,
    /// Generic defense buff applied by a host/scenario.
    Shielded,
}
