//! Combat resolution: static multiplier tables and the pure damage function.
//!
//! `resolve_damage` is total and deterministic: any two well-formed
//! combatant snapshots produce a finite, strictly positive value. Edge-case
//! inputs (zero troops, zero stats) are floored rather than rejected.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;

/// Derived per-type defaults filled in at unit creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TypeProfile {
    pub attack_range: f64,
    pub cooldown_secs: f64,
    pub move_speed: f64,
    /// Projectile launched by ranged-capable types; `None` for melee.
    pub projectile: Option<ProjectileKind>,
}

/// Look up the derived defaults for a unit type.
pub fn type_profile(unit_type: UnitType) -> TypeProfile {
    match unit_type {
        UnitType::MeleeInfantry => TypeProfile {
            attack_range: MELEE_INFANTRY_RANGE,
            cooldown_secs: MELEE_INFANTRY_COOLDOWN,
            move_speed: MELEE_INFANTRY_SPEED,
            projectile: None,
        },
        UnitType::RangedInfantry => TypeProfile {
            attack_range: RANGED_INFANTRY_RANGE,
            cooldown_secs: RANGED_INFANTRY_COOLDOWN,
            move_speed: RANGED_INFANTRY_SPEED,
            projectile: Some(ProjectileKind::Arrow),
        },
        UnitType::Cavalry => TypeProfile {
            attack_range: CAVALRY_RANGE,
            cooldown_secs: CAVALRY_COOLDOWN,
            move_speed: CAVALRY_SPEED,
            projectile: None,
        },
        UnitType::Siege => TypeProfile {
            attack_range: SIEGE_RANGE,
            cooldown_secs: SIEGE_COOLDOWN,
            move_speed: SIEGE_SPEED,
            projectile: Some(ProjectileKind::Stone),
        },
        UnitType::Caster => TypeProfile {
            attack_range: CASTER_RANGE,
            cooldown_secs: CASTER_COOLDOWN,
            move_speed: CASTER_SPEED,
            projectile: Some(ProjectileKind::Bolt),
        },
    }
}

/// Travel speed for a projectile kind (m/s).
pub fn projectile_speed(kind: ProjectileKind) -> f64 {
    match kind {
        ProjectileKind::Arrow => ARROW_SPEED,
        ProjectileKind::Stone => STONE_SPEED,
        ProjectileKind::Bolt => BOLT_SPEED,
    }
}

/// Type-advantage multiplier for (attacker type, defender type).
///
/// Encodes the counter relationships: melee infantry beats ranged
/// infantry, cavalry strongly beats ranged infantry and siege, cavalry
/// beats melee infantry. Every other matchup is neutral in both directions.
pub fn type_advantage(attacker: UnitType, defender: UnitType) -> f64 {
    use UnitType::*;
    match (attacker, defender) {
        (MeleeInfantry, RangedInfantry) => MELEE_VS_RANGED,
        (Cavalry, RangedInfantry) => CAVALRY_VS_RANGED,
        (RangedInfantry, Cavalry) => RANGED_VS_CAVALRY,
        (Cavalry, MeleeInfantry) => CAVALRY_VS_MELEE,
        (Cavalry, Siege) => CAVALRY_VS_SIEGE,
        (Siege, Cavalry) => SIEGE_VS_CAVALRY,
        _ => NEUTRAL_MATCHUP,
    }
}

/// Offensive multiplier for an attacker's formation.
pub fn formation_attack(formation: Formation) -> f64 {
    match formation {
        Formation::Line => LINE_ATTACK,
        Formation::Wedge => WEDGE_ATTACK,
        Formation::Square => SQUARE_ATTACK,
        Formation::Skirmish => SKIRMISH_ATTACK,
    }
}

/// Received-damage multiplier for a defender's formation (lower = tougher).
pub fn formation_defense(formation: Formation) -> f64 {
    match formation {
        Formation::Line => LINE_DEFENSE,
        Formation::Wedge => WEDGE_DEFENSE,
        Formation::Square => SQUARE_DEFENSE,
        Formation::Skirmish => SKIRMISH_DEFENSE,
    }
}

/// Offensive multiplier for an attacker's stance.
pub fn stance_attack(stance: Stance) -> f64 {
    match stance {
        Stance::Aggressive => AGGRESSIVE_ATTACK,
        Stance::Balanced => BALANCED_ATTACK,
        Stance::Defensive => DEFENSIVE_ATTACK,
    }
}

/// Received-damage multiplier for a defender's stance.
pub fn stance_defense(stance: Stance) -> f64 {
    match stance {
        Stance::Aggressive => AGGRESSIVE_DEFENSE,
        Stance::Balanced => BALANCED_DEFENSE,
        Stance::Defensive => DEFENSIVE_DEFENSE,
    }
}

/// Snapshot of one side of a damage resolution.
///
/// Built from live components for melee strikes, or frozen at launch time
/// inside a `ProjectileState` for ranged attacks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Combatant {
    pub unit_type: UnitType,
    pub troops: u32,
    pub morale: f64,
    pub training: f64,
    pub leadership: f64,
    pub strength: f64,
    pub intelligence: f64,
    pub formation: Formation,
    pub stance: Stance,
    /// Aggregated status-effect multiplier on outgoing damage.
    pub effect_attack_mult: f64,
    /// Aggregated status-effect multiplier on received damage.
    pub effect_defense_mult: f64,
}

impl Default for Combatant {
    fn default() -> Self {
        Self {
            unit_type: UnitType::default(),
            troops: 100,
            morale: MORALE_MAX,
            training: 50.0,
            leadership: 50.0,
            strength: 50.0,
            intelligence: 50.0,
            formation: Formation::default(),
            stance: Stance::default(),
            effect_attack_mult: 1.0,
            effect_defense_mult: 1.0,
        }
    }
}

/// Compute the damage one resolution deals from `attacker` to `defender`.
///
/// Composition, in order: base power (strength × troops × training), morale
/// factor, type-advantage multiplier, attacker formation and stance
/// offense, then defender-side mitigation (formation/stance defense,
/// leadership + intelligence). Strictly increasing in attacker strength,
/// troop count, and morale; always finite and positive.
pub fn resolve_damage(attacker: &Combatant, defender: &Combatant) -> f64 {
    let strength = attacker.strength.max(STRENGTH_FLOOR);
    let base_power = strength
        * (1.0 + attacker.troops as f64 * TROOP_POWER_WEIGHT)
        * (1.0 + attacker.training.max(0.0) * TRAINING_POWER_WEIGHT);

    let morale = attacker.morale.clamp(0.0, MORALE_MAX);
    let morale_factor = MORALE_FACTOR_FLOOR + (1.0 - MORALE_FACTOR_FLOOR) * morale / MORALE_MAX;

    let offense = base_power
        * morale_factor
        * type_advantage(attacker.unit_type, defender.unit_type)
        * formation_attack(attacker.formation)
        * stance_attack(attacker.stance)
        * attacker.effect_attack_mult.max(0.05);

    let mind = defender.leadership.max(0.0) + defender.intelligence.max(0.0);
    let mitigation = formation_defense(defender.formation)
        * stance_defense(defender.stance)
        * defender.effect_defense_mult.max(0.05)
        / (1.0 + mind * MIND_MITIGATION_WEIGHT);

    offense * mitigation
}
