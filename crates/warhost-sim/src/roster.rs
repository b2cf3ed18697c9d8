//! Unit assembly and lookup helpers for the ECS world.
//!
//! The engine owns a `UnitId -> Entity` index; everything here keeps that
//! index and the world consistent. A unit entity always carries the full
//! component set: `UnitInfo`, `Position`, `CombatStats`, `Tactics`,
//! `Movement`, `Weapon`, `StatusEffects`.

use std::collections::HashMap;

use hecs::{Entity, World};

use warhost_core::combat::{type_profile, Combatant};
use warhost_core::commands::UnitSpec;
use warhost_core::components::{CombatStats, Movement, StatusEffects, Tactics, UnitInfo, Weapon};
use warhost_core::constants::MORALE_MAX;
use warhost_core::enums::{Formation, Stance, UnitState};
use warhost_core::types::UnitId;

/// Spawn a unit from its minimal spec, filling derived defaults from the
/// type table. Returns `false` (no spawn) on a duplicate id or a spec with
/// no troops.
pub fn spawn_unit(world: &mut World, index: &mut HashMap<UnitId, Entity>, spec: UnitSpec) -> bool {
    if index.contains_key(&spec.id) || spec.troops == 0 {
        return false;
    }

    let profile = type_profile(spec.unit_type);
    let entity = world.spawn((
        UnitInfo {
            id: spec.id,
            name: spec.name,
            general: spec.general,
            nation: spec.nation,
            unit_type: spec.unit_type,
        },
        spec.position,
        CombatStats {
            troops: spec.troops,
            max_troops: spec.troops,
            morale: spec.morale.clamp(0.0, MORALE_MAX),
            training: spec.training.max(0.0),
            leadership: spec.leadership.max(0.0),
            strength: spec.strength.max(0.0),
            intelligence: spec.intelligence.max(0.0),
        },
        Tactics {
            formation: Formation::default(),
            stance: Stance::default(),
            state: UnitState::Idle,
        },
        Movement {
            speed: profile.move_speed,
            heading: 0.0,
            target_position: None,
        },
        Weapon {
            attack_range: profile.attack_range,
            cooldown_secs: profile.cooldown_secs,
            last_attack_tick: None,
            target: None,
        },
        StatusEffects::default(),
    ));

    index.insert(spec.id, entity);
    true
}

/// Whether the entity is a living unit (present, not Dead, troops > 0).
pub fn is_alive(world: &World, entity: Entity) -> bool {
    let state_ok = world
        .get::<&Tactics>(entity)
        .map(|t| t.state != UnitState::Dead)
        .unwrap_or(false);
    let troops_ok = world
        .get::<&CombatStats>(entity)
        .map(|s| s.troops > 0)
        .unwrap_or(false);
    state_ok && troops_ok
}

/// Build a resolver snapshot from a unit's live components.
pub fn combatant_of(world: &World, entity: Entity) -> Option<Combatant> {
    let info = world.get::<&UnitInfo>(entity).ok()?;
    let stats = world.get::<&CombatStats>(entity).ok()?;
    let tactics = world.get::<&Tactics>(entity).ok()?;
    let effects = world.get::<&StatusEffects>(entity).ok()?;

    Some(Combatant {
        unit_type: info.unit_type,
        troops: stats.troops,
        morale: stats.morale,
        training: stats.training,
        leadership: stats.leadership,
        strength: stats.strength,
        intelligence: stats.intelligence,
        formation: tactics.formation,
        stance: tactics.stance,
        effect_attack_mult: effects.attack_mult(),
        effect_defense_mult: effects.defense_mult(),
    })
}
