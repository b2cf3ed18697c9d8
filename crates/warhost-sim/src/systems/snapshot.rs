//! Snapshot system: queries the ECS world and builds a complete
//! `BattleSnapshot`. Read-only — it never modifies the world.

use hecs::{Entity, World};

use warhost_core::components::*;
use warhost_core::enums::BattlePhase;
use warhost_core::state::{BattleSnapshot, ProjectileView, UnitView};
use warhost_core::types::{Position, SimTime};

use crate::engine::BattleConfig;

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    config: &BattleConfig,
    time: &SimTime,
    phase: BattlePhase,
) -> BattleSnapshot {
    BattleSnapshot {
        battle_id: config.battle_id.clone(),
        terrain: config.terrain,
        attacker_nation: config.attacker_nation.clone(),
        defender_nation: config.defender_nation.clone(),
        phase,
        time: *time,
        units: build_units(world),
        projectiles: build_projectiles(world),
    }
}

/// Build the view of a single unit entity, if it is one.
pub fn unit_view(world: &World, entity: Entity) -> Option<UnitView> {
    let mut query = world
        .query_one::<(
            &UnitInfo,
            &Position,
            &CombatStats,
            &Tactics,
            &Movement,
            &Weapon,
            &StatusEffects,
        )>(entity)
        .ok()?;
    let (info, pos, stats, tactics, movement, weapon, effects) = query.get()?;

    Some(UnitView {
        id: info.id,
        name: info.name.clone(),
        general: info.general.clone(),
        nation: info.nation.clone(),
        unit_type: info.unit_type,
        position: *pos,
        heading: movement.heading,
        move_speed: movement.speed,
        troops: stats.troops,
        max_troops: stats.max_troops,
        morale: stats.morale,
        training: stats.training,
        leadership: stats.leadership,
        strength: stats.strength,
        intelligence: stats.intelligence,
        formation: tactics.formation,
        stance: tactics.stance,
        state: tactics.state,
        attack_range: weapon.attack_range,
        cooldown_secs: weapon.cooldown_secs,
        target_position: movement.target_position,
        target_unit: weapon.target,
        effects: effects.effects.clone(),
    })
}

fn build_units(world: &World) -> Vec<UnitView> {
    let mut units: Vec<UnitView> = world
        .query::<&UnitInfo>()
        .iter()
        .filter_map(|(entity, _)| unit_view(world, entity))
        .collect();
    units.sort_by_key(|u| u.id);
    units
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<&ProjectileState>()
        .iter()
        .map(|(_, p)| {
            let progress = if p.duration_secs > 0.0 {
                (p.elapsed_secs / p.duration_secs).clamp(0.0, 1.0)
            } else {
                1.0
            };
            ProjectileView {
                id: p.id,
                kind: p.kind,
                origin: p.origin,
                destination: p.destination,
                position: Position::new(
                    p.origin.x + (p.destination.x - p.origin.x) * progress,
                    p.origin.y + (p.destination.y - p.origin.y) * progress,
                ),
                progress,
                target: p.target,
            }
        })
        .collect();
    projectiles.sort_by_key(|p| p.id);
    projectiles
}
