//! Attack resolution system.
//!
//! Each tick, every living attacker holding an attack order is checked:
//! a dead or out-of-range target holds the order (no auto-retargeting),
//! an in-range living target puts the attacker into `Fighting`, and once
//! the cooldown has elapsed one resolution fires — melee types strike
//! through the resolver directly, ranged types launch a projectile at the
//! target's current position.

use std::collections::HashMap;

use hecs::{Entity, World};

use warhost_core::combat::{projectile_speed, resolve_damage, type_profile};
use warhost_core::components::{
    CombatStats, Movement, ProjectileState, StatusEffects, Tactics, UnitInfo, Weapon,
};
use warhost_core::constants::{DT, HP_PER_TROOP, MORALE_CASUALTY_WEIGHT};
use warhost_core::enums::UnitState;
use warhost_core::events::BattleEventKind;
use warhost_core::types::{Position, SimTime, UnitId};

use crate::event_bus::EventBus;
use crate::roster;

pub fn run(
    world: &mut World,
    index: &HashMap<UnitId, Entity>,
    bus: &mut EventBus,
    time: &SimTime,
    next_projectile_id: &mut u32,
) {
    // Collect active orders first; resolution below mutates the world.
    let mut orders: Vec<(UnitId, Entity, UnitId)> = Vec::new();
    for (entity, (info, weapon, tactics, stats)) in
        world.query::<(&UnitInfo, &Weapon, &Tactics, &CombatStats)>().iter()
    {
        // Moving units keep marching; the order fires once they stand still.
        if matches!(
            tactics.state,
            UnitState::Dead | UnitState::Retreating | UnitState::Moving
        ) || stats.troops == 0
        {
            continue;
        }
        if let Some(target) = weapon.target {
            orders.push((info.id, entity, target));
        }
    }
    // World iteration order depends on spawn history; resolve in id order.
    orders.sort_by_key(|(id, _, _)| *id);

    for (attacker_id, attacker_entity, target_id) in orders {
        // The attacker may have been killed by an earlier resolution this tick.
        if !roster::is_alive(world, attacker_entity) {
            continue;
        }

        let target_entity = match index.get(&target_id).copied() {
            Some(e) => e,
            None => {
                demote_from_fighting(world, attacker_entity);
                continue;
            }
        };
        if !roster::is_alive(world, target_entity) {
            // Dead target: hold the order, stop swinging.
            demote_from_fighting(world, attacker_entity);
            continue;
        }

        let attacker_pos = match world.get::<&Position>(attacker_entity) {
            Ok(p) => *p,
            Err(_) => continue,
        };
        let target_pos = match world.get::<&Position>(target_entity) {
            Ok(p) => *p,
            Err(_) => continue,
        };

        let (attack_range, cooldown_secs, last_attack_tick) =
            match world.get::<&Weapon>(attacker_entity) {
                Ok(w) => (w.attack_range, w.cooldown_secs, w.last_attack_tick),
                Err(_) => continue,
            };

        let distance = attacker_pos.range_to(&target_pos);
        if distance > attack_range {
            // Target slipped out of range: hold the order, stop fighting.
            demote_from_fighting(world, attacker_entity);
            continue;
        }

        // Engaged: face the target and hold position.
        if let Ok(mut tactics) = world.get::<&mut Tactics>(attacker_entity) {
            tactics.state = UnitState::Fighting;
        }
        if let Ok(mut movement) = world.get::<&mut Movement>(attacker_entity) {
            movement.heading = attacker_pos.bearing_to(&target_pos);
            movement.target_position = None;
        }

        let ready = match last_attack_tick {
            None => true,
            Some(last) => (time.tick.saturating_sub(last)) as f64 * DT >= cooldown_secs,
        };
        if !ready {
            continue;
        }
        if let Ok(mut weapon) = world.get::<&mut Weapon>(attacker_entity) {
            weapon.last_attack_tick = Some(time.tick);
        }

        let attacker = match roster::combatant_of(world, attacker_entity) {
            Some(c) => c,
            None => continue,
        };

        match type_profile(attacker.unit_type).projectile {
            Some(kind) => {
                // Ranged: launch at the target's current position; damage is
                // deferred to impact with this frozen attacker snapshot.
                let id = *next_projectile_id;
                *next_projectile_id += 1;
                world.spawn((ProjectileState {
                    id,
                    kind,
                    origin: attacker_pos,
                    destination: target_pos,
                    elapsed_secs: 0.0,
                    duration_secs: distance / projectile_speed(kind),
                    attacker,
                    attacker_id,
                    target: target_id,
                },));
            }
            None => {
                let defender = match roster::combatant_of(world, target_entity) {
                    Some(c) => c,
                    None => continue,
                };
                let damage = resolve_damage(&attacker, &defender);
                apply_hit(world, bus, time, attacker_id, target_entity, damage, false);
            }
        }
    }
}

/// Apply one landed resolution to a defender: casualties, morale loss,
/// Damage event, and the death transition at zero troops.
pub(crate) fn apply_hit(
    world: &mut World,
    bus: &mut EventBus,
    time: &SimTime,
    attacker_id: UnitId,
    defender_entity: Entity,
    damage: f64,
    ranged: bool,
) {
    let (defender_id, nation) = match world.get::<&UnitInfo>(defender_entity) {
        Ok(info) => (info.id, info.nation.clone()),
        Err(_) => return,
    };

    let (casualties, dead) = match world.get::<&mut CombatStats>(defender_entity) {
        Ok(mut stats) => {
            let before = stats.troops;
            if before == 0 {
                return;
            }
            let casualties = ((damage / HP_PER_TROOP).ceil() as u32).max(1).min(before);
            stats.troops = before - casualties;
            let fraction = casualties as f64 / before as f64;
            stats.morale = (stats.morale - fraction * MORALE_CASUALTY_WEIGHT).max(0.0);
            (casualties, stats.troops == 0)
        }
        Err(_) => return,
    };

    bus.publish(
        time.tick,
        time.elapsed_secs,
        BattleEventKind::Damage {
            attacker: attacker_id,
            defender: defender_id,
            amount: damage,
            casualties,
            ranged,
        },
    );

    if dead {
        if let Ok(mut tactics) = world.get::<&mut Tactics>(defender_entity) {
            tactics.state = UnitState::Dead;
        }
        if let Ok(mut movement) = world.get::<&mut Movement>(defender_entity) {
            movement.target_position = None;
        }
        if let Ok(mut weapon) = world.get::<&mut Weapon>(defender_entity) {
            weapon.target = None;
        }
        if let Ok(mut effects) = world.get::<&mut StatusEffects>(defender_entity) {
            effects.effects.clear();
        }
        bus.publish(
            time.tick,
            time.elapsed_secs,
            BattleEventKind::UnitDeath {
                unit: defender_id,
                nation,
            },
        );
    }
}

/// Drop back to Idle if the unit was Fighting; other states are kept.
fn demote_from_fighting(world: &mut World, entity: Entity) {
    if let Ok(mut tactics) = world.get::<&mut Tactics>(entity) {
        if tactics.state == UnitState::Fighting {
            tactics.state = UnitState::Idle;
        }
    }
}
