//! Morale and status derivation system.
//!
//! Runs after damage has been applied for the tick: expires timed
//! buffs/debuffs, recovers morale for units not in melee, breaks units
//! whose morale fell below the threshold (Retreating + Shaken debuff),
//! and rallies retreating units that recovered.

use hecs::World;

use warhost_core::components::{CombatStats, Movement, StatusEffect, StatusEffects, Tactics, UnitInfo};
use warhost_core::constants::*;
use warhost_core::enums::{EffectKind, UnitState};
use warhost_core::events::BattleEventKind;
use warhost_core::types::{SimTime, UnitId};

use crate::event_bus::EventBus;

pub fn run(world: &mut World, bus: &mut EventBus, time: &SimTime) {
    let mut breaks: Vec<(UnitId, f64)> = Vec::new();
    let mut rallies: Vec<UnitId> = Vec::new();

    for (_entity, (info, stats, tactics, movement, effects)) in world.query_mut::<(
        &UnitInfo,
        &mut CombatStats,
        &mut Tactics,
        &mut Movement,
        &mut StatusEffects,
    )>() {
        if tactics.state == UnitState::Dead {
            continue;
        }

        effects.effects.retain(|e| e.expires_at_tick > time.tick);

        if tactics.state != UnitState::Fighting {
            stats.morale = (stats.morale + MORALE_RECOVERY_PER_SEC * DT).min(MORALE_MAX);
        }

        if stats.morale < MORALE_BREAK_THRESHOLD && tactics.state != UnitState::Retreating {
            tactics.state = UnitState::Retreating;
            movement.target_position = None;
            effects.effects.push(StatusEffect {
                kind: EffectKind::Shaken,
                attack_mult: SHAKEN_ATTACK_MULT,
                defense_mult: 1.0,
                expires_at_tick: time.tick + (SHAKEN_DURATION_SECS / DT) as u64,
            });
            breaks.push((info.id, stats.morale));
        } else if tactics.state == UnitState::Retreating && stats.morale >= MORALE_RALLY_THRESHOLD {
            tactics.state = UnitState::Idle;
            rallies.push(info.id);
        }
    }

    breaks.sort_by_key(|(id, _)| *id);
    rallies.sort();

    for (unit, morale) in breaks {
        bus.publish(
            time.tick,
            time.elapsed_secs,
            BattleEventKind::MoraleBreak { unit, morale },
        );
    }
    for unit in rallies {
        bus.publish(
            time.tick,
            time.elapsed_secs,
            BattleEventKind::UnitRallied { unit },
        );
    }
}
