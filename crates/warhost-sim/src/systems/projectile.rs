//! Projectile system.
//!
//! Advances every in-flight projectile by one tick. On completion the
//! target is re-fetched (it may have moved or died since launch): a living
//! target takes resolver damage from the frozen attacker snapshot, a dead
//! or removed target yields a ProjectileMiss event. Resolved projectiles
//! are despawned via a pre-allocated buffer.

use std::collections::HashMap;

use hecs::{Entity, World};

use warhost_core::combat::resolve_damage;
use warhost_core::components::ProjectileState;
use warhost_core::constants::DT;
use warhost_core::events::BattleEventKind;
use warhost_core::types::{SimTime, UnitId};

use crate::event_bus::EventBus;
use crate::roster;
use crate::systems::attack::apply_hit;

pub fn run(
    world: &mut World,
    index: &HashMap<UnitId, Entity>,
    bus: &mut EventBus,
    time: &SimTime,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let mut impacts: Vec<(Entity, ProjectileState)> = Vec::new();
    for (entity, projectile) in world.query_mut::<&mut ProjectileState>() {
        projectile.elapsed_secs += DT;
        if projectile.elapsed_secs >= projectile.duration_secs {
            impacts.push((entity, projectile.clone()));
        }
    }
    // Launch order, not world order, decides resolution order.
    impacts.sort_by_key(|(_, p)| p.id);

    for (entity, projectile) in impacts {
        despawn_buffer.push(entity);

        let target_entity = index.get(&projectile.target).copied();
        let live_target = target_entity.filter(|&e| roster::is_alive(world, e));

        match live_target {
            Some(target_entity) => {
                if let Some(defender) = roster::combatant_of(world, target_entity) {
                    let damage = resolve_damage(&projectile.attacker, &defender);
                    apply_hit(
                        world,
                        bus,
                        time,
                        projectile.attacker_id,
                        target_entity,
                        damage,
                        true,
                    );
                }
            }
            None => {
                bus.publish(
                    time.tick,
                    time.elapsed_secs,
                    BattleEventKind::ProjectileMiss {
                        projectile: projectile.id,
                        target: projectile.target,
                    },
                );
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
