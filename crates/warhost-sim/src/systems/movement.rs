//! Movement system.
//!
//! Each tick, every unit in `Moving` state advances along the straight
//! line to its target by `speed * DT`. On arrival (within tolerance) the
//! target is cleared and the unit reverts to `Idle`; the attack system,
//! which runs next, promotes it to `Fighting` if an in-range attack order
//! is active.

use hecs::World;

use warhost_core::components::{Movement, Tactics};
use warhost_core::constants::{ARRIVAL_TOLERANCE, DT};
use warhost_core::enums::UnitState;
use warhost_core::types::Position;

pub fn run(world: &mut World) {
    for (_entity, (pos, movement, tactics)) in
        world.query_mut::<(&mut Position, &mut Movement, &mut Tactics)>()
    {
        if tactics.state != UnitState::Moving {
            continue;
        }

        let target = match movement.target_position {
            Some(t) => t,
            // Moving with no destination: an order was cleared elsewhere.
            None => {
                tactics.state = UnitState::Idle;
                continue;
            }
        };

        movement.heading = pos.bearing_to(&target);
        *pos = pos.step_toward(&target, movement.speed * DT);

        if pos.range_to(&target) <= ARRIVAL_TOLERANCE {
            *pos = target;
            movement.target_position = None;
            tactics.state = UnitState::Idle;
        }
    }
}
