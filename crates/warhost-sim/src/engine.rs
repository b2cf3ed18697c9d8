//! Battle engine — the core of the simulation.
//!
//! `BattleEngine` owns the hecs ECS world, the unit registry index, and
//! the event bus. Commands are synchronous methods that take effect
//! immediately; `tick` advances the simulation by exactly one fixed step
//! and is driven by an external timer (or a test loop), never by the
//! engine itself.
//!
//! Expected misuse — orders against dead or unknown units, self-targeted
//! attacks, duplicate ids, phase operators called in the wrong phase —
//! is rejected silently: the method returns `false` and no state changes.

use std::collections::HashMap;

use hecs::{Entity, World};

use warhost_core::commands::{BattleCommand, UnitSpec};
use warhost_core::components::{Movement, StatusEffect, StatusEffects, Tactics, UnitInfo, Weapon};
use warhost_core::constants::EVENT_LOG_CAPACITY;
use warhost_core::enums::{BattlePhase, Formation, Stance, Terrain, UnitState};
use warhost_core::events::{BattleEvent, BattleEventKind, EventTag};
use warhost_core::state::{BattleSnapshot, ProjectileView, UnitView};
use warhost_core::types::{Position, SimTime, UnitId};

use crate::event_bus::{EventBus, ListenerToken};
use crate::roster;
use crate::systems;

/// Configuration for constructing a battle.
#[derive(Debug, Clone)]
pub struct BattleConfig {
    pub battle_id: String,
    pub terrain: Terrain,
    pub attacker_nation: String,
    pub defender_nation: String,
    /// Capacity of the bounded event log.
    pub event_log_capacity: usize,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            battle_id: "battle-1".into(),
            terrain: Terrain::default(),
            attacker_nation: "attacker".into(),
            defender_nation: "defender".into(),
            event_log_capacity: EVENT_LOG_CAPACITY,
        }
    }
}

/// The battle engine. Owns the ECS world and all battle state.
pub struct BattleEngine {
    world: World,
    /// Authoritative unit registry index: id -> entity.
    units: HashMap<UnitId, Entity>,
    time: SimTime,
    phase: BattlePhase,
    /// Pause flag: time advances only while true (and phase is Battle).
    running: bool,
    /// Terminal stop: once set, ticking never resumes.
    stopped: bool,
    config: BattleConfig,
    bus: EventBus,
    next_projectile_id: u32,
    despawn_buffer: Vec<Entity>,
}

impl BattleEngine {
    /// Create a new engine in the Preparation phase.
    pub fn new(config: BattleConfig) -> Self {
        let bus = EventBus::new(config.event_log_capacity);
        Self {
            world: World::new(),
            units: HashMap::new(),
            time: SimTime::default(),
            phase: BattlePhase::default(),
            running: false,
            stopped: false,
            config,
            bus,
            next_projectile_id: 0,
            despawn_buffer: Vec::new(),
        }
    }

    // --- Unit management ---

    /// Insert a new unit, filling derived defaults from its type.
    /// No-op on a duplicate id or a troopless spec.
    pub fn add_unit(&mut self, spec: UnitSpec) -> bool {
        roster::spawn_unit(&mut self.world, &mut self.units, spec)
    }

    /// Delete a unit from the registry. Projectiles already in flight
    /// toward it resolve as misses.
    pub fn remove_unit(&mut self, id: UnitId) -> bool {
        match self.units.remove(&id) {
            Some(entity) => {
                let _ = self.world.despawn(entity);
                true
            }
            None => false,
        }
    }

    // --- Orders ---

    /// Order a living unit to march to `target`. Takes effect immediately:
    /// the unit's state is `Moving` when this returns.
    pub fn move_unit(&mut self, id: UnitId, target: Position) -> bool {
        let entity = match self.living_entity(id) {
            Some(e) => e,
            None => return false,
        };

        let heading = self
            .world
            .get::<&Position>(entity)
            .map(|pos| pos.bearing_to(&target))
            .unwrap_or(0.0);
        if let Ok(mut movement) = self.world.get::<&mut Movement>(entity) {
            movement.target_position = Some(target);
            movement.heading = heading;
        }
        if let Ok(mut tactics) = self.world.get::<&mut Tactics>(entity) {
            tactics.state = UnitState::Moving;
        }
        true
    }

    /// Order a living unit against a living target. The order is held
    /// until replaced, even if the target later dies or leaves range.
    pub fn attack_target(&mut self, id: UnitId, target: UnitId) -> bool {
        if id == target {
            return false;
        }
        let entity = match self.living_entity(id) {
            Some(e) => e,
            None => return false,
        };
        if self.living_entity(target).is_none() {
            return false;
        }

        if let Ok(mut weapon) = self.world.get::<&mut Weapon>(entity) {
            weapon.target = Some(target);
        }
        true
    }

    /// Change a living unit's formation.
    pub fn set_formation(&mut self, id: UnitId, formation: Formation) -> bool {
        match self.living_entity(id) {
            Some(entity) => {
                if let Ok(mut tactics) = self.world.get::<&mut Tactics>(entity) {
                    tactics.formation = formation;
                }
                true
            }
            None => false,
        }
    }

    /// Change a living unit's stance.
    pub fn set_stance(&mut self, id: UnitId, stance: Stance) -> bool {
        match self.living_entity(id) {
            Some(entity) => {
                if let Ok(mut tactics) = self.world.get::<&mut Tactics>(entity) {
                    tactics.stance = stance;
                }
                true
            }
            None => false,
        }
    }

    /// Attach a timed buff/debuff to a living unit. The morale system
    /// removes it once `expires_at_tick` has passed.
    pub fn add_effect(&mut self, id: UnitId, effect: StatusEffect) -> bool {
        match self.living_entity(id) {
            Some(entity) => {
                if let Ok(mut effects) = self.world.get::<&mut StatusEffects>(entity) {
                    effects.effects.push(effect);
                }
                true
            }
            None => false,
        }
    }

    // --- Battle control ---

    /// Begin the battle: Preparation -> Battle, ticking enabled.
    pub fn start(&mut self) -> bool {
        if self.phase == BattlePhase::Preparation && !self.stopped {
            self.phase = BattlePhase::Battle;
            self.running = true;
            true
        } else {
            false
        }
    }

    /// Halt time advancement without leaving the Battle phase.
    pub fn pause(&mut self) -> bool {
        if self.phase == BattlePhase::Battle && self.running && !self.stopped {
            self.running = false;
            true
        } else {
            false
        }
    }

    /// Resume time advancement after a pause.
    pub fn resume(&mut self) -> bool {
        if self.phase == BattlePhase::Battle && !self.running && !self.stopped {
            self.running = true;
            true
        } else {
            false
        }
    }

    /// Halt ticking permanently, in any phase. Idempotent.
    pub fn stop(&mut self) -> bool {
        if self.stopped {
            false
        } else {
            self.stopped = true;
            true
        }
    }

    /// Dispatch a transported command to the matching method.
    pub fn apply(&mut self, command: BattleCommand) -> bool {
        match command {
            BattleCommand::AddUnit { spec } => self.add_unit(spec),
            BattleCommand::RemoveUnit { unit } => self.remove_unit(unit),
            BattleCommand::MoveUnit { unit, target } => self.move_unit(unit, target),
            BattleCommand::AttackTarget { unit, target } => self.attack_target(unit, target),
            BattleCommand::SetFormation { unit, formation } => self.set_formation(unit, formation),
            BattleCommand::SetStance { unit, stance } => self.set_stance(unit, stance),
            BattleCommand::Start => self.start(),
            BattleCommand::Pause => self.pause(),
            BattleCommand::Resume => self.resume(),
            BattleCommand::Stop => self.stop(),
        }
    }

    // --- Ticking ---

    /// Advance the simulation by one fixed step and return the resulting
    /// snapshot. A no-op (beyond snapshot building) unless the phase is
    /// Battle, the engine is running, and `stop` has not been called.
    pub fn tick(&mut self) -> BattleSnapshot {
        if !self.stopped && self.phase == BattlePhase::Battle && self.running {
            self.run_systems();
            // The ending tick freezes the clock at the moment of victory.
            if self.phase == BattlePhase::Battle {
                self.time.advance();
            }
        }
        self.state()
    }

    // --- Queries ---

    /// Current battle snapshot (copy; safe to hand to observers).
    pub fn state(&self) -> BattleSnapshot {
        systems::snapshot::build_snapshot(&self.world, &self.config, &self.time, self.phase)
    }

    /// Read-only view of one unit, if registered (dead units included).
    pub fn unit(&self, id: UnitId) -> Option<UnitView> {
        let entity = self.units.get(&id)?;
        systems::snapshot::unit_view(&self.world, *entity)
    }

    /// Read-only views of all registered units, ordered by id.
    pub fn units(&self) -> Vec<UnitView> {
        let mut ids: Vec<UnitId> = self.units.keys().copied().collect();
        ids.sort();
        ids.into_iter().filter_map(|id| self.unit(id)).collect()
    }

    /// Read-only views of all in-flight projectiles.
    pub fn projectiles(&self) -> Vec<ProjectileView> {
        self.state().projectiles
    }

    /// Snapshot of the bounded event log, oldest first.
    pub fn events(&self) -> Vec<BattleEvent> {
        self.bus.events()
    }

    /// Register an event listener. See `EventBus::on`.
    pub fn on(
        &mut self,
        tag: EventTag,
        callback: impl FnMut(&BattleEvent) + 'static,
    ) -> ListenerToken {
        self.bus.on(tag, callback)
    }

    /// Unregister an event listener. Idempotent.
    pub fn off(&mut self, token: ListenerToken) {
        self.bus.off(token);
    }

    /// Current battle phase.
    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Whether time is currently advancing.
    pub fn is_running(&self) -> bool {
        self.running && !self.stopped && self.phase == BattlePhase::Battle
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    // --- Internals ---

    /// Entity of a registered, living unit.
    fn living_entity(&self, id: UnitId) -> Option<Entity> {
        let entity = *self.units.get(&id)?;
        roster::is_alive(&self.world, entity).then_some(entity)
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Movement toward ordered positions
        systems::movement::run(&mut self.world);
        // 2. Attack resolution (melee strikes, projectile launches)
        systems::attack::run(
            &mut self.world,
            &self.units,
            &mut self.bus,
            &self.time,
            &mut self.next_projectile_id,
        );
        // 3. Projectile flight and impacts
        systems::projectile::run(
            &mut self.world,
            &self.units,
            &mut self.bus,
            &self.time,
            &mut self.despawn_buffer,
        );
        // 4. Morale drift, breaks/rallies, status-effect expiry
        systems::morale::run(&mut self.world, &mut self.bus, &self.time);
        // 5. Win condition
        self.check_victory();
    }

    /// End the battle once either side is out of living units.
    fn check_victory(&mut self) {
        if self.units.is_empty() {
            return;
        }

        let mut attacker_living = 0u32;
        let mut defender_living = 0u32;
        for &entity in self.units.values() {
            if !roster::is_alive(&self.world, entity) {
                continue;
            }
            if let Ok(info) = self.world.get::<&UnitInfo>(entity) {
                if info.nation == self.config.attacker_nation {
                    attacker_living += 1;
                } else if info.nation == self.config.defender_nation {
                    defender_living += 1;
                }
            }
        }

        if attacker_living == 0 || defender_living == 0 {
            let victor = if attacker_living > 0 {
                Some(self.config.attacker_nation.clone())
            } else if defender_living > 0 {
                Some(self.config.defender_nation.clone())
            } else {
                None
            };
            self.phase = BattlePhase::Ended;
            self.running = false;
            self.bus.publish(
                self.time.tick,
                self.time.elapsed_secs,
                BattleEventKind::BattleEnded { victor },
            );
        }
    }
}
