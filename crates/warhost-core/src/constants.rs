//! Simulation constants and tuning parameters.
//!
//! The damage-model coefficients are only constrained by relative
//! inequalities (formation/stance/type orderings); the concrete values here
//! were chosen to satisfy those orderings with comfortable margin.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Movement ---

/// Distance at which a moving unit is considered to have arrived (meters).
pub const ARRIVAL_TOLERANCE: f64 = 1.0;

// --- Unit type defaults: attack range (meters) ---

pub const MELEE_INFANTRY_RANGE: f64 = 15.0;
pub const RANGED_INFANTRY_RANGE: f64 = 120.0;
pub const CAVALRY_RANGE: f64 = 15.0;
pub const SIEGE_RANGE: f64 = 250.0;
pub const CASTER_RANGE: f64 = 150.0;

// --- Unit type defaults: attack cooldown (seconds) ---

pub const MELEE_INFANTRY_COOLDOWN: f64 = 2.0;
pub const RANGED_INFANTRY_COOLDOWN: f64 = 3.0;
pub const CAVALRY_COOLDOWN: f64 = 1.5;
pub const SIEGE_COOLDOWN: f64 = 6.0;
pub const CASTER_COOLDOWN: f64 = 4.0;

// --- Unit type defaults: march speed (m/s) ---

pub const MELEE_INFANTRY_SPEED: f64 = 1.5;
pub const RANGED_INFANTRY_SPEED: f64 = 1.4;
pub const CAVALRY_SPEED: f64 = 4.0;
pub const SIEGE_SPEED: f64 = 0.6;
pub const CASTER_SPEED: f64 = 1.2;

// --- Projectiles: travel speed per kind (m/s) ---

pub const ARROW_SPEED: f64 = 40.0;
pub const STONE_SPEED: f64 = 25.0;
pub const BOLT_SPEED: f64 = 30.0;

// --- Damage model ---

/// Minimum effective strength fed into the base-power term.
pub const STRENGTH_FLOOR: f64 = 1.0;

/// Base-power contribution per troop.
pub const TROOP_POWER_WEIGHT: f64 = 0.02;

/// Base-power contribution per point of training.
pub const TRAINING_POWER_WEIGHT: f64 = 0.005;

/// Morale factor at zero morale. A fully broken unit still deals this
/// fraction of its base output; the factor rises linearly to 1.0 at
/// maximum morale.
pub const MORALE_FACTOR_FLOOR: f64 = 0.3;

/// Defender mitigation weight per point of leadership + intelligence.
/// Mitigation is `1 / (1 + (lea + int) * weight)` — always in (0, 1].
pub const MIND_MITIGATION_WEIGHT: f64 = 0.002;

// --- Type-advantage matrix (attacker-type vs defender-type multiplier) ---

pub const MELEE_VS_RANGED: f64 = 1.3;
pub const CAVALRY_VS_RANGED: f64 = 1.6;
pub const RANGED_VS_CAVALRY: f64 = 0.7;
pub const CAVALRY_VS_MELEE: f64 = 1.2;
pub const CAVALRY_VS_SIEGE: f64 = 1.5;
pub const SIEGE_VS_CAVALRY: f64 = 0.8;
pub const NEUTRAL_MATCHUP: f64 = 1.0;

// --- Formation multipliers ---

/// Offensive multiplier by attacker formation.
pub const WEDGE_ATTACK: f64 = 1.3;
pub const LINE_ATTACK: f64 = 1.1;
pub const SQUARE_ATTACK: f64 = 0.85;
pub const SKIRMISH_ATTACK: f64 = 1.0;

/// Received-damage multiplier by defender formation (lower = tougher).
pub const WEDGE_DEFENSE: f64 = 0.95;
pub const LINE_DEFENSE: f64 = 0.9;
pub const SQUARE_DEFENSE: f64 = 0.7;
pub const SKIRMISH_DEFENSE: f64 = 1.05;

// --- Stance multipliers ---

pub const AGGRESSIVE_ATTACK: f64 = 1.25;
pub const BALANCED_ATTACK: f64 = 1.0;
pub const DEFENSIVE_ATTACK: f64 = 0.8;

/// Received-damage multiplier by defender stance.
pub const AGGRESSIVE_DEFENSE: f64 = 1.15;
pub const BALANCED_DEFENSE: f64 = 1.0;
pub const DEFENSIVE_DEFENSE: f64 = 0.85;

// --- Casualties ---

/// Hit points per troop: resolver damage divided by this yields casualties.
pub const HP_PER_TROOP: f64 = 10.0;

// --- Morale ---

pub const MORALE_MAX: f64 = 100.0;

/// Below this value a living unit breaks and starts retreating.
pub const MORALE_BREAK_THRESHOLD: f64 = 25.0;

/// A retreating unit that recovers above this value rallies back to Idle.
pub const MORALE_RALLY_THRESHOLD: f64 = 40.0;

/// Morale recovered per second while not fighting.
pub const MORALE_RECOVERY_PER_SEC: f64 = 1.0;

/// Morale lost per unit of casualty fraction in a single hit.
/// Losing 10% of current troops costs 6 morale.
pub const MORALE_CASUALTY_WEIGHT: f64 = 60.0;

// --- Status effects ---

/// Duration of the Shaken debuff applied on morale break (seconds).
pub const SHAKEN_DURATION_SECS: f64 = 10.0;

/// Outgoing-damage multiplier while Shaken.
pub const SHAKEN_ATTACK_MULT: f64 = 0.7;

// --- Event log ---

/// Default capacity of the bounded event log (oldest evicted first).
pub const EVENT_LOG_CAPACITY: usize = 256;
