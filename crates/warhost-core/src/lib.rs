//! Core types and definitions for the WARHOST battle simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, events, snapshots, combat tables, and constants.
//! It has no dependency on any ECS or runtime framework.

pub mod combat;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
