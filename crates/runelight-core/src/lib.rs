//! Runelight Core - Tile-World Simulation Engine
//!
//! A tick-driven simulation of a small tile world: a walled town, gatherable
//! resource nodes, townsfolk on patrol, other adventurers wandering the
//! fields, and monsters roaming the wilds.
//!
//! # Architecture
//!
//! Actors live in an Entity Component System world via `hecs`:
//! - **Entities**: NPCs, wandering adventurers, monsters
//! - **Components**: pure data ([`Mover`](components::Mover), [`Monster`](components::Monster), ...)
//! - **Systems**: per-tick logic that queries and updates components
//!
//! The player is a singleton on the engine, and terrain plus resource nodes
//! live in the [`WorldGrid`](world::WorldGrid). Everything is owned by
//! [`SimulationEngine`](engine::SimulationEngine), which runs the tick in a
//! fixed order and applies player commands between ticks.
//!
//! # Example
//!
//! ```rust,no_run
//! use runelight_core::prelude::*;
//!
//! let mut engine = SimulationEngine::new(SimulationConfig::default());
//! engine.generate(WorldConfig {
//!     seed: Some(7),
//!     ..Default::default()
//! });
//!
//! engine.move_to(Cell::new(30, 30));
//! loop {
//!     engine.update();
//!     for event in engine.drain_events() {
//!         println!("{event}");
//!     }
//! }
//! ```

pub mod commands;
pub mod components;
pub mod config;
pub mod engine;
pub mod events;
pub mod generation;
pub mod interaction;
pub mod persistence;
pub mod systems;
pub mod world;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::config::{SimulationConfig, WorldConfig};
    pub use crate::engine::SimulationEngine;
    pub use crate::events::GameEvent;
    pub use crate::world::{ResourceId, WorldGrid};
    pub use runelight_logic::geometry::{Cell, Facing};
}
