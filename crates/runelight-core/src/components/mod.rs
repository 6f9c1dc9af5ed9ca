//! Component definitions for the ECS simulation.
//!
//! Components are pure data structs attached to entities.
//! Behaviour lives in systems and on the engine.

mod actors;
mod common;

pub use actors::*;
pub use common::*;
