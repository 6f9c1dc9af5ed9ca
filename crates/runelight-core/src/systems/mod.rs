//! Systems - per-tick logic over the ECS world and the grid

mod markers;
mod monsters;
mod movement;
mod resources;

pub use markers::*;
pub use monsters::*;
pub use movement::*;
pub use resources::*;
