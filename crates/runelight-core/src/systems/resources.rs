//! Resource respawn system

use crate::world::WorldGrid;

/// Count down depleted nodes and restore those that reach zero. Returns how
/// many nodes came back this tick.
pub fn resource_respawn_system(grid: &mut WorldGrid) -> usize {
    let mut restored = 0;
    for node in grid.resources_mut().iter_mut().filter(|n| n.depleted) {
        node.respawn_timer = node.respawn_timer.saturating_sub(1);
        if node.respawn_timer == 0 {
            node.depleted = false;
            restored += 1;
        }
    }
    restored
}
