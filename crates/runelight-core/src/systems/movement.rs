//! Movement systems - patrolling townsfolk and wandering adventurers

use hecs::World;
use rand::Rng;
use runelight_logic::geometry::Cell;
use runelight_logic::pathfinding::find_path;

use crate::components::{Mover, Npc, Wanderer};
use crate::world::WorldGrid;

/// Random cell within `radius` of `from` on each axis. May fall off the
/// grid, in which case pathing to it yields nothing.
pub fn random_goal(rng: &mut impl Rng, from: Cell, radius: i32) -> Cell {
    let r = radius.max(0);
    from.offset(rng.gen_range(-r..=r), rng.gen_range(-r..=r))
}

/// Idle patrolling NPCs pick a new nearby goal, then every NPC takes a step.
pub fn patrol_system(world: &mut World, grid: &WorldGrid, rng: &mut impl Rng, radius: i32) {
    for (_, (mover, npc)) in world.query_mut::<(&mut Mover, &Npc)>() {
        if npc.patrols() && mover.is_idle() {
            let goal = random_goal(rng, mover.position, radius);
            mover.set_path(find_path(grid, mover.position, goal));
        }
        mover.advance();
    }
}

/// Idle adventurers occasionally pick a new goal; all of them then step.
pub fn wandering_system(
    world: &mut World,
    grid: &WorldGrid,
    rng: &mut impl Rng,
    move_chance: f64,
    radius: i32,
) {
    for (_, (mover, _)) in world.query_mut::<(&mut Mover, &Wanderer)>() {
        if mover.is_idle() && rng.gen::<f64>() < move_chance {
            let goal = random_goal(rng, mover.position, radius);
            mover.set_path(find_path(grid, mover.position, goal));
        }
        mover.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{spawn_npc, spawn_wanderer};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use runelight_logic::templates::{NpcRole, Task};

    #[test]
    fn random_goal_stays_in_radius() {
        let mut rng = StdRng::seed_from_u64(4);
        let from = Cell::new(10, 10);
        for _ in 0..200 {
            let g = random_goal(&mut rng, from, 4);
            assert!((g.x - from.x).abs() <= 4);
            assert!((g.y - from.y).abs() <= 4);
        }
    }

    #[test]
    fn only_patrolling_npcs_move() {
        let grid = WorldGrid::new(40, Cell::new(20, 20));
        let mut world = World::new();
        let mayor = spawn_npc(&mut world, "Mayor", NpcRole::Mayor, Cell::new(10, 10), Task::Pacing);
        let guard = spawn_npc(&mut world, "Guard", NpcRole::Guard, Cell::new(20, 20), Task::Patrolling);
        let mut rng = StdRng::seed_from_u64(7);

        let mut guard_moved = false;
        for _ in 0..50 {
            patrol_system(&mut world, &grid, &mut rng, 4);
            let pos = world.get::<&Mover>(guard).unwrap().position;
            guard_moved |= pos != Cell::new(20, 20);
            assert!(pos.chebyshev(Cell::new(20, 20)) <= 4 * 50);
        }
        assert!(guard_moved);
        assert_eq!(world.get::<&Mover>(mayor).unwrap().position, Cell::new(10, 10));
    }

    #[test]
    fn patrol_steps_one_cell_per_tick() {
        let grid = WorldGrid::new(40, Cell::new(20, 20));
        let mut world = World::new();
        let guard = spawn_npc(&mut world, "Guard", NpcRole::Guard, Cell::new(20, 20), Task::Patrolling);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..30 {
            let before = world.get::<&Mover>(guard).unwrap().position;
            patrol_system(&mut world, &grid, &mut rng, 4);
            let after = world.get::<&Mover>(guard).unwrap().position;
            assert!(before.manhattan(after) <= 1);
        }
    }

    #[test]
    fn wanderers_respect_move_chance() {
        let grid = WorldGrid::new(40, Cell::new(20, 20));
        let mut world = World::new();
        let still = spawn_wanderer(&mut world, "Quill", Cell::new(20, 20), Task::Wandering);
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            wandering_system(&mut world, &grid, &mut rng, 0.0, 6);
        }
        assert_eq!(world.get::<&Mover>(still).unwrap().position, Cell::new(20, 20));

        let mut moved = false;
        for _ in 0..20 {
            wandering_system(&mut world, &grid, &mut rng, 1.0, 6);
            moved |= world.get::<&Mover>(still).unwrap().position != Cell::new(20, 20);
        }
        assert!(moved);
    }
}
