//! Monster system - respawn countdowns, roaming and contact damage

use hecs::{Entity, World};
use rand::Rng;
use runelight_logic::geometry::Cell;
use runelight_logic::pathfinding::find_path;
use runelight_logic::templates::MonsterKind;

use super::movement::random_goal;
use crate::components::{Monster, Mover};
use crate::config::SimulationConfig;
use crate::world::WorldGrid;

/// Damage a monster dealt to the player by standing next to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactHit {
    pub monster: Entity,
    pub kind: MonsterKind,
    pub damage: i32,
}

/// Advance every monster one tick.
///
/// Dead monsters count down and respawn at full health on a random cell in
/// `bounds` (inclusive, both axes); they neither move nor attack. Live
/// monsters roam on a timer, step, and roll contact damage against
/// `player` when within Manhattan distance 1. Pass `None` for `player` to
/// suppress contact damage.
pub fn monster_system(
    world: &mut World,
    grid: &WorldGrid,
    rng: &mut impl Rng,
    player: Option<Cell>,
    config: &SimulationConfig,
    bounds: (i32, i32),
) -> Vec<ContactHit> {
    let mut hits = Vec::new();
    let (lo, hi) = (bounds.0, bounds.1.max(bounds.0));
    let (roam_lo, roam_hi) = config.monster_roam_ticks;

    for (entity, (mover, monster)) in world.query_mut::<(&mut Mover, &mut Monster)>() {
        if !monster.is_alive() {
            let remaining = monster.dead_timer.unwrap_or(0).saturating_sub(1);
            if remaining == 0 {
                let cell = Cell::new(rng.gen_range(lo..=hi), rng.gen_range(lo..=hi));
                monster.revive();
                mover.teleport(cell);
                log::info!("{} respawned at {}", monster.kind.name(), cell);
            } else {
                monster.dead_timer = Some(remaining);
            }
            continue;
        }

        monster.roam_timer = monster.roam_timer.saturating_sub(1);
        if monster.roam_timer == 0 {
            let goal = random_goal(rng, mover.position, config.monster_roam_radius);
            mover.set_path(find_path(grid, mover.position, goal));
            monster.roam_timer = rng.gen_range(roam_lo..=roam_hi.max(roam_lo));
        }
        mover.advance();

        if let Some(target) = player {
            if mover.position.manhattan(target) < 2 {
                hits.push(ContactHit {
                    monster: entity,
                    kind: monster.kind,
                    damage: rng.gen_range(1..=monster.max_hit()),
                });
            }
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::spawn_monster;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup(cell: Cell, roam: u32) -> (World, Entity, WorldGrid) {
        let mut world = World::new();
        let e = spawn_monster(&mut world, MonsterKind::Goblin, cell, roam);
        (world, e, WorldGrid::new(96, Cell::new(24, 24)))
    }

    #[test]
    fn dead_monster_counts_down_and_respawns() {
        let (mut world, e, grid) = setup(Cell::new(50, 50), 100);
        world.get::<&mut Monster>(e).unwrap().slay(3);
        let mut rng = StdRng::seed_from_u64(1);
        let config = SimulationConfig::default();

        monster_system(&mut world, &grid, &mut rng, None, &config, (12, 83));
        monster_system(&mut world, &grid, &mut rng, None, &config, (12, 83));
        {
            let m = world.get::<&Monster>(e).unwrap();
            assert_eq!(m.hp, 0);
            assert_eq!(m.dead_timer, Some(1));
        }
        monster_system(&mut world, &grid, &mut rng, None, &config, (12, 83));
        let m = world.get::<&Monster>(e).unwrap();
        assert_eq!(m.hp, 18);
        assert_eq!(m.dead_timer, None);
        let pos = world.get::<&Mover>(e).unwrap().position;
        assert!((12..=83).contains(&pos.x) && (12..=83).contains(&pos.y));
    }

    #[test]
    fn dead_monster_does_not_attack() {
        let (mut world, e, grid) = setup(Cell::new(50, 50), 100);
        world.get::<&mut Monster>(e).unwrap().slay(300);
        let hits = monster_system(
            &mut world,
            &grid,
            &mut StdRng::seed_from_u64(1),
            Some(Cell::new(50, 51)),
            &SimulationConfig::default(),
            (12, 83),
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn adjacent_monster_hits_within_max() {
        let (mut world, e, grid) = setup(Cell::new(50, 50), 1000);
        let mut rng = StdRng::seed_from_u64(2);
        let config = SimulationConfig::default();
        for _ in 0..50 {
            let hits = monster_system(&mut world, &grid, &mut rng, Some(Cell::new(51, 50)), &config, (12, 83));
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].monster, e);
            assert!((1..=4).contains(&hits[0].damage));
        }
    }

    #[test]
    fn diagonal_is_out_of_reach() {
        let (mut world, _, grid) = setup(Cell::new(50, 50), 1000);
        let hits = monster_system(
            &mut world,
            &grid,
            &mut StdRng::seed_from_u64(2),
            Some(Cell::new(51, 51)),
            &SimulationConfig::default(),
            (12, 83),
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn roam_timer_triggers_new_path() {
        let (mut world, e, grid) = setup(Cell::new(50, 50), 1);
        let mut rng = StdRng::seed_from_u64(11);
        let config = SimulationConfig::default();
        monster_system(&mut world, &grid, &mut rng, None, &config, (12, 83));
        let m = world.get::<&Monster>(e).unwrap();
        assert!((40..=200).contains(&m.roam_timer));
        let mover = world.get::<&Mover>(e).unwrap();
        assert!(mover.position.manhattan(Cell::new(50, 50)) <= 1);
    }
}
