//! Townsfolk, adventurer and monster generation

use hecs::{Entity, World};
use rand::Rng;
use runelight_logic::geometry::Cell;
use runelight_logic::templates::{MonsterKind, NpcRole, Task};
use runelight_logic::tiles::TileType;

use crate::components::*;
use crate::config::{SimulationConfig, WorldConfig};
use crate::world::WorldGrid;

/// The fixed population of Timbercross.
pub const TOWNSFOLK: [(&str, NpcRole, i32, i32, Task); 9] = [
    ("Mayor Alden", NpcRole::Mayor, 23, 27, Task::Pacing),
    ("Trader Pippin", NpcRole::Trader, 26, 26, Task::Trading),
    ("Town Guide", NpcRole::Guide, 21, 24, Task::Guiding),
    ("Guard Rowan", NpcRole::Guard, 19, 23, Task::Patrolling),
    ("Guard Vale", NpcRole::Guard, 29, 23, Task::Patrolling),
    ("Healer Lysa", NpcRole::Healer, 24, 29, Task::Healing),
    ("Wren", NpcRole::Woodcutter, 18, 30, Task::Woodcutting),
    ("Milo", NpcRole::Miner, 30, 30, Task::Mining),
    ("Fia", NpcRole::Fisher, 26, 33, Task::Fishing),
];

/// Other adventurers out in the fields.
pub const ADVENTURERS: [(&str, i32, i32, Task); 4] = [
    ("Sera", 40, 26, Task::Woodcutting),
    ("Bran", 46, 33, Task::Mining),
    ("Kala", 36, 38, Task::Fishing),
    ("Quill", 52, 28, Task::Wandering),
];

pub fn spawn_npc(world: &mut World, name: &str, role: NpcRole, cell: Cell, task: Task) -> Entity {
    world.spawn((
        EntityKind::Npc,
        Name::new(name),
        Mover::new(cell),
        Npc::new(role, task),
    ))
}

pub fn spawn_wanderer(world: &mut World, name: &str, cell: Cell, task: Task) -> Entity {
    world.spawn((
        EntityKind::WanderingActor,
        Name::new(name),
        Mover::new(cell),
        Wanderer { task },
    ))
}

pub fn spawn_monster(world: &mut World, kind: MonsterKind, cell: Cell, roam_timer: u32) -> Entity {
    world.spawn((
        EntityKind::Monster,
        Name::new(kind.name()),
        Mover::new(cell),
        Monster::new(kind, roam_timer),
    ))
}

/// Spawn the town NPCs and the wandering adventurers.
pub fn spawn_townsfolk(world: &mut World) -> Vec<Entity> {
    let mut entities = Vec::with_capacity(TOWNSFOLK.len() + ADVENTURERS.len());

    for (name, role, x, y, task) in TOWNSFOLK {
        entities.push(spawn_npc(world, name, role, Cell::new(x, y), task));
    }
    for (name, x, y, task) in ADVENTURERS {
        entities.push(spawn_wanderer(world, name, Cell::new(x, y), task));
    }

    entities
}

/// One spawn attempt per configured monster; attempts that land off grass
/// are dropped.
pub fn spawn_monsters(
    world: &mut World,
    grid: &WorldGrid,
    world_config: &WorldConfig,
    sim_config: &SimulationConfig,
    rng: &mut impl Rng,
) -> Vec<Entity> {
    let (lo, hi) = world_config.monster_bounds();
    let hi = hi.max(lo);
    let (roam_lo, roam_hi) = sim_config.monster_initial_roam;
    let mut monsters = Vec::new();

    for spawn in &world_config.monster_spawns {
        for _ in 0..spawn.count {
            let cell = Cell::new(rng.gen_range(lo..=hi), rng.gen_range(lo..=hi));
            if grid.tile(cell) != Some(TileType::Grass) {
                continue;
            }
            let roam = rng.gen_range(roam_lo..=roam_hi.max(roam_lo));
            monsters.push(spawn_monster(world, spawn.kind, cell, roam));
        }
    }

    log::info!("Spawned {} monsters", monsters.len());
    monsters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MonsterSpawn;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn townsfolk_roster() {
        let mut world = World::new();
        let spawned = spawn_townsfolk(&mut world);
        assert_eq!(spawned.len(), 13);

        let guards = world
            .query::<&Npc>()
            .iter()
            .filter(|(_, npc)| npc.patrols())
            .count();
        assert_eq!(guards, 2);
        assert_eq!(world.query::<&Wanderer>().iter().count(), 4);

        let trader = spawned[1];
        assert_eq!(world.get::<&Name>(trader).unwrap().as_str(), "Trader Pippin");
        assert_eq!(world.get::<&Mover>(trader).unwrap().position, Cell::new(26, 26));
    }

    #[test]
    fn monsters_spawn_on_grass_in_bounds() {
        let mut world = World::new();
        let grid = WorldGrid::from_ascii(&["~~~~"; 4], Cell::new(0, 0));
        let config = WorldConfig {
            size: 4,
            monster_margin: 0,
            ..Default::default()
        };
        let spawned = spawn_monsters(&mut world, &grid, &config, &SimulationConfig::default(), &mut StdRng::seed_from_u64(1));
        assert!(spawned.is_empty());

        let grid = WorldGrid::new(96, Cell::new(24, 24));
        let config = WorldConfig {
            monster_spawns: vec![MonsterSpawn {
                kind: MonsterKind::Bat,
                count: 20,
            }],
            ..Default::default()
        };
        let spawned = spawn_monsters(&mut world, &grid, &config, &SimulationConfig::default(), &mut StdRng::seed_from_u64(1));
        assert_eq!(spawned.len(), 20);
        for (_, (mover, monster)) in world.query::<(&Mover, &Monster)>().iter() {
            assert!((12..=84).contains(&mover.position.x));
            assert!((12..=84).contains(&mover.position.y));
            assert!((20..=200).contains(&monster.roam_timer));
            assert_eq!(monster.hp, 14);
        }
    }
}
