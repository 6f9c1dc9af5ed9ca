//! Generation and simulation tuning.
//!
//! Both configs deserialize with defaults for missing fields, so a JSON file
//! only needs the values it wants to change.

use runelight_logic::geometry::Cell;
use runelight_logic::templates::MonsterKind;
use serde::{Deserialize, Serialize};

/// How many monsters of one kind generation attempts to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterSpawn {
    pub kind: MonsterKind,
    pub count: u32,
}

/// Configuration for world generation.
///
/// Every "attempts" value is a rejection-sampling budget, not a count:
/// samples that land on the wrong terrain are dropped, so the number of
/// placed props, nodes and monsters is probabilistic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Side length of the square map
    pub size: i32,
    pub town_center: Cell,
    /// Plank area half-extents; the fence sits one cell outside
    pub town_half_width: i32,
    pub town_half_height: i32,
    /// Width of the border band where water can appear
    pub edge_band: i32,
    pub water_chance: f64,
    pub stone_chance: f64,
    pub dirt_chance: f64,
    pub prop_attempts: u32,
    pub prop_margin: i32,
    pub resource_margin: i32,
    pub tree_attempts: u32,
    pub rock_attempts: u32,
    pub fish_attempts: u32,
    /// Monsters spawn and respawn in `[margin, size - margin]` on both axes
    pub monster_margin: i32,
    pub monster_spawns: Vec<MonsterSpawn>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: None,
            size: 96,
            town_center: Cell::new(24, 24),
            town_half_width: 8,
            town_half_height: 6,
            edge_band: 8,
            water_chance: 0.2,
            stone_chance: 0.07,
            dirt_chance: 0.07,
            prop_attempts: 140,
            prop_margin: 6,
            resource_margin: 2,
            tree_attempts: 110,
            rock_attempts: 90,
            fish_attempts: 70,
            monster_margin: 12,
            monster_spawns: vec![
                MonsterSpawn {
                    kind: MonsterKind::Slime,
                    count: 10,
                },
                MonsterSpawn {
                    kind: MonsterKind::Goblin,
                    count: 8,
                },
                MonsterSpawn {
                    kind: MonsterKind::Zombie,
                    count: 6,
                },
                MonsterSpawn {
                    kind: MonsterKind::Skeleton,
                    count: 6,
                },
                MonsterSpawn {
                    kind: MonsterKind::Bat,
                    count: 8,
                },
            ],
        }
    }
}

impl WorldConfig {
    /// Inclusive coordinate range monsters spawn and respawn in.
    pub fn monster_bounds(&self) -> (i32, i32) {
        (self.monster_margin, (self.size - self.monster_margin).min(self.size - 1))
    }

    /// Inclusive coordinate range for scattered props.
    pub fn prop_bounds(&self) -> (i32, i32) {
        (self.prop_margin, (self.size - self.prop_margin).min(self.size - 1))
    }

    /// Inclusive coordinate range for resource nodes, kept clear of the
    /// last row and column.
    pub fn resource_bounds(&self) -> (i32, i32) {
        (self.resource_margin, self.size - 1 - self.resource_margin)
    }
}

/// Per-tick behaviour tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Patrolling NPCs pick goals within this many cells on each axis
    pub npc_patrol_radius: i32,
    /// Per-tick chance an idle adventurer picks a new goal
    pub wanderer_move_chance: f64,
    pub wanderer_radius: i32,
    pub monster_roam_radius: i32,
    /// Roam timer range at spawn, inclusive
    pub monster_initial_roam: (u32, u32),
    /// Roam timer range after each roam decision, inclusive
    pub monster_roam_ticks: (u32, u32),
    /// Resource respawn range, half-open
    pub resource_respawn: (u32, u32),
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            npc_patrol_radius: 4,
            wanderer_move_chance: 0.02,
            wanderer_radius: 6,
            monster_roam_radius: 5,
            monster_initial_roam: (20, 200),
            monster_roam_ticks: (40, 200),
            resource_respawn: (400, 600),
        }
    }
}
