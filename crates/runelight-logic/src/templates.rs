//! Static templates for resources, monsters, NPC dialogue and food.

use serde::{Deserialize, Serialize};

use crate::skills::Skill;

/// Experience granted per successful gather.
pub const GATHER_XP: u32 = 12;

/// Items that can be eaten, in lookup order.
pub const FOODS: [&str; 2] = ["Bread", "Fish"];
/// Hit points restored by eating.
pub const FOOD_HEAL: i32 = 6;

/// Gatherable resource kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Tree,
    Rock,
    Fish,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [ResourceKind::Tree, ResourceKind::Rock, ResourceKind::Fish];

    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Tree => "tree",
            ResourceKind::Rock => "rock",
            ResourceKind::Fish => "fish",
        }
    }

    pub fn skill(self) -> Skill {
        match self {
            ResourceKind::Tree => Skill::Woodcutting,
            ResourceKind::Rock => Skill::Mining,
            ResourceKind::Fish => Skill::Fishing,
        }
    }

    /// Item granted by a successful gather.
    pub fn item(self) -> &'static str {
        match self {
            ResourceKind::Tree => "Logs",
            ResourceKind::Rock => "Ore",
            ResourceKind::Fish => "Fish",
        }
    }

    /// Whether an undepleted node of this kind blocks movement.
    /// Fishing spots sit on water and never block.
    pub fn blocks_movement(self) -> bool {
        !matches!(self, ResourceKind::Fish)
    }
}

/// Monster kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    Slime,
    Goblin,
    Zombie,
    Skeleton,
    Bat,
}

/// Per-kind stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonsterTemplate {
    pub name: &'static str,
    pub max_hp: i32,
    pub max_hit: i32,
    pub loot: &'static str,
}

impl MonsterKind {
    pub const ALL: [MonsterKind; 5] = [
        MonsterKind::Slime,
        MonsterKind::Goblin,
        MonsterKind::Zombie,
        MonsterKind::Skeleton,
        MonsterKind::Bat,
    ];

    pub fn template(self) -> MonsterTemplate {
        match self {
            MonsterKind::Slime => MonsterTemplate {
                name: "slime",
                max_hp: 12,
                max_hit: 3,
                loot: "Goo",
            },
            MonsterKind::Goblin => MonsterTemplate {
                name: "goblin",
                max_hp: 18,
                max_hit: 4,
                loot: "Bones",
            },
            MonsterKind::Zombie => MonsterTemplate {
                name: "zombie",
                max_hp: 24,
                max_hit: 5,
                loot: "Rotten Cloth",
            },
            MonsterKind::Skeleton => MonsterTemplate {
                name: "skeleton",
                max_hp: 20,
                max_hit: 4,
                loot: "Bone",
            },
            MonsterKind::Bat => MonsterTemplate {
                name: "bat",
                max_hp: 14,
                max_hit: 3,
                loot: "Wing",
            },
        }
    }

    pub fn name(self) -> &'static str {
        self.template().name
    }
}

/// What a town NPC does with their day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NpcRole {
    Mayor,
    Trader,
    Guide,
    Guard,
    Healer,
    Woodcutter,
    Miner,
    Fisher,
}

impl NpcRole {
    pub fn name(self) -> &'static str {
        match self {
            NpcRole::Mayor => "Mayor",
            NpcRole::Trader => "Trader",
            NpcRole::Guide => "Guide",
            NpcRole::Guard => "Guard",
            NpcRole::Healer => "Healer",
            NpcRole::Woodcutter => "Woodcutter",
            NpcRole::Miner => "Miner",
            NpcRole::Fisher => "Fisher",
        }
    }
}

/// Idle behaviour label for NPCs and other adventurers.
/// Only `Patrolling` changes how an NPC moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Task {
    Pacing,
    Trading,
    Guiding,
    Patrolling,
    Healing,
    Woodcutting,
    Mining,
    Fishing,
    Wandering,
}

pub const DIALOGUE_LINES: [&str; 5] = [
    "Ah, an adventurer! My knees are starting to sound like maracas.",
    "You look like someone who can carry 200 logs and still smile.",
    "The wilderness smells of danger and moderately damp socks.",
    "I once fought a slime. It won. We're civil now.",
    "If you see the mayor, tell them the hat ran away again.",
];
