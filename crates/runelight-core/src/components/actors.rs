//! Actor components: townsfolk, adventurers, monsters, and the player.

use hecs::Entity;
use runelight_logic::geometry::Cell;
use runelight_logic::skills::SkillSet;
use runelight_logic::templates::{MonsterKind, NpcRole, Task};
use runelight_logic::zones::Zone;
use serde::{Deserialize, Serialize};

use super::Mover;
use crate::world::ResourceId;

/// Tag identifying what sort of actor an entity is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Npc,
    WanderingActor,
    Monster,
}

/// Townsfolk. Only patrolling NPCs move on their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Npc {
    pub role: NpcRole,
    pub task: Task,
}

impl Npc {
    pub fn new(role: NpcRole, task: Task) -> Self {
        Self { role, task }
    }

    pub fn patrols(&self) -> bool {
        self.task == Task::Patrolling
    }
}

/// Another adventurer roaming the fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wanderer {
    pub task: Task,
}

/// Monster combat and respawn state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub kind: MonsterKind,
    pub hp: i32,
    /// Ticks until respawn; `Some` exactly while the monster is dead
    pub dead_timer: Option<u32>,
    /// Ticks until the next roam decision
    pub roam_timer: u32,
    /// Set when the player engages this monster, cleared when it dies.
    /// Surfaced to hosts through `ActorView::engaged`.
    pub engaged: bool,
}

impl Monster {
    pub fn new(kind: MonsterKind, roam_timer: u32) -> Self {
        Self {
            kind,
            hp: kind.template().max_hp,
            dead_timer: None,
            roam_timer,
            engaged: false,
        }
    }

    pub fn max_hp(&self) -> i32 {
        self.kind.template().max_hp
    }

    pub fn max_hit(&self) -> i32 {
        self.kind.template().max_hit
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Mark as slain and start the respawn countdown.
    pub fn slay(&mut self, respawn_ticks: u32) {
        self.hp = 0;
        self.dead_timer = Some(respawn_ticks);
        self.engaged = false;
    }

    /// Back to full health, ready to roam.
    pub fn revive(&mut self) {
        self.hp = self.max_hp();
        self.dead_timer = None;
    }
}

/// Something the player walked off to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Gather(ResourceId),
    Engage(Entity),
}

/// One side of a fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combatant {
    Player,
    Monster(Entity),
}

pub const PLAYER_START_HP: i32 = 20;
pub const PLAYER_START_COINS: u32 = 125;

/// The player character.
///
/// Combat and pending-action handles point into the ECS world and are not
/// saved; a loaded player starts with neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub mover: Mover,
    pub hp: i32,
    pub max_hp: i32,
    pub coins: u32,
    pub dead: bool,
    pub skills: SkillSet,
    pub zone: Zone,
    #[serde(skip)]
    pub target: Option<Entity>,
    #[serde(skip)]
    pub pending_action: Option<PendingAction>,
}

impl Player {
    pub fn new(spawn: Cell) -> Self {
        Self {
            name: "You".to_string(),
            mover: Mover::new(spawn),
            hp: PLAYER_START_HP,
            max_hp: PLAYER_START_HP,
            coins: PLAYER_START_COINS,
            dead: false,
            skills: SkillSet::new(),
            zone: Zone::Timbercross,
            target: None,
            pending_action: None,
        }
    }

    pub fn position(&self) -> Cell {
        self.mover.position
    }

    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    /// Drop any queued walk, combat target and pending action.
    pub fn stop(&mut self) {
        self.mover.clear_path();
        self.target = None;
        self.pending_action = None;
    }
}
