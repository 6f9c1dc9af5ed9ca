//! Interaction resolver - gathering, engagement and combat rounds.
//!
//! None of these fail. Stale targets (a depleted node, a slain monster, an
//! entity that no longer exists) turn the call into a no-op.

use hecs::Entity;
use rand::Rng;
use runelight_logic::combat::{
    coins_after_death, player_max_hit, ATTACK_MARKER_TTL, KILL_XP, MONSTER_RESPAWN_TICKS,
    NPC_MAX_HIT,
};
use runelight_logic::skills::Skill;
use runelight_logic::templates::GATHER_XP;

use crate::components::*;
use crate::engine::SimulationEngine;
use crate::systems::DamageMarker;
use crate::world::ResourceId;

impl SimulationEngine {
    /// Gather from a resource node. Returns whether anything was gathered.
    ///
    /// A depleted node yields nothing, so calling this twice in a row only
    /// rewards once. Adjacency is the caller's business.
    pub fn handle_resource(&mut self, id: ResourceId) -> bool {
        let (lo, hi) = self.config.resource_respawn;
        let Some(node) = self.grid.resource_mut(id) else {
            return false;
        };
        if node.depleted {
            return false;
        }
        node.depleted = true;
        node.respawn_timer = self.rng.gen_range(lo..hi.max(lo + 1));
        let kind = node.kind;

        self.gain_xp(kind.skill(), GATHER_XP);
        self.add_item(kind.item());
        self.push_message(format!(
            "You gather {} from the {}.",
            kind.item().to_lowercase(),
            kind.name()
        ));
        true
    }

    /// Lock the player and a monster onto each other. Damage is dealt by the
    /// tick loop once they are adjacent.
    pub fn handle_monster(&mut self, monster: Entity) -> bool {
        if self.player.dead {
            return false;
        }
        let kind = match self.world.get::<&mut Monster>(monster) {
            Ok(mut m) => {
                m.engaged = true;
                m.kind
            }
            Err(_) => return false,
        };
        self.player.target = Some(monster);
        self.push_message(format!("You engage the {}!", kind.name()));
        true
    }

    /// One attack round: roll damage in `[1, max_hit]` and apply it.
    /// No-op when the target is missing or already down.
    pub fn attack_target(&mut self, attacker: Combatant, target: Combatant) {
        if !self.can_be_hit(target) {
            return;
        }
        let max_hit = match attacker {
            Combatant::Player => player_max_hit(self.player.skills.level(Skill::Attack)),
            Combatant::Monster(_) => NPC_MAX_HIT,
        };
        let damage = self.rng.gen_range(1..=max_hit.max(1));
        self.resolve_hit(target, damage);
    }

    fn can_be_hit(&self, target: Combatant) -> bool {
        match target {
            Combatant::Player => self.player.hp > 0,
            Combatant::Monster(e) => matches!(self.monster_state(e), Some((_, true))),
        }
    }

    /// Apply a fixed amount of damage to `target`, handling the kill or the
    /// player's death. No-op when the target is missing or already down.
    pub fn resolve_hit(&mut self, target: Combatant, damage: i32) {
        if !self.can_be_hit(target) {
            return;
        }
        match target {
            Combatant::Monster(entity) => self.hit_monster(entity, damage),
            Combatant::Player => self.hit_player(damage),
        }
    }

    fn hit_monster(&mut self, entity: Entity, damage: i32) {
        let (cell, slain) = {
            let Ok((mover, monster)) = self.world.query_one_mut::<(&Mover, &mut Monster)>(entity)
            else {
                return;
            };
            monster.hp -= damage;
            let slain = if monster.is_alive() {
                None
            } else {
                monster.slay(MONSTER_RESPAWN_TICKS);
                Some(monster.kind)
            };
            (mover.position, slain)
        };
        self.markers
            .push(DamageMarker::damage(cell, damage, ATTACK_MARKER_TTL));
        log::debug!("Hit monster at {cell} for {damage}");

        let Some(kind) = slain else {
            return;
        };
        let loot = kind.template().loot;
        self.push_message(format!("You defeated the {} and loot {loot}.", kind.name()));
        self.add_item(loot);
        for (skill, xp) in KILL_XP {
            self.gain_xp(skill, xp);
        }
        if self.player.target == Some(entity) {
            self.player.target = None;
        }
        if self.player.pending_action == Some(PendingAction::Engage(entity)) {
            self.player.pending_action = None;
        }
    }

    fn hit_player(&mut self, damage: i32) {
        self.player.hp -= damage;
        self.markers.push(DamageMarker::damage(
            self.player.position(),
            damage,
            ATTACK_MARKER_TTL,
        ));
        if self.player.hp > 0 {
            return;
        }
        self.push_message("You collapse and wake up in Timbercross.");
        self.player.coins = coins_after_death(self.player.coins);
        self.player.hp = self.player.max_hp;
        self.player.dead = false;
        self.player.stop();
        self.player.mover.teleport(self.grid.town_center());
        log::info!("Player slain in combat, {} coins left", self.player.coins);
    }

    /// Grant experience, announcing a level-up.
    pub fn gain_xp(&mut self, skill: Skill, amount: u32) {
        if let Some(level) = self.player.skills.gain_xp(skill, amount) {
            self.push_message(format!("{skill} level up! You're now level {level}!"));
        }
    }

    /// Put an item in the first free inventory slot. A full inventory is
    /// reported to the player and the item is lost.
    pub fn add_item(&mut self, item: &str) -> bool {
        if self.inventory.add(item) {
            true
        } else {
            self.push_message("Inventory full.");
            false
        }
    }
}
