//! Player commands - clicks, chat, shop, bank and equipment.
//!
//! Commands are applied between ticks. Anything that involves walking only
//! sets the player's path and pending action; the next tick does the rest.

use hecs::Entity;
use rand::Rng;
use runelight_logic::commands::{parse_chat, ChatCommand, ChatInput, HELP_TEXT};
use runelight_logic::geometry::Cell;
use runelight_logic::items::{equip_from, transfer, EquipmentSlot};
use runelight_logic::pathfinding::find_path;
use runelight_logic::shop::{self, Purchase, Sale};
use runelight_logic::templates::{NpcRole, DIALOGUE_LINES, FOODS, FOOD_HEAL};

use crate::components::*;
use crate::engine::SimulationEngine;
use crate::events::GameEvent;
use crate::persistence::{load_game, save_game};
use crate::world::ResourceId;

/// What a click on the map resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Npc(Entity),
    Monster(Entity),
    Resource(ResourceId),
    Move,
    Nothing,
}

impl SimulationEngine {
    /// Walk to `goal`, dropping any combat target. A pending action stays
    /// queued and fires once the player stops next to its target.
    /// Returns whether a route was found.
    pub fn move_to(&mut self, goal: Cell) -> bool {
        let path = find_path(&self.grid, self.player.position(), goal);
        let found = !path.is_empty();
        self.player.mover.set_path(path);
        self.player.target = None;
        found
    }

    /// Walk next to a resource node and gather once there.
    pub fn interact_resource(&mut self, id: ResourceId) -> bool {
        let Some(node) = self.grid.resource(id) else {
            return false;
        };
        if node.depleted {
            return false;
        }
        let Some(stand) = self.grid.adjacent_walkable(node.cell) else {
            log::warn!("No walkable cell next to the {} at {}", node.kind.name(), node.cell);
            return false;
        };
        let path = find_path(&self.grid, self.player.position(), stand);
        self.player.mover.set_path(path);
        self.player.pending_action = Some(PendingAction::Gather(id));
        true
    }

    /// Walk next to a live monster and engage it. Engagement happens right
    /// away even when no cell next to the monster is free.
    pub fn interact_monster(&mut self, monster: Entity) -> bool {
        let Some((cell, true)) = self.monster_state(monster) else {
            return false;
        };
        match self.grid.adjacent_walkable(cell) {
            Some(stand) => {
                let path = find_path(&self.grid, self.player.position(), stand);
                self.player.mover.set_path(path);
                self.player.pending_action = Some(PendingAction::Engage(monster));
            }
            None => log::warn!("No walkable cell next to monster at {cell}"),
        }
        self.handle_monster(monster)
    }

    /// Talk to an NPC. The trader also opens the shop and the healer
    /// restores the player's health.
    pub fn interact_npc(&mut self, npc: Entity) -> bool {
        let (name, role) = match self.world.query_one_mut::<(&Name, &Npc)>(npc) {
            Ok((name, npc)) => (name.as_str().to_string(), npc.role),
            Err(_) => return false,
        };
        let line = DIALOGUE_LINES[self.rng.gen_range(0..DIALOGUE_LINES.len())];
        self.events.push(GameEvent::Dialogue {
            speaker: name.clone(),
            text: format!("{}: {line}", role.name()),
        });
        match role {
            NpcRole::Trader => self.events.push(GameEvent::OpenShop),
            NpcRole::Healer => {
                self.player.hp = self.player.max_hp;
                self.push_message(format!("{name} restores your health."));
            }
            _ => {}
        }
        true
    }

    /// Resolve a click on the map: an NPC next to the cell, then a live
    /// monster on it, then an undepleted resource on it, then plain ground.
    pub fn click(&mut self, cell: Cell) -> ClickOutcome {
        if let Some(npc) = self.npc_near(cell) {
            self.interact_npc(npc);
            return ClickOutcome::Npc(npc);
        }
        if let Some(monster) = self.monster_at(cell) {
            self.interact_monster(monster);
            return ClickOutcome::Monster(monster);
        }
        if let Some(id) = self.grid.resource_at(cell) {
            if self.grid.resource(id).is_some_and(|n| !n.depleted) {
                self.interact_resource(id);
                return ClickOutcome::Resource(id);
            }
        }
        if self.grid.is_walkable(cell) {
            self.move_to(cell);
            return ClickOutcome::Move;
        }
        ClickOutcome::Nothing
    }

    /// Handle one line typed into the chat box.
    pub fn chat(&mut self, line: &str) {
        match parse_chat(line) {
            ChatInput::Empty => {}
            ChatInput::Say(text) => self.push_message(format!("You: {text}")),
            ChatInput::Command(command) => self.run_command(command),
        }
    }

    fn run_command(&mut self, command: ChatCommand) {
        match command {
            ChatCommand::Help => self.push_message(HELP_TEXT),
            ChatCommand::Save => self.quick_save(),
            ChatCommand::Load => self.quick_load(),
            ChatCommand::Bank => self.events.push(GameEvent::ShowBank),
            ChatCommand::Stats => {
                let text = format!("HP: {}/{}", self.player.hp, self.player.max_hp);
                self.push_message(text);
            }
            ChatCommand::Quest => self.push_message("Quest log updated in the panel."),
            ChatCommand::Eat => {
                self.eat();
            }
            ChatCommand::Teleport(cell) => self.teleport(cell),
            ChatCommand::Unknown(text) => log::debug!("Ignoring unknown command /{text}"),
        }
    }

    fn quick_save(&mut self) {
        let mut bytes = Vec::new();
        match save_game(&mut bytes, self) {
            Ok(()) => {
                self.save_slot = Some(bytes);
                self.push_message("Game saved.");
            }
            Err(e) => log::warn!("Save failed: {e}"),
        }
    }

    fn quick_load(&mut self) {
        let Some(bytes) = self.save_slot.take() else {
            self.push_message("No save found.");
            return;
        };
        let loaded = load_game(bytes.as_slice());
        self.save_slot = Some(bytes);
        match loaded {
            Ok(data) => {
                data.apply(self);
                self.push_message("Loaded saved game.");
            }
            Err(e) => log::warn!("Load failed: {e}"),
        }
    }

    /// Eat the first food in the inventory. Returns whether anything was
    /// eaten.
    pub fn eat(&mut self) -> bool {
        let Some(index) = self.inventory.position_any(&FOODS) else {
            self.push_message("You have no food.");
            return false;
        };
        let Some(item) = self.inventory.take(index) else {
            return false;
        };
        self.player.heal(FOOD_HEAL);
        self.push_message(format!("You eat the {} and feel better.", item.to_lowercase()));
        true
    }

    /// Jump to a cell, clamped to the map. The walk in progress is dropped;
    /// the combat target and any pending action are kept.
    pub fn teleport(&mut self, cell: Cell) {
        let max = self.grid.size() - 1;
        let target = Cell::new(cell.x.clamp(0, max.max(0)), cell.y.clamp(0, max.max(0)));
        self.player.mover.teleport(target);
        log::debug!("Teleported to {target}");
    }

    /// Buy one item from the trader.
    pub fn buy(&mut self, item: &str) -> Purchase {
        let result = shop::buy(item, &mut self.player.coins, &mut self.inventory);
        match result {
            Purchase::Bought { .. } => self.push_message(format!("Bought {item}.")),
            Purchase::NotEnoughCoins => self.push_message("Not enough coins."),
            Purchase::InventoryFull => self.push_message("Inventory full."),
            Purchase::NotStocked => log::debug!("Trader does not stock {item}"),
        }
        result
    }

    /// Sell the first matching item to the trader.
    pub fn sell(&mut self, item: &str) -> Sale {
        let result = shop::sell(item, &mut self.player.coins, &mut self.inventory);
        if let Sale::Sold { .. } = result {
            self.push_message(format!("Sold {item}."));
        }
        result
    }

    /// Move the first matching item from the inventory into the bank.
    pub fn deposit(&mut self, item: &str) -> bool {
        transfer(&mut self.inventory, &mut self.bank, item)
    }

    /// Move the first matching item from the bank into the inventory.
    pub fn withdraw(&mut self, item: &str) -> bool {
        transfer(&mut self.bank, &mut self.inventory, item)
    }

    /// Wear the item in inventory slot `index`.
    pub fn equip(&mut self, index: usize) -> Option<EquipmentSlot> {
        let slot = equip_from(&mut self.inventory, &mut self.equipment, index)?;
        log::debug!("Equipped {:?} in the {} slot", self.equipment.get(slot), slot.name());
        Some(slot)
    }
}
