//! Item containers: inventory, bank and equipment.
//!
//! Items are identified by display name. Inventory and bank are fixed-capacity
//! slot arrays where `None` marks an empty slot; slot positions are stable and
//! survive save/load by index.

use serde::{Deserialize, Serialize};

pub const INVENTORY_SLOTS: usize = 28;
pub const BANK_SLOTS: usize = 80;

/// Fixed-capacity ordered slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotContainer {
    slots: Vec<Option<String>>,
}

impl SlotContainer {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub fn inventory() -> Self {
        Self::new(INVENTORY_SLOTS)
    }

    pub fn bank() -> Self {
        Self::new(BANK_SLOTS)
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(|s| s.as_deref())
    }

    /// Put an item into the first empty slot. Returns `false` when full.
    pub fn add(&mut self, item: impl Into<String>) -> bool {
        match self.first_empty() {
            Some(index) => {
                self.slots[index] = Some(item.into());
                true
            }
            None => false,
        }
    }

    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Index of the first slot holding `item`.
    pub fn position(&self, item: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.as_deref() == Some(item))
    }

    /// Index of the first slot holding any of `items`.
    pub fn position_any(&self, items: &[&str]) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.as_deref().is_some_and(|name| items.contains(&name)))
    }

    /// Empty a slot, returning what was in it.
    pub fn take(&mut self, index: usize) -> Option<String> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Replace a slot's contents, returning the previous item.
    /// Out-of-range indices are ignored.
    pub fn replace(&mut self, index: usize, item: Option<String>) -> Option<String> {
        match self.slots.get_mut(index) {
            Some(slot) => std::mem::replace(slot, item),
            None => None,
        }
    }

    pub fn count(&self, item: &str) -> usize {
        self.slots.iter().filter(|s| s.as_deref() == Some(item)).count()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn slots(&self) -> &[Option<String>] {
        &self.slots
    }

    /// Overwrite slot contents index by index from saved data.
    /// Entries beyond capacity are dropped; slots beyond the saved data keep
    /// their current contents.
    pub fn restore(&mut self, saved: &[Option<String>]) {
        for (slot, item) in self.slots.iter_mut().zip(saved) {
            slot.clone_from(item);
        }
    }
}

/// Named equipment slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Shield,
    Tool,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 3] = [
        EquipmentSlot::Weapon,
        EquipmentSlot::Shield,
        EquipmentSlot::Tool,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "weapon",
            EquipmentSlot::Shield => "shield",
            EquipmentSlot::Tool => "tool",
        }
    }

    /// Slot an item is worn in, if it is equippable.
    pub fn for_item(item: &str) -> Option<EquipmentSlot> {
        match item {
            "Bronze Sword" => Some(EquipmentSlot::Weapon),
            "Small Shield" => Some(EquipmentSlot::Shield),
            "Bronze Pickaxe" | "Fishing Rod" => Some(EquipmentSlot::Tool),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<String>,
    pub shield: Option<String>,
    pub tool: Option<String>,
}

impl Equipment {
    pub fn get(&self, slot: EquipmentSlot) -> Option<&str> {
        match slot {
            EquipmentSlot::Weapon => self.weapon.as_deref(),
            EquipmentSlot::Shield => self.shield.as_deref(),
            EquipmentSlot::Tool => self.tool.as_deref(),
        }
    }

    /// Put an item in a slot, returning whatever was there.
    pub fn set(&mut self, slot: EquipmentSlot, item: Option<String>) -> Option<String> {
        let target = match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Shield => &mut self.shield,
            EquipmentSlot::Tool => &mut self.tool,
        };
        std::mem::replace(target, item)
    }
}

/// Move the item in inventory slot `index` into its equipment slot.
/// The previously worn item, if any, takes the vacated inventory slot.
/// Returns the slot used, or `None` if the slot was empty or the item is not
/// equippable.
pub fn equip_from(
    inventory: &mut SlotContainer,
    equipment: &mut Equipment,
    index: usize,
) -> Option<EquipmentSlot> {
    let slot = EquipmentSlot::for_item(inventory.get(index)?)?;
    let item = inventory.take(index);
    let previous = equipment.set(slot, item);
    inventory.replace(index, previous);
    Some(slot)
}

/// Move the first `item` from one container to another.
/// Nothing moves when the item is missing or the destination is full.
pub fn transfer(from: &mut SlotContainer, to: &mut SlotContainer, item: &str) -> bool {
    if to.is_full() {
        return false;
    }
    let Some(index) = from.position(item) else {
        return false;
    };
    match from.take(index) {
        Some(taken) => to.add(taken),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_fills_first_empty_slot() {
        let mut inv = SlotContainer::new(3);
        assert!(inv.add("Logs"));
        assert!(inv.add("Ore"));
        inv.take(0);
        assert!(inv.add("Fish"));
        assert_eq!(inv.get(0), Some("Fish"));
        assert_eq!(inv.get(1), Some("Ore"));
        assert_eq!(inv.get(2), None);
    }

    #[test]
    fn add_reports_full() {
        let mut inv = SlotContainer::new(2);
        assert!(inv.add("Logs"));
        assert!(inv.add("Logs"));
        assert!(inv.is_full());
        assert!(!inv.add("Logs"));
        assert_eq!(inv.count("Logs"), 2);
    }

    #[test]
    fn default_capacities() {
        assert_eq!(SlotContainer::inventory().capacity(), 28);
        assert_eq!(SlotContainer::bank().capacity(), 80);
    }

    #[test]
    fn position_any_finds_first_match() {
        let mut inv = SlotContainer::new(4);
        inv.add("Logs");
        inv.add("Fish");
        inv.add("Bread");
        assert_eq!(inv.position_any(&["Bread", "Fish"]), Some(1));
        assert_eq!(inv.position_any(&["Goo"]), None);
    }

    #[test]
    fn restore_by_index() {
        let mut inv = SlotContainer::new(3);
        inv.restore(&[None, Some("Ore".into()), Some("Logs".into()), Some("Extra".into())]);
        assert_eq!(inv.get(0), None);
        assert_eq!(inv.get(1), Some("Ore"));
        assert_eq!(inv.get(2), Some("Logs"));
        assert_eq!(inv.capacity(), 3);
    }

    #[test]
    fn equip_swaps_previous_item_back() {
        let mut inv = SlotContainer::new(4);
        let mut eq = Equipment::default();
        inv.add("Bronze Pickaxe");
        inv.add("Fishing Rod");

        assert_eq!(equip_from(&mut inv, &mut eq, 0), Some(EquipmentSlot::Tool));
        assert_eq!(eq.tool.as_deref(), Some("Bronze Pickaxe"));
        assert_eq!(inv.get(0), None);

        assert_eq!(equip_from(&mut inv, &mut eq, 1), Some(EquipmentSlot::Tool));
        assert_eq!(eq.tool.as_deref(), Some("Fishing Rod"));
        assert_eq!(inv.get(1), Some("Bronze Pickaxe"));
    }

    #[test]
    fn equip_rejects_non_equippable() {
        let mut inv = SlotContainer::new(2);
        let mut eq = Equipment::default();
        inv.add("Logs");
        assert_eq!(equip_from(&mut inv, &mut eq, 0), None);
        assert_eq!(equip_from(&mut inv, &mut eq, 1), None);
        assert_eq!(inv.get(0), Some("Logs"));
    }

    #[test]
    fn transfer_moves_one_item() {
        let mut inv = SlotContainer::new(3);
        let mut bank = SlotContainer::new(1);
        inv.add("Ore");
        inv.add("Ore");
        assert!(transfer(&mut inv, &mut bank, "Ore"));
        assert_eq!(inv.count("Ore"), 1);
        assert_eq!(bank.get(0), Some("Ore"));
        // Bank full now
        assert!(!transfer(&mut inv, &mut bank, "Ore"));
        assert_eq!(inv.count("Ore"), 1);
        assert!(!transfer(&mut inv, &mut bank, "Logs"));
    }
}
