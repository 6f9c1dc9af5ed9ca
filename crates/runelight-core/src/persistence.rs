//! Save/Load functionality for the player's progress
//!
//! A save holds the player, inventory, equipment and bank. The world itself
//! is not saved: it is regenerated from its seed and keeps running around a
//! loaded player.
//!
//! Uses bincode for compact binary saves and serde_json for human-readable
//! ones. Both carry a format version that is checked on load.

use std::io::{Read, Write};

use runelight_logic::items::Equipment;
use serde::{Deserialize, Serialize};

use crate::components::Player;
use crate::engine::SimulationEngine;

/// Version number for save file format (increment when format changes)
pub const SAVE_VERSION: u32 = 1;

/// Serializable snapshot of the player's progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveData {
    /// Save format version
    pub version: u32,
    pub player: Player,
    /// Inventory slots by index, `None` for empty
    pub inventory: Vec<Option<String>>,
    pub equipment: Equipment,
    /// Bank slots by index, `None` for empty
    pub bank: Vec<Option<String>>,
}

impl SaveData {
    pub fn capture(engine: &SimulationEngine) -> Self {
        Self {
            version: SAVE_VERSION,
            player: engine.player.clone(),
            inventory: engine.inventory.slots().to_vec(),
            equipment: engine.equipment.clone(),
            bank: engine.bank.slots().to_vec(),
        }
    }

    /// Overwrite the engine's player state. Slots are restored by index and
    /// equipment by slot; combat target and pending action start empty.
    pub fn apply(self, engine: &mut SimulationEngine) {
        engine.player = self.player;
        engine.player.target = None;
        engine.player.pending_action = None;
        engine.inventory.restore(&self.inventory);
        engine.bank.restore(&self.bank);
        engine.equipment = self.equipment;
    }

    fn check_version(&self) -> Result<(), SaveError> {
        if self.version != SAVE_VERSION {
            log::warn!(
                "Rejecting save with version {} (expected {})",
                self.version,
                SAVE_VERSION
            );
            return Err(SaveError::VersionMismatch {
                expected: SAVE_VERSION,
                found: self.version,
            });
        }
        Ok(())
    }
}

/// Write a binary save.
pub fn save_game<W: Write>(writer: W, engine: &SimulationEngine) -> Result<(), SaveError> {
    bincode::serialize_into(writer, &SaveData::capture(engine))?;
    Ok(())
}

/// Read a binary save.
pub fn load_game<R: Read>(reader: R) -> Result<SaveData, SaveError> {
    let data: SaveData = bincode::deserialize_from(reader)?;
    data.check_version()?;
    Ok(data)
}

/// Write a pretty-printed JSON save.
pub fn save_game_json<W: Write>(writer: W, engine: &SimulationEngine) -> Result<(), SaveError> {
    serde_json::to_writer_pretty(writer, &SaveData::capture(engine))?;
    Ok(())
}

/// Read a JSON save.
pub fn load_game_json<R: Read>(reader: R) -> Result<SaveData, SaveError> {
    let data: SaveData = serde_json::from_reader(reader)?;
    data.check_version()?;
    Ok(data)
}

/// Errors that can occur during save/load
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Bincode(#[from] bincode::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Save version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

impl SimulationEngine {
    /// Save player progress to a writer
    pub fn save<W: Write>(&self, writer: W) -> Result<(), SaveError> {
        save_game(writer, self)
    }

    /// Load player progress from a reader
    pub fn load<R: Read>(&mut self, reader: R) -> Result<(), SaveError> {
        load_game(reader)?.apply(self);
        Ok(())
    }

    pub fn save_json<W: Write>(&self, writer: W) -> Result<(), SaveError> {
        save_game_json(writer, self)
    }

    pub fn load_json<R: Read>(&mut self, reader: R) -> Result<(), SaveError> {
        load_game_json(reader)?.apply(self);
        Ok(())
    }
}
