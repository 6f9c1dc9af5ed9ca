//! Notifications from the simulation to its host (chat log, UI panels).

use runelight_logic::zones::Zone;

/// Something the host should show. Queued on the engine and drained by the
/// host after each tick or command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A line for the chat log
    Message(String),
    /// The player crossed into a new zone
    ZoneChanged(Zone),
    /// An NPC speaks
    Dialogue { speaker: String, text: String },
    /// The trader's shop should open
    OpenShop,
    /// The bank panel should be brought into view
    ShowBank,
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::Message(text) => f.write_str(text),
            GameEvent::ZoneChanged(zone) => write!(f, "[zone] {zone}"),
            GameEvent::Dialogue { speaker, text } => write!(f, "{speaker}: {text}"),
            GameEvent::OpenShop => f.write_str("[shop]"),
            GameEvent::ShowBank => f.write_str("[bank]"),
        }
    }
}
