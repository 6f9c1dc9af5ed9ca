//! Common components shared by every kind of actor.

use std::collections::VecDeque;

use runelight_logic::geometry::{Cell, Facing};
use serde::{Deserialize, Serialize};

/// Grid position plus a queued path. Every actor, the player included, moves
/// only by popping waypoints off this queue, one per tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mover {
    pub position: Cell,
    /// Cell occupied before the last step, for render interpolation
    pub previous: Cell,
    pub facing: Facing,
    /// Walk-cycle frame, 0 or 1
    pub frame: u8,
    /// Remaining waypoints. Never contains `position`.
    pub path: VecDeque<Cell>,
}

impl Mover {
    pub fn new(position: Cell) -> Self {
        Self {
            position,
            previous: position,
            facing: Facing::Down,
            frame: 0,
            path: VecDeque::new(),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.path.is_empty()
    }

    /// Replace the queued path.
    pub fn set_path(&mut self, path: Vec<Cell>) {
        self.path = path.into();
    }

    pub fn clear_path(&mut self) {
        self.path.clear();
    }

    /// Take one step along the path. Returns `false` (and changes nothing)
    /// when the path is empty.
    pub fn advance(&mut self) -> bool {
        let Some(next) = self.path.pop_front() else {
            return false;
        };
        self.previous = self.position;
        self.facing = Facing::after_step(self.facing, self.position, next);
        self.position = next;
        self.frame = (self.frame + 1) % 2;
        true
    }

    /// Jump to a cell without walking (respawns, teleport command).
    pub fn teleport(&mut self, cell: Cell) {
        self.position = cell;
        self.previous = cell;
        self.path.clear();
    }
}

/// Display name of an NPC or adventurer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name(pub String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_pops_one_waypoint() {
        let mut m = Mover::new(Cell::new(5, 5));
        m.set_path(vec![Cell::new(6, 5), Cell::new(6, 6)]);

        assert!(m.advance());
        assert_eq!(m.position, Cell::new(6, 5));
        assert_eq!(m.previous, Cell::new(5, 5));
        assert_eq!(m.facing, Facing::Right);
        assert_eq!(m.frame, 1);
        assert_eq!(m.path.len(), 1);

        assert!(m.advance());
        assert_eq!(m.position, Cell::new(6, 6));
        assert_eq!(m.previous, Cell::new(6, 5));
        assert_eq!(m.facing, Facing::Down);
        assert_eq!(m.frame, 0);
        assert!(m.is_idle());
    }

    #[test]
    fn advance_on_empty_path_is_noop() {
        let mut m = Mover::new(Cell::new(5, 5));
        m.facing = Facing::Left;
        m.frame = 1;
        let before = m.clone();

        assert!(!m.advance());
        assert_eq!(m, before);
    }

    #[test]
    fn teleport_clears_path() {
        let mut m = Mover::new(Cell::new(5, 5));
        m.set_path(vec![Cell::new(6, 5)]);
        m.teleport(Cell::new(24, 24));
        assert_eq!(m.position, Cell::new(24, 24));
        assert_eq!(m.previous, Cell::new(24, 24));
        assert!(m.is_idle());
    }
}
