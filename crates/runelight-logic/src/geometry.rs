//! Grid cells and facing.

use serde::{Deserialize, Serialize};

/// A tile coordinate. Signed so that random offsets around an entity can
/// leave the map; walkability checks reject those cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Taxicab distance, used for adjacency and zone checks.
    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// King-move distance, used for NPC click hit-boxes.
    pub fn chebyshev(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// The four orthogonal neighbours in search order: +x, -x, +y, -y.
    pub fn neighbors(self) -> [Cell; 4] {
        [
            self.offset(1, 0),
            self.offset(-1, 0),
            self.offset(0, 1),
            self.offset(0, -1),
        ]
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction a sprite faces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    /// Facing after a step from `from` to `to`.
    ///
    /// Four independent checks run in the order right, left, down, up and the
    /// last one that holds wins, so a diagonal step faces vertically.
    /// Returns `current` when the cells are equal.
    pub fn after_step(current: Facing, from: Cell, to: Cell) -> Facing {
        let mut facing = current;
        if to.x > from.x {
            facing = Facing::Right;
        }
        if to.x < from.x {
            facing = Facing::Left;
        }
        if to.y > from.y {
            facing = Facing::Down;
        }
        if to.y < from.y {
            facing = Facing::Up;
        }
        facing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Cell::new(24, 24);
        let b = Cell::new(10, 10);
        assert_eq!(a.manhattan(b), 28);
        assert_eq!(a.chebyshev(b), 14);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn neighbor_order() {
        let n = Cell::new(5, 5).neighbors();
        assert_eq!(n[0], Cell::new(6, 5));
        assert_eq!(n[1], Cell::new(4, 5));
        assert_eq!(n[2], Cell::new(5, 6));
        assert_eq!(n[3], Cell::new(5, 4));
    }

    #[test]
    fn facing_cardinal_steps() {
        let c = Cell::new(3, 3);
        assert_eq!(Facing::after_step(Facing::Down, c, c.offset(1, 0)), Facing::Right);
        assert_eq!(Facing::after_step(Facing::Down, c, c.offset(-1, 0)), Facing::Left);
        assert_eq!(Facing::after_step(Facing::Left, c, c.offset(0, 1)), Facing::Down);
        assert_eq!(Facing::after_step(Facing::Down, c, c.offset(0, -1)), Facing::Up);
    }

    #[test]
    fn facing_diagonal_prefers_vertical() {
        let c = Cell::new(3, 3);
        assert_eq!(Facing::after_step(Facing::Down, c, c.offset(1, -1)), Facing::Up);
        assert_eq!(Facing::after_step(Facing::Up, c, c.offset(-1, 1)), Facing::Down);
    }

    #[test]
    fn facing_unchanged_without_delta() {
        let c = Cell::new(3, 3);
        assert_eq!(Facing::after_step(Facing::Left, c, c), Facing::Left);
    }
}
