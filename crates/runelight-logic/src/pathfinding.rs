//! Grid pathfinding.
//!
//! A* over the 4-connected tile grid with a Manhattan-distance heuristic.
//! Every step costs 1, so the heuristic is consistent and the first time the
//! goal is popped the path is a shortest one.
//!
//! The open set is ordered by `(f, h, y, x)`, which makes the returned path a
//! pure function of the walkability map and the endpoints.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::geometry::Cell;

/// Anything that can answer "can an entity stand on this cell?".
///
/// Implementations must fail closed outside a finite region, otherwise the
/// search for an unreachable goal never terminates.
pub trait Walkable {
    fn is_walkable(&self, cell: Cell) -> bool;
}

impl<F> Walkable for F
where
    F: Fn(Cell) -> bool,
{
    fn is_walkable(&self, cell: Cell) -> bool {
        self(cell)
    }
}

/// Find a shortest path from `start` to `goal`.
///
/// The result excludes `start` and ends with `goal`. It is empty when
/// `start == goal` or when no path exists. The start cell is never tested
/// for walkability; the goal cell is, so callers targeting a blocked cell
/// (a tree, a monster) must pass a walkable neighbour instead.
pub fn find_path<W: Walkable + ?Sized>(grid: &W, start: Cell, goal: Cell) -> Vec<Cell> {
    if start == goal {
        return Vec::new();
    }

    // (f, h, y, x, g)
    let mut open: BinaryHeap<Reverse<(u32, u32, i32, i32, u32)>> = BinaryHeap::new();
    let mut came_from: HashMap<Cell, Cell> = HashMap::new();
    let mut g_score: HashMap<Cell, u32> = HashMap::new();

    let h = start.manhattan(goal);
    open.push(Reverse((h, h, start.y, start.x, 0)));
    g_score.insert(start, 0);

    while let Some(Reverse((_, _, y, x, g))) = open.pop() {
        let current = Cell::new(x, y);
        if current == goal {
            return reconstruct(&came_from, start, goal);
        }

        // Skip stale heap entries
        if g_score.get(&current).is_some_and(|&best| g > best) {
            continue;
        }

        for next in current.neighbors() {
            if !grid.is_walkable(next) {
                continue;
            }
            let tentative = g + 1;
            let improved = g_score.get(&next).map_or(true, |&old| tentative < old);
            if improved {
                came_from.insert(next, current);
                g_score.insert(next, tentative);
                let h = next.manhattan(goal);
                open.push(Reverse((tentative + h, h, next.y, next.x, tentative)));
            }
        }
    }

    Vec::new()
}

fn reconstruct(came_from: &HashMap<Cell, Cell>, start: Cell, goal: Cell) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut node = goal;
    while let Some(&prev) = came_from.get(&node) {
        if prev == start {
            break;
        }
        path.push(prev);
        node = prev;
    }
    path.reverse();
    path
}
