//! Generation - procedural creation of the map and its inhabitants.

mod actors;
mod terrain;

pub use actors::*;
pub use terrain::*;

use rand::Rng;
use runelight_logic::geometry::Cell;

/// Uniform random cell with both coordinates in the inclusive `bounds`.
pub fn sample_cell(rng: &mut impl Rng, bounds: (i32, i32)) -> Cell {
    let lo = bounds.0.max(0);
    let hi = bounds.1.max(lo);
    Cell::new(rng.gen_range(lo..=hi), rng.gen_range(lo..=hi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sample_cell_covers_inclusive_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let (mut min, mut max) = (i32::MAX, i32::MIN);
        for _ in 0..2000 {
            let c = sample_cell(&mut rng, (12, 84));
            assert!((12..=84).contains(&c.x));
            assert!((12..=84).contains(&c.y));
            min = min.min(c.x);
            max = max.max(c.x);
        }
        assert_eq!((min, max), (12, 84));
    }

    #[test]
    fn sample_cell_inverted_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sample_cell(&mut rng, (10, 3)), Cell::new(10, 10));
    }
}
