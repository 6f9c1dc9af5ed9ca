//! Floating damage numbers

use runelight_logic::geometry::Cell;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageMarker {
    pub cell: Cell,
    pub text: String,
    /// Remaining ticks on screen
    pub ttl: u32,
}

impl DamageMarker {
    pub fn damage(cell: Cell, amount: i32, ttl: u32) -> Self {
        Self {
            cell,
            text: format!("-{amount}"),
            ttl,
        }
    }
}

/// Age every marker by one tick and drop the expired ones.
pub fn marker_system(markers: &mut Vec<DamageMarker>) {
    for marker in markers.iter_mut() {
        marker.ttl = marker.ttl.saturating_sub(1);
    }
    markers.retain(|m| m.ttl > 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_expire() {
        let mut markers = vec![
            DamageMarker::damage(Cell::new(1, 1), 3, 1),
            DamageMarker::damage(Cell::new(2, 2), 5, 2),
        ];
        assert_eq!(markers[1].text, "-5");
        marker_system(&mut markers);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].ttl, 1);
        marker_system(&mut markers);
        assert!(markers.is_empty());
    }
}
