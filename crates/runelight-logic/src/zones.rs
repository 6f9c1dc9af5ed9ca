//! Named zones of the map.

use serde::{Deserialize, Serialize};

use crate::geometry::Cell;

/// Manhattan radius around the town centre that counts as town.
pub const TOWN_RADIUS: u32 = 14;
/// Rows above this are the northern barrens.
pub const NORTH_EDGE: i32 = 18;
/// Rows below this are the wilderness.
pub const SOUTH_EDGE: i32 = 60;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    #[default]
    Timbercross,
    NorthernBarrens,
    Wilderness,
    OuterFields,
}

impl Zone {
    pub fn name(self) -> &'static str {
        match self {
            Zone::Timbercross => "Timbercross",
            Zone::NorthernBarrens => "Northern Barrens",
            Zone::Wilderness => "Wilderness",
            Zone::OuterFields => "Outer Fields",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Zone containing `cell`. Town takes precedence over the north/south bands.
pub fn zone_at(cell: Cell, town_center: Cell) -> Zone {
    if cell.manhattan(town_center) < TOWN_RADIUS {
        Zone::Timbercross
    } else if cell.y < NORTH_EDGE {
        Zone::NorthernBarrens
    } else if cell.y > SOUTH_EDGE {
        Zone::Wilderness
    } else {
        Zone::OuterFields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Cell = Cell::new(24, 24);

    #[test]
    fn town_centre_is_timbercross() {
        assert_eq!(zone_at(CENTER, CENTER), Zone::Timbercross);
        assert_eq!(zone_at(Cell::new(24, 11), CENTER), Zone::Timbercross);
    }

    #[test]
    fn town_radius_is_exclusive() {
        // Distance 14 straight north is outside town and in the north band
        assert_eq!(zone_at(Cell::new(24, 10), CENTER), Zone::NorthernBarrens);
        // Distance 14 east is outer fields
        assert_eq!(zone_at(Cell::new(38, 24), CENTER), Zone::OuterFields);
    }

    #[test]
    fn southern_band() {
        assert_eq!(zone_at(Cell::new(50, 61), CENTER), Zone::Wilderness);
        assert_eq!(zone_at(Cell::new(50, 60), CENTER), Zone::OuterFields);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Zone::NorthernBarrens.to_string(), "Northern Barrens");
    }
}
