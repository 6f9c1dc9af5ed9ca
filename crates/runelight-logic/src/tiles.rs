//! Terrain tile types.

use serde::{Deserialize, Serialize};

/// Base terrain of a grid cell. Terrain never changes after generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    #[default]
    Grass,
    Dirt,
    Stone,
    Water,
    Plank,
    Fence,
}

impl TileType {
    pub const ALL: [TileType; 6] = [
        TileType::Grass,
        TileType::Dirt,
        TileType::Stone,
        TileType::Water,
        TileType::Plank,
        TileType::Fence,
    ];

    /// Whether the terrain itself can be walked on. Doors and resource nodes
    /// can still block a walkable tile.
    pub fn walkable(self) -> bool {
        !matches!(self, TileType::Water | TileType::Fence)
    }

    pub fn name(self) -> &'static str {
        match self {
            TileType::Grass => "grass",
            TileType::Dirt => "dirt",
            TileType::Stone => "stone",
            TileType::Water => "water",
            TileType::Plank => "plank",
            TileType::Fence => "fence",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_water_and_fence_block() {
        let blocking: Vec<_> = TileType::ALL.iter().filter(|t| !t.walkable()).collect();
        assert_eq!(blocking, vec![&TileType::Water, &TileType::Fence]);
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = TileType::ALL.iter().map(|t| t.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TileType::ALL.len());
    }
}
