//! Terrain generation - fields, the walled town of Timbercross, props and
//! resource nodes.

use rand::Rng;
use runelight_logic::geometry::Cell;
use runelight_logic::templates::ResourceKind;
use runelight_logic::tiles::TileType;

use super::sample_cell;
use crate::config::WorldConfig;
use crate::world::{PropKind, WorldGrid};

/// Town buildings: name, offset of the top-left corner from the town centre,
/// width, height.
const BUILDINGS: [(&str, i32, i32, i32, i32); 5] = [
    ("Bank", -5, -4, 4, 3),
    ("Shop", 1, -4, 4, 3),
    ("Town Hall", -7, 2, 4, 3),
    ("House", 3, 2, 4, 3),
    ("House", -2, 2, 4, 3),
];

/// Hand-placed props around the town centre.
const TOWN_PROPS: [(i32, i32, PropKind); 6] = [
    (0, 0, PropKind::Well),
    (-3, -6, PropKind::Lamp),
    (3, -6, PropKind::Lamp),
    (-3, 6, PropKind::Lamp),
    (3, 6, PropKind::Lamp),
    (6, 0, PropKind::Sign),
];

/// Generate the complete world grid.
pub fn generate_world(config: &WorldConfig, rng: &mut impl Rng) -> WorldGrid {
    let mut grid = WorldGrid::new(config.size, config.town_center);

    fill_terrain(&mut grid, config, rng);
    build_town(&mut grid, config);
    scatter_props(&mut grid, config, rng);

    let bounds = config.resource_bounds();
    let trees = place_resources(&mut grid, ResourceKind::Tree, config.tree_attempts, TileType::Grass, bounds, rng);
    let rocks = place_resources(&mut grid, ResourceKind::Rock, config.rock_attempts, TileType::Grass, bounds, rng);
    let fish = place_resources(&mut grid, ResourceKind::Fish, config.fish_attempts, TileType::Water, bounds, rng);

    log::info!(
        "Generated {0}x{0} world: {1} trees, {2} rocks, {3} fishing spots, {4} props",
        config.size,
        trees,
        rocks,
        fish,
        grid.props().len()
    );

    grid
}

/// Grass everywhere, water along the border band, then independent stone
/// and dirt rolls per cell. Later rolls overwrite earlier ones.
fn fill_terrain(grid: &mut WorldGrid, config: &WorldConfig, rng: &mut impl Rng) {
    let size = config.size;
    let band = config.edge_band;
    for y in 0..size {
        for x in 0..size {
            let mut tile = TileType::Grass;
            let edge = x < band || y < band || x > size - 1 - band || y > size - 1 - band;
            if edge && rng.gen::<f64>() < config.water_chance {
                tile = TileType::Water;
            }
            if rng.gen::<f64>() < config.stone_chance {
                tile = TileType::Stone;
            }
            if rng.gen::<f64>() < config.dirt_chance {
                tile = TileType::Dirt;
            }
            grid.set_tile(Cell::new(x, y), tile);
        }
    }
}

/// Plank floor, fence ring with four dirt gates, buildings and fixed props.
fn build_town(grid: &mut WorldGrid, config: &WorldConfig) {
    let c = config.town_center;
    let hw = config.town_half_width;
    let hh = config.town_half_height;

    for y in c.y - hh..=c.y + hh {
        for x in c.x - hw..=c.x + hw {
            grid.set_tile(Cell::new(x, y), TileType::Plank);
        }
    }

    let (fw, fh) = (hw + 1, hh + 1);
    for y in c.y - fh..=c.y + fh {
        for x in c.x - fw..=c.x + fw {
            if y == c.y - fh || y == c.y + fh || x == c.x - fw || x == c.x + fw {
                grid.set_tile(Cell::new(x, y), TileType::Fence);
            }
        }
    }

    for gate in [c.offset(0, -fh), c.offset(0, fh), c.offset(-fw, 0), c.offset(fw, 0)] {
        grid.set_tile(gate, TileType::Dirt);
    }

    for (name, dx, dy, w, h) in BUILDINGS {
        grid.add_building(name, c.offset(dx, dy), w, h);
    }

    for (dx, dy, kind) in TOWN_PROPS {
        grid.add_prop(c.offset(dx, dy), kind);
    }
}

/// Random decorative props, only on grass. Misses are dropped.
fn scatter_props(grid: &mut WorldGrid, config: &WorldConfig, rng: &mut impl Rng) {
    for _ in 0..config.prop_attempts {
        let cell = sample_cell(rng, config.prop_bounds());
        if grid.tile(cell) == Some(TileType::Grass) {
            let kind = PropKind::SCATTER[rng.gen_range(0..PropKind::SCATTER.len())];
            grid.add_prop(cell, kind);
        }
    }
}

/// Rejection-sample resource nodes onto `base` terrain. Returns how many
/// attempts produced a node.
pub fn place_resources(
    grid: &mut WorldGrid,
    kind: ResourceKind,
    attempts: u32,
    base: TileType,
    bounds: (i32, i32),
    rng: &mut impl Rng,
) -> usize {
    let mut placed = 0;
    for _ in 0..attempts {
        let cell = sample_cell(rng, bounds);
        if grid.tile(cell) == Some(base) && grid.add_resource(cell, kind).is_some() {
            placed += 1;
        }
    }
    placed
}
