//! The world grid: terrain, building doors, props and resource nodes.
//!
//! Terrain is fixed after generation. Resource nodes are the only mutable
//! part: they deplete when gathered and come back on a timer.
//!
//! Walkability is checked in a fixed order: bounds, terrain flag, door
//! markers, then undepleted blocking resource nodes.

use runelight_logic::geometry::Cell;
use runelight_logic::pathfinding::Walkable;
use runelight_logic::templates::ResourceKind;
use runelight_logic::tiles::TileType;
use serde::{Deserialize, Serialize};

/// Index of a resource node in the grid's node table. Stable for the life
/// of the grid; nodes are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId(pub usize);

/// A gatherable node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceNode {
    pub cell: Cell,
    pub kind: ResourceKind,
    pub depleted: bool,
    /// Ticks until the node is gatherable again; only meaningful while depleted
    pub respawn_timer: u32,
}

impl ResourceNode {
    pub fn new(cell: Cell, kind: ResourceKind) -> Self {
        Self {
            cell,
            kind,
            depleted: false,
            respawn_timer: 0,
        }
    }

    /// Whether this node currently stops movement onto its cell.
    pub fn blocks(&self) -> bool {
        !self.depleted && self.kind.blocks_movement()
    }
}

/// Decorative props. Only doors affect movement, and those are tracked
/// separately in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropKind {
    Well,
    Lamp,
    Sign,
    Door,
    Bush,
    Flower,
    Tuft,
    Pebble,
    Stump,
    Reeds,
    Boulder,
}

impl PropKind {
    /// Kinds scattered randomly over grass.
    pub const SCATTER: [PropKind; 7] = [
        PropKind::Bush,
        PropKind::Flower,
        PropKind::Tuft,
        PropKind::Pebble,
        PropKind::Stump,
        PropKind::Reeds,
        PropKind::Boulder,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prop {
    pub cell: Cell,
    pub kind: PropKind,
}

/// A stamped building footprint and its door.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub name: String,
    pub origin: Cell,
    pub width: i32,
    pub height: i32,
    pub door: Cell,
}

/// Square tile map plus everything placed on it.
#[derive(Debug, Clone, Default)]
pub struct WorldGrid {
    size: i32,
    town_center: Cell,
    tiles: Vec<TileType>,
    doors: Vec<bool>,
    node_at: Vec<Option<ResourceId>>,
    resources: Vec<ResourceNode>,
    buildings: Vec<Building>,
    props: Vec<Prop>,
}

impl WorldGrid {
    /// All-grass grid of `size` × `size` cells.
    pub fn new(size: i32, town_center: Cell) -> Self {
        let size = size.max(0);
        let cells = (size * size) as usize;
        Self {
            size,
            town_center,
            tiles: vec![TileType::Grass; cells],
            doors: vec![false; cells],
            node_at: vec![None; cells],
            resources: Vec::new(),
            buildings: Vec::new(),
            props: Vec::new(),
        }
    }

    /// Build a grid from text rows, mostly for tests and tooling.
    ///
    /// `.` grass, `d` dirt, `s` stone, `~` water, `p` plank, `#` fence,
    /// `T` tree on grass, `R` rock on grass, `F` fish on water, `D` door on
    /// plank. The grid is square with the side taken from the row count;
    /// short rows are padded with grass and long rows are cut.
    pub fn from_ascii(rows: &[&str], town_center: Cell) -> Self {
        let mut grid = Self::new(rows.len() as i32, town_center);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate().take(grid.size as usize) {
                let cell = Cell::new(x as i32, y as i32);
                let tile = match ch {
                    'd' => TileType::Dirt,
                    's' => TileType::Stone,
                    '~' | 'F' => TileType::Water,
                    'p' | 'D' => TileType::Plank,
                    '#' => TileType::Fence,
                    _ => TileType::Grass,
                };
                grid.set_tile(cell, tile);
                match ch {
                    'T' => {
                        grid.add_resource(cell, ResourceKind::Tree);
                    }
                    'R' => {
                        grid.add_resource(cell, ResourceKind::Rock);
                    }
                    'F' => {
                        grid.add_resource(cell, ResourceKind::Fish);
                    }
                    'D' => grid.add_door(cell),
                    _ => {}
                }
            }
        }
        grid
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn town_center(&self) -> Cell {
        self.town_center
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.size && cell.y < self.size
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| (cell.y * self.size + cell.x) as usize)
    }

    pub fn tile(&self, cell: Cell) -> Option<TileType> {
        self.index(cell).map(|i| self.tiles[i])
    }

    /// Overwrite terrain. Out-of-bounds cells are ignored.
    pub fn set_tile(&mut self, cell: Cell, tile: TileType) {
        if let Some(i) = self.index(cell) {
            self.tiles[i] = tile;
        }
    }

    /// Mark a door cell. Doors are never walkable.
    pub fn add_door(&mut self, cell: Cell) {
        if let Some(i) = self.index(cell) {
            self.doors[i] = true;
        }
    }

    pub fn is_door(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|i| self.doors[i])
    }

    /// Stamp a stone footprint and put its door on the row just below the
    /// footprint, one cell in from the left edge.
    pub fn add_building(&mut self, name: &str, origin: Cell, width: i32, height: i32) -> Cell {
        for y in origin.y..origin.y + height {
            for x in origin.x..origin.x + width {
                self.set_tile(Cell::new(x, y), TileType::Stone);
            }
        }
        let door = origin.offset(1, height);
        self.add_door(door);
        self.props.push(Prop {
            cell: door,
            kind: PropKind::Door,
        });
        self.buildings.push(Building {
            name: name.to_string(),
            origin,
            width,
            height,
            door,
        });
        door
    }

    pub fn add_prop(&mut self, cell: Cell, kind: PropKind) {
        self.props.push(Prop { cell, kind });
    }

    /// Place a resource node. Returns `None` when the cell is out of bounds
    /// or already holds a node.
    pub fn add_resource(&mut self, cell: Cell, kind: ResourceKind) -> Option<ResourceId> {
        let i = self.index(cell)?;
        if self.node_at[i].is_some() {
            return None;
        }
        let id = ResourceId(self.resources.len());
        self.resources.push(ResourceNode::new(cell, kind));
        self.node_at[i] = Some(id);
        Some(id)
    }

    pub fn resource(&self, id: ResourceId) -> Option<&ResourceNode> {
        self.resources.get(id.0)
    }

    pub fn resource_mut(&mut self, id: ResourceId) -> Option<&mut ResourceNode> {
        self.resources.get_mut(id.0)
    }

    pub fn resource_at(&self, cell: Cell) -> Option<ResourceId> {
        self.index(cell).and_then(|i| self.node_at[i])
    }

    pub fn resources(&self) -> &[ResourceNode] {
        &self.resources
    }

    pub fn resources_mut(&mut self) -> &mut [ResourceNode] {
        &mut self.resources
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn props(&self) -> &[Prop] {
        &self.props
    }

    /// Can an actor step onto `cell`? Fails closed outside the grid.
    pub fn is_walkable(&self, cell: Cell) -> bool {
        let Some(i) = self.index(cell) else {
            return false;
        };
        if !self.tiles[i].walkable() {
            return false;
        }
        if self.doors[i] {
            return false;
        }
        if let Some(id) = self.node_at[i] {
            if self.resources[id.0].blocks() {
                return false;
            }
        }
        true
    }

    /// First walkable neighbour of `cell`, checked in the order +x, -x, +y, -y.
    pub fn adjacent_walkable(&self, cell: Cell) -> Option<Cell> {
        cell.neighbors().into_iter().find(|&n| self.is_walkable(n))
    }

    /// Number of cells of each terrain type, in [`TileType::ALL`] order.
    pub fn tile_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for tile in &self.tiles {
            if let Some(i) = TileType::ALL.iter().position(|t| t == tile) {
                counts[i] += 1;
            }
        }
        counts
    }
}

impl Walkable for WorldGrid {
    fn is_walkable(&self, cell: Cell) -> bool {
        WorldGrid::is_walkable(self, cell)
    }
}
