//! Tile definitions

use serde::{Deserialize, Serialize};

/// What kind of terrain a tile is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileType {
    Floor,
    Wall,
}

/// A single map tile
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tile {
    pub tile_type: TileType,
}

impl Tile {
    pub fn floor() -> Self {
        Self { tile_type: TileType::Floor }
    }

    pub fn wall() -> Self {
        Self { tile_type: TileType::Wall }
    }

    pub fn is_walkable(&self) -> bool {
        matches!(self.tile_type, TileType::Floor)
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::wall()
    }
}
