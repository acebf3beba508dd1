//! Map data structure
//!
//! The 2D grid the simulation plays out on. Blast origins must resolve to
//! an in-bounds tile before a detonation is allowed to proceed.

use super::tile::{Tile, TileType};
use crate::ecs::Position;

/// A single simulated area
#[derive(Debug, Clone)]
pub struct Map {
    pub width: i32,
    pub height: i32,
    pub tiles: Vec<Tile>,
}

impl Map {
    /// Create a new map filled with walls
    pub fn new(width: i32, height: i32) -> Self {
        let tiles = vec![Tile::default(); (width * height) as usize];
        Self { width, height, tiles }
    }

    /// Create a new map filled with open floor
    pub fn open(width: i32, height: i32) -> Self {
        let tiles = vec![Tile::floor(); (width * height) as usize];
        Self { width, height, tiles }
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn xy_to_idx(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Get tile at position
    pub fn get_tile(&self, pos: Position) -> Option<&Tile> {
        if self.in_bounds(pos) {
            Some(&self.tiles[self.xy_to_idx(pos.x, pos.y)])
        } else {
            None
        }
    }

    /// Set tile type at position
    pub fn set_tile(&mut self, pos: Position, tile_type: TileType) {
        if self.in_bounds(pos) {
            let idx = self.xy_to_idx(pos.x, pos.y);
            self.tiles[idx].tile_type = tile_type;
        }
    }

    /// Check if a position is walkable
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.get_tile(pos).map_or(false, |t| t.is_walkable())
    }
}
