//! World representation

pub mod map;
pub mod tile;

pub use map::Map;
pub use tile::{Tile, TileType};
