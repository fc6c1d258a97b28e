//! Static level geometry
//!
//! Tiles keep layout (row-major) order. Collision passes rely on that order
//! for their tie-break, so the vector is never sorted or compacted.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout::{Cell, LevelLayout};
use super::rect::Rect;

/// Tile types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Wall,
    /// Solid like a wall; touching it completes the level
    Finish,
}

/// A solid tile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub rect: Rect,
    pub kind: TileKind,
}

/// All solid tiles of one level
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TileMap {
    tiles: Vec<Tile>,
    tile_size: f32,
}

impl TileMap {
    pub fn new(tiles: Vec<Tile>, tile_size: f32) -> Self {
        Self { tiles, tile_size }
    }

    /// Build wall and finish tiles from a layout
    pub fn from_layout(layout: &LevelLayout, tile_size: f32) -> Self {
        let tiles = layout
            .cells()
            .filter_map(|(row, col, cell)| {
                let kind = match cell {
                    Cell::Wall => TileKind::Wall,
                    Cell::Finish => TileKind::Finish,
                    _ => return None,
                };
                Some(Tile {
                    rect: Rect::new(
                        col as f32 * tile_size,
                        row as f32 * tile_size,
                        tile_size,
                        tile_size,
                    ),
                    kind,
                })
            })
            .collect();
        Self::new(tiles, tile_size)
    }

    /// Top-left world position of a grid cell
    pub fn cell_origin(&self, row: usize, col: usize) -> Vec2 {
        Vec2::new(col as f32 * self.tile_size, row as f32 * self.tile_size)
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in layout order
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// All tiles whose rectangle intersects `rect`
    pub fn query(&self, rect: Rect) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(move |t| t.rect.intersects(&rect))
    }

    pub fn finish_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| t.kind == TileKind::Finish)
    }

    /// Slide every tile horizontally (camera scroll)
    pub fn shift(&mut self, dx: f32) {
        if dx == 0.0 {
            return;
        }
        for tile in &mut self.tiles {
            tile.rect.translate_x(dx);
        }
    }
}
