//! Level layouts
//!
//! A layout is a grid of single-character tokens, one string per row.
//! Loading the grid from disk (CSV or otherwise) happens outside this crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Layout validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("invalid level layout: no rows")]
    Empty,

    #[error("invalid level layout: no player spawn ('P')")]
    MissingSpawn,

    #[error("invalid level layout: {count} player spawns, expected exactly one")]
    MultipleSpawns { count: usize },
}

/// One grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Wall,
    Spawn,
    Finish,
    Npc,
    Collectible,
}

impl Cell {
    pub fn from_token(token: char) -> Self {
        match token {
            'X' => Cell::Wall,
            'P' => Cell::Spawn,
            'F' => Cell::Finish,
            'N' => Cell::Npc,
            'C' => Cell::Collectible,
            _ => Cell::Empty,
        }
    }
}

/// A validated level grid with exactly one player spawn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelLayout {
    rows: Vec<Vec<Cell>>,
    spawn: (usize, usize),
}

impl LevelLayout {
    /// Parse rows of tokens
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, LayoutError> {
        if rows.is_empty() {
            return Err(LayoutError::Empty);
        }

        let rows: Vec<Vec<Cell>> = rows
            .iter()
            .map(|row| row.as_ref().chars().map(Cell::from_token).collect())
            .collect();

        let spawns: Vec<(usize, usize)> = cells(&rows)
            .filter(|&(_, _, cell)| cell == Cell::Spawn)
            .map(|(row, col, _)| (row, col))
            .collect();

        match spawns.as_slice() {
            [] => Err(LayoutError::MissingSpawn),
            [spawn] => Ok(Self {
                spawn: *spawn,
                rows,
            }),
            _ => Err(LayoutError::MultipleSpawns {
                count: spawns.len(),
            }),
        }
    }

    /// (row, col) of the player spawn
    pub fn spawn(&self) -> (usize, usize) {
        self.spawn
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Longest row length (rows may be ragged)
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Every cell in row-major order as (row, col, cell)
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        cells(&self.rows)
    }
}

fn cells(rows: &[Vec<Cell>]) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
    rows.iter().enumerate().flat_map(|(row_index, row)| {
        row.iter()
            .enumerate()
            .map(move |(col_index, &cell)| (row_index, col_index, cell))
    })
}
