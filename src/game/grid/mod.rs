//! Terrain grid.
//!
//! Rows may have different lengths, matching the lines of the map file.
//! Projectile markers are kept beside the terrain so that a shot flying over
//! vegetation never overwrites it. Markers are counted per cell, so two shots
//! crossing the same cell each keep it marked until they leave.

pub mod loader;

use std::collections::HashMap;

use crate::game::types::{Position, Tile};

pub use loader::{load_map, LoadedMap};
#[cfg(test)]
pub use loader::parse_map;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Tile>>,
    markers: HashMap<Position, u32>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Tile>>) -> Self {
        Self {
            rows,
            markers: HashMap::new(),
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of row `y`, or 0 when the row does not exist.
    pub fn row_width(&self, y: i32) -> usize {
        usize::try_from(y)
            .ok()
            .and_then(|y| self.rows.get(y))
            .map_or(0, Vec::len)
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.y >= 0
            && (pos.y as usize) < self.height()
            && pos.x >= 0
            && (pos.x as usize) < self.row_width(pos.y)
    }

    /// Terrain at `pos`, ignoring projectile markers.
    pub fn terrain(&self, pos: Position) -> Option<Tile> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(self.rows[pos.y as usize][pos.x as usize])
    }

    /// The one movement predicate shared by the player, enemies and projectiles.
    pub fn can_occupy(&self, pos: Position) -> bool {
        match self.terrain(pos) {
            Some(tile) => !tile.tangible(),
            None => false,
        }
    }

    /// Marks `pos` as crossed by one more projectile. Out-of-bounds cells
    /// are ignored.
    pub fn mark_projectile(&mut self, pos: Position) {
        if self.in_bounds(pos) {
            *self.markers.entry(pos).or_insert(0) += 1;
        }
    }

    /// Removes one projectile's marker. Returns whether one was present.
    pub fn clear_marker(&mut self, pos: Position) -> bool {
        self.trim_markers(pos, self.marker_count(pos).saturating_sub(1))
    }

    /// Caps the markers on `pos` at `keep`. Returns whether any were removed.
    pub fn trim_markers(&mut self, pos: Position, keep: u32) -> bool {
        let count = self.marker_count(pos);
        if count <= keep {
            return false;
        }
        if keep == 0 {
            self.markers.remove(&pos);
        } else {
            self.markers.insert(pos, keep);
        }
        true
    }

    pub fn marker_count(&self, pos: Position) -> u32 {
        self.markers.get(&pos).copied().unwrap_or(0)
    }

    /// Displayed tiles, row by row, with markers applied.
    pub fn display_rows(&self) -> Vec<Vec<Tile>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, tile)| {
                        if self.markers.contains_key(&Position::new(x as i32, y as i32)) {
                            Tile::Projectile
                        } else {
                            *tile
                        }
                    })
                    .collect()
            })
            .collect()
    }
}
