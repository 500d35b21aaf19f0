//! Map loading.
//!
//! Each line of the map file is a row. Walls and vegetation become terrain,
//! the player and enemy glyphs record spawn positions over empty ground, and
//! any other character is empty ground.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use super::Grid;
use crate::config::game::{ENEMY_GLYPH, PLAYER_GLYPH, VEGETATION_GLYPH, WALL_GLYPH};
use crate::game::types::{Enemy, Position, Tile};

#[derive(Debug, Error)]
pub enum MapLoadError {
    #[error("failed to read map '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Initial round state produced from a map.
#[derive(Debug, Clone)]
pub struct LoadedMap {
    pub grid: Grid,
    pub player: Position,
    pub enemies: Vec<Enemy>,
}

/// Read and parse the map at `path`.
pub fn load_map(path: impl AsRef<Path>) -> Result<LoadedMap, MapLoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| MapLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let map = parse_map(&text);
    info!(
        "[MapLoader] Loaded '{}': {} rows, {} enemies",
        path.display(),
        map.grid.height(),
        map.enemies.len()
    );
    Ok(map)
}

/// Parse map text. Columns are counted in characters, not bytes.
pub fn parse_map(text: &str) -> LoadedMap {
    let mut rows = Vec::new();
    let mut player = None;
    let mut enemies = Vec::new();

    for (y, line) in text.lines().enumerate() {
        let mut row = Vec::new();
        for (x, ch) in line.chars().enumerate() {
            let pos = Position::new(x as i32, y as i32);
            let tile = match ch {
                WALL_GLYPH => Tile::Wall,
                VEGETATION_GLYPH => Tile::Vegetation,
                ENEMY_GLYPH => {
                    enemies.push(Enemy::new(pos));
                    Tile::Empty
                }
                PLAYER_GLYPH => {
                    player = Some(pos);
                    Tile::Empty
                }
                _ => Tile::Empty,
            };
            row.push(tile);
        }
        rows.push(row);
    }

    let player = player.unwrap_or_else(|| {
        warn!("[MapLoader] No player glyph found, spawning at (0, 0)");
        Position::new(0, 0)
    });

    LoadedMap {
        grid: Grid::new(rows),
        player,
        enemies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Facing;

    #[test]
    fn parses_terrain_and_spawns() {
        let map = parse_map("▤▤▤▤\n▤☺ ☠\n▤♣\n");
        assert_eq!(map.grid.height(), 3);
        assert_eq!(map.grid.row_width(2), 2);
        assert_eq!(map.player, Position::new(1, 1));
        assert_eq!(map.enemies.len(), 1);
        assert_eq!(map.enemies[0].pos, Position::new(3, 1));
        assert_eq!(map.enemies[0].facing, Facing::Right);
        assert!(map.enemies[0].active);
        assert_eq!(map.grid.terrain(Position::new(1, 2)), Some(Tile::Vegetation));
        assert_eq!(map.grid.terrain(Position::new(3, 1)), Some(Tile::Empty));
        assert_eq!(map.grid.terrain(Position::new(1, 1)), Some(Tile::Empty));
    }

    #[test]
    fn unknown_characters_are_empty() {
        let map = parse_map("x#.");
        for x in 0..3 {
            assert_eq!(map.grid.terrain(Position::new(x, 0)), Some(Tile::Empty));
        }
    }

    #[test]
    fn missing_player_defaults_to_origin() {
        assert_eq!(parse_map("   ").player, Position::new(0, 0));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_map("definitely/not/here.txt").unwrap_err();
        let MapLoadError::Io { path, .. } = &err;
        assert_eq!(path, Path::new("definitely/not/here.txt"));
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }
}
