use serde::{Deserialize, Serialize};

use crate::config::game::{
    EMPTY_GLYPH, PROJECTILE_GLYPH, VEGETATION_GLYPH, WALL_GLYPH,
};

/// Grid coordinate. Signed so that a step off the top or left edge can be
/// represented and rejected by the bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Maps a raw movement key to a direction (WASD, either case).
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Horizontal heading of an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Right,
    Left,
}

impl Facing {
    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }

    pub fn dx(self) -> i32 {
        match self {
            Facing::Right => 1,
            Facing::Left => -1,
        }
    }
}

/// Terrain template. Entities are never stored in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Wall,
    Vegetation,
    Empty,
    /// Transient marker left by a projectile in flight.
    Projectile,
}

impl Tile {
    pub fn tangible(self) -> bool {
        matches!(self, Tile::Wall)
    }

    pub fn symbol(self) -> char {
        match self {
            Tile::Wall => WALL_GLYPH,
            Tile::Vegetation => VEGETATION_GLYPH,
            Tile::Empty => EMPTY_GLYPH,
            Tile::Projectile => PROJECTILE_GLYPH,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Position,
    pub facing: Facing,
    pub active: bool,
}

impl Enemy {
    pub fn new(pos: Position) -> Self {
        Self {
            pos,
            facing: Facing::Right,
            active: true,
        }
    }
}

/// A shot in flight. Always travels upward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u64,
    pub pos: Position,
}
