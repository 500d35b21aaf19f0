//! Grid and entity registry for one round.
//!
//! `World` is plain data; the session wraps it in a mutex and every system
//! receives `&mut World` while that lock is held.

use serde::Serialize;

use crate::game::grid::{Grid, LoadedMap};
use crate::game::types::{Enemy, Player, Position, Projectile, Tile};

#[derive(Debug, Clone)]
pub struct World {
    pub grid: Grid,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub status_msg: String,
}

impl World {
    pub fn new(grid: Grid, player: Position, enemies: Vec<Enemy>) -> Self {
        World {
            grid,
            player: Player { pos: player },
            enemies,
            projectiles: Vec::new(),
            status_msg: String::new(),
        }
    }

    pub fn from_map(map: LoadedMap) -> Self {
        Self::new(map.grid, map.player, map.enemies)
    }

    pub fn can_occupy(&self, pos: Position) -> bool {
        self.grid.can_occupy(pos)
    }

    pub fn active_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| e.active).count()
    }

    pub fn snapshot(&self, seconds_remaining: i64) -> Snapshot {
        Snapshot {
            tiles: self.grid.display_rows(),
            player: self.player.pos,
            enemies: self.enemies.clone(),
            projectiles: self.projectiles.len(),
            seconds_remaining,
            status_msg: self.status_msg.clone(),
        }
    }
}

/// Consistent, point-in-time copy of everything the renderer needs.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub tiles: Vec<Vec<Tile>>,
    pub player: Position,
    pub enemies: Vec<Enemy>,
    pub projectiles: usize,
    pub seconds_remaining: i64,
    pub status_msg: String,
}
