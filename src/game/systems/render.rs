//! Render composition.
//!
//! The frame shown to the player is built by layering entities over a copy
//! of the terrain; the terrain itself never holds entities.

use std::io;

use crate::config::game::{ENEMY_GLYPH, PLAYER_GLYPH};
use crate::game::state::Snapshot;
use crate::game::types::{Position, Tile};

/// One displayed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Terrain(Tile),
    Player,
    Enemy,
    DefeatedEnemy,
}

impl Glyph {
    pub fn symbol(self) -> char {
        match self {
            Glyph::Terrain(tile) => tile.symbol(),
            Glyph::Player => PLAYER_GLYPH,
            Glyph::Enemy | Glyph::DefeatedEnemy => ENEMY_GLYPH,
        }
    }
}

/// Output side of the game. Implementations paint snapshots and the two
/// end screens.
pub trait Renderer: Send {
    fn draw(&mut self, snapshot: &Snapshot) -> io::Result<()>;

    /// Shown once every enemy is defeated.
    fn victory(&mut self) -> io::Result<()>;

    /// Shown when the countdown runs out.
    fn timeout(&mut self) -> io::Result<()>;

    /// Give the terminal back. Must be safe to call more than once.
    fn restore(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Layer terrain, defeated enemies, active enemies and finally the player.
pub fn compose(snapshot: &Snapshot) -> Vec<Vec<Glyph>> {
    let mut frame: Vec<Vec<Glyph>> = snapshot
        .tiles
        .iter()
        .map(|row| row.iter().map(|tile| Glyph::Terrain(*tile)).collect())
        .collect();

    let defeated = snapshot.enemies.iter().filter(|e| !e.active);
    for enemy in defeated {
        put(&mut frame, enemy.pos, Glyph::DefeatedEnemy);
    }
    for enemy in snapshot.enemies.iter().filter(|e| e.active) {
        put(&mut frame, enemy.pos, Glyph::Enemy);
    }
    put(&mut frame, snapshot.player, Glyph::Player);

    frame
}

fn put(frame: &mut [Vec<Glyph>], pos: Position, glyph: Glyph) {
    if pos.x < 0 || pos.y < 0 {
        return;
    }
    if let Some(cell) = frame
        .get_mut(pos.y as usize)
        .and_then(|row| row.get_mut(pos.x as usize))
    {
        *cell = glyph;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::parse_map;
    use crate::game::state::World;

    #[test]
    fn entities_are_overlaid_not_stored() {
        let mut world = World::from_map(parse_map("▤☺ ☠\n ♣  "));
        world.enemies.push(crate::game::types::Enemy {
            pos: Position::new(1, 1),
            facing: crate::game::types::Facing::Left,
            active: false,
        });
        world.grid.mark_projectile(Position::new(2, 0));

        let frame = compose(&world.snapshot(60));
        assert_eq!(frame[0][0], Glyph::Terrain(Tile::Wall));
        assert_eq!(frame[0][1], Glyph::Player);
        assert_eq!(frame[0][2], Glyph::Terrain(Tile::Projectile));
        assert_eq!(frame[0][3], Glyph::Enemy);
        assert_eq!(frame[1][1], Glyph::DefeatedEnemy);
        assert_eq!(world.grid.terrain(Position::new(1, 1)), Some(Tile::Vegetation));
        assert_eq!(world.grid.terrain(Position::new(3, 0)), Some(Tile::Empty));
    }

    #[test]
    fn player_is_drawn_over_an_enemy_on_the_same_cell() {
        let mut world = World::from_map(parse_map("☺ "));
        world.enemies.push(crate::game::types::Enemy::new(Position::new(0, 0)));
        let frame = compose(&world.snapshot(10));
        assert_eq!(frame[0][0], Glyph::Player);
        assert_eq!(frame[0][0].symbol(), '☺');
    }
}
