//! Movement system.
//!
//! Player and enemy moves are checked against `Grid::can_occupy` and only
//! update positions in the entity registry; terrain is never touched.

use log::debug;

use crate::game::state::World;
use crate::game::types::Direction;

/// Outcome of one enemy tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyStep {
    Moved,
    Bounced,
    Inactive,
}

/// Move the player one cell. Returns whether the move happened; a blocked
/// move is silently dropped.
pub fn move_player(world: &mut World, direction: Direction) -> bool {
    let (dx, dy) = direction.delta();
    let target = world.player.pos.offset(dx, dy);
    if !world.can_occupy(target) {
        debug!("[Movement] Player move {:?} to {:?} rejected", direction, target);
        return false;
    }
    world.player.pos = target;
    true
}

/// Turn the enemy at `index` around.
pub fn flip_enemy(world: &mut World, index: usize) {
    if let Some(enemy) = world.enemies.get_mut(index) {
        enemy.facing = enemy.facing.flipped();
    }
}

/// Advance the enemy at `index` one cell along its facing.
///
/// The enemy bounces (turns around without moving) when the next cell is
/// off its row, tangible, or holds the player. An inactive enemy only gets
/// its footprint cleared.
pub fn step_enemy(world: &mut World, index: usize) -> EnemyStep {
    let Some(enemy) = world.enemies.get(index) else {
        return EnemyStep::Inactive;
    };
    if !enemy.active {
        clear_inactive_footprint(world, index);
        return EnemyStep::Inactive;
    }

    let target = enemy.pos.offset(enemy.facing.dx(), 0);
    if !world.can_occupy(target) || target == world.player.pos {
        flip_enemy(world, index);
        return EnemyStep::Bounced;
    }

    world.enemies[index].pos = target;
    EnemyStep::Moved
}

/// Clear stale projectile markers under a defeated enemy. Markers of shots
/// still registered on that cell are kept. Returns whether anything changed;
/// calling it again is a no-op.
pub fn clear_inactive_footprint(world: &mut World, index: usize) -> bool {
    let pos = match world.enemies.get(index) {
        Some(enemy) if !enemy.active => enemy.pos,
        _ => return false,
    };
    let live = world.projectiles.iter().filter(|p| p.pos == pos).count() as u32;
    world.grid.trim_markers(pos, live)
}
