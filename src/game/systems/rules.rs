//! Hit resolution and win condition.

use log::{debug, info};

use crate::game::state::World;
use crate::game::types::{Position, Projectile};

/// What happened when a projectile reached a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileStep {
    /// The row is outside the grid.
    OutOfBounds,
    /// An active enemy was on the cell and has been deactivated.
    Hit { enemy: usize },
    /// The cell is tangible or off the end of its row.
    Absorbed,
    /// The cell is now marked as crossed by the projectile.
    Advanced,
}

/// Register a freshly fired projectile.
pub fn spawn_projectile(world: &mut World, projectile: Projectile) {
    world.projectiles.push(projectile);
}

/// Resolve projectile `id` arriving at `pos`.
pub fn projectile_enter(world: &mut World, id: u64, pos: Position) -> ProjectileStep {
    if pos.y < 0 || pos.y as usize >= world.grid.height() {
        return ProjectileStep::OutOfBounds;
    }

    // The shot never marked this cell, so there is nothing to clear.
    if let Some(enemy) = deactivate_enemy_at(world, pos) {
        world.status_msg = format!("Enemy down! {} remaining", world.active_enemies());
        return ProjectileStep::Hit { enemy };
    }

    if !world.can_occupy(pos) {
        return ProjectileStep::Absorbed;
    }

    world.grid.mark_projectile(pos);
    if let Some(projectile) = world.projectiles.iter_mut().find(|p| p.id == id) {
        projectile.pos = pos;
    }
    ProjectileStep::Advanced
}

/// Remove this projectile's marker from `pos` before it moves on. Other
/// shots on the same cell keep theirs.
pub fn projectile_leave(world: &mut World, pos: Position) {
    world.grid.clear_marker(pos);
}

/// Drop projectile `id` from the registry.
pub fn retire_projectile(world: &mut World, id: u64) {
    if let Some(index) = world.projectiles.iter().position(|p| p.id == id) {
        let projectile = world.projectiles.remove(index);
        debug!("[Rules] Projectile {} retired at {:?}", id, projectile.pos);
    }
}

/// Deactivate the first active enemy on `pos`, if any.
pub fn deactivate_enemy_at(world: &mut World, pos: Position) -> Option<usize> {
    let index = world
        .enemies
        .iter()
        .position(|e| e.active && e.pos == pos)?;
    world.enemies[index].active = false;
    info!("[Rules] Enemy {} defeated at {:?}", index, pos);
    Some(index)
}

pub fn all_enemies_defeated(world: &World) -> bool {
    world.enemies.iter().all(|e| !e.active)
}
