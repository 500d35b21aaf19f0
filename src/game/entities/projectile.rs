//! Projectile flight.
//!
//! Each shot runs in its own task, moving up one row per flight delay until
//! it hits an enemy, is absorbed by a wall, or leaves the grid.

use std::sync::Arc;

use log::debug;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::game::session::GameSession;
use crate::game::systems::{
    projectile_enter, projectile_leave, retire_projectile, spawn_projectile, ProjectileStep,
};
use crate::game::types::Projectile;

/// Fire a shot from the cell just above the player. The flight runs
/// detached; the handle is only useful to tests.
pub fn fire(session: &Arc<GameSession>) -> JoinHandle<()> {
    let id = session.next_projectile_id();
    let projectile = session.with_world(|world| {
        let projectile = Projectile {
            id,
            pos: world.player.pos.offset(0, -1),
        };
        spawn_projectile(world, projectile.clone());
        projectile
    });
    debug!("[Projectile] Fired {} from {:?}", id, projectile.pos);
    tokio::spawn(fly(session.clone(), projectile))
}

pub async fn fly(session: Arc<GameSession>, projectile: Projectile) {
    let id = projectile.id;
    let mut pos = projectile.pos;
    let flight = session.config().projectile_flight;

    loop {
        let step = session.with_world(|world| projectile_enter(world, id, pos));
        match step {
            ProjectileStep::Hit { enemy } => {
                debug!("[Projectile] {} hit enemy {} at {:?}", id, enemy, pos);
                session.render();
                session.check_victory();
                break;
            }
            ProjectileStep::OutOfBounds | ProjectileStep::Absorbed => {
                debug!("[Projectile] {} stopped at {:?}: {:?}", id, pos, step);
                break;
            }
            ProjectileStep::Advanced => {
                session.render();
                sleep(flight).await;
                session.with_world(|world| projectile_leave(world, pos));
                pos.y -= 1;
                if pos.y < 0 {
                    break;
                }
            }
        }
    }

    session.with_world(|world| retire_projectile(world, id));
}
