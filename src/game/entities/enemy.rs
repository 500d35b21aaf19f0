//! Enemy agent.
//!
//! One task per enemy, alive for the whole round. Each tick the enemy may
//! turn around at random, then tries to step along its facing.

use std::sync::Arc;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::game::session::GameSession;
use crate::game::systems::{flip_enemy, step_enemy, EnemyStep};

/// Spawn one agent task per enemy in the world.
pub fn spawn_enemies(session: &Arc<GameSession>) -> Vec<JoinHandle<()>> {
    let count = session.with_world(|world| world.enemies.len());
    debug!("[Enemy] Spawning {} enemy agents", count);
    (0..count)
        .map(|index| {
            let rng = StdRng::from_rng(&mut rand::rng());
            tokio::spawn(run_enemy(session.clone(), index, rng))
        })
        .collect()
}

/// Agent loop for the enemy at `index`. Never returns on its own; a defeated
/// enemy keeps ticking but only clears its footprint.
pub async fn run_enemy(session: Arc<GameSession>, index: usize, mut rng: StdRng) {
    let tick = session.config().enemy_tick;
    let flip_chance = session.config().enemy_flip_chance;
    loop {
        let flip = rng.random_bool(flip_chance);
        let step = session.with_world(|world| {
            if flip {
                flip_enemy(world, index);
            }
            step_enemy(world, index)
        });
        if step == EnemyStep::Moved {
            session.render();
        }
        sleep(tick).await;
    }
}
