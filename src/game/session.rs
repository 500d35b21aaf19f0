//! Shared state for one round.
//!
//! Every task holds an `Arc<GameSession>`. The world (grid + entity registry)
//! sits behind one mutex and each read-modify-write runs inside
//! [`GameSession::with_world`], so no task ever sees a half-applied move.
//! The renderer has its own mutex; snapshots are taken while holding it,
//! which keeps frames in order. Lock order is always renderer, then world.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info, log_enabled, trace, warn, Level};

use crate::config::GameConfig;
use crate::game::countdown::Countdown;
use crate::game::state::{Snapshot, World};
use crate::game::systems::{all_enemies_defeated, Renderer};
use crate::game::termination::{Outcome, Termination};

pub struct GameSession {
    world: Mutex<World>,
    renderer: Mutex<Box<dyn Renderer>>,
    countdown: Countdown,
    termination: Termination,
    config: GameConfig,
    next_projectile_id: AtomicU64,
}

impl GameSession {
    pub fn new(world: World, renderer: Box<dyn Renderer>, config: GameConfig) -> Arc<Self> {
        Arc::new(Self {
            world: Mutex::new(world),
            renderer: Mutex::new(renderer),
            countdown: Countdown::new(config.countdown_seconds),
            termination: Termination::new(),
            config,
            next_projectile_id: AtomicU64::new(0),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn termination(&self) -> &Termination {
        &self.termination
    }

    /// Run `f` with exclusive access to the world.
    pub fn with_world<R>(&self, f: impl FnOnce(&mut World) -> R) -> R {
        f(&mut *self.lock_world())
    }

    pub fn snapshot(&self) -> Snapshot {
        self.lock_world().snapshot(self.countdown.remaining())
    }

    pub fn next_projectile_id(&self) -> u64 {
        self.next_projectile_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Draw the current state. Does nothing once the round has ended.
    pub fn render(&self) {
        let mut renderer = self.lock_renderer();
        if self.termination.is_finished() {
            return;
        }
        let snapshot = self.snapshot();
        if log_enabled!(Level::Trace) {
            if let Ok(json) = serde_json::to_string(&snapshot) {
                trace!("[Session] Frame {}", json);
            }
        }
        if let Err(err) = renderer.draw(&snapshot) {
            warn!("[Session] Failed to draw frame: {}", err);
        }
    }

    /// Win check, run after every enemy deactivation.
    /// Returns `true` only for the call that ends the round.
    pub fn check_victory(&self) -> bool {
        let won = self.with_world(|world| all_enemies_defeated(world));
        if !won {
            return false;
        }
        self.finish(Outcome::Victory)
    }

    /// Record the end of the round. Later calls are ignored.
    pub fn finish(&self, outcome: Outcome) -> bool {
        let first = self.termination.trigger(outcome);
        if first {
            info!("[Session] Round over: {:?}", outcome);
        } else {
            debug!("[Session] Ignoring {:?}, round already over", outcome);
        }
        first
    }

    /// Hand the terminal back and show the screen matching `outcome`.
    pub fn close(&self, outcome: Outcome) {
        let mut renderer = self.lock_renderer();
        let result = match outcome {
            Outcome::Victory => renderer.victory(),
            Outcome::Timeout => renderer.timeout(),
            Outcome::Quit => renderer.restore(),
        };
        if let Err(err) = result {
            warn!("[Session] Failed to close renderer: {}", err);
        }
    }

    fn lock_world(&self) -> MutexGuard<'_, World> {
        self.world.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_renderer(&self) -> MutexGuard<'_, Box<dyn Renderer>> {
        self.renderer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
