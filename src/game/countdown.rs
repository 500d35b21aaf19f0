//! Round countdown.
//!
//! The countdown task is the only writer of the remaining seconds; renderers
//! only read them.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use log::info;
use tokio::time::sleep;

use crate::game::session::GameSession;
use crate::game::termination::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    Running(i64),
    Expired,
}

#[derive(Debug)]
pub struct Countdown {
    remaining: AtomicI64,
}

impl Countdown {
    pub fn new(seconds: i64) -> Self {
        Self {
            remaining: AtomicI64::new(seconds),
        }
    }

    pub fn remaining(&self) -> i64 {
        self.remaining.load(Ordering::Acquire)
    }

    /// Take one second off. Expires once the counter drops below zero.
    pub fn tick(&self) -> CountdownTick {
        let now = self.remaining.fetch_sub(1, Ordering::AcqRel) - 1;
        if now < 0 {
            CountdownTick::Expired
        } else {
            CountdownTick::Running(now)
        }
    }
}

/// Countdown task: redraw, wait one tick, decrement, and end the round
/// with `Outcome::Timeout` when the clock runs out.
pub async fn run_countdown(session: Arc<GameSession>) {
    let tick = session.config().countdown_tick;
    while session.countdown().remaining() >= 0 {
        session.render();
        sleep(tick).await;
        if session.countdown().tick() == CountdownTick::Expired {
            info!("[Countdown] Time is up");
            session.finish(Outcome::Timeout);
            return;
        }
    }
}
