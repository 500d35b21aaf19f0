//! End-of-round signal.
//!
//! Victory, timeout and quit race to end the round; the first one recorded
//! wins and every later attempt is ignored.

use serde::Serialize;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Victory,
    Timeout,
    Quit,
}

pub struct Termination {
    tx: watch::Sender<Option<Outcome>>,
}

impl Termination {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Record `outcome` unless the round already ended.
    /// Returns `true` only for the call that actually ended it.
    pub fn trigger(&self, outcome: Outcome) -> bool {
        self.tx.send_if_modified(|current| {
            if current.is_some() {
                return false;
            }
            *current = Some(outcome);
            true
        })
    }

    pub fn outcome(&self) -> Option<Outcome> {
        *self.tx.borrow()
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    /// Resolves once an outcome has been recorded.
    pub async fn wait(&self) -> Outcome {
        let mut rx = self.tx.subscribe();
        rx.wait_for(Option::is_some)
            .await
            .ok()
            .and_then(|outcome| *outcome)
            .unwrap_or(Outcome::Quit)
    }
}

impl Default for Termination {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_outcome_wins() {
        let termination = Termination::new();
        assert!(!termination.is_finished());
        assert!(termination.trigger(Outcome::Timeout));
        assert!(!termination.trigger(Outcome::Victory));
        assert_eq!(termination.outcome(), Some(Outcome::Timeout));
    }

    #[tokio::test]
    async fn wait_sees_an_outcome_set_before_it_started() {
        let termination = Termination::new();
        termination.trigger(Outcome::Victory);
        assert_eq!(termination.wait().await, Outcome::Victory);
    }
}
