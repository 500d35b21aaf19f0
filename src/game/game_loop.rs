//! Main game loop.
//!
//! Keyboard actions arrive on a channel fed by a dedicated input thread.
//! The loop applies them one at a time and stops on quit or when a
//! background task ends the round.

use std::io;
use std::sync::Arc;
use std::thread;

use log::{debug, info, warn};
use tokio::sync::mpsc;

use crate::game::countdown::run_countdown;
use crate::game::entities::{fire, spawn_enemies};
use crate::game::session::GameSession;
use crate::game::systems::move_player;
use crate::game::termination::Outcome;
use crate::game::types::Direction;

/// Player action decoded from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Fire,
    Interact,
    /// Raw key, mapped to a direction when applied.
    Move(char),
}

/// Blocking source of player actions.
pub trait InputSource: Send {
    fn next_action(&mut self) -> io::Result<Action>;
}

/// Apply one action. Returns `false` only when the player quits.
pub fn handle_action(session: &Arc<GameSession>, action: Action) -> bool {
    match action {
        Action::Quit => return false,
        Action::Fire => {
            // Flight runs detached.
            drop(fire(session));
        }
        Action::Interact => {}
        Action::Move(key) => match Direction::from_key(key) {
            Some(direction) => {
                session.with_world(|world| move_player(world, direction));
            }
            None => debug!("[GameLoop] Ignoring key {:?}", key),
        },
    }
    true
}

/// Read actions on a plain OS thread so the blocking read never stalls the
/// runtime. The channel closes when the source fails or the loop goes away.
pub fn spawn_input_thread(mut source: Box<dyn InputSource>) -> mpsc::UnboundedReceiver<Action> {
    let (tx, rx) = mpsc::unbounded_channel();
    thread::spawn(move || loop {
        match source.next_action() {
            Ok(action) => {
                if tx.send(action).is_err() {
                    break;
                }
            }
            Err(err) => {
                warn!("[GameLoop] Input source failed: {}", err);
                break;
            }
        }
    });
    rx
}

/// Start the enemy agents and the countdown.
pub fn start_background_tasks(session: &Arc<GameSession>) {
    spawn_enemies(session);
    tokio::spawn(run_countdown(session.clone()));
}

/// Run one round until it ends and return how it ended.
pub async fn run_game_loop(
    session: Arc<GameSession>,
    mut actions: mpsc::UnboundedReceiver<Action>,
) -> Outcome {
    session.render();
    start_background_tasks(&session);

    loop {
        tokio::select! {
            biased;
            outcome = session.termination().wait() => return outcome,
            action = actions.recv() => {
                let keep_running = match action {
                    Some(action) => handle_action(&session, action),
                    None => false,
                };
                if !keep_running {
                    info!("[GameLoop] Player quit");
                    session.finish(Outcome::Quit);
                    return session.termination().outcome().unwrap_or(Outcome::Quit);
                }
                session.render();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_utils::session_from_map;
    use crate::game::types::Position;

    const ARENA: &str = "▤▤▤▤▤\n▤ ☠ ▤\n▤   ▤\n▤ ☺♣▤\n▤▤▤▤▤";

    #[test]
    fn move_into_open_cell_updates_player() {
        let (session, _) = session_from_map(ARENA);
        assert!(handle_action(&session, Action::Move('w')));
        assert_eq!(session.snapshot().player, Position::new(2, 2));
    }

    #[test]
    fn move_into_wall_is_absorbed() {
        let (session, _) = session_from_map(ARENA);
        assert!(handle_action(&session, Action::Move('s')));
        assert_eq!(session.snapshot().player, Position::new(2, 3));
    }

    #[test]
    fn move_onto_vegetation_is_allowed() {
        let (session, _) = session_from_map(ARENA);
        handle_action(&session, Action::Move('D'));
        assert_eq!(session.snapshot().player, Position::new(3, 3));
    }

    #[test]
    fn unknown_keys_and_interact_change_nothing() {
        let (session, _) = session_from_map(ARENA);
        let before = format!("{:?}", session.snapshot());
        assert!(handle_action(&session, Action::Move('x')));
        assert!(handle_action(&session, Action::Interact));
        assert_eq!(format!("{:?}", session.snapshot()), before);
    }

    #[test]
    fn quit_stops_the_loop() {
        let (session, _) = session_from_map(ARENA);
        assert!(!handle_action(&session, Action::Quit));
    }

    #[tokio::test(start_paused = true)]
    async fn fire_spawns_a_projectile_above_the_player() {
        let (session, _) = session_from_map(ARENA);
        assert!(handle_action(&session, Action::Fire));
        let projectiles = session.with_world(|world| world.projectiles.clone());
        assert_eq!(projectiles.len(), 1);
        assert_eq!(projectiles[0].pos, Position::new(2, 2));
    }

    #[tokio::test(start_paused = true)]
    async fn closed_input_ends_the_round_as_quit() {
        let (session, renderer) = session_from_map(ARENA);
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(Action::Move('w')).unwrap();
        drop(tx);

        let outcome = run_game_loop(session.clone(), rx).await;
        assert_eq!(outcome, Outcome::Quit);
        assert_eq!(session.snapshot().player, Position::new(2, 2));
        assert!(renderer.frames() >= 2);
    }

    /// Plays back a fixed list of actions, then fails like a closed terminal.
    struct ScriptedInput(std::collections::VecDeque<Action>);

    impl InputSource for ScriptedInput {
        fn next_action(&mut self) -> io::Result<Action> {
            self.0
                .pop_front()
                .ok_or_else(|| io::Error::other("input closed"))
        }
    }

    fn scripted(actions: &[Action]) -> Box<dyn InputSource> {
        Box::new(ScriptedInput(actions.iter().copied().collect()))
    }

    #[tokio::test]
    async fn input_thread_forwards_actions_then_closes_on_error() {
        let mut rx = spawn_input_thread(scripted(&[Action::Move('a'), Action::Fire]));
        assert_eq!(rx.recv().await, Some(Action::Move('a')));
        assert_eq!(rx.recv().await, Some(Action::Fire));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn failed_input_is_treated_as_quit() {
        let (session, _) = session_from_map(ARENA);
        let rx = spawn_input_thread(scripted(&[Action::Move('w')]));
        assert_eq!(run_game_loop(session.clone(), rx).await, Outcome::Quit);
        assert_eq!(session.snapshot().player, Position::new(2, 2));
        assert_eq!(session.termination().outcome(), Some(Outcome::Quit));
    }

    #[tokio::test(start_paused = true)]
    async fn round_times_out_without_input() {
        let (session, _) = session_from_map(ARENA);
        let (_tx, rx) = mpsc::unbounded_channel();
        assert_eq!(run_game_loop(session, rx).await, Outcome::Timeout);
    }
}
