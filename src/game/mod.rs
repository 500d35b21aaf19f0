pub mod types;
pub mod state;
pub mod grid;
pub mod entities;
pub mod systems;
pub mod countdown;
pub mod termination;
pub mod session;
pub mod game_loop;

#[cfg(test)]
pub mod test_utils;
