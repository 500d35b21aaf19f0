/// Main configuration module.
///
/// Re-exports the gameplay constants and the runtime `GameConfig`.
pub mod game;

pub use game::GameConfig;
