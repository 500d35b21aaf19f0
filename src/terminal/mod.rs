//! Terminal adapters.
//!
//! `TerminalRenderer` paints snapshots with crossterm and owns the raw-mode
//! alternate screen; `KeyboardInput` turns key presses into actions.

pub mod input;
pub mod render;

pub use input::KeyboardInput;
pub use render::TerminalRenderer;
