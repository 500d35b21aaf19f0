/// Game configuration constants.
///
/// This module defines the gameplay timings, the default map path and the
/// glyphs understood by the map loader.
use std::time::Duration;

/// Delay between two enemy movement ticks (in milliseconds).
pub const ENEMY_TICK_MS: u64 = 300;

/// Probability that an enemy turns around at the start of a tick.
pub const ENEMY_FLIP_CHANCE: f64 = 0.3;

/// Time a projectile stays on a cell before moving up one row (in milliseconds).
pub const PROJECTILE_FLIGHT_MS: u64 = 100;

/// Seconds on the clock when a round starts.
pub const COUNTDOWN_SECONDS: i64 = 60;

/// Duration of one countdown tick (in milliseconds).
pub const COUNTDOWN_TICK_MS: u64 = 1000;

/// Map file used when no path is given on the command line.
pub const DEFAULT_MAP_PATH: &str = "mapa.txt";

pub const WALL_GLYPH: char = '▤';
pub const ENEMY_GLYPH: char = '☠';
pub const VEGETATION_GLYPH: char = '♣';
pub const PLAYER_GLYPH: char = '☺';
pub const EMPTY_GLYPH: char = ' ';
pub const PROJECTILE_GLYPH: char = '*';

/// Runtime timings for a game session. `Default` uses the constants above.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub enemy_tick: Duration,
    pub enemy_flip_chance: f64,
    pub projectile_flight: Duration,
    pub countdown_seconds: i64,
    pub countdown_tick: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            enemy_tick: Duration::from_millis(ENEMY_TICK_MS),
            enemy_flip_chance: ENEMY_FLIP_CHANCE,
            projectile_flight: Duration::from_millis(PROJECTILE_FLIGHT_MS),
            countdown_seconds: COUNTDOWN_SECONDS,
            countdown_tick: Duration::from_millis(COUNTDOWN_TICK_MS),
        }
    }
}
