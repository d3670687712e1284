//! Tile Platformer - a single-entity platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collision resolution, respawn)
//! - `game`: Fixed-cadence tick scheduler tying input, sim and rendering together
//! - `renderer`: Draw-request construction and render sinks
//! - `platform`: Input sources and tick pacing (sleepers)
//! - `settings`: Explicit configuration set

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{RenderError, SetupError};
pub use game::{Game, RunSummary};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window dimensions (pixels)
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;
    pub const WINDOW_TITLE: &str = "Minimal Platformer";

    /// Side of the player square
    pub const PLAYER_SIZE: f32 = 20.0;
    /// Side of every level tile
    pub const BLOCK_SIZE: i32 = 40;

    /// Per-tick velocity change, no dt scaling (pixels/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Upward impulse assigned on jump (negative is up)
    pub const JUMP_STRENGTH: f32 = -12.0;
    /// Horizontal speed while a direction is held (pixels/tick)
    pub const MOVE_SPEED: f32 = 5.0;

    /// Fixed sleep between ticks (~60 Hz)
    pub const TICK_DELAY_MS: u64 = 16;

    /// Where the player starts and respawns
    pub const SPAWN_X: f32 = 100.0;
    pub const SPAWN_Y: f32 = 400.0;
}
