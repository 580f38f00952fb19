//! Gapfall - a side-scrolling gap-dodging arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, scoring, collisions)
//! - `config`: Tunable game constants, loadable from JSON
//! - `error`: Configuration errors
//!
//! Rendering and input devices belong to the host. The host calls
//! [`GameEngine::tick`] once per frame and [`GameEngine::on_jump_or_restart`]
//! whenever the player presses the action button.

pub mod config;
pub mod error;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::{EngineConfig, ScoringMode};
pub use error::ConfigError;
pub use sim::{GameEngine, GameEvent, GamePhase, Obstacle, Player};

/// Default game constants
///
/// Units are pixels and pixels-per-tick; the physics advances once per
/// frame, not per second.
pub mod consts {
    /// Play area dimensions
    pub const PLAY_AREA_WIDTH: f32 = 400.0;
    pub const PLAY_AREA_HEIGHT: f32 = 600.0;

    /// Player box and placement
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;
    pub const PLAYER_X: f32 = 50.0;
    /// Center-biased start height (top edge)
    pub const PLAYER_START_Y: f32 = 300.0;

    /// Downward acceleration added to velocity every tick
    pub const GRAVITY: f32 = 0.5;
    /// Velocity override applied on jump (negative = up)
    pub const JUMP_IMPULSE: f32 = -10.0;

    /// Horizontal obstacle speed per tick
    pub const BASE_GAME_SPEED: f32 = 2.0;
    pub const SPEED_INCREMENT: f32 = 0.5;

    /// Time between obstacle pairs (milliseconds)
    pub const BASE_OBSTACLE_INTERVAL_MS: f64 = 1500.0;
    pub const INTERVAL_DECREMENT_MS: f64 = 100.0;
    pub const MIN_OBSTACLE_INTERVAL_MS: f64 = 800.0;

    /// Obstacle geometry
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const GAP_HEIGHT: f32 = 150.0;
    /// Minimum solid length kept at the top and bottom of every gate
    pub const GAP_MARGIN: f32 = 50.0;

    /// Points between difficulty increases
    pub const SCORE_STEP: u32 = 5;

    /// Pending events kept for a host that is slow to drain them
    pub const MAX_PENDING_EVENTS: usize = 256;
}
