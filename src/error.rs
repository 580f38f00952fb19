//! Error types for engine construction and configuration

use thiserror::Error;

/// Rejected engine configuration
///
/// Returned when geometry or tuning values would leave the simulation
/// undefined. Nothing here can occur once a run is in progress.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("play area must be positive, got {width}x{height}")]
    NonPositivePlayArea { width: f32, height: f32 },

    #[error("player size must be positive, got {width}x{height}")]
    NonPositivePlayer { width: f32, height: f32 },

    #[error("player at x={x} with width {width} does not fit a play area {area_width} wide")]
    PlayerOutsideArea { x: f32, width: f32, area_width: f32 },

    #[error("player start y={y} must lie strictly inside (0, {max})")]
    StartOutOfBounds { y: f32, max: f32 },

    #[error("gap of {gap_height} with margin {margin} does not fit a play area {area_height} high")]
    GapDoesNotFit {
        gap_height: f32,
        margin: f32,
        area_height: f32,
    },

    #[error("obstacle width must be positive, got {0}")]
    NonPositiveObstacleWidth(f32),

    #[error("obstacle interval invalid: base {base}ms, minimum {min}ms")]
    InvalidInterval { base: f64, min: f64 },

    #[error("base game speed must be positive, got {0}")]
    NonPositiveSpeed(f32),

    #[error("{name} must not be negative, got {value}")]
    NegativeStep { name: &'static str, value: f64 },

    #[error("score step must be at least 1")]
    ZeroScoreStep,

    #[error("unknown scoring mode '{0}' (expected per_obstacle or per_gate)")]
    UnknownScoringMode(String),

    #[error("{0} must be a finite number")]
    NonFinite(&'static str),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}
