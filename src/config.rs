//! Engine configuration
//!
//! Every tunable lives in [`EngineConfig`]. Missing fields in a JSON document
//! fall back to the defaults in [`crate::consts`].

use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// How passed obstacles turn into points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Each bar scores on its own, so a full gate is worth two points
    #[default]
    PerObstacle,
    /// One point per gate; only the top bar carries the point
    PerGate,
}

impl ScoringMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMode::PerObstacle => "per_obstacle",
            ScoringMode::PerGate => "per_gate",
        }
    }

}

impl FromStr for ScoringMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "per_obstacle" | "obstacle" => Ok(ScoringMode::PerObstacle),
            "per_gate" | "gate" => Ok(ScoringMode::PerGate),
            _ => Err(ConfigError::UnknownScoringMode(s.to_string())),
        }
    }
}

/// Game tuning and geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === Geometry ===
    /// Play area width (x) and height (y)
    pub play_area: Vec2,
    /// Player bounding box width (x) and height (y)
    pub player_size: Vec2,
    /// Fixed left edge of the player
    pub player_x: f32,
    /// Top edge of the player at the start of a run
    pub player_start_y: f32,

    // === Physics ===
    pub gravity: f32,
    pub jump_impulse: f32,

    // === Obstacles ===
    pub base_game_speed: f32,
    pub speed_increment: f32,
    pub base_obstacle_interval_ms: f64,
    pub interval_decrement_ms: f64,
    pub min_obstacle_interval_ms: f64,
    pub obstacle_width: f32,
    pub gap_height: f32,
    pub gap_margin: f32,

    // === Scoring ===
    /// Difficulty rises each time the score reaches a multiple of this
    pub score_step: u32,
    pub scoring: ScoringMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            play_area: Vec2::new(PLAY_AREA_WIDTH, PLAY_AREA_HEIGHT),
            player_size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            player_x: PLAYER_X,
            player_start_y: PLAYER_START_Y,

            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,

            base_game_speed: BASE_GAME_SPEED,
            speed_increment: SPEED_INCREMENT,
            base_obstacle_interval_ms: BASE_OBSTACLE_INTERVAL_MS,
            interval_decrement_ms: INTERVAL_DECREMENT_MS,
            min_obstacle_interval_ms: MIN_OBSTACLE_INTERVAL_MS,
            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            gap_margin: GAP_MARGIN,

            score_step: SCORE_STEP,
            scoring: ScoringMode::PerObstacle,
        }
    }
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON document and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Copy of this config with the play area and player box replaced
    pub fn with_geometry(&self, play_area: Vec2, player_size: Vec2) -> Self {
        Self {
            play_area,
            player_size,
            ..self.clone()
        }
    }

    /// Lowest y the player's top edge may reach before the run ends
    pub fn floor_y(&self) -> f32 {
        self.play_area.y - self.player_size.y
    }

    /// Range of valid gap top positions as (min, max)
    pub fn gap_range(&self) -> (f32, f32) {
        (
            self.gap_margin,
            self.play_area.y - self.gap_margin - self.gap_height,
        )
    }

    /// Reject configurations that leave the geometry undefined
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("play_area", self.play_area.is_finite()),
            ("player_size", self.player_size.is_finite()),
            ("player_x", self.player_x.is_finite()),
            ("player_start_y", self.player_start_y.is_finite()),
            ("gravity", self.gravity.is_finite()),
            ("jump_impulse", self.jump_impulse.is_finite()),
            ("base_game_speed", self.base_game_speed.is_finite()),
            ("speed_increment", self.speed_increment.is_finite()),
            ("base_obstacle_interval_ms", self.base_obstacle_interval_ms.is_finite()),
            ("interval_decrement_ms", self.interval_decrement_ms.is_finite()),
            ("min_obstacle_interval_ms", self.min_obstacle_interval_ms.is_finite()),
            ("obstacle_width", self.obstacle_width.is_finite()),
            ("gap_height", self.gap_height.is_finite()),
            ("gap_margin", self.gap_margin.is_finite()),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, ok)| !ok) {
            return Err(ConfigError::NonFinite(*name));
        }

        let area = self.play_area;
        if area.x <= 0.0 || area.y <= 0.0 {
            return Err(ConfigError::NonPositivePlayArea {
                width: area.x,
                height: area.y,
            });
        }

        let size = self.player_size;
        if size.x <= 0.0 || size.y <= 0.0 {
            return Err(ConfigError::NonPositivePlayer {
                width: size.x,
                height: size.y,
            });
        }
        if self.player_x < 0.0 || self.player_x + size.x > area.x {
            return Err(ConfigError::PlayerOutsideArea {
                x: self.player_x,
                width: size.x,
                area_width: area.x,
            });
        }
        // Boundaries are terminal, so the start must be strictly inside them
        if self.player_start_y <= 0.0 || self.player_start_y >= self.floor_y() {
            return Err(ConfigError::StartOutOfBounds {
                y: self.player_start_y,
                max: self.floor_y(),
            });
        }

        if self.gap_height <= 0.0
            || self.gap_margin < 0.0
            || 2.0 * self.gap_margin + self.gap_height > area.y
        {
            return Err(ConfigError::GapDoesNotFit {
                gap_height: self.gap_height,
                margin: self.gap_margin,
                area_height: area.y,
            });
        }
        if self.obstacle_width <= 0.0 {
            return Err(ConfigError::NonPositiveObstacleWidth(self.obstacle_width));
        }

        if self.min_obstacle_interval_ms <= 0.0
            || self.base_obstacle_interval_ms < self.min_obstacle_interval_ms
        {
            return Err(ConfigError::InvalidInterval {
                base: self.base_obstacle_interval_ms,
                min: self.min_obstacle_interval_ms,
            });
        }
        if self.base_game_speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed(self.base_game_speed));
        }
        if self.speed_increment < 0.0 {
            return Err(ConfigError::NegativeStep {
                name: "speed_increment",
                value: self.speed_increment as f64,
            });
        }
        if self.interval_decrement_ms < 0.0 {
            return Err(ConfigError::NegativeStep {
                name: "interval_decrement_ms",
                value: self.interval_decrement_ms,
            });
        }
        if self.score_step == 0 {
            return Err(ConfigError::ZeroScoreStep);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.score_step, 5);
        assert_eq!(config.scoring, ScoringMode::PerObstacle);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = EngineConfig::from_json(r#"{ "gravity": 0.25, "scoring": "per_gate" }"#)
            .expect("partial config should parse");
        assert_eq!(config.gravity, 0.25);
        assert_eq!(config.scoring, ScoringMode::PerGate);
        assert_eq!(config.obstacle_width, OBSTACLE_WIDTH);
        assert_eq!(config.play_area, Vec2::new(PLAY_AREA_WIDTH, PLAY_AREA_HEIGHT));
    }

    #[test]
    fn test_json_round_trip_keeps_values() {
        let mut config = EngineConfig::default();
        config.jump_impulse = -7.5;
        let json = config.to_json().unwrap();
        let parsed = EngineConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = EngineConfig::from_json("{ gravity: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_json_with_invalid_values_is_rejected() {
        let err = EngineConfig::from_json(r#"{ "score_step": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroScoreStep));
    }

    #[test]
    fn test_rejects_non_positive_play_area() {
        let config = EngineConfig::default().with_geometry(Vec2::new(0.0, 600.0), Vec2::new(40.0, 30.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositivePlayArea { .. })
        ));

        let config = EngineConfig::default().with_geometry(Vec2::new(400.0, -1.0), Vec2::new(40.0, 30.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositivePlayArea { .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_player() {
        let config = EngineConfig::default().with_geometry(Vec2::new(400.0, 600.0), Vec2::new(40.0, 0.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositivePlayer { .. })
        ));
    }

    #[test]
    fn test_rejects_player_outside_area() {
        let config = EngineConfig {
            player_x: 380.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PlayerOutsideArea { .. })
        ));
    }

    #[test]
    fn test_rejects_start_on_boundary() {
        let config = EngineConfig {
            player_start_y: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StartOutOfBounds { .. })
        ));

        let floor = EngineConfig::default().floor_y();
        let config = EngineConfig {
            player_start_y: floor,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StartOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_rejects_gap_too_tall() {
        let config = EngineConfig {
            gap_height: 550.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GapDoesNotFit { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_intervals() {
        let config = EngineConfig {
            min_obstacle_interval_ms: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidInterval { .. })
        ));

        let config = EngineConfig {
            base_obstacle_interval_ms: 500.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_steps_and_zero_speed() {
        let config = EngineConfig {
            speed_increment: -0.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeStep { name: "speed_increment", .. })
        ));

        let config = EngineConfig {
            base_game_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NonPositiveSpeed(_))));
    }

    #[test]
    fn test_rejects_non_finite() {
        let config = EngineConfig {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NonFinite("gravity"))));
    }

    #[test]
    fn test_gap_range() {
        let config = EngineConfig::default();
        assert_eq!(config.gap_range(), (50.0, 400.0));
    }

    #[test]
    fn test_scoring_mode_from_str() {
        assert_eq!("Per_Gate".parse::<ScoringMode>().unwrap(), ScoringMode::PerGate);
        assert_eq!("obstacle".parse::<ScoringMode>().unwrap(), ScoringMode::PerObstacle);
        assert!(matches!(
            "nope".parse::<ScoringMode>(),
            Err(ConfigError::UnknownScoringMode(s)) if s == "nope"
        ));
        // as_str output parses back to the same mode
        for mode in [ScoringMode::PerObstacle, ScoringMode::PerGate] {
            assert_eq!(mode.as_str().parse::<ScoringMode>().unwrap(), mode);
        }
    }
}
