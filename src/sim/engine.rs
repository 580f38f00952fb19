//! The game engine consumed by a presentation host
//!
//! Owns the configuration, the run state and the gap RNG. The host calls
//! [`GameEngine::tick`] once per display refresh and forwards the action
//! button to [`GameEngine::on_jump_or_restart`]. Both take `&mut self`, so a
//! host that handles input on another thread has to put the engine behind a
//! lock or send the input over a channel to the frame loop.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::{EndCause, GameEvent, GamePhase, GameState, Obstacle, Player};
use super::tick::tick;
use crate::config::EngineConfig;
use crate::error::ConfigError;

#[derive(Debug)]
pub struct GameEngine {
    config: EngineConfig,
    state: GameState,
    rng: Pcg32,
    seed: u64,
}

impl GameEngine {
    /// Validate `config` and start a run
    pub fn new(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(&config);
        log::info!(
            "Engine created: area {}x{}, seed {seed}",
            config.play_area.x,
            config.play_area.y
        );
        Ok(Self {
            config,
            state,
            rng: Pcg32::seed_from_u64(seed),
            seed,
        })
    }

    /// Engine with the default tuning
    pub fn with_defaults(seed: u64) -> Self {
        let config = EngineConfig::default();
        Self {
            state: GameState::new(&config),
            config,
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// Start a fresh run with the current geometry
    ///
    /// The RNG keeps running, so consecutive runs get different gates.
    pub fn reset(&mut self) {
        self.state.reset(&self.config);
        self.state.push_event(GameEvent::Restarted);
        log::info!("Run reset");
    }

    /// Replace the play area and player size, then start a fresh run
    ///
    /// On error the engine is left untouched.
    pub fn reset_with_geometry(
        &mut self,
        play_area_width: f32,
        play_area_height: f32,
        entity_width: f32,
        entity_height: f32,
    ) -> Result<(), ConfigError> {
        let config = self.config.with_geometry(
            Vec2::new(play_area_width, play_area_height),
            Vec2::new(entity_width, entity_height),
        );
        config.validate()?;
        self.config = config;
        self.reset();
        Ok(())
    }

    /// Advance one frame; a no-op once the run has ended
    pub fn tick(&mut self, timestamp_ms: f64) {
        tick(&mut self.state, &self.config, &mut self.rng, timestamp_ms);
    }

    /// The single action input: jump while running, restart once ended
    pub fn on_jump_or_restart(&mut self) {
        match self.state.phase {
            GamePhase::Running => {
                // Override, not an added force
                self.state.player.vel_y = self.config.jump_impulse;
                self.state.push_event(GameEvent::Jumped);
            }
            GamePhase::Ended => self.reset(),
        }
    }

    /// Hand pending events to the host
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }

    pub fn player(&self) -> &Player {
        &self.state.player
    }

    /// Active obstacles in spawn order
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.state.obstacles
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn end_cause(&self) -> Option<EndCause> {
        self.state.end_cause
    }

    pub fn game_speed(&self) -> f32 {
        self.state.game_speed
    }

    pub fn obstacle_interval_ms(&self) -> f64 {
        self.state.obstacle_interval_ms
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = EngineConfig::default().with_geometry(Vec2::new(-400.0, 600.0), Vec2::new(40.0, 30.0));
        assert!(matches!(
            GameEngine::new(config, 1),
            Err(ConfigError::NonPositivePlayArea { .. })
        ));
    }

    #[test]
    fn test_jump_overrides_velocity() {
        let mut engine = GameEngine::with_defaults(7);
        for _ in 0..5 {
            engine.tick(0.0);
        }
        assert!(engine.player().vel_y > 0.0);

        engine.on_jump_or_restart();
        assert_eq!(engine.player().vel_y, -10.0);

        // Jumping twice does not stack
        engine.on_jump_or_restart();
        assert_eq!(engine.player().vel_y, -10.0);
        assert!(engine.is_running());
    }

    #[test]
    fn test_restart_after_end() {
        let mut engine = GameEngine::with_defaults(7);
        while engine.is_running() {
            engine.tick(0.0);
        }
        assert_eq!(engine.end_cause(), Some(EndCause::OutOfBounds));

        engine.on_jump_or_restart();

        assert!(engine.is_running());
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.player().pos, Vec2::new(50.0, 300.0));
        assert_eq!(engine.player().vel_y, 0.0);
        assert_eq!(engine.end_cause(), None);
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut engine = GameEngine::with_defaults(7);
        engine.on_jump_or_restart();
        assert_eq!(engine.drain_events(), vec![GameEvent::Jumped]);
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_reset_with_geometry_applies_and_validates() {
        let mut engine = GameEngine::with_defaults(7);
        engine
            .reset_with_geometry(600.0, 400.0, 40.0, 30.0)
            .expect("geometry should be valid");
        assert_eq!(engine.config().play_area, Vec2::new(600.0, 400.0));
        assert!(engine.is_running());

        let err = engine.reset_with_geometry(600.0, 0.0, 40.0, 30.0);
        assert!(err.is_err());
        // Previous geometry survives a rejected resize
        assert_eq!(engine.config().play_area, Vec2::new(600.0, 400.0));
    }
}
