//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per host frame, driven by the frame timestamp
//! - Seeded RNG only
//! - Stable obstacle order (by ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod engine;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use engine::GameEngine;
pub use state::{EndCause, GameEvent, GamePhase, GameState, Obstacle, ObstacleKind, Player};
pub use tick::{spawn_obstacle_pair, tick};
