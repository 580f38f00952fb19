//! Game state and core simulation types
//!
//! Everything the host needs to render a frame lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::config::EngineConfig;
use crate::consts::MAX_PENDING_EVENTS;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation accepts ticks
    Running,
    /// Run ended; waiting for restart input
    Ended,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    /// Player touched the top or bottom of the play area
    OutOfBounds,
    /// Player overlapped the obstacle with this id
    Obstacle { id: u32 },
}

/// Something the host may want to react to (sound, HUD flash)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { gate: u32 },
    Scored { score: u32 },
    DifficultyRaised { game_speed: f32, obstacle_interval_ms: f64 },
    Jumped,
    Ended { cause: EndCause, score: u32 },
    Restarted,
}

/// The player-controlled entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner; x never changes during a run
    pub pos: Vec2,
    /// Vertical velocity (positive = down)
    pub vel_y: f32,
    pub size: Vec2,
}

impl Player {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            pos: Vec2::new(config.player_x, config.player_start_y),
            vel_y: 0.0,
            size: config.player_size,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Which half of a gate an obstacle is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Hangs from the top of the play area down to the gap
    Top,
    /// Rises from below the gap to the bottom of the play area
    Bottom,
}

/// A solid bar scrolling from right to left
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Gate index shared by the two bars of a pair
    pub gate: u32,
    pub kind: ObstacleKind,
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Top of the solid bar
    pub y: f32,
    /// Vertical length of the solid bar
    pub height: f32,
    /// Set once the trailing edge crosses the player
    pub passed: bool,
}

impl Obstacle {
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(Vec2::new(self.x, self.y), Vec2::new(self.width, self.height))
    }

    /// Fully scrolled past the left edge of the play area
    pub fn is_offscreen(&self) -> bool {
        self.trailing_edge() < 0.0
    }
}

/// Complete mutable state of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub player: Player,
    /// Active obstacles (ascending id)
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Horizontal obstacle speed per tick
    pub game_speed: f32,
    /// Minimum time between obstacle pairs
    pub obstacle_interval_ms: f64,
    /// Frame timestamp of the last spawn; `None` until the first tick of a run
    pub last_spawn_ms: Option<f64>,
    /// Ticks advanced this run
    pub ticks: u64,
    /// Gates spawned this run
    pub gates_spawned: u32,
    pub end_cause: Option<EndCause>,
    /// Pending events for the host (not part of a snapshot)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            phase: GamePhase::Running,
            player: Player::new(config),
            obstacles: Vec::new(),
            score: 0,
            game_speed: config.base_game_speed,
            obstacle_interval_ms: config.base_obstacle_interval_ms,
            last_spawn_ms: None,
            ticks: 0,
            gates_spawned: 0,
            end_cause: None,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Reinitialize in place for a new run
    ///
    /// Collections are cleared rather than reallocated. Pending events are
    /// kept so the host still sees how the previous run ended.
    pub fn reset(&mut self, config: &EngineConfig) {
        self.phase = GamePhase::Running;
        self.player = Player::new(config);
        self.obstacles.clear();
        self.score = 0;
        self.game_speed = config.base_game_speed;
        self.obstacle_interval_ms = config.base_obstacle_interval_ms;
        self.last_spawn_ms = None;
        self.ticks = 0;
        self.gates_spawned = 0;
        self.end_cause = None;
        self.next_id = 1;
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Allocate a new obstacle ID
    pub fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Queue an event, dropping the oldest once the queue is full
    pub fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            let excess = self.events.len() + 1 - MAX_PENDING_EVENTS;
            self.events.drain(..excess);
        }
        self.events.push(event);
    }

    /// Transition to Ended and record why
    pub fn end_run(&mut self, cause: EndCause) {
        self.phase = GamePhase::Ended;
        self.end_cause = Some(cause);
        self.push_event(GameEvent::Ended {
            cause,
            score: self.score,
        });
        log::info!("Run ended after {} ticks: {:?}, score {}", self.ticks, cause, self.score);
    }
}
