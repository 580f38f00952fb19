//! Per-frame simulation step
//!
//! Advances a [`GameState`] by one frame: physics, boundary check, spawning,
//! scrolling, scoring, then obstacle collisions. The order matters; a
//! boundary breach ends the run before anything else happens that tick.

use rand::Rng;

use super::state::{EndCause, GameEvent, GameState, Obstacle, ObstacleKind};
use crate::config::{EngineConfig, ScoringMode};

/// Advance the game state by one frame
///
/// `timestamp_ms` is the host's frame clock and must not run backwards.
/// Does nothing once the run has ended.
pub fn tick(state: &mut GameState, config: &EngineConfig, rng: &mut impl Rng, timestamp_ms: f64) {
    if !state.is_running() {
        return;
    }

    state.ticks += 1;

    // Physics: constant gravity, then integrate position
    state.player.vel_y += config.gravity;
    state.player.pos.y += state.player.vel_y;

    // Top and bottom of the play area are terminal
    let y = state.player.pos.y;
    if y <= 0.0 || y >= config.floor_y() {
        state.end_run(EndCause::OutOfBounds);
        return;
    }

    if spawn_due(state, timestamp_ms) {
        spawn_obstacle_pair(state, config, rng);
        state.last_spawn_ms = Some(timestamp_ms);
    }

    advance_obstacles(state);
    award_passes(state, config);

    let player_box = state.player.bounds();
    let hit = state
        .obstacles
        .iter()
        .find(|o| o.bounds().overlaps(&player_box))
        .map(|o| o.id);
    if let Some(id) = hit {
        state.end_run(EndCause::Obstacle { id });
    }
}

/// Check the spawn clock, anchoring it on the first tick of a run
fn spawn_due(state: &mut GameState, timestamp_ms: f64) -> bool {
    if !timestamp_ms.is_finite() {
        log::warn!("Ignoring non-finite frame timestamp {timestamp_ms}");
        return false;
    }

    let Some(last) = state.last_spawn_ms else {
        state.last_spawn_ms = Some(timestamp_ms);
        return false;
    };

    if timestamp_ms < last {
        // Clock went backwards; restart the interval instead of bursting
        log::warn!("Frame clock went backwards ({last} -> {timestamp_ms}), re-anchoring");
        state.last_spawn_ms = Some(timestamp_ms);
        return false;
    }

    timestamp_ms - last > state.obstacle_interval_ms
}

/// Spawn a top/bottom obstacle pair just off the right edge
///
/// The gap top is drawn uniformly from [`EngineConfig::gap_range`], so both
/// bars are at least `gap_margin` long.
pub fn spawn_obstacle_pair(state: &mut GameState, config: &EngineConfig, rng: &mut impl Rng) {
    let (min, max) = config.gap_range();
    let gap_top = if max > min {
        rng.random_range(min..max)
    } else {
        min
    };
    let gap_bottom = gap_top + config.gap_height;

    let gate = state.gates_spawned;
    state.gates_spawned += 1;

    let x = config.play_area.x;
    let top_id = state.next_obstacle_id();
    state.obstacles.push(Obstacle {
        id: top_id,
        gate,
        kind: ObstacleKind::Top,
        x,
        width: config.obstacle_width,
        y: 0.0,
        height: gap_top,
        passed: false,
    });

    let bottom_id = state.next_obstacle_id();
    state.obstacles.push(Obstacle {
        id: bottom_id,
        gate,
        kind: ObstacleKind::Bottom,
        x,
        width: config.obstacle_width,
        y: gap_bottom,
        height: config.play_area.y - gap_bottom,
        passed: false,
    });

    state.push_event(GameEvent::Spawned { gate });
    log::debug!("Gate {gate} spawned, gap {gap_top:.1}..{gap_bottom:.1}");
}

/// Scroll every obstacle left and drop the ones past the left edge
fn advance_obstacles(state: &mut GameState) {
    let speed = state.game_speed;
    for obstacle in &mut state.obstacles {
        obstacle.x -= speed;
    }
    state.obstacles.retain(|o| !o.is_offscreen());
}

/// Mark obstacles the player has cleared and award their points
fn award_passes(state: &mut GameState, config: &EngineConfig) {
    let player_x = state.player.pos.x;
    let mut points = 0u32;

    for obstacle in &mut state.obstacles {
        if obstacle.passed || obstacle.trailing_edge() >= player_x {
            continue;
        }
        obstacle.passed = true;
        let scores = match config.scoring {
            ScoringMode::PerObstacle => true,
            ScoringMode::PerGate => obstacle.kind == ObstacleKind::Top,
        };
        if scores {
            points += 1;
        }
    }

    for _ in 0..points {
        state.score += 1;
        state.push_event(GameEvent::Scored { score: state.score });
        if state.score.is_multiple_of(config.score_step) {
            raise_difficulty(state, config);
        }
    }
}

/// Speed obstacles up and shorten the spawn interval (down to its floor)
fn raise_difficulty(state: &mut GameState, config: &EngineConfig) {
    state.game_speed += config.speed_increment;
    state.obstacle_interval_ms = (state.obstacle_interval_ms - config.interval_decrement_ms)
        .max(config.min_obstacle_interval_ms);

    state.push_event(GameEvent::DifficultyRaised {
        game_speed: state.game_speed,
        obstacle_interval_ms: state.obstacle_interval_ms,
    });
    log::debug!(
        "Difficulty raised at score {}: speed={}, interval={}ms",
        state.score,
        state.game_speed,
        state.obstacle_interval_ms
    );
}
