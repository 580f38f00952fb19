//! Gapfall headless demo
//!
//! The real host lives in the browser (see `wasm.rs`). Natively there is no
//! renderer, so this binary drives the engine with a simple autopilot and
//! logs how each run went. Set `RUST_LOG=debug` to see spawns and
//! difficulty changes, and `GAPFALL_SCORING=per_gate` to score one point
//! per gate instead of one per bar.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use gapfall::{EngineConfig, GameEngine, GameEvent, ScoringMode};

    env_logger::init();
    log::info!("Gapfall (native) starting headless autopilot...");

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const MAX_FRAMES: u32 = 60 * 60;
    const RUNS: u32 = 3;

    let scoring = match std::env::var("GAPFALL_SCORING") {
        Ok(value) => match value.parse::<ScoringMode>() {
            Ok(mode) => mode,
            Err(e) => {
                log::warn!("{e}, falling back to per_obstacle");
                ScoringMode::PerObstacle
            }
        },
        Err(_) => ScoringMode::PerObstacle,
    };
    let config = EngineConfig {
        scoring,
        ..Default::default()
    };
    let mut engine = match GameEngine::new(config, 0x5eed) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("Invalid engine config: {e}");
            return;
        }
    };
    log::info!(
        "Seed {:#x}, scoring {}",
        engine.seed(),
        engine.config().scoring.as_str()
    );
    let mut clock = 0.0;

    for run in 1..=RUNS {
        let mut frames = 0;
        while engine.is_running() && frames < MAX_FRAMES {
            if autopilot_wants_jump(&engine) {
                engine.on_jump_or_restart();
            }
            engine.tick(clock);
            clock += FRAME_MS;
            frames += 1;

            for event in engine.drain_events() {
                if let GameEvent::DifficultyRaised { game_speed, .. } = event {
                    log::debug!("Run {run}: speed now {game_speed}");
                }
            }
        }

        log::info!(
            "Run {run}: score {} after {frames} frames ({:?})",
            engine.score(),
            engine.end_cause()
        );

        if engine.is_running() {
            engine.reset();
        } else {
            engine.on_jump_or_restart();
        }
    }
}

/// Jump when falling below the center of the next gap
#[cfg(not(target_arch = "wasm32"))]
fn autopilot_wants_jump(engine: &gapfall::GameEngine) -> bool {
    use gapfall::sim::ObstacleKind;

    let config = engine.config();
    let player = engine.player();

    let target = engine
        .obstacles()
        .iter()
        .find(|o| o.kind == ObstacleKind::Top && o.trailing_edge() >= player.pos.x)
        .map(|top| top.height + config.gap_height / 2.0)
        .unwrap_or(config.play_area.y / 2.0);

    let center = player.pos.y + player.size.y / 2.0;
    player.vel_y >= 0.0 && center > target + 10.0
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_start in the library
}
