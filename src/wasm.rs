//! Browser bindings
//!
//! Exposes the engine to a JavaScript host that owns the canvas and the
//! `requestAnimationFrame` loop. Queries return flat numeric data so the
//! host can draw without crossing the boundary per obstacle.

use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::sim::GameEngine;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("Gapfall starting...");
    }
}

#[wasm_bindgen]
pub struct WasmEngine {
    engine: GameEngine,
}

#[wasm_bindgen]
impl WasmEngine {
    /// Engine with default tuning for a play area of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, seed: u32) -> Result<WasmEngine, JsError> {
        let defaults = EngineConfig::default();
        let config = EngineConfig {
            player_start_y: height / 2.0,
            ..defaults.with_geometry(glam::Vec2::new(width, height), defaults.player_size)
        };
        let engine =
            GameEngine::new(config, seed as u64).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self { engine })
    }

    /// Engine from a (possibly partial) JSON config document
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str, seed: u32) -> Result<WasmEngine, JsError> {
        let config = EngineConfig::from_json(json).map_err(|e| JsError::new(&e.to_string()))?;
        let engine =
            GameEngine::new(config, seed as u64).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self { engine })
    }

    pub fn tick(&mut self, timestamp_ms: f64) {
        self.engine.tick(timestamp_ms);
    }

    #[wasm_bindgen(js_name = jumpOrRestart)]
    pub fn jump_or_restart(&mut self) {
        self.engine.on_jump_or_restart();
    }

    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsError> {
        let size = self.engine.config().player_size;
        self.engine
            .reset_with_geometry(width, height, size.x, size.y)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    pub fn score(&self) -> u32 {
        self.engine.score()
    }

    pub fn running(&self) -> bool {
        self.engine.is_running()
    }

    /// Player box as `[x, y, width, height]`
    pub fn player(&self) -> Vec<f32> {
        let p = self.engine.player();
        vec![p.pos.x, p.pos.y, p.size.x, p.size.y]
    }

    /// Obstacles flattened as `[x, y, width, height, passed, ...]`
    pub fn obstacles(&self) -> Vec<f32> {
        self.engine
            .obstacles()
            .iter()
            .flat_map(|o| [o.x, o.y, o.width, o.height, if o.passed { 1.0 } else { 0.0 }])
            .collect()
    }

    /// Pending events as a JSON array (sound cues, HUD flashes)
    #[wasm_bindgen(js_name = drainEvents)]
    pub fn drain_events(&mut self) -> String {
        let events = self.engine.drain_events();
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }
}
