//! WASM entry points for the web worker.
//!
//! This module is only compiled for the `wasm32` target. It provides the
//! `#[wasm_bindgen]` functions that JavaScript calls from the web worker.

use std::cell::RefCell;

use iso_scene::DrawCommand;
use scene_engine::EngineConfig;
use wasm_bindgen::prelude::*;

use crate::dispatch;
use crate::engine_state::EngineState;
use crate::messages::EngineToUi;

// Global engine state, single-threaded in the web worker.
thread_local! {
    static ENGINE_STATE: RefCell<Option<EngineState>> = const { RefCell::new(None) };
}

/// Initialize the WASM engine. Must be called once before any other function.
///
/// `config_json` may be empty, in which case defaults are used.
#[wasm_bindgen]
pub fn init(config_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = if config_json.trim().is_empty() {
        EngineConfig::default()
    } else {
        EngineConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?
    };
    ENGINE_STATE.with(|cell| {
        *cell.borrow_mut() = Some(EngineState::new(config));
    });
    web_sys::console::log_1(&"sculpture engine initialized".into());
    Ok(())
}

/// Process a JSON message from the UI and return a JSON response.
///
/// The input should be a JSON-serialized `UiToEngine` message.
/// Returns a JSON-serialized `EngineToUi` response.
#[wasm_bindgen]
pub fn process_message(json_input: &str) -> String {
    ENGINE_STATE.with(|cell| {
        let mut engine = cell.borrow_mut();
        match engine.as_mut() {
            Some(state) => dispatch::dispatch_json(state, json_input),
            None => dispatch::encode_response(&EngineToUi::Error {
                message: "engine not initialized, call init() first".to_string(),
            })
            .unwrap_or_default(),
        }
    })
}

/// Screen-space quad corners of the current scene as a flat typed array.
///
/// Layout per quad: `[x0, y0, x1, y1, x2, y2, x3, y3]`, three quads per
/// voxel in paint order. Useful for drawing straight onto a 2D canvas
/// without parsing the JSON draw list.
#[wasm_bindgen]
pub fn quad_vertices() -> js_sys::Float64Array {
    let vertices = ENGINE_STATE.with(|cell| {
        let engine = cell.borrow();
        let Some(scene) = engine.as_ref().and_then(|s| s.compositor.scene()) else {
            return Vec::new();
        };
        scene
            .draw_commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Voxel { faces, .. } => Some(*faces),
                DrawCommand::Background { .. } => None,
            })
            .flat_map(|faces| faces.into_iter())
            .flat_map(|quad| quad.points.into_iter().flatten())
            .collect::<Vec<f64>>()
    });
    js_sys::Float64Array::from(vertices.as_slice())
}

/// Number of voxels still in the scene, or 0 before the first generation.
#[wasm_bindgen]
pub fn voxel_count() -> usize {
    ENGINE_STATE.with(|cell| {
        cell.borrow()
            .as_ref()
            .and_then(|s| s.compositor.scene())
            .map_or(0, |scene| scene.len())
    })
}
