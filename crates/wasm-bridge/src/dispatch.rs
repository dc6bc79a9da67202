use iso_scene::VoxelKey;
use scene_engine::EngineError;
use scene_export::{svg_data_url, SVG_FILE_NAME};
use tracing::debug;

use crate::engine_state::{BridgeError, EngineState};
use crate::messages::{EngineToUi, UiToEngine};

/// Dispatch a UI message to the engine and return a response.
///
/// Every failure becomes an `EngineToUi::Error`; the engine state is left
/// as it was before the message.
pub fn dispatch(state: &mut EngineState, msg: UiToEngine) -> EngineToUi {
    handle_message(state, msg).unwrap_or_else(error_response)
}

/// Decode a JSON `UiToEngine`, dispatch it and encode the reply.
///
/// Malformed input is answered with an `Error` message rather than failing.
pub fn dispatch_json(state: &mut EngineState, json_input: &str) -> String {
    let response = match decode_message(json_input) {
        Ok(msg) => dispatch(state, msg),
        Err(e) => error_response(e),
    };
    encode_response(&response)
        .or_else(|e| encode_response(&error_response(e)))
        .unwrap_or_default()
}

pub fn decode_message(json_input: &str) -> Result<UiToEngine, BridgeError> {
    serde_json::from_str(json_input).map_err(|e| BridgeError::Serialization {
        reason: format!("failed to parse message: {e}"),
    })
}

pub fn encode_response(response: &EngineToUi) -> Result<String, BridgeError> {
    serde_json::to_string(response).map_err(|e| BridgeError::Serialization {
        reason: e.to_string(),
    })
}

fn error_response(error: BridgeError) -> EngineToUi {
    EngineToUi::Error {
        message: error.to_string(),
    }
}

fn handle_message(state: &mut EngineState, msg: UiToEngine) -> Result<EngineToUi, BridgeError> {
    match msg {
        // -- Lifecycle --
        UiToEngine::Attach => {
            state.compositor.attach()?;
            Ok(state_changed(state))
        }

        UiToEngine::Configure { config } => {
            state.configure(config)?;
            Ok(state_changed(state))
        }

        UiToEngine::Detach => {
            state.compositor.teardown();
            Ok(EngineToUi::Detached)
        }

        // -- Generation --
        UiToEngine::Generate { params } => {
            let EngineState { compositor, rng } = state;
            compositor.generate(params, rng)?;
            scene_updated(state)
        }

        UiToEngine::SetColor { color } => {
            state.compositor.set_color(&color)?;
            scene_updated(state)
        }

        UiToEngine::Recolor { palette } => {
            state.compositor.recolor(palette)?;
            scene_updated(state)
        }

        // -- Removal --
        UiToEngine::RemoveVoxel { id } => {
            state.compositor.remove_voxel(VoxelKey::from_id(id))?;
            Ok(voxel_removed(state, id))
        }

        UiToEngine::Click { x, y } => match state.compositor.select_at([x, y])? {
            Some((key, voxel)) => {
                debug!(coord = ?voxel.coord, "click removed voxel");
                Ok(voxel_removed(state, key.to_id()))
            }
            None => Ok(EngineToUi::NothingSelected),
        },

        // -- Export --
        UiToEngine::ExportSvg => {
            let svg = state.export_svg()?;
            Ok(EngineToUi::ExportReady {
                file_name: SVG_FILE_NAME.to_string(),
                data_url: svg_data_url(&svg),
                svg,
            })
        }
    }
}

fn state_changed(state: &EngineState) -> EngineToUi {
    EngineToUi::StateChanged {
        state: state.compositor.state(),
    }
}

/// Build a SceneUpdated response from the current composition.
fn scene_updated(state: &EngineState) -> Result<EngineToUi, BridgeError> {
    let composition = state
        .compositor
        .composition()
        .ok_or(EngineError::NoScene)?;
    Ok(EngineToUi::SceneUpdated {
        scene_id: composition.id,
        scale: composition.scene.scale(),
        palette: composition.palette,
        commands: composition.scene.draw_commands(),
        face: composition.face.clone(),
    })
}

fn voxel_removed(state: &EngineState, id: u64) -> EngineToUi {
    EngineToUi::VoxelRemoved {
        id,
        remaining: state.compositor.scene().map_or(0, |scene| scene.len()),
    }
}
