use cube_color::ColorPalette;
use cube_types::GenerateParams;
use iso_scene::DrawCommand;
use pattern_ops::FaceSample;
use scene_engine::{EngineConfig, LifecycleState};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Messages from the UI (JavaScript main thread) to the engine.
/// Serialized as JSON for postMessage transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToEngine {
    // -- Lifecycle --
    /// The host canvas is mounted.
    Attach,
    /// Replace the engine configuration.
    Configure { config: EngineConfig },
    /// The host canvas is going away.
    Detach,

    // -- Generation --
    /// Build a new sculpture, replacing the current one.
    Generate { params: GenerateParams },
    /// Derive a palette from one base color and repaint.
    SetColor { color: String },
    /// Repaint with four explicitly chosen colors.
    Recolor { palette: ColorPalette },

    // -- Removal --
    /// Remove a voxel by id.
    RemoveVoxel { id: u64 },
    /// The user clicked the canvas at screen position `(x, y)`.
    Click { x: f64, y: f64 },

    // -- Export --
    ExportSvg,
}

/// Messages from the engine to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineToUi {
    /// The lifecycle or configuration changed; no new drawing.
    StateChanged { state: LifecycleState },

    /// A new or repainted scene, as a full draw list.
    SceneUpdated {
        scene_id: Uuid,
        scale: f64,
        palette: ColorPalette,
        commands: Vec<DrawCommand>,
        /// The face sample behind a symmetric sculpture.
        face: Option<FaceSample>,
    },

    /// One voxel's quads were taken out of the scene.
    VoxelRemoved { id: u64, remaining: usize },

    /// A click hit no voxel.
    NothingSelected,

    /// SVG export is ready.
    ExportReady {
        file_name: String,
        svg: String,
        data_url: String,
    },

    /// The engine has released its scene.
    Detached,

    /// An error occurred in the engine.
    Error { message: String },
}
