//! SculptureBuilder: fluent API for scripting sculpture workflows in tests.
//!
//! Wraps `wasm_bridge::dispatch()` to test the real dispatch path, not a
//! simulation. Every action is recorded so a failing test can print what led
//! up to it.

use cube_color::{derive_family, ColorPalette};
use cube_types::{GenerateParams, Shape};
use scene_engine::{Composition, EngineConfig};
use wasm_bridge::{EngineState, EngineToUi, UiToEngine};

use crate::helpers::{seeded_config, HarnessError};
use crate::oracle::{self, OracleVerdict};
use crate::report::SceneReport;

/// A fluent builder for generating and verifying sculptures in tests.
pub struct SculptureBuilder {
    pub state: EngineState,
    history: Vec<(String, String)>,
    removed: Vec<u64>,
}

impl SculptureBuilder {
    /// A builder over an attached engine with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_config(seeded_config(seed))
    }

    /// A builder over an attached engine with `config`.
    pub fn with_config(config: EngineConfig) -> Self {
        let mut builder = Self {
            state: EngineState::new(config),
            history: Vec::new(),
            removed: Vec::new(),
        };
        builder.send("Attach", UiToEngine::Attach);
        builder
    }

    fn send(&mut self, action: &str, msg: UiToEngine) -> EngineToUi {
        let response = wasm_bridge::dispatch(&mut self.state, msg);
        let outcome = match &response {
            EngineToUi::Error { message } => format!("error: {message}"),
            other => response_name(other).to_string(),
        };
        self.history.push((action.to_string(), outcome));
        response
    }

    fn expect_scene(&mut self, action: &str, msg: UiToEngine) -> Result<&mut Self, HarnessError> {
        match self.send(action, msg) {
            EngineToUi::SceneUpdated { .. } => Ok(self),
            other => Err(unexpected(action, other)),
        }
    }

    // ── Actions ─────────────────────────────────────────────────────────

    pub fn generate(
        &mut self,
        size: usize,
        shape: Shape,
        probability: f64,
        color: &str,
    ) -> Result<&mut Self, HarnessError> {
        let params = GenerateParams::new(size, shape, probability, color);
        self.expect_scene("Generate", UiToEngine::Generate { params })?;
        self.removed.clear();
        Ok(self)
    }

    pub fn symmetric(&mut self, size: usize, probability: f64) -> Result<&mut Self, HarnessError> {
        self.generate(size, Shape::Symmetric, probability, "#3a7bd5")
    }

    pub fn set_color(&mut self, color: &str) -> Result<&mut Self, HarnessError> {
        self.expect_scene(
            "SetColor",
            UiToEngine::SetColor {
                color: color.to_string(),
            },
        )
    }

    pub fn recolor(&mut self, palette: ColorPalette) -> Result<&mut Self, HarnessError> {
        self.expect_scene("Recolor", UiToEngine::Recolor { palette })
    }

    /// Click at a screen point. Returns the removed voxel's id, if any.
    pub fn click(&mut self, x: f64, y: f64) -> Result<Option<u64>, HarnessError> {
        match self.send("Click", UiToEngine::Click { x, y }) {
            EngineToUi::VoxelRemoved { id, .. } => {
                self.removed.push(id);
                Ok(Some(id))
            }
            EngineToUi::NothingSelected => Ok(None),
            other => Err(unexpected("Click", other)),
        }
    }

    pub fn remove(&mut self, id: u64) -> Result<&mut Self, HarnessError> {
        match self.send("RemoveVoxel", UiToEngine::RemoveVoxel { id }) {
            EngineToUi::VoxelRemoved { .. } => {
                self.removed.push(id);
                Ok(self)
            }
            other => Err(unexpected("RemoveVoxel", other)),
        }
    }

    pub fn export_svg(&mut self) -> Result<String, HarnessError> {
        match self.send("ExportSvg", UiToEngine::ExportSvg) {
            EngineToUi::ExportReady { svg, .. } => Ok(svg),
            other => Err(unexpected("ExportSvg", other)),
        }
    }

    // ── Inspection ──────────────────────────────────────────────────────

    pub fn composition(&self) -> Result<&Composition, HarnessError> {
        self.state.compositor.composition().ok_or(HarnessError::NoScene)
    }

    /// Ids removed since the last generate.
    pub fn removed(&self) -> &[u64] {
        &self.removed
    }

    pub fn history(&self) -> &[(String, String)] {
        &self.history
    }

    // ── Verification ────────────────────────────────────────────────────

    /// Run every oracle that applies to the current composition.
    pub fn verify(&self) -> Result<Vec<OracleVerdict>, HarnessError> {
        let composition = self.composition()?;
        let mut verdicts = Vec::new();

        if let Some(face) = &composition.face {
            verdicts.push(oracle::check_dihedral_symmetry(&face.pattern));
            verdicts.push(oracle::check_not_degenerate(&face.pattern));
            verdicts.push(oracle::check_face_slices(&composition.grid, &face.pattern));
            verdicts.push(oracle::check_interior(
                &composition.grid,
                &face.pattern,
                self.state.compositor.config().interior,
            ));
        }
        if let Ok(family) = derive_family(&composition.params.color) {
            verdicts.push(oracle::check_shade_family(&family));
        }
        verdicts.push(oracle::check_scene_matches_grid(
            &composition.scene,
            &composition.grid,
        ));
        Ok(verdicts)
    }

    /// Fail with the first failing oracle, if any.
    pub fn assert_all_pass(&self) -> Result<(), HarnessError> {
        match self.verify()?.into_iter().find(|v| !v.passed) {
            Some(v) => Err(HarnessError::OracleFailure {
                oracle: v.oracle_name,
                detail: v.detail,
            }),
            None => Ok(()),
        }
    }

    pub fn report(&self) -> SceneReport {
        SceneReport::from_builder(self)
    }
}

fn response_name(response: &EngineToUi) -> &'static str {
    match response {
        EngineToUi::StateChanged { .. } => "StateChanged",
        EngineToUi::SceneUpdated { .. } => "SceneUpdated",
        EngineToUi::VoxelRemoved { .. } => "VoxelRemoved",
        EngineToUi::NothingSelected => "NothingSelected",
        EngineToUi::ExportReady { .. } => "ExportReady",
        EngineToUi::Detached => "Detached",
        EngineToUi::Error { .. } => "Error",
    }
}

fn unexpected(action: &str, response: EngineToUi) -> HarnessError {
    match response {
        EngineToUi::Error { message } => HarnessError::DispatchError { message },
        other => HarnessError::UnexpectedResponse {
            action: action.to_string(),
            got: response_name(&other).to_string(),
        },
    }
}
