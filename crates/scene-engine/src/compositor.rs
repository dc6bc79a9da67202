use cube_color::ColorPalette;
use cube_types::{GenerateParams, OccupancyGrid, Shape};
use iso_scene::{Background, IsoProjector, Scene, SceneSink, VoxelKey, VoxelPrimitive};
use pattern_ops::{
    mirror, random_occupancy, symmetric_face, validate_probability, validate_size,
    validate_symmetric_size, FaceSample,
};
use rand::Rng;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::types::{EngineError, LifecycleState};

/// Everything produced by one `generate` call.
#[derive(Debug, Clone)]
pub struct Composition {
    /// Identifies this generation; a new id is issued on every regenerate.
    pub id: Uuid,
    pub params: GenerateParams,
    /// Occupancy as generated. Voxel removal does not touch it.
    pub grid: OccupancyGrid,
    /// The face sample behind a symmetric grid, `None` for asymmetric shapes.
    pub face: Option<FaceSample>,
    /// The palette currently painted on the scene.
    pub palette: ColorPalette,
    pub scene: Scene,
}

/// Orchestrates pattern generation, mirroring, coloring and projection.
///
/// Owns the occupancy grid and scene of the current generation. All inputs
/// are validated before any state changes, so a failed call leaves the
/// previous scene exactly as it was.
pub struct SceneCompositor {
    config: EngineConfig,
    state: LifecycleState,
    current: Option<Composition>,
}

impl SceneCompositor {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: LifecycleState::Uninitialized,
            current: None,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn composition(&self) -> Option<&Composition> {
        self.current.as_ref()
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.current.as_ref().map(|c| &c.scene)
    }

    pub fn grid(&self) -> Option<&OccupancyGrid> {
        self.current.as_ref().map(|c| &c.grid)
    }

    pub fn palette(&self) -> Option<&ColorPalette> {
        self.current.as_ref().map(|c| &c.palette)
    }

    /// Host canvas attached: `Uninitialized -> Ready`.
    pub fn attach(&mut self) -> Result<(), EngineError> {
        match self.state {
            LifecycleState::Uninitialized => {
                self.state = LifecycleState::Ready;
                info!(
                    width = self.config.canvas_width,
                    height = self.config.canvas_height,
                    "compositor attached"
                );
                Ok(())
            }
            LifecycleState::Ready => Err(EngineError::AlreadyAttached),
            LifecycleState::TornDown => Err(EngineError::TornDown),
        }
    }

    /// Host canvas detached: the scene is discarded and the compositor is
    /// unusable from here on.
    pub fn teardown(&mut self) {
        self.current = None;
        self.state = LifecycleState::TornDown;
        info!("compositor torn down");
    }

    /// Replace the configuration. Takes effect on the next `generate`.
    pub fn configure(&mut self, config: EngineConfig) -> Result<(), EngineError> {
        if self.state == LifecycleState::TornDown {
            return Err(EngineError::TornDown);
        }
        config.validate()?;
        self.config = config;
        Ok(())
    }

    fn ensure_ready(&self) -> Result<(), EngineError> {
        match self.state {
            LifecycleState::Ready => Ok(()),
            LifecycleState::Uninitialized => Err(EngineError::NotAttached),
            LifecycleState::TornDown => Err(EngineError::TornDown),
        }
    }

    fn current_mut(&mut self) -> Result<&mut Composition, EngineError> {
        self.ensure_ready()?;
        self.current.as_mut().ok_or(EngineError::NoScene)
    }

    /// Generate a new sculpture and replace the current scene wholesale.
    #[instrument(skip(self, params, rng), fields(size = params.size, shape = ?params.shape))]
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        params: GenerateParams,
        rng: &mut R,
    ) -> Result<&Composition, EngineError> {
        self.ensure_ready()?;

        let n = params.size;
        match params.shape {
            Shape::Symmetric => validate_symmetric_size(n)?,
            Shape::Asymmetric => validate_size(n)?,
        }
        validate_probability(params.probability)?;
        let palette = cube_color::derive(&params.color)?;

        let (grid, face) = match params.shape {
            Shape::Symmetric => {
                let sample = symmetric_face(
                    n,
                    params.probability,
                    self.config.max_pattern_attempts,
                    rng,
                )?;
                let grid = mirror(n, &sample.pattern, self.config.interior)?;
                (grid, Some(sample))
            }
            Shape::Asymmetric => (random_occupancy(n, params.probability, rng)?, None),
        };

        let scene = self.compose(&grid, &palette);
        let composition = Composition {
            id: Uuid::new_v4(),
            params,
            grid,
            face,
            palette,
            scene,
        };

        info!(
            id = %composition.id,
            voxels = composition.scene.len(),
            attempts = composition.face.as_ref().map(|f| f.attempts),
            "generated sculpture"
        );
        Ok(&*self.current.insert(composition))
    }

    /// Background plus one primitive per occupied cell, in `x`, `y`, `z` order.
    fn compose(&self, grid: &OccupancyGrid, palette: &ColorPalette) -> Scene {
        let projector = IsoProjector::new(grid.size(), &self.config.projection());
        let background = Background::covering(
            self.config.canvas_width,
            self.config.canvas_height,
            self.config.background_extent,
            palette.background,
        );
        let mut scene = Scene::new(
            self.config.canvas_width,
            self.config.canvas_height,
            projector.scale(),
            background,
        );
        for coord in grid.occupied() {
            scene.push(projector.project(coord, palette));
        }
        scene
    }

    /// Repaint the current scene with `palette`. Geometry is untouched.
    pub fn recolor(&mut self, palette: ColorPalette) -> Result<(), EngineError> {
        let current = self.current_mut()?;
        current.scene.recolor(&palette);
        current.palette = palette;
        debug!(base = %palette.base, "recolored scene");
        Ok(())
    }

    /// Derive a palette from `hex` and repaint with it. On an invalid color
    /// the current palette is kept.
    pub fn set_color(&mut self, hex: &str) -> Result<ColorPalette, EngineError> {
        self.current_mut()?;
        let palette = cube_color::derive(hex)?;
        self.recolor(palette)?;
        if let Some(current) = self.current.as_mut() {
            current.params.color = hex.to_string();
        }
        Ok(palette)
    }

    /// Remove one voxel's quads from the scene. The grid keeps the cell.
    pub fn remove_voxel(&mut self, key: VoxelKey) -> Result<VoxelPrimitive, EngineError> {
        let current = self.current_mut()?;
        current
            .scene
            .remove(key)
            .ok_or(EngineError::VoxelNotFound { id: key.to_id() })
    }

    /// Remove the topmost voxel under `point`, if there is one.
    pub fn select_at(
        &mut self,
        point: [f64; 2],
    ) -> Result<Option<(VoxelKey, VoxelPrimitive)>, EngineError> {
        let current = self.current_mut()?;
        let Some(key) = current.scene.hit_test(point) else {
            return Ok(None);
        };
        Ok(current.scene.remove(key).map(|voxel| (key, voxel)))
    }

    /// Replay the current scene into a host sink.
    pub fn render(&self, sink: &mut dyn SceneSink) -> Result<(), EngineError> {
        self.ensure_ready()?;
        let current = self.current.as_ref().ok_or(EngineError::NoScene)?;
        current.scene.render_to(sink);
        Ok(())
    }
}

impl Default for SceneCompositor {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
