use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_engine::{EngineConfig, EngineError, SceneCompositor};
use scene_export::{export_svg, ExportError, ExportMetadata};

/// Name written into exported metadata.
pub const GENERATOR: &str = "cube-sculptor";

/// The engine state wrapper for the message bridge.
///
/// Holds the compositor and the random source it draws from.
pub struct EngineState {
    pub compositor: SceneCompositor,
    pub rng: StdRng,
}

impl EngineState {
    /// Create a new engine state. A configured seed makes every
    /// generation reproducible; otherwise the RNG is seeded from the OS.
    pub fn new(config: EngineConfig) -> Self {
        let rng = seeded_rng(config.seed);
        Self {
            compositor: SceneCompositor::new(config),
            rng,
        }
    }

    /// Apply a new configuration, reseeding if it carries a seed.
    pub fn configure(&mut self, config: EngineConfig) -> Result<(), BridgeError> {
        let seed = config.seed;
        self.compositor.configure(config)?;
        if seed.is_some() {
            self.rng = seeded_rng(seed);
        }
        Ok(())
    }

    /// Serialize the current scene to SVG.
    pub fn export_svg(&self) -> Result<String, BridgeError> {
        let composition = self
            .compositor
            .composition()
            .ok_or(EngineError::NoScene)?;
        let metadata = ExportMetadata::new(GENERATOR)
            .with_params(composition.params.clone())
            .with_palette(composition.palette);
        Ok(export_svg(&composition.scene, &metadata)?)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Errors from the bridge layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BridgeError {
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("export error: {0}")]
    Export(#[from] ExportError),

    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}
