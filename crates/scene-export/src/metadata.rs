use chrono::{DateTime, Utc};
use cube_color::ColorPalette;
use cube_types::GenerateParams;
use serde::{Deserialize, Serialize};

/// Generation details embedded in an exported SVG.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Name of the tool that produced the file.
    pub generator: String,
    /// When the export was made.
    pub created: DateTime<Utc>,
    pub params: Option<GenerateParams>,
    pub palette: Option<ColorPalette>,
    /// Voxels still in the scene at export time.
    pub voxel_count: usize,
}

impl ExportMetadata {
    /// Create metadata with the given generator name and current timestamp.
    pub fn new(generator: impl Into<String>) -> Self {
        Self {
            generator: generator.into(),
            created: Utc::now(),
            params: None,
            palette: None,
            voxel_count: 0,
        }
    }

    pub fn with_params(mut self, params: GenerateParams) -> Self {
        self.params = Some(params);
        self
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = Some(palette);
        self
    }
}
