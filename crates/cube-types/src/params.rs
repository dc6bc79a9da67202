use serde::{Deserialize, Serialize};

/// Whether the sculpture is generated from a symmetric face pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// One 8-fold symmetric face pattern mirrored onto all six faces.
    Symmetric,
    /// Every lattice cell sampled independently.
    Asymmetric,
}

/// What happens to cells that lie on no face of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteriorMode {
    /// Interior cells are always empty.
    #[default]
    Hollow,
    /// Interior cells copy `pattern[x][y]`.
    Solid,
}

/// The configuration surface the UI binds to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateParams {
    pub size: usize,
    pub shape: Shape,
    pub probability: f64,
    /// Base color as a hex RGB string, e.g. `#3a7bd5`.
    pub color: String,
}

impl GenerateParams {
    pub fn new(size: usize, shape: Shape, probability: f64, color: impl Into<String>) -> Self {
        Self {
            size,
            shape,
            probability,
            color: color.into(),
        }
    }
}
