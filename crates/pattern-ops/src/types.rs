use cube_types::FacePattern;
use serde::{Deserialize, Serialize};

/// A symmetric face pattern together with how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceSample {
    /// The accepted pattern.
    pub pattern: FacePattern,
    /// Number of sampling passes performed, including the accepted one.
    pub attempts: usize,
    /// True if every pass was degenerate and the centre cell was flipped.
    pub forced: bool,
}

/// Errors from pattern generation and mirroring.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OpError {
    #[error("probability {value} is outside [0, 1]")]
    InvalidProbability { value: f64 },

    #[error("invalid size {size}: {reason}")]
    InvalidSize { size: usize, reason: String },

    #[error("face pattern is {actual}×{actual} but the lattice is {expected}×{expected}")]
    SizeMismatch { expected: usize, actual: usize },
}
