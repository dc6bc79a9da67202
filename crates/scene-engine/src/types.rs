use serde::{Deserialize, Serialize};

/// Lifecycle of a compositor relative to its host canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LifecycleState {
    /// Created, no canvas attached yet.
    Uninitialized,
    /// Attached; generate, recolor and removal are allowed.
    Ready,
    /// Detached. Terminal.
    TornDown,
}

/// Errors from the scene compositor.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("pattern error: {0}")]
    Op(#[from] pattern_ops::OpError),

    #[error("color error: {0}")]
    Color(#[from] cube_color::ColorError),

    #[error("engine is not attached to a canvas")]
    NotAttached,

    #[error("engine is already attached to a canvas")]
    AlreadyAttached,

    #[error("engine has been torn down")]
    TornDown,

    #[error("no scene has been generated yet")]
    NoScene,

    #[error("voxel {id} is not in the scene")]
    VoxelNotFound { id: u64 },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}
