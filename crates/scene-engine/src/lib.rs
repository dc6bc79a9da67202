pub mod compositor;
pub mod config;
pub mod types;

pub use compositor::{Composition, SceneCompositor};
pub use config::EngineConfig;
pub use types::{EngineError, LifecycleState};
