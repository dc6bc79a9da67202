//! Message bridge between the sculpture engine and a browser UI.
//!
//! The UI posts JSON-encoded [`UiToEngine`] messages; [`dispatch`] routes them
//! to the compositor and answers with an [`EngineToUi`] message. On `wasm32`
//! the same protocol is exposed through `wasm_bindgen` entry points.

pub mod dispatch;
pub mod engine_state;
pub mod messages;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use dispatch::{decode_message, dispatch, dispatch_json, encode_response};
pub use engine_state::{BridgeError, EngineState};
pub use messages::{EngineToUi, UiToEngine};
