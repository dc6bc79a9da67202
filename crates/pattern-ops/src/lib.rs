pub mod face;
pub mod mirror;
pub mod occupancy;
pub mod types;
pub mod validate;

pub use face::{orbit, random_face, symmetric_face, DEFAULT_MAX_ATTEMPTS};
pub use mirror::mirror;
pub use occupancy::random_occupancy;
pub use types::*;
pub use validate::{validate_probability, validate_size, validate_symmetric_size};
