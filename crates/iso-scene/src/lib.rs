//! Isometric projection of voxel lattices into a declarative scene.
//!
//! [`IsoProjector`] turns each occupied lattice cell into a [`VoxelPrimitive`]
//! of three shaded quads. A [`Scene`] owns the primitives behind stable
//! [`VoxelKey`]s, supports recoloring and removal, and replays itself into any
//! [`SceneSink`] the host provides.

pub mod primitive;
pub mod projection;
pub mod scene;
pub mod sink;

pub use primitive::{Background, PlaneView, Quad, VoxelPrimitive};
pub use projection::{IsoProjector, ProjectionSettings};
pub use scene::{DrawCommand, Scene, VoxelKey};
pub use sink::SceneSink;
