pub mod grid;
pub mod lattice;
pub mod params;
pub mod pattern;

pub use grid::*;
pub use lattice::*;
pub use params::*;
pub use pattern::*;
