//! Shading palettes derived from a single base color.
//!
//! Colors are converted into OKLCh, a perceptually uniform cylindrical space,
//! and only the lightness channel is scaled. Every shade in a palette therefore
//! shares the base color's hue and chroma.

pub mod color;
pub mod error;
pub mod palette;

pub use color::{LinearRgb, OkLab, OkLch, Srgb};
pub use error::ColorError;
pub use palette::{derive, derive_family, ColorPalette, ShadeFamily};
