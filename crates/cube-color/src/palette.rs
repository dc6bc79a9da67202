use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{OkLch, Srgb};
use crate::error::ColorError;

/// Lightness multipliers for the light shade, dark shade and background.
pub const LIGHT_SHADE_FACTOR: f64 = 1.0 / 2.0;
pub const DARK_SHADE_FACTOR: f64 = 1.0 / 3.0;
pub const BACKGROUND_FACTOR: f64 = 1.0 / 10.0;

/// The four shades of a palette in OKLCh, before conversion to sRGB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadeFamily {
    pub base: OkLch,
    pub light_shade: OkLch,
    pub dark_shade: OkLch,
    pub background: OkLch,
}

impl ShadeFamily {
    /// Scale the lightness of `base` by 1, 1/2, 1/3 and 1/10.
    pub fn from_base(base: OkLch) -> Self {
        Self {
            base,
            light_shade: base.scale_lightness(LIGHT_SHADE_FACTOR),
            dark_shade: base.scale_lightness(DARK_SHADE_FACTOR),
            background: base.scale_lightness(BACKGROUND_FACTOR),
        }
    }

    pub fn to_palette(&self) -> ColorPalette {
        ColorPalette {
            base: self.base.to_srgb(),
            light_shade: self.light_shade.to_srgb(),
            dark_shade: self.dark_shade.to_srgb(),
            background: self.background.to_srgb(),
        }
    }
}

/// Colors used to paint a scene.
///
/// `base` fills top faces, `light_shade` right faces, `dark_shade` left faces
/// and every stroke, `background` the backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub base: Srgb,
    pub light_shade: Srgb,
    pub dark_shade: Srgb,
    pub background: Srgb,
}

/// Parse `base_hex` and derive its shade family in OKLCh.
pub fn derive_family(base_hex: &str) -> Result<ShadeFamily, ColorError> {
    let base = Srgb::from_hex(base_hex)?;
    Ok(ShadeFamily::from_base(base.to_oklch()))
}

/// Derive the four-color shading palette for `base_hex`.
///
/// The base color itself is passed through untouched; the other three are
/// lightness-scaled variants with the same hue. Chroma drops only where a
/// shade would otherwise fall outside sRGB.
pub fn derive(base_hex: &str) -> Result<ColorPalette, ColorError> {
    let base = Srgb::from_hex(base_hex)?;
    let mut palette = ShadeFamily::from_base(base.to_oklch()).to_palette();
    palette.base = base;
    debug!(
        base = %palette.base,
        light = %palette.light_shade,
        dark = %palette.dark_shade,
        background = %palette.background,
        "derived palette"
    );
    Ok(palette)
}
