use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// Slack on linear channels when testing gamut membership.
const GAMUT_EPSILON: f64 = 1e-7;
const GAMUT_SEARCH_STEPS: usize = 48;

/// 24-bit sRGB color. Serialized as a lowercase `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Srgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Linear-light RGB with channels nominally in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// OKLab: lightness plus two opponent axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// OKLCh: lightness, chroma and hue (radians) over OKLab.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OkLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Srgb {
    pub const BLACK: Srgb = Srgb::new(0, 0, 0);
    pub const WHITE: Srgb = Srgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb` (case-insensitive).
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidColor {
            input: input.to_string(),
        };
        let digits = input.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #abc is shorthand for #aabbcc
                let expand = |s: &str| channel(s).map(|v| v * 17);
                Ok(Self::new(
                    expand(&digits[0..1])?,
                    expand(&digits[1..2])?,
                    expand(&digits[2..3])?,
                ))
            }
            _ => Err(invalid()),
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_linear(&self) -> LinearRgb {
        LinearRgb {
            r: decode_channel(self.r),
            g: decode_channel(self.g),
            b: decode_channel(self.b),
        }
    }

    pub fn to_oklch(&self) -> OkLch {
        self.to_linear().to_oklab().to_oklch()
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Srgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<Srgb> for String {
    fn from(color: Srgb) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Srgb {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl LinearRgb {
    pub fn is_in_gamut(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(c))
    }

    /// Back to 8-bit sRGB. Channels are clamped; gamut-map first via
    /// [`OkLch::clip_to_gamut`] to keep hue.
    pub fn to_srgb(&self) -> Srgb {
        Srgb::new(
            encode_channel(self.r),
            encode_channel(self.g),
            encode_channel(self.b),
        )
    }

    pub fn to_oklab(&self) -> OkLab {
        let l = 0.412_221_470_8 * self.r + 0.536_332_536_3 * self.g + 0.051_445_992_9 * self.b;
        let m = 0.211_903_498_2 * self.r + 0.680_699_545_1 * self.g + 0.107_396_956_6 * self.b;
        let s = 0.088_302_461_9 * self.r + 0.281_718_837_6 * self.g + 0.629_978_700_5 * self.b;

        let (l, m, s) = (l.cbrt(), m.cbrt(), s.cbrt());

        OkLab {
            l: 0.210_454_255_3 * l + 0.793_617_785_0 * m - 0.004_072_046_8 * s,
            a: 1.977_998_495_1 * l - 2.428_592_205_0 * m + 0.450_593_709_9 * s,
            b: 0.025_904_037_1 * l + 0.782_771_766_2 * m - 0.808_675_766_0 * s,
        }
    }
}

impl OkLab {
    pub fn to_linear(&self) -> LinearRgb {
        let l = self.l + 0.396_337_777_4 * self.a + 0.215_803_757_3 * self.b;
        let m = self.l - 0.105_561_345_8 * self.a - 0.063_854_172_8 * self.b;
        let s = self.l - 0.089_484_177_5 * self.a - 1.291_485_548_0 * self.b;

        let (l, m, s) = (l * l * l, m * m * m, s * s * s);

        LinearRgb {
            r: 4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s,
            g: -1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s,
            b: -0.004_196_086_3 * l - 0.703_418_614_7 * m + 1.707_614_701_0 * s,
        }
    }

    pub fn to_oklch(&self) -> OkLch {
        OkLch {
            l: self.l,
            c: self.a.hypot(self.b),
            h: self.b.atan2(self.a),
        }
    }
}

impl OkLch {
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    pub fn to_oklab(&self) -> OkLab {
        OkLab {
            l: self.l,
            a: self.c * self.h.cos(),
            b: self.c * self.h.sin(),
        }
    }

    /// Whether the color is displayable without clamping any channel.
    pub fn is_in_gamut(&self) -> bool {
        self.to_oklab().to_linear().is_in_gamut()
    }

    /// Bring an out-of-gamut color inside sRGB by lowering chroma only.
    ///
    /// Lightness and hue are kept exactly; chroma is bisected down to the
    /// largest value whose linear channels all lie in `[0, 1]`.
    pub fn clip_to_gamut(&self) -> Self {
        if self.is_in_gamut() {
            return *self;
        }
        let (mut lo, mut hi) = (0.0, self.c);
        for _ in 0..GAMUT_SEARCH_STEPS {
            let mid = 0.5 * (lo + hi);
            if (Self { c: mid, ..*self }).is_in_gamut() {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        Self { c: lo, ..*self }
    }

    /// Gamut-map by chroma reduction, then encode to 8-bit sRGB.
    pub fn to_srgb(&self) -> Srgb {
        self.clip_to_gamut().to_oklab().to_linear().to_srgb()
    }

    /// Same hue and chroma, lightness multiplied by `factor`.
    pub fn scale_lightness(&self, factor: f64) -> Self {
        Self {
            l: self.l * factor,
            ..*self
        }
    }
}

fn decode_channel(v: u8) -> f64 {
    let c = f64::from(v) / 255.0;
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn encode_channel(c: f64) -> u8 {
    let c = c.clamp(0.0, 1.0);
    let v = if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    };
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
