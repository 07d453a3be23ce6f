//! HEX/HSL color conversion for palette editing.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color `{0}`: expected #rrggbb")]
    Format(String),
}

/// A 24-bit RGB color rendered as a lowercase `#rrggbb` string.
///
/// Only constructible through validation (or from literal channel values for
/// the built-in palettes), so a `HexColor` is always well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn new(s: &str) -> Result<Self, ColorError> {
        s.parse()
    }

    pub fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Convert to HSL with components rounded to whole degrees/percent.
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic: hue is undefined, reported as 0.
            return Hsl {
                h: 0.0,
                s: 0.0,
                l: (l * 100.0).round(),
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        } / 6.0;

        Hsl {
            h: (h * 360.0).round(),
            s: (s * 100.0).round(),
            l: (l * 100.0).round(),
        }
    }

    /// Shift hue/saturation/lightness by the given deltas, through HSL.
    ///
    /// Hue wraps around the color wheel; saturation and lightness clamp to
    /// 0..100. Backs slider-style palette editing.
    pub fn adjust(self, dh: f64, ds: f64, dl: f64) -> Self {
        let hsl = self.to_hsl();
        Hsl {
            h: (hsl.h + dh).rem_euclid(360.0),
            s: (hsl.s + ds).clamp(0.0, 100.0),
            l: (hsl.l + dl).clamp(0.0, 100.0),
        }
        .to_hex()
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = match s.strip_prefix('#') {
            Some(d) if d.len() == 6 => d,
            _ => return Err(ColorError::Format(s.to_string())),
        };
        let mut bytes = [0u8; 3];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| ColorError::Format(s.to_string()))?;
        Ok(Self::rgb(bytes[0], bytes[1], bytes[2]))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// Transient hue/saturation/lightness triple (degrees, percent, percent).
/// Used only while converting or deriving colors; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    pub fn with_lightness(self, l: f64) -> Self {
        Self {
            l: l.clamp(0.0, 100.0),
            ..self
        }
    }

    pub fn to_hex(self) -> HexColor {
        let h = self.h / 360.0;
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return HexColor::rgb(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        let channel = |t: f64| -> u8 {
            let v = hue_to_rgb(p, q, t);
            (v * 255.0).round() as u8
        };

        HexColor::rgb(
            channel(h + 1.0 / 3.0),
            channel(h),
            channel(h - 1.0 / 3.0),
        )
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
