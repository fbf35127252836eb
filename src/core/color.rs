use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rrggbb` or `#rrggbbaa` hex notation.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ChartError::InvalidData(format!(
                "hex color `{input}` must have 6 or 8 digits"
            )));
        }
        // Length is in bytes; non-ASCII input must fail before slicing.
        if !digits.is_ascii() {
            return Err(ChartError::InvalidData(format!(
                "hex color `{input}` contains non-hex digits"
            )));
        }

        let channel = |range: std::ops::Range<usize>| -> ChartResult<f64> {
            let value = u8::from_str_radix(&digits[range], 16).map_err(|_| {
                ChartError::InvalidData(format!("hex color `{input}` contains non-hex digits"))
            })?;
            Ok(f64::from(value) / 255.0)
        };

        let alpha = if digits.len() == 8 {
            channel(6..8)?
        } else {
            1.0
        };

        Ok(Self::rgba(channel(0..2)?, channel(2..4)?, channel(4..6)?, alpha))
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Linear per-channel interpolation. `t` is clamped to [0, 1], and the
    /// weighted form reproduces the endpoint colors exactly at 0 and 1.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a * (1.0 - t) + b * t;
        Self {
            red: mix(self.red, other.red),
            green: mix(self.green, other.green),
            blue: mix(self.blue, other.blue),
            alpha: mix(self.alpha, other.alpha),
        }
    }
}
