use serde::{Deserialize, Serialize};

use crate::core::color::Color;
use crate::error::{ChartError, ChartResult};

/// Maps a data extent directly onto a two-color interpolated gradient.
///
/// Unlike position scales the domain is never niced: the gradient endpoints
/// sit exactly on the data extent. Out-of-domain values clamp to the nearest
/// endpoint color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    domain_start: f64,
    domain_end: f64,
    start: Color,
    end: Color,
}

impl ColorScale {
    pub fn new(domain: (f64, f64), start: Color, end: Color) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "color scale domain must be finite and non-degenerate".to_owned(),
            ));
        }
        start.validate()?;
        end.validate()?;

        Ok(Self {
            domain_start,
            domain_end,
            start,
            end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn endpoints(self) -> (Color, Color) {
        (self.start, self.end)
    }

    pub fn map(self, value: f64) -> ChartResult<Color> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let t = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.start.lerp(self.end, t))
    }
}
