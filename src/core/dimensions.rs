use serde::{Deserialize, Serialize};

use crate::core::types::{Point, Viewport};
use crate::error::{ChartError, ChartResult};

/// Four non-negative insets around the bounded plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 10.0,
            right: 10.0,
            bottom: 50.0,
            left: 50.0,
        }
    }
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    #[must_use]
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }

    pub fn validate(self) -> ChartResult<()> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Pixel geometry of one chart: outer box, margins and the derived bounded
/// plot area. Computed once per render and read-only afterward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    width: f64,
    height: f64,
    margins: Margins,
    bounded_width: f64,
    bounded_height: f64,
}

impl Dimensions {
    /// Builds geometry from an explicit outer box.
    ///
    /// Margins that meet or exceed the outer box are rejected rather than
    /// clamped so a bad configuration fails at construction time.
    pub fn new(width: f64, height: f64, margins: Margins) -> ChartResult<Self> {
        margins.validate()?;
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidData(
                "outer dimensions must be finite and > 0".to_owned(),
            ));
        }

        let bounded_width = width - margins.horizontal();
        let bounded_height = height - margins.vertical();
        if bounded_width <= 0.0 || bounded_height <= 0.0 {
            return Err(ChartError::InvalidMargins {
                horizontal: margins.horizontal(),
                vertical: margins.vertical(),
                width,
                height,
            });
        }

        Ok(Self {
            width,
            height,
            margins,
            bounded_width,
            bounded_height,
        })
    }

    /// Builds a square chart sized to the smaller viewport side, scaled by
    /// `padding_ratio` to leave breathing room around the plot.
    pub fn fit_square(
        viewport: Viewport,
        margins: Margins,
        padding_ratio: f64,
    ) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !padding_ratio.is_finite() || padding_ratio <= 0.0 || padding_ratio > 1.0 {
            return Err(ChartError::InvalidData(
                "padding ratio must be finite and in (0, 1]".to_owned(),
            ));
        }

        let side = f64::from(viewport.width.min(viewport.height)) * padding_ratio;
        Self::new(side, side, margins)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn margins(self) -> Margins {
        self.margins
    }

    #[must_use]
    pub fn bounded_width(self) -> f64 {
        self.bounded_width
    }

    #[must_use]
    pub fn bounded_height(self) -> f64 {
        self.bounded_height
    }

    /// Top-left corner of the bounded plot area in outer coordinates.
    #[must_use]
    pub fn bounds_origin(self) -> Point {
        Point::new(self.margins.left, self.margins.top)
    }
}
