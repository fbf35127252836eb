use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Linear mapping from a data domain onto a pixel range.
///
/// The range may run backwards (`start > end`); a y-position scale uses
/// range `(bounded_height, 0)` so larger data values land higher on screen
/// even though pixel coordinates grow downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;

        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-degenerate".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() || range_start == range_end {
            return Err(ChartError::InvalidData(
                "scale range must be finite and non-degenerate".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value to its pixel position.
    pub fn map(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    /// Maps a pixel position back to its domain value.
    pub fn invert(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    /// Rounds the domain outward to multiples of a clean 1/2/5 tick step so
    /// axis labels land on round numbers. `[11.8, 77.26]` at ten ticks
    /// becomes `[10, 80]`. The range is untouched.
    #[must_use]
    pub fn nice(self, tick_count: usize) -> Self {
        let ascending = self.domain_start < self.domain_end;
        let (low, high) = if ascending {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        };

        let step = tick_step(low, high, tick_count);
        if step <= 0.0 {
            return self;
        }

        let niced_low = (low / step).floor() * step;
        let niced_high = (high / step).ceil() * step;
        if !niced_low.is_finite() || !niced_high.is_finite() || niced_low == niced_high {
            return self;
        }

        let (domain_start, domain_end) = if ascending {
            (niced_low, niced_high)
        } else {
            (niced_high, niced_low)
        };

        Self {
            domain_start,
            domain_end,
            ..self
        }
    }

    /// Evenly spaced round-step tick values inside the current domain.
    #[must_use]
    pub fn ticks(self, tick_count: usize) -> Vec<f64> {
        let (low, high) = if self.domain_start < self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        };

        let step = tick_step(low, high, tick_count);
        if step <= 0.0 {
            return Vec::new();
        }

        let first = (low / step).ceil();
        let last = (high / step).floor();
        let mut ticks = Vec::new();
        let mut index = first;
        while index <= last {
            ticks.push(index * step);
            index += 1.0;
        }
        ticks
    }
}

/// Clean tick step for a span and a target tick count (1/2/5 ladder).
fn tick_step(low: f64, high: f64, tick_count: usize) -> f64 {
    let span = high - low;
    if tick_count == 0 || !span.is_finite() || span <= 0.0 {
        return 0.0;
    }

    let raw = span / tick_count as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let error = raw / magnitude;

    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    factor * magnitude
}
