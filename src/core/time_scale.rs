use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::extent::extent;
use crate::core::record::{Field, WeatherRecord, date_to_days, days_to_date};
use crate::core::scale::LinearScale;
use crate::error::{ChartError, ChartResult};

/// Calendar-date axis, mapped through days-since-epoch onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(start: NaiveDate, end: NaiveDate, range: (f64, f64)) -> ChartResult<Self> {
        if start == end {
            return Err(ChartError::InvalidData(
                "time scale domain must span more than one day".to_owned(),
            ));
        }

        Ok(Self {
            linear: LinearScale::new((date_to_days(start), date_to_days(end)), range)?,
        })
    }

    /// Fits the domain to the date extent of a dataset.
    pub fn from_records(records: &[WeatherRecord], range: (f64, f64)) -> ChartResult<Self> {
        let (start_days, end_days) = extent(records, Field::Date)?;
        if start_days == end_days {
            return Err(ChartError::InvalidData(
                "time scale domain must span more than one day".to_owned(),
            ));
        }

        Ok(Self {
            linear: LinearScale::new((start_days, end_days), range)?,
        })
    }

    #[must_use]
    pub fn domain(self) -> (NaiveDate, NaiveDate) {
        let (start, end) = self.linear.domain();
        // Domain was constructed from whole dates, so conversion back is total.
        (
            days_to_date(start).unwrap_or_default(),
            days_to_date(end).unwrap_or_default(),
        )
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    pub fn map_date(self, date: NaiveDate) -> ChartResult<f64> {
        self.linear.map(date_to_days(date))
    }

    /// Maps an already-projected days-since-epoch value.
    pub fn map_days(self, days: f64) -> ChartResult<f64> {
        self.linear.map(days)
    }

    pub fn invert(self, pixel: f64) -> ChartResult<NaiveDate> {
        let days = self.linear.invert(pixel)?;
        days_to_date(days).ok_or_else(|| {
            ChartError::InvalidData(format!("pixel {pixel} maps outside the calendar range"))
        })
    }

    /// Round-step tick dates inside the current domain.
    #[must_use]
    pub fn ticks(self, tick_count: usize) -> Vec<NaiveDate> {
        self.linear
            .ticks(tick_count)
            .into_iter()
            .filter_map(days_to_date)
            .collect()
    }
}
