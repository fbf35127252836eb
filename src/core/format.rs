use serde::{Deserialize, Serialize};

use crate::core::record::days_to_date;

/// Per-channel display formatter used by axis labels and the tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueFormat {
    /// Fixed number of decimal places.
    Fixed(usize),
    /// Fraction in [0, 1] rendered as a whole percentage.
    Percent,
    /// Days-since-epoch value rendered as a calendar date.
    Date,
}

impl ValueFormat {
    #[must_use]
    pub fn apply(self, value: f64) -> String {
        match self {
            Self::Fixed(places) => format!("{value:.places$}"),
            Self::Percent => format!("{:.0}%", value * 100.0),
            Self::Date => match days_to_date(value) {
                Some(date) => date.format("%B %-d, %Y").to_string(),
                None => value.to_string(),
            },
        }
    }
}
