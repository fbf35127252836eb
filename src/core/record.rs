use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One daily weather observation.
///
/// Every field is optional: the upstream JSON is loosely typed, so a missing,
/// null or non-numeric value deserializes to `None` instead of failing the
/// whole dataset. Consumers decide per channel whether absence is an error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    #[serde(default, deserialize_with = "lenient_number")]
    pub dew_point: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub humidity: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub cloud_cover: Option<f64>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
}

impl WeatherRecord {
    #[must_use]
    pub fn new(
        dew_point: Option<f64>,
        humidity: Option<f64>,
        cloud_cover: Option<f64>,
        date: Option<NaiveDate>,
    ) -> Self {
        Self {
            dew_point,
            humidity,
            cloud_cover,
            date,
        }
    }

    /// Stable join key for mark reconciliation.
    ///
    /// Dated records key on their ISO date; undated records fall back to
    /// their position in the dataset.
    #[must_use]
    pub fn key(&self, index: usize) -> String {
        match self.date {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => format!("record-{index}"),
        }
    }
}

/// Named data channel of a [`WeatherRecord`].
///
/// Replaces ad-hoc accessor closures: each variant is a pure projection from
/// a record to an optional scalar, so missing values must be handled at the
/// call site instead of surfacing as NaN coordinates downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, Deserialize)]
pub enum Field {
    DewPoint,
    Humidity,
    CloudCover,
    Date,
}

impl Field {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DewPoint => "dewPoint",
            Self::Humidity => "humidity",
            Self::CloudCover => "cloudCover",
            Self::Date => "date",
        }
    }

    /// Projects one scalar out of a record. Dates project to days since the
    /// Unix epoch so every channel shares one numeric domain type.
    #[must_use]
    pub fn project(self, record: &WeatherRecord) -> Option<f64> {
        match self {
            Self::DewPoint => record.dew_point,
            Self::Humidity => record.humidity,
            Self::CloudCover => record.cloud_cover,
            Self::Date => record.date.map(date_to_days),
        }
    }
}

/// Days since 1970-01-01, negative for earlier dates.
#[must_use]
pub fn date_to_days(date: NaiveDate) -> f64 {
    date.signed_duration_since(NaiveDate::default()).num_days() as f64
}

/// Inverse of [`date_to_days`]. Returns `None` when the value is not finite
/// or falls outside the representable calendar range.
#[must_use]
pub fn days_to_date(days: f64) -> Option<NaiveDate> {
    if !days.is_finite() {
        return None;
    }
    let delta = chrono::TimeDelta::try_days(days.round() as i64)?;
    NaiveDate::default().checked_add_signed(delta)
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::Number(number) => number.as_f64().filter(|parsed| parsed.is_finite()),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|parsed| parsed.is_finite()),
        _ => None,
    }))
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|text| parse_date(text.trim())))
}

/// Accepts both `YYYY-MM-DD` and `YYYY/MM/DD` calendar-date notations.
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(text, "%Y/%m/%d"))
        .ok()
}
