mod color;
mod color_scale;
mod dimensions;
mod extent;
mod format;
mod record;
mod scale;
mod time_scale;
mod types;

pub use color::Color;
pub use color_scale::ColorScale;
pub use dimensions::{Dimensions, Margins};
pub use extent::extent;
pub use format::ValueFormat;
pub use record::{Field, WeatherRecord, date_to_days, days_to_date, parse_date};
pub use scale::LinearScale;
pub use time_scale::TimeScale;
pub use types::{Point, Viewport};
