mod chart;
mod config;
mod dataset;
mod scales;
mod timeseries;

pub use chart::Chart;
pub use config::ChartConfig;
pub use dataset::{load_records, parse_records};
pub use scales::ChannelScales;
pub use timeseries::{TimeseriesScales, area_path, line_path};
