use crate::api::ChartConfig;
use crate::core::{ColorScale, Dimensions, LinearScale, WeatherRecord, extent};
use crate::error::ChartResult;

/// Position and color scales for the configured channels of one chart.
///
/// The x range spans the bounded width; the y range is inverted
/// (`bounded_height` down to zero) so larger values render higher. Position
/// domains are niced to the configured tick count; the color domain maps the
/// raw extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelScales {
    pub x: LinearScale,
    pub y: LinearScale,
    pub color: ColorScale,
}

impl ChannelScales {
    pub fn build(
        records: &[WeatherRecord],
        dimensions: Dimensions,
        config: &ChartConfig,
    ) -> ChartResult<Self> {
        let x = LinearScale::new(
            pad_flat(extent(records, config.x_field)?),
            (0.0, dimensions.bounded_width()),
        )?
        .nice(config.tick_count);

        let y = LinearScale::new(
            pad_flat(extent(records, config.y_field)?),
            (dimensions.bounded_height(), 0.0),
        )?
        .nice(config.tick_count);

        let color = ColorScale::new(
            pad_flat(extent(records, config.color_field)?),
            config.gradient_start,
            config.gradient_end,
        )?;

        Ok(Self { x, y, color })
    }
}

/// A flat extent widens by half a unit each way so scale construction has a
/// usable domain even when every record carries the same value.
pub(crate) fn pad_flat((min, max): (f64, f64)) -> (f64, f64) {
    if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}
