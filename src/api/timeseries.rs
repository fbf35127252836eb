use crate::api::scales::pad_flat;
use crate::core::{
    Color, Dimensions, Field, LinearScale, Point, TimeScale, WeatherRecord, extent,
};
use crate::error::{ChartError, ChartResult};
use crate::render::PathPrimitive;

/// Scales for a date-on-x timeseries chart (line or area variant).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeseriesScales {
    pub x: TimeScale,
    pub y: LinearScale,
}

impl TimeseriesScales {
    pub fn build(
        records: &[WeatherRecord],
        dimensions: Dimensions,
        y_field: Field,
        tick_count: usize,
    ) -> ChartResult<Self> {
        let x = TimeScale::from_records(records, (0.0, dimensions.bounded_width()))?;
        let y = LinearScale::new(
            pad_flat(extent(records, y_field)?),
            (dimensions.bounded_height(), 0.0),
        )?
        .nice(tick_count);

        Ok(Self { x, y })
    }
}

/// Polyline through every record, in outer chart coordinates.
///
/// A record missing its date or y value is a reported error, matching the
/// scatter join: no mark is ever placed at an undefined coordinate.
pub fn line_path(
    records: &[WeatherRecord],
    scales: &TimeseriesScales,
    y_field: Field,
    dimensions: Dimensions,
    stroke_width: f64,
    stroke: Color,
) -> ChartResult<PathPrimitive> {
    let points = projected_points(records, scales, y_field, dimensions)?;
    Ok(PathPrimitive::stroked(points, false, stroke_width, stroke))
}

/// Same polyline closed down to the bottom of the bounded area and filled.
pub fn area_path(
    records: &[WeatherRecord],
    scales: &TimeseriesScales,
    y_field: Field,
    dimensions: Dimensions,
    fill: Color,
) -> ChartResult<PathPrimitive> {
    let mut points = projected_points(records, scales, y_field, dimensions)?;
    let baseline = dimensions.bounds_origin().y + dimensions.bounded_height();
    let first_x = points[0].x;
    let last_x = points[points.len() - 1].x;
    points.push(Point::new(last_x, baseline));
    points.push(Point::new(first_x, baseline));

    Ok(PathPrimitive {
        points,
        closed: true,
        stroke: None,
        stroke_width: 0.0,
        fill: Some(fill),
    })
}

fn projected_points(
    records: &[WeatherRecord],
    scales: &TimeseriesScales,
    y_field: Field,
    dimensions: Dimensions,
) -> ChartResult<Vec<Point>> {
    if records.len() < 2 {
        return Err(ChartError::InvalidData(
            "a timeseries path needs at least two records".to_owned(),
        ));
    }

    let origin = dimensions.bounds_origin();
    let mut points = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let date = record.date.ok_or(ChartError::MissingValue {
            field: Field::Date.name(),
            index,
        })?;
        let y_value = y_field.project(record).ok_or(ChartError::MissingValue {
            field: y_field.name(),
            index,
        })?;
        points.push(Point::new(
            origin.x + scales.x.map_date(date)?,
            origin.y + scales.y.map(y_value)?,
        ));
    }
    Ok(points)
}
