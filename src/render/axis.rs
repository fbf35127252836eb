use crate::core::{Color, Dimensions, LinearScale, TimeScale, ValueFormat, date_to_days};
use crate::error::ChartResult;
use crate::render::{LinePrimitive, TextHAlign, TextPrimitive};

/// Side of the bounded plot area an axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

/// Stroke and label styling shared by both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisStyle {
    pub color: Color,
    pub stroke_width: f64,
    pub tick_length: f64,
    pub label_gap: f64,
    pub font_size_px: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            color: Color::rgb(0.2, 0.2, 0.2),
            stroke_width: 1.0,
            tick_length: 6.0,
            label_gap: 4.0,
            font_size_px: 11.0,
        }
    }
}

/// Axis output: the domain line plus one tick line and one label per tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisScene {
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

/// Builds an axis for a linear position scale.
///
/// Tick positions come from the scale's round-step ticks; all coordinates are
/// emitted in outer chart space (bounded-area position plus margins).
pub fn linear_axis(
    scale: LinearScale,
    orientation: AxisOrientation,
    dimensions: Dimensions,
    tick_count: usize,
    format: ValueFormat,
    style: AxisStyle,
) -> ChartResult<AxisScene> {
    let ticks = scale.ticks(tick_count);
    let mut placed = Vec::with_capacity(ticks.len());
    for tick in ticks {
        placed.push((scale.map(tick)?, format.apply(tick)));
    }
    Ok(build_scene(placed, orientation, dimensions, style))
}

/// Builds an axis for a calendar-date scale.
pub fn time_axis(
    scale: TimeScale,
    orientation: AxisOrientation,
    dimensions: Dimensions,
    tick_count: usize,
    format: ValueFormat,
    style: AxisStyle,
) -> ChartResult<AxisScene> {
    let ticks = scale.ticks(tick_count);
    let mut placed = Vec::with_capacity(ticks.len());
    for date in ticks {
        placed.push((scale.map_date(date)?, format.apply(date_to_days(date))));
    }
    Ok(build_scene(placed, orientation, dimensions, style))
}

fn build_scene(
    ticks: Vec<(f64, String)>,
    orientation: AxisOrientation,
    dimensions: Dimensions,
    style: AxisStyle,
) -> AxisScene {
    let origin = dimensions.bounds_origin();
    let mut scene = AxisScene::default();

    match orientation {
        AxisOrientation::Bottom => {
            let baseline = origin.y + dimensions.bounded_height();
            scene.lines.push(LinePrimitive::new(
                origin.x,
                baseline,
                origin.x + dimensions.bounded_width(),
                baseline,
                style.stroke_width,
                style.color,
            ));
            for (position, label) in ticks {
                let x = origin.x + position;
                scene.lines.push(LinePrimitive::new(
                    x,
                    baseline,
                    x,
                    baseline + style.tick_length,
                    style.stroke_width,
                    style.color,
                ));
                scene.texts.push(TextPrimitive::new(
                    label,
                    x,
                    baseline + style.tick_length + style.label_gap + style.font_size_px,
                    style.font_size_px,
                    style.color,
                    TextHAlign::Center,
                ));
            }
        }
        AxisOrientation::Left => {
            scene.lines.push(LinePrimitive::new(
                origin.x,
                origin.y,
                origin.x,
                origin.y + dimensions.bounded_height(),
                style.stroke_width,
                style.color,
            ));
            for (position, label) in ticks {
                let y = origin.y + position;
                scene.lines.push(LinePrimitive::new(
                    origin.x - style.tick_length,
                    y,
                    origin.x,
                    y,
                    style.stroke_width,
                    style.color,
                ));
                scene.texts.push(TextPrimitive::new(
                    label,
                    origin.x - style.tick_length - style.label_gap,
                    y + style.font_size_px / 2.0,
                    style.font_size_px,
                    style.color,
                    TextHAlign::Right,
                ));
            }
        }
    }

    scene
}
