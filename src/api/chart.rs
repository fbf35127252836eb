use ordered_float::OrderedFloat;

use crate::api::{ChannelScales, ChartConfig};
use crate::core::{Dimensions, Field, Point, Viewport, WeatherRecord};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{InteractionState, PointerEvent, TooltipLine, TooltipState};
use crate::render::{
    AxisOrientation, AxisStyle, CirclePrimitive, MarkAttributes, MarkSet, PathPrimitive,
    RenderFrame, TextHAlign, TextPrimitive, linear_axis,
};
use crate::tessellation::{Cell, HalfPlaneTessellator, Tessellator};

/// One chart render context.
///
/// Owns everything the pipeline stages share — config, dimensions, dataset,
/// scales, the reconciled mark set, tessellation cells and interaction state
/// — so nothing is closed over implicitly. Stages run strictly top-down:
/// dimensions at construction, scales and cells at `set_data`, the data join
/// inside `render`, hover transitions through `pointer`.
#[derive(Debug)]
pub struct Chart {
    viewport: Viewport,
    config: ChartConfig,
    dimensions: Dimensions,
    records: Vec<WeatherRecord>,
    scales: Option<ChannelScales>,
    marks: MarkSet,
    cells: Vec<Cell>,
    interaction: InteractionState,
    tessellator: Box<dyn Tessellator>,
}

impl Chart {
    pub fn new(viewport: Viewport, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let dimensions = Dimensions::fit_square(viewport, config.margins, config.padding_ratio)?;

        Ok(Self {
            viewport,
            config,
            dimensions,
            records: Vec::new(),
            scales: None,
            marks: MarkSet::new(),
            cells: Vec::new(),
            interaction: InteractionState::default(),
            tessellator: Box::new(HalfPlaneTessellator),
        })
    }

    /// Substitutes the Voronoi implementation behind the hover proxy.
    #[must_use]
    pub fn with_tessellator(mut self, tessellator: Box<dyn Tessellator>) -> Self {
        self.tessellator = tessellator;
        self
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[must_use]
    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    #[must_use]
    pub fn scales(&self) -> Option<ChannelScales> {
        self.scales
    }

    #[must_use]
    pub fn marks(&self) -> &MarkSet {
        &self.marks
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Replaces the dataset wholesale and rebuilds everything derived from it.
    ///
    /// Scales and tessellation cells are computed before any state is
    /// committed, so a failing dataset leaves the previous chart intact.
    /// Hover state resets because record indices may no longer match.
    pub fn set_data(&mut self, records: Vec<WeatherRecord>) -> ChartResult<()> {
        if records.is_empty() {
            return Err(ChartError::EmptyDataset);
        }

        let scales = ChannelScales::build(&records, self.dimensions, &self.config)?;
        let mut sites = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            sites.push(bounded_position(&scales, &self.config, index, record)?);
        }
        let cells = self.tessellator.cells(
            &sites,
            self.dimensions.bounded_width(),
            self.dimensions.bounded_height(),
        )?;

        tracing::debug!(records = records.len(), "dataset replaced");
        self.records = records;
        self.scales = Some(scales);
        self.cells = cells;
        self.interaction.on_leave();
        Ok(())
    }

    /// Runs one full render pass and returns the resulting frame.
    ///
    /// Reconciles marks against the current dataset (enter/update/exit), then
    /// emits the tessellation overlay, axes, marks and any hover extras.
    /// Calling this twice with unchanged data produces equal frames and no
    /// mark churn.
    pub fn render(&mut self) -> ChartResult<RenderFrame> {
        let scales = self.scales.ok_or(ChartError::EmptyDataset)?;
        let origin = self.dimensions.bounds_origin();
        let config = self.config;

        let outcome = self.marks.join(&self.records, |index, record| {
            let position = bounded_position(&scales, &config, index, record)?;
            let color_value =
                config
                    .color_field
                    .project(record)
                    .ok_or(ChartError::MissingValue {
                        field: config.color_field.name(),
                        index,
                    })?;
            Ok(MarkAttributes {
                x: origin.x + position.x,
                y: origin.y + position.y,
                radius: config.dot_radius,
                fill: scales.color.map(color_value)?,
            })
        })?;
        tracing::debug!(
            entered = outcome.entered,
            updated = outcome.updated,
            exited = outcome.exited,
            "reconciled marks"
        );

        let mut frame = RenderFrame::new(self.viewport);

        // Hover proxy cells sit behind everything else.
        if let Some(stroke) = config.cell_stroke {
            for cell in &self.cells {
                if let Some(path) = cell.to_path(config.cell_stroke_width, stroke) {
                    frame.paths.push(translate_path(path, origin));
                }
            }
        }

        let style = AxisStyle::default();
        let x_axis = linear_axis(
            scales.x,
            AxisOrientation::Bottom,
            self.dimensions,
            config.tick_count,
            config.x_format,
            style,
        )?;
        let y_axis = linear_axis(
            scales.y,
            AxisOrientation::Left,
            self.dimensions,
            config.tick_count,
            config.y_format,
            style,
        )?;
        frame.lines.extend(x_axis.lines);
        frame.lines.extend(y_axis.lines);
        frame.texts.extend(x_axis.texts);
        frame.texts.extend(y_axis.texts);

        for mark in self.marks.iter() {
            frame.circles.push(mark.to_primitive());
        }

        if let Some(position) = self.interaction.highlight() {
            frame.circles.push(CirclePrimitive::new(
                position.x,
                position.y,
                config.highlight_radius,
                config.highlight_color,
            ));
        }
        let tooltip = self.interaction.tooltip();
        if tooltip.visible {
            let line_height = 14.0;
            let mut y = tooltip.y - (tooltip.lines.len() as f64 + 1.0) * line_height - 8.0;
            frame.texts.push(TextPrimitive::new(
                tooltip.heading.clone(),
                tooltip.x,
                y,
                12.0,
                style.color,
                TextHAlign::Center,
            ));
            for line in &tooltip.lines {
                y += line_height;
                frame.texts.push(TextPrimitive::new(
                    format!("{}: {}", line.label, line.value),
                    tooltip.x,
                    y,
                    11.0,
                    style.color,
                    TextHAlign::Center,
                ));
            }
        }

        frame.validate()?;
        Ok(frame)
    }

    /// Applies a resolved pointer event to the hover machine.
    pub fn pointer(&mut self, event: PointerEvent) -> ChartResult<()> {
        match event {
            PointerEvent::Enter { record } => {
                let scales = self.scales.ok_or(ChartError::EmptyDataset)?;
                let observed = self.records.get(record).ok_or_else(|| {
                    ChartError::InvalidData(format!(
                        "pointer entered unknown record index {record}"
                    ))
                })?;

                let origin = self.dimensions.bounds_origin();
                let position = bounded_position(&scales, &self.config, record, observed)?;
                let anchor = Point::new(origin.x + position.x, origin.y + position.y);

                let heading = match Field::Date.project(observed) {
                    Some(days) => self.config.heading_format.apply(days),
                    None => observed.key(record),
                };
                let mut lines = Vec::with_capacity(2);
                for (field, format) in [
                    (self.config.x_field, self.config.x_format),
                    (self.config.y_field, self.config.y_format),
                ] {
                    let value = field.project(observed).ok_or(ChartError::MissingValue {
                        field: field.name(),
                        index: record,
                    })?;
                    lines.push(TooltipLine {
                        label: field.name().to_owned(),
                        value: format.apply(value),
                    });
                }

                self.interaction.on_enter(
                    record,
                    TooltipState {
                        visible: true,
                        x: anchor.x,
                        y: anchor.y,
                        heading,
                        lines,
                    },
                    anchor,
                );
            }
            PointerEvent::Leave => self.interaction.on_leave(),
        }
        Ok(())
    }

    /// Resolves a pointer position (outer chart coordinates) into an
    /// enter/leave transition via the tessellation cells.
    pub fn pointer_at(&mut self, x: f64, y: f64) -> ChartResult<()> {
        match self.hit_test(x, y) {
            Some(record) => self.pointer(PointerEvent::Enter { record }),
            None => self.pointer(PointerEvent::Leave),
        }
    }

    /// Maps a pixel position to the record whose cell contains it.
    ///
    /// Positions outside the bounded plot area miss; positions inside always
    /// hit — degenerate cells (duplicate sites) fall back to nearest-site
    /// distance so every interior pixel resolves to exactly one record.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        let origin = self.dimensions.bounds_origin();
        let local = Point::new(x - origin.x, y - origin.y);
        if local.x < 0.0
            || local.y < 0.0
            || local.x > self.dimensions.bounded_width()
            || local.y > self.dimensions.bounded_height()
        {
            return None;
        }

        if let Some(cell) = self.cells.iter().find(|cell| cell.contains(local)) {
            return Some(cell.site);
        }

        let scales = self.scales?;
        self.records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                bounded_position(&scales, &self.config, index, record)
                    .ok()
                    .map(|site| (index, site))
            })
            .min_by_key(|(_, site)| OrderedFloat(site.distance_squared(local)))
            .map(|(index, _)| index)
    }
}

/// Position of one record inside the bounded plot area.
fn bounded_position(
    scales: &ChannelScales,
    config: &ChartConfig,
    index: usize,
    record: &WeatherRecord,
) -> ChartResult<Point> {
    let x_value = config.x_field.project(record).ok_or(ChartError::MissingValue {
        field: config.x_field.name(),
        index,
    })?;
    let y_value = config.y_field.project(record).ok_or(ChartError::MissingValue {
        field: config.y_field.name(),
        index,
    })?;
    Ok(Point::new(scales.x.map(x_value)?, scales.y.map(y_value)?))
}

fn translate_path(mut path: PathPrimitive, offset: Point) -> PathPrimitive {
    for point in &mut path.points {
        point.x += offset.x;
        point.y += offset.y;
    }
    path
}
