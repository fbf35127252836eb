use serde::{Deserialize, Serialize};

use crate::core::{Color, Field, Margins, ValueFormat};
use crate::error::{ChartError, ChartResult};

/// Chart bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub margins: Margins,
    /// Fraction of the smaller viewport side used for the square outer box.
    #[serde(default = "default_padding_ratio")]
    pub padding_ratio: f64,
    #[serde(default = "default_dot_radius")]
    pub dot_radius: f64,
    #[serde(default = "default_highlight_radius")]
    pub highlight_radius: f64,
    #[serde(default = "default_highlight_color")]
    pub highlight_color: Color,
    #[serde(default = "default_gradient_start")]
    pub gradient_start: Color,
    #[serde(default = "default_gradient_end")]
    pub gradient_end: Color,
    #[serde(default = "default_x_field")]
    pub x_field: Field,
    #[serde(default = "default_y_field")]
    pub y_field: Field,
    #[serde(default = "default_color_field")]
    pub color_field: Field,
    #[serde(default = "default_x_format")]
    pub x_format: ValueFormat,
    #[serde(default = "default_y_format")]
    pub y_format: ValueFormat,
    #[serde(default = "default_heading_format")]
    pub heading_format: ValueFormat,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    /// Stroke for the tessellation overlay; `None` keeps the hit regions
    /// invisible.
    #[serde(default)]
    pub cell_stroke: Option<Color>,
    #[serde(default = "default_cell_stroke_width")]
    pub cell_stroke_width: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            padding_ratio: default_padding_ratio(),
            dot_radius: default_dot_radius(),
            highlight_radius: default_highlight_radius(),
            highlight_color: default_highlight_color(),
            gradient_start: default_gradient_start(),
            gradient_end: default_gradient_end(),
            x_field: default_x_field(),
            y_field: default_y_field(),
            color_field: default_color_field(),
            x_format: default_x_format(),
            y_format: default_y_format(),
            heading_format: default_heading_format(),
            tick_count: default_tick_count(),
            cell_stroke: None,
            cell_stroke_width: default_cell_stroke_width(),
        }
    }
}

impl ChartConfig {
    /// Sets the channels bound to the x, y and color scales.
    #[must_use]
    pub fn with_fields(mut self, x: Field, y: Field, color: Field) -> Self {
        self.x_field = x;
        self.y_field = y;
        self.color_field = color;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_dot_radius(mut self, radius: f64) -> Self {
        self.dot_radius = radius;
        self
    }

    #[must_use]
    pub fn with_gradient(mut self, start: Color, end: Color) -> Self {
        self.gradient_start = start;
        self.gradient_end = end;
        self
    }

    #[must_use]
    pub fn with_formats(mut self, x: ValueFormat, y: ValueFormat) -> Self {
        self.x_format = x;
        self.y_format = y;
        self
    }

    /// Makes the tessellation overlay visible with the given stroke.
    #[must_use]
    pub fn with_cell_stroke(mut self, stroke: Color) -> Self {
        self.cell_stroke = Some(stroke);
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        self.margins.validate()?;
        if !self.padding_ratio.is_finite() || self.padding_ratio <= 0.0 || self.padding_ratio > 1.0
        {
            return Err(ChartError::InvalidData(
                "padding ratio must be finite and in (0, 1]".to_owned(),
            ));
        }
        for (name, radius) in [
            ("dot", self.dot_radius),
            ("highlight", self.highlight_radius),
        ] {
            if !radius.is_finite() || radius <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} radius must be finite and > 0"
                )));
            }
        }
        if !self.cell_stroke_width.is_finite() || self.cell_stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "cell stroke width must be finite and > 0".to_owned(),
            ));
        }
        if self.tick_count == 0 {
            return Err(ChartError::InvalidData(
                "tick count must be > 0".to_owned(),
            ));
        }
        self.highlight_color.validate()?;
        self.gradient_start.validate()?;
        self.gradient_end.validate()?;
        if let Some(stroke) = self.cell_stroke {
            stroke.validate()?;
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_padding_ratio() -> f64 {
    0.9
}

fn default_dot_radius() -> f64 {
    4.0
}

fn default_highlight_radius() -> f64 {
    7.0
}

fn default_highlight_color() -> Color {
    // maroon
    Color::rgb(0.5, 0.0, 0.0)
}

fn default_gradient_start() -> Color {
    // skyblue
    Color::rgb(0.529, 0.808, 0.922)
}

fn default_gradient_end() -> Color {
    // darkslategrey
    Color::rgb(0.184, 0.310, 0.310)
}

fn default_x_field() -> Field {
    Field::DewPoint
}

fn default_y_field() -> Field {
    Field::Humidity
}

fn default_color_field() -> Field {
    Field::CloudCover
}

fn default_x_format() -> ValueFormat {
    ValueFormat::Fixed(1)
}

fn default_y_format() -> ValueFormat {
    ValueFormat::Percent
}

fn default_heading_format() -> ValueFormat {
    ValueFormat::Date
}

fn default_tick_count() -> usize {
    10
}

fn default_cell_stroke_width() -> f64 {
    1.0
}
