use std::fmt::Write as _;

use crate::core::Color;
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer, TextHAlign};

/// Renderer that serializes a frame into a standalone SVG document.
///
/// Draw order follows the frame walk: paths first (hover overlays sit behind
/// marks), then lines, circles and texts.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// SVG document produced by the most recent `render` call.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    /// One-shot helper: validates and serializes a frame.
    pub fn render_to_string(frame: &RenderFrame) -> ChartResult<String> {
        let mut renderer = Self::new();
        renderer.render(frame)?;
        Ok(renderer.document)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut out = String::new();
        let emit = |out: &mut String, fragment: std::fmt::Arguments<'_>| -> ChartResult<()> {
            out.write_fmt(fragment)
                .map_err(|e| ChartError::InvalidData(format!("failed to write svg: {e}")))
        };

        emit(
            &mut out,
            format_args!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
                frame.viewport.width, frame.viewport.height, frame.viewport.width, frame.viewport.height
            ),
        )?;

        for path in &frame.paths {
            let mut data = String::new();
            for (index, point) in path.points.iter().enumerate() {
                let command = if index == 0 { 'M' } else { 'L' };
                emit(
                    &mut data,
                    format_args!("{command}{:.2},{:.2} ", point.x, point.y),
                )?;
            }
            if path.closed {
                data.push('Z');
            }

            let fill = match path.fill {
                Some(color) => css_color(color),
                None => "none".to_owned(),
            };
            match path.stroke {
                Some(stroke) => emit(
                    &mut out,
                    format_args!(
                        "  <path d=\"{}\" fill=\"{fill}\" stroke=\"{}\" stroke-width=\"{:.2}\"/>\n",
                        data.trim_end(),
                        css_color(stroke),
                        path.stroke_width
                    ),
                )?,
                None => emit(
                    &mut out,
                    format_args!(
                        "  <path d=\"{}\" fill=\"{fill}\" stroke=\"none\"/>\n",
                        data.trim_end()
                    ),
                )?,
            }
        }

        for line in &frame.lines {
            emit(
                &mut out,
                format_args!(
                    "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{:.2}\"/>\n",
                    line.x1,
                    line.y1,
                    line.x2,
                    line.y2,
                    css_color(line.color),
                    line.stroke_width
                ),
            )?;
        }

        for circle in &frame.circles {
            emit(
                &mut out,
                format_args!(
                    "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"/>\n",
                    circle.cx,
                    circle.cy,
                    circle.radius,
                    css_color(circle.fill)
                ),
            )?;
        }

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            emit(
                &mut out,
                format_args!(
                    "  <text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{:.1}\" fill=\"{}\" text-anchor=\"{anchor}\">{}</text>\n",
                    text.x,
                    text.y,
                    text.font_size_px,
                    css_color(text.color),
                    escape_text(&text.text)
                ),
            )?;
        }

        out.push_str("</svg>\n");
        self.document = out;
        Ok(())
    }
}

fn css_color(color: Color) -> String {
    let to_byte = |channel: f64| (channel.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({},{},{},{:.3})",
        to_byte(color.red),
        to_byte(color.green),
        to_byte(color.blue),
        color.alpha.clamp(0.0, 1.0)
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
