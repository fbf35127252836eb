mod axis;
mod frame;
mod join;
mod null_renderer;
mod primitives;
mod svg;

pub use axis::{AxisOrientation, AxisScene, AxisStyle, linear_axis, time_axis};
pub use frame::RenderFrame;
pub use join::{DotMark, JoinOutcome, MarkAttributes, MarkSet};
pub use null_renderer::NullRenderer;
pub use primitives::{CirclePrimitive, LinePrimitive, PathPrimitive, TextHAlign, TextPrimitive};
pub use svg::SvgRenderer;

use crate::error::ChartResult;

/// Backend contract: consume one validated frame per draw pass.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
