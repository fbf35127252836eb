use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Pointer input already resolved against hit regions.
///
/// `Enter` carries the record index the mark or tessellation cell belongs to;
/// positional hit testing lives on the chart, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEvent {
    Enter { record: usize },
    Leave,
}

/// The two-state hover machine.
///
/// Transition table: `Enter(r)` from any state goes to `Hovering(r)` — a new
/// enter while already hovering replaces the record without an intermediate
/// leave. `Leave` from any state goes to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering {
        record: usize,
    },
}

/// One formatted label/value pair shown in the tooltip body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipLine {
    pub label: String,
    pub value: String,
}

/// Singleton tooltip overlay state.
///
/// Hidden in `Idle`; while hovering it carries the anchor position in outer
/// chart coordinates and the formatted channel values of the hovered record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TooltipState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub heading: String,
    pub lines: Vec<TooltipLine>,
}

/// Hover machine plus the tooltip and highlight-mark state it drives.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    hover: HoverState,
    tooltip: TooltipState,
    highlight: Option<Point>,
}

impl InteractionState {
    #[must_use]
    pub fn hover(&self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    /// Position of the extra emphasized mark rendered while hovering, in
    /// outer chart coordinates.
    #[must_use]
    pub fn highlight(&self) -> Option<Point> {
        self.highlight
    }

    pub fn on_enter(&mut self, record: usize, mut tooltip: TooltipState, highlight: Point) {
        tooltip.visible = true;
        self.hover = HoverState::Hovering { record };
        self.tooltip = tooltip;
        self.highlight = Some(highlight);
    }

    pub fn on_leave(&mut self) {
        self.hover = HoverState::Idle;
        self.tooltip = TooltipState::default();
        self.highlight = None;
    }
}
