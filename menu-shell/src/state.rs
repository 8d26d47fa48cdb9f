use iced::Size;

use crate::layout::LayoutVars;

/// Widest viewport still rendered with the narrow presentation.
pub(crate) const NARROW_MAX_WIDTH: f32 = 600.0;

/// Observed window viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Viewport {
    size: Size,
}

impl Viewport {
    /// Build a viewport from a window size.
    pub(crate) fn from_size(size: Size) -> Self {
        Self { size }
    }

    /// Return the viewport size.
    pub(crate) fn size(&self) -> Size {
        self.size
    }

    /// Return whether the narrow presentation applies.
    pub(crate) fn is_narrow(&self) -> bool {
        self.size.width <= NARROW_MAX_WIDTH
    }
}

/// Window geometry and live layout variables.
#[derive(Debug)]
pub(crate) struct State {
    viewport: Viewport,
    layout_vars: LayoutVars,
}

impl State {
    /// Create state with the given viewport and live layout vars.
    pub(crate) fn new(viewport: Viewport, layout_vars: LayoutVars) -> Self {
        Self {
            viewport,
            layout_vars,
        }
    }

    pub(crate) fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Replace the viewport and return whether the narrow mode flipped.
    pub(crate) fn set_viewport(&mut self, viewport: Viewport) -> bool {
        let flipped = self.viewport.is_narrow() != viewport.is_narrow();
        self.viewport = viewport;
        flipped
    }

    pub(crate) fn layout_vars(&self) -> &LayoutVars {
        &self.layout_vars
    }

    pub(crate) fn layout_vars_mut(&mut self) -> &mut LayoutVars {
        &mut self.layout_vars
    }
}
