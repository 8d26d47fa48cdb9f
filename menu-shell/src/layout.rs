/// Sidebar width used when the configuration carries no explicit value.
pub(crate) const DEFAULT_SIDEBAR_WIDTH: f32 = 300.0;
/// Lower bound for the sidebar width.
pub(crate) const MIN_SIDEBAR_WIDTH: f32 = 200.0;
/// Upper bound for the sidebar width.
pub(crate) const MAX_SIDEBAR_WIDTH: f32 = 500.0;

/// Vertical space the wide-mode list pane gives up for its margins.
pub(crate) const LIST_RESERVED_HEIGHT: f32 = 20.0;

/// Clamp a candidate sidebar width to the fixed bounds.
pub(crate) fn clamp_sidebar_width(width: f32) -> f32 {
    if width.is_nan() {
        return DEFAULT_SIDEBAR_WIDTH;
    }
    width.clamp(MIN_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH)
}

/// Maximum list pane height for a viewport height in wide mode.
pub(crate) fn list_max_height(viewport_height: f32) -> f32 {
    (viewport_height - LIST_RESERVED_HEIGHT).max(0.0)
}

/// Process-wide layout variables read by the renderer.
///
/// Drag moves write here before the configuration is touched so the split
/// follows the pointer without waiting on anything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LayoutVars {
    menu_width: f32,
}

impl LayoutVars {
    /// Build layout vars from a committed sidebar width.
    pub(crate) fn from_sidebar_width(width: f32) -> Self {
        let mut vars = Self { menu_width: 0.0 };
        vars.apply_sidebar_width(width);
        vars
    }

    /// Return the rendered width of the list pane.
    pub(crate) fn menu_width(&self) -> f32 {
        self.menu_width
    }

    /// Derive the menu width from a sidebar width and return it.
    pub(crate) fn apply_sidebar_width(&mut self, width: f32) -> f32 {
        self.menu_width = clamp_sidebar_width(width).round();
        self.menu_width
    }
}

impl Default for LayoutVars {
    fn default() -> Self {
        Self::from_sidebar_width(DEFAULT_SIDEBAR_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_width_outside_bounds_when_clamped_then_saturates() {
        assert_eq!(clamp_sidebar_width(10.0), MIN_SIDEBAR_WIDTH);
        assert_eq!(clamp_sidebar_width(10_000.0), MAX_SIDEBAR_WIDTH);
        assert_eq!(clamp_sidebar_width(321.0), 321.0);
    }

    #[test]
    fn given_nan_width_when_clamped_then_falls_back_to_default() {
        assert_eq!(clamp_sidebar_width(f32::NAN), DEFAULT_SIDEBAR_WIDTH);
    }

    #[test]
    fn given_fractional_width_when_applied_then_menu_width_is_rounded() {
        let mut vars = LayoutVars::default();

        let menu_width = vars.apply_sidebar_width(350.6);

        assert_eq!(menu_width, 351.0);
        assert_eq!(vars.menu_width(), 351.0);
    }

    #[test]
    fn given_short_viewport_when_list_max_height_then_never_negative() {
        assert_eq!(list_max_height(10.0), 0.0);
        assert_eq!(list_max_height(720.0), 700.0);
    }
}
