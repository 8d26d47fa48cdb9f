use super::responsive::{LayoutMode, PaneGeometry, PaneLayout};

/// Read-only snapshot the split view renders from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MenuLayoutViewModel {
    pub(crate) layout: PaneLayout,
    pub(crate) geometry: PaneGeometry,
    pub(crate) show_panel: bool,
    pub(crate) is_dragging: bool,
    pub(crate) is_handle_hovered: bool,
}

impl MenuLayoutViewModel {
    pub(crate) fn is_narrow(&self) -> bool {
        self.layout.mode == LayoutMode::Narrow
    }

    /// Whether the drag handle should render highlighted.
    pub(crate) fn is_handle_active(&self) -> bool {
        self.is_dragging || self.is_handle_hovered
    }
}
