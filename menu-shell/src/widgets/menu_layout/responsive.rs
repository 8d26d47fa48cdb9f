use iced::Size;

use crate::layout::list_max_height;

/// Horizontal offset of a hidden narrow-mode pane, as a share of the viewport.
pub(crate) const OFFSCREEN_FACTOR: f32 = 1.01;

/// The two mutually exclusive presentations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LayoutMode {
    Wide,
    Narrow,
}

/// How the list pane is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListPresentation {
    /// Fixed basis width from the live sidebar width, height reduced by the
    /// reserved header space.
    Basis,
    /// Full viewport.
    FullWidth,
}

/// Where a narrow-mode panel sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SlidePosition {
    OnScreen,
    OffScreen,
}

impl SlidePosition {
    /// Offset fraction of the viewport width; `0.0` is fully on screen.
    pub(crate) fn fraction(self) -> f32 {
        match self {
            SlidePosition::OnScreen => 0.0,
            SlidePosition::OffScreen => 1.0,
        }
    }
}

/// How the panel pane is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PanelPresentation {
    /// Takes all remaining width.
    Fill,
    /// Full viewport, translated horizontally; on screen only while the list
    /// is hidden.
    Slide,
}

/// Structural presentation of both panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PaneLayout {
    pub(crate) mode: LayoutMode,
    pub(crate) list: ListPresentation,
    pub(crate) list_visible: bool,
    pub(crate) panel: PanelPresentation,
    pub(crate) has_drag_handle: bool,
}

/// Select the pane layout for the viewport mode and panel visibility.
///
/// Pure: nothing about a previous mode is remembered.
pub(crate) fn select_layout(is_narrow: bool, show_panel: bool) -> PaneLayout {
    if !is_narrow {
        return PaneLayout {
            mode: LayoutMode::Wide,
            list: ListPresentation::Basis,
            list_visible: true,
            panel: PanelPresentation::Fill,
            has_drag_handle: true,
        };
    }

    PaneLayout {
        mode: LayoutMode::Narrow,
        list: ListPresentation::FullWidth,
        list_visible: !show_panel,
        panel: PanelPresentation::Slide,
        has_drag_handle: false,
    }
}

/// Pixel geometry resolved from a [`PaneLayout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PaneGeometry {
    pub(crate) list_width: Option<f32>,
    pub(crate) list_max_height: Option<f32>,
    pub(crate) panel_width: Option<f32>,
    pub(crate) panel_offset_x: f32,
}

/// Resolve pane geometry for a viewport.
///
/// `slide_fraction` is the panel's current offset share, which trails the
/// layout's target position while a transition runs.
pub(crate) fn resolve_geometry(
    layout: &PaneLayout,
    viewport: Size,
    menu_width: f32,
    slide_fraction: f32,
) -> PaneGeometry {
    match layout.list {
        ListPresentation::Basis => PaneGeometry {
            list_width: Some(menu_width),
            list_max_height: Some(list_max_height(viewport.height)),
            panel_width: None,
            panel_offset_x: 0.0,
        },
        ListPresentation::FullWidth => PaneGeometry {
            list_width: None,
            list_max_height: None,
            panel_width: Some(viewport.width),
            panel_offset_x: viewport.width
                * OFFSCREEN_FACTOR
                * slide_fraction.clamp(0.0, 1.0),
        },
    }
}
