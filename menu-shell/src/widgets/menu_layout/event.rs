use iced::Point;
use iced::time::Instant;

use crate::navigation::Path;

/// Intent events handled by the menu layout widget.
///
/// `L` and `P` are the list and panel pane event types.
#[derive(Debug, Clone)]
pub(crate) enum MenuLayoutIntent<L, P> {
    /// Event produced by the list pane.
    List(L),
    /// Event produced by the panel pane.
    Panel(P),
    /// Press landed on the list pane container itself, not a child.
    ListBackgroundPressed,
    /// Cursor snapshot from the root mouse area.
    CursorMoved { position: Point },
    /// Pointer-down on the drag handle.
    HandlePressed,
    /// Double-click on the drag handle.
    HandleDoubleClicked,
    /// Pointer entered or left the drag handle.
    HandleHovered(bool),
    /// Global pointer move while a gesture is live.
    PointerMoved { x: f32 },
    /// Global pointer release while a gesture is live.
    PointerReleased,
    /// The window lost focus while a gesture was live.
    PointerCaptureLost,
    /// The viewport mode changed.
    ViewportChanged { is_narrow: bool },
    /// Animation frame while the panel slides.
    Frame(Instant),
}

/// Effect events produced by the menu layout reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuLayoutEffect {
    Navigate(Path),
}

/// Menu layout event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum MenuLayoutEvent<L, P> {
    /// Intent event reduced by the menu layout widget.
    Intent(MenuLayoutIntent<L, P>),
    /// External effect orchestrated by app-level routing.
    Effect(MenuLayoutEffect),
}
