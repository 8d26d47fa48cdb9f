use std::fmt::Debug;

use iced::{Element, Theme};

use crate::navigation::Path;

/// Render-time props every pane receives.
///
/// `shared` is forwarded unchanged from the caller to both panes.
#[derive(Debug)]
pub(crate) struct PaneProps<'a, S> {
    pub(crate) shared: &'a S,
    pub(crate) show_panel: bool,
    pub(crate) is_narrow: bool,
}

impl<S> Clone for PaneProps<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for PaneProps<'_, S> {}

/// Panel-control capability handed to a pane while it reduces an event.
#[derive(Debug)]
pub(crate) struct PaneCtx {
    show_panel: bool,
    navigate_to: Option<Path>,
}

impl PaneCtx {
    pub(crate) fn new(show_panel: bool) -> Self {
        Self {
            show_panel,
            navigate_to: None,
        }
    }

    pub(crate) fn show_panel(&self) -> bool {
        self.show_panel
    }

    /// Request the narrow-mode panel to be shown or hidden.
    pub(crate) fn set_show_panel(&mut self, value: bool) {
        self.show_panel = value;
    }

    /// Request a route change; the last request wins.
    pub(crate) fn navigate(&mut self, path: Path) {
        self.navigate_to = Some(path);
    }

    /// Consume the context and return `(show_panel, navigation)`.
    pub(crate) fn into_parts(self) -> (bool, Option<Path>) {
        (self.show_panel, self.navigate_to)
    }
}

/// A pane composed by the menu layout.
pub(crate) trait MenuPane {
    /// Caller-supplied props forwarded unchanged to both panes.
    type Shared;
    type Event: Debug + Clone + Send + 'static;

    /// Reduce a pane event, optionally flipping the panel through `ctx`.
    fn reduce(&mut self, event: Self::Event, ctx: &mut PaneCtx);

    /// Render the pane.
    fn view<'a>(
        &'a self,
        props: PaneProps<'a, Self::Shared>,
    ) -> Element<'a, Self::Event, Theme, iced::Renderer>;
}
