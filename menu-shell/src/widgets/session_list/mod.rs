mod event;
mod state;
pub(crate) mod view;

pub(crate) use event::SessionListEvent;
use iced::{Element, Theme};
use state::SessionListState;

use crate::navigation::Path;
use crate::shell::Shell;
use crate::widgets::menu_layout::{MenuPane, PaneCtx, PaneProps};

/// Filterable list of sessions shown in the list pane.
#[derive(Debug, Default)]
pub(crate) struct SessionListWidget {
    state: SessionListState,
}

impl SessionListWidget {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl MenuPane for SessionListWidget {
    type Shared = Shell;
    type Event = SessionListEvent;

    fn reduce(&mut self, event: Self::Event, ctx: &mut PaneCtx) {
        match event {
            SessionListEvent::FilterChanged(value) => {
                self.state.set_filter(value);
            },
            SessionListEvent::Select(id) => {
                ctx.navigate(Path::Session(id));
                ctx.set_show_panel(true);
            },
        }
    }

    fn view<'a>(
        &'a self,
        props: PaneProps<'a, Shell>,
    ) -> Element<'a, Self::Event, Theme, iced::Renderer> {
        view::session_list::view(view::session_list::SessionListProps {
            shell: props.shared,
            filter: self.state.filter(),
        })
    }
}
