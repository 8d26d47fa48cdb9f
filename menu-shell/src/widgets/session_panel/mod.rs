mod event;
pub(crate) mod view;

pub(crate) use event::SessionPanelEvent;
use iced::{Element, Theme};

use crate::navigation::Path;
use crate::shell::Shell;
use crate::widgets::menu_layout::{MenuPane, PaneCtx, PaneProps};

/// Detail panel for the routed session.
#[derive(Debug, Default)]
pub(crate) struct SessionPanelWidget;

impl SessionPanelWidget {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl MenuPane for SessionPanelWidget {
    type Shared = Shell;
    type Event = SessionPanelEvent;

    fn reduce(&mut self, event: Self::Event, ctx: &mut PaneCtx) {
        match event {
            SessionPanelEvent::Back => {
                if ctx.show_panel() {
                    ctx.set_show_panel(false);
                }
            },
            SessionPanelEvent::Close => {
                ctx.set_show_panel(false);
                ctx.navigate(Path::Home);
            },
        }
    }

    fn view<'a>(
        &'a self,
        props: PaneProps<'a, Shell>,
    ) -> Element<'a, Self::Event, Theme, iced::Renderer> {
        view::session_panel::view(view::session_panel::SessionPanelProps {
            session: props.shared.active_session(),
            show_back: props.is_narrow && props.show_panel,
        })
    }
}
