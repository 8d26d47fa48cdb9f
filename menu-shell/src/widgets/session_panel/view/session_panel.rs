use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length, Theme, alignment};

use crate::shell::Session;
use crate::widgets::session_panel::event::SessionPanelEvent;

const PANEL_PADDING: f32 = 16.0;
const HEADER_SPACING: f32 = 8.0;
const TITLE_SIZE: f32 = 20.0;

/// Props for the session panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SessionPanelProps<'a> {
    pub(crate) session: Option<&'a Session>,
    pub(crate) show_back: bool,
}

/// Render the routed session, or the home placeholder.
pub(crate) fn view(
    props: SessionPanelProps<'_>,
) -> Element<'_, SessionPanelEvent, Theme, iced::Renderer> {
    let Some(session) = props.session else {
        return container(text("Select a session"))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into();
    };

    let mut header = row![].spacing(HEADER_SPACING).align_y(Alignment::Center);
    if props.show_back {
        header = header.push(
            button(text("Back"))
                .style(button::text)
                .on_press(SessionPanelEvent::Back),
        );
    }
    header = header
        .push(text(&session.title).size(TITLE_SIZE))
        .push(container(Space::new()).width(Length::Fill))
        .push(
            button(text("Close"))
                .style(button::secondary)
                .on_press(SessionPanelEvent::Close),
        );

    column![header, text(&session.summary)]
        .spacing(PANEL_PADDING)
        .padding(PANEL_PADDING)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
