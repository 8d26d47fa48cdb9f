use iced::widget::{Column, button, column, container, scrollable, text, text_input};
use iced::{Element, Length, Theme};

use crate::navigation::Path;
use crate::shell::Shell;
use crate::style::list_row_style;
use crate::widgets::session_list::event::SessionListEvent;

const LIST_PADDING: f32 = 8.0;
const ROW_SPACING: f32 = 2.0;
const ROW_PADDING: f32 = 6.0;
const TITLE_SIZE: f32 = 14.0;
const SUMMARY_SIZE: f32 = 12.0;

/// Props for the session list pane.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SessionListProps<'a> {
    pub(crate) shell: &'a Shell,
    pub(crate) filter: &'a str,
}

/// Render the filter input followed by one row per matching session.
pub(crate) fn view(
    props: SessionListProps<'_>,
) -> Element<'_, SessionListEvent, Theme, iced::Renderer> {
    let route = props.shell.route();

    let filter = text_input("Filter sessions", props.filter)
        .on_input(SessionListEvent::FilterChanged)
        .width(Length::Fill);

    let rows = props.shell.matching(props.filter).fold(
        Column::new().spacing(ROW_SPACING),
        |rows, session| {
            let is_selected = route == Path::Session(session.id);
            let content = container(column![
                text(&session.title).size(TITLE_SIZE),
                text(&session.summary).size(SUMMARY_SIZE),
            ])
            .width(Length::Fill)
            .padding(ROW_PADDING)
            .style(list_row_style(is_selected));

            rows.push(
                button(content)
                    .padding(0)
                    .width(Length::Fill)
                    .style(button::text)
                    .on_press(SessionListEvent::Select(session.id)),
            )
        },
    );

    column![
        filter,
        scrollable(rows).width(Length::Fill).height(Length::Shrink),
    ]
    .spacing(LIST_PADDING)
    .padding(LIST_PADDING)
    .width(Length::Fill)
    .into()
}
