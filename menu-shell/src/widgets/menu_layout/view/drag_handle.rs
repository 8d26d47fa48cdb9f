use iced::widget::{Space, container, mouse_area};
use iced::{Element, Length, Theme, mouse};

use crate::style::drag_handle_style;

const DRAG_HANDLE_WIDTH: f32 = 6.0;

/// Events emitted by the drag handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DragHandleEvent {
    Pressed,
    DoubleClicked,
    Hovered(bool),
}

/// Props for the sidebar drag handle.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DragHandleProps {
    pub(crate) is_active: bool,
}

/// Render the vertical strip on the list pane's right edge.
pub(crate) fn view<'a, Renderer>(
    props: DragHandleProps,
) -> Element<'a, DragHandleEvent, Theme, Renderer>
where
    Renderer: iced::advanced::Renderer + 'a,
{
    let strip = container(Space::new())
        .width(Length::Fixed(DRAG_HANDLE_WIDTH))
        .height(Length::Fill)
        .style(drag_handle_style(props.is_active));

    mouse_area(strip)
        .on_press(DragHandleEvent::Pressed)
        .on_double_click(DragHandleEvent::DoubleClicked)
        .on_enter(DragHandleEvent::Hovered(true))
        .on_exit(DragHandleEvent::Hovered(false))
        .interaction(mouse::Interaction::ResizingHorizontally)
        .into()
}
