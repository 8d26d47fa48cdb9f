use iced::widget::mouse_area;
use iced::{Element, Theme};

use super::{App, AppEvent};
use crate::widgets::menu_layout::{MenuLayoutEvent, MenuLayoutIntent};

/// Render the root application view.
///
/// The outer mouse area sits at the window origin, so the cursor snapshot it
/// records shares a coordinate frame with the global pointer listener.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let layout = &app.widgets.menu_layout;
    let vm = layout.vm(
        app.state.viewport().size(),
        app.state.layout_vars().menu_width(),
    );

    let content = layout.view(vm, &app.shell).map(AppEvent::MenuLayout);

    mouse_area(content)
        .on_move(|position| {
            AppEvent::MenuLayout(MenuLayoutEvent::Intent(
                MenuLayoutIntent::CursorMoved { position },
            ))
        })
        .into()
}
