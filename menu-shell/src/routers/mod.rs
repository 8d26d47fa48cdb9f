use iced::Task;

use crate::app::{App, AppEvent};

pub(crate) mod config;
pub(crate) mod keyboard;
pub(crate) mod menu_layout;
pub(crate) mod window;

pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::MenuLayout(event) => menu_layout::route(app, event),
        AppEvent::Config(event) => config::route(app, event),
        AppEvent::Keyboard(event) => keyboard::route(app, event),
        AppEvent::Window(event) => window::route(app, event),
    }
}
