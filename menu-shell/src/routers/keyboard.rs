use iced::Task;
use iced::keyboard::{self, Key, key};

use crate::app::{App, AppEvent};
use crate::config::ConfigEvent;

/// Route global shortcuts.
pub(crate) fn route(app: &mut App, event: keyboard::Event) -> Task<AppEvent> {
    let keyboard::Event::KeyPressed { key, modifiers, .. } = event else {
        return Task::none();
    };

    match key.as_ref() {
        Key::Character("r") if modifiers.command() => {
            Task::done(AppEvent::Config(ConfigEvent::Reload))
        },
        Key::Named(key::Named::ArrowLeft) if modifiers.alt() => {
            if let Some(path) = app.shell.navigator_mut().back() {
                log::debug!("navigated back to {path:?}");
            }
            Task::none()
        },
        _ => Task::none(),
    }
}
