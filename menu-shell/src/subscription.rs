use iced::event::Status;
use iced::{Event, Subscription, mouse, window};

use crate::app::{App, AppEvent};
use crate::config::ConfigEvent;
use crate::config::event::CONFIG_PERSIST_TICK_MS;
use crate::widgets::menu_layout::{MenuLayoutEvent, MenuLayoutIntent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));
    let key_subs = iced::keyboard::listen().map(AppEvent::Keyboard);

    let mut subs = vec![win_subs, key_subs];

    // Global pointer listeners live only for the duration of a drag.
    if app.widgets.menu_layout.is_dragging() {
        subs.push(iced::event::listen_with(drag_pointer_event));
    }

    if app.widgets.menu_layout.is_animating() {
        subs.push(window::frames().map(|at| {
            AppEvent::MenuLayout(MenuLayoutEvent::Intent(
                MenuLayoutIntent::Frame(at),
            ))
        }));
    }

    // Config auto-persist
    if app.config.is_dirty() || app.config.persist_in_flight() {
        let tick = iced::time::every(std::time::Duration::from_millis(
            CONFIG_PERSIST_TICK_MS,
        ))
        .map(|_| AppEvent::Config(ConfigEvent::Tick));
        subs.push(tick);
    }

    Subscription::batch(subs)
}

fn drag_pointer_event(
    event: Event,
    _status: Status,
    _window: window::Id,
) -> Option<AppEvent> {
    let intent = match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            MenuLayoutIntent::PointerMoved { x: position.x }
        },
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            MenuLayoutIntent::PointerReleased
        },
        Event::Window(window::Event::Unfocused) => {
            MenuLayoutIntent::PointerCaptureLost
        },
        _ => return None,
    };

    Some(AppEvent::MenuLayout(MenuLayoutEvent::Intent(intent)))
}
