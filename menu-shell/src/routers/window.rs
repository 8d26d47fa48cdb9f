use iced::{Size, Task, window};

use crate::app::{App, AppEvent};
use crate::routers::{config, menu_layout};
use crate::state::Viewport;
use crate::widgets::menu_layout::MenuLayoutIntent;

/// Route window lifecycle events.
pub(crate) fn route(app: &mut App, event: window::Event) -> Task<AppEvent> {
    match event {
        window::Event::Opened { size, .. } | window::Event::Resized(size) => {
            handle_resize(app, size)
        },
        window::Event::CloseRequested => {
            config::flush(app);
            iced::exit()
        },
        _ => Task::none(),
    }
}

/// Record the new viewport and tell the layout when the mode flips.
pub(crate) fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    let viewport = Viewport::from_size(size);
    if !app.state.set_viewport(viewport) {
        return Task::none();
    }

    log::debug!(
        "viewport mode changed: narrow={} width={}",
        viewport.is_narrow(),
        size.width
    );
    menu_layout::route_intent(
        app,
        MenuLayoutIntent::ViewportChanged {
            is_narrow: viewport.is_narrow(),
        },
    )
}

#[cfg(test)]
mod tests {
    use iced::{Size, window};

    use super::route;
    use crate::app::{App, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
    use crate::config::ConfigStore;

    fn app() -> App {
        App::with_config(
            ConfigStore::default(),
            Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
        )
    }

    fn layout_is_narrow(app: &App) -> bool {
        app.widgets
            .menu_layout
            .vm(
                app.state.viewport().size(),
                app.state.layout_vars().menu_width(),
            )
            .is_narrow()
    }

    #[test]
    fn given_window_opened_at_narrow_size_when_routed_then_layout_starts_narrow()
    {
        let mut app = app();
        assert!(!layout_is_narrow(&app));

        let _task = route(
            &mut app,
            window::Event::Opened {
                position: None,
                size: Size::new(480.0, DEFAULT_WINDOW_HEIGHT),
            },
        );

        assert!(app.state.viewport().is_narrow());
        assert!(layout_is_narrow(&app));
    }

    #[test]
    fn given_narrow_window_when_resized_wide_then_layout_returns_to_wide() {
        let mut app = app();
        let _task = route(
            &mut app,
            window::Event::Resized(Size::new(600.0, DEFAULT_WINDOW_HEIGHT)),
        );
        assert!(layout_is_narrow(&app));

        let _task = route(
            &mut app,
            window::Event::Resized(Size::new(601.0, DEFAULT_WINDOW_HEIGHT)),
        );

        assert!(!layout_is_narrow(&app));
    }
}
