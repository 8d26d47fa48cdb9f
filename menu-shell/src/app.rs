#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Size, Subscription, Task, Theme};

use crate::config::{ConfigEvent, ConfigStore, load_initial_store};
use crate::layout::LayoutVars;
use crate::shell::Shell;
use crate::state::{State, Viewport};
use crate::widgets::menu_layout::{
    MenuLayoutEventOf, MenuLayoutIntentOf, MenuLayoutWidget,
};
use crate::widgets::session_list::SessionListWidget;
use crate::widgets::session_panel::SessionPanelWidget;

pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;
pub(crate) const MIN_WINDOW_WIDTH: f32 = 360.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Menu layout composed from the session list and session panel.
pub(crate) type ShellLayout =
    MenuLayoutWidget<SessionListWidget, SessionPanelWidget>;

/// Event stream of [`ShellLayout`].
pub(crate) type ShellLayoutEvent =
    MenuLayoutEventOf<SessionListWidget, SessionPanelWidget>;

/// Intents accepted by [`ShellLayout`].
pub(crate) type ShellLayoutIntent =
    MenuLayoutIntentOf<SessionListWidget, SessionPanelWidget>;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    MenuLayout(ShellLayoutEvent),
    Config(ConfigEvent),
    Keyboard(iced::keyboard::Event),
    Window(iced::window::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) menu_layout: ShellLayout,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) state: State,
    pub(crate) config: ConfigStore,
    pub(crate) shell: Shell,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let window = Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT);
        (Self::with_config(load_initial_store(), window), Task::none())
    }

    /// Build the app around a loaded store for the requested window size.
    ///
    /// The size is provisional until the window reports its real one.
    pub(crate) fn with_config(config: ConfigStore, window: Size) -> Self {
        let viewport = Viewport::from_size(window);
        let layout_vars = LayoutVars::from_sidebar_width(config.sidebar_width());

        let widgets = Widgets {
            menu_layout: MenuLayoutWidget::new(
                SessionListWidget::new(),
                SessionPanelWidget::new(),
                viewport.is_narrow(),
            ),
        };

        App {
            state: State::new(viewport, layout_vars),
            config,
            shell: Shell::with_samples(),
            widgets,
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        match self.shell.active_session() {
            Some(session) => format!("{} - Menu Shell", session.title),
            None => String::from("Menu Shell"),
        }
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
