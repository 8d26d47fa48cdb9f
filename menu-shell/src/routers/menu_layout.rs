use iced::Task;

use crate::app::{App, AppEvent, ShellLayoutEvent, ShellLayoutIntent};
use crate::config::ConfigStore;
use crate::layout::LayoutVars;
use crate::widgets::menu_layout::{DragHooks, MenuLayoutEffect, MenuLayoutEvent};

/// Resize hooks writing the sidebar width to the live layout vars and the
/// configuration store.
pub(crate) struct SidebarWidthHooks<'a> {
    config: &'a mut ConfigStore,
    vars: &'a mut LayoutVars,
}

impl<'a> SidebarWidthHooks<'a> {
    pub(crate) fn new(
        config: &'a mut ConfigStore,
        vars: &'a mut LayoutVars,
    ) -> Self {
        Self { config, vars }
    }
}

impl DragHooks for SidebarWidthHooks<'_> {
    fn committed_width(&self) -> f32 {
        self.config.sidebar_width()
    }

    fn drag_move(&mut self, next_width: f32) {
        self.vars.apply_sidebar_width(next_width);
        self.config
            .update(|config| config.set_sidebar_width(next_width));
    }
}

/// Route a menu layout event through the widget reducer or to navigation.
pub(crate) fn route(app: &mut App, event: ShellLayoutEvent) -> Task<AppEvent> {
    match event {
        MenuLayoutEvent::Intent(intent) => route_intent(app, intent),
        MenuLayoutEvent::Effect(effect) => route_effect(app, effect),
    }
}

/// Reduce an intent directly (used by the window router).
pub(crate) fn route_intent(
    app: &mut App,
    intent: ShellLayoutIntent,
) -> Task<AppEvent> {
    let was_dragging = app.widgets.menu_layout.is_dragging();
    let mut hooks =
        SidebarWidthHooks::new(&mut app.config, app.state.layout_vars_mut());
    let task = app
        .widgets
        .menu_layout
        .reduce(intent, &mut hooks)
        .map(AppEvent::MenuLayout);

    // A reload may have landed mid-gesture; catch the live vars up now.
    if was_dragging && !app.widgets.menu_layout.is_dragging() {
        sync_layout_vars(app);
    }

    task
}

fn route_effect(app: &mut App, effect: MenuLayoutEffect) -> Task<AppEvent> {
    match effect {
        MenuLayoutEffect::Navigate(path) => {
            app.shell.navigator_mut().navigate(path);
            Task::none()
        },
    }
}

/// Re-derive the live layout vars from the committed configuration.
pub(crate) fn sync_layout_vars(app: &mut App) {
    let width = app.config.sidebar_width();
    app.state.layout_vars_mut().apply_sidebar_width(width);
}
