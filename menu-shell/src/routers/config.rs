use iced::Task;

use crate::app::{App, AppEvent};
use crate::config::{
    ConfigEvent, ConfigLoad, ConfigLoadStatus, load_config, save_config,
};
use crate::routers::menu_layout::sync_layout_vars;

/// Route configuration persistence and reload events.
pub(crate) fn route(app: &mut App, event: ConfigEvent) -> Task<AppEvent> {
    match event {
        ConfigEvent::Tick => request_persist(app),
        ConfigEvent::PersistCompleted(revision) => {
            app.config.persist_completed(revision);
            log::debug!("config persisted at revision {revision}");
            Task::none()
        },
        ConfigEvent::PersistFailed(message) => {
            app.config.persist_failed();
            log::warn!("config persist failed: {message}");
            Task::none()
        },
        ConfigEvent::Reload => request_reload(),
        ConfigEvent::ReloadLoaded(load) => {
            apply_reload(app, load);
            Task::none()
        },
        ConfigEvent::ReloadFailed(message) => {
            log::warn!("config reload failed: {message}");
            Task::none()
        },
    }
}

/// Write pending changes synchronously, used right before the window exits.
///
/// Runs even while a background save is in flight, since that save may carry
/// an older revision.
pub(crate) fn flush(app: &mut App) {
    if !app.config.is_dirty() {
        return;
    }

    let revision = app.config.revision();
    match save_config(app.config.config()) {
        Ok(()) => {
            app.config.persist_completed(revision);
            log::debug!("config flushed at revision {revision}");
        },
        Err(err) => {
            app.config.persist_failed();
            log::warn!("config flush failed: {err}");
        },
    }
}

fn request_persist(app: &mut App) -> Task<AppEvent> {
    let Some(pending) = app.config.begin_persist() else {
        return Task::none();
    };

    Task::perform(
        async move {
            match save_config(&pending.config) {
                Ok(()) => Ok(pending.revision),
                Err(err) => Err(format!("{err}")),
            }
        },
        |result| match result {
            Ok(revision) => {
                AppEvent::Config(ConfigEvent::PersistCompleted(revision))
            },
            Err(message) => AppEvent::Config(ConfigEvent::PersistFailed(message)),
        },
    )
}

fn request_reload() -> Task<AppEvent> {
    Task::perform(async { load_config() }, |result| match result {
        Ok(load) => AppEvent::Config(ConfigEvent::ReloadLoaded(load)),
        Err(err) => AppEvent::Config(ConfigEvent::ReloadFailed(format!("{err}"))),
    })
}

fn apply_reload(app: &mut App, load: ConfigLoad) {
    let (config, status) = load.into_parts();
    match status {
        ConfigLoadStatus::Loaded => {
            let revision = app.config.replace_loaded(config);
            log::info!("config reloaded at revision {revision}");
        },
        ConfigLoadStatus::Missing => {
            log::info!("config file missing, keeping current values");
            return;
        },
        ConfigLoadStatus::Invalid(message) => {
            log::warn!("config file invalid, keeping current values: {message}");
            return;
        },
    }

    // A live gesture keeps writing its own widths; it resyncs on release.
    if !app.widgets.menu_layout.is_dragging() {
        sync_layout_vars(app);
    }
}
