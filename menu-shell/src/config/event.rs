use super::storage::ConfigLoad;

/// Interval between persistence ticks while the store is dirty.
pub(crate) const CONFIG_PERSIST_TICK_MS: u64 = 500;

/// Events driving configuration persistence and reloads.
#[derive(Debug, Clone)]
pub(crate) enum ConfigEvent {
    /// Periodic tick; persists the store when dirty.
    Tick,
    /// Disk write finished for the given revision.
    PersistCompleted(u64),
    /// Disk write failed.
    PersistFailed(String),
    /// Request a fresh load from disk.
    Reload,
    /// Disk load completed.
    ReloadLoaded(ConfigLoad),
    /// Disk load failed.
    ReloadFailed(String),
}
