use super::model::AppConfig;

/// Shared, observable configuration with a single write path.
///
/// Every [`ConfigStore::update`] bumps the revision; observers compare
/// revisions instead of diffing payloads. Disk persistence trails the
/// in-memory revision and is driven from outside.
#[derive(Debug, Default)]
pub(crate) struct ConfigStore {
    config: AppConfig,
    revision: u64,
    persisted_revision: u64,
    in_flight: Option<u64>,
}

/// Snapshot handed to the persistence task.
#[derive(Debug, Clone)]
pub(crate) struct PendingPersist {
    pub(crate) config: AppConfig,
    pub(crate) revision: u64,
}

impl ConfigStore {
    /// Create a store whose contents already match what is on disk.
    pub(crate) fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub(crate) fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Return the committed sidebar width, falling back to the default.
    pub(crate) fn sidebar_width(&self) -> f32 {
        self.config.sidebar_width()
    }

    pub(crate) fn revision(&self) -> u64 {
        self.revision
    }

    /// Read-modify-write the configuration and return the new revision.
    pub(crate) fn update(&mut self, mutator: impl FnOnce(&mut AppConfig)) -> u64 {
        let mut draft = self.config.clone();
        mutator(&mut draft);
        self.config = draft;
        self.revision += 1;
        self.revision
    }

    /// Replace the contents with a freshly loaded configuration.
    ///
    /// The loaded payload is what is on disk, so the store becomes clean.
    /// A save still in flight will overwrite that file when it lands; its
    /// completion marks the store dirty again so the next persist restores
    /// the loaded values.
    pub(crate) fn replace_loaded(&mut self, config: AppConfig) -> u64 {
        self.config = config;
        self.revision += 1;
        self.persisted_revision = self.revision;
        self.revision
    }

    /// Return whether in-memory changes have not reached disk yet.
    pub(crate) fn is_dirty(&self) -> bool {
        self.revision != self.persisted_revision
    }

    pub(crate) fn persist_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start persisting the current revision if it is dirty and idle.
    pub(crate) fn begin_persist(&mut self) -> Option<PendingPersist> {
        if !self.is_dirty() || self.in_flight.is_some() {
            return None;
        }

        self.in_flight = Some(self.revision);
        Some(PendingPersist {
            config: self.config.clone(),
            revision: self.revision,
        })
    }

    /// Record that `revision` reached disk.
    ///
    /// The last write to land is what the file holds, even when it is older
    /// than a reload that happened meanwhile.
    pub(crate) fn persist_completed(&mut self, revision: u64) {
        self.in_flight = None;
        self.persisted_revision = revision;
    }

    /// Release the in-flight marker; the store stays dirty for a retry.
    pub(crate) fn persist_failed(&mut self) {
        self.in_flight = None;
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigStore;
    use crate::config::model::AppConfig;

    #[test]
    fn given_update_when_applied_then_revision_bumps_and_store_is_dirty() {
        let mut store = ConfigStore::default();

        let revision = store.update(|config| config.set_sidebar_width(320.0));

        assert_eq!(revision, 1);
        assert_eq!(store.sidebar_width(), 320.0);
        assert!(store.is_dirty());
    }

    #[test]
    fn given_dirty_store_when_persist_completes_then_store_is_clean() {
        let mut store = ConfigStore::default();
        store.update(|config| config.set_sidebar_width(320.0));

        let pending = store.begin_persist().expect("dirty store persists");
        assert!(store.begin_persist().is_none());
        store.persist_completed(pending.revision);

        assert!(!store.is_dirty());
        assert!(!store.persist_in_flight());
    }

    #[test]
    fn given_write_during_persist_when_completed_then_store_stays_dirty() {
        let mut store = ConfigStore::default();
        store.update(|config| config.set_sidebar_width(320.0));
        let pending = store.begin_persist().expect("dirty store persists");

        store.update(|config| config.set_sidebar_width(340.0));
        store.persist_completed(pending.revision);

        assert!(store.is_dirty());
        assert_eq!(
            store.begin_persist().map(|next| next.revision),
            Some(store.revision())
        );
    }

    #[test]
    fn given_failed_persist_when_retried_then_snapshot_is_offered_again() {
        let mut store = ConfigStore::default();
        store.update(|config| config.set_sidebar_width(320.0));
        let _pending = store.begin_persist();

        store.persist_failed();

        assert!(store.is_dirty());
        assert!(store.begin_persist().is_some());
    }

    #[test]
    fn given_loaded_config_when_replaced_then_store_is_clean() {
        let mut store = ConfigStore::default();
        store.update(|config| config.set_sidebar_width(320.0));
        let mut loaded = AppConfig::default();
        loaded.set_sidebar_width(410.0);

        store.replace_loaded(loaded);

        assert!(!store.is_dirty());
        assert_eq!(store.sidebar_width(), 410.0);
    }

    #[test]
    fn given_reload_during_persist_when_stale_save_lands_then_loaded_values_are_persisted_again()
     {
        let mut store = ConfigStore::default();
        store.update(|config| config.set_sidebar_width(320.0));
        let stale = store.begin_persist().expect("dirty store persists");
        let mut loaded = AppConfig::default();
        loaded.set_sidebar_width(410.0);

        let loaded_revision = store.replace_loaded(loaded.clone());
        assert!(!store.is_dirty());
        store.persist_completed(stale.revision);

        assert!(store.is_dirty());
        let next = store.begin_persist().expect("loaded values persist");
        assert_eq!(next.revision, loaded_revision);
        assert_eq!(next.config, loaded);
    }
}
