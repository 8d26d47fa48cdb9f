mod errors;
pub(crate) mod event;
mod model;
mod storage;
mod store;

pub(crate) use event::ConfigEvent;
pub(crate) use storage::{
    ConfigLoad, ConfigLoadStatus, load_config, load_initial_store, save_config,
};
pub(crate) use store::ConfigStore;
