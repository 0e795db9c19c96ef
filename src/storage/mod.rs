//! Credential storage
//!
//! Key-value backends and the user store layered over them.

pub mod backend;
pub mod user_store;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use user_store::{StorageLayout, USERS_KEY, UserStore};

use log::info;

use crate::config::{BackendKind, StorageConfig};

/// Opens the user store described by the storage configuration
pub fn open(config: &StorageConfig) -> UserStore<Box<dyn KeyValueStore>> {
    let backend: Box<dyn KeyValueStore> = match config.backend {
        BackendKind::File => {
            info!("Using file storage in {}", config.data_dir);
            Box::new(FileStore::new(config.data_dir_path()))
        }
        BackendKind::Memory => {
            info!("Using in-memory storage; users are lost on exit");
            Box::new(MemoryStore::new())
        }
    };
    UserStore::with_options(backend, &config.key, config.layout)
}
