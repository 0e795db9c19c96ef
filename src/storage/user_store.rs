//! User store
//!
//! Persists every registered user as one JSON blob under a single storage key.
//! Reads fail soft: a missing or unreadable blob is an empty store.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::auth::credentials::{UserRecord, UsernameLookup, Users};
use crate::error::StorageError;
use crate::storage::backend::KeyValueStore;

/// Default storage key for the users blob
pub const USERS_KEY: &str = "users";

/// Shape of the persisted blob
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StorageLayout {
    /// `{ "<username>": { "email": .., "password": .. } }`
    #[default]
    Map,
    /// `[ { "username": .., "email": .., "password": .. } ]`
    Array,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredCredentials {
    email: String,
    password: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredUsers {
    Map(BTreeMap<String, StoredCredentials>),
    Array(Vec<UserRecord>),
}

impl StoredUsers {
    fn into_users(self) -> Users {
        match self {
            StoredUsers::Map(entries) => entries
                .into_iter()
                .map(|(username, creds)| {
                    let record = UserRecord {
                        username: username.to_lowercase(),
                        email: creds.email,
                        password: creds.password,
                    };
                    (record.username.clone(), record)
                })
                .collect(),
            StoredUsers::Array(records) => records
                .into_iter()
                .map(|mut record| {
                    record.username = record.username.to_lowercase();
                    (record.username.clone(), record)
                })
                .collect(),
        }
    }

    fn from_users(users: &Users, layout: StorageLayout) -> Self {
        match layout {
            StorageLayout::Map => StoredUsers::Map(
                users
                    .iter()
                    .map(|(username, record)| {
                        (
                            username.clone(),
                            StoredCredentials {
                                email: record.email.clone(),
                                password: record.password.clone(),
                            },
                        )
                    })
                    .collect(),
            ),
            StorageLayout::Array => StoredUsers::Array(users.values().cloned().collect()),
        }
    }
}

/// Username → credentials persistence over a key-value backend
pub struct UserStore<B: KeyValueStore> {
    backend: B,
    key: String,
    layout: StorageLayout,
}

impl<B: KeyValueStore> UserStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_options(backend, USERS_KEY, StorageLayout::default())
    }

    pub fn with_options(backend: B, key: &str, layout: StorageLayout) -> Self {
        Self {
            backend,
            key: key.to_string(),
            layout,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Loads every stored user. Never fails: absent or corrupt data is empty.
    pub fn load_all(&self) -> Users {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored users under key '{}'", self.key);
                return Users::new();
            }
            Err(e) => {
                warn!("Failed to read users under key '{}': {}", self.key, e);
                return Users::new();
            }
        };

        match serde_json::from_str::<StoredUsers>(&raw) {
            Ok(stored) => stored.into_users(),
            Err(e) => {
                warn!(
                    "Ignoring unreadable users blob under key '{}': {}",
                    self.key, e
                );
                Users::new()
            }
        }
    }

    /// Inserts or overwrites the record by username, then persists everything
    pub fn upsert(&mut self, record: UserRecord) -> Result<(), StorageError> {
        let mut users = self.load_all();
        let username = record.username.to_lowercase();
        let record = UserRecord {
            username: username.clone(),
            ..record
        };

        if users.insert(username.clone(), record).is_some() {
            info!("Updated user '{}'", username);
        } else {
            info!("Stored new user '{}'", username);
        }

        self.save_all(&users)
    }

    pub fn find(&self, username: &str) -> Option<UserRecord> {
        self.load_all().remove(&username.to_lowercase())
    }

    pub fn contains(&self, username: &str) -> bool {
        self.load_all().contains_username(username)
    }

    pub fn len(&self) -> usize {
        self.load_all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn save_all(&mut self, users: &Users) -> Result<(), StorageError> {
        let blob = serde_json::to_string(&StoredUsers::from_users(users, self.layout))?;
        self.backend.set(&self.key, &blob)
    }
}

impl<B: KeyValueStore> UsernameLookup for UserStore<B> {
    fn contains_username(&self, username: &str) -> bool {
        self.contains(username)
    }
}
