//! Registration flow
//!
//! Validates a registration form against the current users and persists the
//! new record on success. Read-modify-write with no locking; the last writer wins.

use log::{debug, info};

use crate::auth::credentials::UserRecord;
use crate::error::RegistrationError;
use crate::storage::{KeyValueStore, UserStore};
use crate::validation::{RegistrationForm, Validator};

pub fn register<B: KeyValueStore>(
    store: &mut UserStore<B>,
    validator: &Validator,
    form: &RegistrationForm,
) -> Result<UserRecord, RegistrationError> {
    let users = store.load_all();

    let record = validator.validate(form, &users).map_err(|errors| {
        debug!(
            "Registration for '{}' rejected: {:?}",
            form.username,
            errors.violations()
        );
        errors
    })?;

    store.upsert(record.clone())?;
    info!("Registered user '{}'", record.username);
    Ok(record)
}
