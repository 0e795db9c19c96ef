//! Login flow
//!
//! Checks submitted credentials against the stored plaintext password. Checks
//! run in a fixed order and stop at the first failure.

use log::{debug, info};

use crate::auth::results::LoginSuccess;
use crate::error::LoginError;
use crate::storage::{KeyValueStore, UserStore};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub persist: bool,
}

impl LoginForm {
    /// Trims and lowercases the username
    pub fn normalized(self) -> Self {
        Self {
            username: self.username.trim().to_lowercase(),
            ..self
        }
    }
}

pub fn login<B: KeyValueStore>(
    store: &UserStore<B>,
    form: &LoginForm,
) -> Result<LoginSuccess, LoginError> {
    if form.username.is_empty() {
        return Err(LoginError::BlankUsername);
    }

    let Some(user) = store.find(&form.username) else {
        debug!("Login for unknown user '{}'", form.username);
        return Err(LoginError::InvalidCredentials);
    };

    if form.password.is_empty() {
        return Err(LoginError::BlankPassword);
    }

    if user.password != form.password {
        debug!("Wrong password for user '{}'", user.username);
        return Err(LoginError::InvalidCredentials);
    }

    info!("User '{}' logged in", user.username);
    Ok(LoginSuccess {
        username: user.username,
        persist: form.persist,
    })
}
