//! Authentication result types
//!
//! Defines result structures returned by the registration and login flows.

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSuccess {
    pub username: String,
    /// Echo of the "keep me logged in" box; no session is created
    pub persist: bool,
}

impl LoginSuccess {
    pub fn message(&self) -> String {
        let mut message = String::from("Login successful!");
        if self.persist {
            message.push_str(" You will remain logged in.");
        }
        message
    }
}

/// Message shown after a successful registration
pub const REGISTRATION_SUCCESS: &str = "Registration successful!";
