//! Error types
//!
//! Defines domain-specific error types for storage, configuration and the auth flows.

use std::fmt;
use std::io;

use crate::validation::ValidationErrors;

/// Login failures, reported to the user as-is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    BlankUsername,
    BlankPassword,
    InvalidCredentials,
}

impl LoginError {
    pub fn message(&self) -> &'static str {
        match self {
            LoginError::BlankUsername => "Username cannot be blank.",
            LoginError::BlankPassword => "Password cannot be blank.",
            LoginError::InvalidCredentials => "Invalid username or password.",
        }
    }
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for LoginError {}

/// Registration failures: rejected input, or the record could not be saved
#[derive(Debug)]
pub enum RegistrationError {
    Rejected(ValidationErrors),
    Storage(StorageError),
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationError::Rejected(e) => write!(f, "{}", e),
            RegistrationError::Storage(e) => write!(f, "Could not save registration: {}", e),
        }
    }
}

impl std::error::Error for RegistrationError {}

impl From<ValidationErrors> for RegistrationError {
    fn from(error: ValidationErrors) -> Self {
        RegistrationError::Rejected(error)
    }
}

impl From<StorageError> for RegistrationError {
    fn from(error: StorageError) -> Self {
        RegistrationError::Storage(error)
    }
}

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    IoError(io::Error),
    Serialization(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
            StorageError::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::IoError(e) => Some(e),
            StorageError::Serialization(e) => Some(e),
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        StorageError::Serialization(error)
    }
}

/// Top-level application error
#[derive(Debug)]
pub enum AppError {
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::IoError(error)
    }
}
