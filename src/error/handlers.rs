//! Error handlers
//!
//! Provides error reporting for the binary.

use crate::error::types::AppError;
use log::error;

/// Log an application error
pub fn handle_error(err: &AppError) {
    error!("Application error: {}", err);
}

/// Convert error to process exit code
pub fn error_to_exit_code(err: &AppError) -> i32 {
    match err {
        AppError::Config(_) => 78,
        AppError::IoError(_) => 74,
    }
}
