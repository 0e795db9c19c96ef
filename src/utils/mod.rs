//! Utility functions
//!
//! Provides logging setup and terminal prompt helpers.

pub mod logging;
pub mod prompt;
