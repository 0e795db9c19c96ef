pub mod auth;
pub mod commands;
pub mod config;
pub mod error;
pub mod session;
pub mod storage;
pub mod utils;
pub mod validation;

pub use session::Session;
