//! regform - Entry Point
//!
//! Terminal front end for the registration and login forms.

use log::info;
use std::io;
use std::process;

use regform::config::AppConfig;
use regform::error::AppError;
use regform::error::handlers::{error_to_exit_code, handle_error};
use regform::utils::logging::setup_logging;
use regform::Session;

fn main() {
    setup_logging();

    if let Err(e) = run() {
        handle_error(&e);
        process::exit(error_to_exit_code(&e));
    }
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    info!(
        "Launching registration forms ({:?} validation)",
        config.validation.mode
    );

    let mut session = Session::from_config(&config);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    session.run(&mut input, &mut output)?;
    Ok(())
}
