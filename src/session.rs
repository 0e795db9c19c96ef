use log::{debug, info};
use std::io::{self, BufRead, Write};

use crate::commands::*;
use crate::config::AppConfig;
use crate::storage::{self, KeyValueStore, UserStore};
use crate::validation::Validator;

// Store and rules for one terminal session
pub struct Session<B: KeyValueStore> {
    store: UserStore<B>,
    validator: Validator,
}

impl Session<Box<dyn KeyValueStore>> {
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            storage::open(&config.storage),
            Validator::from_config(&config.validation),
        )
    }
}

impl<B: KeyValueStore> Session<B> {
    pub fn new(store: UserStore<B>, validator: Validator) -> Self {
        Self { store, validator }
    }

    pub fn store(&self) -> &UserStore<B> {
        &self.store
    }

    pub fn parts_mut(&mut self) -> (&mut UserStore<B>, &Validator) {
        (&mut self.store, &self.validator)
    }

    /// Reads commands line by line until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> io::Result<()> {
        writeln!(output, "Welcome. Type 'help' for commands.")?;

        let mut line = String::new();
        loop {
            write!(output, "> ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                info!("Input closed");
                break;
            }

            let command = parse_command(&line);
            debug!("Received: {:?}", command);

            match handle_command(self, command, input, output)? {
                CommandResult::Quit => {
                    info!("Session ended");
                    break;
                }
                CommandResult::Continue => continue,
            }
        }
        Ok(())
    }
}
