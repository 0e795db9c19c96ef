use crate::auth::{LoginForm, login, register};
use crate::auth::results::REGISTRATION_SUCCESS;
use crate::commands::parser::{Command, CommandResult};
use crate::error::RegistrationError;
use crate::session::Session;
use crate::storage::KeyValueStore;
use crate::utils::prompt::{read_field, read_flag};
use crate::validation::RegistrationForm;

use log::{error, info};
use std::io::{self, BufRead, Write};

const HELP: &str = "Commands: register (r), login (l), help (?), quit (q)";

// Handle a single command against the session
pub fn handle_command<B, R, W>(
    session: &mut Session<B>,
    command: Command,
    input: &mut R,
    output: &mut W,
) -> io::Result<CommandResult>
where
    B: KeyValueStore,
    R: BufRead,
    W: Write,
{
    match command {
        Command::Register => handle_cmd_register(session, input, output),
        Command::Login => handle_cmd_login(session, input, output),
        Command::Help => {
            writeln!(output, "{}", HELP)?;
            Ok(CommandResult::Continue)
        }
        Command::Quit => {
            writeln!(output, "Goodbye")?;
            Ok(CommandResult::Quit)
        }
        Command::Unknown(cmd) => {
            info!("Unknown command: {}", cmd);
            writeln!(output, "Unknown command '{}'. {}", cmd, HELP)?;
            Ok(CommandResult::Continue)
        }
    }
}

// Command handler for REGISTER
fn handle_cmd_register<B, R, W>(
    session: &mut Session<B>,
    input: &mut R,
    output: &mut W,
) -> io::Result<CommandResult>
where
    B: KeyValueStore,
    R: BufRead,
    W: Write,
{
    let Some(form) = read_registration_form(input, output)? else {
        return Ok(CommandResult::Quit);
    };

    let (store, validator) = session.parts_mut();
    match register(store, validator, &form.normalized()) {
        Ok(_) => writeln!(output, "{}", REGISTRATION_SUCCESS)?,
        Err(RegistrationError::Rejected(errors)) => {
            for rule in errors.violations() {
                writeln!(output, "Error [{}]: {}", rule.field(), rule)?;
            }
        }
        Err(RegistrationError::Storage(e)) => {
            error!("Failed to save registration: {}", e);
            writeln!(output, "Error: registration could not be saved.")?;
        }
    }
    Ok(CommandResult::Continue)
}

// Command handler for LOGIN
fn handle_cmd_login<B, R, W>(
    session: &mut Session<B>,
    input: &mut R,
    output: &mut W,
) -> io::Result<CommandResult>
where
    B: KeyValueStore,
    R: BufRead,
    W: Write,
{
    let Some(username) = read_field(input, output, "Username")? else {
        return Ok(CommandResult::Quit);
    };
    let Some(password) = read_field(input, output, "Password")? else {
        return Ok(CommandResult::Quit);
    };
    let Some(persist) = read_flag(input, output, "Keep me logged in")? else {
        return Ok(CommandResult::Quit);
    };

    let form = LoginForm {
        username,
        password,
        persist,
    }
    .normalized();

    match login(session.store(), &form) {
        Ok(success) => writeln!(output, "{}", success.message())?,
        Err(e) => writeln!(output, "Error: {}", e)?,
    }
    Ok(CommandResult::Continue)
}

fn read_registration_form<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<RegistrationForm>> {
    let Some(username) = read_field(input, output, "Username")? else {
        return Ok(None);
    };
    let Some(email) = read_field(input, output, "Email")? else {
        return Ok(None);
    };
    let Some(password) = read_field(input, output, "Password")? else {
        return Ok(None);
    };
    let Some(password_confirmation) = read_field(input, output, "Confirm password")? else {
        return Ok(None);
    };
    let Some(terms_accepted) = read_flag(input, output, "I agree to the Terms of Use")? else {
        return Ok(None);
    };

    Ok(Some(RegistrationForm {
        username,
        email,
        password,
        password_confirmation,
        terms_accepted,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, UserStore};
    use crate::validation::{ValidationMode, Validator};
    use std::io::Cursor;

    fn session(mode: ValidationMode) -> Session<MemoryStore> {
        Session::new(UserStore::new(MemoryStore::new()), Validator::new(mode))
    }

    fn run(
        session: &mut Session<MemoryStore>,
        command: Command,
        lines: &str,
    ) -> (CommandResult, String) {
        let mut input = Cursor::new(lines.to_string());
        let mut output = Vec::new();
        let result = handle_command(session, command, &mut input, &mut output).unwrap();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_register_then_login() {
        let mut session = session(ValidationMode::FailFast);

        let (result, out) = run(
            &mut session,
            Command::Register,
            " Grace1 \nGrace@Mail.com\nAbcdefghij1!\nAbcdefghij1!\ny\n",
        );
        assert_eq!(result, CommandResult::Continue);
        assert!(out.ends_with("Registration successful!\n"));
        assert_eq!(
            session.store().find("grace1").unwrap().email,
            "grace@mail.com"
        );

        let (_, out) = run(&mut session, Command::Login, "GRACE1\nAbcdefghij1!\ny\n");
        assert!(out.ends_with("Login successful! You will remain logged in.\n"));
    }

    #[test]
    fn test_register_collect_all_prints_every_error() {
        let mut session = session(ValidationMode::CollectAll);
        let (_, out) = run(
            &mut session,
            Command::Register,
            "heidi1\nheidi@mail.com\nshort\nshort\nn\n",
        );

        assert!(out.contains("Error [password]: Password must be at least 12 characters long.\n"));
        assert!(out.contains("Error [terms]: You must agree to the Terms of Use.\n"));
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_register_blank_email_names_the_field() {
        let mut session = session(ValidationMode::FailFast);
        let (_, out) = run(
            &mut session,
            Command::Register,
            "heidi1\n   \nAbcdefghij1!\nAbcdefghij1!\ny\n",
        );

        assert!(out.ends_with("Error [email]: Email cannot be blank.\n"));
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_login_unknown_user() {
        let mut session = session(ValidationMode::FailFast);
        let (_, out) = run(&mut session, Command::Login, "ivan\nwhatever\nn\n");
        assert!(out.ends_with("Error: Invalid username or password.\n"));
    }

    #[test]
    fn test_eof_mid_form_quits() {
        let mut session = session(ValidationMode::FailFast);
        let (result, _) = run(&mut session, Command::Register, "judy1\n");
        assert_eq!(result, CommandResult::Quit);
    }

    #[test]
    fn test_quit_and_unknown() {
        let mut session = session(ValidationMode::FailFast);
        assert_eq!(run(&mut session, Command::Quit, "").0, CommandResult::Quit);

        let (result, out) = run(&mut session, Command::Unknown("dance".into()), "");
        assert_eq!(result, CommandResult::Continue);
        assert!(out.starts_with("Unknown command 'dance'."));
    }
}
