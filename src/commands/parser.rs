// Command enum to represent terminal form commands
#[derive(Debug, PartialEq)]
pub enum Command {
    Register,
    Login,
    Help,
    Quit,
    Unknown(String),
}

#[derive(Debug, PartialEq)]
pub enum CommandResult {
    Quit,
    Continue,
}

// Parse raw command string into Command enum
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let cmd = trimmed.to_ascii_uppercase();

    match cmd.as_str() {
        "REGISTER" | "R" => Command::Register,
        "LOGIN" | "L" => Command::Login,
        "HELP" | "?" => Command::Help,
        "QUIT" | "Q" | "EXIT" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}
