
use crate::ParseError;
use anyhow::Result;

/// Commands a front end can feed into a battle
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    /// Submit the text as an attack prompt
    Attack(String),

    /// /input TEXT (the prompt field changed without submitting)
    Input(String),

    /// /restart
    Restart,

    /// /help
    Help,

    /// /quit
    Quit,
}

impl PlayerCommand {
    /// Serialize command back to its line form
    pub fn to_protocol_string(&self) -> String {
        match self {
            Self::Attack(text) => text.clone(),
            Self::Input(text) => format!("/input {}", text),
            Self::Restart => "/restart".to_string(),
            Self::Help => "/help".to_string(),
            Self::Quit => "/quit".to_string(),
        }
    }
}

/// Parse a single line of player input into a PlayerCommand
pub fn parse_player_command(line: &str) -> Result<PlayerCommand> {
    let Some(rest) = line.trim_start().strip_prefix('/') else {
        // Blank attacks are refused by the session, not here
        return Ok(PlayerCommand::Attack(line.to_string()));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, Some(arg)),
        None => (rest.trim_end(), None),
    };

    match name.to_lowercase().as_str() {
        "restart" => Ok(PlayerCommand::Restart),
        "help" => Ok(PlayerCommand::Help),
        "quit" | "exit" => Ok(PlayerCommand::Quit),
        "input" => parse_input(arg),
        _ => Err(ParseError::UnknownCommand(name.to_string()).into()),
    }
}

fn parse_input(arg: Option<&str>) -> Result<PlayerCommand> {
    // /input TEXT
    match arg {
        Some(text) if !text.trim().is_empty() => Ok(PlayerCommand::Input(text.to_string())),
        _ => Err(ParseError::MissingArgument("input".to_string()).into()),
    }
}
