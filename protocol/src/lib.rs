use thiserror::Error;

pub mod command;
pub mod element;
pub mod event;

pub use command::{PlayerCommand, parse_player_command};
pub use element::Element;
pub use event::{
    AttackResolution, GameEvent, Outcome, RejectReason, SessionSnapshot, hp_percent,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Unknown command: /{0}")]
    UnknownCommand(String),

    #[error("Missing argument for /{0}")]
    MissingArgument(String),

    #[error("Unknown element: {0}")]
    UnknownElement(String),
}
