//! Error taxonomy for battle commands and game data.

use thiserror::Error;

use crate::cards::CardName;

#[derive(Error, Debug)]
pub enum BattleError {
    #[error("Card not in hand: {0}")]
    InvalidCard(CardName),

    #[error("Cannot {command}: {state}")]
    InvalidState { command: &'static str, state: String },

    #[error("Unknown card name: {0}")]
    UnknownCardName(String),

    #[error("Unknown enemy: {0}")]
    UnknownEnemy(String),

    #[error("Card was not offered as a reward: {0}")]
    InvalidReward(CardName),

    #[error("Invalid game data: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BattleError {
    pub(crate) fn invalid_state(command: &'static str, state: impl std::fmt::Display) -> Self {
        Self::InvalidState {
            command,
            state: state.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BattleError>;
