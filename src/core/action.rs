//! Inbound commands and the history they leave behind.
//!
//! A presentation layer drives a battle with a small set of commands:
//! - "Select enemy" = start a battle against a roster entry
//! - "Play card X" = resolve one card from hand
//! - "End turn" = refill the hand and let the enemy act
//! - "Choose reward X" = add a card to the persistent deck
//! - "Return to map" = leave the current battle
//!
//! Every accepted battle command is stored as an `ActionRecord` so a battle
//! can be inspected or replayed.

use serde::{Deserialize, Serialize};

use crate::cards::CardName;

/// A command issued by the player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Start a battle against the roster entry with this key.
    SelectEnemy(String),
    /// Play one card from hand.
    PlayCard(CardName),
    /// End the current turn.
    EndTurn,
    /// Take one of the offered reward cards.
    ChooseReward(CardName),
    /// Leave the battle and go back to the map.
    ReturnToMap,
}

impl Command {
    /// Short verb phrase used in error messages and logs.
    #[must_use]
    pub fn verb(&self) -> &'static str {
        match self {
            Command::SelectEnemy(_) => "select an enemy",
            Command::PlayCard(_) => "play a card",
            Command::EndTurn => "end the turn",
            Command::ChooseReward(_) => "choose a reward",
            Command::ReturnToMap => "return to the map",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::SelectEnemy(key) => write!(f, "SelectEnemy({key})"),
            Command::PlayCard(card) => write!(f, "PlayCard({card})"),
            Command::EndTurn => write!(f, "EndTurn"),
            Command::ChooseReward(card) => write!(f, "ChooseReward({card})"),
            Command::ReturnToMap => write!(f, "ReturnToMap"),
        }
    }
}

/// A recorded command with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The command taken.
    pub command: Command,

    /// Turn number when the command was taken.
    pub turn: u32,

    /// Sequence number within the battle (for ordering).
    pub sequence: usize,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(command: Command, turn: u32, sequence: usize) -> Self {
        Self {
            command,
            turn,
            sequence,
        }
    }
}
