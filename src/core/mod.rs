//! Core battle types: RNG, configuration, errors, commands, state.
//!
//! These are the building blocks shared by the engine, the session flow and
//! the Python bindings.

pub mod rng;
pub mod config;
pub mod error;
pub mod action;
pub mod state;

pub use rng::{GameRng, GameRngState};
pub use config::{BattleConfig, HpPolicy};
pub use error::{BattleError, Result};
pub use action::{ActionRecord, Command};
pub use state::{BattleSnapshot, BattleState, Combatant, HandCard, Outcome};
