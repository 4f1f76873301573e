//! # deck-battle
//!
//! A deterministic card-battle engine: a player fights an enemy with a deck
//! of attack and heal cards, drawn into a hand and played turn by turn, with
//! a card reward after every win.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: A battle is a `BattleState` value. The engine never
//!    holds battle state of its own, so battles can coexist.
//!
//! 2. **Injected Randomness**: Shuffles, enemy damage and reward sampling all
//!    go through a seedable `GameRng`. Same seed, same battle.
//!
//! 3. **Configuration Over Convention**: Cards, enemies, the starting deck
//!    and the numeric rules come from `GameData` / `BattleConfig`.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors, commands, battle state
//! - `cards`: Card definitions and the card library
//! - `zones`: Persistent deck and per-battle piles
//! - `enemies`: Enemy roster
//! - `rules`: `BattleEngine`
//! - `rewards`: Post-victory card offers
//! - `session`: Map / battle / reward flow
//! - `data`: TOML game data loading

pub mod core;
pub mod cards;
pub mod zones;
pub mod enemies;
pub mod rules;
pub mod rewards;
pub mod session;
pub mod data;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, BattleConfig, BattleError, BattleSnapshot, BattleState, Combatant, Command,
    GameRng, GameRngState, HandCard, HpPolicy, Outcome, Result,
};

pub use crate::cards::{CardDefinition, CardKind, CardLibrary, CardName};

pub use crate::zones::{Piles, PlayerDeck};

pub use crate::enemies::{EnemyDefinition, EnemyRoster};

pub use crate::rules::{BattleEngine, EngineRngState};

pub use crate::rewards::RewardOffer;

pub use crate::session::{Screen, Session};

pub use crate::data::GameData;
