//! Battle rules.
//!
//! `BattleEngine` is the single component that mutates a `BattleState`.

pub mod engine;

pub use engine::{BattleEngine, EngineRngState};
