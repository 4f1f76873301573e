//! Enemy roster: static configuration, one definition per battle.

pub mod roster;

pub use roster::{EnemyDefinition, EnemyRoster};
