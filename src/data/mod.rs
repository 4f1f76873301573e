//! Game data: card library, enemy roster, starting deck and battle rules.

pub mod loader;

pub use loader::GameData;
