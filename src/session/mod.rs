//! Session flow: map, battle, reward.
//!
//! `Session` strings battles together the way the game is played: pick an
//! enemy on the map, fight, take a reward card after a win, return to the
//! map. Player HP and the deck carry over between battles.

pub mod campaign;

pub use campaign::{Screen, Session};
