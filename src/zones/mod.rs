//! Card zones.
//!
//! - `PlayerDeck`: the persistent deck the player carries between battles
//! - `Piles`: the draw pile, hand and discard of a running battle

pub mod deck;
pub mod piles;

pub use deck::PlayerDeck;
pub use piles::Piles;
