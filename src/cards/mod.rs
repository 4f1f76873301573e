//! Card system: definitions and the card library.
//!
//! - `CardName`: identifier stored in decks, hands and discard piles
//! - `CardKind`: attack or heal, with its magnitude
//! - `CardDefinition`: static card data (name, kind, description)
//! - `CardLibrary`: read-only name -> definition lookup

pub mod definition;
pub mod library;

pub use definition::{CardDefinition, CardKind, CardName};
pub use library::CardLibrary;
