//! The player's persistent deck.
//!
//! `PlayerDeck` is the card list the player owns between battles. A battle
//! copies it into a fresh draw pile, so cards drawn, played or left in hand
//! never leak out of the deck; rewards are appended here and show up in the
//! next battle.

use serde::{Deserialize, Serialize};

use crate::cards::CardName;

/// Ordered list of card names owned by the player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerDeck {
    cards: Vec<CardName>,
}

impl PlayerDeck {
    #[must_use]
    pub fn new(cards: Vec<CardName>) -> Self {
        Self { cards }
    }

    /// Strike x3, Heal, Big Strike.
    #[must_use]
    pub fn standard() -> Self {
        ["Strike", "Strike", "Strike", "Heal", "Big Strike"]
            .into_iter()
            .map(CardName::from)
            .collect()
    }

    /// Append a card (used by rewards).
    pub fn add(&mut self, card: CardName) {
        self.cards.push(card);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of copies of `card` in the deck.
    #[must_use]
    pub fn count(&self, card: &str) -> usize {
        self.cards.iter().filter(|c| *c == card).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardName> {
        self.cards.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[CardName] {
        &self.cards
    }
}

impl FromIterator<CardName> for PlayerDeck {
    fn from_iter<I: IntoIterator<Item = CardName>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PlayerDeck {
    type Item = &'a CardName;
    type IntoIter = std::slice::Iter<'a, CardName>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
