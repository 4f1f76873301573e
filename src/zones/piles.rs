//! Card piles used during a battle: draw pile, hand and discard.
//!
//! - The draw pile is ordered; cards are drawn from the end (the "top").
//! - The hand keeps insertion order for display only.
//! - The discard is ordered by play order and is reshuffled into the draw
//!   pile whenever a draw finds the pile empty.
//!
//! All piles are `im::Vector`s so a battle snapshot clones in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::CardName;
use crate::core::rng::GameRng;

/// The three per-battle card zones.
///
/// ## Usage
///
/// ```
/// use deck_battle::zones::Piles;
/// use deck_battle::cards::CardName;
/// use deck_battle::core::GameRng;
///
/// let mut piles = Piles::from_deck(vec![CardName::new("Strike"), CardName::new("Heal")]);
/// let mut rng = GameRng::new(1);
///
/// // Draws from the end of the pile
/// assert_eq!(piles.draw(1, &mut rng), 1);
/// assert_eq!(piles.hand()[0], CardName::new("Heal"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piles {
    deck: Vector<CardName>,
    hand: Vector<CardName>,
    discard: Vector<CardName>,
}

impl Piles {
    /// Create empty piles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create piles with the given draw pile and an empty hand and discard.
    #[must_use]
    pub fn from_deck(deck: impl IntoIterator<Item = CardName>) -> Self {
        Self {
            deck: deck.into_iter().collect(),
            hand: Vector::new(),
            discard: Vector::new(),
        }
    }

    /// Create piles with explicit contents.
    #[must_use]
    pub fn from_parts(
        deck: impl IntoIterator<Item = CardName>,
        hand: impl IntoIterator<Item = CardName>,
        discard: impl IntoIterator<Item = CardName>,
    ) -> Self {
        Self {
            deck: deck.into_iter().collect(),
            hand: hand.into_iter().collect(),
            discard: discard.into_iter().collect(),
        }
    }

    /// Draw pile, bottom first.
    #[must_use]
    pub fn deck(&self) -> &Vector<CardName> {
        &self.deck
    }

    /// Cards in hand, in the order they were drawn.
    #[must_use]
    pub fn hand(&self) -> &Vector<CardName> {
        &self.hand
    }

    /// Discard pile, oldest first.
    #[must_use]
    pub fn discard(&self) -> &Vector<CardName> {
        &self.discard
    }

    /// Shuffle the draw pile in place.
    pub fn shuffle_deck(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<CardName> = self.deck.iter().cloned().collect();
        rng.shuffle(&mut cards);
        self.deck = cards.into_iter().collect();
    }

    /// Move the whole discard into the draw pile and shuffle it.
    ///
    /// Returns the number of cards moved.
    pub fn reshuffle_discard(&mut self, rng: &mut GameRng) -> usize {
        let moved = self.discard.len();
        if moved == 0 {
            return 0;
        }
        let discard = std::mem::take(&mut self.discard);
        self.deck.append(discard);
        self.shuffle_deck(rng);
        debug!(cards = moved, "reshuffled discard into deck");
        moved
    }

    /// Draw up to `n` cards into the hand, one at a time.
    ///
    /// Before each draw an empty draw pile is refilled from the discard.
    /// Drawing stops early, without error, once both are empty.
    /// Returns the number of cards drawn.
    pub fn draw(&mut self, n: usize, rng: &mut GameRng) -> usize {
        let mut drawn = 0;
        for _ in 0..n {
            if self.deck.is_empty() && self.reshuffle_discard(rng) == 0 {
                break;
            }
            match self.deck.pop_back() {
                Some(card) => {
                    debug!(card = %card, "drew card");
                    self.hand.push_back(card);
                    drawn += 1;
                }
                None => break,
            }
        }
        drawn
    }

    /// Check whether a card is in hand.
    #[must_use]
    pub fn in_hand(&self, card: &CardName) -> bool {
        self.hand.contains(card)
    }

    /// Move one instance of `card` from hand to the discard.
    ///
    /// Returns `false` (and changes nothing) if the card is not in hand.
    pub fn discard_from_hand(&mut self, card: &CardName) -> bool {
        match self.hand.index_of(card) {
            Some(pos) => {
                let removed = self.hand.remove(pos);
                self.discard.push_back(removed);
                true
            }
            None => false,
        }
    }

    /// Total cards across all three piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(cards: &[&str]) -> Vec<CardName> {
        cards.iter().map(|&c| CardName::new(c)).collect()
    }

    #[test]
    fn test_draw_from_top() {
        let mut piles = Piles::from_deck(names(&["Strike", "Heal", "Big Strike"]));
        let mut rng = GameRng::new(42);

        assert_eq!(piles.draw(2, &mut rng), 2);
        assert_eq!(piles.hand().iter().cloned().collect::<Vec<_>>(), names(&["Big Strike", "Heal"]));
        assert_eq!(piles.deck().len(), 1);
    }

    #[test]
    fn test_draw_reshuffles_discard() {
        let mut piles = Piles::from_parts(
            names(&["Strike"]),
            Vec::new(),
            names(&["Heal", "Strike"]),
        );
        let mut rng = GameRng::new(42);

        assert_eq!(piles.draw(3, &mut rng), 3);
        assert_eq!(piles.hand().len(), 3);
        assert!(piles.deck().is_empty());
        assert!(piles.discard().is_empty());

        let mut hand: Vec<_> = piles.hand().iter().cloned().collect();
        hand.sort();
        assert_eq!(hand, names(&["Heal", "Strike", "Strike"]));
    }

    #[test]
    fn test_partial_draw_when_exhausted() {
        let mut piles = Piles::from_parts(names(&["Strike"]), names(&["Heal"]), Vec::new());
        let mut rng = GameRng::new(1);

        assert_eq!(piles.draw(3, &mut rng), 1);
        assert_eq!(piles.hand().len(), 2);
        assert_eq!(piles.draw(3, &mut rng), 0);
    }

    #[test]
    fn test_no_reshuffle_while_deck_has_cards() {
        let mut piles = Piles::from_parts(names(&["Strike", "Strike"]), Vec::new(), names(&["Heal"]));
        let mut rng = GameRng::new(5);

        piles.draw(2, &mut rng);
        assert_eq!(piles.discard().len(), 1);
        assert!(piles.deck().is_empty());
    }

    #[test]
    fn test_discard_from_hand_removes_one_instance() {
        let mut piles = Piles::from_parts(Vec::new(), names(&["Strike", "Heal", "Strike"]), Vec::new());

        assert!(piles.discard_from_hand(&CardName::new("Strike")));
        assert_eq!(piles.hand().iter().cloned().collect::<Vec<_>>(), names(&["Heal", "Strike"]));
        assert_eq!(piles.discard().iter().cloned().collect::<Vec<_>>(), names(&["Strike"]));

        assert!(!piles.discard_from_hand(&CardName::new("Big Strike")));
        assert_eq!(piles.total(), 3);
    }

    #[test]
    fn test_shuffle_keeps_cards() {
        let mut piles = Piles::from_deck(names(&["A", "B", "C", "D", "E", "F", "G", "H"]));
        let mut rng = GameRng::new(42);

        piles.shuffle_deck(&mut rng);

        let mut deck: Vec<_> = piles.deck().iter().cloned().collect();
        deck.sort();
        assert_eq!(deck, names(&["A", "B", "C", "D", "E", "F", "G", "H"]));
    }
}
