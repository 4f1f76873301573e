//! Post-victory card rewards.
//!
//! After a win the player is offered a few distinct cards sampled from the
//! full library (cards already owned can come up again) and may take exactly
//! one. `RewardOffer::choose` consumes the offer, so a second pick from the
//! same victory does not type-check.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::info;

use crate::cards::{CardLibrary, CardName};
use crate::core::error::{BattleError, Result};
use crate::core::rng::GameRng;
use crate::zones::PlayerDeck;

/// Cards offered after a victory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardOffer {
    /// SmallVec: offers are two cards by default.
    options: SmallVec<[CardName; 2]>,
}

impl RewardOffer {
    /// Sample `count` distinct cards uniformly from the library.
    ///
    /// Offers the whole library when it has fewer than `count` cards.
    pub fn sample(library: &CardLibrary, count: usize, rng: &mut GameRng) -> Self {
        let names = library.names();
        let options = rng.sample(&names, count).into_iter().cloned().collect();
        Self { options }
    }

    /// Create an offer with fixed options.
    #[must_use]
    pub fn from_options(options: impl IntoIterator<Item = CardName>) -> Self {
        Self {
            options: options.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn options(&self) -> &[CardName] {
        &self.options
    }

    #[must_use]
    pub fn contains(&self, card: &CardName) -> bool {
        self.options.contains(card)
    }

    /// Take one of the offered cards and add it to the persistent deck.
    ///
    /// On `InvalidReward` the offer is handed back so the caller can retry.
    pub fn choose(
        self,
        card: &CardName,
        deck: &mut PlayerDeck,
    ) -> std::result::Result<CardName, (Self, BattleError)> {
        if !self.contains(card) {
            return Err((self, BattleError::InvalidReward(card.clone())));
        }
        deck.add(card.clone());
        info!(card = %card, deck_size = deck.len(), "reward added to deck");
        Ok(card.clone())
    }

    /// Like `choose`, dropping the offer on failure.
    pub fn take(self, card: &CardName, deck: &mut PlayerDeck) -> Result<CardName> {
        self.choose(card, deck).map_err(|(_, err)| err)
    }
}
