//! Card library for definition lookup.
//!
//! The `CardLibrary` stores every card definition a game knows about.
//! It provides fast lookup by name and keeps insertion order for display
//! and reward sampling. Once built it is shared read-only (usually behind
//! an `Arc`).

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardName};
use crate::core::error::{BattleError, Result};

/// Library of card definitions.
///
/// ## Example
///
/// ```
/// use deck_battle::cards::{CardLibrary, CardDefinition};
///
/// let mut library = CardLibrary::new();
/// library.register(CardDefinition::attack("Strike", 5)).unwrap();
///
/// let found = library.get("Strike").unwrap();
/// assert_eq!(found.magnitude(), 5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardLibrary {
    cards: Vec<CardDefinition>,
    index: FxHashMap<CardName, usize>,
}

impl CardLibrary {
    /// Create a new empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock library: Strike, Heal and Big Strike.
    #[must_use]
    pub fn standard() -> Self {
        let mut library = Self::new();
        for card in [
            CardDefinition::attack("Strike", 5),
            CardDefinition::heal("Heal", 3),
            CardDefinition::attack("Big Strike", 8),
        ] {
            library.insert(card);
        }
        library
    }

    /// Register a card definition.
    ///
    /// Fails if a card with the same name already exists, or if its damage
    /// or heal amount is negative.
    pub fn register(&mut self, card: CardDefinition) -> Result<()> {
        if card.magnitude() < 0 {
            return Err(BattleError::Config(format!(
                "card {} has negative magnitude {}",
                card.name,
                card.magnitude()
            )));
        }
        if self.index.contains_key(&card.name) {
            return Err(BattleError::Config(format!(
                "card {} already registered",
                card.name
            )));
        }
        self.insert(card);
        Ok(())
    }

    fn insert(&mut self, card: CardDefinition) {
        self.index.insert(card.name.clone(), self.cards.len());
        self.cards.push(card);
    }

    /// Get a card definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardDefinition> {
        self.index.get(name).map(|&i| &self.cards[i])
    }

    /// Get a card definition by name, or `UnknownCardName`.
    pub fn lookup(&self, name: &CardName) -> Result<&CardDefinition> {
        self.index
            .get(name)
            .map(|&i| &self.cards[i])
            .ok_or_else(|| BattleError::UnknownCardName(name.to_string()))
    }

    /// Check if a card name is registered.
    #[must_use]
    pub fn contains(&self, name: &CardName) -> bool {
        self.index.contains_key(name)
    }

    /// Fail with `UnknownCardName` on the first name not in the library.
    pub fn validate<'a>(&self, names: impl IntoIterator<Item = &'a CardName>) -> Result<()> {
        for name in names {
            self.lookup(name)?;
        }
        Ok(())
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the library is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }

    /// All card names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<CardName> {
        self.cards.iter().map(|c| c.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;

    #[test]
    fn test_standard_library() {
        let library = CardLibrary::standard();

        assert_eq!(library.len(), 3);
        assert_eq!(library.get("Strike").unwrap().kind, CardKind::Attack { damage: 5 });
        assert_eq!(library.get("Heal").unwrap().kind, CardKind::Heal { amount: 3 });
        assert_eq!(library.get("Big Strike").unwrap().kind, CardKind::Attack { damage: 8 });
        assert!(library.get("Fireball").is_none());
    }

    #[test]
    fn test_registration_order() {
        let library = CardLibrary::standard();
        let names: Vec<_> = library.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Strike", "Heal", "Big Strike"]);
        assert_eq!(library.names().len(), 3);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut library = CardLibrary::new();
        library.register(CardDefinition::attack("Strike", 5)).unwrap();

        let err = library.register(CardDefinition::attack("Strike", 6)).unwrap_err();
        assert!(matches!(err, BattleError::Config(_)));
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_negative_magnitude_rejected() {
        let mut library = CardLibrary::new();

        let err = library.register(CardDefinition::heal("Curse", -30)).unwrap_err();
        assert!(matches!(err, BattleError::Config(_)));
        assert!(library.register(CardDefinition::attack("Mend", -4)).is_err());
        assert!(library.is_empty());

        // Zero is a legal no-op card
        library.register(CardDefinition::attack("Feint", 0)).unwrap();
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_lookup_unknown() {
        let library = CardLibrary::standard();
        let err = library.lookup(&CardName::new("Fireball")).unwrap_err();
        assert!(matches!(err, BattleError::UnknownCardName(ref n) if n == "Fireball"));
    }

    #[test]
    fn test_validate() {
        let library = CardLibrary::standard();
        let good = [CardName::new("Strike"), CardName::new("Heal")];
        assert!(library.validate(&good).is_ok());

        let bad = [CardName::new("Strike"), CardName::new("Meteor")];
        assert!(library.validate(&bad).is_err());
    }
}
