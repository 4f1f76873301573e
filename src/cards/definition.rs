//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: "Big Strike"
//! is an attack that deals 8 damage. Decks, hands and discard piles only
//! store the card's `CardName`; the definition is looked up in the
//! `CardLibrary` when the card is resolved or rendered.

use serde::{Deserialize, Serialize};

/// Name of a card, used as its identifier everywhere in a battle.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardName(String);

impl CardName {
    /// Create a new card name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for CardName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for CardName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for CardName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CardName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// What a card does when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardKind {
    /// Subtract `damage` from the enemy's HP.
    Attack { damage: i64 },
    /// Add `amount` to the player's HP, capped at max HP.
    Heal { amount: i64 },
}

impl CardKind {
    /// Damage dealt or HP restored.
    #[must_use]
    pub fn magnitude(self) -> i64 {
        match self {
            CardKind::Attack { damage } => damage,
            CardKind::Heal { amount } => amount,
        }
    }

    /// Lowercase kind label ("attack" / "heal").
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CardKind::Attack { .. } => "attack",
            CardKind::Heal { .. } => "heal",
        }
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use deck_battle::cards::{CardDefinition, CardKind};
///
/// let strike = CardDefinition::attack("Strike", 5);
/// assert_eq!(strike.kind, CardKind::Attack { damage: 5 });
/// assert_eq!(strike.description, "Deal 5 damage.");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Card name (unique within a library).
    pub name: CardName,

    /// Effect of the card.
    pub kind: CardKind,

    /// Rules text shown next to the card.
    pub description: String,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(name: impl Into<CardName>, kind: CardKind, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
        }
    }

    /// Attack card with the stock description.
    #[must_use]
    pub fn attack(name: impl Into<CardName>, damage: i64) -> Self {
        Self::new(
            name,
            CardKind::Attack { damage },
            format!("Deal {damage} damage."),
        )
    }

    /// Heal card with the stock description.
    #[must_use]
    pub fn heal(name: impl Into<CardName>, amount: i64) -> Self {
        Self::new(
            name,
            CardKind::Heal { amount },
            format!("Restore {amount} HP."),
        )
    }

    /// Damage dealt or HP restored.
    #[must_use]
    pub fn magnitude(&self) -> i64 {
        self.kind.magnitude()
    }
}
