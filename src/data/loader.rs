//! Load game data (cards, enemies, starting deck, battle rules) from TOML.
//!
//! ```toml
//! starting_deck = ["Strike", "Strike", "Heal"]
//!
//! [battle]
//! enemy_damage_max = 6
//!
//! [[cards]]
//! name = "Strike"
//! kind = "attack"
//! magnitude = 5
//! description = "Deal 5 damage."
//!
//! [[enemies]]
//! key = "Battle 1"
//! name = "Fuzzy Beast"
//! hp = 15
//! image = "fuzzy.png"
//! ```
//!
//! `description` is optional and defaults to the stock text for the kind.
//! The `[battle]` table is optional; missing keys keep their defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::cards::{CardDefinition, CardLibrary, CardName};
use crate::core::config::BattleConfig;
use crate::core::error::{BattleError, Result};
use crate::enemies::{EnemyDefinition, EnemyRoster};
use crate::zones::PlayerDeck;

/// Everything a session needs that does not change during play.
#[derive(Clone, Debug)]
pub struct GameData {
    pub library: CardLibrary,
    pub roster: EnemyRoster,
    pub config: BattleConfig,
    pub starting_deck: PlayerDeck,
}

#[derive(Deserialize)]
struct RawGameData {
    #[serde(default)]
    battle: BattleConfig,
    starting_deck: Vec<String>,
    cards: Vec<RawCard>,
    enemies: Vec<RawEnemy>,
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawKind {
    Attack,
    Heal,
}

#[derive(Deserialize)]
struct RawCard {
    name: String,
    kind: RawKind,
    magnitude: i64,
    description: Option<String>,
}

#[derive(Deserialize)]
struct RawEnemy {
    key: String,
    name: String,
    hp: i64,
    #[serde(default)]
    image: String,
}

impl RawCard {
    fn into_definition(self) -> CardDefinition {
        let stock = match self.kind {
            RawKind::Attack => CardDefinition::attack(self.name, self.magnitude),
            RawKind::Heal => CardDefinition::heal(self.name, self.magnitude),
        };
        match self.description {
            Some(description) => CardDefinition { description, ..stock },
            None => stock,
        }
    }
}

impl GameData {
    /// Stock cards, enemies, deck and rules.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            library: CardLibrary::standard(),
            roster: EnemyRoster::standard(),
            config: BattleConfig::default(),
            starting_deck: PlayerDeck::standard(),
        }
    }

    /// Parse and validate game data from a TOML string.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let raw: RawGameData =
            toml::from_str(text).map_err(|e| BattleError::Config(e.to_string()))?;

        raw.battle.validate()?;

        let mut library = CardLibrary::new();
        for card in raw.cards {
            library.register(card.into_definition())?;
        }
        if library.is_empty() {
            return Err(BattleError::Config("no cards defined".into()));
        }

        let mut roster = EnemyRoster::new();
        for enemy in raw.enemies {
            roster.register(EnemyDefinition::new(enemy.key, enemy.name, enemy.hp, enemy.image))?;
        }
        if roster.is_empty() {
            return Err(BattleError::Config("no enemies defined".into()));
        }

        let starting_deck: PlayerDeck = raw.starting_deck.into_iter().map(CardName::from).collect();
        if starting_deck.is_empty() {
            return Err(BattleError::Config("starting deck is empty".into()));
        }
        library.validate(&starting_deck)?;

        info!(
            cards = library.len(),
            enemies = roster.len(),
            deck_size = starting_deck.len(),
            "game data loaded"
        );

        Ok(Self {
            library,
            roster,
            config: raw.battle,
            starting_deck,
        })
    }

    /// Read and parse a TOML data file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;
    use crate::core::config::HpPolicy;

    const SAMPLE: &str = r#"
starting_deck = ["Strike", "Strike", "Mend"]

[battle]
enemy_damage_max = 6
hp_policy = "reset"

[[cards]]
name = "Strike"
kind = "attack"
magnitude = 5

[[cards]]
name = "Mend"
kind = "heal"
magnitude = 4
description = "Patch yourself up."

[[enemies]]
key = "Battle 1"
name = "Fuzzy Beast"
hp = 15
image = "fuzzy.png"
"#;

    #[test]
    fn test_standard() {
        let data = GameData::standard();
        assert_eq!(data.library.len(), 3);
        assert_eq!(data.roster.len(), 3);
        assert_eq!(data.starting_deck.len(), 5);
    }

    #[test]
    fn test_parse_sample() {
        let data = GameData::from_toml_str(SAMPLE).unwrap();

        assert_eq!(data.library.len(), 2);
        assert_eq!(data.library.get("Strike").unwrap().description, "Deal 5 damage.");
        assert_eq!(data.library.get("Mend").unwrap().description, "Patch yourself up.");
        assert_eq!(data.library.get("Mend").unwrap().kind, CardKind::Heal { amount: 4 });

        assert_eq!(data.roster.get("Battle 1").unwrap().max_hp, 15);
        assert_eq!(data.starting_deck.count("Strike"), 2);

        // Partial [battle] table keeps the other defaults
        assert_eq!(data.config.enemy_damage_min, 2);
        assert_eq!(data.config.enemy_damage_max, 6);
        assert_eq!(data.config.hp_policy, HpPolicy::Reset);
        assert_eq!(data.config.starting_hand_size, 3);
    }

    #[test]
    fn test_unknown_card_in_deck() {
        let text = SAMPLE.replace("\"Mend\"]", "\"Meteor\"]");
        let err = GameData::from_toml_str(&text).unwrap_err();
        assert!(matches!(err, BattleError::UnknownCardName(ref n) if n == "Meteor"));
    }

    #[test]
    fn test_bad_toml() {
        let err = GameData::from_toml_str("cards = 3").unwrap_err();
        assert!(matches!(err, BattleError::Config(_)));
    }

    #[test]
    fn test_negative_magnitude() {
        let text = SAMPLE.replace("magnitude = 5", "magnitude = -5");
        assert!(matches!(
            GameData::from_toml_str(&text),
            Err(BattleError::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameData::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, BattleError::Io(_)));
    }
}
