//! Enemy definitions and the ordered roster the map offers.

use serde::{Deserialize, Serialize};

use crate::core::error::{BattleError, Result};

/// A single enemy the player can fight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyDefinition {
    /// Roster slot label shown on the map (e.g. "Battle 1").
    pub key: String,

    /// Enemy display name.
    pub name: String,

    /// Starting and maximum HP.
    pub max_hp: i64,

    /// Opaque display reference for the presentation layer.
    pub image: String,
}

impl EnemyDefinition {
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        max_hp: i64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            max_hp,
            image: image.into(),
        }
    }
}

/// Fixed, ordered list of enemies.
///
/// ```
/// use deck_battle::enemies::EnemyRoster;
///
/// let roster = EnemyRoster::standard();
/// assert_eq!(roster.len(), 3);
/// assert_eq!(roster.get("Battle 2").unwrap().name, "Snail Slime");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyRoster {
    enemies: Vec<EnemyDefinition>,
}

impl EnemyRoster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fuzzy Beast, Snail Slime and Stone Golem.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            enemies: vec![
                EnemyDefinition::new("Battle 1", "Fuzzy Beast", 15, "https://i.imgur.com/kJvBvgG.png"),
                EnemyDefinition::new("Battle 2", "Snail Slime", 20, "https://i.imgur.com/MclAdVR.png"),
                EnemyDefinition::new("Battle 3", "Stone Golem", 25, "https://i.imgur.com/DZ8UXLs.png"),
            ],
        }
    }

    /// Add an enemy at the end of the roster.
    ///
    /// Fails on a duplicate key or non-positive HP.
    pub fn register(&mut self, enemy: EnemyDefinition) -> Result<()> {
        if self.enemies.iter().any(|e| e.key == enemy.key) {
            return Err(BattleError::Config(format!(
                "enemy {} already registered",
                enemy.key
            )));
        }
        if enemy.max_hp <= 0 {
            return Err(BattleError::Config(format!(
                "enemy {} must have positive HP, got {}",
                enemy.key, enemy.max_hp
            )));
        }
        self.enemies.push(enemy);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&EnemyDefinition> {
        self.enemies.iter().find(|e| e.key == key)
    }

    /// Get an enemy by key, or `UnknownEnemy`.
    pub fn lookup(&self, key: &str) -> Result<&EnemyDefinition> {
        self.get(key)
            .ok_or_else(|| BattleError::UnknownEnemy(key.to_string()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Enemies in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &EnemyDefinition> {
        self.enemies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_roster_order() {
        let roster = EnemyRoster::standard();
        let keys: Vec<_> = roster.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["Battle 1", "Battle 2", "Battle 3"]);

        let hp: Vec<_> = roster.iter().map(|e| e.max_hp).collect();
        assert_eq!(hp, vec![15, 20, 25]);
    }

    #[test]
    fn test_lookup_unknown() {
        let roster = EnemyRoster::standard();
        assert!(roster.lookup("Battle 1").is_ok());
        assert!(matches!(
            roster.lookup("Battle 9"),
            Err(BattleError::UnknownEnemy(ref k)) if k == "Battle 9"
        ));
    }

    #[test]
    fn test_register_validation() {
        let mut roster = EnemyRoster::new();
        roster
            .register(EnemyDefinition::new("Boss", "Dragon", 40, "dragon.png"))
            .unwrap();

        assert!(roster
            .register(EnemyDefinition::new("Boss", "Other", 10, ""))
            .is_err());
        assert!(roster
            .register(EnemyDefinition::new("Ghost", "Ghost", 0, ""))
            .is_err());
        assert_eq!(roster.len(), 1);
    }
}
