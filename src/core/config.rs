//! Battle configuration.
//!
//! `BattleConfig` carries the numeric rules of a battle: hand sizes, the
//! enemy's damage roll, the number of reward options and how player HP moves
//! between battles. Games build one with the builder methods, or load
//! overrides from the `[battle]` table of a data file (see `data`).

use serde::{Deserialize, Serialize};

use super::error::{BattleError, Result};

/// How player HP is set when a new battle starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HpPolicy {
    /// Keep the HP left over from the previous battle.
    /// A player who was knocked out comes back at full HP.
    #[default]
    CarryOver,
    /// Restore the player to full HP for every battle.
    Reset,
}

/// Rules of a single battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Cards drawn when a battle starts.
    pub starting_hand_size: usize,

    /// Cards drawn at the end of every turn.
    pub draw_per_turn: usize,

    /// Lowest enemy hit (inclusive).
    pub enemy_damage_min: i64,

    /// Highest enemy hit (inclusive).
    pub enemy_damage_max: i64,

    /// Distinct cards offered after a victory.
    pub reward_options: usize,

    /// Player maximum HP.
    pub player_max_hp: i64,

    /// Player HP handling between battles.
    pub hp_policy: HpPolicy,

    /// Shuffle the draw pile before the opening hand.
    pub shuffle_on_start: bool,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            starting_hand_size: 3,
            draw_per_turn: 3,
            enemy_damage_min: 2,
            enemy_damage_max: 5,
            reward_options: 2,
            player_max_hp: 20,
            hp_policy: HpPolicy::CarryOver,
            shuffle_on_start: true,
        }
    }
}

impl BattleConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_draw_per_turn(mut self, count: usize) -> Self {
        self.draw_per_turn = count;
        self
    }

    /// Set the inclusive enemy damage range.
    #[must_use]
    pub fn with_enemy_damage(mut self, min: i64, max: i64) -> Self {
        self.enemy_damage_min = min;
        self.enemy_damage_max = max;
        self
    }

    #[must_use]
    pub fn with_reward_options(mut self, count: usize) -> Self {
        self.reward_options = count;
        self
    }

    #[must_use]
    pub fn with_player_max_hp(mut self, hp: i64) -> Self {
        self.player_max_hp = hp;
        self
    }

    #[must_use]
    pub fn with_hp_policy(mut self, policy: HpPolicy) -> Self {
        self.hp_policy = policy;
        self
    }

    #[must_use]
    pub fn with_shuffle_on_start(mut self, shuffle: bool) -> Self {
        self.shuffle_on_start = shuffle;
        self
    }

    /// Check the configuration for values no battle can run with.
    pub fn validate(&self) -> Result<()> {
        if self.enemy_damage_min < 0 || self.enemy_damage_max < self.enemy_damage_min {
            return Err(BattleError::Config(format!(
                "enemy damage range {}..={} is empty or negative",
                self.enemy_damage_min, self.enemy_damage_max
            )));
        }
        if self.player_max_hp <= 0 {
            return Err(BattleError::Config(format!(
                "player max HP must be positive, got {}",
                self.player_max_hp
            )));
        }
        Ok(())
    }
}
