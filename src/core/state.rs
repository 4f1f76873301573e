//! Battle state: everything one fight needs, as a plain value.
//!
//! ## BattleState
//!
//! Mutable state of a single battle:
//! - Player and enemy HP (`Combatant`)
//! - Draw pile, hand and discard (`Piles`)
//! - Turn counter, outcome and last-action message
//! - Command history
//!
//! A `BattleState` is created by `BattleEngine::start_battle`, changed only
//! through engine operations, and dropped when the battle is left.
//!
//! ## BattleSnapshot
//!
//! Read-only, serializable view of a `BattleState` for rendering.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{ActionRecord, Command};
use crate::cards::{CardLibrary, CardName};
use crate::enemies::EnemyDefinition;
use crate::zones::Piles;

/// HP pool of the player or the enemy.
///
/// `hp` is kept within `[0, max_hp]` after every change, so a renderer never
/// sees negative HP.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combatant {
    hp: i64,
    max_hp: i64,
}

impl Combatant {
    /// Create a combatant at full HP.
    #[must_use]
    pub fn new(max_hp: i64) -> Self {
        let max_hp = max_hp.max(0);
        Self { hp: max_hp, max_hp }
    }

    /// Create a combatant with explicit HP (clamped).
    #[must_use]
    pub fn with_hp(hp: i64, max_hp: i64) -> Self {
        let mut combatant = Self::new(max_hp);
        combatant.set_hp(hp);
        combatant
    }

    #[must_use]
    pub fn hp(&self) -> i64 {
        self.hp
    }

    #[must_use]
    pub fn max_hp(&self) -> i64 {
        self.max_hp
    }

    /// Set HP, clamped to `[0, max_hp]`.
    pub fn set_hp(&mut self, hp: i64) {
        self.hp = hp.clamp(0, self.max_hp);
    }

    /// Subtract `amount` and return the HP actually lost.
    pub fn damage(&mut self, amount: i64) -> i64 {
        let before = self.hp;
        self.set_hp(self.hp.saturating_sub(amount));
        before - self.hp
    }

    /// Add `amount`, capped at max HP, and return the HP actually gained.
    pub fn heal(&mut self, amount: i64) -> i64 {
        let before = self.hp;
        self.set_hp(self.hp.saturating_add(amount));
        self.hp - before
    }

    /// Restore to full HP.
    pub fn restore(&mut self) {
        self.hp = self.max_hp;
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }
}

/// Result of a battle so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    #[default]
    Ongoing,
    Victory,
    Defeat,
}

impl Outcome {
    /// Victory and defeat both end the battle.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "ongoing"),
            Outcome::Victory => write!(f, "victory"),
            Outcome::Defeat => write!(f, "defeat"),
        }
    }
}

/// Complete state of one battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleState {
    /// The player's HP.
    pub player: Combatant,

    /// The enemy's HP.
    pub enemy: Combatant,

    /// Which enemy is being fought.
    pub enemy_info: EnemyDefinition,

    /// Draw pile, hand and discard.
    pub piles: Piles,

    turn: u32,
    outcome: Outcome,
    message: String,
    history: Vector<ActionRecord>,
}

impl BattleState {
    /// Create a battle at turn 1 with an empty message and history.
    ///
    /// Enemy HP starts at the definition's max HP. No cards are drawn;
    /// `BattleEngine::start_battle` handles the opening hand.
    #[must_use]
    pub fn new(enemy_info: EnemyDefinition, player: Combatant, piles: Piles) -> Self {
        Self {
            player,
            enemy: Combatant::new(enemy_info.max_hp),
            enemy_info,
            piles,
            turn: 1,
            outcome: Outcome::Ongoing,
            message: String::new(),
            history: Vector::new(),
        }
    }

    /// Turn number (starts at 1).
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Description of the last thing that happened.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Commands applied to this battle, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn hand(&self) -> &Vector<CardName> {
        self.piles.hand()
    }

    pub(crate) fn advance_turn(&mut self) {
        self.turn += 1;
    }

    /// Only moves away from `Ongoing`; a finished battle stays finished.
    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        if !self.outcome.is_terminal() {
            self.outcome = outcome;
        }
    }

    pub(crate) fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub(crate) fn append_message(&mut self, text: &str) {
        self.message.push_str(text);
    }

    pub(crate) fn record(&mut self, command: Command) {
        let sequence = self.history.len();
        self.history
            .push_back(ActionRecord::new(command, self.turn, sequence));
    }

    /// Build a read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self, library: &CardLibrary) -> BattleSnapshot {
        let hand = self
            .piles
            .hand()
            .iter()
            .map(|name| match library.get(name.as_str()) {
                Some(def) => HandCard {
                    name: name.clone(),
                    kind: def.kind.label().to_string(),
                    magnitude: def.magnitude(),
                    description: def.description.clone(),
                },
                None => HandCard {
                    name: name.clone(),
                    kind: String::new(),
                    magnitude: 0,
                    description: String::new(),
                },
            })
            .collect();

        BattleSnapshot {
            turn: self.turn,
            outcome: self.outcome,
            message: self.message.clone(),
            player_hp: self.player.hp(),
            player_max_hp: self.player.max_hp(),
            enemy_name: self.enemy_info.name.clone(),
            enemy_image: self.enemy_info.image.clone(),
            enemy_hp: self.enemy.hp(),
            enemy_max_hp: self.enemy.max_hp(),
            hand,
            deck_size: self.piles.deck().len(),
            discard_size: self.piles.discard().len(),
        }
    }
}

/// A card in hand, with the text a renderer needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandCard {
    pub name: CardName,
    pub kind: String,
    pub magnitude: i64,
    pub description: String,
}

/// Read-only view of a battle after a command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub turn: u32,
    pub outcome: Outcome,
    pub message: String,
    pub player_hp: i64,
    pub player_max_hp: i64,
    pub enemy_name: String,
    pub enemy_image: String,
    pub enemy_hp: i64,
    pub enemy_max_hp: i64,
    pub hand: Vec<HandCard>,
    pub deck_size: usize,
    pub discard_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fuzzy() -> EnemyDefinition {
        EnemyDefinition::new("Battle 1", "Fuzzy Beast", 15, "fuzzy.png")
    }

    #[test]
    fn test_combatant_clamps() {
        let mut c = Combatant::new(20);
        assert_eq!(c.damage(25), 20);
        assert_eq!(c.hp(), 0);
        assert!(c.is_defeated());

        assert_eq!(c.heal(50), 20);
        assert_eq!(c.hp(), 20);

        c.set_hp(-4);
        assert_eq!(c.hp(), 0);

        let c = Combatant::with_hp(30, 20);
        assert_eq!(c.hp(), 20);
    }

    #[test]
    fn test_combatant_heal_reports_gain() {
        let mut c = Combatant::with_hp(18, 20);
        assert_eq!(c.heal(3), 2);
        assert_eq!(c.hp(), 20);
    }

    #[test]
    fn test_new_battle() {
        let state = BattleState::new(fuzzy(), Combatant::new(20), Piles::new());

        assert_eq!(state.turn(), 1);
        assert_eq!(state.outcome(), Outcome::Ongoing);
        assert_eq!(state.enemy.hp(), 15);
        assert_eq!(state.enemy.max_hp(), 15);
        assert!(state.message().is_empty());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_outcome_is_sticky() {
        let mut state = BattleState::new(fuzzy(), Combatant::new(20), Piles::new());

        state.set_outcome(Outcome::Victory);
        state.set_outcome(Outcome::Ongoing);
        state.set_outcome(Outcome::Defeat);

        assert_eq!(state.outcome(), Outcome::Victory);
        assert!(state.is_over());
    }

    #[test]
    fn test_history_sequence() {
        let mut state = BattleState::new(fuzzy(), Combatant::new(20), Piles::new());

        state.record(Command::PlayCard(CardName::new("Strike")));
        state.advance_turn();
        state.record(Command::EndTurn);

        let history: Vec<_> = state.history().iter().cloned().collect();
        assert_eq!(history[0].turn, 1);
        assert_eq!(history[0].sequence, 0);
        assert_eq!(history[1].turn, 2);
        assert_eq!(history[1].sequence, 1);
    }

    #[test]
    fn test_snapshot() {
        let piles = Piles::from_parts(
            vec![CardName::new("Strike")],
            vec![CardName::new("Heal"), CardName::new("Big Strike")],
            Vec::new(),
        );
        let mut state = BattleState::new(fuzzy(), Combatant::with_hp(12, 20), piles);
        state.set_message("hello");

        let snapshot = state.snapshot(&CardLibrary::standard());

        assert_eq!(snapshot.turn, 1);
        assert_eq!(snapshot.player_hp, 12);
        assert_eq!(snapshot.enemy_name, "Fuzzy Beast");
        assert_eq!(snapshot.enemy_hp, 15);
        assert_eq!(snapshot.deck_size, 1);
        assert_eq!(snapshot.discard_size, 0);
        assert_eq!(snapshot.message, "hello");
        assert_eq!(snapshot.hand.len(), 2);
        assert_eq!(snapshot.hand[0].description, "Restore 3 HP.");
        assert_eq!(snapshot.hand[1].kind, "attack");
        assert_eq!(snapshot.hand[1].magnitude, 8);
    }

    #[test]
    fn test_snapshot_serialization() {
        let state = BattleState::new(fuzzy(), Combatant::new(20), Piles::new());
        let snapshot = state.snapshot(&CardLibrary::standard());

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"outcome\":\"ongoing\""));

        let back: BattleSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
