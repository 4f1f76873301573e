//! Battle engine: the rules of one fight.
//!
//! `BattleEngine` enforces a battle from start to a terminal outcome:
//! - `start_battle`: fresh piles, enemy at full HP, opening hand
//! - `draw_cards`: draw with discard reshuffle
//! - `play_card`: resolve one attack or heal card from hand
//! - `check_battle_end`: victory before defeat
//! - `end_turn`: refill the hand and let the enemy hit back
//! - `offer_reward`: sample reward cards after a victory
//!
//! The engine holds only rules and randomness. Each battle is an explicit
//! `BattleState` passed in by the caller, so independent battles can coexist.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::{CardKind, CardLibrary, CardName};
use crate::core::action::Command;
use crate::core::config::{BattleConfig, HpPolicy};
use crate::core::error::{BattleError, Result};
use crate::core::rng::{GameRng, GameRngState};
use crate::core::state::{BattleSnapshot, BattleState, Combatant, Outcome};
use crate::enemies::EnemyDefinition;
use crate::rewards::RewardOffer;
use crate::zones::{Piles, PlayerDeck};

const VICTORY_MESSAGE: &str = "You defeated the enemy!";
const DEFEAT_MESSAGE: &str = "You died!";

/// Rules engine for card battles.
///
/// ## Example
///
/// ```
/// use deck_battle::rules::BattleEngine;
/// use deck_battle::core::{Combatant, Outcome};
/// use deck_battle::enemies::EnemyRoster;
/// use deck_battle::zones::PlayerDeck;
///
/// let mut engine = BattleEngine::standard(42);
/// let roster = EnemyRoster::standard();
/// let enemy = roster.get("Battle 1").unwrap();
///
/// let mut battle = engine
///     .start_battle(enemy, Combatant::new(20), &PlayerDeck::standard())
///     .unwrap();
/// assert_eq!(battle.hand().len(), 3);
///
/// let card = battle.hand()[0].clone();
/// engine.play_card(&mut battle, &card).unwrap();
/// assert_eq!(engine.check_battle_end(&mut battle), Outcome::Ongoing);
/// ```
#[derive(Clone, Debug)]
pub struct BattleEngine {
    library: Arc<CardLibrary>,
    config: BattleConfig,
    shuffle_rng: GameRng,
    damage_rng: GameRng,
    reward_rng: GameRng,
}

/// Positions of the engine's three random streams.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineRngState {
    pub shuffle: GameRngState,
    pub damage: GameRngState,
    pub reward: GameRngState,
}

impl BattleEngine {
    /// Create an engine over a shared library with an injected RNG.
    ///
    /// Shuffles, enemy damage and rewards each get their own stream derived
    /// from the RNG's seed, so drawing more or fewer cards never changes the
    /// enemy's rolls or the rewards on offer.
    #[must_use]
    pub fn new(library: Arc<CardLibrary>, config: BattleConfig, rng: GameRng) -> Self {
        Self {
            library,
            config,
            shuffle_rng: rng.for_context("shuffle"),
            damage_rng: rng.for_context("damage"),
            reward_rng: rng.for_context("reward"),
        }
    }

    /// Stock library, default rules, seeded RNG.
    #[must_use]
    pub fn standard(seed: u64) -> Self {
        Self::new(
            Arc::new(CardLibrary::standard()),
            BattleConfig::default(),
            GameRng::new(seed),
        )
    }

    #[must_use]
    pub fn library(&self) -> &Arc<CardLibrary> {
        &self.library
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Current RNG positions, for reproducing a run.
    #[must_use]
    pub fn rng_state(&self) -> EngineRngState {
        EngineRngState {
            shuffle: self.shuffle_rng.state(),
            damage: self.damage_rng.state(),
            reward: self.reward_rng.state(),
        }
    }

    /// Rewind or fast-forward the random streams to a saved position.
    pub fn restore_rng(&mut self, state: &EngineRngState) {
        self.shuffle_rng = GameRng::from_state(&state.shuffle);
        self.damage_rng = GameRng::from_state(&state.damage);
        self.reward_rng = GameRng::from_state(&state.reward);
    }

    /// Start a battle, drawing `config.starting_hand_size` cards.
    pub fn start_battle(
        &mut self,
        enemy: &EnemyDefinition,
        player: Combatant,
        deck: &PlayerDeck,
    ) -> Result<BattleState> {
        let hand_size = self.config.starting_hand_size;
        self.start_battle_with_hand_size(enemy, player, deck, hand_size)
    }

    /// Start a battle with an explicit opening hand size.
    ///
    /// The persistent deck is copied into the draw pile; hand and discard
    /// start empty and the enemy starts at full HP.
    pub fn start_battle_with_hand_size(
        &mut self,
        enemy: &EnemyDefinition,
        mut player: Combatant,
        deck: &PlayerDeck,
        hand_size: usize,
    ) -> Result<BattleState> {
        if enemy.max_hp <= 0 {
            return Err(BattleError::Config(format!(
                "enemy {} has non-positive HP {}",
                enemy.key, enemy.max_hp
            )));
        }
        self.library.validate(deck)?;

        match self.config.hp_policy {
            HpPolicy::Reset => player.restore(),
            HpPolicy::CarryOver if player.is_defeated() => player.restore(),
            HpPolicy::CarryOver => {}
        }

        let mut piles = Piles::from_deck(deck.iter().cloned());
        if self.config.shuffle_on_start {
            piles.shuffle_deck(&mut self.shuffle_rng);
        }

        let mut state = BattleState::new(enemy.clone(), player, piles);
        self.draw_cards(&mut state, hand_size);

        info!(
            enemy = %enemy.name,
            enemy_hp = enemy.max_hp,
            player_hp = state.player.hp(),
            deck_size = deck.len(),
            "battle started"
        );
        Ok(state)
    }

    /// Draw up to `n` cards into the hand, reshuffling the discard as needed.
    ///
    /// Returns the number actually drawn; running out of cards is not an error.
    pub fn draw_cards(&mut self, state: &mut BattleState, n: usize) -> usize {
        let drawn = state.piles.draw(n, &mut self.shuffle_rng);
        if drawn < n {
            debug!(requested = n, drawn, "deck and discard exhausted");
        }
        drawn
    }

    /// Resolve one card from hand.
    ///
    /// Attacks lower enemy HP, heals raise player HP up to max. The card moves
    /// from hand to discard. Does not check for the end of the battle.
    pub fn play_card(&mut self, state: &mut BattleState, card: &CardName) -> Result<CardKind> {
        let command = Command::PlayCard(card.clone());
        if state.is_over() {
            warn!(card = %card, outcome = %state.outcome(), "card played after battle end");
            return Err(BattleError::invalid_state(
                command.verb(),
                format!("battle is over ({})", state.outcome()),
            ));
        }
        if !state.piles.in_hand(card) {
            warn!(card = %card, "card not in hand");
            return Err(BattleError::InvalidCard(card.clone()));
        }
        let kind = self.library.lookup(card)?.kind;

        let message = match kind {
            CardKind::Attack { damage } => {
                state.enemy.damage(damage);
                format!("You played {card}, dealt {damage} damage!")
            }
            CardKind::Heal { amount } => {
                state.player.heal(amount);
                format!("You played {card}, healed {amount} HP!")
            }
        };
        state.piles.discard_from_hand(card);
        state.set_message(message);
        state.record(command);

        debug!(
            card = %card,
            kind = kind.label(),
            magnitude = kind.magnitude(),
            enemy_hp = state.enemy.hp(),
            player_hp = state.player.hp(),
            "card played"
        );
        Ok(kind)
    }

    /// Settle the outcome: enemy down wins, checked before player down.
    ///
    /// A battle that already ended keeps its outcome.
    pub fn check_battle_end(&self, state: &mut BattleState) -> Outcome {
        if state.is_over() {
            return state.outcome();
        }

        let outcome = if state.enemy.is_defeated() {
            state.set_message(VICTORY_MESSAGE);
            Outcome::Victory
        } else if state.player.is_defeated() {
            state.set_message(DEFEAT_MESSAGE);
            Outcome::Defeat
        } else {
            Outcome::Ongoing
        };

        if outcome.is_terminal() {
            info!(enemy = %state.enemy_info.name, turn = state.turn(), %outcome, "battle ended");
        }
        state.set_outcome(outcome);
        outcome
    }

    /// End the turn: advance the counter, draw, take the enemy's hit, check
    /// for the end of the battle.
    ///
    /// Returns the damage the enemy rolled.
    pub fn end_turn(&mut self, state: &mut BattleState) -> Result<i64> {
        if state.is_over() {
            warn!(outcome = %state.outcome(), "end turn after battle end");
            return Err(BattleError::invalid_state(
                Command::EndTurn.verb(),
                format!("battle is over ({})", state.outcome()),
            ));
        }

        state.record(Command::EndTurn);
        state.advance_turn();
        self.draw_cards(state, self.config.draw_per_turn);

        let damage = self
            .damage_rng
            .gen_range_inclusive(self.config.enemy_damage_min, self.config.enemy_damage_max);
        state.player.damage(damage);
        state.append_message(&format!(" Enemy hits for {damage} damage!"));

        debug!(turn = state.turn(), damage, player_hp = state.player.hp(), "enemy attacked");
        self.check_battle_end(state);
        Ok(damage)
    }

    /// Sample reward options for a won battle.
    pub fn offer_reward(&mut self, state: &BattleState) -> Result<RewardOffer> {
        if state.outcome() != Outcome::Victory {
            return Err(BattleError::invalid_state(
                "choose a reward",
                format!("battle is not won ({})", state.outcome()),
            ));
        }
        Ok(RewardOffer::sample(
            &self.library,
            self.config.reward_options,
            &mut self.reward_rng,
        ))
    }

    /// Read-only view of a battle for rendering.
    #[must_use]
    pub fn snapshot(&self, state: &BattleState) -> BattleSnapshot {
        state.snapshot(&self.library)
    }
}
