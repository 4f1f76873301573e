//! Session flow around battles: map, battle, reward, back to map.
//!
//! A `Session` owns what persists between battles (the player's deck and
//! HP) and at most one running battle. It is an ordinary value; several
//! sessions can live side by side.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cards::CardName;
use crate::core::action::Command;
use crate::core::error::{BattleError, Result};
use crate::core::rng::GameRng;
use crate::core::state::{BattleSnapshot, BattleState, Combatant, Outcome};
use crate::data::GameData;
use crate::enemies::EnemyRoster;
use crate::rewards::RewardOffer;
use crate::rules::BattleEngine;
use crate::zones::PlayerDeck;

/// Which screen the presentation layer should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Choosing an enemy.
    Map,
    /// Fighting, or looking at a lost battle.
    Battle,
    /// Battle won, reward pending.
    Reward,
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Screen::Map => write!(f, "on the map"),
            Screen::Battle => write!(f, "in battle"),
            Screen::Reward => write!(f, "choosing a reward"),
        }
    }
}

/// One player's run through the roster.
#[derive(Clone, Debug)]
pub struct Session {
    engine: BattleEngine,
    roster: EnemyRoster,
    deck: PlayerDeck,
    player: Combatant,
    battle: Option<BattleState>,
    reward: Option<RewardOffer>,
}

impl Session {
    /// Create a session from game data with an injected RNG.
    pub fn new(data: GameData, rng: GameRng) -> Result<Self> {
        data.config.validate()?;
        data.library.validate(&data.starting_deck)?;

        let player = Combatant::new(data.config.player_max_hp);
        Ok(Self {
            engine: BattleEngine::new(Arc::new(data.library), data.config, rng),
            roster: data.roster,
            deck: data.starting_deck,
            player,
            battle: None,
            reward: None,
        })
    }

    /// Stock data, seeded RNG.
    #[must_use]
    pub fn standard(seed: u64) -> Self {
        Self::new(GameData::standard(), GameRng::new(seed)).expect("stock game data is valid")
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        match (&self.battle, &self.reward) {
            (_, Some(_)) => Screen::Reward,
            (Some(_), None) => Screen::Battle,
            (None, None) => Screen::Map,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &BattleEngine {
        &self.engine
    }

    #[must_use]
    pub fn roster(&self) -> &EnemyRoster {
        &self.roster
    }

    /// The persistent deck.
    #[must_use]
    pub fn deck(&self) -> &PlayerDeck {
        &self.deck
    }

    /// Player HP as of the last command.
    #[must_use]
    pub fn player(&self) -> Combatant {
        self.player
    }

    #[must_use]
    pub fn battle(&self) -> Option<&BattleState> {
        self.battle.as_ref()
    }

    #[must_use]
    pub fn reward(&self) -> Option<&RewardOffer> {
        self.reward.as_ref()
    }

    /// Read-only view of the current battle, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<BattleSnapshot> {
        self.battle.as_ref().map(|b| self.engine.snapshot(b))
    }

    /// Apply any inbound command.
    pub fn apply(&mut self, command: Command) -> Result<Screen> {
        match command {
            Command::SelectEnemy(key) => self.select_enemy(&key).map(|_| ()),
            Command::PlayCard(card) => self.play_card(&card).map(|_| ()),
            Command::EndTurn => self.end_turn().map(|_| ()),
            Command::ChooseReward(card) => self.choose_reward(&card).map(|_| ()),
            Command::ReturnToMap => {
                self.return_to_map();
                Ok(())
            }
        }?;
        Ok(self.screen())
    }

    /// Start a battle against a roster entry. Only allowed from the map.
    pub fn select_enemy(&mut self, key: &str) -> Result<&BattleState> {
        let command = Command::SelectEnemy(key.to_string());
        self.require_screen(Screen::Map, &command)?;

        let enemy = self.roster.lookup(key)?;
        let mut battle = self.engine.start_battle(enemy, self.player, &self.deck)?;
        battle.record(command);
        self.player = battle.player;
        let battle = self.battle.insert(battle);
        Ok(&*battle)
    }

    /// Play a card, then settle the battle.
    pub fn play_card(&mut self, card: &CardName) -> Result<Outcome> {
        let command = Command::PlayCard(card.clone());
        self.require_screen(Screen::Battle, &command)?;
        let Some(battle) = self.battle.as_mut() else {
            return Err(BattleError::invalid_state(command.verb(), Screen::Map));
        };

        self.engine.play_card(battle, card)?;
        self.engine.check_battle_end(battle);
        self.after_command()
    }

    /// End the turn; the enemy hits back.
    pub fn end_turn(&mut self) -> Result<Outcome> {
        let command = Command::EndTurn;
        self.require_screen(Screen::Battle, &command)?;
        let Some(battle) = self.battle.as_mut() else {
            return Err(BattleError::invalid_state(command.verb(), Screen::Map));
        };

        self.engine.end_turn(battle)?;
        self.after_command()
    }

    /// Take one of the offered reward cards and go back to the map.
    pub fn choose_reward(&mut self, card: &CardName) -> Result<CardName> {
        let command = Command::ChooseReward(card.clone());
        let offer = match self.reward.take() {
            Some(offer) => offer,
            None => return Err(self.rejected(&command)),
        };

        match offer.choose(card, &mut self.deck) {
            Ok(picked) => {
                self.battle = None;
                Ok(picked)
            }
            Err((offer, err)) => {
                warn!(card = %card, "reward not on offer");
                self.reward = Some(offer);
                Err(err)
            }
        }
    }

    /// Leave the current battle (won, lost or abandoned) without a reward.
    pub fn return_to_map(&mut self) {
        if let Some(battle) = self.battle.take() {
            self.player = battle.player;
            info!(enemy = %battle.enemy_info.name, outcome = %battle.outcome(), "returned to map");
        }
        self.reward = None;
    }

    fn require_screen(&self, expected: Screen, command: &Command) -> Result<()> {
        if self.screen() == expected {
            Ok(())
        } else {
            Err(self.rejected(command))
        }
    }

    fn rejected(&self, command: &Command) -> BattleError {
        warn!(%command, screen = %self.screen(), "command rejected");
        BattleError::invalid_state(command.verb(), self.screen())
    }

    /// Sync player HP and open the reward screen after a win.
    fn after_command(&mut self) -> Result<Outcome> {
        let Some(battle) = self.battle.as_ref() else {
            return Ok(Outcome::Ongoing);
        };
        let outcome = battle.outcome();
        self.player = battle.player;

        if outcome == Outcome::Victory && self.reward.is_none() {
            let offer = self.engine.offer_reward(battle)?;
            self.reward = Some(offer);
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_map() {
        let session = Session::standard(1);
        assert_eq!(session.screen(), Screen::Map);
        assert_eq!(session.player().hp(), 20);
        assert_eq!(session.deck().len(), 5);
        assert!(session.snapshot().is_none());
    }

    #[test]
    fn test_standard_matches_stock_data() {
        let mut stock = Session::new(GameData::standard(), GameRng::new(12)).unwrap();
        let mut standard = Session::standard(12);

        stock.select_enemy("Battle 3").unwrap();
        standard.select_enemy("Battle 3").unwrap();
        stock.end_turn().unwrap();
        standard.end_turn().unwrap();

        assert_eq!(stock.snapshot(), standard.snapshot());
        assert_eq!(stock.deck(), standard.deck());
    }

    #[test]
    fn test_battle_history_records_battle_commands() {
        let mut session = Session::standard(6);
        session.select_enemy("Battle 1").unwrap();
        let card = session.battle().unwrap().hand()[0].clone();
        session.play_card(&card).unwrap();
        session.end_turn().unwrap();

        let commands: Vec<Command> = session
            .battle()
            .unwrap()
            .history()
            .iter()
            .map(|r| r.command.clone())
            .collect();
        assert_eq!(
            commands,
            vec![
                Command::SelectEnemy("Battle 1".into()),
                Command::PlayCard(card),
                Command::EndTurn,
            ]
        );
    }

    #[test]
    fn test_select_enemy() {
        let mut session = Session::standard(1);
        let battle = session.select_enemy("Battle 2").unwrap();

        assert_eq!(battle.enemy_info.name, "Snail Slime");
        assert_eq!(battle.enemy.hp(), 20);
        assert_eq!(battle.hand().len(), 3);
        assert_eq!(session.screen(), Screen::Battle);
    }

    #[test]
    fn test_select_unknown_enemy() {
        let mut session = Session::standard(1);
        let err = session.select_enemy("Battle 7").unwrap_err();

        assert!(matches!(err, BattleError::UnknownEnemy(_)));
        assert_eq!(session.screen(), Screen::Map);
    }

    #[test]
    fn test_commands_need_the_right_screen() {
        let mut session = Session::standard(1);

        assert!(matches!(session.end_turn(), Err(BattleError::InvalidState { .. })));
        assert!(matches!(
            session.play_card(&CardName::new("Strike")),
            Err(BattleError::InvalidState { .. })
        ));
        assert!(matches!(
            session.choose_reward(&CardName::new("Strike")),
            Err(BattleError::InvalidState { .. })
        ));

        session.select_enemy("Battle 1").unwrap();
        assert!(matches!(
            session.select_enemy("Battle 2"),
            Err(BattleError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_return_to_map_keeps_hp() {
        let mut session = Session::standard(3);
        session.select_enemy("Battle 1").unwrap();
        session.end_turn().unwrap();
        let hp = session.battle().unwrap().player.hp();

        session.return_to_map();

        assert_eq!(session.screen(), Screen::Map);
        assert_eq!(session.player().hp(), hp);
        assert!(hp < 20);
    }

    #[test]
    fn test_apply_dispatch() {
        let mut session = Session::standard(5);

        let screen = session.apply(Command::SelectEnemy("Battle 1".into())).unwrap();
        assert_eq!(screen, Screen::Battle);

        let screen = session.apply(Command::ReturnToMap).unwrap();
        assert_eq!(screen, Screen::Map);
    }
}
