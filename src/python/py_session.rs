//! Session bindings for Python.

use pyo3::prelude::*;

use crate::cards::CardName;
use crate::core::{BattleError, BattleSnapshot, GameRng};
use crate::data::GameData;
use crate::session::Session;

fn to_py_err(err: BattleError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// Read-only battle view.
#[pyclass(name = "BattleSnapshot", get_all)]
#[derive(Clone, Debug)]
pub struct PyBattleSnapshot {
    pub turn: u32,
    pub outcome: String,
    pub message: String,
    pub player_hp: i64,
    pub player_max_hp: i64,
    pub enemy_name: String,
    pub enemy_image: String,
    pub enemy_hp: i64,
    pub enemy_max_hp: i64,
    /// (name, kind, magnitude, description) per card in hand.
    pub hand: Vec<(String, String, i64, String)>,
    pub deck_size: usize,
    pub discard_size: usize,
}

impl From<BattleSnapshot> for PyBattleSnapshot {
    fn from(s: BattleSnapshot) -> Self {
        Self {
            turn: s.turn,
            outcome: s.outcome.to_string(),
            message: s.message,
            player_hp: s.player_hp,
            player_max_hp: s.player_max_hp,
            enemy_name: s.enemy_name,
            enemy_image: s.enemy_image,
            enemy_hp: s.enemy_hp,
            enemy_max_hp: s.enemy_max_hp,
            hand: s
                .hand
                .into_iter()
                .map(|c| (c.name.to_string(), c.kind, c.magnitude, c.description))
                .collect(),
            deck_size: s.deck_size,
            discard_size: s.discard_size,
        }
    }
}

#[pymethods]
impl PyBattleSnapshot {
    fn __repr__(&self) -> String {
        format!(
            "BattleSnapshot(turn={}, outcome={}, player={}/{}, enemy={} {}/{})",
            self.turn,
            self.outcome,
            self.player_hp,
            self.player_max_hp,
            self.enemy_name,
            self.enemy_hp,
            self.enemy_max_hp
        )
    }
}

/// Python wrapper for Session.
///
/// Drives the map -> battle -> reward loop from a Python UI.
#[pyclass(name = "Session")]
pub struct PySession {
    inner: Session,
}

#[pymethods]
impl PySession {
    /// Create a session.
    ///
    /// # Arguments
    /// - seed: RNG seed; random when omitted
    /// - data_path: TOML game data file; stock data when omitted
    #[new]
    #[pyo3(signature = (seed = None, data_path = None))]
    fn new(seed: Option<u64>, data_path: Option<String>) -> PyResult<Self> {
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let data = match data_path {
            Some(path) => GameData::load(path).map_err(to_py_err)?,
            None => GameData::standard(),
        };
        let inner = Session::new(data, rng).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// "map", "battle" or "reward".
    #[getter]
    fn screen(&self) -> String {
        format!("{:?}", self.inner.screen()).to_lowercase()
    }

    /// Roster as (key, name, hp, image) tuples.
    fn enemies(&self) -> Vec<(String, String, i64, String)> {
        self.inner
            .roster()
            .iter()
            .map(|e| (e.key.clone(), e.name.clone(), e.max_hp, e.image.clone()))
            .collect()
    }

    #[getter]
    fn player_hp(&self) -> (i64, i64) {
        let player = self.inner.player();
        (player.hp(), player.max_hp())
    }

    #[getter]
    fn deck(&self) -> Vec<String> {
        self.inner.deck().iter().map(ToString::to_string).collect()
    }

    /// Reward options, empty unless on the reward screen.
    fn reward_options(&self) -> Vec<String> {
        self.inner
            .reward()
            .map(|r| r.options().iter().map(ToString::to_string).collect())
            .unwrap_or_default()
    }

    fn select_enemy(&mut self, key: &str) -> PyResult<()> {
        self.inner.select_enemy(key).map(|_| ()).map_err(to_py_err)
    }

    /// Play a card; returns the outcome ("ongoing", "victory", "defeat").
    fn play_card(&mut self, card: &str) -> PyResult<String> {
        self.inner
            .play_card(&CardName::new(card))
            .map(|o| o.to_string())
            .map_err(to_py_err)
    }

    /// End the turn; returns the outcome.
    fn end_turn(&mut self) -> PyResult<String> {
        self.inner
            .end_turn()
            .map(|o| o.to_string())
            .map_err(to_py_err)
    }

    fn choose_reward(&mut self, card: &str) -> PyResult<String> {
        self.inner
            .choose_reward(&CardName::new(card))
            .map(|c| c.to_string())
            .map_err(to_py_err)
    }

    fn return_to_map(&mut self) {
        self.inner.return_to_map();
    }

    fn snapshot(&self) -> Option<PyBattleSnapshot> {
        self.inner.snapshot().map(PyBattleSnapshot::from)
    }

    fn __repr__(&self) -> String {
        let player = self.inner.player();
        format!(
            "Session(screen={}, hp={}/{}, deck={})",
            self.screen(),
            player.hp(),
            player.max_hp(),
            self.inner.deck().len()
        )
    }
}
