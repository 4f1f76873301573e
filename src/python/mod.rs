//! Python bindings for the deck-battle engine.
//!
//! Lets a Python presentation layer drive a session while the rules stay
//! in Rust.
//!
//! # Quick Start
//!
//! ```python
//! import deck_battle as db
//!
//! session = db.Session(seed=42)
//! session.select_enemy("Battle 1")
//!
//! snap = session.snapshot()
//! name, kind, magnitude, description = snap.hand[0]
//! outcome = session.play_card(name)
//! if outcome == "ongoing":
//!     outcome = session.end_turn()
//! ```

use pyo3::prelude::*;

mod py_session;

pub use py_session::*;

/// deck_battle: card-battle rules for a Python UI.
#[pymodule]
fn deck_battle(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySession>()?;
    m.add_class::<PyBattleSnapshot>()?;
    Ok(())
}
