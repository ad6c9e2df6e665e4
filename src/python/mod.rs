//! Python bindings for the deck randomizer.
//!
//! # Quick Start
//!
//! ```python
//! import deck_randomizer as dr
//!
//! session = dr.DeckSession(open("cards.json").read(), seed=42)
//! session.set_card_types(["Hero"])
//! session.generate()
//!
//! print(session.next().caption)
//! print(session.apply("shuffleTopN", "3"))
//! ```

use pyo3::prelude::*;

mod py_deck;

pub use py_deck::*;

/// deck_randomizer: build and step through shuffled card decks.
#[pymodule]
fn deck_randomizer(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PySnapshot>()?;
    m.add_class::<PyDeckSession>()?;

    Ok(())
}
