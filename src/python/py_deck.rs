//! Deck session bindings for Python.

use pyo3::prelude::*;

use crate::cards::{Card, Catalog};
use crate::core::{ConfigStore, DeckError, DisplayConfig, GameRng, MemoryStore, SAVED_CONFIG_KEY};
use crate::deck::Snapshot;
use crate::session::DeckSession;

fn value_error(err: DeckError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    #[new]
    fn new(name: String, card_type: String, image: String, expansion: String) -> Self {
        Self(Card::new(name, card_type, image, expansion))
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name.clone()
    }

    #[getter]
    fn card_type(&self) -> String {
        self.0.card_type.clone()
    }

    #[getter]
    fn image(&self) -> String {
        self.0.image.clone()
    }

    #[getter]
    fn expansion(&self) -> String {
        self.0.expansion.clone()
    }

    fn __repr__(&self) -> String {
        format!("Card({:?}, type={:?})", self.0.name, self.0.card_type)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for Snapshot, with display strings resolved.
#[pyclass(name = "Snapshot")]
#[derive(Clone)]
pub struct PySnapshot {
    snapshot: Snapshot,
    display: DisplayConfig,
}

#[pymethods]
impl PySnapshot {
    /// The face-up card, or `None` on the placeholder.
    #[getter]
    fn card(&self) -> Option<PyCard> {
        self.snapshot.face.card().cloned().map(PyCard)
    }

    #[getter]
    fn caption(&self) -> String {
        self.snapshot.face.caption(&self.display)
    }

    #[getter]
    fn image_path(&self) -> String {
        self.snapshot.face.image_path(&self.display)
    }

    /// "Card X of Y".
    #[getter]
    fn progress_label(&self) -> String {
        self.snapshot.progress_label()
    }

    /// Rounded percentage, 0 with no deck.
    #[getter]
    fn percent(&self) -> u32 {
        self.snapshot.progress.map_or(0, |p| p.rounded_percent())
    }

    fn __repr__(&self) -> String {
        format!(
            "Snapshot({:?}, {})",
            self.caption(),
            self.snapshot.progress_label()
        )
    }
}

/// Python wrapper for DeckSession, backed by an in-memory config store.
#[pyclass(name = "DeckSession")]
pub struct PyDeckSession {
    inner: DeckSession<MemoryStore>,
    display: DisplayConfig,
}

impl PyDeckSession {
    fn wrap(&self, snapshot: Snapshot) -> PySnapshot {
        PySnapshot {
            snapshot,
            display: self.display.clone(),
        }
    }
}

#[pymethods]
impl PyDeckSession {
    /// Open a session over a JSON catalog.
    ///
    /// `saved_config` is a previously saved selection (see `saved_config`).
    #[new]
    #[pyo3(signature = (catalog_json, seed=None, saved_config=None))]
    fn new(catalog_json: &str, seed: Option<u64>, saved_config: Option<String>) -> PyResult<Self> {
        let catalog = Catalog::from_json(catalog_json).map_err(value_error)?;
        let mut store = MemoryStore::new();
        if let Some(json) = saved_config {
            store.save(SAVED_CONFIG_KEY, json);
        }
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);

        Ok(Self {
            inner: DeckSession::open(catalog, store, rng),
            display: DisplayConfig::default(),
        })
    }

    /// All expansions in the catalog.
    fn expansions(&self) -> Vec<String> {
        self.inner.catalog().expansions().to_vec()
    }

    fn selected_expansions(&self) -> Vec<String> {
        self.inner.selection().expansions().to_vec()
    }

    /// Card types offered by the selected expansions.
    fn card_types(&self) -> Vec<String> {
        self.inner.card_types().to_vec()
    }

    fn selected_card_types(&self) -> Vec<String> {
        self.inner.selection().card_types().to_vec()
    }

    fn set_expansions(&mut self, expansions: Vec<String>) -> PyResult<()> {
        self.inner.set_expansions(&expansions).map_err(value_error)
    }

    fn set_card_types(&mut self, card_types: Vec<String>) -> PyResult<()> {
        self.inner.set_card_types(&card_types).map_err(value_error)
    }

    /// Build a new deck. Returns its length.
    fn generate(&mut self) -> PyResult<usize> {
        self.inner.generate().map_err(value_error)
    }

    fn next(&mut self) -> PySnapshot {
        let snapshot = self.inner.next();
        self.wrap(snapshot)
    }

    fn previous(&mut self) -> PySnapshot {
        let snapshot = self.inner.previous();
        self.wrap(snapshot)
    }

    /// Apply a card action by key (`shuffleAnywhere`, `shuffleTopN`,
    /// `replaceSameType`). Returns the notice texts.
    #[pyo3(signature = (kind, count=None))]
    fn apply(&mut self, kind: &str, count: Option<&str>) -> PyResult<Vec<String>> {
        let report = self
            .inner
            .apply_raw(kind, count.unwrap_or(""))
            .map_err(value_error)?;
        Ok(report.messages().collect())
    }

    fn snapshot(&self) -> PySnapshot {
        self.wrap(self.inner.snapshot())
    }

    /// The selection as stored JSON, if it has been saved.
    fn saved_config(&self) -> Option<String> {
        self.inner.store().load(SAVED_CONFIG_KEY)
    }

    fn __repr__(&self) -> String {
        format!(
            "DeckSession(cards={}, deck={})",
            self.inner.catalog().len(),
            self.inner.engine().len()
        )
    }
}
