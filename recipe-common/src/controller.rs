//! Session controller
//!
//! Owns everything a page session needs: the recipe source, the record
//! set (written once by the initial load), and the display container.
//!
//! ```text
//! Loading --load ok--> Ready <--input (filter + render)--+
//!    |                   |_____________________________|
//!    +--load failed--> Error (terminal, search disabled)
//! ```

use tracing::{debug, error, info, warn};

use crate::filter::filter_recipes;
use crate::loader::{FetchError, RecipeSource};
use crate::model::Recipe;
use crate::render::{Notice, RecipeList};

/// Controller lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the initial load
    Loading,
    /// Records held; input events filter and re-render
    Ready,
    /// Initial load failed; input is ignored for the rest of the session
    Error,
}

/// Recipe search session
pub struct Controller<S> {
    source: S,
    endpoint: String,
    phase: Phase,
    records: Vec<Recipe>,
    view: RecipeList,
    listening: bool,
    last_error: Option<FetchError>,
}

impl<S: RecipeSource> Controller<S> {
    /// Create a session that will load from `endpoint` once the page is ready
    pub fn new(source: S, endpoint: impl Into<String>) -> Self {
        let mut view = RecipeList::new();
        view.show_notice(Notice::Loading);

        Self {
            source,
            endpoint: endpoint.into(),
            phase: Phase::Loading,
            records: Vec::new(),
            view,
            listening: false,
            last_error: None,
        }
    }

    /// Run the initial load
    ///
    /// Only the first call does anything; the record set is loaded exactly
    /// once per session.
    pub async fn on_page_ready(&mut self) {
        if self.phase != Phase::Loading {
            warn!(phase = ?self.phase, "Page ready signalled twice, ignoring");
            return;
        }

        debug!(endpoint = %self.endpoint, "Fetching recipes");
        match self.source.fetch_recipes(&self.endpoint).await {
            Ok(records) => {
                info!(count = records.len(), "Recipes loaded");
                self.records = records;
                self.phase = Phase::Ready;
                self.view.render(&self.records);
                self.listening = true;
            }
            Err(e) => {
                error!(error = %e, "Error fetching recipes");
                self.phase = Phase::Error;
                self.view.show_notice(Notice::LoadFailed);
                self.last_error = Some(e);
            }
        }
    }

    /// Handle a change of the search input
    ///
    /// Returns `false` when search is not attached (still loading, or the
    /// load failed) and the event was dropped.
    pub fn on_input(&mut self, value: &str) -> bool {
        if !self.listening {
            debug!(phase = ?self.phase, "Search not attached, ignoring input");
            return false;
        }

        let matches = filter_recipes(&self.records, value);
        debug!(query = %value, matches = matches.len(), "Filtered recipes");
        self.view.render(matches);

        true
    }
}

impl<S> Controller<S> {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The full record set held for the session
    pub fn records(&self) -> &[Recipe] {
        &self.records
    }

    pub fn view(&self) -> &RecipeList {
        &self.view
    }

    /// Whether input events are being handled
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
