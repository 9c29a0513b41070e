// crates/streetfind-core/src/session.rs

//! # Search session
//!
//! Presentation-side state for the search screen (`cities`, `loading`,
//! `error`, map visibility) and the sequencing of overlapping searches.
//!
//! Every invocation gets a [`Ticket`] from a monotonically increasing
//! counter. When a search completes, its result is applied only if no later
//! search has started in the meantime; otherwise it is dropped. This makes
//! "last started wins" instead of "last to resolve wins".

use crate::error::{Result, SearchError};
use crate::geocoder::Geocoder;
use crate::location::LocationProvider;
use crate::model::{CityResult, SearchAction, SearchOutcome};
use crate::pipeline::StreetSearch;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Sequence number of one search invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// What the screen shows for the last failed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFailure {
    /// One of `invalid_input`, `no_match`, `search_failed`.
    pub kind: &'static str,
    pub message: String,
}

impl From<&SearchError> for SearchFailure {
    fn from(err: &SearchError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Snapshot of the screen state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub cities: Vec<CityResult>,
    pub loading: bool,
    pub error: Option<SearchFailure>,
    pub map_visible: bool,
}

impl SearchState {
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }
}

/// Result of [`SearchSession::run`].
#[derive(Debug)]
pub struct RunReport {
    /// `false` when a later search started before this one finished.
    pub applied: bool,
    pub result: Result<SearchOutcome>,
}

#[derive(Debug, Default)]
struct Inner {
    latest: u64,
    state: SearchState,
}

/// Owns the screen state. Safe to share between threads.
#[derive(Debug, Default)]
pub struct SearchSession {
    inner: Mutex<Inner>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // State is overwritten wholesale, so a poisoned guard is still usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> SearchState {
        self.lock().state.clone()
    }

    /// Starts an invocation: supersedes any in-flight one, clears results
    /// and errors, raises `loading`.
    pub fn begin(&self) -> Ticket {
        let mut inner = self.lock();
        inner.latest += 1;
        inner.state = SearchState {
            loading: true,
            ..SearchState::default()
        };
        Ticket(inner.latest)
    }

    /// Applies a finished invocation. Returns `false` (and changes nothing)
    /// if `ticket` has been superseded.
    pub fn finish(&self, ticket: Ticket, result: &Result<SearchOutcome>) -> bool {
        let mut inner = self.lock();
        if ticket.0 != inner.latest {
            tracing::debug!(
                ticket = ticket.0,
                latest = inner.latest,
                "discarding superseded search result"
            );
            return false;
        }

        inner.state = match result {
            Ok(outcome) => SearchState {
                cities: outcome.cities.clone(),
                loading: false,
                error: None,
                map_visible: outcome.map_ready(),
            },
            Err(err) => SearchState {
                error: Some(SearchFailure::from(err)),
                ..SearchState::default()
            },
        };
        true
    }

    /// Rejects empty input without starting an invocation. In-flight
    /// searches keep their ticket.
    fn reject_input(&self, err: &SearchError) {
        let mut inner = self.lock();
        inner.state.error = Some(SearchFailure::from(err));
    }

    /// One screen trigger: validate, begin, run the pipeline, finish.
    pub fn run<G, L>(
        &self,
        pipeline: &StreetSearch<G, L>,
        street_name: &str,
        action: SearchAction,
    ) -> RunReport
    where
        G: Geocoder,
        L: LocationProvider,
    {
        if street_name.trim().is_empty() {
            let err = SearchError::InvalidInput;
            self.reject_input(&err);
            return RunReport {
                applied: true,
                result: Err(err),
            };
        }

        let ticket = self.begin();
        let result = pipeline.search(street_name, action.options());
        let applied = self.finish(ticket, &result);
        RunReport { applied, result }
    }
}
