//! The catalog query engine.
//!
//! # Responsibility
//! - Answer autocomplete, search and exact-lookup reads over one immutable
//!   catalog snapshot.
//! - Stay pure: no interior state, no side effects, deterministic results.
//!
//! # Invariants
//! - Results preserve catalog iteration order; there is no relevance
//!   ranking.
//! - `suggest` never returns more than [`SUGGESTION_LIMIT`] entries.
//! - `search` filters at state-entry granularity: a retained entry always
//!   carries the state's full place list, even when only one place name
//!   matched. Callers rely on this exact inclusion policy.
//! - Lookups are exact and case-sensitive on both keys; matching is
//!   case-insensitive and unanchored.

use crate::catalog::Catalog;
use crate::model::place::Place;

/// Autocomplete suggestions are cut off after this many matches.
pub const SUGGESTION_LIMIT: usize = 5;

/// One autocomplete hit: a place together with its owning state name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion<'c> {
    pub place: &'c Place,
    pub state: &'c str,
}

/// One search hit: a state entry with its full place list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateMatch<'c> {
    pub state: &'c str,
    pub places: &'c [Place],
}

/// Pure read API over an injected read-only catalog.
///
/// The engine borrows the catalog instead of owning it so test fixtures and
/// the process-wide bundled snapshot construct it the same way. It is `Copy`;
/// every UI event handler can take its own throwaway view.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'c> {
    catalog: &'c Catalog,
}

impl<'c> QueryEngine<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// Returns autocomplete suggestions for `query`.
    ///
    /// Flattens the catalog into `(place, owning state)` pairs in catalog
    /// order, retains pairs whose place name or owning state name contains
    /// `query` case-insensitively, and truncates to the first
    /// [`SUGGESTION_LIMIT`] matches. The empty query yields no suggestions.
    ///
    /// Keyboard-selection state belongs to the caller, not the engine.
    pub fn suggest(&self, query: &str) -> Vec<Suggestion<'c>> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let mut suggestions = Vec::new();

        'states: for (state, places) in self.catalog.iter() {
            for place in places {
                if contains_ci(&place.name, &needle) || contains_ci(state, &needle) {
                    suggestions.push(Suggestion { place, state });
                    if suggestions.len() == SUGGESTION_LIMIT {
                        break 'states;
                    }
                }
            }
        }

        suggestions
    }

    /// Returns the state entries matching `query`.
    ///
    /// A state entry is retained when its name contains `query`
    /// case-insensitively, or when at least one of its places' names does.
    /// Either way the entry carries the state's full place list; matching is
    /// deliberately not narrowed to the matching places. Blank queries yield
    /// the empty result; callers wanting "everything" browse via
    /// [`QueryEngine::entries`].
    pub fn search(&self, query: &str) -> Vec<StateMatch<'c>> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        self.catalog
            .iter()
            .filter(|(state, places)| {
                contains_ci(state, &needle)
                    || places.iter().any(|place| contains_ci(&place.name, &needle))
            })
            .map(|(state, places)| StateMatch { state, places })
            .collect()
    }

    /// Exact-match place lookup by the `(state, name)` navigation identity.
    ///
    /// Both keys are compared case-sensitively against the catalog verbatim;
    /// `None` is the not-found signal callers render as a view.
    pub fn get_place(&self, state: &str, name: &str) -> Option<&'c Place> {
        self.catalog
            .get(state)?
            .iter()
            .find(|place| place.name == name)
    }

    /// Exact-match state lookup, `None` when the key is absent.
    pub fn state_places(&self, state: &str) -> Option<&'c [Place]> {
        self.catalog.get(state)
    }

    /// All state entries in catalog order (the destinations listing).
    pub fn entries(&self) -> impl Iterator<Item = StateMatch<'c>> + '_ {
        self.catalog
            .iter()
            .map(|(state, places)| StateMatch { state, places })
    }

    /// The first `count` state entries (the home page's featured strip).
    pub fn featured(&self, count: usize) -> Vec<StateMatch<'c>> {
        self.entries().take(count).collect()
    }

    pub fn state_count(&self) -> usize {
        self.catalog.state_count()
    }

    pub fn place_count(&self) -> usize {
        self.catalog.place_count()
    }
}

/// Unanchored, case-insensitive containment.
///
/// Lowercases the haystack per call; catalogs are small enough that an
/// auxiliary lowercase index would buy nothing.
fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
