//! Insertion-ordered catalog container.
//!
//! # Responsibility
//! - Hold the validated state-to-places entries in dataset order.
//! - Answer exact-key lookups without giving up ordered iteration.
//!
//! # Invariants
//! - `index` and `entries` stay consistent: every state key maps to the
//!   position of its entry, and no key appears twice.

use super::{CatalogError, CatalogResult};
use crate::model::place::Place;
use std::collections::HashMap;

/// The full state-to-places dataset, immutable after construction.
///
/// Iteration yields states in dataset insertion order and places in their
/// per-state sequence order; `get` is an exact, case-sensitive key lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(String, Vec<Place>)>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from ordered entries, enforcing dataset invariants.
    ///
    /// # Errors
    /// - [`CatalogError::BlankStateName`] for an empty state key.
    /// - [`CatalogError::DuplicateState`] when a key repeats.
    /// - [`CatalogError::InvalidPlace`] when a record fails validation.
    /// - [`CatalogError::DuplicatePlace`] when a name repeats inside one
    ///   state.
    pub fn from_entries(entries: Vec<(String, Vec<Place>)>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(entries.len());

        for (position, (state, places)) in entries.iter().enumerate() {
            if state.trim().is_empty() {
                return Err(CatalogError::BlankStateName { position });
            }
            if index.insert(state.clone(), position).is_some() {
                return Err(CatalogError::DuplicateState {
                    state: state.clone(),
                });
            }

            for (place_position, place) in places.iter().enumerate() {
                place.validate().map_err(|source| CatalogError::InvalidPlace {
                    state: state.clone(),
                    position: place_position,
                    source,
                })?;

                let duplicated = places[..place_position]
                    .iter()
                    .any(|earlier| earlier.name == place.name);
                if duplicated {
                    return Err(CatalogError::DuplicatePlace {
                        state: state.clone(),
                        name: place.name.clone(),
                    });
                }
            }
        }

        Ok(Self { entries, index })
    }

    /// Number of state entries.
    pub fn state_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of places across all states.
    pub fn place_count(&self) -> usize {
        self.entries.iter().map(|(_, places)| places.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(state, places)` entries in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Place])> {
        self.entries
            .iter()
            .map(|(state, places)| (state.as_str(), places.as_slice()))
    }

    /// Exact, case-sensitive state lookup.
    pub fn get(&self, state: &str) -> Option<&[Place]> {
        self.index
            .get(state)
            .map(|&position| self.entries[position].1.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::Catalog;
    use crate::model::place::Place;

    fn place(name: &str) -> Place {
        Place {
            name: name.to_string(),
            description: format!("about {name}"),
            image_url: format!("/images/{name}.jpg"),
            timings: "All day".to_string(),
            ticket_price: "Free".to_string(),
        }
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let catalog = Catalog::from_entries(vec![
            ("Zanskar".to_string(), vec![place("Monastery")]),
            ("Assam".to_string(), vec![place("Kaziranga")]),
        ])
        .unwrap();

        let states: Vec<&str> = catalog.iter().map(|(state, _)| state).collect();
        assert_eq!(states, vec!["Zanskar", "Assam"]);
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let catalog =
            Catalog::from_entries(vec![("Kerala".to_string(), vec![place("Alleppey")])]).unwrap();

        assert!(catalog.get("Kerala").is_some());
        assert!(catalog.get("kerala").is_none());
        assert!(catalog.get("Kerala ").is_none());
    }

    #[test]
    fn empty_place_list_is_a_valid_entry() {
        let catalog = Catalog::from_entries(vec![("Ladakh".to_string(), Vec::new())]).unwrap();
        assert_eq!(catalog.get("Ladakh"), Some(&[][..]));
        assert_eq!(catalog.place_count(), 0);
    }
}
