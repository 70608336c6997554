//! Catalog bootstrap: dataset parsing, validation and the bundled snapshot.
//!
//! # Responsibility
//! - Build the immutable state-to-places catalog from the JSON dataset.
//! - Enforce every dataset invariant once, at load time, with descriptive
//!   errors instead of letting missing or duplicated data surface downstream.
//!
//! # Invariants
//! - State iteration order is the dataset's insertion order; place order is
//!   the per-state sequence order.
//! - The catalog is never mutated after construction; all queries are pure
//!   reads.
//! - A state with an empty place list is valid and renders as a zero-result
//!   state, not an error.

use crate::model::place::PlaceValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

mod load;
mod map;

pub use load::{bundled_catalog, load_from_file, load_from_str};
pub use map::Catalog;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Load-time catalog error.
///
/// Every variant names the offending state/place so a broken dataset is
/// diagnosable from the message alone.
#[derive(Debug)]
pub enum CatalogError {
    /// Dataset file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// Dataset is not the expected JSON shape.
    Parse(serde_json::Error),
    /// A state key is empty or whitespace-only.
    BlankStateName { position: usize },
    /// The same state key appears twice.
    DuplicateState { state: String },
    /// A place record failed its own validation.
    InvalidPlace {
        state: String,
        position: usize,
        source: PlaceValidationError,
    },
    /// Two places inside one state share a name, breaking `(state, name)`
    /// identity.
    DuplicatePlace { state: String, name: String },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read dataset `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "malformed dataset: {err}"),
            Self::BlankStateName { position } => {
                write!(f, "state key at position {position} is blank")
            }
            Self::DuplicateState { state } => {
                write!(f, "duplicate state key `{state}`")
            }
            Self::InvalidPlace {
                state,
                position,
                source,
            } => write!(
                f,
                "invalid place at position {position} in `{state}`: {source}"
            ),
            Self::DuplicatePlace { state, name } => {
                write!(f, "duplicate place `{name}` in `{state}`")
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::InvalidPlace { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}
