//! Dataset loading entry points.
//!
//! # Responsibility
//! - Parse the JSON dataset from a string, a file, or the bundled copy.
//! - Preserve the dataset's own key order while deserializing.
//! - Emit `catalog_load` logging events with duration and status.
//!
//! # Invariants
//! - Returned catalogs have passed full validation.
//! - The bundled catalog is parsed once per process and shared read-only.

use super::{Catalog, CatalogError, CatalogResult};
use crate::model::place::Place;
use log::{error, info};
use once_cell::sync::Lazy;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt::Formatter;
use std::path::Path;
use std::time::Instant;

const BUNDLED_DATASET: &str = include_str!("../../data/famous_places_india.json");

static BUNDLED_CATALOG: Lazy<Catalog> =
    Lazy::new(|| load_from_str(BUNDLED_DATASET).expect("bundled dataset is valid"));

/// Returns the bundled dataset, parsed and validated on first use.
///
/// The snapshot lives for the whole process and has no write path; callers
/// construct query engines over it directly.
pub fn bundled_catalog() -> &'static Catalog {
    &BUNDLED_CATALOG
}

/// Parses and validates a catalog from JSON text.
pub fn load_from_str(source: &str) -> CatalogResult<Catalog> {
    let started_at = Instant::now();

    match parse_entries(source).and_then(Catalog::from_entries) {
        Ok(catalog) => {
            info!(
                "event=catalog_load module=catalog status=ok states={} places={} duration_ms={}",
                catalog.state_count(),
                catalog.place_count(),
                started_at.elapsed().as_millis()
            );
            Ok(catalog)
        }
        Err(err) => {
            error!(
                "event=catalog_load module=catalog status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Reads and parses a catalog from a JSON file.
pub fn load_from_file(path: impl AsRef<Path>) -> CatalogResult<Catalog> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&source)
}

fn parse_entries(source: &str) -> CatalogResult<Vec<(String, Vec<Place>)>> {
    let RawEntries(entries) = serde_json::from_str(source)?;
    Ok(entries)
}

/// Dataset rows in document order.
///
/// `serde_json` maps reorder keys, which would break the catalog's
/// insertion-order contract, so the top-level object is consumed through a
/// map visitor instead.
struct RawEntries(Vec<(String, Vec<Place>)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of state names to place lists")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((state, places)) = access.next_entry::<String, Vec<Place>>()? {
                    entries.push((state, places));
                }
                Ok(RawEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::{load_from_str, parse_entries};

    #[test]
    fn parse_keeps_document_key_order() {
        let source = r#"{
            "West Bengal": [],
            "Assam": [],
            "Bihar": []
        }"#;

        let entries = parse_entries(source).unwrap();
        let states: Vec<&str> = entries.iter().map(|(state, _)| state.as_str()).collect();
        assert_eq!(states, vec!["West Bengal", "Assam", "Bihar"]);
    }

    #[test]
    fn top_level_array_is_rejected() {
        let err = load_from_str("[]").unwrap_err();
        assert!(err.to_string().contains("malformed dataset"));
    }
}
