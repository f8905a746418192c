//! Catalog Loading and Validation
//!
//! The catalog is static seed data: a JSON array of plant records embedded
//! in the binary (overridable from a file for deployments that ship their
//! own data). Records are deserialized once at startup, checked against the
//! schema invariants, and immutable afterwards.
//!
//! This is the only place invariants are enforced; the search and embedding
//! functions assume valid records.

use crate::plant::Plant;
use crate::search::search_plants;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;
use thiserror::Error;

/// Seed data compiled into the binary
const EMBEDDED_SEED: &str = include_str!("../data/plants.json");

/// Catalog validation and loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate plant id: {0}")]
    DuplicateId(String),

    #[error("duplicate plant slug: {0}")]
    DuplicateSlug(String),

    #[error("plant {slug}: colors must not be empty")]
    EmptyColors { slug: String },

    #[error("plant {slug}: hardiness_zones must not be empty")]
    EmptyZones { slug: String },

    #[error("plant {slug}: zone H{zone} outside H1-H8")]
    ZoneOutOfRange { slug: String, zone: u8 },

    #[error("plant {slug}: month {month} outside 1-12")]
    MonthOutOfRange { slug: String, month: u8 },

    #[error("plant {slug}: height range {min}-{max} cm is invalid")]
    HeightRange { slug: String, min: u16, max: u16 },
}

/// The static, ordered collection of plant records plus a slug lookup table.
pub struct Catalog {
    plants: Vec<Plant>,
    slug_index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Load the seed catalog compiled into the binary.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_SEED)
    }

    /// Load a catalog from a JSON file (deployment override).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Parse and validate a JSON array of plant records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let plants: Vec<Plant> = serde_json::from_str(json)?;
        validate(&plants)?;

        let slug_index = plants
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.slug.clone(), idx))
            .collect();

        Ok(Self { plants, slug_index })
    }

    /// All records in catalog order.
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// O(1) lookup by slug.
    pub fn by_slug(&self, slug: &str) -> Option<&Plant> {
        self.slug_index.get(slug).map(|&idx| &self.plants[idx])
    }

    /// Filter the catalog by query and zone, preserving catalog order.
    pub fn search(&self, query: &str, zone: Option<u8>) -> Vec<&Plant> {
        search_plants(&self.plants, query, zone)
    }
}

/// Check every schema invariant the search path relies on.
fn validate(plants: &[Plant]) -> Result<(), CatalogError> {
    let mut ids = FxHashSet::default();
    let mut slugs = FxHashSet::default();

    for plant in plants {
        if !ids.insert(plant.id.as_str()) {
            return Err(CatalogError::DuplicateId(plant.id.clone()));
        }
        if !slugs.insert(plant.slug.as_str()) {
            return Err(CatalogError::DuplicateSlug(plant.slug.clone()));
        }

        if plant.colors.is_empty() {
            return Err(CatalogError::EmptyColors {
                slug: plant.slug.clone(),
            });
        }
        if plant.hardiness_zones.is_empty() {
            return Err(CatalogError::EmptyZones {
                slug: plant.slug.clone(),
            });
        }
        for &zone in &plant.hardiness_zones {
            if !(1..=8).contains(&zone) {
                return Err(CatalogError::ZoneOutOfRange {
                    slug: plant.slug.clone(),
                    zone,
                });
            }
        }

        let month_sets = [
            Some(&plant.bloom_months),
            plant.sow_months_indoor.as_ref(),
            plant.sow_months_outdoor.as_ref(),
        ];
        for months in month_sets.into_iter().flatten() {
            for &month in months {
                if !(1..=12).contains(&month) {
                    return Err(CatalogError::MonthOutOfRange {
                        slug: plant.slug.clone(),
                        month,
                    });
                }
            }
        }

        if plant.height_min_cm == 0 || plant.height_min_cm > plant.height_max_cm {
            return Err(CatalogError::HeightRange {
                slug: plant.slug.clone(),
                min: plant.height_min_cm,
                max: plant.height_max_cm,
            });
        }
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_seed_loads_and_validates() {
        let catalog = Catalog::load_embedded().expect("embedded seed must be valid");
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_slug_lookup() {
        let catalog = Catalog::load_embedded().unwrap();
        let lavendel = catalog.by_slug("lavendel").expect("seed contains lavendel");
        assert_eq!(lavendel.name_latin, "Lavandula angustifolia");
        assert!(catalog.by_slug("no-such-slug").is_none());
    }

    #[test]
    fn test_search_delegates_with_catalog_order() {
        let catalog = Catalog::load_embedded().unwrap();
        let all = catalog.search("", None);
        assert_eq!(all.len(), catalog.len());
        let expected: Vec<&str> = catalog.plants().iter().map(|p| p.slug.as_str()).collect();
        let got: Vec<&str> = all.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(got, expected);
    }

    fn seed_record(overrides: &str) -> String {
        // Minimal valid record; `overrides` is spliced in last so tests can
        // replace individual fields.
        format!(
            r##"[{{
                "id": "1",
                "slug": "test",
                "name_no": "Test",
                "name_latin": "Testus testus",
                "description": "Testplante.",
                "colors": ["rosa"],
                "image_color": "#aabbcc",
                "height_min_cm": 10,
                "height_max_cm": 20,
                "bloom_months": [6],
                "sunlight": "sol",
                "soil_moisture": "normal",
                "drought_tolerant": false,
                "hardiness_zones": [3],
                "use_cases": ["bed"],
                "cut_flower": false,
                "scent": "ingen",
                "attracts_pollinators": false,
                "available_as": ["frø"],
                "difficulty": "lett",
                "plant_type": "stauder",
                "categories": ["flerårig"]{}
            }}]"##,
            overrides
        )
    }

    #[test]
    fn test_minimal_record_is_valid() {
        assert!(Catalog::from_json(&seed_record("")).is_ok());
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let one = seed_record("");
        // Two copies of the same record, distinct ids
        let json = format!(
            "[{},{}]",
            one.trim_start_matches('[').trim_end_matches(']'),
            one.trim_start_matches('[')
                .trim_end_matches(']')
                .replacen("\"id\": \"1\"", "\"id\": \"2\"", 1)
        );
        match Catalog::from_json(&json) {
            Err(CatalogError::DuplicateSlug(slug)) => assert_eq!(slug, "test"),
            other => panic!("expected DuplicateSlug, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_zone_out_of_range_rejected() {
        let json = seed_record("").replace("\"hardiness_zones\": [3]", "\"hardiness_zones\": [9]");
        assert!(matches!(
            Catalog::from_json(&json),
            Err(CatalogError::ZoneOutOfRange { zone: 9, .. })
        ));
    }

    #[test]
    fn test_empty_zones_rejected() {
        let json = seed_record("").replace("\"hardiness_zones\": [3]", "\"hardiness_zones\": []");
        assert!(matches!(
            Catalog::from_json(&json),
            Err(CatalogError::EmptyZones { .. })
        ));
    }

    #[test]
    fn test_bloom_month_out_of_range_rejected() {
        let json = seed_record("").replace("\"bloom_months\": [6]", "\"bloom_months\": [13]");
        assert!(matches!(
            Catalog::from_json(&json),
            Err(CatalogError::MonthOutOfRange { month: 13, .. })
        ));
    }

    #[test]
    fn test_sow_month_out_of_range_rejected() {
        let json = seed_record(",\n\"sow_months_indoor\": [0]");
        assert!(matches!(
            Catalog::from_json(&json),
            Err(CatalogError::MonthOutOfRange { month: 0, .. })
        ));
    }

    #[test]
    fn test_inverted_height_range_rejected() {
        let json = seed_record("").replace("\"height_min_cm\": 10", "\"height_min_cm\": 30");
        assert!(matches!(
            Catalog::from_json(&json),
            Err(CatalogError::HeightRange { min: 30, max: 20, .. })
        ));
    }

    #[test]
    fn test_zero_height_rejected() {
        let json = seed_record("").replace("\"height_min_cm\": 10", "\"height_min_cm\": 0");
        assert!(matches!(
            Catalog::from_json(&json),
            Err(CatalogError::HeightRange { min: 0, .. })
        ));
    }

    #[test]
    fn test_invalid_enum_value_fails_parse() {
        let json = seed_record("").replace("\"sunlight\": \"sol\"", "\"sunlight\": \"full sun\"");
        assert!(matches!(Catalog::from_json(&json), Err(CatalogError::Parse(_))));
    }
}
