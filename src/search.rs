//! Search/Filter Engine
//!
//! Linear scan over the catalog with case-insensitive substring matching.
//! Stable filter: results keep catalog order, no scoring, no fuzzy matching,
//! no diacritic normalization. Cheap enough to run on every keystroke.
//!
//! Two match directions exist side by side:
//! - direct field clauses test record-contains-query;
//! - boolean-flag clauses test query-contains-token against a fixed synonym
//!   set ("bukett" finds cut flowers even when the word appears in no record
//!   field). The asymmetry matches the shipped behavior and stays as is.

use crate::plant::Plant;

/// Query tokens that match any cut-flower plant
pub const CUT_FLOWER_TOKENS: [&str; 3] = ["snitt", "bukett", "bryllup"];

/// Query tokens that match any pollinator-attracting plant
pub const POLLINATOR_TOKENS: [&str; 4] = ["humle", "bi", "sommerfugl", "pollinat"];

/// Query tokens that match any drought-tolerant plant
pub const DROUGHT_TOKENS: [&str; 2] = ["tørke", "tørt"];

/// Filter the catalog by hardiness zone and free-text query.
///
/// Zone membership is applied first; a trimmed-empty query then returns the
/// zone-filtered set unchanged (the browse state). Total function: an
/// out-of-range zone or empty catalog just yields an empty result.
pub fn search_plants<'a>(catalog: &'a [Plant], query: &str, zone: Option<u8>) -> Vec<&'a Plant> {
    let zone_filtered = catalog
        .iter()
        .filter(|p| zone.map_or(true, |z| p.hardiness_zones.contains(&z)));

    let trimmed = query.trim();
    if trimmed.is_empty() {
        return zone_filtered.collect();
    }

    let q = trimmed.to_lowercase();
    zone_filtered.filter(|p| matches_query(p, &q)).collect()
}

/// One record against a lowercased, trimmed, non-empty query.
fn matches_query(p: &Plant, q: &str) -> bool {
    p.name_no.to_lowercase().contains(q)
        || p.name_latin.to_lowercase().contains(q)
        || p.description.to_lowercase().contains(q)
        || p.colors.iter().any(|c| c.to_lowercase().contains(q))
        || p.use_cases.iter().any(|u| u.to_lowercase().contains(q))
        || p.categories.iter().any(|c| c.to_lowercase().contains(q))
        || (p.cut_flower && CUT_FLOWER_TOKENS.iter().any(|t| q.contains(t)))
        || (p.attracts_pollinators && POLLINATOR_TOKENS.iter().any(|t| q.contains(t)))
        || (p.drought_tolerant && DROUGHT_TOKENS.iter().any(|t| q.contains(t)))
        // sunlight tokens are lowercase by construction, no second lowering
        || p.sunlight.as_str().contains(q)
}

// ============================================================================
// TESTS
// ============================================================================
