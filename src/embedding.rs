//! Embedding-Text Builder
//!
//! Flattens one plant record into a single descriptive string: names,
//! description, formatted growing facts and keyword clusters, joined with
//! ". " separators. The string is the input contract for a future semantic
//! search backend (text-embedding models), so part order is fixed and the
//! output must be byte-stable for an unchanged record.
//!
//! Not consumed by the substring search path; see `search`.

use crate::plant::{Plant, Scent};

/// Keyword cluster appended for cut-flower plants
const CUT_FLOWER_CLUSTER: &str = "snittblomst, bukett, bryllup, kurvblomst";

/// Keyword cluster appended for pollinator-attracting plants
const POLLINATOR_CLUSTER: &str = "bier, humler, sommerfugler, pollinatorer";

/// Build the embedding text for one plant.
///
/// Pure and deterministic: empty or absent parts contribute nothing (no
/// stray separators), everything else appears in declaration order.
pub fn build_embedding_text(p: &Plant) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(18);

    parts.push(p.name_no.clone());
    parts.extend(p.name_se.clone());
    parts.extend(p.name_dk.clone());
    parts.push(p.name_latin.clone());
    parts.push(p.description.clone());

    parts.push(format!("Farger: {}", p.colors.join(", ")));
    parts.push(format!("Vekstsoner: H{}", join_zones(&p.hardiness_zones)));
    parts.push(format!("Lys: {}", p.sunlight));
    parts.push(format!("Jord: {}", p.soil_moisture));

    if p.drought_tolerant {
        parts.push("tørketålende".to_string());
    }

    parts.push(format!("Bruk: {}", p.use_cases.join(", ")));

    if p.cut_flower {
        parts.push(CUT_FLOWER_CLUSTER.to_string());
    }
    if p.scent != Scent::None {
        parts.push(format!("duftende, duft {}", p.scent));
    }
    if p.attracts_pollinators {
        parts.push(POLLINATOR_CLUSTER.to_string());
    }

    parts.push(format!("Type: {}", p.plant_type));
    parts.push(format!("Vanskelighetsgrad: {}", p.difficulty));
    parts.push(format!(
        "Tilgjengelig som: {}",
        p.available_as
            .iter()
            .map(|a| a.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    ));

    if !p.categories.is_empty() {
        parts.push(p.categories.join(", "));
    }

    parts.retain(|part| !part.is_empty());
    parts.join(". ")
}

/// "1, H2, H3" for zones [1, 2, 3]; the caller prepends the first "H"
fn join_zones(zones: &[u8]) -> String {
    zones
        .iter()
        .map(|z| z.to_string())
        .collect::<Vec<_>>()
        .join(", H")
}

// ============================================================================
// TESTS
// ============================================================================
