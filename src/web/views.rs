//! View models for the HTML pages.
//!
//! Templates only see flat strings, bools and lists; Option handling,
//! truncation and formatting happen here so the templates stay dumb.

use crate::catalog::Catalog;
use crate::plant::{month_name, Plant, Scent};

/// Description cutoff on result cards, in characters
const CARD_SUMMARY_CHARS: usize = 120;

/// Example-query chips shown under the hero search bar
const EXAMPLE_QUERIES: [&str; 4] = [
    "skyggetålende",
    "duftende blomster",
    "pollinatorer",
    "tørketålende",
];

pub struct ExampleQuery {
    pub label: String,
    pub url: String,
}

pub fn example_queries() -> Vec<ExampleQuery> {
    EXAMPLE_QUERIES
        .iter()
        .map(|label| ExampleQuery {
            label: label.to_string(),
            url: format!("/search?q={}", urlencoding::encode(label)),
        })
        .collect()
}

/// One H1-H8 entry in the zone picker
pub struct ZoneOption {
    pub value: u8,
    pub selected: bool,
}

/// One card in the results grid
pub struct PlantCardView {
    pub name_no: String,
    pub name_latin: String,
    pub image_color: String,
    pub url: String,
    pub zones: Vec<u8>,
    pub summary: String,
    pub cut_flower: bool,
    pub attracts_pollinators: bool,
    pub drought_tolerant: bool,
    pub scented: bool,
}

impl PlantCardView {
    fn from_plant(p: &Plant) -> Self {
        Self {
            name_no: p.name_no.clone(),
            name_latin: p.name_latin.clone(),
            image_color: p.image_color.clone(),
            url: format!("/plant/{}", p.slug),
            zones: p.hardiness_zones.clone(),
            summary: truncate_chars(&p.description, CARD_SUMMARY_CHARS),
            cut_flower: p.cut_flower,
            attracts_pollinators: p.attracts_pollinators,
            drought_tolerant: p.drought_tolerant,
            scented: p.scent != Scent::None,
        }
    }
}

/// The results section: toolbar state plus the card grid
pub struct ResultsView {
    pub query: String,
    pub has_search: bool,
    pub show_query_note: bool,
    pub heading: String,
    pub count: usize,
    pub cards: Vec<PlantCardView>,
    pub zone_options: Vec<ZoneOption>,
}

pub fn build_results(catalog: &Catalog, query: &str, zone: Option<u8>) -> ResultsView {
    let results = catalog.search(query, zone);

    let trimmed = query.trim();
    let has_search = !trimmed.is_empty() || zone.is_some();

    let heading = if has_search {
        match results.len() {
            0 => "Ingen treff".to_string(),
            1 => "1 plante funnet".to_string(),
            n => format!("{} planter funnet", n),
        }
    } else {
        "Utvalgte planter".to_string()
    };

    ResultsView {
        query: trimmed.to_string(),
        has_search,
        show_query_note: has_search && !trimmed.is_empty(),
        heading,
        count: results.len(),
        cards: results.iter().map(|p| PlantCardView::from_plant(p)).collect(),
        zone_options: (1..=8)
            .map(|value| ZoneOption {
                value,
                selected: zone == Some(value),
            })
            .collect(),
    }
}

/// One label/value row on the detail page facts list
pub struct Fact {
    pub label: String,
    pub value: String,
}

/// Detail page view
pub struct PlantDetailView {
    pub name_no: String,
    pub name_latin: String,
    pub image_color: String,
    pub description: String,
    pub zones: Vec<u8>,
    pub categories: Vec<String>,
    pub facts: Vec<Fact>,
}

pub fn build_detail(p: &Plant) -> PlantDetailView {
    let bloom = p
        .bloom_months
        .iter()
        .map(|&m| month_name(m))
        .collect::<Vec<_>>()
        .join(", ");

    let available = p
        .available_as
        .iter()
        .map(|a| a.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let facts = vec![
        fact("Høyde", p.height_range()),
        fact("Blomstring", bloom),
        fact("Lys", p.sunlight.to_string()),
        fact("Jord", p.soil_moisture.to_string()),
        fact("Vanskelighetsgrad", p.difficulty.to_string()),
        fact("Tilgjengelig som", available),
    ];

    PlantDetailView {
        name_no: p.name_no.clone(),
        name_latin: p.name_latin.clone(),
        image_color: p.image_color.clone(),
        description: p.description.clone(),
        zones: p.hardiness_zones.clone(),
        categories: p.categories.clone(),
        facts,
    }
}

fn fact(label: &str, value: String) -> Fact {
    Fact {
        label: label.to_string(),
        value,
    }
}

/// Char-aware truncation; byte slicing would split Norwegian letters.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}\u{2026}", cut)
}

// ============================================================================
// TESTS
// ============================================================================
