//! Plant Record Schema
//!
//! The canonical shape of a catalog entry. All enumerated growing-condition
//! fields are closed types so an invalid seed value fails at catalog load
//! instead of silently falling through every search branch.
//!
//! Wire tokens are the Norwegian strings used throughout the catalog and the
//! search UI ("sol", "tørr", "stauder", ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// One catalog entry. Static seed data, immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: String,
    /// URL-safe identifier, unique across the catalog
    pub slug: String,

    // Names
    pub name_no: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_se: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_dk: Option<String>,
    pub name_latin: String,

    /// Rich Norwegian description; doubles as search text and display copy
    pub description: String,

    // Appearance
    pub colors: Vec<String>,
    /// Placeholder gradient token for cards without photos, no semantic meaning
    pub image_color: String,
    pub height_min_cm: u16,
    pub height_max_cm: u16,
    /// 1-12, may wrap the year boundary, not required sorted
    pub bloom_months: Vec<u8>,

    // Growing conditions
    pub sunlight: Sunlight,
    pub soil_moisture: SoilMoisture,
    pub drought_tolerant: bool,

    /// Norwegian hardiness zones H1-H8 (1 = coldest, 8 = warmest coast)
    pub hardiness_zones: Vec<u8>,

    // Use cases
    pub use_cases: Vec<String>,
    pub cut_flower: bool,
    pub scent: Scent,
    pub attracts_pollinators: bool,

    // Propagation
    pub available_as: Vec<Propagation>,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sow_months_indoor: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sow_months_outdoor: Option<Vec<u8>>,

    // Taxonomy
    pub plant_type: PlantType,
    /// Free-form tags for search
    pub categories: Vec<String>,
}

impl Plant {
    /// Height range formatted for display, e.g. "60-100 cm"
    pub fn height_range(&self) -> String {
        format!("{}\u{2013}{} cm", self.height_min_cm, self.height_max_cm)
    }
}

/// Sunlight requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sunlight {
    #[serde(rename = "sol")]
    FullSun,
    #[serde(rename = "halvskygge")]
    PartialShade,
    #[serde(rename = "skygge")]
    Shade,
    #[serde(rename = "sol-halvskygge")]
    SunToPartialShade,
}

impl Sunlight {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sunlight::FullSun => "sol",
            Sunlight::PartialShade => "halvskygge",
            Sunlight::Shade => "skygge",
            Sunlight::SunToPartialShade => "sol-halvskygge",
        }
    }
}

impl fmt::Display for Sunlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Soil moisture requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilMoisture {
    #[serde(rename = "tørr")]
    Dry,
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "fuktig")]
    Moist,
}

impl SoilMoisture {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilMoisture::Dry => "tørr",
            SoilMoisture::Normal => "normal",
            SoilMoisture::Moist => "fuktig",
        }
    }
}

impl fmt::Display for SoilMoisture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scent intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scent {
    #[serde(rename = "ingen")]
    None,
    #[serde(rename = "svak")]
    Weak,
    #[serde(rename = "sterk")]
    Strong,
}

impl Scent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scent::None => "ingen",
            Scent::Weak => "svak",
            Scent::Strong => "sterk",
        }
    }
}

impl fmt::Display for Scent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Propagation form a plant is sold as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Propagation {
    #[serde(rename = "frø")]
    Seed,
    #[serde(rename = "plante")]
    Plant,
    #[serde(rename = "løk")]
    Bulb,
    #[serde(rename = "knolle")]
    Tuber,
}

impl Propagation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Propagation::Seed => "frø",
            Propagation::Plant => "plante",
            Propagation::Bulb => "løk",
            Propagation::Tuber => "knolle",
        }
    }
}

impl fmt::Display for Propagation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cultivation difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "lett")]
    Easy,
    #[serde(rename = "middels")]
    Medium,
    #[serde(rename = "krevende")]
    Demanding,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "lett",
            Difficulty::Medium => "middels",
            Difficulty::Demanding => "krevende",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broad plant taxonomy used for grouping and search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlantType {
    #[serde(rename = "stauder")]
    Perennial,
    #[serde(rename = "ettårig")]
    Annual,
    #[serde(rename = "toårig")]
    Biennial,
    #[serde(rename = "busk")]
    Shrub,
    #[serde(rename = "tre")]
    Tree,
    #[serde(rename = "klatreplante")]
    Climber,
    #[serde(rename = "løk")]
    Bulb,
    #[serde(rename = "knolle")]
    Tuber,
}

impl PlantType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlantType::Perennial => "stauder",
            PlantType::Annual => "ettårig",
            PlantType::Biennial => "toårig",
            PlantType::Shrub => "busk",
            PlantType::Tree => "tre",
            PlantType::Climber => "klatreplante",
            PlantType::Bulb => "løk",
            PlantType::Tuber => "knolle",
        }
    }
}

impl fmt::Display for PlantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Norwegian month name for 1-12, used on detail pages
pub fn month_name(month: u8) -> &'static str {
    match month {
        1 => "januar",
        2 => "februar",
        3 => "mars",
        4 => "april",
        5 => "mai",
        6 => "juni",
        7 => "juli",
        8 => "august",
        9 => "september",
        10 => "oktober",
        11 => "november",
        12 => "desember",
        _ => "?",
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sunlight_tokens_are_lowercase() {
        // The search engine matches the raw sunlight token against a
        // lowercased query, which only works if the tokens never carry
        // uppercase characters.
        for s in [
            Sunlight::FullSun,
            Sunlight::PartialShade,
            Sunlight::Shade,
            Sunlight::SunToPartialShade,
        ] {
            assert_eq!(s.as_str(), s.as_str().to_lowercase());
        }
    }

    #[test]
    fn test_enum_deserializes_norwegian_tokens() {
        let s: Sunlight = serde_json::from_str("\"sol-halvskygge\"").unwrap();
        assert_eq!(s, Sunlight::SunToPartialShade);

        let m: SoilMoisture = serde_json::from_str("\"tørr\"").unwrap();
        assert_eq!(m, SoilMoisture::Dry);

        let t: PlantType = serde_json::from_str("\"stauder\"").unwrap();
        assert_eq!(t, PlantType::Perennial);
    }

    #[test]
    fn test_invalid_enum_token_is_rejected() {
        let result: Result<Sunlight, _> = serde_json::from_str("\"full sun\"");
        assert!(result.is_err(), "Unknown sunlight token should fail to parse");
    }

    #[test]
    fn test_month_name_covers_year() {
        assert_eq!(month_name(1), "januar");
        assert_eq!(month_name(12), "desember");
        assert_eq!(month_name(0), "?");
    }
}
