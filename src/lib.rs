//! Spirio — Skandinavisk planteregister
//!
//! Plant catalog with free-text search and Norwegian hardiness-zone
//! filtering (H1-H8). The catalog is static seed data held in memory;
//! search is a linear, order-preserving substring filter cheap enough to
//! run on every keystroke.
//!
//! Module map:
//! - `plant`: record schema and closed growing-condition enums
//! - `catalog`: seed loading, invariant validation, slug lookup
//! - `search`: the query/zone filter engine
//! - `embedding`: flattened text contract for a future semantic backend
//! - `server` + `web`: axum routes, JSON API, askama/HTMX pages

pub mod catalog;
pub mod embedding;
pub mod plant;
pub mod search;
pub mod server;
pub mod web;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError};
pub use embedding::build_embedding_text;
pub use plant::Plant;
pub use search::search_plants;
pub use server::{create_router, AppState};
