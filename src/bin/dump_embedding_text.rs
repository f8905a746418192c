//! Dump Embedding Texts
//!
//! Prints the embedding text of every catalog record as JSON lines, one
//! object per plant. Feed this to the indexing job when the semantic
//! search backend arrives.
//!
//! Run with: cargo run --bin dump_embedding_text

use anyhow::Context;
use spirio::{build_embedding_text, Catalog};

fn main() -> anyhow::Result<()> {
    let catalog = match std::env::var("CATALOG_PATH").ok() {
        Some(path) => Catalog::from_path(&path)
            .with_context(|| format!("failed to load catalog from {}", path))?,
        None => Catalog::load_embedded().context("embedded seed catalog is invalid")?,
    };

    for plant in catalog.plants() {
        let line = serde_json::json!({
            "id": plant.id,
            "slug": plant.slug,
            "embedding_text": build_embedding_text(plant),
        });
        println!("{}", line);
    }

    Ok(())
}
