//! Loading of alternative section tables.
//!
//! A sections file is a JSON array in the shape of
//! [`enharmonic_core::Section`]:
//!
//! ```json
//! [{ "label": "大字组", "lines": ["C #B-1 bbD", "#C bD XB-1"] }]
//! ```

use anyhow::{Context, Result};
use enharmonic_core::{Catalog, Section};
use std::fs;
use std::path::Path;

pub fn parse_sections(json: &str) -> Result<Vec<Section>> {
    let sections: Vec<Section> = serde_json::from_str(json).context("Invalid sections JSON")?;
    Ok(sections)
}

/// Reads a sections file and builds a catalog from it.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read sections file {}", path.display()))?;
    let sections = parse_sections(&json)?;
    let catalog = Catalog::build(&sections)
        .with_context(|| format!("Sections file {} is not a valid catalog", path.display()))?;
    log::info!("loaded {} classes from {}", catalog.len(), path.display());
    Ok(catalog)
}
