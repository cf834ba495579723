//! Art catalog loading
//!
//! A catalog is a JSON file holding an array of art blocks. Loading is the only
//! fallible step in the crate, and [`load_catalog`] absorbs the failure by
//! returning an empty catalog.

use std::fs;
use std::path::Path;

use tracing::{debug, span, warn, Level};

use crate::core::CatalogError;

/// Art shipped with the crate
const BUILTIN_CATALOG: &str = include_str!("../../assets/ascii_arts.json");

/// Name reported in logs for the bundled catalog
const BUILTIN_NAME: &str = "<builtin>";

/// Read and parse the catalog at `path`, reporting what went wrong.
pub fn try_load_catalog(path: &Path) -> Result<Vec<String>, CatalogError> {
    let load_span = span!(Level::DEBUG, "load_catalog", path = %path.display());
    let _enter = load_span.enter();

    let content = fs::read_to_string(path).map_err(|e| CatalogError::io_error(path, e))?;
    let arts = parse_catalog(&content).map_err(|e| CatalogError::json_error(path, e))?;

    debug!(art_count = arts.len(), "Loaded catalog");
    Ok(arts)
}

/// Read the catalog at `path`, falling back to an empty catalog on any error.
pub fn load_catalog(path: &Path) -> Vec<String> {
    try_load_catalog(path).unwrap_or_else(|e| {
        warn!(error = %e, "Catalog unavailable, using an empty catalog");
        Vec::new()
    })
}

/// The art bundled with the crate.
pub fn builtin_catalog() -> Vec<String> {
    parse_catalog(BUILTIN_CATALOG).unwrap_or_else(|e| {
        warn!(catalog = BUILTIN_NAME, error = %e, "Catalog unavailable, using an empty catalog");
        Vec::new()
    })
}

fn parse_catalog(content: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str(content)
}
