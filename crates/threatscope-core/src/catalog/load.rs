//! Threat catalog loading.
//!
//! The catalog is read once at start-up and never mutated. Structural
//! problems (missing fields, wrong types, no fallback category) are fatal.
//! Content oddities that do not prevent analysis are logged and kept as-is.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::catalog::model::{CategoryTable, GENERAL_CATEGORY};
use crate::error::CatalogError;

/// Default data set compiled into the binary.
pub const BUNDLED_CATALOG: &str = include_str!("../../data/threats.json");

/// Read, parse and validate a catalog file.
pub fn load_catalog(path: &Path) -> Result<CategoryTable, CatalogError> {
    let json = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = json.len(), "read threat catalog");
    parse_catalog(&json)
}

/// Parse and validate a catalog from its JSON text.
pub fn parse_catalog(json: &str) -> Result<CategoryTable, CatalogError> {
    let table: CategoryTable = serde_json::from_str(json)?;
    validate(&table)?;

    debug!(categories = table.len(), "loaded threat catalog");
    Ok(table)
}

/// The catalog shipped with the crate.
pub fn bundled_catalog() -> Result<CategoryTable, CatalogError> {
    parse_catalog(BUNDLED_CATALOG)
}

/// Serialize a table as pretty JSON in table order.
///
/// This is the companion data file read by the exported script.
pub fn catalog_to_json(table: &CategoryTable) -> Result<String, CatalogError> {
    let mut json = serde_json::to_string_pretty(table)?;
    json.push('\n');
    Ok(json)
}

fn validate(table: &CategoryTable) -> Result<(), CatalogError> {
    if !table.contains(GENERAL_CATEGORY) {
        return Err(CatalogError::MissingFallback);
    }

    for (name, category) in table.iter() {
        if category.keywords.iter().any(|k| k.trim().is_empty()) {
            warn!(category = name, "empty keyword matches every description");
        }

        if category.threats.is_empty() {
            warn!(category = name, "category has no threats");
        }

        let mut seen = HashSet::new();
        for threat in &category.threats {
            if !seen.insert(threat.id.as_str()) {
                warn!(category = name, id = %threat.id, "duplicate threat id");
            }
            if threat.severity_level().is_none() {
                warn!(
                    category = name,
                    id = %threat.id,
                    severity = %threat.severity,
                    "unrecognized severity label"
                );
            }
        }
    }

    Ok(())
}
