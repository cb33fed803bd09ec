pub mod load;
pub mod model;

pub use load::{bundled_catalog, catalog_to_json, load_catalog, parse_catalog};
pub use model::{Category, CategoryTable, GENERAL_CATEGORY, Severity, ThreatRecord};
