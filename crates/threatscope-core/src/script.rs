//! Offline script export.
//!
//! The script is a fixed Python 3 program that repeats the classifier,
//! sampler and console printer without this crate. It expects the catalog
//! as `threats.json` in its own directory.

/// File name of the exported script.
pub const SCRIPT_FILE_NAME: &str = "threatscope.py";

/// File name of the companion catalog the script reads.
pub const DATA_FILE_NAME: &str = "threats.json";

const SCRIPT: &str = include_str!("../assets/threatscope.py");

/// The offline script text. Identical on every call.
pub fn generate_script() -> &'static str {
    SCRIPT
}
