use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::info;

use crate::analysis::AnalysisResult;
use crate::catalog::load::catalog_to_json;
use crate::catalog::model::CategoryTable;
use crate::report::render::{render_markdown, report_file_name};
use crate::script::{DATA_FILE_NAME, SCRIPT_FILE_NAME, generate_script};

/// Paths written by [`export_script_bundle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub script: PathBuf,
    pub data: PathBuf,
}

/// Write the offline script and its catalog into `dir`.
///
/// The directory is created if needed. Existing files are overwritten.
pub fn export_script_bundle(dir: &Path, table: &CategoryTable) -> Result<ExportedFiles> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export directory: {}", dir.display()))?;

    let script = dir.join(SCRIPT_FILE_NAME);
    fs::write(&script, generate_script())
        .with_context(|| format!("failed to write script: {}", script.display()))?;
    make_executable(&script)?;

    let data = dir.join(DATA_FILE_NAME);
    fs::write(&data, catalog_to_json(table)?)
        .with_context(|| format!("failed to write catalog: {}", data.display()))?;

    info!(script = %script.display(), data = %data.display(), "exported offline script");
    Ok(ExportedFiles { script, data })
}

/// Write a Markdown report into `dir` under its timestamped file name.
pub fn write_report(
    dir: &Path,
    result: &AnalysisResult,
    description: &str,
    at: DateTime<Utc>,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create report directory: {}", dir.display()))?;

    let path = dir.join(report_file_name(at));
    fs::write(&path, render_markdown(result, description, at))
        .with_context(|| format!("failed to write report: {}", path.display()))?;

    info!(path = %path.display(), "wrote report");
    Ok(path)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .with_context(|| format!("failed to mark executable: {}", path.display()))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
