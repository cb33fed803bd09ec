pub mod classify;
pub mod sample;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::model::{CategoryTable, ThreatRecord};
use crate::error::AnalysisError;

pub use classify::{Classification, classify};
pub use sample::sample;

/// Outcome of one analysis call. Owned by the caller, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub category: String,
    pub threats: Vec<ThreatRecord>,
    pub confidence: f64,
}

/// Classify `description` and draw a threat sample for the winning category.
///
/// Empty descriptions are not rejected here; they classify as `general`.
/// Interactive callers should gate input through [`require_description`].
pub fn analyze<R: Rng + ?Sized>(
    description: &str,
    table: &CategoryTable,
    rng: &mut R,
) -> Result<AnalysisResult, AnalysisError> {
    let Classification {
        category,
        confidence,
        score,
    } = classify(description, table);

    let threats = sample(&category, table, rng)?;

    info!(
        category = %category,
        score,
        confidence,
        threats = threats.len(),
        "analysis complete"
    );

    Ok(AnalysisResult {
        category,
        threats,
        confidence,
    })
}

/// Reject empty or whitespace-only input, returning the trimmed text.
pub fn require_description(description: &str) -> Result<&str, AnalysisError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(AnalysisError::EmptyDescription);
    }
    Ok(trimmed)
}
