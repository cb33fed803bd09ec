//! Keyword classifier.
//!
//! Maps a free-text description to the catalog category whose keywords it
//! mentions most often. The policy is deliberately simple:
//!
//!   - score = number of a category's keywords found as substrings
//!   - the strictly highest score wins; ties keep the earlier category
//!   - no match at all → `general` with a fixed low confidence
//!
//! `general` itself is never scored, so its keywords cannot select it.

use serde::Serialize;
use tracing::debug;

use crate::catalog::model::{CategoryTable, GENERAL_CATEGORY};

/// Confidence reported when no keyword matched.
pub const FALLBACK_CONFIDENCE: f64 = 0.1;

/// Confidence contributed by each matched keyword, capped at 1.0.
pub const CONFIDENCE_PER_MATCH: f64 = 0.2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub category: String,
    pub confidence: f64,
    /// Raw keyword-match count of the winning category; 0 on fallback.
    pub score: usize,
}

pub fn classify(description: &str, table: &CategoryTable) -> Classification {
    let normalized = description.to_lowercase();

    let mut best: Option<(&str, usize)> = None;
    for (name, category) in table.iter() {
        if name == GENERAL_CATEGORY {
            continue;
        }

        let score = category.score(&normalized);
        debug!(category = name, score, "scored category");

        if score > best.map_or(0, |(_, s)| s) {
            best = Some((name, score));
        }
    }

    match best {
        Some((name, score)) => Classification {
            category: name.to_string(),
            confidence: (score as f64 * CONFIDENCE_PER_MATCH).min(1.0),
            score,
        },
        None => Classification {
            category: GENERAL_CATEGORY.to_string(),
            confidence: FALLBACK_CONFIDENCE,
            score: 0,
        },
    }
}
