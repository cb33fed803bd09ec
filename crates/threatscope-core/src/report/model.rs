use crate::analysis::AnalysisResult;

/// Headline values shared by every report rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Category name in upper case.
    pub category: String,
    /// Confidence as a percentage with one decimal, e.g. `"40.0%"`.
    pub confidence: String,
    pub threat_count: usize,
}

impl Summary {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            category: result.category.to_uppercase(),
            confidence: format!("{:.1}%", result.confidence * 100.0),
            threat_count: result.threats.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(category: &str, confidence: f64) -> AnalysisResult {
        AnalysisResult {
            category: category.into(),
            threats: vec![],
            confidence,
        }
    }

    #[test]
    fn summary_formats_percentage_with_one_decimal() {
        assert_eq!(Summary::from_result(&result("web", 0.4)).confidence, "40.0%");
        assert_eq!(Summary::from_result(&result("web", 0.1)).confidence, "10.0%");
        assert_eq!(Summary::from_result(&result("web", 1.0)).confidence, "100.0%");
        assert_eq!(
            Summary::from_result(&result("web", 3.0 * 0.2)).confidence,
            "60.0%"
        );
    }

    #[test]
    fn summary_uppercases_category() {
        let s = Summary::from_result(&result("ecommerce", 0.4));
        assert_eq!(s.category, "ECOMMERCE");
        assert_eq!(s.threat_count, 0);
    }
}
