use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Catch-all category. Never scored; only reached when no keyword matches.
pub const GENERAL_CATEGORY: &str = "general";

/// A pre-authored threat entry.
///
/// `severity` is kept as the raw label from the catalog. Use
/// [`ThreatRecord::severity_level`] when a typed level is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub severity: String,
    pub mitigation: String,
}

impl ThreatRecord {
    pub fn severity_level(&self) -> Option<Severity> {
        Severity::parse(&self.severity)
    }
}

/// Coarse ranking label of a threat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Case-insensitive parse. Unknown labels yield `None`.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }

    /// Fixed-width marker used by the console renderer.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Low => "[+   ]",
            Self::Medium => "[++  ]",
            Self::High => "[+++ ]",
            Self::Critical => "[++++]",
        }
    }
}

/// Keywords that indicate a domain and the threats attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub keywords: Vec<String>,
    pub threats: Vec<ThreatRecord>,
}

impl Category {
    /// Number of distinct keywords found in an already-lowercased description.
    ///
    /// A keyword counts once no matter how often it occurs.
    pub fn score(&self, normalized: &str) -> usize {
        self.keywords
            .iter()
            .filter(|keyword| normalized.contains(keyword.to_lowercase().as_str()))
            .count()
    }
}

/// Ordered mapping of category name to [`Category`].
///
/// Order is the document order of the catalog and decides classification
/// ties. A name repeated in the document keeps its first position and takes
/// the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTable(IndexMap<String, Category>);

impl CategoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a category. An existing name keeps its position and the
    /// previous value is returned.
    pub fn insert(&mut self, name: impl Into<String>, category: Category) -> Option<Category> {
        self.0.insert(name.into(), category)
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.0.iter().map(|(name, category)| (name.as_str(), category))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, Category)> for CategoryTable {
    fn from_iter<I: IntoIterator<Item = (N, Category)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, category)| (name.into(), category))
                .collect(),
        )
    }
}
