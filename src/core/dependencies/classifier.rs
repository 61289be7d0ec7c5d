// ─── Library Classifier ───
// Decides whether a manifest library is included and which bucket it joins.

use serde::Serialize;
use tracing::debug;

use super::bucket::DependencyBucket;
use crate::core::version::{evaluate_rules, LibraryEntry, Platform, RuleAction};

/// Coordinate substrings that mark a library as client-only.
pub const DEFAULT_CLIENT_KEYWORDS: [&str; 5] = ["java3d", "paulscode", "lwjgl", "twitch", "jinput"];

/// Keyword table routing libraries to [`DependencyBucket::ClientOnly`].
///
/// Matching is a case-sensitive substring test on the whole coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientKeywordTable {
    keywords: Vec<String>,
}

impl Default for ClientKeywordTable {
    fn default() -> Self {
        Self::new(DEFAULT_CLIENT_KEYWORDS)
    }
}

impl ClientKeywordTable {
    /// Build a table from `keywords`, dropping blanks and duplicates.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self {
            keywords: Vec::new(),
        };
        for keyword in keywords {
            table.push(keyword.into());
        }
        table
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.push(keyword.into());
        self
    }

    fn push(&mut self, keyword: String) {
        // An empty keyword would match every coordinate.
        if keyword.is_empty() || self.keywords.contains(&keyword) {
            return;
        }
        self.keywords.push(keyword);
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// First keyword contained in `coordinate`, if any.
    pub fn find_match(&self, coordinate: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| coordinate.contains(k.as_str()))
            .map(String::as_str)
    }
}

/// Outcome of classifying one library entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub include: bool,
    /// Bucket the coordinate maps to; meaningful only when `include` is set.
    pub bucket: DependencyBucket,
}

/// Pure classifier over a fixed platform and keyword table.
#[derive(Debug, Clone)]
pub struct LibraryClassifier {
    platform: Platform,
    keywords: ClientKeywordTable,
    rule_default: RuleAction,
}

impl LibraryClassifier {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            keywords: ClientKeywordTable::default(),
            rule_default: RuleAction::Allow,
        }
    }

    pub fn with_keywords(mut self, keywords: ClientKeywordTable) -> Self {
        self.keywords = keywords;
        self
    }

    /// Decision standing when no rule applies to the platform.
    pub fn with_rule_default(mut self, action: RuleAction) -> Self {
        self.rule_default = action;
        self
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    pub fn keywords(&self) -> &ClientKeywordTable {
        &self.keywords
    }

    /// Bucket for a coordinate by keyword alone.
    pub fn bucket_for(&self, coordinate: &str) -> DependencyBucket {
        match self.keywords.find_match(coordinate) {
            Some(_) => DependencyBucket::ClientOnly,
            None => DependencyBucket::Common,
        }
    }

    pub fn classify(&self, entry: &LibraryEntry) -> ClassificationResult {
        let bucket = self.bucket_for(&entry.name);

        let decision = evaluate_rules(&entry.rules, &self.platform, self.rule_default);
        if decision == RuleAction::Disallow {
            debug!("Skipping library (OS rule on {}): {}", self.platform, entry.name);
            return ClassificationResult {
                include: false,
                bucket,
            };
        }

        if !entry.has_artifact_reference() {
            debug!("Skipping library (no artifact reference): {}", entry.name);
            return ClassificationResult {
                include: false,
                bucket,
            };
        }

        ClassificationResult {
            include: true,
            bucket,
        }
    }
}
