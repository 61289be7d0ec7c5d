use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::dependencies::{ClientKeywordTable, LibraryClassifier};
use crate::core::error::{LoomError, LoomResult};
use crate::core::version::{Platform, RuleAction};

/// Project settings the dependency pass reads, normally `loom.json`.
///
/// ```json
/// { "targetVersion": "1.12.2", "loaderVersion": "0.3.2" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoomExtension {
    /// May come from the command line instead; checked by `validate`.
    #[serde(default)]
    pub target_version: String,
    #[serde(default)]
    pub loader_version: Option<String>,
    /// Replaces the built-in client-only keyword table when set.
    #[serde(default)]
    pub client_keywords: Option<Vec<String>>,
    /// Start rule evaluation from Disallow, as the vanilla launcher does.
    #[serde(default)]
    pub strict_rules: bool,
}

impl LoomExtension {
    pub fn new(target_version: impl Into<String>) -> Self {
        Self {
            target_version: target_version.into(),
            ..Self::default()
        }
    }

    pub fn load(path: &Path) -> LoomResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| LoomError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&raw)
            .map_err(|e| LoomError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn validate(&self) -> LoomResult<()> {
        let version = self.target_version.trim();
        if version.is_empty() {
            return Err(LoomError::Config("targetVersion is not set".into()));
        }
        if version.contains(['/', '\\']) || version.starts_with('.') {
            return Err(LoomError::Config(format!(
                "targetVersion is not a version id: {}",
                self.target_version
            )));
        }
        Ok(())
    }

    /// Loader version, `None` when unset or blank.
    pub fn loader_version(&self) -> Option<&str> {
        self.loader_version
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    pub fn keyword_table(&self) -> ClientKeywordTable {
        match &self.client_keywords {
            Some(keywords) => ClientKeywordTable::new(keywords.iter().cloned()),
            None => ClientKeywordTable::default(),
        }
    }

    pub fn rule_default(&self) -> RuleAction {
        if self.strict_rules {
            RuleAction::Disallow
        } else {
            RuleAction::Allow
        }
    }

    pub fn classifier(&self, platform: Platform) -> LibraryClassifier {
        LibraryClassifier::new(platform)
            .with_keywords(self.keyword_table())
            .with_rule_default(self.rule_default())
    }
}
