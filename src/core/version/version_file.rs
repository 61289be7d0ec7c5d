// ─── Version File ───
// Parses a Mojang version JSON into a descriptor and evaluates OS rules for libraries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::platform::Platform;
use crate::core::error::{LoomError, LoomResult};
use crate::core::maven::MavenArtifact;

/// The parts of a version JSON that drive dependency registration.
///
/// Unknown fields (`mainClass`, `arguments`, `assetIndex`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionDescriptor {
    /// Identifier of the main client artifact (the version `id`).
    #[serde(rename = "id")]
    pub main_artifact_id: String,
    pub libraries: Vec<LibraryEntry>,
}

// ─── Library Entry with Rules ───

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,
    /// OS name to classifier template, e.g. `"windows": "natives-windows-${arch}"`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub natives: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloads: Option<LibraryDownloads>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryDownloads {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact: Option<LibDownloadArtifact>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub classifiers: BTreeMap<String, LibDownloadArtifact>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibDownloadArtifact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

// ─── OS Rule Evaluation ───

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub action: RuleAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<OsRule>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuleAction {
    Allow,
    Disallow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Rule {
    /// A rule applies when it has no OS constraint or names the platform's OS.
    pub fn applies_to(&self, platform: &Platform) -> bool {
        match self.os.as_ref().and_then(|os| os.name.as_deref()) {
            None => true,
            Some(name) => name.eq_ignore_ascii_case(platform.os.as_str()),
        }
    }
}

/// Evaluate `rules` top to bottom. Every applicable rule overwrites the
/// decision, so the last one wins; `initial` stands when none applies.
pub fn evaluate_rules(rules: &[Rule], platform: &Platform, initial: RuleAction) -> RuleAction {
    let mut decision = initial;
    for rule in rules {
        if rule.applies_to(platform) {
            decision = rule.action;
        }
    }
    decision
}

impl LibraryEntry {
    /// A plain entry with no rules, natives or downloads.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
            natives: BTreeMap::new(),
            downloads: None,
        }
    }

    pub fn artifact(&self) -> LoomResult<MavenArtifact> {
        MavenArtifact::parse(&self.name)
    }

    /// Whether the entry carries any artifact reference at all.
    pub fn has_artifact_reference(&self) -> bool {
        self.downloads.is_some()
    }

    /// Native classifier for `platform`, with `${arch}` substituted.
    pub fn native_classifier(&self, platform: &Platform) -> Option<String> {
        let template = self
            .natives
            .iter()
            .find(|(os, _)| os.eq_ignore_ascii_case(platform.os.as_str()))
            .map(|(_, classifier)| classifier)?;
        Some(template.replace("${arch}", &platform.arch_bits.to_string()))
    }
}

impl VersionDescriptor {
    /// Parse a raw version JSON document.
    ///
    /// Missing or ill-typed `id`/`libraries`, or a library name that is not a
    /// Maven coordinate, yields `MalformedManifest`.
    pub fn parse(raw: &[u8]) -> LoomResult<Self> {
        let descriptor: VersionDescriptor = serde_json::from_slice(raw)
            .map_err(|e| LoomError::MalformedManifest(e.to_string()))?;

        if descriptor.main_artifact_id.trim().is_empty() {
            return Err(LoomError::MalformedManifest(
                "field `id` is empty".to_string(),
            ));
        }

        for (index, library) in descriptor.libraries.iter().enumerate() {
            if let Err(e) = library.artifact() {
                return Err(LoomError::MalformedManifest(format!(
                    "libraries[{index}]: {e}"
                )));
            }
        }

        debug!(
            "Parsed version {} with {} libraries",
            descriptor.main_artifact_id,
            descriptor.libraries.len()
        );
        Ok(descriptor)
    }

    /// Serialize back to the manifest schema.
    pub fn to_json(&self) -> LoomResult<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}
