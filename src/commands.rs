use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

use crate::core::dependencies::{ClassificationResult, ConfigurationGraph, DependencyBucket};
use crate::core::error::LoomResult;
use crate::core::lifecycle::{after_evaluate, RegistrationSummary};
use crate::core::maven::{MavenArtifact, MavenRepository};
use crate::core::state::{AppState, LoomExtension};
use crate::core::version::{LibraryDownloads, LibraryEntry, Platform};

#[derive(Debug, Serialize)]
pub struct MinecraftVersionInfo {
    pub id: String,
    pub release_time: String,
    pub version_type: String,
}

#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub summary: RegistrationSummary,
    pub repositories: Vec<MavenRepository>,
    /// Configuration name to resolved coordinates.
    pub configurations: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub coordinate: String,
    pub platform: String,
    pub matched_keyword: Option<String>,
    #[serde(flatten)]
    pub result: ClassificationResult,
    pub configuration: &'static str,
}

pub async fn get_minecraft_versions(state: &AppState) -> LoomResult<Vec<MinecraftVersionInfo>> {
    let manifest = state.manifest_source().fetch_index().await?;

    let versions = manifest
        .releases()
        .into_iter()
        .filter(|entry| !entry.id.to_ascii_lowercase().contains("demo"))
        .map(|entry| MinecraftVersionInfo {
            id: entry.id.clone(),
            release_time: entry.release_time.to_rfc3339(),
            version_type: entry.version_type.clone(),
        })
        .collect();

    Ok(versions)
}

/// Run the dependency pass against the on-disk cache and report every
/// configuration as the build would resolve it.
pub async fn resolve_dependencies(
    state: &AppState,
    extension: &LoomExtension,
    platform: Platform,
) -> LoomResult<ResolveResponse> {
    let source = state.manifest_source();
    let classifier = extension.classifier(platform);
    let mut graph = ConfigurationGraph::new();

    let summary = after_evaluate(
        extension,
        &source,
        &mut graph,
        &classifier,
        &state.cache_files_dir(),
    )
    .await?;

    let configurations = DependencyBucket::ALL
        .iter()
        .map(|bucket| (bucket.config_name().to_string(), graph.resolved(*bucket)))
        .collect();

    Ok(ResolveResponse {
        summary,
        repositories: graph.repositories().to_vec(),
        configurations,
    })
}

/// Classify a bare coordinate as if the manifest listed it with no rules.
pub fn classify_coordinate(
    extension: &LoomExtension,
    coordinate: &str,
    platform: Platform,
) -> LoomResult<ClassifyResponse> {
    let artifact = MavenArtifact::parse(coordinate)?;
    let classifier = extension.classifier(platform);

    let mut entry = LibraryEntry::new(artifact.coordinate());
    entry.downloads = Some(LibraryDownloads::default());
    let result = classifier.classify(&entry);
    info!("{} classified as {:?}", entry.name, result);

    Ok(ClassifyResponse {
        matched_keyword: classifier
            .keywords()
            .find_match(&entry.name)
            .map(ToString::to_string),
        coordinate: entry.name,
        platform: platform.to_string(),
        configuration: result.bucket.config_name(),
        result,
    })
}
