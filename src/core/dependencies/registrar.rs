use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::bucket::DependencyBucket;
use crate::core::maven::MavenRepository;

/// Group of the locally produced Minecraft client jar.
pub const MINECRAFT_GROUP: &str = "net.minecraft";
/// Companion artifact added when building against a loader release.
pub const FABRIC_BASE_ARTIFACT: &str = "net.fabricmc:fabric-base";

/// Sink for dependency declarations, owned by the host build graph.
///
/// Duplicate handling is up to the implementation.
pub trait DependencyRegistrar {
    fn add_repository(&mut self, repository: MavenRepository);

    /// Append a coordinate taken from the manifest to `bucket`.
    fn register(&mut self, bucket: DependencyBucket, coordinate: &str);

    /// Append a synthesized coordinate that the manifest does not list.
    fn register_derived(&mut self, bucket: DependencyBucket, coordinate: &str) {
        self.register(bucket, coordinate);
    }
}

/// File name of the mapped client jar kept in the cache directory.
pub fn mapped_client_jar_name(main_artifact_id: &str) -> String {
    format!("minecraft-{}-mapped.jar", main_artifact_id)
}

/// Flat-dir coordinate for a cached jar: `net.minecraft:<file name without .jar>`.
pub fn client_jar_coordinate(jar_file_name: &str) -> String {
    let stem = jar_file_name
        .strip_suffix(".jar")
        .unwrap_or(jar_file_name);
    format!("{}:{}", MINECRAFT_GROUP, stem)
}

/// `net.fabricmc:fabric-base:<target>-<loader>`, only for a non-empty loader version.
pub fn base_artifact_coordinate(target_version: &str, loader_version: Option<&str>) -> Option<String> {
    let loader = loader_version.map(str::trim).filter(|v| !v.is_empty())?;
    Some(format!(
        "{}:{}-{}",
        FABRIC_BASE_ARTIFACT, target_version, loader
    ))
}

/// In-memory configuration registry.
///
/// Keeps insertion order per bucket and ignores exact duplicates.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ConfigurationGraph {
    repositories: Vec<MavenRepository>,
    buckets: BTreeMap<DependencyBucket, Vec<String>>,
    derived: Vec<String>,
}

impl ConfigurationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repositories(&self) -> &[MavenRepository] {
        &self.repositories
    }

    /// Coordinates declared directly on `bucket`.
    pub fn declared(&self, bucket: DependencyBucket) -> &[String] {
        self.buckets.get(&bucket).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Coordinates visible through `bucket`, inherited ones last.
    pub fn resolved(&self, bucket: DependencyBucket) -> Vec<String> {
        let mut out: Vec<String> = self.declared(bucket).to_vec();
        for parent in bucket.extends_from() {
            for coord in self.resolved(*parent) {
                if !out.contains(&coord) {
                    out.push(coord);
                }
            }
        }
        out
    }

    /// Coordinates that came from `register_derived`.
    pub fn derived(&self) -> &[String] {
        &self.derived
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(Vec::is_empty)
    }

    fn insert(&mut self, bucket: DependencyBucket, coordinate: &str) -> bool {
        let entries = self.buckets.entry(bucket).or_default();
        if entries.iter().any(|c| c == coordinate) {
            debug!("{} already declares {}", bucket, coordinate);
            return false;
        }
        entries.push(coordinate.to_string());
        true
    }
}

impl DependencyRegistrar for ConfigurationGraph {
    fn add_repository(&mut self, repository: MavenRepository) {
        if self.repositories.iter().any(|r| r.name() == repository.name()) {
            return;
        }
        debug!("Adding repository {}", repository);
        self.repositories.push(repository);
    }

    fn register(&mut self, bucket: DependencyBucket, coordinate: &str) {
        self.insert(bucket, coordinate);
    }

    fn register_derived(&mut self, bucket: DependencyBucket, coordinate: &str) {
        if self.insert(bucket, coordinate) {
            self.derived.push(coordinate.to_string());
        }
    }
}
