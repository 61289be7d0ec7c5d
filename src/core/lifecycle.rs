// ─── After Evaluate ───
// The dependency pass the host runs once the project configuration is final:
// repositories → fetch → parse → classify-each → register-each → register-derived.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::dependencies::{
    base_artifact_coordinate, client_jar_coordinate, mapped_client_jar_name, DependencyBucket,
    DependencyRegistrar, LibraryClassifier,
};
use crate::core::error::{LoomError, LoomResult};
use crate::core::fetch::ManifestSource;
use crate::core::maven::default_repositories;
use crate::core::state::LoomExtension;
use crate::core::version::VersionDescriptor;

/// What a registration pass added to the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationSummary {
    pub version: String,
    pub libraries: usize,
    pub common: usize,
    pub client_only: usize,
    pub natives: usize,
    pub excluded: usize,
    pub derived: Vec<String>,
}

impl RegistrationSummary {
    fn count(&mut self, bucket: DependencyBucket) {
        match bucket {
            DependencyBucket::Common => self.common += 1,
            DependencyBucket::ClientOnly => self.client_only += 1,
            DependencyBucket::Natives => self.natives += 1,
        }
    }
}

/// Run the full dependency pass for `extension`.
///
/// Nothing from the manifest is registered unless fetching and parsing both
/// succeed.
pub async fn after_evaluate(
    extension: &LoomExtension,
    source: &dyn ManifestSource,
    registrar: &mut dyn DependencyRegistrar,
    classifier: &LibraryClassifier,
    cache_files: &Path,
) -> LoomResult<RegistrationSummary> {
    extension.validate()?;
    let version = extension.target_version.trim();

    for repository in default_repositories(cache_files) {
        registrar.add_repository(repository);
    }

    let path = source.fetch_version_json(version).await?;
    let raw = tokio::fs::read(&path)
        .await
        .map_err(|e| {
            LoomError::Io {
                path: path.clone(),
                source: e,
            }
            .into_fetch_failure(version)
        })?;
    let descriptor = VersionDescriptor::parse(&raw)?;

    if descriptor.main_artifact_id != version {
        warn!(
            "Version JSON at {:?} describes {}, expected {}",
            path, descriptor.main_artifact_id, version
        );
    }

    let mut summary = register_libraries(&descriptor, registrar, classifier)?;
    register_derived(extension, &descriptor, registrar, &mut summary);

    info!(
        "Registered Minecraft {} dependencies: {} common, {} client, {} natives, {} excluded",
        summary.version, summary.common, summary.client_only, summary.natives, summary.excluded
    );
    Ok(summary)
}

/// Classify every library of `descriptor` and register the included ones.
///
/// Entries with a native classifier for the platform also get their
/// classifier coordinate in [`DependencyBucket::Natives`]; when they ship no
/// plain artifact, that is their only registration.
pub fn register_libraries(
    descriptor: &VersionDescriptor,
    registrar: &mut dyn DependencyRegistrar,
    classifier: &LibraryClassifier,
) -> LoomResult<RegistrationSummary> {
    let mut summary = RegistrationSummary {
        version: descriptor.main_artifact_id.clone(),
        libraries: descriptor.libraries.len(),
        ..RegistrationSummary::default()
    };

    for library in &descriptor.libraries {
        let result = classifier.classify(library);
        if !result.include {
            summary.excluded += 1;
            continue;
        }

        let artifact = library
            .artifact()
            .map_err(|e| LoomError::MalformedManifest(e.to_string()))?;
        let native = library.native_classifier(classifier.platform());
        let has_plain_artifact = library
            .downloads
            .as_ref()
            .is_some_and(|d| d.artifact.is_some());

        if !library.natives.is_empty() && native.is_none() && !has_plain_artifact {
            debug!(
                "Skipping library (no natives for {}): {}",
                classifier.platform(),
                library.name
            );
            summary.excluded += 1;
            continue;
        }

        if native.is_none() || has_plain_artifact {
            debug!("{} -> {}", library.name, result.bucket);
            registrar.register(result.bucket, &artifact.coordinate());
            summary.count(result.bucket);
        }

        if let Some(native) = native {
            let coordinate = artifact.with_classifier(&native).coordinate();
            debug!("{} -> {}", coordinate, DependencyBucket::Natives);
            registrar.register(DependencyBucket::Natives, &coordinate);
            summary.count(DependencyBucket::Natives);
        }
    }

    Ok(summary)
}

/// Register the coordinates the manifest does not list: the mapped client
/// jar, and the base artifact when a loader version is configured.
pub fn register_derived(
    extension: &LoomExtension,
    descriptor: &VersionDescriptor,
    registrar: &mut dyn DependencyRegistrar,
    summary: &mut RegistrationSummary,
) {
    let client_jar = client_jar_coordinate(&mapped_client_jar_name(&descriptor.main_artifact_id));
    registrar.register_derived(DependencyBucket::Common, &client_jar);
    summary.derived.push(client_jar);

    if let Some(base) = base_artifact_coordinate(
        extension.target_version.trim(),
        extension.loader_version(),
    ) {
        registrar.register_derived(DependencyBucket::Common, &base);
        summary.derived.push(base);
    } else {
        debug!("No loader version configured, skipping base artifact");
    }
}
