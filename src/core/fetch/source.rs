use std::path::PathBuf;

use async_trait::async_trait;

use crate::core::error::LoomResult;

/// Makes a version JSON available on local storage.
#[async_trait]
pub trait ManifestSource: Send + Sync {
    /// Return the local path of the version JSON for `version`, acquiring it
    /// first when needed. Failures are fatal for the current evaluation.
    async fn fetch_version_json(&self, version: &str) -> LoomResult<PathBuf>;
}
