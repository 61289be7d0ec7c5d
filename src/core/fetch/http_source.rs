// ─── HTTP Manifest Source ───
// Resolves a version through the Mojang index and caches its JSON on disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};

use super::source::ManifestSource;
use crate::core::downloader::Downloader;
use crate::core::error::{LoomError, LoomResult};
use crate::core::version::{VersionManifest, VERSION_MANIFEST_URL};

pub struct HttpManifestSource {
    downloader: Downloader,
    manifest_url: String,
    versions_dir: PathBuf,
}

impl HttpManifestSource {
    pub fn new(downloader: Downloader, versions_dir: impl Into<PathBuf>) -> Self {
        Self {
            downloader,
            manifest_url: VERSION_MANIFEST_URL.to_string(),
            versions_dir: versions_dir.into(),
        }
    }

    pub fn with_manifest_url(mut self, url: impl Into<String>) -> Self {
        self.manifest_url = url.into();
        self
    }

    pub fn versions_dir(&self) -> &Path {
        &self.versions_dir
    }

    /// Cache location of the JSON for `version`.
    pub fn version_json_path(&self, version: &str) -> PathBuf {
        self.versions_dir.join(format!("{}.json", version))
    }

    /// Fetch the version index.
    pub async fn fetch_index(&self) -> LoomResult<VersionManifest> {
        VersionManifest::fetch(self.downloader.client(), &self.manifest_url).await
    }

    async fn download_version_json(&self, version: &str, dest: &Path) -> LoomResult<()> {
        let manifest = self.fetch_index().await?;
        let entry = manifest
            .find_version(version)
            .ok_or_else(|| LoomError::VersionNotFound(version.to_string()))?;

        // Write next to the target and rename, so an interrupted download
        // never leaves a file that looks cached.
        let partial = dest.with_extension("json.part");
        self.downloader
            .download_file(&entry.url, &partial, entry.sha1.as_deref())
            .await?;
        tokio::fs::rename(&partial, dest)
            .await
            .map_err(|e| LoomError::Io {
                path: dest.to_path_buf(),
                source: e,
            })?;

        info!("Downloaded version JSON for {} to {:?}", version, dest);
        Ok(())
    }
}

#[async_trait]
impl ManifestSource for HttpManifestSource {
    async fn fetch_version_json(&self, version: &str) -> LoomResult<PathBuf> {
        let dest = self.version_json_path(version);

        if tokio::fs::try_exists(&dest).await.unwrap_or(false) {
            debug!("Using cached version JSON {:?}", dest);
            return Ok(dest);
        }

        self.download_version_json(version, &dest)
            .await
            .map_err(|e| e.into_fetch_failure(version))?;
        Ok(dest)
    }
}
