use std::path::PathBuf;

use crate::core::downloader::Downloader;
use crate::core::error::LoomResult;
use crate::core::fetch::HttpManifestSource;
use crate::core::http::build_http_client;
use crate::core::version::VERSION_MANIFEST_URL;

const APP_DIR_NAME: &str = "loom-deps";

/// Everything one invocation needs besides the project settings.
pub struct AppState {
    pub cache_dir: PathBuf,
    pub downloader: Downloader,
    pub manifest_url: String,
}

impl AppState {
    pub fn new(cache_dir: Option<PathBuf>, manifest_url: Option<String>) -> LoomResult<Self> {
        let http_client = build_http_client()?;
        let downloader = Downloader::new(http_client);

        Ok(Self {
            cache_dir: cache_dir.unwrap_or_else(default_cache_dir),
            downloader,
            manifest_url: manifest_url.unwrap_or_else(|| VERSION_MANIFEST_URL.to_string()),
        })
    }

    /// Cached version JSON documents.
    pub fn versions_dir(&self) -> PathBuf {
        self.cache_dir.join("versions")
    }

    /// Flat directory holding the mapped client jars.
    pub fn cache_files_dir(&self) -> PathBuf {
        self.cache_dir.join("files")
    }

    pub fn manifest_source(&self) -> HttpManifestSource {
        HttpManifestSource::new(self.downloader.clone(), self.versions_dir())
            .with_manifest_url(self.manifest_url.clone())
    }
}

fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}
