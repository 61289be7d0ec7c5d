use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the dependency resolution core.
/// Every module returns `Result<T, LoomError>`.
#[derive(Debug, Error)]
pub enum LoomError {
    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Network ─────────────────────────────────────────
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Download failed for {url}: HTTP {status}")]
    DownloadFailed { url: String, status: u16 },

    // ── Integrity ───────────────────────────────────────
    #[error("SHA-1 mismatch for {path:?}: expected {expected}, got {actual}")]
    Sha1Mismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    // ── Manifest ────────────────────────────────────────
    #[error("Failed to fetch manifest for Minecraft {version}: {reason}")]
    FetchFailure { version: String, reason: String },

    #[error("Minecraft version {0} not found in version manifest")]
    VersionNotFound(String),

    #[error("Malformed manifest: {0}")]
    MalformedManifest(String),

    // ── Maven ───────────────────────────────────────────
    #[error("Invalid Maven coordinate: {0}")]
    InvalidMavenCoordinate(String),

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Configuration ───────────────────────────────────
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the crate.
pub type LoomResult<T> = Result<T, LoomError>;

impl From<std::io::Error> for LoomError {
    fn from(source: std::io::Error) -> Self {
        LoomError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}

impl LoomError {
    /// Wrap any acquisition error into a `FetchFailure` for `version`.
    ///
    /// Integrity and lookup errors are already specific, so they pass through.
    pub fn into_fetch_failure(self, version: &str) -> Self {
        match self {
            e @ (LoomError::FetchFailure { .. }
            | LoomError::VersionNotFound(_)
            | LoomError::Sha1Mismatch { .. }) => e,
            other => LoomError::FetchFailure {
                version: version.to_string(),
                reason: other.to_string(),
            },
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoomError::Config(_) => 2,
            LoomError::MalformedManifest(_) | LoomError::InvalidMavenCoordinate(_) => 3,
            _ => 1,
        }
    }
}
