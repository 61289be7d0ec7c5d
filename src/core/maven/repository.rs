use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{FABRIC_MAVEN, MAVEN_CENTRAL, MOJANG_LIBRARIES, SPONGE_MAVEN};

/// Name of the flat-directory repository serving the locally cached jars.
pub const LOOM_CACHE_REPOSITORY: &str = "LoomCacheFiles";

/// A repository declaration handed to the configuration registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MavenRepository {
    /// Remote Maven layout repository.
    Maven { name: String, url: String },
    /// Flat directory, artifacts resolved by file name only.
    FlatDir { name: String, dir: PathBuf },
}

impl MavenRepository {
    pub fn maven(name: &str, url: &str) -> Self {
        Self::Maven {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Maven { name, .. } | Self::FlatDir { name, .. } => name,
        }
    }
}

impl fmt::Display for MavenRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Maven { name, url } => write!(f, "{} ({})", name, url),
            Self::FlatDir { name, dir } => write!(f, "{} ({})", name, dir.display()),
        }
    }
}

/// Repositories declared before any Minecraft dependency is added, in
/// lookup order. The flat directory comes first so the mapped client jar
/// resolves from the cache.
pub fn default_repositories(cache_files: &Path) -> Vec<MavenRepository> {
    vec![
        MavenRepository::FlatDir {
            name: LOOM_CACHE_REPOSITORY.to_string(),
            dir: cache_files.to_path_buf(),
        },
        MavenRepository::maven("FabricMC", FABRIC_MAVEN),
        MavenRepository::maven("SpongePowered", SPONGE_MAVEN),
        MavenRepository::maven("Mojang", MOJANG_LIBRARIES),
        MavenRepository::maven("MavenCentral", MAVEN_CENTRAL),
    ]
}
