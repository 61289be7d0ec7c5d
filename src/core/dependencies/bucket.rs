use std::fmt;

use serde::{Deserialize, Serialize};

/// Configuration holding every Minecraft library, client ones included.
pub const CONFIG_MC_DEPENDENCIES: &str = "minecraftDependencies";
/// Configuration holding client-only libraries (LWJGL, sound, input...).
pub const CONFIG_MC_DEPENDENCIES_CLIENT: &str = "minecraftClientDependencies";
/// Configuration holding platform native classifiers.
pub const CONFIG_NATIVES: &str = "natives";

/// Named dependency configuration a coordinate is registered into.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DependencyBucket {
    Common,
    ClientOnly,
    Natives,
}

impl DependencyBucket {
    pub const ALL: [DependencyBucket; 3] = [
        DependencyBucket::Common,
        DependencyBucket::ClientOnly,
        DependencyBucket::Natives,
    ];

    /// Name of the backing configuration in the build graph.
    pub fn config_name(&self) -> &'static str {
        match self {
            DependencyBucket::Common => CONFIG_MC_DEPENDENCIES,
            DependencyBucket::ClientOnly => CONFIG_MC_DEPENDENCIES_CLIENT,
            DependencyBucket::Natives => CONFIG_NATIVES,
        }
    }

    /// Buckets whose contents this bucket inherits when resolved.
    pub fn extends_from(&self) -> &'static [DependencyBucket] {
        match self {
            DependencyBucket::Common => &[DependencyBucket::ClientOnly],
            _ => &[],
        }
    }
}

impl fmt::Display for DependencyBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_name())
    }
}
