mod artifact;
mod repository;

pub use artifact::MavenArtifact;
pub use repository::{default_repositories, MavenRepository, LOOM_CACHE_REPOSITORY};

/// Well-known Maven repositories used by the Minecraft ecosystem.
pub const MOJANG_LIBRARIES: &str = "https://libraries.minecraft.net/";
pub const MAVEN_CENTRAL: &str = "https://repo1.maven.org/maven2/";
pub const FABRIC_MAVEN: &str = "https://maven.fabricmc.net/";
pub const SPONGE_MAVEN: &str = "https://repo.spongepowered.org/maven/";
