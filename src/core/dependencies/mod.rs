pub mod bucket;
pub mod classifier;
pub mod registrar;

pub use bucket::{DependencyBucket, CONFIG_MC_DEPENDENCIES, CONFIG_MC_DEPENDENCIES_CLIENT, CONFIG_NATIVES};
pub use classifier::{
    ClassificationResult, ClientKeywordTable, LibraryClassifier, DEFAULT_CLIENT_KEYWORDS,
};
pub use registrar::{
    base_artifact_coordinate, client_jar_coordinate, mapped_client_jar_name, ConfigurationGraph,
    DependencyRegistrar,
};
