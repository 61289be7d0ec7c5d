pub mod commands;
pub mod core;

use tracing_subscriber::EnvFilter;

pub use crate::core::dependencies::{
    ClassificationResult, ClientKeywordTable, ConfigurationGraph, DependencyBucket,
    DependencyRegistrar, LibraryClassifier,
};
pub use crate::core::error::{LoomError, LoomResult};
pub use crate::core::fetch::{HttpManifestSource, ManifestSource};
pub use crate::core::lifecycle::{after_evaluate, RegistrationSummary};
pub use crate::core::state::{AppState, LoomExtension};
pub use crate::core::version::{LibraryEntry, OsName, Platform, VersionDescriptor};

/// Initialize structured logging. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "info,loom_deps=debug"
    } else {
        "warn,loom_deps=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
