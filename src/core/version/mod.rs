pub mod manifest;
pub mod platform;
pub mod version_file;

pub use manifest::{VersionEntry, VersionManifest, VERSION_MANIFEST_URL};
pub use platform::{OsName, Platform};
pub use version_file::{
    evaluate_rules, LibDownloadArtifact, LibraryDownloads, LibraryEntry, OsRule, Rule,
    RuleAction, VersionDescriptor,
};
