// ─── loom-deps Core ───
// Version-manifest driven dependency registration for Minecraft mod builds.
//
// Architecture:
//   core/
//     version/      — Mojang index + version JSON descriptor + OS rules
//     maven/        — Coordinates and repository declarations
//     downloader/   — SHA-1 validated downloads
//     fetch/        — Manifest source (cached by file existence)
//     dependencies/ — Buckets, library classifier, configuration registry
//     state/        — Project extension settings + cache layout
//     lifecycle     — The after-evaluate registration pass

pub mod dependencies;
pub mod downloader;
pub mod error;
pub mod fetch;
pub mod http;
pub mod lifecycle;
pub mod maven;
pub mod state;
pub mod version;
