use httpmock::prelude::*;
use loom_deps::core::maven::LOOM_CACHE_REPOSITORY;
use loom_deps::commands;
use loom_deps::{
    after_evaluate, AppState, ConfigurationGraph, DependencyBucket, HttpManifestSource, LoomError,
    LoomExtension, OsName, Platform,
};
use reqwest::Client;
use sha1::{Digest, Sha1};
use tempfile::TempDir;

use loom_deps::core::downloader::Downloader;

fn version_json() -> serde_json::Value {
    serde_json::json!({
        "id": "1.12.2",
        "mainClass": "net.minecraft.client.main.Main",
        "libraries": [
            {
                "name": "com.google.guava:guava:21.0",
                "downloads": { "artifact": { "path": "com/google/guava/guava/21.0/guava-21.0.jar", "size": 2521113 } }
            },
            {
                "name": "com.paulscode:soundsystem:20120107",
                "downloads": { "artifact": { "path": "com/paulscode/soundsystem/20120107/soundsystem-20120107.jar" } }
            },
            {
                "name": "org.lwjgl.lwjgl:lwjgl:2.9.4-nightly-20150209",
                "rules": [ { "action": "allow" }, { "action": "disallow", "os": { "name": "osx" } } ],
                "downloads": { "artifact": { "path": "org/lwjgl/lwjgl/lwjgl/2.9.4-nightly-20150209/lwjgl-2.9.4-nightly-20150209.jar" } }
            },
            {
                "name": "org.lwjgl.lwjgl:lwjgl-platform:2.9.4-nightly-20150209",
                "natives": { "linux": "natives-linux", "osx": "natives-osx", "windows": "natives-windows" },
                "rules": [ { "action": "allow" }, { "action": "disallow", "os": { "name": "osx" } } ],
                "downloads": { "classifiers": { "natives-linux": { "path": "natives-linux.jar" } } }
            },
            {
                "name": "ca.weblite:java-objc-bridge:1.0.0",
                "rules": [ { "action": "disallow", "os": { "name": "linux" } } ],
                "downloads": { "artifact": { "path": "ca/weblite/java-objc-bridge-1.0.0.jar" } }
            },
            {
                "name": "com.mojang:legacy-no-downloads:1.0"
            }
        ]
    })
}

fn sha1_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

fn source(server_url: String, cache: &TempDir) -> HttpManifestSource {
    HttpManifestSource::new(Downloader::new(Client::new()), cache.path().join("versions"))
        .with_manifest_url(server_url)
}

fn linux() -> Platform {
    Platform::new(OsName::Linux)
}

#[tokio::test]
async fn registers_libraries_and_derived_artifacts() {
    let cache = TempDir::new().unwrap();
    let server = MockServer::start_async().await;
    let body = serde_json::to_vec(&version_json()).unwrap();

    let index = server
        .mock_async(|when, then| {
            when.method(GET).path("/mc/game/version_manifest_v2.json");
            then.status(200).json_body(serde_json::json!({
                "latest": { "release": "1.12.2", "snapshot": "1.12.2" },
                "versions": [{
                    "id": "1.12.2",
                    "type": "release",
                    "releaseTime": "2017-09-18T08:39:46+00:00",
                    "url": server.url("/v1/packages/1.12.2.json"),
                    "sha1": sha1_hex(&body)
                }]
            }));
        })
        .await;
    let version = server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/packages/1.12.2.json");
            then.status(200).body(body.clone());
        })
        .await;

    let source = source(server.url("/mc/game/version_manifest_v2.json"), &cache);
    let mut extension = LoomExtension::new("1.12.2");
    extension.loader_version = Some("0.3.2".into());
    let classifier = extension.classifier(linux());
    let mut graph = ConfigurationGraph::new();

    let summary = after_evaluate(
        &extension,
        &source,
        &mut graph,
        &classifier,
        &cache.path().join("files"),
    )
    .await
    .unwrap();

    assert_eq!(
        graph.declared(DependencyBucket::Common),
        [
            "com.google.guava:guava:21.0",
            "net.minecraft:minecraft-1.12.2-mapped",
            "net.fabricmc:fabric-base:1.12.2-0.3.2",
        ]
    );
    assert_eq!(
        graph.declared(DependencyBucket::ClientOnly),
        [
            "com.paulscode:soundsystem:20120107",
            "org.lwjgl.lwjgl:lwjgl:2.9.4-nightly-20150209",
        ]
    );
    assert_eq!(
        graph.declared(DependencyBucket::Natives),
        ["org.lwjgl.lwjgl:lwjgl-platform:2.9.4-nightly-20150209:natives-linux"]
    );
    assert_eq!(graph.resolved(DependencyBucket::Common).len(), 5);
    assert_eq!(graph.repositories()[0].name(), LOOM_CACHE_REPOSITORY);

    assert_eq!(summary.libraries, 6);
    assert_eq!(summary.excluded, 2);
    assert_eq!(summary.derived.len(), 2);
    assert!(cache.path().join("versions/1.12.2.json").exists());

    // A second pass is served from the cache.
    let mut second = ConfigurationGraph::new();
    after_evaluate(
        &extension,
        &source,
        &mut second,
        &classifier,
        &cache.path().join("files"),
    )
    .await
    .unwrap();

    index.assert_hits_async(1).await;
    version.assert_hits_async(1).await;
    assert_eq!(
        second.declared(DependencyBucket::Common),
        graph.declared(DependencyBucket::Common)
    );
}

#[tokio::test]
async fn fetch_failure_aborts_before_any_library_is_registered() {
    let cache = TempDir::new().unwrap();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/manifest.json");
            then.status(503);
        })
        .await;

    let source = source(server.url("/manifest.json"), &cache);
    let extension = LoomExtension::new("1.12.2");
    let mut graph = ConfigurationGraph::new();

    let err = after_evaluate(
        &extension,
        &source,
        &mut graph,
        &extension.classifier(linux()),
        &cache.path().join("files"),
    )
    .await
    .unwrap_err();

    match err {
        LoomError::FetchFailure { version, reason } => {
            assert_eq!(version, "1.12.2");
            assert!(reason.contains("503"), "{reason}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(graph.is_empty());
    assert!(graph.derived().is_empty());
    assert!(!cache.path().join("versions/1.12.2.json").exists());
}

#[tokio::test]
async fn unknown_version_is_reported() {
    let cache = TempDir::new().unwrap();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/manifest.json");
            then.status(200)
                .json_body(serde_json::json!({ "versions": [] }));
        })
        .await;

    let source = source(server.url("/manifest.json"), &cache);
    let extension = LoomExtension::new("1.12.2");
    let mut graph = ConfigurationGraph::new();

    let err = after_evaluate(
        &extension,
        &source,
        &mut graph,
        &extension.classifier(linux()),
        &cache.path().join("files"),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, LoomError::VersionNotFound(v) if v == "1.12.2"));
    assert!(graph.is_empty());
}

#[tokio::test]
async fn checksum_mismatch_leaves_no_cached_file() {
    let cache = TempDir::new().unwrap();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/manifest.json");
            then.status(200).json_body(serde_json::json!({
                "versions": [{
                    "id": "1.12.2",
                    "type": "release",
                    "releaseTime": "2017-09-18T08:39:46+00:00",
                    "url": server.url("/1.12.2.json"),
                    "sha1": "0000000000000000000000000000000000000000"
                }]
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/1.12.2.json");
            then.status(200).json_body(version_json());
        })
        .await;

    let source = source(server.url("/manifest.json"), &cache);
    let extension = LoomExtension::new("1.12.2");
    let mut graph = ConfigurationGraph::new();

    let err = after_evaluate(
        &extension,
        &source,
        &mut graph,
        &extension.classifier(linux()),
        &cache.path().join("files"),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, LoomError::Sha1Mismatch { .. }));
    assert!(!cache.path().join("versions/1.12.2.json").exists());
    assert!(graph.is_empty());
}

#[tokio::test]
async fn malformed_cached_manifest_aborts_registration() {
    let cache = TempDir::new().unwrap();
    let versions = cache.path().join("versions");
    std::fs::create_dir_all(&versions).unwrap();
    std::fs::write(versions.join("1.12.2.json"), br#"{ "id": "1.12.2" }"#).unwrap();

    // Never contacted: the cached file short-circuits the fetch.
    let source = source("http://127.0.0.1:9/manifest.json".to_string(), &cache);
    let extension = LoomExtension::new("1.12.2");
    let mut graph = ConfigurationGraph::new();

    let err = after_evaluate(
        &extension,
        &source,
        &mut graph,
        &extension.classifier(linux()),
        &cache.path().join("files"),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, LoomError::MalformedManifest(_)));
    assert!(graph.is_empty());
}

#[tokio::test]
async fn cached_manifest_needs_no_network() {
    let cache = TempDir::new().unwrap();
    let versions = cache.path().join("versions");
    std::fs::create_dir_all(&versions).unwrap();
    std::fs::write(
        versions.join("1.12.2.json"),
        serde_json::to_vec(&version_json()).unwrap(),
    )
    .unwrap();

    let source = source("http://127.0.0.1:9/manifest.json".to_string(), &cache);
    let extension = LoomExtension::new("1.12.2");
    let mut graph = ConfigurationGraph::new();

    let summary = after_evaluate(
        &extension,
        &source,
        &mut graph,
        &extension.classifier(Platform::new(OsName::Osx)),
        &cache.path().join("files"),
    )
    .await
    .unwrap();

    // On osx the LWJGL entries are disallowed and the objc bridge is kept.
    assert_eq!(summary.excluded, 3);
    assert!(graph
        .declared(DependencyBucket::Common)
        .contains(&"ca.weblite:java-objc-bridge:1.0.0".to_string()));
    assert!(graph.declared(DependencyBucket::Natives).is_empty());
    assert_eq!(summary.derived, ["net.minecraft:minecraft-1.12.2-mapped"]);
}

#[tokio::test]
async fn versions_command_lists_releases_from_the_index() {
    let cache = TempDir::new().unwrap();
    let server = MockServer::start_async().await;
    let index = server
        .mock_async(|when, then| {
            when.method(GET).path("/manifest.json");
            then.status(200).json_body(serde_json::json!({
                "versions": [
                    { "id": "17w43a", "type": "snapshot", "releaseTime": "2017-10-25T14:38:38+00:00", "url": "u" },
                    { "id": "1.12.2", "type": "release", "releaseTime": "2017-09-18T08:39:46+00:00", "url": "u" },
                    { "id": "1.14.3 - Combat Test", "type": "release", "releaseTime": "2019-07-01T00:00:00+00:00", "url": "u" },
                    { "id": "1.0 demo", "type": "release", "releaseTime": "2011-11-18T22:00:00+00:00", "url": "u" }
                ]
            }));
        })
        .await;

    let state = AppState::new(
        Some(cache.path().to_path_buf()),
        Some(server.url("/manifest.json")),
    )
    .unwrap();
    let versions = commands::get_minecraft_versions(&state).await.unwrap();

    let ids: Vec<&str> = versions.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, ["1.14.3 - Combat Test", "1.12.2"]);
    index.assert_hits_async(1).await;
}
