//! Shared fixtures for Waypath integration tests: named waypoint sets
//! resolved through `fixtures/manifest.json`. This crate stands in for the
//! excluded input source by supplying already-decoded waypoint lists.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(rename = "waypoint-sets")]
    waypoint_sets: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

/// Names of all waypoint sets declared in the manifest, sorted for
/// deterministic iteration in tests.
pub fn waypoint_set_names() -> Vec<String> {
    let mut names: Vec<String> = MANIFEST.waypoint_sets.keys().cloned().collect();
    names.sort();
    names
}

/// Load a named waypoint set, deserializing into the caller's waypoint
/// type (kept generic so this crate carries no dependency on the core).
pub fn load_waypoint_set<T: DeserializeOwned>(name: &str) -> Result<Vec<T>> {
    let rel = MANIFEST
        .waypoint_sets
        .get(name)
        .ok_or_else(|| anyhow!("unknown waypoint set '{name}'"))?;
    let path = resolve_path(rel);
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("read waypoint set '{name}' from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parse waypoint set '{name}' from {}", path.display()))
}
