use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const MANIFEST_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppEntry {
    app_id: String,
    title: String,
    icon: String,
    show_on_desktop: bool,
    show_in_launcher: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct AppCatalogManifest {
    schema_version: u32,
    apps: Vec<AppEntry>,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("apps.manifest.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: AppCatalogManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if manifest.schema_version != MANIFEST_SCHEMA_VERSION {
        panic!(
            "manifest schema mismatch in {}: expected {} found {}",
            path.display(),
            MANIFEST_SCHEMA_VERSION,
            manifest.schema_version
        );
    }

    let mut seen = BTreeSet::new();
    for entry in &manifest.apps {
        if entry.app_id.trim().is_empty() {
            panic!("empty app_id in {}", path.display());
        }
        if !seen.insert(entry.app_id.clone()) {
            panic!("duplicate app_id `{}` in {}", entry.app_id, path.display());
        }
    }

    // Manifest order is desktop/launcher order, so it is kept as-is.
    let json = serde_json::to_string_pretty(&manifest.apps).expect("serialize app catalog");
    let generated = format!(
        "/// Build-time generated app catalog JSON.\n\
pub const APP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
