use std::fs;

use anyhow::{Context, Result, anyhow};
use camino::Utf8Path;
use rust_embed::RustEmbed;
use serde_json::json;
use tracing::debug;

use crate::blueprint::Blueprint;

#[derive(RustEmbed)]
#[folder = "templates"]
struct Templates;

fn template_bytes(path: &str) -> Result<Vec<u8>> {
    let file =
        Templates::get(path).ok_or_else(|| anyhow!("embedded template `{}` missing", path))?;
    Ok(file.data.as_ref().to_vec())
}

fn write_file(destination: &Utf8Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating directory {}", parent))?;
    }
    fs::write(destination, bytes).with_context(|| format!("writing {}", destination))
}

/// Write the blueprint's boilerplate files under `base`, overwriting
/// unconditionally, then render and write its `package.json`.
pub fn write_initial_content(base: &Utf8Path, blueprint: &Blueprint) -> Result<()> {
    for (destination, template) in blueprint.seed_files {
        let target = base.join(destination);
        write_file(&target, &template_bytes(template)?)?;
        debug!("seeded {}", target);
    }

    let manifest = render_package_manifest(blueprint)?;
    write_file(&base.join("package.json"), manifest.as_bytes())
}

/// `package.json` is assembled here rather than stored as a template so the
/// package name and description stay defined in one place per blueprint.
fn render_package_manifest(blueprint: &Blueprint) -> Result<String> {
    let manifest = json!({
        "name": blueprint.package_name,
        "version": "1.0.0",
        "description": blueprint.description,
        "main": "src/index.js",
        "scripts": {
            "start": "parcel src/index.html",
            "build": "parcel build src/index.html",
            "test": "jest",
            "cypress:open": "cypress open",
            "cypress:run": "cypress run"
        },
        "dependencies": {
            "parcel-bundler": "^1.12.4"
        },
        "devDependencies": {
            "jest": "^27.4.5",
            "cypress": "^8.7.0"
        },
        "author": "Your Name",
        "license": "MIT"
    });
    serde_json::to_string_pretty(&manifest).context("serializing package manifest")
}
