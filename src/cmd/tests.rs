// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::generate::build_snapshot;
use super::sources::format_sources;
use crate::config::Config;
use crate::output::{check, render, write_atomic};
use crate::snapshot::SourceMode;

const ENTRY: &str = r#"#!/usr/bin/env bash
set -euo pipefail
SERVER_DIR="/opt/pz"
for f in "$SERVER_DIR"/*.ini; do
    echo "$f"
done
exec "${SERVER_DIR}/start-server.sh" -servername "${SERVER_NAME}" -port "$PORT"
"#;

const TEMPLATE: &str = "SERVER_NAME=servertest\n# PORT is optional\n";

const SAMPLE_INI: &str = "PVP=true\n[Steam]\nPort=8766\n";

const SAMPLE_LUA: &str = "SandboxVars = {\n    Zombies = 4,\n    ZombieLore = {\n        Speed = 2,\n    },\n}\n";

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn fixture_repo() -> TempDir {
    let dir = temp_dir();
    write(dir.path(), "scripts/entry.sh", ENTRY);
    write(dir.path(), ".env.template", TEMPLATE);
    write(dir.path(), "smoke/sample.ini", SAMPLE_INI);
    write(dir.path(), "smoke/expected.ini", SAMPLE_INI);
    write(dir.path(), "smoke/sample_sandbox.lua", SAMPLE_LUA);
    dir
}

fn config_for(root: &Path) -> Config {
    Config::builder()
        .with_repo_root(root)
        .set("generate.image_tag", "build41")
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn test_build_snapshot_from_repo_samples() {
    let dir = fixture_repo();
    let snapshot = build_snapshot(&config_for(dir.path()), "2026-02-14").unwrap();

    assert_eq!(snapshot.generated_at(), "2026-02-14");
    assert_eq!(snapshot.image_tag(), Some("build41"));
    assert_eq!(snapshot.sources().source_mode, SourceMode::RepoSamples);

    let handcrafted: Vec<(&str, bool)> = snapshot
        .handcrafted_env()
        .iter()
        .map(|v| (v.name.as_str(), v.documented))
        .collect();
    assert_eq!(handcrafted, vec![("PORT", false), ("SERVER_NAME", true)]);

    let ini: Vec<(&str, usize)> = snapshot
        .ini_env()
        .iter()
        .map(|o| (o.env_name.as_str(), o.sources.len()))
        .collect();
    assert_eq!(ini, vec![("INIVARS_PVP", 2), ("INIVARS_Steam__Port", 2)]);

    let lua: Vec<(&str, &str)> = snapshot
        .lua_env()
        .iter()
        .map(|o| (o.env_name.as_str(), o.path.as_str()))
        .collect();
    assert_eq!(
        lua,
        vec![
            ("SANDBOXVARS_ZombieLore_Speed", "ZombieLore.Speed"),
            ("SANDBOXVARS_Zombies", "Zombies"),
        ]
    );
}

#[test]
fn test_build_snapshot_from_image_extract() {
    let dir = fixture_repo();
    write(
        dir.path(),
        "docs/env_sources/Server/servertest.ini",
        "Public=false\n",
    );

    let snapshot = build_snapshot(&config_for(dir.path()), "2026-02-14").unwrap();
    assert_eq!(snapshot.sources().source_mode, SourceMode::ImageExtract);
    assert!(snapshot.lua_env().is_empty());
    let ini = &snapshot.ini_env()[0];
    assert_eq!(ini.env_name, "INIVARS_Public");
    assert_eq!(ini.sources, vec!["docs/env_sources/Server/servertest.ini"]);
}

#[test]
fn test_build_snapshot_requires_entry() {
    let dir = temp_dir();
    let result = build_snapshot(&config_for(dir.path()), "2026-02-14");
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("required source not found"), "{message}");
}

#[test]
fn test_generated_snapshot_passes_check() {
    let dir = fixture_repo();
    let config = config_for(dir.path());
    let written = build_snapshot(&config, "2026-02-14").unwrap();
    write_atomic(&config.paths.output, &render(&written).unwrap()).unwrap();

    let later = build_snapshot(&config, "2026-09-01").unwrap();
    assert!(check(&config.paths.output, &later).is_ok());

    write(dir.path(), "smoke/sample.ini", "PVP=true\nNewKey=1\n");
    let changed = build_snapshot(&config, "2026-09-01").unwrap();
    assert!(check(&config.paths.output, &changed).is_err());
}

#[test]
fn test_format_sources_lists_plan() {
    let dir = fixture_repo();
    let lines = format_sources(&config_for(dir.path())).unwrap();
    assert_eq!(
        lines,
        vec![
            "mode         = repo_samples",
            "entry        = scripts/entry.sh",
            "env_template = .env.template",
            "ini          = smoke/sample.ini",
            "ini          = smoke/expected.ini",
            "lua          = smoke/sample_sandbox.lua",
            "lua          = smoke/expected_sandbox.lua",
        ]
    );
}
