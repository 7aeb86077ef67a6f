// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::encoding::{TextEncoding, decode_text};
use super::walk::{WalkOptions, find_files};
use super::{SourcePlan, source_id};
use crate::config::Config;
use crate::error::SourceError;
use crate::snapshot::SourceMode;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn write(root: &Path, rel: &str, content: &[u8]) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn config_for(root: &Path) -> Config {
    Config::builder().with_repo_root(root).build().unwrap()
}

#[test]
fn test_source_id_is_root_relative() {
    assert_eq!(
        source_id(Path::new("/repo"), Path::new("/repo/smoke/sample.ini")),
        "smoke/sample.ini"
    );
    assert_eq!(
        source_id(Path::new("."), Path::new("./scripts/entry.sh")),
        "scripts/entry.sh"
    );
}

#[test]
fn test_source_id_outside_root_keeps_path() {
    assert_eq!(
        source_id(Path::new("/repo"), Path::new("/elsewhere/a.lua")),
        "/elsewhere/a.lua"
    );
}

#[test]
fn test_decode_plain_utf8() {
    let (text, encoding) = decode_text("Public=true\n".as_bytes());
    assert_eq!(text, "Public=true\n");
    assert_eq!(encoding, TextEncoding::Utf8);
}

#[test]
fn test_decode_strips_utf8_bom() {
    let (text, encoding) = decode_text(b"\xEF\xBB\xBFPVP=true");
    assert_eq!(text, "PVP=true");
    assert_eq!(encoding, TextEncoding::Utf8Bom);
    assert!(!encoding.is_fallback());
}

#[test]
fn test_decode_utf16le() {
    let (text, encoding) = decode_text(b"\xFF\xFEA\x00=\x001\x00");
    assert_eq!(text, "A=1");
    assert_eq!(encoding, TextEncoding::Utf16Le);
}

#[test]
fn test_decode_windows_1252_fallback() {
    let (text, encoding) = decode_text(b"ServerWelcomeMessage=caf\xe9");
    assert_eq!(text, "ServerWelcomeMessage=café");
    assert!(encoding.is_fallback());
}

#[test]
fn test_find_files_sorted_and_filtered() {
    let dir = temp_dir();
    write(dir.path(), "Server/b.ini", b"");
    write(dir.path(), "Server/a.ini", b"");
    write(dir.path(), "Server/a_SandboxVars.lua", b"");
    write(dir.path(), ".hidden/c.ini", b"");

    let files = find_files(dir.path(), "**/*.ini", &WalkOptions::default()).unwrap();
    let rel: Vec<String> = files
        .iter()
        .map(|p| source_id(dir.path(), p))
        .collect();
    assert_eq!(rel, vec![".hidden/c.ini", "Server/a.ini", "Server/b.ini"]);
}

#[test]
fn test_find_files_can_skip_hidden() {
    let dir = temp_dir();
    write(dir.path(), "a.ini", b"");
    write(dir.path(), ".hidden/c.ini", b"");

    let options = WalkOptions::builder().with_include_hidden(false).build();
    let files = find_files(dir.path(), "**/*.ini", &options).unwrap();
    assert_eq!(files, vec![dir.path().join("a.ini")]);
}

#[test]
fn test_find_files_rejects_missing_root() {
    let dir = temp_dir();
    let result = find_files(dir.path().join("nope"), "**/*.ini", &WalkOptions::default());
    assert!(matches!(result, Err(SourceError::Discovery { .. })));
}

#[test]
fn test_discover_falls_back_to_repo_samples() {
    let dir = temp_dir();
    let plan = SourcePlan::discover(&config_for(dir.path())).unwrap();

    assert_eq!(plan.mode(), SourceMode::RepoSamples);
    let info = plan.source_info();
    assert_eq!(info.entry, "scripts/entry.sh");
    assert_eq!(info.env_template, ".env.template");
    assert_eq!(info.ini_files, vec!["smoke/sample.ini", "smoke/expected.ini"]);
    assert_eq!(
        info.lua_files,
        vec!["smoke/sample_sandbox.lua", "smoke/expected_sandbox.lua"]
    );
}

#[test]
fn test_discover_empty_sources_dir_uses_samples() {
    let dir = temp_dir();
    write(dir.path(), "docs/env_sources/readme.txt", b"nothing here");
    let plan = SourcePlan::discover(&config_for(dir.path())).unwrap();
    assert_eq!(plan.mode(), SourceMode::RepoSamples);
}

#[test]
fn test_discover_prefers_image_extract() {
    let dir = temp_dir();
    write(dir.path(), "docs/env_sources/Server/servertest.ini", b"PVP=true\n");
    write(
        dir.path(),
        "docs/env_sources/Server/servertest_SandboxVars.lua",
        b"SandboxVars = {\n    Zombies = 4,\n}\n",
    );

    let plan = SourcePlan::discover(&config_for(dir.path())).unwrap();
    assert_eq!(plan.mode(), SourceMode::ImageExtract);
    let info = plan.source_info();
    assert_eq!(info.ini_files, vec!["docs/env_sources/Server/servertest.ini"]);
    assert_eq!(
        info.lua_files,
        vec!["docs/env_sources/Server/servertest_SandboxVars.lua"]
    );
}

#[test]
fn test_load_requires_entry() {
    let dir = temp_dir();
    let plan = SourcePlan::discover(&config_for(dir.path())).unwrap();
    let result = plan.load();
    assert!(matches!(result, Err(SourceError::NotFound(_))));
}

#[test]
fn test_load_skips_missing_optional_files() {
    let dir = temp_dir();
    write(dir.path(), "scripts/entry.sh", b"echo \"$PORT\"\n");
    write(dir.path(), "smoke/sample.ini", b"PVP=true\n");

    let plan = SourcePlan::discover(&config_for(dir.path())).unwrap();
    let loaded = plan.load().unwrap();

    assert_eq!(loaded.entry.id(), "scripts/entry.sh");
    assert_eq!(loaded.entry.text(), "echo \"$PORT\"\n");
    assert!(loaded.env_template.is_none());
    let ini_ids: Vec<&str> = loaded.ini.iter().map(|d| d.id()).collect();
    assert_eq!(ini_ids, vec!["smoke/sample.ini"]);
    assert!(loaded.lua.is_empty());
}

#[test]
fn test_load_unreadable_sample_is_unavailable() {
    let dir = temp_dir();
    write(dir.path(), "scripts/entry.sh", b"true\n");
    fs::create_dir_all(dir.path().join("smoke/sample.ini")).unwrap();

    let plan = SourcePlan::discover(&config_for(dir.path())).unwrap();
    let result = plan.load();
    assert!(
        matches!(&result, Err(SourceError::Unavailable { path, .. }) if path.ends_with("smoke/sample.ini")),
        "expected unavailable source, got {result:?}"
    );

    fs::remove_dir(dir.path().join("smoke/sample.ini")).unwrap();
    let loaded = plan.load().unwrap();
    assert!(loaded.ini.is_empty());
}

#[test]
fn test_load_decodes_legacy_bytes() {
    let dir = temp_dir();
    write(dir.path(), "scripts/entry.sh", b"true\n");
    write(dir.path(), "smoke/sample.ini", b"ServerWelcomeMessage=caf\xe9\n");

    let loaded = SourcePlan::discover(&config_for(dir.path()))
        .unwrap()
        .load()
        .unwrap();
    assert_eq!(loaded.ini[0].text(), "ServerWelcomeMessage=café\n");
}
