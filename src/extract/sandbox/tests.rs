// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ScanState, TableScanner, extract_table_overrides};
use crate::extract::SourceDocument;
use crate::extract::naming::decode_sandbox_name;

const SANDBOX_LUA: &str = r#"
SandboxVars = {
    VERSION = 5,
    -- Zombie settings
    Zombies = 4,
    StartMonth = 7,
    ZombieLore = {
        Speed = 2,
        Strength = 2,
        ActiveOnly = 1,
    },
    ZombieConfig = {
        PopulationMultiplier = 1.0,
        RespawnHours = 72.0,
    },
    Map = {
        AllowMiniMap = false,
        MapAllKnown = true,
    },
    Loot_Rarity = 3,
}
"#;

fn doc(id: &str, text: &str) -> SourceDocument {
    SourceDocument::new(id, text)
}

#[test]
fn test_sandbox_paths_and_names() {
    let set = extract_table_overrides(&[doc("smoke/sample_sandbox.lua", SANDBOX_LUA)]);
    let rows: Vec<(String, String)> = set
        .overrides
        .iter()
        .map(|o| (o.path.clone(), o.env_name.clone()))
        .collect();
    insta::assert_yaml_snapshot!(rows, @r"
    - - VERSION
      - SANDBOXVARS_VERSION
    - - Zombies
      - SANDBOXVARS_Zombies
    - - StartMonth
      - SANDBOXVARS_StartMonth
    - - ZombieLore.Speed
      - SANDBOXVARS_ZombieLore_Speed
    - - ZombieLore.Strength
      - SANDBOXVARS_ZombieLore_Strength
    - - ZombieLore.ActiveOnly
      - SANDBOXVARS_ZombieLore_ActiveOnly
    - - ZombieConfig.PopulationMultiplier
      - SANDBOXVARS_ZombieConfig_PopulationMultiplier
    - - ZombieConfig.RespawnHours
      - SANDBOXVARS_ZombieConfig_RespawnHours
    - - Map.AllowMiniMap
      - SANDBOXVARS_Map_AllowMiniMap
    - - Map.MapAllKnown
      - SANDBOXVARS_Map_MapAllKnown
    - - Loot_Rarity
      - SANDBOXVARS_Loot__Rarity
    ");
}

#[test]
fn test_nested_then_sibling_leaf() {
    let lua = "SandboxVars = {\n  A = {\n    B = 1\n  },\n  C = 2\n}\n";
    let set = extract_table_overrides(&[doc("s.lua", lua)]);
    let paths: Vec<&str> = set.overrides.iter().map(|o| o.path.as_str()).collect();
    assert_eq!(paths, vec!["A.B", "C"]);
    assert_eq!(set.env_names(), vec!["SANDBOXVARS_A_B", "SANDBOXVARS_C"]);
}

#[test]
fn test_deeply_nested_siblings() {
    let lua = "\
SandboxVars = {
    Outer = {
        Left = {
            X = 1,
        },
        Right = {
            Y = 2,
        },
        Z = 3,
    },
    W = 4,
}
";
    let set = extract_table_overrides(&[doc("s.lua", lua)]);
    let paths: Vec<&str> = set.overrides.iter().map(|o| o.path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["Outer.Left.X", "Outer.Right.Y", "Outer.Z", "W"]
    );
}

#[test]
fn test_underscore_segment_vs_two_segments() {
    let single = extract_table_overrides(&[doc("a.lua", "SandboxVars = {\nX_Y = 1\n}\n")]);
    let nested = extract_table_overrides(&[doc("b.lua", "SandboxVars = {\nX = {\nY = 1\n}\n}\n")]);

    let single_name = &single.overrides[0].env_name;
    let nested_name = &nested.overrides[0].env_name;
    assert_eq!(single_name, "SANDBOXVARS_X__Y");
    assert_eq!(nested_name, "SANDBOXVARS_X_Y");
    assert_ne!(single_name, nested_name);

    assert_eq!(decode_sandbox_name(single_name), Some(vec!["X_Y".to_string()]));
    assert_eq!(
        decode_sandbox_name(nested_name),
        Some(vec!["X".to_string(), "Y".to_string()])
    );
}

#[test]
fn test_ambiguous_encoding_is_reported_not_fixed() {
    let lua = "\
SandboxVars = {
    A_ = {
        B = 1,
    },
    A = {
        _B = 2,
    },
}
";
    let set = extract_table_overrides(&[doc("s.lua", lua)]);
    assert_eq!(set.env_names(), vec!["SANDBOXVARS_A___B"]);
    assert_eq!(set.overrides[0].path, "A_.B");
    assert_eq!(set.overrides[0].sources, vec!["s.lua", "s.lua"]);
    assert_eq!(set.collisions.len(), 1);
    assert_eq!(set.collisions[0].existing, "A_.B");
    assert_eq!(set.collisions[0].incoming, "A._B");
}

#[test]
fn test_lines_outside_table_are_ignored() {
    let lua = "\
Other = {
    Ignored = 1,
}
SandboxVars = {
    Kept = 1,
}
After = 2
";
    let set = extract_table_overrides(&[doc("s.lua", lua)]);
    assert_eq!(set.env_names(), vec!["SANDBOXVARS_Kept"]);
}

#[test]
fn test_marker_must_stand_alone() {
    let lua = "SandboxVars = { Inline = 1 }\nLocal = 2\n";
    let set = extract_table_overrides(&[doc("s.lua", lua)]);
    assert!(set.overrides.is_empty());
}

#[test]
fn test_comments_inside_table_are_skipped() {
    let lua = "SandboxVars = {\n  -- Hidden = 1,\n  --[[ Block = 2 ]]\n  Shown = 3,\n}\n";
    let set = extract_table_overrides(&[doc("s.lua", lua)]);
    assert_eq!(set.env_names(), vec!["SANDBOXVARS_Shown"]);
}

#[test]
fn test_merge_across_files() {
    let lua = "SandboxVars = {\n  Zombies = 4,\n}\n";
    let set = extract_table_overrides(&[
        doc("smoke/sample_sandbox.lua", lua),
        doc("smoke/expected_sandbox.lua", lua),
    ]);
    assert_eq!(set.overrides.len(), 1);
    assert_eq!(
        set.overrides[0].sources,
        vec!["smoke/sample_sandbox.lua", "smoke/expected_sandbox.lua"]
    );
}

#[test]
fn test_scanner_returns_outside_after_final_brace() {
    let mut scanner = TableScanner::new();
    for line in ["SandboxVars = {", "A = {", "}", "}"] {
        assert!(scanner.feed(line).is_none());
    }
    assert_eq!(scanner.state, ScanState::Outside);
    assert!(scanner.feed("B = 1").is_none());
}
