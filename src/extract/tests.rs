// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::naming::{
    decode_ini_name, decode_sandbox_name, ini_env_name, sandbox_env_name,
};

#[test]
fn test_ini_env_name() {
    insta::assert_yaml_snapshot!(
        vec![
            ini_env_name("", "PVP"),
            ini_env_name("Server", "Port"),
            ini_env_name("Foo", "Bar"),
            ini_env_name("Steam", "UPnP_Port"),
        ],
        @r"
    - INIVARS_PVP
    - INIVARS_Server__Port
    - INIVARS_Foo__Bar
    - INIVARS_Steam__UPnP_Port
    "
    );
}

#[test]
fn test_ini_env_name_is_deterministic() {
    let first = ini_env_name("Foo", "Bar");
    for _ in 0..8 {
        assert_eq!(ini_env_name("Foo", "Bar"), first);
    }
    assert_eq!(first, "INIVARS_Foo__Bar");
}

#[test]
fn test_sandbox_env_name() {
    assert_eq!(sandbox_env_name(&["Zombies"]), "SANDBOXVARS_Zombies");
    assert_eq!(sandbox_env_name(&["A", "B"]), "SANDBOXVARS_A_B");
    assert_eq!(sandbox_env_name(&["X_Y"]), "SANDBOXVARS_X__Y");
    assert_eq!(
        sandbox_env_name(&["Zombie_Lore", "Speed"]),
        "SANDBOXVARS_Zombie__Lore_Speed"
    );
}

#[test]
fn test_sandbox_encoding_collides_on_edge_underscores() {
    let left = sandbox_env_name(&["A_", "B"]);
    let right = sandbox_env_name(&["A", "_B"]);
    assert_eq!(left, "SANDBOXVARS_A___B");
    assert_eq!(left, right);
    // Decoding picks the leftmost reading.
    assert_eq!(
        decode_sandbox_name(&left),
        Some(vec!["A_".to_string(), "B".to_string()])
    );
}

#[test]
fn test_sandbox_round_trip() {
    let paths: [&[&str]; 4] = [
        &["Zombies"],
        &["X_Y"],
        &["X", "Y"],
        &["ZombieLore", "Active_Only", "Mode"],
    ];
    for path in paths {
        let name = sandbox_env_name(path);
        let decoded = decode_sandbox_name(&name).unwrap();
        assert_eq!(decoded, path, "round trip of {name}");
    }
}

#[test]
fn test_decode_sandbox_name_rejects_malformed() {
    assert_eq!(decode_sandbox_name("INIVARS_X"), None);
    assert_eq!(decode_sandbox_name("SANDBOXVARS_"), None);
    assert_eq!(decode_sandbox_name("SANDBOXVARS_A_"), None);
}

#[test]
fn test_decode_ini_name() {
    assert_eq!(
        decode_ini_name("INIVARS_Server__Port"),
        Some(("Server".to_string(), "Port".to_string()))
    );
    assert_eq!(
        decode_ini_name("INIVARS_PVP"),
        Some((String::new(), "PVP".to_string()))
    );
    assert_eq!(decode_ini_name("INIVARS_"), None);
    assert_eq!(decode_ini_name("SANDBOXVARS_PVP"), None);
}
