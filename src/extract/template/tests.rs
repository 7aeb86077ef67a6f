// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::documented_keys;

#[test]
fn test_documented_keys() {
    let template = "\
# Server settings
SERVER_NAME=pzserver
  ADMIN_PASSWORD=
#STEAM_BRANCH=unstable
lowercase=ignored
export PORT=16261
MAX_PLAYERS = 16
";
    let keys: Vec<String> = documented_keys(template).into_iter().collect();
    assert_eq!(keys, vec!["ADMIN_PASSWORD", "SERVER_NAME"]);
}

#[test]
fn test_empty_template() {
    assert!(documented_keys("").is_empty());
}
