//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::{app, config_from_args, fetch};
use std::env;
use std::fs;
use tile_fetch_core::core::{ApplicationCfg, Error, Result};

fn parse_args(args: &[&str]) -> Result<ApplicationCfg> {
    let mut argv = vec!["tile_fetch"];
    argv.extend_from_slice(args);
    let matches = app().get_matches_from(argv);
    config_from_args(&matches)
}

#[test]
fn test_defaults() {
    let config = parse_args(&["--lat", "40.0", "--lng", "-74.0"]).unwrap();
    assert_eq!(config.grid.center, Some((40.0, -74.0)));
    assert_eq!(config.grid.zoom, 3);
    assert_eq!(config.grid.size, 256);
    assert_eq!(config.output.folder, None);
    assert_eq!(config.fetch.workers, None);
    assert_eq!(config.fetch.progress, Some(false));
}

#[test]
fn test_negative_values() {
    let config = parse_args(&["--lat", "-33.86", "--lng", "-151.2", "--zoom", "12"]).unwrap();
    assert_eq!(config.grid.center, Some((-33.86, -151.2)));
    assert_eq!(config.grid.zoom, 12);
}

#[test]
fn test_flag_overrides() {
    let config = parse_args(&[
        "--lat",
        "1.5",
        "--lng",
        "2.5",
        "--size",
        "512",
        "--folder",
        "/tmp/tiles",
        "--api-key",
        "secret",
        "--workers",
        "4",
        "--progress",
        "true",
    ])
    .unwrap();
    assert_eq!(config.grid.size, 512);
    assert_eq!(config.output.folder, Some("/tmp/tiles".to_string()));
    assert_eq!(config.provider.api_key, "secret");
    assert_eq!(config.fetch.workers, Some(4));
    assert_eq!(config.fetch.progress, Some(true));
}

#[test]
fn test_flags_override_config_file() {
    let mut path = env::temp_dir();
    path.push("tile_fetch_test_cli.toml");
    fs::write(
        &path,
        r#"
[grid]
center = [47.0, 8.0]
zoom = 5
size = 512

[output]
folder = "/tmp/from_config"

[fetch]
workers = 2
"#,
    )
    .unwrap();
    let cfgpath = path.to_str().unwrap();

    let config = parse_args(&["-c", cfgpath]).unwrap();
    assert_eq!(config.grid.center, Some((47.0, 8.0)));
    assert_eq!(config.grid.zoom, 5);

    let config = parse_args(&["-c", cfgpath, "--zoom", "7", "--lat", "46.5"]).unwrap();
    // lng is taken from the config file
    assert_eq!(config.grid.center, Some((46.5, 8.0)));
    assert_eq!(config.grid.zoom, 7);
    assert_eq!(config.grid.size, 512);
    assert_eq!(config.output.folder, Some("/tmp/from_config".to_string()));
    assert_eq!(config.fetch.workers, Some(2));
}

#[test]
fn test_invalid_values() {
    for args in vec![
        vec!["--lat", "abc", "--lng", "8.0"],
        vec!["--lat", "47.0", "--lng", "8.0", "--zoom", "high"],
        vec!["--lat", "47.0", "--lng", "8.0", "--progress", "maybe"],
    ] {
        match parse_args(&args) {
            Err(Error::Configuration(_)) => {}
            other => panic!("{:?}: unexpected {:?}", args, other),
        }
    }
    match parse_args(&["-c", "/nonexistent/tile_fetch.toml"]) {
        Err(Error::Configuration(msg)) => assert_eq!(msg, "Could not find config file!"),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_invalid_center_before_output() {
    let mut dir = env::temp_dir();
    dir.push("tile_fetch_test_cli_no_output");
    let _ = fs::remove_dir_all(&dir);
    let folder = dir.to_str().unwrap();

    for args in vec![
        vec!["tile_fetch", "--lat", "abc", "--lng", "8.0", "--folder", folder],
        vec!["tile_fetch", "--lng", "8.0", "--folder", folder],
        vec!["tile_fetch", "--lat", "0", "--lng", "8.0", "--folder", folder],
    ] {
        let matches = app().get_matches_from(args.clone());
        match fetch(&matches) {
            Err(Error::Configuration(_)) => {}
            other => panic!("{:?}: unexpected {:?}", args, other),
        }
        assert!(!dir.exists());
    }
}
