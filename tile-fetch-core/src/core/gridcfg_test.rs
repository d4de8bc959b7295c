//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::GridCfg;
use crate::core::{center_coordinate, center_from_config, Config, Error};
use tile_grid::{Coordinate, TileGrid};

#[test]
fn test_grid_from_config() {
    let grid = TileGrid::from_config(&GridCfg::default()).unwrap();
    assert_eq!(grid, TileGrid::default());

    let cfg = GridCfg {
        center: None,
        zoom: 10,
        size: 512,
    };
    let grid = TileGrid::from_config(&cfg).unwrap();
    assert_eq!(grid.zoom(), 10);
    assert_eq!(grid.tile_size(), 512);

    let cfg = GridCfg {
        center: None,
        zoom: 3,
        size: 0,
    };
    assert!(TileGrid::from_config(&cfg).is_err());
}

#[test]
fn test_center_coordinate() {
    assert_eq!(
        center_coordinate(Some(40.0), Some(-74.0)).unwrap(),
        Coordinate::new(40.0, -74.0)
    );
    // Out of range values are projected with clamped latitude
    assert_eq!(
        center_coordinate(Some(95.0), Some(190.0)).unwrap(),
        Coordinate::new(95.0, 190.0)
    );

    for (lat, lng) in vec![
        (None, Some(1.0)),
        (Some(1.0), None),
        (None, None),
        (Some(std::f64::NAN), Some(1.0)),
        (Some(1.0), Some(std::f64::INFINITY)),
    ] {
        match center_coordinate(lat, lng) {
            Err(Error::Configuration(_)) => {}
            other => panic!("{:?}/{:?}: unexpected {:?}", lat, lng, other),
        }
    }
}

#[test]
fn test_zero_center_is_missing() {
    for (lat, lng) in vec![(0.0, 10.0), (10.0, 0.0), (0.0, 0.0), (-0.0, 8.5)] {
        match center_coordinate(Some(lat), Some(lng)) {
            Err(Error::Configuration(msg)) => assert_eq!(msg, "Lat/Lng is required"),
            other => panic!("{}/{}: unexpected {:?}", lat, lng, other),
        }
    }
}

#[test]
fn test_center_from_config() {
    let mut cfg = GridCfg::default();
    match center_from_config(&cfg) {
        Err(Error::Configuration(msg)) => assert_eq!(msg, "Lat/Lng is required"),
        other => panic!("unexpected {:?}", other),
    }
    cfg.center = Some((47.3769, 8.5417));
    assert_eq!(
        center_from_config(&cfg).unwrap(),
        Coordinate::new(47.3769, 8.5417)
    );
}
