//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::point::{Coordinate, Point, Tile};
use crate::projection::{MercatorProjection, TileGrid};

#[test]
fn test_grid_params() {
    let grid = TileGrid::default();
    assert_eq!(grid.zoom(), 3);
    assert_eq!(grid.tile_size(), 256);
    assert_eq!(grid.scale(), 8.0);

    for zoom in 0..=30 {
        let grid = TileGrid::new(zoom, 512).unwrap();
        assert_eq!(grid.scale(), 2f64.powi(zoom as i32));
    }

    assert!(TileGrid::new(31, 256).is_err());
    assert_eq!(
        TileGrid::new(3, 0).err(),
        Some("Tile size must be greater than 0".to_string())
    );
}

#[test]
fn test_forward_projection() {
    let grid = TileGrid::new(0, 256).unwrap();

    assert_eq!(
        MercatorProjection::from_lat_lng_to_point(&grid, Point::new(0.0, 0.0)),
        Point::new(128.0, 128.0)
    );
    // x depends on longitude only
    let p = MercatorProjection::from_lat_lng_to_point(&grid, Point::new(0.0, -180.0));
    assert_eq!(p.x, 0.0);
    let p = MercatorProjection::from_lat_lng_to_point(&grid, Point::new(0.0, 90.0));
    assert_eq!(p.x, 192.0);
    // northern latitudes are above the equator
    let p = MercatorProjection::from_lat_lng_to_point(&grid, Point::new(45.0, 0.0));
    assert_eq!(p.x, 128.0);
    assert!(p.y < 128.0);
}

#[test]
fn test_round_trip() {
    let grid = TileGrid::new(0, 256).unwrap();
    let mut lat = -84.9;
    while lat < 85.0 {
        let mut lng = -180.0;
        while lng <= 180.0 {
            let world = MercatorProjection::from_lat_lng_to_point(&grid, Point::new(lat, lng));
            let back = MercatorProjection::from_point_to_lat_lng(&grid, world);
            assert!((back.x - lat).abs() < 1e-6, "lat {} -> {}", lat, back.x);
            assert!((back.y - lng).abs() < 1e-6, "lng {} -> {}", lng, back.y);
            lng += 7.3;
        }
        lat += 3.1;
    }
}

#[test]
fn test_round_trip_scaled() {
    let grid = TileGrid::new(12, 256).unwrap();
    let coord = Point::new(47.3769, 8.5417);
    let world = MercatorProjection::from_lat_lng_to_point(&grid, coord);
    let pixel = Point::new(world.x * grid.scale(), world.y * grid.scale());
    let back = MercatorProjection::from_point_to_lat_lng(&grid, pixel);
    assert!((back.x - coord.x).abs() < 1e-6);
    assert!((back.y - coord.y).abs() < 1e-6);
}

#[test]
fn test_poles_are_finite() {
    let grid = TileGrid::default();
    for lat in &[90.0, -90.0, 89.999, -89.999, 1000.0] {
        let p = MercatorProjection::from_lat_lng_to_point(&grid, Point::new(*lat, 10.0));
        assert!(p.is_finite(), "lat {} gives {}", lat, p);
    }
    let north = MercatorProjection::from_lat_lng_to_point(&grid, Point::new(90.0, 0.0));
    let south = MercatorProjection::from_lat_lng_to_point(&grid, Point::new(-90.0, 0.0));
    assert!(north.y < south.y);
    assert!((north.y + south.y - 256.0).abs() < 1e-9);
}

#[test]
fn test_center_pixel_coordinate() {
    for &tile_size in &[256u32, 255, 512, 1] {
        let grid = TileGrid::new(5, tile_size).unwrap();
        let half = (tile_size / 2) as f64;
        for tx in -2..40 {
            for ty in -2..40 {
                let center = Tile::new(tx, ty).center_pixel_coordinate(&grid);
                assert_eq!(center.x.rem_euclid(tile_size as f64), half);
                assert_eq!(center.y.rem_euclid(tile_size as f64), half);
            }
        }
    }
    let grid = TileGrid::default();
    assert_eq!(
        Tile::new(2, 3).center_pixel_coordinate(&grid),
        Point::new(640.0, 896.0)
    );
    assert_eq!(
        Tile::new(2, 3).center_world_coordinate(&grid),
        Point::new(80.0, 112.0)
    );
}

#[test]
fn test_tile_of_center() {
    for zoom in 0..8 {
        let grid = TileGrid::new(zoom, 256).unwrap();
        let n = 1i64 << zoom;
        for tx in 0..n {
            for ty in 0..n {
                let tile = Tile::new(tx, ty);
                let center = tile.center_lat_lng(&grid);
                assert_eq!(center.tile(&grid), tile, "zoom {} tile {}", zoom, tile);
            }
        }
    }
}

#[test]
fn test_coordinate_tile() {
    let grid = TileGrid::new(3, 256).unwrap();
    let coord = Coordinate::new(40.0, -74.0);

    assert_eq!(coord.pixel_coordinate(&grid), Point::new(603.0, 775.0));
    let tile = coord.tile(&grid);
    assert_eq!(tile, Tile::new(2, 3));
    assert_eq!(tile.tile_x(), 2);
    assert_eq!(tile.tile_y(), 3);
    // deterministic
    assert_eq!(coord.tile(&grid), tile);

    let grid = TileGrid::new(0, 256).unwrap();
    assert_eq!(coord.tile(&grid), Tile::new(0, 0));
}

#[test]
fn test_point_ops() {
    assert_eq!(Point::new(1.0, 2.0) + 0.5, Point::new(1.5, 2.5));
    assert_eq!(Point::new(-0.5, 1.5).floor(), Point::new(-1.0, 1.0));
    assert_eq!(format!("{}", Point::new(1.0, 2.5)), "(1, 2.5)");
    assert_eq!(
        format!("{}", Coordinate::new(40.0, -74.0)),
        "(lat: 40, lng: -74)"
    );
    assert_eq!(format!("{}", Tile::new(2, 3)), "2/3");
}
