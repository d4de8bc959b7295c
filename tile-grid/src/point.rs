//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Points in geographic, world pixel and tile space

use crate::projection::{MercatorProjection, TileGrid};
use std::fmt;
use std::ops::Add;

/// Pair of floating point numbers.
///
/// Depending on context this is a geographic position (`x`: latitude, `y`: longitude),
/// a world or pixel coordinate, or a tile index. The caller keeps track of the space.
#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
    /// Component-wise floor
    pub fn floor(&self) -> Point {
        Point::new(self.x.floor(), self.y.floor())
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Scalar offset applied to both components
impl Add<f64> for Point {
    type Output = Point;

    fn add(self, offset: f64) -> Point {
        Point::new(self.x + offset, self.y + offset)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Tile index `(tile_x, tile_y)` in the grid of the current zoom level
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Tile(Point);

impl Tile {
    pub fn new(tile_x: i64, tile_y: i64) -> Tile {
        Tile(Point::new(tile_x as f64, tile_y as f64))
    }
    pub fn tile_x(&self) -> i64 {
        self.0.x as i64
    }
    pub fn tile_y(&self) -> i64 {
        self.0.y as i64
    }
    /// Neighbour tile at index offset `(dx, dy)`
    pub fn offset(&self, dx: i64, dy: i64) -> Tile {
        Tile::new(self.tile_x() + dx, self.tile_y() + dy)
    }
    pub fn as_point(&self) -> Point {
        self.0
    }
    /// Global pixel coordinate of the tile center
    pub fn center_pixel_coordinate(&self, grid: &TileGrid) -> Point {
        let tile_size = grid.tile_size() as f64;
        let top_left = Point::new(self.0.x * tile_size, self.0.y * tile_size);
        top_left + (tile_size / 2.0).floor()
    }
    /// World coordinate of the tile center
    pub fn center_world_coordinate(&self, grid: &TileGrid) -> Point {
        let center = self.center_pixel_coordinate(grid);
        Point::new(center.x / grid.scale(), center.y / grid.scale())
    }
    /// Geographic position of the tile center
    pub fn center_lat_lng(&self, grid: &TileGrid) -> Coordinate {
        let lat_lng = MercatorProjection::from_point_to_lat_lng(
            grid,
            self.center_pixel_coordinate(grid),
        );
        Coordinate(lat_lng)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.tile_x(), self.tile_y())
    }
}

/// Geographic position `(lat, lng)` in degrees
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Coordinate(Point);

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Coordinate {
        Coordinate(Point::new(lat, lng))
    }
    pub fn lat(&self) -> f64 {
        self.0.x
    }
    pub fn lng(&self) -> f64 {
        self.0.y
    }
    pub fn as_point(&self) -> Point {
        self.0
    }
    pub fn world_coordinate(&self, grid: &TileGrid) -> Point {
        MercatorProjection::from_lat_lng_to_point(grid, self.0)
    }
    /// World coordinate scaled to the global pixel space of the zoom level
    pub fn pixel_coordinate(&self, grid: &TileGrid) -> Point {
        let world = self.world_coordinate(grid);
        Point::new(world.x * grid.scale(), world.y * grid.scale()).floor()
    }
    /// Index of the tile containing this position
    pub fn tile(&self, grid: &TileGrid) -> Tile {
        let pixel = self.pixel_coordinate(grid);
        let tile_size = grid.tile_size() as f64;
        let index = Point::new(pixel.x / tile_size, pixel.y / tile_size).floor();
        Tile(index)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(lat: {}, lng: {})", self.lat(), self.lng())
    }
}
