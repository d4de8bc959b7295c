//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Web Mercator projection between geographic and world pixel space

use crate::point::Point;
use std::f64::consts;

/// Highest supported zoom level (scale must fit into u32)
pub const MAX_ZOOM: u8 = 30;

/// Bound of sin(latitude), avoids log(0) at the poles
const SINY_LIMIT: f64 = 0.9999;

/// Zoom level and tile size of a tile grid
#[derive(PartialEq, Clone, Debug)]
pub struct TileGrid {
    zoom: u8,
    /// The width and height of an individual tile, in pixels.
    tile_size: u32,
}

impl TileGrid {
    pub fn new(zoom: u8, tile_size: u32) -> Result<TileGrid, String> {
        if zoom > MAX_ZOOM {
            return Err(format!(
                "Zoom level {} out of range (0..={})",
                zoom, MAX_ZOOM
            ));
        }
        if tile_size == 0 {
            return Err("Tile size must be greater than 0".to_string());
        }
        Ok(TileGrid { zoom, tile_size })
    }
    pub fn zoom(&self) -> u8 {
        self.zoom
    }
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }
    /// Magnification between world and pixel coordinates (2^zoom)
    pub fn scale(&self) -> f64 {
        (1u32 << self.zoom) as f64
    }
}

impl Default for TileGrid {
    /// Zoom level 3 with 256x256 pixel tiles
    fn default() -> TileGrid {
        TileGrid {
            zoom: 3,
            tile_size: 256,
        }
    }
}

pub struct MercatorProjection;

impl MercatorProjection {
    /// World coordinate of a `(lat, lng)` point.
    ///
    /// The output x is derived from the longitude (`coord.y`) and the output y from the
    /// clamped sine of the latitude (`coord.x`).
    pub fn from_lat_lng_to_point(grid: &TileGrid, coord: Point) -> Point {
        let tile_size = grid.tile_size() as f64;
        let siny = coord
            .x
            .to_radians()
            .sin()
            .max(-SINY_LIMIT)
            .min(SINY_LIMIT);

        let x = tile_size * (0.5 + coord.y / 360.0);
        let y = tile_size * (0.5 - ((1.0 + siny) / (1.0 - siny)).ln() / (4.0 * consts::PI));
        Point::new(x, y)
    }

    /// `(lat, lng)` of a point in global pixel coordinates
    pub fn from_point_to_lat_lng(grid: &TileGrid, point: Point) -> Point {
        let tile_size = grid.tile_size() as f64;
        let px_origin = Point::new(tile_size / 2.0, tile_size / 2.0);
        let px_per_deg = tile_size / 360.0;
        let px_per_rad = tile_size / (2.0 * consts::PI);

        let x = point.x / grid.scale();
        let y = point.y / grid.scale();

        let lng = (x - px_origin.x) / px_per_deg;
        let lat_rad = (y - px_origin.y) / -px_per_rad;
        let lat = (2.0 * lat_rad.exp().atan() - consts::FRAC_PI_2).to_degrees();
        Point::new(lat, lng)
    }
}
