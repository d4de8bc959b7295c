//! A library for Web Mercator tile calculations
//!
//! ## Tile of a coordinate
//!
//! ```rust
//! use tile_grid::{Coordinate, Tile, TileGrid};
//!
//! let grid = TileGrid::new(3, 256).unwrap();
//! let coord = Coordinate::new(40.0, -74.0);
//! assert_eq!(coord.tile(&grid), Tile::new(2, 3));
//! ```
//!
//! ## Tile centers
//!
//! ```rust
//! use tile_grid::{Point, Tile, TileGrid};
//!
//! let grid = TileGrid::new(0, 256).unwrap();
//! let tile = Tile::new(0, 0);
//! assert_eq!(tile.center_pixel_coordinate(&grid), Point::new(128.0, 128.0));
//! let center = tile.center_lat_lng(&grid);
//! assert!(center.lat().abs() < 1e-9 && center.lng().abs() < 1e-9);
//! ```
//!
//! ## Neighborhood
//!
//! ```rust
//! use tile_grid::{Neighborhood, Tile};
//!
//! for (position, tile) in Neighborhood::new(Tile::new(2, 3)) {
//!     println!("{}: {}", position, tile);
//! }
//! ```

mod neighborhood;
mod point;
mod projection;
#[cfg(test)]
mod projection_test;

pub use neighborhood::{GridPosition, Neighborhood};
pub use point::{Coordinate, Point, Tile};
pub use projection::{MercatorProjection, TileGrid, MAX_ZOOM};
