//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::GridCfg;
use crate::core::error::{Error, Result};
use crate::core::Config;
use tile_grid::{Coordinate, TileGrid};

impl<'a> Config<'a, GridCfg> for TileGrid {
    fn from_config(grid_cfg: &GridCfg) -> std::result::Result<Self, String> {
        TileGrid::new(grid_cfg.zoom, grid_cfg.size)
    }
    fn gen_config() -> String {
        let toml = r#"
[grid]
#center = [40.0, -74.0]
zoom = 3
size = 256
"#;
        toml.to_string()
    }
}

/// Validated grid center.
///
/// Both values are required. A zero value counts as missing, out of range values are
/// passed on to the projection.
pub fn center_coordinate(lat: Option<f64>, lng: Option<f64>) -> Result<Coordinate> {
    let (lat, lng) = match (lat, lng) {
        (Some(lat), Some(lng)) if lat != 0.0 && lng != 0.0 => (lat, lng),
        _ => return Err(Error::Configuration("Lat/Lng is required".to_string())),
    };
    if !lat.is_finite() || !lng.is_finite() {
        return Err(Error::Configuration(format!(
            "Invalid coordinate {}, {}",
            lat, lng
        )));
    }
    Ok(Coordinate::new(lat, lng))
}

/// Grid center of the configuration
pub fn center_from_config(grid_cfg: &GridCfg) -> Result<Coordinate> {
    let (lat, lng) = grid_cfg.center.unzip();
    center_coordinate(lat, lng)
}
