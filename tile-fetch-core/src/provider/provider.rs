//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::Result;

/// Image returned by a map provider
#[derive(Clone, Debug, PartialEq)]
pub struct MapImage {
    /// Request URL
    pub url: String,
    pub data: Vec<u8>,
    /// Value of the Content-Type header
    pub content_type: Option<String>,
    /// Value of the Content-Disposition header
    pub content_disposition: Option<String>,
}

/// Source of static map images
pub trait MapProvider: Send + Sync {
    fn info(&self) -> String;
    /// Square map image of `size` x `size` pixels centered at `lat`, `lng`
    fn fetch_image(&self, lat: f64, lng: f64, zoom: u8, size: u32) -> Result<MapImage>;
}
