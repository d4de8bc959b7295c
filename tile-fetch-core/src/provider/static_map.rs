//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::ProviderCfg;
use crate::core::{Config, Error, Result};
use crate::provider::{MapImage, MapProvider};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client;
use reqwest::header::{HeaderName, CONTENT_DISPOSITION, CONTENT_TYPE};

/// Characters kept unencoded in query values
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Static map image API (Google Maps Static API compatible)
#[derive(Clone)]
pub struct StaticMapProvider {
    pub baseurl: String,
    api_key: String,
    pub format: String,
    pub maptype: String,
    client: Client,
}

impl StaticMapProvider {
    pub fn new(cfg: &ProviderCfg) -> Result<StaticMapProvider> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::network(&cfg.url, e))?;
        Ok(StaticMapProvider {
            baseurl: cfg.url.clone(),
            api_key: cfg.api_key.clone(),
            format: cfg.format.clone(),
            maptype: cfg.maptype.clone(),
            client,
        })
    }
    /// Request URL for an image centered at `lat`, `lng`
    pub fn url(&self, lat: f64, lng: f64, zoom: u8, size: u32) -> String {
        let sep = if self.baseurl.contains('?') { '&' } else { '?' };
        format!(
            "{}{}key={}&zoom={}&format={}&maptype={}&size={}x{}&center={}",
            self.baseurl,
            sep,
            utf8_percent_encode(&self.api_key, QUERY_VALUE),
            zoom,
            utf8_percent_encode(&self.format, QUERY_VALUE),
            utf8_percent_encode(&self.maptype, QUERY_VALUE),
            size,
            size,
            utf8_percent_encode(&format!("{},{}", lat, lng), QUERY_VALUE)
        )
    }
}

impl MapProvider for StaticMapProvider {
    fn info(&self) -> String {
        format!("Static map provider: {} ({})", self.baseurl, self.maptype)
    }
    fn fetch_image(&self, lat: f64, lng: f64, zoom: u8, size: u32) -> Result<MapImage> {
        let url = self.url(lat, lng, zoom, size);
        debug!("StaticMapProvider.fetch_image {},{} zoom {}", lat, lng, zoom);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| Error::network(&url, e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::network(&url, format!("HTTP status {}", status)));
        }
        let header = |name: HeaderName| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.to_string())
        };
        let content_type = header(CONTENT_TYPE);
        let content_disposition = header(CONTENT_DISPOSITION);
        let data = response
            .bytes()
            .map_err(|e| Error::network(&url, e))?
            .to_vec();
        Ok(MapImage {
            url,
            data,
            content_type,
            content_disposition,
        })
    }
}

impl<'a> Config<'a, ProviderCfg> for StaticMapProvider {
    fn from_config(cfg: &ProviderCfg) -> std::result::Result<Self, String> {
        StaticMapProvider::new(cfg).map_err(|e| e.to_string())
    }
    fn gen_config() -> String {
        let toml = r#"
[provider]
url = "https://maps.googleapis.com/maps/api/staticmap"
api_key = "YOUR_API_KEY"
# png, png32, gif, jpg
format = "png"
# roadmap, satellite, terrain, hybrid
maptype = "roadmap"
"#;
        toml.to_string()
    }
}
