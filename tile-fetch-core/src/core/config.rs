//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::error::{Error, Result};
use regex::Regex;
use serde::Deserialize;
use std;
use std::collections::HashMap;
use std::env;
use std::error::Error as StdError;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> std::result::Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct ApplicationCfg {
    #[serde(default)]
    pub grid: GridCfg,
    #[serde(default)]
    pub provider: ProviderCfg,
    #[serde(default)]
    pub output: OutputCfg,
    #[serde(default)]
    pub fetch: FetchCfg,
}

#[derive(Deserialize, Clone, Debug)]
pub struct GridCfg {
    /// Center of the tile grid as (lat, lng)
    pub center: Option<(f64, f64)>,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    /// Width and height of a tile in pixels
    #[serde(default = "default_tile_size")]
    pub size: u32,
}

impl Default for GridCfg {
    fn default() -> Self {
        GridCfg {
            center: None,
            zoom: default_zoom(),
            size: default_tile_size(),
        }
    }
}

pub fn default_zoom() -> u8 {
    3
}

pub fn default_tile_size() -> u32 {
    256
}

#[derive(Deserialize, Clone, Debug)]
pub struct ProviderCfg {
    #[serde(default = "default_provider_url")]
    pub url: String,
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// Image format requested from the provider (png, jpg, gif)
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_maptype")]
    pub maptype: String,
}

impl Default for ProviderCfg {
    fn default() -> Self {
        ProviderCfg {
            url: default_provider_url(),
            api_key: default_api_key(),
            format: default_format(),
            maptype: default_maptype(),
        }
    }
}

pub const DEFAULT_PROVIDER_URL: &str = "https://maps.googleapis.com/maps/api/staticmap";

pub fn default_provider_url() -> String {
    DEFAULT_PROVIDER_URL.to_string()
}

pub fn default_api_key() -> String {
    "YOUR_API_KEY".to_string()
}

pub fn default_format() -> String {
    "png".to_string()
}

pub fn default_maptype() -> String {
    "roadmap".to_string()
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct OutputCfg {
    /// Target directory (Default: current directory)
    pub folder: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct FetchCfg {
    /// Number of parallel downloads
    pub workers: Option<usize>,
    pub progress: Option<bool>,
}

pub const DEFAULT_CONFIG: &'static str = r#"
[grid]
#center = [40.0, -74.0]
zoom = 3
size = 256

[provider]
url = "https://maps.googleapis.com/maps/api/staticmap"
# Environment variables are available as env.VARNAME template expressions
api_key = "YOUR_API_KEY"
format = "png"
maptype = "roadmap"

[output]
#folder = "/tmp/tiles"

[fetch]
#workers = 9
progress = false
"#;

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err(Error::Configuration(
                "Could not find config file!".to_string(),
            ));
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(Error::Configuration(format!(
            "Error while reading config: [{}]",
            err
        )));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T> {
    // Check for ${var} expressions
    let re = Regex::new(r"\$\{([[:alnum:]_]+)\}").expect("valid regex");
    if re.is_match(&config_toml) {
        return Err(Error::Configuration(
            "Replace environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        ));
    }

    // Parse template
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| Error::Configuration(format!("Template error: {}", e)))?;
    let mut context = Context::new();
    let mut env = HashMap::new();
    for (key, value) in env::vars() {
        env.insert(key, value);
    }
    context.insert("env", &env);
    let toml = tera.render(path, &context).map_err(|e| {
        let reason = e.source().map_or(e.to_string(), |s| s.to_string());
        Error::Configuration(format!("Template error: {}", reason))
    })?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| Error::Configuration(format!("{} - {}", path, err)))
}
