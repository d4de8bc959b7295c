//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod config;
pub mod error;
pub mod gridcfg;

pub use self::config::{parse_config, read_config, ApplicationCfg, Config};
pub use self::error::{Error, Result};
pub use self::gridcfg::{center_coordinate, center_from_config};

#[cfg(test)]
mod gridcfg_test;
