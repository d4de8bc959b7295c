//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod filestore;


pub use self::filestore::FileStore;
use crate::core::config::OutputCfg;
use crate::core::Config;
use std::env;

impl<'a> Config<'a, OutputCfg> for FileStore {
    fn from_config(cfg: &OutputCfg) -> Result<Self, String> {
        match cfg.folder {
            Some(ref folder) => Ok(FileStore::new(folder)),
            None => env::current_dir()
                .map(FileStore::new)
                .map_err(|e| format!("Current directory not accessible: {}", e)),
        }
    }
    fn gen_config() -> String {
        let toml = r#"
[output]
# Default: current directory
#folder = "/tmp/tiles"
"#;
        toml.to_string()
    }
}
