//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::{Error, Result};
use crate::provider::{image_filename, MapImage};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Output directory for downloaded images
#[derive(Clone, Debug)]
pub struct FileStore {
    pub basepath: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(basepath: P) -> FileStore {
        FileStore {
            basepath: basepath.into(),
        }
    }
    pub fn info(&self) -> String {
        format!("Output directory: {}", self.basepath.display())
    }
    /// Create output directory including parents
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.basepath).map_err(|e| Error::filesystem(&self.basepath, e))
    }
    pub fn path(&self, name: &str) -> PathBuf {
        self.basepath.join(name)
    }
    pub fn write(&self, name: &str, obj: &[u8]) -> Result<PathBuf> {
        let fullpath = self.path(name);
        debug!("FileStore.write {}", fullpath.display());
        let mut f = File::create(&fullpath).map_err(|e| Error::filesystem(&fullpath, e))?;
        f.write_all(obj)
            .map_err(|e| Error::filesystem(&fullpath, e))?;
        Ok(fullpath)
    }
    pub fn exists(&self, name: &str) -> bool {
        Path::new(&self.path(name)).exists()
    }
    /// Save image under `filename` with extension derived from its content type
    pub fn save_image(&self, image: &MapImage, filename: Option<&str>) -> Result<PathBuf> {
        let name = image_filename(image, filename)?;
        info!("Downloading {}", name);
        self.write(&name, &image.data)
    }
}
