//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};
use tile_grid::GridPosition;

pub const VIEWER_FILENAME: &str = "map_viewer.html";

const VIEWER_TEMPLATE: &str = include_str!("templates/map_viewer.html");

/// Saved image path of each grid position
#[derive(Clone, Debug, Default)]
pub struct GridImages {
    images: HashMap<GridPosition, PathBuf>,
}

#[derive(Serialize)]
struct ImageRef {
    id: &'static str,
    src: String,
}

impl GridImages {
    pub fn new() -> GridImages {
        GridImages::default()
    }
    pub fn insert(&mut self, position: GridPosition, path: PathBuf) {
        self.images.insert(position, path);
    }
    pub fn get(&self, position: GridPosition) -> Option<&PathBuf> {
        self.images.get(&position)
    }
    pub fn len(&self) -> usize {
        self.images.len()
    }
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
    /// Image references in layout order. Paths below `base` are made relative.
    fn image_refs(&self, base: Option<&Path>) -> Result<Vec<ImageRef>> {
        GridPosition::ALL
            .iter()
            .map(|position| -> Result<ImageRef> {
                let path = self
                    .get(*position)
                    .ok_or_else(|| Error::MissingImage(position.to_string()))?;
                let src = base
                    .and_then(|base| path.strip_prefix(base).ok())
                    .unwrap_or(path);
                Ok(ImageRef {
                    id: position.name(),
                    src: src.to_string_lossy().into_owned(),
                })
            })
            .collect()
    }
}

fn render(images: Vec<ImageRef>) -> Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(VIEWER_FILENAME, VIEWER_TEMPLATE)?;
    let mut context = Context::new();
    context.insert("title", "Viewer");
    context.insert("images", &images);
    Ok(tera.render(VIEWER_FILENAME, &context)?)
}

/// HTML page arranging the 9 images in a 3x3 grid
pub fn render_viewer(images: &GridImages) -> Result<String> {
    render(images.image_refs(None)?)
}

/// Write viewer page into `folder`
pub fn write_viewer(folder: &Path, images: &GridImages) -> Result<PathBuf> {
    info!("Generating HTML Viewer");
    let html = render(images.image_refs(Some(folder))?)?;
    let path = folder.join(VIEWER_FILENAME);
    fs::write(&path, html).map_err(|e| Error::filesystem(&path, e))?;
    Ok(path)
}
