//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use pbr::ProgressBar;
use std::cmp;
use std::io::{stderr, Stderr};
use std::panic;
use std::path::PathBuf;
use std::sync::Arc;
use tile_fetch_core::core::{ApplicationCfg, Config, Error, Result};
use tile_fetch_core::provider::{MapProvider, StaticMapProvider};
use tile_fetch_core::store::FileStore;
use tile_fetch_core::viewer::{write_viewer, GridImages};
use tile_grid::{Coordinate, GridPosition, Neighborhood, Tile, TileGrid};
use tokio::task;

type TileTask = task::JoinHandle<Result<(GridPosition, PathBuf)>>;

/// Downloads the 3x3 map tiles around a coordinate
#[derive(Clone)]
pub struct GridService {
    pub grid: TileGrid,
    pub provider: Arc<dyn MapProvider>,
    pub store: FileStore,
    /// Maximal number of parallel downloads
    pub workers: usize,
}

impl GridService {
    pub fn new(
        grid: TileGrid,
        provider: Arc<dyn MapProvider>,
        store: FileStore,
        workers: usize,
    ) -> GridService {
        GridService {
            grid,
            provider,
            store,
            workers: cmp::max(workers, 1),
        }
    }
    /// Default number of parallel downloads
    pub fn default_workers() -> usize {
        cmp::min(num_cpus::get() * 2, 9)
    }
    /// Neighborhood tiles of `center` with their geographic centers
    pub fn tiles(&self, center: &Coordinate) -> Vec<(GridPosition, Tile, Coordinate)> {
        Neighborhood::new(center.tile(&self.grid))
            .map(|(position, tile)| (position, tile, tile.center_lat_lng(&self.grid)))
            .collect()
    }
    /// Download the image of a single tile and save it under the position name
    pub fn fetch_tile(&self, position: GridPosition, tile: Tile) -> Result<PathBuf> {
        let center = tile.center_lat_lng(&self.grid);
        debug!("{} tile {} centered at {}", position, tile, center);
        let image = self.provider.fetch_image(
            center.lat(),
            center.lng(),
            self.grid.zoom(),
            self.grid.tile_size(),
        )?;
        self.store.save_image(&image, Some(position.name()))
    }
    /// Download the tile grid around `center` and write the HTML viewer.
    ///
    /// Returns the path of the viewer page.
    pub fn generate(&self, center: Coordinate, progress: bool) -> Result<PathBuf> {
        info!("{}", self.provider.info());
        info!("{}", self.store.info());
        let rt = tokio::runtime::Runtime::new()
            .map_err(|e| Error::Configuration(format!("Couldn't initialize tokio runtime: {}", e)))?;
        self.store.init()?;
        let tile = center.tile(&self.grid);
        info!(
            "Coordinate {} is in tile {} at zoom level {}",
            center,
            tile,
            self.grid.zoom()
        );
        let images = rt.block_on(self.fetch_grid(tile, progress))?;
        write_viewer(&self.store.basepath, &images)
    }
    /// Fetch all tiles of the neighborhood with at most `workers` parallel downloads
    async fn fetch_grid(&self, center_tile: Tile, progress: bool) -> Result<GridImages> {
        let mut tasks: Vec<TileTask> = Vec::with_capacity(self.workers);
        let mut images = GridImages::new();
        let mut pb = self.progress_bar();
        let mut failed: Option<Error> = None;

        for (position, tile) in Neighborhood::new(center_tile) {
            let svc = self.clone();
            tasks.push(task::spawn_blocking(move || {
                svc.fetch_tile(position, tile).map(|path| (position, path))
            }));
            if tasks.len() >= self.workers {
                let (result, remaining) = await_one_task(tasks).await;
                tasks = remaining;
                if progress {
                    pb.inc();
                }
                if let Err(e) = collect(&mut images, result) {
                    failed = Some(e);
                    break;
                }
            }
        }
        // Finish remaining tasks
        for result in futures_util::future::join_all(tasks).await {
            if progress {
                pb.inc();
            }
            let result = result.unwrap_or_else(|e| panic::resume_unwind(e.into_panic()));
            if let Err(e) = collect(&mut images, result) {
                failed.get_or_insert(e);
            }
        }
        if progress {
            pb.finish_println("");
        }
        match failed {
            Some(e) => Err(e),
            None => Ok(images),
        }
    }
    fn progress_bar(&self) -> ProgressBar<Stderr> {
        let mut pb = ProgressBar::on(stderr(), GridPosition::ALL.len() as u64);
        pb.message("Tile ");
        pb.show_speed = false;
        pb.show_percent = false;
        pb.show_time_left = false;
        pb
    }
}

fn collect(images: &mut GridImages, result: Result<(GridPosition, PathBuf)>) -> Result<()> {
    let (position, path) = result?;
    images.insert(position, path);
    Ok(())
}

async fn await_one_task<T>(
    tasks: Vec<task::JoinHandle<T>>,
) -> (T, Vec<task::JoinHandle<T>>) {
    let (result, _index, remaining) = futures_util::future::select_all(tasks).await;
    let value = result.unwrap_or_else(|e| panic::resume_unwind(e.into_panic()));
    (value, remaining)
}

impl<'a> Config<'a, ApplicationCfg> for GridService {
    fn from_config(config: &ApplicationCfg) -> std::result::Result<Self, String> {
        let grid = TileGrid::from_config(&config.grid)?;
        let provider = StaticMapProvider::from_config(&config.provider)?;
        let store = FileStore::from_config(&config.output)?;
        let workers = config
            .fetch
            .workers
            .unwrap_or_else(GridService::default_workers);
        Ok(GridService::new(grid, Arc::new(provider), store, workers))
    }
    fn gen_config() -> String {
        let mut config = String::new();
        config.push_str(TOML_HEADER);
        config.push_str(&TileGrid::gen_config());
        config.push_str(&StaticMapProvider::gen_config());
        config.push_str(&FileStore::gen_config());
        config.push_str(TOML_FETCH);
        config
    }
}

const TOML_HEADER: &'static str = "# tile_fetch configuration\n";

const TOML_FETCH: &'static str = r#"
[fetch]
# Parallel downloads (Default: 2 x CPU cores, max. 9)
#workers = 9
progress = true
"#;
