//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use clap::{App, AppSettings, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;
use tile_fetch_core::core::config::DEFAULT_CONFIG;
use tile_fetch_core::core::{center_from_config, parse_config, read_config, ApplicationCfg};
use tile_fetch_core::core::{Config, Error, Result};
use tile_fetch_service::GridService;
use time;

#[cfg(test)]
mod main_test;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t)
                .map(|s| s.to_string())
                .unwrap_or_default(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log_env = env::var("RUST_LOG");
    let rust_log = match (args.value_of("loglevel"), rust_log_env.as_ref()) {
        (None, Ok(rust_log)) => rust_log.as_str(),
        (loglevel, _) => match loglevel.unwrap_or("info") {
            "debug" => "debug,tokio=info,reqwest=info,hyper=info",
            loglevel => loglevel,
        },
    };
    builder.parse_filters(rust_log);

    builder.init();
}

/// Parse optional command line value
fn arg_value<T: FromStr>(args: &ArgMatches<'_>, name: &str) -> Result<Option<T>> {
    match args.value_of(name) {
        None => Ok(None),
        Some(s) => s.trim().parse::<T>().map(Some).map_err(|_| {
            Error::Configuration(format!("Error parsing '{}' value `{}`", name, s))
        }),
    }
}

/// Configuration file or defaults, overridden by command line arguments
fn config_from_args(args: &ArgMatches<'_>) -> Result<ApplicationCfg> {
    let mut config: ApplicationCfg = if let Some(cfgpath) = args.value_of("config") {
        info!("Reading configuration from '{}'", cfgpath);
        read_config(cfgpath)?
    } else {
        parse_config(DEFAULT_CONFIG.to_string(), "")?
    };

    let (cfg_lat, cfg_lng) = config.grid.center.unzip();
    let lat = arg_value::<f64>(args, "lat")?.or(cfg_lat);
    let lng = arg_value::<f64>(args, "lng")?.or(cfg_lng);
    config.grid.center = lat.zip(lng);
    if let Some(zoom) = arg_value(args, "zoom")? {
        config.grid.zoom = zoom;
    }
    if let Some(size) = arg_value(args, "size")? {
        config.grid.size = size;
    }
    if let Some(folder) = args.value_of("folder") {
        config.output.folder = Some(folder.to_string());
    }
    if let Some(api_key) = args.value_of("api-key") {
        config.provider.api_key = api_key.to_string();
    }
    if let Some(workers) = arg_value(args, "workers")? {
        config.fetch.workers = Some(workers);
    }
    if let Some(progress) = arg_value(args, "progress")? {
        config.fetch.progress = Some(progress);
    }
    Ok(config)
}

fn fetch(args: &ArgMatches<'_>) -> Result<PathBuf> {
    let config = config_from_args(args)?;
    // Validate input before touching network or filesystem
    let center = center_from_config(&config.grid)?;
    let service = GridService::from_config(&config).map_err(Error::Configuration)?;
    let progress = config.fetch.progress.unwrap_or(false);
    service.generate(center, progress)
}

fn app() -> App<'static, 'static> {
    // http://kbknapp.github.io/clap-rs/clap/
    App::new("tile_fetch")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("Download the 3x3 static map tiles around a coordinate and generate an HTML viewer")
        .setting(AppSettings::AllowLeadingHyphen)
        .args_from_usage("--lat=[LAT] 'Latitude'
                          --lng=[LNG] 'Longitude'
                          --zoom=[LEVEL] 'Zoom level (Default: 3)'
                          --size=[PIXELS] 'Tile size (Default: 256)'
                          --folder=[DIR] 'Folder to save images (Default: current directory)'
                          -c, --config=[FILE] 'Load from custom config file'
                          --api-key=[KEY] 'Map provider API key'
                          --workers=[NUM] 'Number of parallel downloads'
                          --progress=[true|false] 'Show progress bar'
                          --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
        .subcommand(SubCommand::with_name("genconfig")
                        .about("Generate configuration template"))
}

fn main() {
    dotenv().ok();
    let mut app = app();

    match app.get_matches_from_safe_borrow(env::args()) {
        Err(e) => e.exit(),
        Ok(matches) => match matches.subcommand() {
            ("genconfig", Some(_)) => {
                println!("{}", GridService::gen_config());
            }
            _ => {
                init_logger(&matches);
                match fetch(&matches) {
                    Ok(viewer) => info!("Map viewer written to {}", viewer.display()),
                    Err(e) => {
                        error!("{}", e);
                        process::exit(1);
                    }
                }
            }
        },
    }
}
