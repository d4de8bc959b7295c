//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid input, raised before any I/O
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Error fetching {url}: {message}")]
    Network { url: String, message: String },
    #[error("Error accessing {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("No image for grid position {0}")]
    MissingImage(String),
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

impl Error {
    pub fn network<M: ToString>(url: &str, message: M) -> Error {
        Error::Network {
            url: url.to_string(),
            message: message.to_string(),
        }
    }
    pub fn filesystem<P: Into<PathBuf>>(path: P, source: io::Error) -> Error {
        Error::Filesystem {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
