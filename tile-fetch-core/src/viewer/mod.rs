//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod viewer;


pub use self::viewer::{render_viewer, write_viewer, GridImages, VIEWER_FILENAME};
