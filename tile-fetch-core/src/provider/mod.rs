//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod content;
pub mod provider;
pub mod static_map;


pub use self::content::image_filename;
pub use self::provider::{MapImage, MapProvider};
pub use self::static_map::StaticMapProvider;
