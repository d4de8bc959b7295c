//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! 3x3 tile neighborhood

use crate::point::Tile;
use std::fmt;

/// Position of a tile within the 3x3 neighborhood
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum GridPosition {
    TopLeft,
    Top,
    TopRight,
    Left,
    Current,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl GridPosition {
    /// All positions in row-major order
    pub const ALL: [GridPosition; 9] = [
        GridPosition::TopLeft,
        GridPosition::Top,
        GridPosition::TopRight,
        GridPosition::Left,
        GridPosition::Current,
        GridPosition::Right,
        GridPosition::BottomLeft,
        GridPosition::Bottom,
        GridPosition::BottomRight,
    ];

    /// Position of tile index offset `(dx, dy)`, with dx, dy in -1..=1
    pub fn from_offset(dx: i64, dy: i64) -> Option<GridPosition> {
        match (dx, dy) {
            (-1, -1) => Some(GridPosition::TopLeft),
            (0, -1) => Some(GridPosition::Top),
            (1, -1) => Some(GridPosition::TopRight),
            (-1, 0) => Some(GridPosition::Left),
            (0, 0) => Some(GridPosition::Current),
            (1, 0) => Some(GridPosition::Right),
            (-1, 1) => Some(GridPosition::BottomLeft),
            (0, 1) => Some(GridPosition::Bottom),
            (1, 1) => Some(GridPosition::BottomRight),
            _ => None,
        }
    }
    /// Tile index offset `(dx, dy)` relative to the center tile
    pub fn offset(&self) -> (i64, i64) {
        match self {
            GridPosition::TopLeft => (-1, -1),
            GridPosition::Top => (0, -1),
            GridPosition::TopRight => (1, -1),
            GridPosition::Left => (-1, 0),
            GridPosition::Current => (0, 0),
            GridPosition::Right => (1, 0),
            GridPosition::BottomLeft => (-1, 1),
            GridPosition::Bottom => (0, 1),
            GridPosition::BottomRight => (1, 1),
        }
    }
    /// Name used for file names and HTML element ids
    pub fn name(&self) -> &'static str {
        match self {
            GridPosition::TopLeft => "top_left",
            GridPosition::Top => "top",
            GridPosition::TopRight => "top_right",
            GridPosition::Left => "left",
            GridPosition::Current => "current",
            GridPosition::Right => "right",
            GridPosition::BottomLeft => "bottom_left",
            GridPosition::Bottom => "bottom",
            GridPosition::BottomRight => "bottom_right",
        }
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Iterator over the 3x3 tiles around a center tile, row by row
pub struct Neighborhood {
    center: Tile,
    dx: i64,
    dy: i64,
    finished: bool,
}

impl Neighborhood {
    pub fn new(center: Tile) -> Neighborhood {
        Neighborhood {
            center,
            dx: -1,
            dy: -1,
            finished: false,
        }
    }
}

impl Iterator for Neighborhood {
    type Item = (GridPosition, Tile);

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let position = GridPosition::from_offset(self.dx, self.dy)?;
        let current = (position, self.center.offset(self.dx, self.dy));
        if self.dx < 1 {
            self.dx += 1;
        } else if self.dy < 1 {
            self.dx = -1;
            self.dy += 1;
        } else {
            self.finished = true;
        }
        Some(current)
    }
}
