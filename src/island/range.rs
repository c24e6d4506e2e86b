//! Coordinate range computation and enumeration for square grids
//!
//! A grid of side length `size` spans `[-floor(size / 2), size - floor(size / 2) - 1]`
//! on each axis. The range is asymmetric for even sizes (one more negative than
//! positive coordinate); the deliberate asymmetry keeps the arithmetic exact in
//! integers, with visual centring handled separately by the layout.

/// Integer grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Horizontal position, increasing rightward
    pub x: i32,
    /// Vertical position, increasing downward
    pub y: i32,
}

impl Coord {
    /// Create a coordinate from its components
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Row-major sort key: ascending y, then ascending x
    pub const fn row_major_key(self) -> (i32, i32) {
        (self.y, self.x)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Inclusive coordinate bounds for one axis of a square grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordRange {
    /// Smallest coordinate in the range
    pub min: i32,
    /// Largest coordinate in the range
    pub max: i32,
}

impl CoordRange {
    /// Check whether a value lies within the range
    pub const fn contains(self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Number of integers covered by the range
    pub const fn len(self) -> u32 {
        (self.max - self.min + 1) as u32
    }

    /// Whether the range covers no integers
    pub const fn is_empty(self) -> bool {
        self.max < self.min
    }
}

/// Compute the per-axis coordinate range for a grid of the given side length
///
/// Yields exactly `size` integers with `max - min == size - 1`. For example
/// size 20 spans `[-10, 9]` and size 21 spans `[-10, 10]`.
pub const fn range_for_size(size: u32) -> CoordRange {
    let offset = (size / 2) as i32;
    CoordRange {
        min: -offset,
        max: size as i32 - offset - 1,
    }
}

/// Enumerate every coordinate of a square grid in row-major order
///
/// The Cartesian product of the axis range with itself, y outer and x inner,
/// yielding `size * size` coordinates.
pub fn coords_for_size(size: u32) -> Vec<Coord> {
    let range = range_for_size(size);
    let mut coords = Vec::with_capacity((size as usize).pow(2));
    for y in range.min..=range.max {
        for x in range.min..=range.max {
            coords.push(Coord::new(x, y));
        }
    }
    coords
}

/// Check whether a coordinate lies within the square range of the given size
pub const fn in_grid(size: u32, coord: Coord) -> bool {
    let range = range_for_size(size);
    range.contains(coord.x) && range.contains(coord.y)
}
