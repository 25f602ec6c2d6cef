use crate::grids::{Cell, Dimensions};

pub const DEFAULT_DIMS: (usize, usize) = (10, 10);
/// `shrink` stops once either side would drop below this.
pub const MIN_SIDE: usize = 2;

/// Everything needed to (re)build a maze. Owned by whoever drives resizing and handed
/// to [`crate::build_maze`] on every regenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    pub dims: Dimensions,
    pub start: Cell,
    pub seed: Option<u64>,
}

impl MazeConfig {
    pub fn new() -> Self {
        Self::with_dims(DEFAULT_DIMS.0, DEFAULT_DIMS.1)
    }

    pub fn with_dims(rows: usize, columns: usize) -> Self {
        Self {
            dims: Dimensions { rows, columns },
            start: (0, 0),
            seed: None,
        }
    }

    /// One more row and one more column.
    pub fn grow(&mut self) {
        self.dims.rows += 1;
        self.dims.columns += 1;
    }

    /// One less row and column, unless that would go under [`MIN_SIDE`]. Returns whether
    /// the size changed.
    pub fn shrink(&mut self) -> bool {
        if self.dims.rows <= MIN_SIDE || self.dims.columns <= MIN_SIDE {
            return false;
        }

        self.dims.rows -= 1;
        self.dims.columns -= 1;
        self.start = (
            self.start.0.min(self.dims.rows - 1),
            self.start.1.min(self.dims.columns - 1),
        );
        true
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self::new()
    }
}
