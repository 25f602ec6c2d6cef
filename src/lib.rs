pub mod config;
pub mod error;
pub mod generators;
pub mod grids;
pub mod renderer;

use generators::backtracker::Backtracker;
use generators::{Generator, Picker};
use grids::wall_grid::WallGrid;
use grids::{Cell, Dimensions};

pub use config::MazeConfig;
pub use error::{MazeError, Result};

/// Builds a fresh `rows` x `columns` grid and carves a perfect maze into it starting at
/// `start`.
pub fn build_maze<P: Picker>(
    rows: usize,
    columns: usize,
    start: Cell,
    picker: P,
) -> Result<WallGrid> {
    let grid = WallGrid::with_dims(rows, columns)?;
    let mut generator = Backtracker::new(grid, start, picker)?;
    generator.generate_maze();

    Ok(generator.into_grid())
}

/// Any cell of the grid, uniformly. May coincide with the start.
pub fn pick_end<P: Picker>(dims: Dimensions, picker: &mut P) -> Cell {
    let count = dims.cell_count();
    let index = picker.pick(count) % count;
    (index / dims.columns, index % dims.columns)
}
