use thiserror::Error;

use crate::grids::Cell;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("invalid maze size {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("start cell {cell:?} lies outside the {rows}x{columns} grid")]
    OutOfBoundsStart {
        cell: Cell,
        rows: usize,
        columns: usize,
    },

    #[error("grid was already carved: {visited} cells visited, {passages} passages open")]
    UsedGrid { visited: usize, passages: usize },
}

pub type Result<T> = std::result::Result<T, MazeError>;
