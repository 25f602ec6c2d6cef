use crate::grids::wall_grid::WallGrid;
use crate::grids::{Cell, Direction};

const CORNER: char = '+';
const HORIZONTAL: &str = "---";
const VERTICAL: char = '|';
const OPEN: &str = "   ";

/// Draws the maze as text, row 0 on top. `start` is marked `S` and `end` `E`; when they
/// coincide the start wins.
pub fn render(grid: &WallGrid, start: Cell, end: Cell) -> String {
    let dims = grid.dims();
    let mut out = String::with_capacity((dims.rows * 2 + 1) * (dims.columns * 4 + 2));

    for row in 0..dims.rows {
        // wall above the row
        for column in 0..dims.columns {
            out.push(CORNER);
            out.push_str(if grid.has_wall((row, column), Direction::Up) {
                HORIZONTAL
            } else {
                OPEN
            });
        }
        out.push(CORNER);
        out.push('\n');

        for column in 0..dims.columns {
            let cell = (row, column);
            out.push(if grid.has_wall(cell, Direction::Left) {
                VERTICAL
            } else {
                ' '
            });
            out.push_str(if cell == start {
                " S "
            } else if cell == end {
                " E "
            } else {
                OPEN
            });
        }
        let last = (row, dims.columns - 1);
        out.push(if grid.has_wall(last, Direction::Right) {
            VERTICAL
        } else {
            ' '
        });
        out.push('\n');
    }

    let bottom = dims.rows - 1;
    for column in 0..dims.columns {
        out.push(CORNER);
        out.push_str(if grid.has_wall((bottom, column), Direction::Down) {
            HORIZONTAL
        } else {
            OPEN
        });
    }
    out.push(CORNER);
    out.push('\n');

    out
}
