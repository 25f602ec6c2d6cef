use crate::error::{MazeError, Result};
use crate::grids::{Cell, Dimensions, Direction, Neighborhood};

/// The four walls around one cell, `true` meaning the wall is standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Walls {
    pub const ALL: Walls = Walls {
        up: true,
        down: true,
        left: true,
        right: true,
    };

    #[inline]
    pub fn get(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    // returns previous state of the wall
    #[inline]
    fn clear(&mut self, direction: Direction) -> bool {
        let wall = match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        };
        std::mem::replace(wall, false)
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::ALL
    }
}

/// Rectangular maze grid: a wall record and a visited flag per cell, stored row-major.
///
/// Walls shared by two cells are stored on both sides and only ever cleared
/// together through [`WallGrid::remove_wall_between`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallGrid {
    dims: Dimensions,

    walls: Vec<Walls>,
    visited: Vec<bool>,
}

impl WallGrid {
    /// Fails when either side is zero or the cell count overflows `usize`.
    pub fn with_dims(rows: usize, columns: usize) -> Result<Self> {
        let count = match rows.checked_mul(columns) {
            Some(count) if count > 0 => count,
            _ => return Err(MazeError::InvalidDimensions { rows, columns }),
        };

        Ok(Self {
            dims: Dimensions { rows, columns },
            walls: vec![Walls::ALL; count],
            visited: vec![false; count],
        })
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.dims.contains(cell)
    }

    #[inline]
    fn index_of(&self, row: usize, column: usize) -> usize {
        (self.dims.columns * row) + column
    }

    #[inline]
    pub fn walls(&self, cell: Cell) -> Walls {
        self.walls[self.index_of(cell.0, cell.1)]
    }

    #[inline]
    pub fn has_wall(&self, cell: Cell, direction: Direction) -> bool {
        self.walls(cell).get(direction)
    }

    #[inline]
    pub fn is_visited(&self, cell: Cell) -> bool {
        self.visited[self.index_of(cell.0, cell.1)]
    }

    /// Returns whether the cell had already been visited.
    #[inline]
    pub fn mark_visited(&mut self, cell: Cell) -> bool {
        let index = self.index_of(cell.0, cell.1);
        std::mem::replace(&mut self.visited[index], true)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&visited| visited).count()
    }

    pub fn neighbor_of(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        direction
            .offset(cell)
            .filter(|&neighbor| self.contains(neighbor))
    }

    pub fn neighbors_in_bounds(&self, cell: Cell) -> Neighborhood {
        let mut neighbors = Neighborhood::new();
        for &direction in Direction::ALL.iter() {
            neighbors.set(direction, self.neighbor_of(cell, direction));
        }

        neighbors
    }

    /// Knocks down the wall on `cell`'s `direction` side together with its twin on the
    /// neighbor. Returns the neighbor, or `None` if that side is the outer boundary, in
    /// which case nothing changes.
    pub fn remove_wall_between(&mut self, cell: Cell, direction: Direction) -> Option<Cell> {
        let neighbor = self.neighbor_of(cell, direction)?;

        let index_one = self.index_of(cell.0, cell.1);
        let index_two = self.index_of(neighbor.0, neighbor.1);

        let one = self.walls[index_one].clear(direction);
        let two = self.walls[index_two].clear(-direction);
        debug_assert_eq!(one, two, "asymmetric wall between {:?} and {:?}", cell, neighbor);

        Some(neighbor)
    }

    /// Number of shared walls that have been removed, i.e. passage graph edges.
    pub fn open_passages(&self) -> usize {
        let mut count = 0;
        for row in 0..self.dims.rows {
            for column in 0..self.dims.columns {
                let walls = self.walls((row, column));
                if row + 1 < self.dims.rows && !walls.down {
                    count += 1;
                }
                if column + 1 < self.dims.columns && !walls.right {
                    count += 1;
                }
            }
        }

        count
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let columns = self.dims.columns;
        (0..self.dims.cell_count()).map(move |index| (index / columns, index % columns))
    }
}
