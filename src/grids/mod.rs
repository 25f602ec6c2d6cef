pub mod wall_grid;

/// `(row, column)`, row 0 is the top of the maze.
pub type Cell = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.0 < self.rows && cell.1 < self.columns
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// Neighbor enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Cell one step away in this direction, or `None` when that would go below zero.
    /// Upper bounds are the grid's business.
    pub fn offset(self, cell: Cell) -> Option<Cell> {
        let (row, column) = cell;
        match self {
            Direction::Up => row.checked_sub(1).map(|row| (row, column)),
            Direction::Down => Some((row + 1, column)),
            Direction::Left => column.checked_sub(1).map(|column| (row, column)),
            Direction::Right => Some((row, column + 1)),
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// In-bounds neighbors of a single cell. Iterates Up, Down, Left, Right,
/// skipping the sides that fall off the grid.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    pub up: Option<Cell>,
    pub down: Option<Cell>,
    pub left: Option<Cell>,
    pub right: Option<Cell>,

    counter: usize,
}

impl Neighborhood {
    pub fn new() -> Self {
        Self {
            up: None,
            down: None,
            left: None,
            right: None,
            counter: 0,
        }
    }

    pub fn get(&self, direction: Direction) -> Option<Cell> {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn set(&mut self, direction: Direction, cell: Option<Cell>) {
        match direction {
            Direction::Up => self.up = cell,
            Direction::Down => self.down = cell,
            Direction::Left => self.left = cell,
            Direction::Right => self.right = cell,
        }
    }
}

impl Default for Neighborhood {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Neighborhood {
    type Item = (Direction, Cell);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&direction) = Direction::ALL.get(self.counter) {
            self.counter += 1;
            if let Some(cell) = self.get(direction) {
                return Some((direction, cell));
            }
        }

        None
    }
}
