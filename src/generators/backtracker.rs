use crate::error::{MazeError, Result};
use crate::generators::{Generator, Picker, Step};
use crate::grids::wall_grid::WallGrid;
use crate::grids::{Cell, Direction};
use log::{debug, trace};

/// Randomized depth-first carver with an explicit stack.
///
/// Each step peeks the top of the stack, marks it visited and either carves into a
/// random unvisited neighbor (pushing it) or, at a dead end, pops it. The stack never
/// holds more than `rows * columns` frames and a popped cell is never pushed again.
pub struct Backtracker<P> {
    grid: WallGrid,
    stack: Vec<Cell>,
    picker: P,
    carved: usize,
    pub done: bool,
}

impl<P: Picker> Backtracker<P> {
    /// `grid` must be fresh: nothing visited and every wall standing.
    pub fn new(grid: WallGrid, start: Cell, picker: P) -> Result<Self> {
        let dims = grid.dims();
        let (visited, passages) = (grid.visited_count(), grid.open_passages());
        if visited != 0 || passages != 0 {
            return Err(MazeError::UsedGrid { visited, passages });
        }
        if !grid.contains(start) {
            return Err(MazeError::OutOfBoundsStart {
                cell: start,
                rows: dims.rows,
                columns: dims.columns,
            });
        }

        let mut stack = Vec::with_capacity(dims.cell_count());
        stack.push(start);

        Ok(Self {
            grid,
            stack,
            picker,
            carved: 0,
            done: false,
        })
    }

    pub fn grid(&self) -> &WallGrid {
        &self.grid
    }

    pub fn into_grid(self) -> WallGrid {
        self.grid
    }

    /// Pending frames, bottom first. The last entry is the cell being explored.
    pub fn stack(&self) -> &[Cell] {
        &self.stack
    }

    fn candidates(&self, current: Cell) -> Vec<(Direction, Cell)> {
        self.grid
            .neighbors_in_bounds(current)
            .filter(|&(_, cell)| !self.grid.is_visited(cell))
            .collect()
    }
}

impl<P: Picker> Generator for Backtracker<P> {
    fn step_generation(&mut self) -> Step {
        let current = match self.stack.last() {
            Some(&current) => current,
            None => {
                self.done = true;
                return Step::Done;
            }
        };
        self.grid.mark_visited(current);

        let candidates = self.candidates(current);
        if candidates.is_empty() {
            self.stack.pop();
            trace!("dead end at {:?}, {} frames left", current, self.stack.len());

            if self.stack.is_empty() {
                self.done = true;
                debug!(
                    "maze finished: {} cells, {} passages",
                    self.grid.dims().cell_count(),
                    self.carved
                );
            }
            return Step::Backtracked(current);
        }

        let (direction, next) = candidates[self.picker.pick(candidates.len()) % candidates.len()];
        self.grid.remove_wall_between(current, direction);
        self.stack.push(next);
        self.carved += 1;
        trace!("carved {:?} {:?} -> {:?}", current, direction, next);

        Step::Carved {
            from: current,
            direction,
            to: next,
        }
    }

    fn next_step(&mut self) -> &WallGrid {
        self.step_generation();
        &self.grid
    }

    fn generate_maze(&mut self) -> &WallGrid {
        while !self.done {
            self.step_generation();
        }

        &self.grid
    }

    fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod test_backtracker {
    use super::*;
    use crate::generators::RandomPicker;

    /// Replays a fixed list of indices, then keeps picking the first candidate.
    struct Scripted(Vec<usize>, usize);

    impl Picker for Scripted {
        fn pick(&mut self, len: usize) -> usize {
            let choice = self.0.get(self.1).copied().unwrap_or(0);
            self.1 += 1;
            assert!(choice < len, "script chose {} out of {}", choice, len);
            choice
        }
    }

    fn assert_symmetric(grid: &WallGrid) {
        for cell in grid.cells() {
            for (direction, neighbor) in grid.neighbors_in_bounds(cell) {
                assert_eq!(
                    grid.has_wall(cell, direction),
                    grid.has_wall(neighbor, -direction),
                    "{:?} {:?} / {:?}",
                    cell,
                    direction,
                    neighbor
                );
            }
        }
    }

    #[test]
    fn scripted_three_by_three() {
        let grid = WallGrid::with_dims(3, 3).unwrap();
        let script = Scripted(vec![0, 0, 0, 1, 0, 1, 0, 0], 0);
        let mut generator = Backtracker::new(grid, (0, 0), script).unwrap();

        let mut carves = Vec::new();
        while !generator.is_done() {
            if let Step::Carved { from, direction, to } = generator.step_generation() {
                carves.push((from, direction, to));
            }
        }

        assert_eq!(
            carves,
            vec![
                ((0, 0), Direction::Down, (1, 0)),
                ((1, 0), Direction::Down, (2, 0)),
                ((2, 0), Direction::Right, (2, 1)),
                ((2, 1), Direction::Right, (2, 2)),
                ((2, 2), Direction::Up, (1, 2)),
                ((1, 2), Direction::Left, (1, 1)),
                ((1, 1), Direction::Up, (0, 1)),
                ((0, 1), Direction::Right, (0, 2)),
            ]
        );

        let grid = generator.grid();
        assert_eq!(grid.visited_count(), 9);
        assert_eq!(grid.open_passages(), 8);
        assert_symmetric(grid);
    }

    #[test]
    fn single_cell_finishes_in_one_step() {
        let grid = WallGrid::with_dims(1, 1).unwrap();
        let mut generator = Backtracker::new(grid, (0, 0), RandomPicker::seeded(1)).unwrap();

        assert_eq!(generator.step_generation(), Step::Backtracked((0, 0)));
        assert!(generator.is_done());
        assert_eq!(generator.step_generation(), Step::Done);

        let grid = generator.into_grid();
        assert!(grid.is_visited((0, 0)));
        for &direction in Direction::ALL.iter() {
            assert!(grid.has_wall((0, 0), direction));
        }
    }

    #[test]
    fn rejects_start_outside_grid() {
        let grid = WallGrid::with_dims(2, 3).unwrap();
        let err = Backtracker::new(grid, (2, 0), RandomPicker::seeded(1))
            .err()
            .unwrap();
        assert_eq!(
            err,
            MazeError::OutOfBoundsStart {
                cell: (2, 0),
                rows: 2,
                columns: 3
            }
        );
    }

    #[test]
    fn rejects_a_grid_with_visited_cells() {
        let mut grid = WallGrid::with_dims(1, 3).unwrap();
        grid.mark_visited((0, 1));

        let err = Backtracker::new(grid, (0, 0), RandomPicker::seeded(1))
            .err()
            .unwrap();
        assert_eq!(
            err,
            MazeError::UsedGrid {
                visited: 1,
                passages: 0
            }
        );
    }

    #[test]
    fn rejects_a_grid_with_open_walls() {
        let mut grid = WallGrid::with_dims(2, 2).unwrap();
        grid.remove_wall_between((0, 0), Direction::Right);

        let err = Backtracker::new(grid, (0, 0), RandomPicker::seeded(1))
            .err()
            .unwrap();
        assert_eq!(
            err,
            MazeError::UsedGrid {
                visited: 0,
                passages: 1
            }
        );
    }

    #[test]
    fn next_step_walks_to_a_spanning_tree() {
        let grid = WallGrid::with_dims(4, 5).unwrap();
        let mut generator = Backtracker::new(grid, (1, 3), RandomPicker::seeded(17)).unwrap();

        let mut steps = 0;
        while !generator.is_done() {
            let grid = generator.next_step();
            assert_symmetric(grid);
            steps += 1;
        }

        // 19 carves plus 20 backtracks
        assert_eq!(steps, 39);
        let grid = generator.next_step();
        assert_eq!(grid.visited_count(), 20);
        assert_eq!(grid.open_passages(), 19);
        assert_symmetric(grid);
    }

    #[test]
    fn stepping_keeps_walls_symmetric() {
        let grid = WallGrid::with_dims(5, 7).unwrap();
        let mut generator = Backtracker::new(grid, (2, 3), RandomPicker::seeded(99)).unwrap();

        let mut carves = 0;
        let mut backtracks = 0;
        let mut popped = Vec::new();
        while !generator.is_done() {
            assert!(generator.stack().len() <= 35);
            match generator.step_generation() {
                Step::Carved { from, to, .. } => {
                    assert_ne!(from, to);
                    assert!(!popped.contains(&to));
                    carves += 1;
                }
                Step::Backtracked(cell) => {
                    assert!(!popped.contains(&cell));
                    popped.push(cell);
                    backtracks += 1;
                }
                Step::Done => unreachable!(),
            }
            assert_symmetric(generator.grid());
        }

        assert_eq!(carves, 34);
        assert_eq!(backtracks, 35);
        assert!(generator.stack().is_empty());
        assert_eq!(generator.grid().visited_count(), 35);
    }

    #[test]
    fn generate_maze_runs_to_completion() {
        let grid = WallGrid::with_dims(6, 4).unwrap();
        let mut generator = Backtracker::new(grid, (5, 3), RandomPicker::seeded(5)).unwrap();

        let grid = generator.generate_maze();
        assert_eq!(grid.visited_count(), 24);
        assert_eq!(grid.open_passages(), 23);
        assert!(generator.is_done());
    }
}
