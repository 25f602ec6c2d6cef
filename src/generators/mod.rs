pub mod backtracker;

use crate::grids::wall_grid::WallGrid;
use crate::grids::{Cell, Direction};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Outcome of a single generation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The wall on `from`'s `direction` side was knocked down and `to` became the new frontier.
    Carved {
        from: Cell,
        direction: Direction,
        to: Cell,
    },
    /// Dead end, the cell was popped off the stack.
    Backtracked(Cell),
    Done,
}

pub trait Generator {
    fn step_generation(&mut self) -> Step;
    fn next_step(&mut self) -> &WallGrid;
    fn generate_maze(&mut self) -> &WallGrid;
    fn is_done(&self) -> bool;
}

/// Source of the random choices made while carving.
pub trait Picker {
    /// Picks an index in `0..len`. Never called with `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<P: Picker + ?Sized> Picker for &mut P {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Uniform picker over a seedable `StdRng`.
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Picker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0, len)
    }
}
