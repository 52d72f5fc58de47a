//! Maze generation by hole-digging (anahori)
//!
//! Digging starts from a random standing cell, that is, a cell with both
//! coordinates even. From there the digger advances two cells at a time
//! into undug territory, opening the cell in between, and backs up when
//! it gets stuck. Every standing cell ends up dug exactly once, so the
//! corridors form a spanning tree.

use log::{debug, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::grid::Grid;

/// Source of uniformly distributed integers.
///
/// Any [`rand::Rng`] will do; tests may plug in a scripted sequence.
pub trait RandomSource {
    /// Random integer in `low..=high`
    fn randint(&mut self, low: usize, high: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn randint(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low..=high)
    }
}

/// Digging direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Right,
    Up,
    Left,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
    ];

    /// Direction by its position in [`Self::ALL`]
    ///
    /// # Panics
    /// If `index` is not in `0..4`.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }

    /// Turn counterclockwise: RIGHT -> UP -> LEFT -> DOWN -> RIGHT
    pub fn rot90(self) -> Self {
        match self {
            Direction::Right => Direction::Up,
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
        }
    }

    fn random<S: RandomSource + ?Sized>(random: &mut S) -> Self {
        Self::from_index(random.randint(0, 3))
    }

    /// Unit step `(dx, dy)`; y grows downwards.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
        }
    }

    /// Move `steps` cells from `(x, y)`.
    ///
    /// Callers stay inside the border, so the result never wraps.
    fn advance(self, (x, y): (usize, usize), steps: usize) -> (usize, usize) {
        let (dx, dy) = self.offset();
        let steps = steps as isize;
        (
            x.wrapping_add_signed(dx * steps),
            y.wrapping_add_signed(dy * steps),
        )
    }
}

/// Dig a perfect maze into a freshly created grid.
///
/// The grid must be undug apart from its border. The start cell is dug
/// before the first step, so no later branch can dig back into it and
/// close a loop. Consumes `2` draws for the start point and one direction
/// draw per step attempt.
pub fn carve<S: RandomSource + ?Sized>(grid: &mut Grid, random: &mut S) {
    let start = start_point(grid, random);
    grid.set(start.0, start.1, true);
    debug!(
        "Digging {}x{} maze from x={}, y={}",
        grid.width(),
        grid.height(),
        start.0,
        start.1
    );

    // Depth-first: the top of the stack is the current position, the
    // rest is the way back.
    let mut stack = vec![start];
    let mut corridors = 0;
    while let Some(&pos) = stack.last() {
        match step_forward(grid, random, pos) {
            Some(next) => {
                corridors += 1;
                stack.push(next);
            }
            None => {
                stack.pop();
            }
        }
    }
    debug!("Maze finished with {} corridors", corridors);
}

/// Random standing cell, never on the border
fn start_point<S: RandomSource + ?Sized>(grid: &Grid, random: &mut S) -> (usize, usize) {
    let x = 2 * random.randint(1, (grid.width() - 1) / 2);
    let y = 2 * random.randint(1, (grid.height() - 1) / 2);
    (x, y)
}

/// Dig two cells towards the first undug standing cell, trying directions
/// from a random one onwards in [`Direction::rot90`] order.
///
/// Returns the new position, or `None` when every direction is blocked.
fn step_forward<S: RandomSource + ?Sized>(
    grid: &mut Grid,
    random: &mut S,
    (x, y): (usize, usize),
) -> Option<(usize, usize)> {
    debug_assert!(x % 2 == 0 && y % 2 == 0);
    debug_assert!((2..grid.width()).contains(&x) && (2..grid.height()).contains(&y));

    let mut direction = Direction::random(random);
    for _ in 0..4 {
        let (nx, ny) = direction.advance((x, y), 2);
        if !grid.get(nx, ny) {
            let (wx, wy) = direction.advance((x, y), 1);
            grid.set(wx, wy, true);
            grid.set(nx, ny, true);
            trace!("Dug {:?} from ({}, {}) to ({}, {})", direction, x, y, nx, ny);
            return Some((nx, ny));
        }
        direction = direction.rot90();
    }
    None
}

/// Maze generator owning its random source.
pub struct MazeGenerator<S = StdRng> {
    random: S,
}

impl MazeGenerator<StdRng> {
    /// Generator with a seeded [`StdRng`], or one seeded from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }
}

impl<S: RandomSource> MazeGenerator<S> {
    pub fn with_rng(random: S) -> Self {
        Self { random }
    }

    /// Dig a maze into `grid`, see [`carve`].
    pub fn carve(&mut self, grid: &mut Grid) {
        carve(grid, &mut self.random);
    }

    /// Create a grid of given interior size and dig a maze into it.
    ///
    /// Returns error, if dimensions are even or less than 3.
    pub fn generate_maze(&mut self, width: usize, height: usize) -> anyhow::Result<Grid> {
        let mut grid = Grid::new(width, height)?;
        self.carve(&mut grid);
        Ok(grid)
    }
}
