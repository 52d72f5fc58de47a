//! Dig a perfect maze with the hole-digging (anahori) method
//!
//! The maze lives on a [`Grid`] of odd width and height, surrounded by a
//! sentinel border. [`carve`] digs corridors two cells at a time from a
//! random starting cell, backtracking when stuck, until every reachable
//! cell is dug. The result has exactly one path between any two open
//! cells.
//!
//! # Examples
//! ```
//! use anahori_maze::{Grid, MazeGenerator};
//!
//! let mut gen = MazeGenerator::new(Some(42));
//! let maze: Grid = gen.generate_maze(11, 7).unwrap();
//!
//! let lines = maze.render();
//! assert_eq!(lines.len(), 7);
//! assert!(lines.iter().all(|line| line.chars().count() == 11));
//! println!("{}", maze);
//! ```
//!
//! Any [`rand::Rng`] can drive the digger:
//! ```
//! use anahori_maze::{carve, Grid};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut grid = Grid::new(5, 5).unwrap();
//! carve(&mut grid, &mut StdRng::seed_from_u64(0));
//! // Standing cells are always dug
//! assert!(grid.get(2, 2) && grid.get(4, 4));
//! ```

pub mod grid;
pub mod maze_generator;

pub use grid::Grid;
pub use maze_generator::{carve, Direction, MazeGenerator, RandomSource};
