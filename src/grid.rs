//! Cell storage for the maze

use std::fmt;

use anyhow::ensure;
use itertools::Itertools;

/// Rectangular maze field surrounded by a one-cell sentinel border (banpei).
///
/// ```text
///  width + 2
///  <----->
///  1111111  ^
///  1000001  |
///  1000001  | height + 2
///  1000001  |
///  1111111  v
/// ```
///
/// Each cell holds one bit. `true` marks a cell that the digger must not
/// enter: either a border cell or an interior cell that has already been
/// dug out. Undug interior cells are `false` and render as brick.
///
/// Coordinates are absolute in the padded space, so the interior spans
/// `1..=width` and `1..=height`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub const S_BRICK: char = '@';
    pub const S_SPACE: char = ' ';

    /// Create an undug grid with the border in place.
    ///
    /// Returns error, if `width` or `height` is even or less than 3.
    pub fn new(width: usize, height: usize) -> anyhow::Result<Self> {
        ensure!(
            width % 2 == 1 && height % 2 == 1,
            "Maze dimensions must be odd, got width={}, height={}",
            width,
            height
        );
        ensure!(
            width >= 3 && height >= 3,
            "Maze dimensions must be at least 3, got width={}, height={}",
            width,
            height
        );

        let mut grid = Self {
            width,
            height,
            cells: vec![false; (width + 2) * (height + 2)],
        };
        for x in 0..width + 2 {
            grid.set(x, 0, true);
            grid.set(x, height + 1, true);
        }
        for y in 0..height + 2 {
            grid.set(0, y, true);
            grid.set(width + 1, y, true);
        }
        Ok(grid)
    }

    /// Interior width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Interior height
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x <= self.width + 1 && y <= self.height + 1,
            "Cell x={}, y={} is outside of {}x{} grid",
            x,
            y,
            self.width + 2,
            self.height + 2
        );
        (self.width + 2) * y + x
    }

    /// Read cell at padded coordinate `(x, y)`.
    ///
    /// # Panics
    /// If the coordinate lies outside the border.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Write cell at padded coordinate `(x, y)`.
    ///
    /// # Panics
    /// If the coordinate lies outside the border.
    pub fn set(&mut self, x: usize, y: usize, val: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = val;
    }

    /// Whether `(x, y)` is part of the sentinel border
    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x == self.width + 1 || y == self.height + 1
    }

    /// Interior rows as text, one character per cell, border omitted.
    pub fn render(&self) -> Vec<String> {
        (1..=self.height)
            .map(|y| {
                (1..=self.width)
                    .map(|x| {
                        if self.get(x, y) {
                            Self::S_SPACE
                        } else {
                            Self::S_BRICK
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render().iter().join("\n"))
    }
}
