use std::{fmt::Display, ops::Index, str::FromStr};

use log::debug;

use crate::{Error, Result};

/// Offsets to the eight surrounding cells, in row-major order.
pub(crate) const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// True for the eight surrounding cells, false for the cell itself.
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

/// Rectangular grid of letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Rejects grids without cells and rows of unequal length.
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self> {
        let cols = rows
            .first()
            .map(Vec::len)
            .ok_or_else(|| Error::MalformedGrid("grid has no rows".to_owned()))?;
        if cols == 0 {
            return Err(Error::MalformedGrid("grid has no columns".to_owned()));
        }
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(Error::MalformedGrid(format!(
                "row {} has {} cells, expected {}",
                idx,
                row.len(),
                cols
            )));
        }

        let grid = Grid {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        };
        debug!("Loaded {}x{} grid", grid.rows, grid.cols);
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn index_of(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }

    pub fn coord_of(&self, idx: usize) -> Coord {
        Coord::new(idx / self.cols, idx % self.cols)
    }

    pub fn neighbor(&self, coord: Coord, direction: usize) -> Option<Coord> {
        let (d_row, d_col) = DIRECTIONS.get(direction)?;
        let row = coord.row.checked_add_signed(*d_row)?;
        let col = coord.col.checked_add_signed(*d_col)?;
        (row < self.rows && col < self.cols).then_some(Coord::new(row, col))
    }

    /// In-bounds cells around `coord`, in row-major order.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        (0..DIRECTIONS.len()).filter_map(move |direction| self.neighbor(coord, direction))
    }

    /// The letters along `path`.
    pub fn spell(&self, path: &[Coord]) -> String {
        path.iter().map(|&coord| self[coord]).collect()
    }
}

impl Index<Coord> for Grid {
    type Output = char;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.cells[self.index_of(coord)]
    }
}

impl FromStr for Grid {
    type Err = Error;

    /// One row per non-blank line.
    fn from_str(s: &str) -> Result<Self> {
        Grid::new(
            s.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(|line| line.chars().map(|c| c.to_ascii_uppercase()).collect())
                .collect(),
        )
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.cols) {
            writeln!(f, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }
}
