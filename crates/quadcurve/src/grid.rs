//! The square directional grid a curve lives in.
//!
//! A [`Grid`] owns its cells and carries its own side length; the curve
//! order is recomputed from the side (`side == 2^order`) rather than kept
//! as shared mutable state. Rotation reads the source grid and writes a
//! freshly allocated destination, so source and destination never alias.

use crate::{
    dir::Dir,
    error::{self, Error},
};

/// A square grid of directional codes with power-of-two side length.
///
/// Indexing convention follows the drawn layout: the first coordinate `x`
/// grows rightward, the second coordinate `y` grows upward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Side length in cells; always a power of two.
    side: u32,
    /// Cell codes in `x`-major order (`index = x * side + y`).
    cells: Vec<Dir>,
}

impl Grid {
    /// The fixed 2×2 order-1 seed shape: `[[Up, Right], [None, Down]]` in
    /// `[x][y]` layout (legacy codes `{{0,3},{4,1}}`).
    pub fn seed() -> Self {
        Self {
            side: 2,
            cells: vec![Dir::Up, Dir::Right, Dir::None, Dir::Down],
        }
    }

    /// Build a grid directly from cells already known to be valid.
    ///
    /// Callers must pass `side * side` cells; this is the internal path
    /// used by the transforms.
    pub(crate) fn from_cells(side: u32, cells: Vec<Dir>) -> Self {
        debug_assert_eq!(cells.len(), (side * side) as usize, "cell count mismatch");
        Self { side, cells }
    }

    /// Build a grid from nested legacy codes in `[x][y]` layout.
    ///
    /// This is the boundary where external data enters: the columns must
    /// form a square with power-of-two side, and every code must belong to
    /// the closed `0..=10` set.
    pub fn from_columns(columns: &[Vec<u8>]) -> error::Result<Self> {
        let side = columns.len();
        if side == 0 || !side.is_power_of_two() {
            return Err(Error::Shape(format!(
                "side length {side} is not a positive power of two"
            )));
        }
        let mut cells = Vec::with_capacity(side * side);
        for (x, column) in columns.iter().enumerate() {
            if column.len() != side {
                return Err(Error::Shape(format!(
                    "column {x} has {} cells, expected {side}",
                    column.len()
                )));
            }
            for &code in column {
                cells.push(Dir::from_code(code)?);
            }
        }
        Ok(Self {
            side: side as u32,
            cells,
        })
    }

    /// The grid's cells as nested legacy codes in `[x][y]` layout; inverse
    /// of [`Grid::from_columns`].
    pub fn codes(&self) -> Vec<Vec<u8>> {
        (0..self.side)
            .map(|x| (0..self.side).map(|y| self.get(x, y).as_code()).collect())
            .collect()
    }

    /// Side length in cells.
    #[inline]
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Curve order; the side length is `2^order`.
    #[inline]
    pub fn order(&self) -> u32 {
        self.side.trailing_zeros()
    }

    /// Total cell count (`side * side`).
    #[inline]
    pub fn len(&self) -> u32 {
        self.side * self.side
    }

    /// Whether the grid has no cells. Always false for constructed grids;
    /// present for the conventional `len`/`is_empty` pairing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The code at `(x, y)`. Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Dir {
        self.cells[(x * self.side + y) as usize]
    }

    #[inline]
    pub(crate) fn set(&mut self, x: u32, y: u32, dir: Dir) {
        self.cells[(x * self.side + y) as usize] = dir;
    }

    /// Iterate over all cells as `((x, y), code)`.
    pub fn iter(&self) -> impl Iterator<Item = ((u32, u32), Dir)> + '_ {
        let side = self.side;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &dir)| ((i as u32 / side, i as u32 % side), dir))
    }

    /// The grid rotated 90° clockwise, with every cell's code relabeled to
    /// match the new orientation.
    ///
    /// Geometrically this is transpose followed by row reversal; the two
    /// compose into `dst[x][y] = src[side-1-y][x]`. Only the source is
    /// read, so no partially written buffer is ever observed.
    pub fn rotate_clockwise(&self) -> Self {
        let side = self.side;
        let mut cells = Vec::with_capacity(self.cells.len());
        for x in 0..side {
            for y in 0..side {
                cells.push(self.get(side - 1 - y, x).rotate_cw());
            }
        }
        Self::from_cells(side, cells)
    }

    /// The grid rotated 90° counter-clockwise; inverse of
    /// [`Grid::rotate_clockwise`] and equal to applying it three times.
    pub fn rotate_counterclockwise(&self) -> Self {
        let side = self.side;
        let mut cells = Vec::with_capacity(self.cells.len());
        for x in 0..side {
            for y in 0..side {
                cells.push(self.get(y, side - 1 - x).rotate_ccw());
            }
        }
        Self::from_cells(side, cells)
    }
}
