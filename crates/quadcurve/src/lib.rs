//! Procedural generator for Hilbert-style space-filling paths.
//!
//! The curve lives in a square [`Grid`] of directional codes, side length
//! `2^order`. Each [`grow`] call doubles the order by splicing four copies
//! of the current grid (two untouched, one rotated clockwise, one rotated
//! counter-clockwise) into the quadrants of a doubled grid and repairing
//! the three seams where the quadrant sub-paths join.
//!
//! Both transforms are pure: they read one grid and produce a fresh one,
//! with no I/O, no hidden state, and no failure conditions over valid
//! input. Rendering shells consume `(grid, order)` snapshots through
//! [`Grid::iter`] and [`Dir::arm_offsets`].
//!
//! ```
//! use quadcurve::{Grid, PathGraph, grow};
//!
//! let mut grid = Grid::seed();
//! for _ in 0..3 {
//!     grid = grow(&grid);
//! }
//! assert_eq!(grid.side(), 16);
//! assert!(PathGraph::new(&grid).is_single_path());
//! ```

/// Directional codes stored in grid cells.
pub mod dir;
/// Error types used across the crate.
pub mod error;
/// The square directional grid and its rotations.
pub mod grid;
/// The grow-and-splice doubling step.
pub mod grow;
/// Path walking and continuity checks.
pub mod walk;

pub use crate::{dir::Dir, grid::Grid, grow::grow, walk::PathGraph};
