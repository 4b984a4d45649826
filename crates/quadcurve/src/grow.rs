//! One doubling step of the curve: quadrant placement plus seam repair.
//!
//! Growth places four copies of the current grid into the quadrants of a
//! grid twice the side length (top-left and top-right untouched, bottom-left
//! rotated clockwise, bottom-right rotated counter-clockwise), then patches
//! the three cells where the quadrant sub-paths must join so the result
//! stays one continuous path.

use crate::{dir::Dir, grid::Grid};

/// Patch table for the entry seam at `(0, size)`, the bottom-left corner of
/// the top-left quadrant. The cell gains a downward link to the cell below
/// it, which is the clockwise-rotated copy's first cell.
///
/// The `Right → UpLeft` row is carried verbatim from the construction this
/// reproduces; a `Right` input does not occur when growing from the
/// standard seed.
const ENTRY_SEAM: [(Dir, Dir); 4] = [
    (Dir::Up, Dir::UpDown),
    (Dir::None, Dir::Down),
    (Dir::Left, Dir::DownLeft),
    (Dir::Right, Dir::UpLeft),
];

/// Patch table for the exit seam at `(2*size-1, size-1)`, the top-right
/// corner of the bottom-right quadrant. The cell gains an upward link to
/// the top-right quadrant's last cell.
const EXIT_SEAM: [(Dir, Dir); 4] = [
    (Dir::Down, Dir::UpDown),
    (Dir::Left, Dir::UpLeft),
    (Dir::Right, Dir::UpRight),
    (Dir::None, Dir::Up),
];

/// Patch table for the bridge seam at `(size-1, size)`, the bottom-right
/// corner of the top-left quadrant. The cell gains a rightward link that
/// joins the top-left quadrant's exit to the top-right quadrant's entry.
///
/// The `Up` and `Down` rows are carried verbatim from the construction this
/// reproduces even though they do not add a rightward arm; neither input
/// occurs when growing from the standard seed. Only `None` and `Left` arise
/// in practice, and both gain the bridge arm.
const BRIDGE_SEAM: [(Dir, Dir); 4] = [
    (Dir::Up, Dir::UpLeft),
    (Dir::Down, Dir::UpRight),
    (Dir::Left, Dir::LeftRight),
    (Dir::None, Dir::Right),
];

/// Apply a seam table to a cell code; codes without a row pass through.
fn patch(table: &[(Dir, Dir)], dir: Dir) -> Dir {
    table
        .iter()
        .find(|&&(from, _)| from == dir)
        .map_or(dir, |&(_, to)| to)
}

/// Produce the next-order grid from `grid`, doubling the side length.
///
/// Total over any square power-of-two grid; if the input is not a valid
/// prior-order curve the output is unspecified (no validation is done).
pub fn grow(grid: &Grid) -> Grid {
    let size = grid.side();
    let doubled = size * 2;

    let bottom_left = grid.rotate_clockwise();
    // Three clockwise quarter-turns, taken in one step.
    let bottom_right = grid.rotate_counterclockwise();

    let mut next = Grid::from_cells(doubled, vec![Dir::None; (doubled * doubled) as usize]);
    for x in 0..size {
        for y in 0..size {
            next.set(x, y + size, grid.get(x, y));
            next.set(x + size, y + size, grid.get(x, y));
            next.set(x, y, bottom_left.get(x, y));
            next.set(x + size, y, bottom_right.get(x, y));
        }
    }

    let entry = patch(&ENTRY_SEAM, next.get(0, size));
    next.set(0, size, entry);
    let exit = patch(&EXIT_SEAM, next.get(doubled - 1, size - 1));
    next.set(doubled - 1, size - 1, exit);
    let bridge = patch(&BRIDGE_SEAM, next.get(size - 1, size));
    next.set(size - 1, size, bridge);

    next
}
