//! Directional codes stored in curve grid cells.
//!
//! A cell's code names the compass edge(s) its path segment connects to.
//! The set is closed: the grow/rotate transforms only ever produce values
//! from this enumeration, and [`Dir::from_code`] is the single place where
//! foreign integers are checked against it.

use crate::error::{self, Error};

/// Directional code of a single grid cell.
///
/// The numeric discriminants are the legacy on-disk encoding (`0..=10`)
/// accepted by [`Dir::from_code`] and produced by [`Dir::as_code`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Dir {
    /// Segment toward the cell above.
    Up = 0,
    /// Segment toward the cell below.
    Down = 1,
    /// Segment toward the cell to the left.
    Left = 2,
    /// Segment toward the cell to the right.
    Right = 3,
    /// No outgoing segment (placeholder/center marker).
    None = 4,
    /// Segments both up and down.
    UpDown = 5,
    /// Segments both left and right.
    LeftRight = 6,
    /// Segments down and left.
    DownLeft = 7,
    /// Segments down and right.
    DownRight = 8,
    /// Segments up and left.
    UpLeft = 9,
    /// Segments up and right.
    UpRight = 10,
}

/// All eleven directional codes in discriminant order.
pub const ALL_DIRS: [Dir; 11] = [
    Dir::Up,
    Dir::Down,
    Dir::Left,
    Dir::Right,
    Dir::None,
    Dir::UpDown,
    Dir::LeftRight,
    Dir::DownLeft,
    Dir::DownRight,
    Dir::UpLeft,
    Dir::UpRight,
];

impl Dir {
    /// The legacy numeric code for this direction.
    #[inline]
    pub fn as_code(self) -> u8 {
        self as u8
    }

    /// Parse a legacy numeric code, rejecting anything outside `0..=10`.
    pub fn from_code(code: u8) -> error::Result<Self> {
        Ok(match code {
            0 => Self::Up,
            1 => Self::Down,
            2 => Self::Left,
            3 => Self::Right,
            4 => Self::None,
            5 => Self::UpDown,
            6 => Self::LeftRight,
            7 => Self::DownLeft,
            8 => Self::DownRight,
            9 => Self::UpLeft,
            10 => Self::UpRight,
            other => return Err(Error::Code(other)),
        })
    }

    /// Relabel this code to the one it denotes after a 90° clockwise turn
    /// of the grid it sits in.
    ///
    /// Cardinals cycle `Up→Right→Down→Left→Up`; `None` is fixed; each
    /// two-way combination rotates component-wise.
    pub fn rotate_cw(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
            Self::Right => Self::Down,
            Self::None => Self::None,
            Self::UpDown => Self::LeftRight,
            Self::LeftRight => Self::UpDown,
            Self::DownLeft => Self::UpLeft,
            Self::DownRight => Self::DownLeft,
            Self::UpLeft => Self::UpRight,
            Self::UpRight => Self::DownRight,
        }
    }

    /// Relabel for a 90° counter-clockwise turn; exact inverse of
    /// [`Dir::rotate_cw`].
    pub fn rotate_ccw(self) -> Self {
        match self {
            Self::Up => Self::Left,
            Self::Down => Self::Right,
            Self::Left => Self::Down,
            Self::Right => Self::Up,
            Self::None => Self::None,
            Self::UpDown => Self::LeftRight,
            Self::LeftRight => Self::UpDown,
            Self::DownLeft => Self::DownRight,
            Self::DownRight => Self::UpRight,
            Self::UpLeft => Self::DownLeft,
            Self::UpRight => Self::UpLeft,
        }
    }

    /// Unit `(x, y)` offsets of the segment arms leaving a cell with this
    /// code, with `y` growing upward. Zero, one, or two arms.
    pub fn arm_offsets(self) -> &'static [(i64, i64)] {
        match self {
            Self::Up => &[(0, 1)],
            Self::Down => &[(0, -1)],
            Self::Left => &[(-1, 0)],
            Self::Right => &[(1, 0)],
            Self::None => &[],
            Self::UpDown => &[(0, 1), (0, -1)],
            Self::LeftRight => &[(-1, 0), (1, 0)],
            Self::DownLeft => &[(0, -1), (-1, 0)],
            Self::DownRight => &[(0, -1), (1, 0)],
            Self::UpLeft => &[(0, 1), (-1, 0)],
            Self::UpRight => &[(0, 1), (1, 0)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrip() -> crate::error::Result<()> {
        for d in ALL_DIRS {
            assert_eq!(Dir::from_code(d.as_code())?, d);
        }
        Ok(())
    }

    #[test]
    fn rejects_foreign_codes() {
        assert!(Dir::from_code(11).is_err());
        assert!(Dir::from_code(255).is_err());
    }

    #[test]
    fn cw_has_order_four() {
        for d in ALL_DIRS {
            let once = d.rotate_cw();
            let back = once.rotate_cw().rotate_cw().rotate_cw();
            assert_eq!(back, d, "{d:?} does not return after four turns");
        }
    }

    #[test]
    fn ccw_inverts_cw() {
        for d in ALL_DIRS {
            assert_eq!(d.rotate_cw().rotate_ccw(), d);
            assert_eq!(d.rotate_ccw().rotate_cw(), d);
        }
    }

    #[test]
    fn rotation_rotates_each_arm() {
        // Rotating the code must rotate its arm set: (x, y) -> (y, -x).
        for d in ALL_DIRS {
            let mut expected: Vec<(i64, i64)> =
                d.arm_offsets().iter().map(|&(x, y)| (y, -x)).collect();
            let mut actual: Vec<(i64, i64)> = d.rotate_cw().arm_offsets().to_vec();
            expected.sort_unstable();
            actual.sort_unstable();
            assert_eq!(actual, expected, "arm mismatch rotating {d:?}");
        }
    }

    #[test]
    fn legacy_relabel_table() {
        // The full relabel map in legacy codes, as the original renderer
        // interprets them.
        let expected = [3u8, 2, 0, 1, 4, 6, 5, 9, 7, 10, 8];
        for (code, want) in expected.into_iter().enumerate() {
            let d = Dir::from_code(code as u8).unwrap();
            assert_eq!(d.rotate_cw().as_code(), want);
        }
    }
}
