use crate::error::RulesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A board coordinate. Row 0 is Black's back rank, row 7 is White's;
/// column 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Build a square from in-range coordinates.
    ///
    /// Panics if either coordinate is outside 0..=7.
    #[inline(always)]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square coordinates out of range");
        Square { row, col }
    }

    /// Checked constructor from signed coordinates.
    #[inline(always)]
    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline(always)]
    pub fn col(self) -> u8 {
        self.col
    }

    /// The square `dr` rows and `dc` columns away, if it is on the board.
    #[inline(always)]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        Square::try_new(self.row as i8 + dr, self.col as i8 + dc)
    }

    /// All 64 squares, row-major from a8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = 8 - self.row;
        write!(f, "{}{}", file, rank)
    }
}

impl FromStr for Square {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(RulesError::InvalidSquare(s.to_string()));
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        if file > 7 || rank > 7 {
            return Err(RulesError::InvalidSquare(s.to_string()));
        }
        Ok(Square {
            row: 7 - rank,
            col: file,
        })
    }
}
