use crate::board::{Color, Piece};
use crate::square::Square;
use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound on destinations for one piece (a centred queen reaches 27).
pub const MAX_TARGETS: usize = 32;

/// Destination squares of a single piece, in generation order.
pub type Targets = ArrayVec<Square, MAX_TARGETS>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Column the king lands on.
    #[inline(always)]
    pub fn king_to_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// (rook from, rook to) columns.
    #[inline(always)]
    pub fn rook_cols(self) -> (u8, u8) {
        match self {
            CastleSide::Kingside => (7, 5),
            CastleSide::Queenside => (0, 3),
        }
    }

    /// Decode a king's column displacement, if it is a castle.
    #[inline(always)]
    pub fn from_king_step(dc: i8) -> Option<Self> {
        match dc {
            2 => Some(CastleSide::Kingside),
            -2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

/// One piece sliding from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relocation {
    pub from: Square,
    pub to: Square,
}

impl fmt::Display for Relocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Side effects of a mechanical board move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The piece standing on the destination afterwards (the new queen on promotion).
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promoted: bool,
    pub castled: Option<CastleSide>,
    /// Primary relocation first, then the rook's when castling.
    pub relocations: ArrayVec<Relocation, 2>,
}

impl MoveOutcome {
    #[inline(always)]
    pub fn mover(&self) -> Color {
        self.piece.color
    }
}

/// Result of [`Game::attempt_move`](crate::game::Game::attempt_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveReport {
    pub applied: bool,
    pub promoted: bool,
    pub castled: bool,
    /// The side now to move is in check.
    pub check: bool,
    pub checkmate: bool,
}

impl MoveReport {
    pub fn rejected() -> Self {
        MoveReport::default()
    }
}
