use crate::error::RulesError;
use crate::square::Square;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Starting rank layout, a-file to h-file.
const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Which side a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

/// Piece enum to hold all types of pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Identity of a piece instance. Stable across relocations; a promoted
/// pawn is replaced by a queen with a fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub color: Color,
    pub kind: PieceType,
    /// `None` only for a piece that is not on the board.
    pub position: Option<Square>,
}

impl Piece {
    /// Where the piece stands. Pieces read off the [`Board`] are always placed.
    ///
    /// Panics for a piece that was removed or captured; check `position`
    /// first when that can happen.
    #[inline(always)]
    pub fn square(&self) -> Square {
        match self.position {
            Some(sq) => sq,
            None => panic!("piece {:?} has not been placed", self.id),
        }
    }

    #[inline(always)]
    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.color != other.color
    }

    /// FEN-style letter: uppercase for White.
    pub fn symbol(&self) -> char {
        let c = match self.kind {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

/// 8×8 grid of optional pieces, indexed `[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    next_id: u32,
}

impl Board {
    /// Create an empty board.
    pub fn new_empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            next_id: 0,
        }
    }

    /// Standard opening placement.
    pub fn new() -> Self {
        let mut b = Board::new_empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            b.spawn(Color::Black, kind, Square::new(0, col));
            b.spawn(Color::Black, PieceType::Pawn, Square::new(1, col));
            b.spawn(Color::White, PieceType::Pawn, Square::new(6, col));
            b.spawn(Color::White, kind, Square::new(7, col));
        }
        b
    }

    /// Put a new piece on an empty square.
    pub fn place(
        &mut self,
        color: Color,
        kind: PieceType,
        sq: Square,
    ) -> Result<PieceId, RulesError> {
        if !self.is_empty(sq) {
            return Err(RulesError::Occupied(sq));
        }
        Ok(self.spawn(color, kind, sq))
    }

    /// Take whatever stands on `sq` off the board.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        let mut piece = self.cell_mut(sq).take()?;
        piece.position = None;
        Some(piece)
    }

    /// Allocate a fresh piece at `sq`, overwriting the square.
    pub(crate) fn spawn(&mut self, color: Color, kind: PieceType, sq: Square) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        *self.cell_mut(sq) = Some(Piece {
            id,
            color,
            kind,
            position: Some(sq),
        });
        id
    }

    /// Returns the piece at a given square, or None if empty.
    #[inline(always)]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.grid[sq.row() as usize][sq.col() as usize].as_ref()
    }

    #[inline(always)]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Returns just the color at a given square, or None if empty.
    #[inline(always)]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    #[inline(always)]
    pub(crate) fn cell_mut(&mut self, sq: Square) -> &mut Option<Piece> {
        &mut self.grid[sq.row() as usize][sq.col() as usize]
    }

    /// Every piece on the board, row-major from a8.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.grid.iter().flatten().flatten()
    }

    /// Pieces of one side.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |p| p.color == color)
    }

    /// Board scan for the king of `color`.
    pub fn find_king(&self, color: Color) -> Option<&Piece> {
        self.pieces_of(color).find(|p| p.kind == PieceType::King)
    }

    /// Validate that every piece's stored square matches its grid cell and
    /// that no id appears twice.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = std::collections::HashSet::new();
        for sq in Square::all() {
            if let Some(piece) = self.piece_at(sq) {
                if piece.position != Some(sq) {
                    return Err(format!(
                        "piece {:?} on {} thinks it is on {:?}",
                        piece.id, sq, piece.position
                    ));
                }
                if !seen.insert(piece.id) {
                    return Err(format!("piece {:?} is on more than one square", piece.id));
                }
            }
        }
        Ok(())
    }
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row of this side's back rank.
    #[inline(always)]
    pub fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row delta of a pawn advance: White moves toward row 0.
    #[inline(always)]
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row this side's pawns start on.
    #[inline(always)]
    pub fn pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.opposite()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

impl PieceType {
    /// Slides along rays rather than stepping to fixed offsets.
    #[inline(always)]
    pub fn is_slider(self) -> bool {
        matches!(self, PieceType::Bishop | PieceType::Rook | PieceType::Queen)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Text diagram, rank 8 on top, `.` for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.grid.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                let c = cell.as_ref().map_or('.', Piece::symbol);
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
