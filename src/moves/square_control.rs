use crate::board::{Board, Color, Piece, PieceType};
use crate::moves::movegen::{KING_OFFSETS, KNIGHT_OFFSETS, slide_dirs};
use crate::moves::types::Targets;
use crate::square::Square;
use std::collections::HashSet;

/// Squares `piece` threatens, ignoring any piece standing on `lifted`.
///
/// Unlike move generation, the first occupied square of a ray is always
/// threatened whatever stands there: a defended piece is covered and an
/// enemy king is in check.
pub(crate) fn threats(board: &Board, piece: &Piece, lifted: Option<Square>) -> Targets {
    let from = piece.square();
    let mut targets = Targets::new();
    match piece.kind {
        PieceType::Pawn => {
            let dir = piece.color.forward();
            targets.extend([-1, 1].into_iter().filter_map(|dc| from.offset(dir, dc)));
        }
        PieceType::Knight => {
            targets.extend(KNIGHT_OFFSETS.iter().filter_map(|&(dr, dc)| from.offset(dr, dc)));
        }
        PieceType::King => {
            targets.extend(KING_OFFSETS.iter().filter_map(|&(dr, dc)| from.offset(dr, dc)));
        }
        PieceType::Bishop | PieceType::Rook | PieceType::Queen => {
            for &(dr, dc) in slide_dirs(piece.kind) {
                let mut cur = from.offset(dr, dc);
                while let Some(sq) = cur {
                    targets.push(sq);
                    if !board.is_empty(sq) && Some(sq) != lifted {
                        break;
                    }
                    cur = sq.offset(dr, dc);
                }
            }
        }
    }
    targets
}

/// Squares `piece` currently threatens. Used for check detection only.
pub fn taking_moves(board: &Board, piece: &Piece) -> Targets {
    threats(board, piece, None)
}

/// Union of every square the opponents of `defender` threaten.
///
/// The enemy king's neighbourhood only counts with `with_king`. Pass the
/// defending king's square as `lifted` to trace sliders through it.
pub fn covered_squares(
    board: &Board,
    defender: Color,
    lifted: Option<Square>,
    with_king: bool,
) -> HashSet<Square> {
    let mut covered = HashSet::with_capacity(64);
    for piece in board.pieces_of(defender.opposite()) {
        if piece.kind == PieceType::King && !with_king {
            continue;
        }
        covered.extend(threats(board, piece, lifted));
    }
    covered
}

/// All pieces of `attacker` whose threats include `square`, in board order.
pub fn attackers_of(board: &Board, square: Square, attacker: Color) -> Vec<Piece> {
    board
        .pieces_of(attacker)
        .filter(|p| taking_moves(board, p).contains(&square))
        .copied()
        .collect()
}

pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    board
        .pieces_of(attacker)
        .any(|p| taking_moves(board, p).contains(&square))
}

/// Is `side`'s king attacked? A board without that king is never in check.
#[inline(always)]
pub fn in_check(board: &Board, side: Color) -> bool {
    match board.find_king(side) {
        Some(king) => is_square_attacked(board, king.square(), side.opposite()),
        None => false,
    }
}
