use crate::board::{Board, Piece, PieceType};
use crate::game::Game;
use crate::moves::square_control::{covered_squares, in_check};
use crate::moves::types::{CastleSide, Targets};
use crate::square::Square;

// Offset tables as (row delta, col delta). Order is the order moves are reported in.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// Ray directions for a sliding piece, empty for everything else.
#[inline(always)]
pub(crate) fn slide_dirs(kind: PieceType) -> &'static [(i8, i8)] {
    match kind {
        PieceType::Bishop => &BISHOP_DIRS,
        PieceType::Rook => &ROOK_DIRS,
        PieceType::Queen => &QUEEN_DIRS,
        _ => &[],
    }
}

/// Empty, or held by an enemy that is not the king.
#[inline(always)]
fn can_land(board: &Board, piece: &Piece, sq: Square) -> bool {
    match board.piece_at(sq) {
        None => true,
        Some(other) => other.is_enemy_of(piece) && other.kind != PieceType::King,
    }
}

pub fn generate_pawn_moves(board: &Board, piece: &Piece, targets: &mut Targets) {
    let from = piece.square();
    let dir = piece.color.forward();

    let Some(one) = from.offset(dir, 0) else {
        return;
    };

    if board.is_empty(one) {
        targets.push(one);

        if from.row() == piece.color.pawn_row()
            && let Some(two) = from.offset(2 * dir, 0)
            && board.is_empty(two)
        {
            targets.push(two);
        }
    }

    for dc in [-1, 1] {
        if let Some(diag) = from.offset(dir, dc)
            && let Some(victim) = board.piece_at(diag)
            && victim.is_enemy_of(piece)
            && victim.kind != PieceType::King
        {
            targets.push(diag);
        }
    }
}

pub fn generate_knight_moves(board: &Board, piece: &Piece, targets: &mut Targets) {
    let from = piece.square();
    for &(dr, dc) in &KNIGHT_OFFSETS {
        if let Some(to) = from.offset(dr, dc)
            && can_land(board, piece, to)
        {
            targets.push(to);
        }
    }
}

/// Bishop, rook and queen: walk each ray until the first occupied square,
/// keeping it only when it holds a capturable enemy.
pub fn generate_slider_moves(
    board: &Board,
    piece: &Piece,
    dirs: &[(i8, i8)],
    targets: &mut Targets,
) {
    let from = piece.square();
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(sq) = cur {
            if board.is_empty(sq) {
                targets.push(sq);
            } else {
                if can_land(board, piece, sq) {
                    targets.push(sq);
                }
                break;
            }
            cur = sq.offset(dr, dc);
        }
    }
}

/// Adjacent steps that are not covered by enemy pieces, then castling.
///
/// Only strict legality counts the enemy king's reach and traces sliders
/// through the moving king; otherwise a king may step next to the other
/// king or back along a checking ray.
pub fn generate_king_moves(game: &Game, piece: &Piece, targets: &mut Targets) {
    let board = game.board();
    let from = piece.square();
    let strict = game.options().strict_legality;

    let covered = if strict {
        covered_squares(board, piece.color, Some(from), true)
    } else {
        covered_squares(board, piece.color, None, false)
    };

    for &(dr, dc) in &KING_OFFSETS {
        if let Some(to) = from.offset(dr, dc)
            && can_land(board, piece, to)
            && !covered.contains(&to)
        {
            targets.push(to);
        }
    }

    let home = piece.color.home_row();
    if game.king_moved(piece.color) || from != Square::new(home, 4) {
        return;
    }

    if strict && in_check(board, piece.color) {
        return;
    }

    for side in [CastleSide::Queenside, CastleSide::Kingside] {
        let (rook_col, _) = side.rook_cols();
        let rook_ready = board
            .piece_at(Square::new(home, rook_col))
            .is_some_and(|r| r.kind == PieceType::Rook && r.color == piece.color);
        if !rook_ready {
            continue;
        }

        let (lo, hi) = if rook_col < 4 { (rook_col + 1, 4) } else { (5, rook_col) };
        let path_clear = (lo..hi).all(|col| board.is_empty(Square::new(home, col)));
        if !path_clear {
            continue;
        }

        // Transit square the king crosses on its way.
        let transit = Square::new(home, if rook_col < 4 { 3 } else { 5 });
        if strict && covered.contains(&transit) {
            continue;
        }

        targets.push(Square::new(home, side.king_to_col()));
    }
}

/// Every square `piece` could move to next, dispatched on its type.
///
/// Only the king filters out squares the enemy covers; other pieces may
/// leave their own king exposed unless the game runs with strict legality.
pub fn possible_moves(game: &Game, piece: &Piece) -> Targets {
    let board = game.board();
    let mut targets = Targets::new();
    match piece.kind {
        PieceType::Pawn => generate_pawn_moves(board, piece, &mut targets),
        PieceType::Knight => generate_knight_moves(board, piece, &mut targets),
        PieceType::Bishop | PieceType::Rook | PieceType::Queen => {
            generate_slider_moves(board, piece, slide_dirs(piece.kind), &mut targets)
        }
        PieceType::King => generate_king_moves(game, piece, &mut targets),
    }
    targets
}
