use crate::board::{Board, PieceType};
use crate::error::RulesError;
use crate::moves::types::{CastleSide, MoveOutcome, Relocation};
use crate::square::Square;
use arrayvec::ArrayVec;
use tracing::{debug, warn};

#[inline(always)]
fn is_last_rank(sq: Square) -> bool {
    sq.row() == 0 || sq.row() == 7
}

/// Relocate the piece on `from` to `to`, capturing whatever stood there.
///
/// This is a mechanical executor: legality is the caller's business. A pawn
/// landing on rank 0 or 7 is replaced by a new queen. A king stepping two
/// columns also moves the matching rook, as a nested call.
pub fn move_piece(board: &mut Board, from: Square, to: Square) -> Result<MoveOutcome, RulesError> {
    if from == to {
        return Err(RulesError::NullMove(from));
    }
    let mut piece = board
        .cell_mut(from)
        .take()
        .ok_or(RulesError::EmptySquare(from))?;

    let captured = board.remove(to);

    let promoted = piece.kind == PieceType::Pawn && is_last_rank(to);
    if promoted {
        board.spawn(piece.color, PieceType::Queen, to);
        // The pawn instance is gone; report the queen that replaced it.
        piece = *board.piece_at(to).ok_or(RulesError::EmptySquare(to))?;
        debug!(%from, %to, id = piece.id.0, "pawn promoted to queen");
    } else {
        piece.position = Some(to);
        *board.cell_mut(to) = Some(piece);
    }

    debug!(
        %from, %to,
        kind = ?piece.kind, color = ?piece.color,
        captured = ?captured.map(|c| c.kind),
        "piece relocated"
    );

    let mut relocations = ArrayVec::new();
    relocations.push(Relocation { from, to });

    let mut castled = None;
    if piece.kind == PieceType::King {
        let dc = to.col() as i8 - from.col() as i8;
        if let Some(side) = CastleSide::from_king_step(dc) {
            let (rook_from_col, rook_to_col) = side.rook_cols();
            let rook_from = Square::new(to.row(), rook_from_col);
            let rook_to = Square::new(to.row(), rook_to_col);
            let rook_ready = board
                .piece_at(rook_from)
                .is_some_and(|r| r.kind == PieceType::Rook && r.color == piece.color);

            if rook_ready {
                let rook_move = move_piece(board, rook_from, rook_to)?;
                relocations.push(rook_move.relocations[0]);
                castled = Some(side);
                debug!(?side, color = ?piece.color, "castled");
            } else {
                warn!(%from, %to, "king stepped two files without a rook to castle with");
            }
        }
    }

    Ok(MoveOutcome {
        piece,
        captured,
        promoted,
        castled,
        relocations,
    })
}
