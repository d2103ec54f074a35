use crate::board::{Board, Color, PieceType};
use crate::game::Game;
use serde::{Deserialize, Serialize};

/// Outcome of the position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InPlay,
    Check,
    Checkmate,
    Stalemate,
    DrawDeadPosition,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::DrawDeadPosition
        )
    }
}

fn count(board: &Board, color: Color, kind: PieceType) -> usize {
    board
        .pieces_of(color)
        .filter(|p| p.kind == kind)
        .count()
}

pub fn is_insufficient_material(board: &Board) -> bool {
    // Quick reject: any pawn/rook/queen on the board => mating material exists.
    let heavy = board.pieces().any(|p| {
        matches!(
            p.kind,
            PieceType::Pawn | PieceType::Rook | PieceType::Queen
        )
    });
    if heavy {
        return false;
    }

    let wb = count(board, Color::White, PieceType::Bishop);
    let wn = count(board, Color::White, PieceType::Knight);
    let bb = count(board, Color::Black, PieceType::Bishop);
    let bn = count(board, Color::Black, PieceType::Knight);

    let w_minors = wb + wn;
    let b_minors = bb + bn;

    match w_minors + b_minors {
        // K vs K, or K vs a single minor
        0 | 1 => true,
        // KNN vs K, or one minor each
        2 => wn == 2 || bn == 2 || (w_minors == 1 && b_minors == 1),
        // 3+ minors total: conservatively say "not dead".
        _ => false,
    }
}

/// Determine the game status for the side to move.
///
/// Priority: dead position, then check / checkmate, then stalemate.
/// Refreshes the game's checking-piece cache as a side effect.
pub fn position_status(game: &mut Game) -> GameStatus {
    if is_insufficient_material(game.board()) {
        return GameStatus::DrawDeadPosition;
    }

    let turn = game.turn();
    let Ok(king) = game.get_king(turn) else {
        return GameStatus::InPlay;
    };

    if game.is_check(&king) {
        if game.is_checkmate() {
            GameStatus::Checkmate
        } else {
            GameStatus::Check
        }
    } else if !game.has_legal_move(turn) {
        GameStatus::Stalemate
    } else {
        GameStatus::InPlay
    }
}
