use std::str::FromStr;

use gambit::board::{Board, Color, PieceType};
use gambit::game::{Game, GameOptions};
use gambit::moves::movegen::possible_moves;
use gambit::square::Square;

fn sq(name: &str) -> Square {
    Square::from_str(name).unwrap()
}

fn setup(pieces: &[(Color, PieceType, &str)]) -> Game {
    let mut board = Board::new_empty();
    for &(color, kind, at) in pieces {
        board.place(color, kind, sq(at)).unwrap();
    }
    let mut game = Game::from_board(board, Color::White);
    game.set_options(GameOptions::default().with_strict_legality(false));
    game
}

fn moves_of(game: &Game, at: &str) -> Vec<String> {
    let piece = *game.board().piece_at(sq(at)).unwrap();
    possible_moves(game, &piece)
        .iter()
        .map(|t| t.to_string())
        .collect()
}

#[test]
fn opening_position_has_twenty_white_moves() {
    let g = Game::new();
    let total: usize = g
        .board()
        .pieces_of(Color::White)
        .map(|p| possible_moves(&g, p).len())
        .sum();
    assert_eq!(total, 20);
}

#[test]
fn opening_knight_jumps_over_pawns() {
    let g = Game::new();
    assert_eq!(moves_of(&g, "b1"), vec!["a3", "c3"]);
    assert_eq!(moves_of(&g, "g8"), vec!["f6", "h6"]);
}

#[test]
fn knight_skips_enemy_king_but_takes_other_pieces() {
    let g = setup(&[
        (Color::White, PieceType::Knight, "d4"),
        (Color::Black, PieceType::King, "e6"),
        (Color::Black, PieceType::Rook, "c6"),
        (Color::White, PieceType::Pawn, "f5"),
    ]);
    let moves = moves_of(&g, "d4");
    assert!(moves.contains(&"c6".to_string()));
    assert!(!moves.contains(&"e6".to_string()));
    assert!(!moves.contains(&"f5".to_string()));
    assert_eq!(moves.len(), 6);
}

#[test]
fn rook_ray_stops_at_first_piece() {
    let g = setup(&[
        (Color::White, PieceType::Rook, "a1"),
        (Color::White, PieceType::Pawn, "a4"),
        (Color::Black, PieceType::Knight, "d1"),
    ]);
    assert_eq!(moves_of(&g, "a1"), vec!["a2", "a3", "b1", "c1", "d1"]);
}

#[test]
fn rook_ray_stops_before_enemy_king() {
    let g = setup(&[
        (Color::White, PieceType::Rook, "a1"),
        (Color::White, PieceType::Pawn, "a4"),
        (Color::Black, PieceType::King, "d1"),
    ]);
    assert_eq!(moves_of(&g, "a1"), vec!["a2", "a3", "b1", "c1"]);
}

#[test]
fn every_generated_square_is_distinct_and_not_the_origin() {
    for kind in [
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
    ] {
        for origin in Square::all() {
            let mut board = Board::new_empty();
            board.place(Color::White, kind, origin).unwrap();
            let g = Game::from_board(board, Color::White);
            let piece = *g.board().piece_at(origin).unwrap();
            let moves = possible_moves(&g, &piece);
            let mut dedup = moves.to_vec();
            dedup.sort();
            dedup.dedup();
            assert_eq!(dedup.len(), moves.len(), "{:?} on {} repeats a square", kind, origin);
            assert!(!moves.contains(&origin));
            assert!(moves.iter().all(|t| t.row() < 8 && t.col() < 8));
        }
    }
}

#[test]
fn king_avoids_squares_covered_by_enemy() {
    let g = setup(&[
        (Color::White, PieceType::King, "e1"),
        (Color::Black, PieceType::Rook, "a2"),
    ]);
    assert_eq!(moves_of(&g, "e1"), vec!["d1", "f1"]);
}

#[test]
fn king_may_retreat_along_checking_ray_by_default() {
    let g = setup(&[
        (Color::White, PieceType::King, "e4"),
        (Color::Black, PieceType::Rook, "e8"),
    ]);
    let moves = moves_of(&g, "e4");
    assert!(moves.contains(&"e3".to_string()));
    assert!(!moves.contains(&"e5".to_string()));
    assert_eq!(moves.len(), 7);
}

#[test]
fn strict_king_cannot_retreat_along_checking_ray() {
    let mut g = setup(&[
        (Color::White, PieceType::King, "e4"),
        (Color::Black, PieceType::Rook, "e8"),
    ]);
    g.set_options(GameOptions::default().with_strict_legality(true));
    let moves = moves_of(&g, "e4");
    assert!(!moves.contains(&"e3".to_string()));
    assert!(!moves.contains(&"e5".to_string()));
    assert_eq!(moves.len(), 6);
}

#[test]
fn king_cannot_capture_defended_piece() {
    let g = setup(&[
        (Color::White, PieceType::King, "e1"),
        (Color::Black, PieceType::Pawn, "e2"),
        (Color::Black, PieceType::Rook, "e8"),
    ]);
    assert_eq!(moves_of(&g, "e1"), vec!["d2", "f2"]);
}

#[test]
fn enemy_king_reach_is_ignored_by_default() {
    let g = setup(&[
        (Color::White, PieceType::King, "e1"),
        (Color::Black, PieceType::King, "e3"),
    ]);
    assert_eq!(moves_of(&g, "e1"), vec!["d2", "e2", "f2", "d1", "f1"]);
}

#[test]
fn kings_never_stand_next_to_each_other() {
    let mut g = setup(&[
        (Color::White, PieceType::King, "e1"),
        (Color::Black, PieceType::King, "e3"),
    ]);
    g.set_options(GameOptions::default().with_strict_legality(true));
    assert_eq!(moves_of(&g, "e1"), vec!["d1", "f1"]);
}

#[test]
fn castling_offered_both_ways_queenside_first() {
    let g = setup(&[
        (Color::White, PieceType::King, "e1"),
        (Color::White, PieceType::Rook, "a1"),
        (Color::White, PieceType::Rook, "h1"),
    ]);
    let moves = moves_of(&g, "e1");
    let tail = &moves[moves.len() - 2..];
    assert_eq!(tail, &["c1".to_string(), "g1".to_string()]);
}

#[test]
fn castling_needs_empty_path() {
    let g = setup(&[
        (Color::White, PieceType::King, "e1"),
        (Color::White, PieceType::Rook, "a1"),
        (Color::White, PieceType::Knight, "b1"),
        (Color::White, PieceType::Rook, "h1"),
    ]);
    let moves = moves_of(&g, "e1");
    assert!(!moves.contains(&"c1".to_string()));
    assert!(moves.contains(&"g1".to_string()));
}

#[test]
fn castling_needs_own_rook_in_the_corner() {
    let g = setup(&[
        (Color::Black, PieceType::King, "e8"),
        (Color::White, PieceType::Rook, "h8"),
        (Color::Black, PieceType::Bishop, "a8"),
    ]);
    let moves = moves_of(&g, "e8");
    assert!(!moves.contains(&"g8".to_string()));
    assert!(!moves.contains(&"c8".to_string()));
}

#[test]
fn castling_gone_once_king_has_moved() {
    let mut g = setup(&[
        (Color::White, PieceType::King, "e1"),
        (Color::White, PieceType::Rook, "h1"),
    ]);
    g.set_king_moved(Color::White, true);
    assert!(!moves_of(&g, "e1").contains(&"g1".to_string()));
}

#[test]
fn castling_through_covered_square_only_refused_when_strict() {
    let mut g = setup(&[
        (Color::White, PieceType::King, "e1"),
        (Color::White, PieceType::Rook, "h1"),
        (Color::Black, PieceType::Rook, "f8"),
    ]);
    assert!(moves_of(&g, "e1").contains(&"g1".to_string()));

    g.set_options(GameOptions::default().with_strict_legality(true));
    assert!(!moves_of(&g, "e1").contains(&"g1".to_string()));
}
