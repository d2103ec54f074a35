use std::str::FromStr;

use gambit::board::{Board, Color, PieceType};
use gambit::game::{Game, GameOptions};
use gambit::square::Square;
use gambit::status::{GameStatus, is_insufficient_material, position_status};

fn sq(name: &str) -> Square {
    Square::from_str(name).unwrap()
}

fn setup(turn: Color, pieces: &[(Color, PieceType, &str)]) -> Game {
    let mut board = Board::new_empty();
    for &(color, kind, at) in pieces {
        board.place(color, kind, sq(at)).unwrap();
    }
    Game::from_board(board, turn)
}

fn mated(game: &mut Game) -> bool {
    let king = game.get_king(game.turn()).unwrap();
    game.is_check(&king) && game.is_checkmate()
}

const BACK_RANK: &[(Color, PieceType, &str)] = &[
    (Color::White, PieceType::King, "e1"),
    (Color::White, PieceType::Pawn, "d2"),
    (Color::White, PieceType::Pawn, "e2"),
    (Color::White, PieceType::Pawn, "f2"),
    (Color::White, PieceType::Bishop, "f1"),
    (Color::Black, PieceType::Rook, "a1"),
    (Color::Black, PieceType::King, "h8"),
];

#[test]
fn opening_position_is_in_play() {
    let mut g = Game::new();
    assert_eq!(position_status(&mut g), GameStatus::InPlay);
}

#[test]
fn back_rank_mate() {
    let mut g = setup(Color::White, BACK_RANK);
    assert!(mated(&mut g));
    assert_eq!(position_status(&mut g), GameStatus::Checkmate);
    assert!(position_status(&mut g).is_terminal());
}

#[test]
fn back_rank_mate_holds_under_strict_rules() {
    let mut g = setup(Color::White, BACK_RANK);
    g.set_options(GameOptions::default().with_strict_legality(true));
    assert!(mated(&mut g));
}

#[test]
fn king_may_step_behind_itself_on_the_checking_rank_by_default() {
    let mut g = setup(
        Color::White,
        &[
            (Color::White, PieceType::King, "e1"),
            (Color::White, PieceType::Pawn, "d2"),
            (Color::White, PieceType::Pawn, "e2"),
            (Color::White, PieceType::Pawn, "f2"),
            (Color::Black, PieceType::Rook, "a1"),
            (Color::Black, PieceType::King, "h8"),
        ],
    );
    g.set_options(GameOptions::default().with_strict_legality(false));
    assert!(!mated(&mut g), "f1 is free and only the strict rules cover it");

    g.set_options(GameOptions::default().with_strict_legality(true));
    assert!(mated(&mut g));
}

#[test]
fn check_with_king_escape_is_not_mate() {
    let mut g = setup(
        Color::White,
        &[
            (Color::White, PieceType::King, "e1"),
            (Color::Black, PieceType::Rook, "e8"),
            (Color::Black, PieceType::King, "a8"),
        ],
    );
    assert!(!mated(&mut g));
    assert_eq!(position_status(&mut g), GameStatus::Check);
    assert!(!GameStatus::Check.is_terminal());
}

#[test]
fn capturable_checker_is_not_mate() {
    let mut g = setup(
        Color::White,
        &[
            (Color::White, PieceType::King, "h1"),
            (Color::White, PieceType::Pawn, "g2"),
            (Color::White, PieceType::Pawn, "h2"),
            (Color::White, PieceType::Rook, "a8"),
            (Color::Black, PieceType::Rook, "a1"),
            (Color::Black, PieceType::King, "e6"),
        ],
    );
    assert!(!mated(&mut g));
    assert_eq!(position_status(&mut g), GameStatus::Check);
}

#[test]
fn blockable_slider_is_not_mate() {
    let mut g = setup(
        Color::White,
        &[
            (Color::White, PieceType::King, "h1"),
            (Color::White, PieceType::Pawn, "g2"),
            (Color::White, PieceType::Pawn, "h2"),
            (Color::White, PieceType::Bishop, "e4"),
            (Color::Black, PieceType::Rook, "a1"),
            (Color::Black, PieceType::King, "e8"),
        ],
    );
    assert!(!mated(&mut g));
}

#[test]
fn knight_check_cannot_be_blocked() {
    // Smothered king on h1, knight on f2, nothing can take it.
    let mut g = setup(
        Color::White,
        &[
            (Color::White, PieceType::King, "h1"),
            (Color::White, PieceType::Rook, "g1"),
            (Color::White, PieceType::Pawn, "g2"),
            (Color::White, PieceType::Pawn, "h2"),
            (Color::Black, PieceType::Knight, "f2"),
            (Color::Black, PieceType::King, "e8"),
        ],
    );
    assert!(mated(&mut g));
}

const DOUBLE_CHECK: &[(Color, PieceType, &str)] = &[
    (Color::White, PieceType::King, "h1"),
    (Color::White, PieceType::Pawn, "g2"),
    (Color::White, PieceType::Pawn, "h2"),
    (Color::White, PieceType::Rook, "a8"),
    (Color::White, PieceType::Bishop, "e3"),
    (Color::Black, PieceType::Rook, "a1"),
    (Color::Black, PieceType::Knight, "f2"),
    (Color::Black, PieceType::King, "e6"),
];

#[test]
fn double_check_with_both_checkers_capturable_escapes_by_default() {
    let mut g = setup(Color::White, DOUBLE_CHECK);
    g.set_options(GameOptions::default().with_strict_legality(false));
    let king = g.get_king(Color::White).unwrap();
    assert!(g.is_check(&king));
    assert_eq!(g.last_checking_pieces().len(), 2);
    assert!(!g.is_checkmate());
}

#[test]
fn double_check_is_mate_under_strict_rules() {
    let mut g = setup(Color::White, DOUBLE_CHECK);
    g.set_options(GameOptions::default().with_strict_legality(true));
    assert!(mated(&mut g));
    assert_eq!(position_status(&mut g), GameStatus::Checkmate);
}

#[test]
fn is_checkmate_false_without_prior_check() {
    let g = setup(Color::White, BACK_RANK);
    assert!(!g.is_checkmate(), "no checkers cached yet");
}

#[test]
fn cornered_king_with_no_moves_is_stalemate() {
    let mut g = setup(
        Color::Black,
        &[
            (Color::Black, PieceType::King, "a8"),
            (Color::White, PieceType::Queen, "b6"),
            (Color::White, PieceType::King, "e1"),
        ],
    );
    assert_eq!(position_status(&mut g), GameStatus::Stalemate);
    assert!(GameStatus::Stalemate.is_terminal());
}

#[test]
fn bare_kings_are_a_dead_position() {
    let mut g = setup(
        Color::White,
        &[
            (Color::White, PieceType::King, "e1"),
            (Color::Black, PieceType::King, "e8"),
        ],
    );
    assert_eq!(position_status(&mut g), GameStatus::DrawDeadPosition);
}

#[test]
fn insufficient_material_table() {
    let board_of = |pieces: &[(Color, PieceType, &str)]| {
        let mut b = Board::new_empty();
        b.place(Color::White, PieceType::King, sq("e1")).unwrap();
        b.place(Color::Black, PieceType::King, sq("e8")).unwrap();
        for &(color, kind, at) in pieces {
            b.place(color, kind, sq(at)).unwrap();
        }
        b
    };

    assert!(is_insufficient_material(&board_of(&[])));
    assert!(is_insufficient_material(&board_of(&[(
        Color::White,
        PieceType::Knight,
        "b1"
    )])));
    assert!(is_insufficient_material(&board_of(&[
        (Color::White, PieceType::Bishop, "c1"),
        (Color::Black, PieceType::Knight, "b8"),
    ])));
    assert!(is_insufficient_material(&board_of(&[
        (Color::Black, PieceType::Knight, "b8"),
        (Color::Black, PieceType::Knight, "g8"),
    ])));
    assert!(!is_insufficient_material(&board_of(&[(
        Color::White,
        PieceType::Rook,
        "a1"
    )])));
    assert!(!is_insufficient_material(&board_of(&[(
        Color::Black,
        PieceType::Pawn,
        "a7"
    )])));
    assert!(!is_insufficient_material(&Board::new()));
}

#[test]
fn status_serializes_in_snake_case() {
    assert_eq!(
        serde_json::to_string(&GameStatus::DrawDeadPosition).unwrap(),
        "\"draw_dead_position\""
    );
    assert_eq!(serde_json::to_string(&GameStatus::InPlay).unwrap(), "\"in_play\"");
}
