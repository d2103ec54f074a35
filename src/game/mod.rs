pub mod observer;
pub mod options;

pub use observer::{EventLog, GameEvent, GameObserver, NoopObserver};
pub use options::GameOptions;

use crate::board::{Board, Color, Piece, PieceType};
use crate::error::RulesError;
use crate::moves::execute::move_piece;
use crate::moves::movegen::possible_moves;
use crate::moves::square_control::{attackers_of, in_check};
use crate::moves::types::{MoveReport, Targets};
use crate::square::Square;
use tracing::{debug, info, warn};

/// Squares strictly between two aligned squares, walking from `from`.
/// Empty when they share no rank, file or diagonal.
pub fn squares_between(from: Square, to: Square) -> Vec<Square> {
    let dr = to.row() as i8 - from.row() as i8;
    let dc = to.col() as i8 - from.col() as i8;
    if !(dr == 0 || dc == 0 || dr.abs() == dc.abs()) {
        return Vec::new();
    }
    let (sr, sc) = (dr.signum(), dc.signum());
    let mut line = Vec::with_capacity(6);
    let mut cur = from.offset(sr, sc);
    while let Some(sq) = cur {
        if sq == to {
            break;
        }
        line.push(sq);
        cur = sq.offset(sr, sc);
    }
    line
}

/// One live position: the board, whose turn it is and the castling gates.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    white_king_moved: bool,
    black_king_moved: bool,
    /// Filled by `is_check`; only meaningful right after it returned true.
    last_checking_pieces: Vec<Piece>,
    options: GameOptions,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// Standard opening, White to move.
    pub fn new() -> Self {
        Game::with_options(GameOptions::default())
    }

    pub fn with_options(options: GameOptions) -> Self {
        let mut game = Game::from_board(Board::new(), Color::White);
        game.options = options;
        game
    }

    /// Wrap an arbitrary board. Both kings are treated as unmoved.
    pub fn from_board(board: Board, turn: Color) -> Self {
        Game {
            board,
            turn,
            white_king_moved: false,
            black_king_moved: false,
            last_checking_pieces: Vec::new(),
            options: GameOptions::default(),
        }
    }

    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setting up positions. Bypasses every rule.
    #[inline(always)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline(always)]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline(always)]
    pub fn options(&self) -> GameOptions {
        self.options
    }

    pub fn set_options(&mut self, options: GameOptions) {
        self.options = options;
    }

    /// Once true, castling is off for that side for good.
    #[inline(always)]
    pub fn king_moved(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_moved,
            Color::Black => self.black_king_moved,
        }
    }

    pub fn set_king_moved(&mut self, color: Color, moved: bool) {
        match color {
            Color::White => self.white_king_moved = moved,
            Color::Black => self.black_king_moved = moved,
        }
    }

    pub fn last_checking_pieces(&self) -> &[Piece] {
        &self.last_checking_pieces
    }

    pub fn change_turn(&mut self) {
        self.turn = self.turn.opposite();
    }

    pub fn get_king(&self, color: Color) -> Result<Piece, RulesError> {
        self.board
            .find_king(color)
            .copied()
            .ok_or(RulesError::MissingKing(color))
    }

    /// Enemy pieces whose threats include `target`'s square. A piece that is
    /// off the board (removed or captured) has no attackers.
    pub fn pieces_taking_piece(&self, target: &Piece) -> Vec<Piece> {
        match target.position {
            Some(sq) => attackers_of(&self.board, sq, target.color.opposite()),
            None => Vec::new(),
        }
    }

    /// Is `king` attacked? Caches the attackers for `is_checkmate`.
    pub fn is_check(&mut self, king: &Piece) -> bool {
        self.last_checking_pieces = self.pieces_taking_piece(king);
        !self.last_checking_pieces.is_empty()
    }

    /// Call only after `is_check` returned true for the side to move.
    ///
    /// Without strict legality this is the simplified test: not mate if the
    /// king can step somewhere, if every checker can be captured by some
    /// friendly piece, or if a lone sliding checker can be blocked. With two
    /// checkers, both being capturable counts as an escape even though one
    /// capture cannot answer both.
    pub fn is_checkmate(&self) -> bool {
        if self.last_checking_pieces.is_empty() {
            return false;
        }
        if self.options.strict_legality {
            return !self.has_legal_move(self.turn);
        }

        let Some(king) = self.board.find_king(self.turn) else {
            return false;
        };
        if !possible_moves(self, king).is_empty() {
            return false;
        }

        let replies: Vec<Targets> = self
            .board
            .pieces_of(self.turn)
            .filter(|p| p.kind != PieceType::King)
            .map(|p| possible_moves(self, p))
            .collect();

        let all_capturable = self
            .last_checking_pieces
            .iter()
            .all(|checker| replies.iter().any(|t| t.contains(&checker.square())));
        if all_capturable {
            return false;
        }

        if let [checker] = self.last_checking_pieces.as_slice()
            && checker.kind.is_slider()
        {
            let line = squares_between(king.square(), checker.square());
            if replies.iter().any(|t| t.iter().any(|sq| line.contains(sq))) {
                return false;
            }
        }

        true
    }

    /// The rule-set's moves for `piece`, without strict filtering.
    pub fn possible_moves(&self, piece: &Piece) -> Targets {
        possible_moves(self, piece)
    }

    /// Destinations offered for the piece on `square`.
    pub fn legal_moves_for(&self, square: Square) -> Result<Targets, RulesError> {
        let piece = *self
            .board
            .piece_at(square)
            .ok_or(RulesError::EmptySquare(square))?;
        let mut targets = possible_moves(self, &piece);
        if self.options.strict_legality {
            targets.retain(|to| self.leaves_king_safe(square, *to));
        }
        Ok(targets)
    }

    /// Does any piece of `color` have somewhere to go?
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.board.pieces_of(color).any(|p| {
            self.legal_moves_for(p.square())
                .is_ok_and(|targets| !targets.is_empty())
        })
    }

    /// Play the move on a scratch board and see whether the mover's king survives.
    fn leaves_king_safe(&self, from: Square, to: Square) -> bool {
        let Some(mover) = self.board.color_at(from) else {
            return false;
        };
        let mut scratch = self.board.clone();
        match move_piece(&mut scratch, from, to) {
            Ok(_) => !in_check(&scratch, mover),
            Err(_) => false,
        }
    }

    pub fn attempt_move(&mut self, from: Square, to: Square) -> Result<MoveReport, RulesError> {
        self.attempt_move_with(from, to, &mut NoopObserver)
    }

    /// Validate and play `from`→`to`, flip the turn and look for check and
    /// mate on the side now to move.
    ///
    /// Illegal input comes back as an unapplied report. Errors are reserved
    /// for an empty source square.
    pub fn attempt_move_with(
        &mut self,
        from: Square,
        to: Square,
        observer: &mut dyn GameObserver,
    ) -> Result<MoveReport, RulesError> {
        if from == to {
            return Ok(MoveReport::rejected());
        }
        let piece = *self
            .board
            .piece_at(from)
            .ok_or(RulesError::EmptySquare(from))?;

        if !self.options.free_move {
            if piece.color != self.turn {
                debug!(%from, %to, color = ?piece.color, "rejected: not that side's turn");
                return Ok(MoveReport::rejected());
            }
            if !self.legal_moves_for(from)?.contains(&to) {
                debug!(%from, %to, kind = ?piece.kind, "rejected: not a legal destination");
                return Ok(MoveReport::rejected());
            }
        }

        let outcome = move_piece(&mut self.board, from, to)?;
        for r in &outcome.relocations {
            observer.on_move_applied(r.from, r.to);
        }
        if outcome.piece.kind == PieceType::King {
            self.set_king_moved(outcome.mover(), true);
        }

        self.change_turn();
        observer.on_turn_changed(self.turn);

        let mut report = MoveReport {
            applied: true,
            promoted: outcome.promoted,
            castled: outcome.castled.is_some(),
            ..MoveReport::default()
        };

        match self.get_king(self.turn) {
            Ok(king) => {
                if self.is_check(&king) {
                    report.check = true;
                    if self.is_checkmate() {
                        report.checkmate = true;
                        info!(loser = ?self.turn, "checkmate");
                        observer.on_checkmate(self.turn);
                    } else {
                        info!(side = ?self.turn, checkers = self.last_checking_pieces.len(), "check");
                        observer.on_check(self.turn);
                    }
                }
            }
            Err(err) => warn!(%err, "cannot test for check"),
        }

        Ok(report)
    }
}
