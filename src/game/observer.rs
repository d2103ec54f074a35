use crate::board::Color;
use crate::square::Square;

/// Notifications the rules core sends to whatever presents the game.
///
/// All methods default to doing nothing.
pub trait GameObserver {
    /// A piece slid from `from` to `to`. Fired once for a plain move and a
    /// second time for the rook when castling.
    fn on_move_applied(&mut self, _from: Square, _to: Square) {}

    fn on_turn_changed(&mut self, _turn: Color) {}

    /// `side` is in check but has a way out.
    fn on_check(&mut self, _side: Color) {}

    /// `side` has been mated.
    fn on_checkmate(&mut self, _side: Color) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    MoveApplied { from: Square, to: Square },
    TurnChanged(Color),
    Check(Color),
    Checkmate(Color),
}

/// Observer that records notifications in order.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
}

impl GameObserver for EventLog {
    fn on_move_applied(&mut self, from: Square, to: Square) {
        self.events.push(GameEvent::MoveApplied { from, to });
    }

    fn on_turn_changed(&mut self, turn: Color) {
        self.events.push(GameEvent::TurnChanged(turn));
    }

    fn on_check(&mut self, side: Color) {
        self.events.push(GameEvent::Check(side));
    }

    fn on_checkmate(&mut self, side: Color) {
        self.events.push(GameEvent::Checkmate(side));
    }
}
