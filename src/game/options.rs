/// Runtime switches for a [`Game`](super::Game).
///
/// Defaults follow the `free-move` and `strict-legality` cargo features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Debug mode: `attempt_move` skips turn ownership and legality checks.
    pub free_move: bool,
    /// Reject any move that leaves the mover's own king attacked, forbid
    /// castling out of or through check, and treat checkmate as "in check
    /// with no legal move".
    pub strict_legality: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions {
            free_move: cfg!(feature = "free-move"),
            strict_legality: cfg!(feature = "strict-legality"),
        }
    }
}

impl GameOptions {
    pub fn with_free_move(mut self, on: bool) -> Self {
        self.free_move = on;
        self
    }

    pub fn with_strict_legality(mut self, on: bool) -> Self {
        self.strict_legality = on;
        self
    }
}
