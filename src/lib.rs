pub mod board;
pub mod error;
pub mod game;
#[cfg(feature = "cli")]
pub mod logger;
pub mod moves;
pub(crate) mod output;
pub mod square;
pub mod status;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use board::{Board, Color, Piece, PieceId, PieceType};
pub use error::RulesError;
pub use game::{Game, GameObserver, GameOptions};
pub use moves::types::MoveReport;
pub use square::Square;
pub use status::{GameStatus, position_status};
