use crate::game::Game;
use crate::output::rules_println;
use crate::moves::types::Relocation;
use crate::square::Square;
use tracing::{debug, instrument};

const MAX_LOG_DEPTH: u32 = 3; // only trace details for shallow nodes

/// Every (from, to) pair the side to move may play, in board order.
pub fn legal_pairs(game: &Game) -> Vec<Relocation> {
    let mut out = Vec::with_capacity(64);
    let froms: Vec<Square> = game
        .board()
        .pieces_of(game.turn())
        .map(|p| p.square())
        .collect();
    for from in froms {
        if let Ok(targets) = game.legal_moves_for(from) {
            out.extend(targets.into_iter().map(|to| Relocation { from, to }));
        }
    }
    out
}

fn perft_recursive(game: &Game, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_pairs(game);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut node_count = 0;
    for mv in moves {
        let mut child = game.clone();
        if let Ok(report) = child.attempt_move(mv.from, mv.to)
            && report.applied
        {
            node_count += perft_recursive(&child, depth - 1);
        }
    }
    node_count
}

/// Count leaf positions `depth` plies below `game`.
#[instrument(skip(game), fields(depth))]
pub fn perft(game: &Game, depth: u32) -> u64 {
    perft_recursive(game, depth)
}

/// Per-root-move leaf counts, in generation order, plus their total.
#[instrument(skip(game), fields(depth))]
pub fn perft_divide(game: &Game, depth: u32) -> (Vec<(Relocation, u64)>, u64) {
    perft_divide_with(game, depth, |_, _| {})
}

/// Same as [`perft_divide`], calling `on_row` as each root move is counted.
/// Depth 0 has no root moves and a single node.
pub fn perft_divide_with<F>(game: &Game, depth: u32, mut on_row: F) -> (Vec<(Relocation, u64)>, u64)
where
    F: FnMut(&Relocation, u64),
{
    if depth == 0 {
        return (Vec::new(), 1);
    }

    let moves = legal_pairs(game);
    if depth <= MAX_LOG_DEPTH {
        debug!(depth, moves = moves.len(), "divide: root legal moves");
    }

    let mut rows = Vec::with_capacity(moves.len());
    let mut total = 0;
    for mv in moves {
        let mut child = game.clone();
        let count = match child.attempt_move(mv.from, mv.to) {
            Ok(report) if report.applied => perft_recursive(&child, depth - 1),
            _ => 0,
        };
        if depth <= MAX_LOG_DEPTH {
            debug!(%mv, nodes = count, "divide: root child total");
        }
        on_row(&mv, count);
        total += count;
        rows.push((mv, count));
    }

    debug!(depth, total, "divide: total");
    (rows, total)
}

/// Print a divide table, one `e2e4: 20` line per root move, then the total.
pub fn print_divide(game: &Game, depth: u32) -> u64 {
    let (rows, total) = perft_divide(game, depth);
    for (mv, count) in &rows {
        rules_println!("{}: {}", mv, count);
    }
    rules_println!("\nNodes searched: {}", total);
    total
}
