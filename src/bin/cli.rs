use gambit::board::Color;
use gambit::game::{Game, GameObserver, GameOptions};
use gambit::logger::init_logging;
use gambit::moves::perft::{legal_pairs, perft, perft_divide_with};
use gambit::square::Square;
use gambit::status::{GameStatus, position_status};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead};
use std::str::FromStr;
use std::time::Instant;

/// Prints what a graphical front end would animate or play a sound for.
struct ConsoleObserver;

impl GameObserver for ConsoleObserver {
    fn on_move_applied(&mut self, from: Square, to: Square) {
        println!("moved {}{}", from, to);
    }

    fn on_turn_changed(&mut self, turn: Color) {
        println!("It's {}'s turn", turn);
    }

    fn on_check(&mut self, side: Color) {
        println!("{} is in check", side);
    }

    fn on_checkmate(&mut self, side: Color) {
        println!("Checkmate! {} wins", side.opposite());
    }
}

struct Args {
    options: GameOptions,
    log_path: Option<String>,
    filter: String,
}

fn parse_args() -> Args {
    let mut args = Args {
        options: GameOptions::default(),
        log_path: None,
        filter: "info".to_string(),
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--free" => args.options = args.options.with_free_move(true),
            "--strict" => args.options = args.options.with_strict_legality(true),
            "--log" => args.log_path = it.next(),
            "--filter" => {
                if let Some(f) = it.next() {
                    args.filter = f;
                }
            }
            other => eprintln!("ignoring unknown argument `{}`", other),
        }
    }
    args
}

fn main() {
    let args = parse_args();
    if let Some(path) = &args.log_path
        && let Err(err) = init_logging(path, &args.filter)
    {
        eprintln!("could not open log file {}: {}", path, err);
    }

    let mut game = Game::with_options(args.options);
    println!("{}", game.board());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l.trim().to_string(),
            Err(_) => break,
        };

        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let command = parts[0];

        match command {
            "quit" => break,
            "new" => {
                game = Game::with_options(args.options);
                println!("{}", game.board());
            }
            "d" | "display" => println!("{}", game.board()),
            "status" => println!("{:?}", position_status(&mut game)),
            "moves" => handle_moves(&game, parts.get(1).copied()),
            "perft" => handle_perft(&game, &parts),
            "divide" => handle_divide(&game, &parts),
            mv => handle_move(&mut game, mv),
        }
    }
}

fn handle_moves(game: &Game, square: Option<&str>) {
    let Some(square) = square else {
        println!("usage: moves <square>");
        return;
    };
    let sq = match Square::from_str(square) {
        Ok(sq) => sq,
        Err(err) => {
            println!("{}", err);
            return;
        }
    };
    match game.legal_moves_for(sq) {
        Ok(targets) => {
            let names: Vec<String> = targets.iter().map(|t| t.to_string()).collect();
            println!("{}", names.join(" "));
        }
        Err(err) => println!("{}", err),
    }
}

fn parse_move(text: &str) -> Option<(Square, Square)> {
    if text.len() != 4 || !text.is_ascii() {
        return None;
    }
    let from = Square::from_str(&text[..2]).ok()?;
    let to = Square::from_str(&text[2..]).ok()?;
    Some((from, to))
}

fn handle_move(game: &mut Game, text: &str) {
    let Some((from, to)) = parse_move(text) else {
        println!("unknown command `{}`", text);
        return;
    };
    if position_status(game).is_terminal() {
        println!("the game is over; `new` starts another");
        return;
    }
    match game.attempt_move_with(from, to, &mut ConsoleObserver) {
        Ok(report) if report.applied => {
            if report.promoted {
                println!("promoted to queen");
            }
            println!("{}", game.board());
            if position_status(game) == GameStatus::Stalemate {
                println!("Stalemate");
            }
        }
        Ok(_) => println!("illegal move {}", text),
        Err(err) => println!("{}", err),
    }
}

fn depth_arg(parts: &[&str]) -> u32 {
    parts.get(1).and_then(|d| d.parse().ok()).unwrap_or(1)
}

fn handle_perft(game: &Game, parts: &[&str]) {
    let depth = depth_arg(parts);
    let start = Instant::now();
    let nodes = perft(game, depth);
    println!(
        "perft({}) = {} in {:.2?}",
        depth,
        nodes,
        start.elapsed()
    );
}

fn handle_divide(game: &Game, parts: &[&str]) {
    let depth = depth_arg(parts);

    let bar = ProgressBar::new(legal_pairs(game).len() as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}") {
        bar.set_style(style);
    }

    let (rows, total) = perft_divide_with(game, depth, |mv, _| {
        bar.set_message(mv.to_string());
        bar.inc(1);
    });
    bar.finish_and_clear();

    for (mv, count) in rows {
        println!("{}: {}", mv, count);
    }
    println!("\nNodes searched: {}", total);
}
