use anyhow::{bail, Context, Result};
use chess_rules::core::{load_settings, load_settings_from, Settings};
use chess_rules::game::notation::{board_to_fen, parse_square, parse_uci_move};
use chess_rules::game::rules::{apply_move, game_status, get_valid_moves};
use chess_rules::game::{BoardState, GameContext, Move};
use chess_rules::networking::{request_engine_move, StockfishOnline};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Referee chess positions and consult a remote engine
#[derive(Parser, Debug)]
#[command(name = "chess-rules", version, about)]
struct Cli {
    /// Settings file (defaults to the user configuration directory)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the board, its FEN and the game status
    Status(Replay),

    /// List legal destinations for the piece on a square
    Moves {
        /// Square in algebraic notation, e.g. e2
        square: String,

        #[command(flatten)]
        replay: Replay,
    },

    /// Ask the oracle for the best move in the position
    Bestmove {
        #[command(flatten)]
        replay: Replay,

        /// Search depth (overrides settings)
        #[arg(long)]
        depth: Option<u8>,

        /// Oracle endpoint URL (overrides settings)
        #[arg(long)]
        endpoint: Option<String>,
    },
}

/// Moves replayed from the starting position
#[derive(Args, Debug)]
struct Replay {
    /// Moves in UCI notation, e.g. --moves e2e4 e7e5 g1f3
    #[arg(long, num_args = 1..)]
    moves: Vec<String>,
}

impl Replay {
    fn position(&self) -> Result<(BoardState, GameContext)> {
        let mut board = BoardState::starting();
        let mut context = GameContext::new();

        for (ply, text) in self.moves.iter().enumerate() {
            let parsed = parse_uci_move(text)?;
            let mut mv = Move::classify(parsed.from, parsed.to, &board, &context);
            mv.promotion = parsed.promotion;

            (board, context) = apply_move(&board, &context, &mv)
                .with_context(|| format!("ply {} ({})", ply + 1, text))?;
        }

        Ok((board, context))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = match &cli.settings {
        Some(path) => load_settings_from(path),
        None => load_settings(),
    };

    match cli.command {
        Command::Status(replay) => {
            let (board, context) = replay.position()?;
            println!("{}", board);
            println!("FEN: {}", board_to_fen(&board, &context));
            println!("{} to move: {}", context.current_player, game_status(&board, &context));
        }
        Command::Moves { square, replay } => {
            let (board, context) = replay.position()?;
            let from = parse_square(&square)?;
            let Some(piece) = board.get(from) else {
                bail!("no piece on {}", from);
            };

            let targets = get_valid_moves(from, piece, &board, &context);
            let names: Vec<String> = targets.iter().map(|sq| sq.to_string()).collect();
            println!("{:?} {:?} on {}: {}", piece.color, piece.kind, from, names.join(" "));
        }
        Command::Bestmove {
            replay,
            depth,
            endpoint,
        } => {
            let (board, context) = replay.position()?;
            let settings = override_oracle(settings, depth, endpoint);
            let oracle = StockfishOnline::new(&settings.oracle)?;

            info!("[ORACLE] Asking {} at depth {}", settings.oracle.endpoint, settings.oracle.depth);
            let mv = request_engine_move(&oracle, &board, &context, settings.oracle.depth)
                .await
                .context("computer move unavailable, turn left unresolved")?;
            println!("{}", mv);
        }
    }

    Ok(())
}

fn override_oracle(mut settings: Settings, depth: Option<u8>, endpoint: Option<String>) -> Settings {
    if let Some(depth) = depth {
        settings.oracle.depth = depth;
    }
    if let Some(endpoint) = endpoint {
        settings.oracle.endpoint = endpoint;
    }
    settings
}
