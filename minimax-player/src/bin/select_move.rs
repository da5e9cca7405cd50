//! Pick a move for one side of an Othello position by exhaustive search.
//!
//! Full-depth search is only feasible on small boards or late endgames:
//!
//! ```text
//! select-move --board "XO--OX" --symbol X --standard-passes
//! RUST_LOG=trace select-move --board "----/-OX-/-XO-/----" --dot tree.dot
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use minimax_othello::{Location, OthelloBoard, Player};
use minimax_player::{best_choice, MinimaxPlayer, PassRule, SearchConfig};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "select-move", about = "Choose an Othello move by full minimax search")]
struct Cli {
    /// Board rows top to bottom, separated by '/' or newlines.
    /// 'X' is black, 'O' is white and '-' or '.' is empty.
    #[arg(long, default_value = "----/-OX-/-XO-/----")]
    board: OthelloBoard,

    /// Side to move: X (black) or O (white).
    #[arg(long, default_value = "X")]
    symbol: Player,

    /// Pass when the side to move has no legal move, instead of ending the game.
    #[arg(long)]
    standard_passes: bool,

    /// Also write the searched tree to this path in Graphviz dot format.
    #[arg(long)]
    dot: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let pass_rule = if cli.standard_passes {
        PassRule::Standard
    } else {
        PassRule::Terminal
    };
    let player = MinimaxPlayer::new(cli.symbol)
        .with_config(SearchConfig::default().with_pass_rule(pass_rule));

    println!("{}\n", cli.board);
    info!(symbol = %cli.symbol, ?pass_rule, "searching");

    let tree = player.build_tree(&cli.board)?;
    if let Some(path) = &cli.dot {
        let mut writer = BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        );
        tree.render_dot(&mut writer)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(nodes = tree.len(), path = %path.display(), "wrote search tree");
    }

    match best_choice(&tree) {
        None => println!("{} has no legal move", cli.symbol),
        Some(choice) => {
            let location = Location::from_coords(choice.mv.col, choice.mv.row)
                .context("selected move lies outside the board frame")?;
            println!(
                "{} plays {} (value {}, {})",
                cli.symbol,
                location,
                choice.value,
                choice.outlook()
            );
        }
    }

    Ok(())
}
