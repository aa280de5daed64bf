use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;

use peg_solitaire::{Config, Outcome, Solution};

/// Solve cross-shaped peg solitaire by exhaustive backtracking.
#[derive(Parser)]
#[command(name = "peg-solitaire", about = "Solve cross-shaped peg solitaire")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "peg-solitaire.toml")]
    config: PathBuf,

    /// Empty cell of the opening, as ROW,COL
    #[arg(long, value_parser = parse_cell)]
    hole: Option<(usize, usize)>,

    /// Cell the last peg must finish on, as ROW,COL
    #[arg(long, value_parser = parse_cell)]
    target: Option<(usize, usize)>,

    /// Read the starting position from a board text file instead
    #[arg(long)]
    position: Option<PathBuf>,

    /// Give up after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Print the board after every move of the solution
    #[arg(long)]
    replay: bool,
}

fn parse_cell(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<usize>()
            .map_err(|e| format!("bad coordinate '{v}': {e}"))
    };
    Ok((parse(row)?, parse(col)?))
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = Config::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(hole) = cli.hole {
        config.hole = Some(hole);
    }
    if let Some(target) = cli.target {
        config.target = target;
    }
    if let Some(path) = &cli.position {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading position from {}", path.display()))?;
        config.position = Some(text);
    }
    if cli.timeout_ms.is_some() {
        config.timeout_ms = cli.timeout_ms;
    }
    config.validate().context("configuration rejected")?;

    let mut board = config.board().context("configuration rejected")?;
    let mut solver = config.solver().context("configuration rejected")?;

    println!("{board}");
    println!("Pegs remaining: {} | Solving...", board.peg_count());

    let code = match solver.search(&mut board) {
        Outcome::Solved(solution) => {
            println!(
                "Solution found in {} attempts: {} moves",
                solver.attempts(),
                solution.len()
            );
            report(&solution, cli.replay);
            ExitCode::SUCCESS
        }
        Outcome::Exhausted => {
            println!(
                "No solution from this position ({} attempts)",
                solver.attempts()
            );
            ExitCode::from(1)
        }
        Outcome::Cancelled(why) => {
            println!(
                "Search interrupted ({why:?}) after {} attempts",
                solver.attempts()
            );
            ExitCode::from(2)
        }
    };
    Ok(code)
}

fn report(solution: &Solution, replay: bool) {
    if !replay {
        for (idx, mv) in solution.into_iter().enumerate() {
            println!("{:>2}. {mv}", idx + 1);
        }
        return;
    }

    for (idx, (mv, board)) in solution.replay().enumerate() {
        println!("{:>2}. {mv}", idx + 1);
        println!("{board}Pegs remaining: {}\n", board.peg_count());
    }
}
