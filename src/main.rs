use anyhow::Context;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use puzzle_solver::{path, prelude::*};
use std::{path::PathBuf, sync::Arc, time::Instant};

#[derive(Parser)]
#[command(name = "puzzle-solver")]
#[command(about = "Depth-first and breadth-first solver for full-information puzzles")]
#[command(version)]
struct Cli {
    /// Search strategy (dfs or bfs)
    #[arg(long, global = true, default_value = "bfs")]
    solver: SolverKind,

    /// Run every strategy and report the length of each solution
    #[arg(long, global = true)]
    compare: bool,

    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Step along the integers until reaching the target
    NumberLine {
        #[arg(long, allow_negative_numbers = true)]
        start: i64,

        #[arg(long, allow_negative_numbers = true)]
        target: i64,

        /// Smallest reachable value
        #[arg(long, allow_negative_numbers = true, requires = "max")]
        min: Option<i64>,

        /// Largest reachable value
        #[arg(long, allow_negative_numbers = true, requires = "min")]
        max: Option<i64>,
    },

    /// Change one letter at a time through dictionary words
    WordLadder {
        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        /// Whitespace-separated word list (defaults to a built-in list)
        #[arg(long, value_name = "FILE")]
        words: Option<PathBuf>,
    },

    /// Fill a 4x4 or 9x9 grid, `.` or `0` for blanks
    Sudoku {
        #[arg(value_name = "GRID", required_unless_present = "file")]
        grid: Option<String>,

        /// Read the grid from a file instead
        #[arg(long, conflicts_with = "grid")]
        file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    simple_logger::SimpleLogger::new().with_level(level).init()?;

    match &cli.command {
        Commands::NumberLine {
            start,
            target,
            min,
            max,
        } => {
            let puzzle = match (min, max) {
                (Some(min), Some(max)) => NumberLine::with_bounds(*start, *target, *min, *max)?,
                _ => NumberLine::new(*start, *target),
            };
            run(&cli, puzzle)
        }

        Commands::WordLadder { from, to, words } => {
            let puzzle = match words {
                Some(file) => WordLadder::new(from, to, Arc::new(WordLadder::load_words(file)?))?,
                None => WordLadder::with_default_words(from, to)?,
            };
            run(&cli, puzzle)
        }

        Commands::Sudoku { grid, file } => {
            let grid = match (grid, file) {
                (Some(grid), _) => grid.clone(),
                (None, Some(file)) => std::fs::read_to_string(file)
                    .with_context(|| format!("Reading grid {}", file.display()))?,
                (None, None) => anyhow::bail!("No grid given"),
            };
            run(&cli, grid.parse::<Sudoku>()?)
        }
    }
}

fn run<P: Puzzle>(cli: &Cli, puzzle: P) -> anyhow::Result<()> {
    if cli.compare {
        for kind in SolverKind::all() {
            match solve(kind, &puzzle)?.len() {
                0 => println!("{}: no solution", kind),
                n => println!("{}: {} moves", kind, n - 1),
            }
        }
        return Ok(());
    }

    let path = solve(cli.solver, &puzzle)?;
    if path.is_empty() {
        println!("no solution");
        return Ok(());
    }

    for state in &path {
        println!("{}\n", state);
    }
    println!("{} moves", path.len() - 1);

    Ok(())
}

fn solve<P: Puzzle>(kind: SolverKind, puzzle: &P) -> anyhow::Result<Vec<P>> {
    let before = Instant::now();
    let path = kind.solve(puzzle.clone(), None);
    log::info!("{} took {:?}", kind, before.elapsed());

    if !path.is_empty() {
        path::check(puzzle, &path).with_context(|| format!("{} returned a bad path", kind))?;
    }
    Ok(path)
}
