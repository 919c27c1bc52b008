use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wilson_maze::render::{render_ascii, Exits};
use wilson_maze::{generate_maze, SpanningTree, Vertex};

#[derive(Parser, Debug)]
#[command(
    name = "wilson-maze",
    about = "Perfect mazes from uniform spanning trees (Wilson's algorithm)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a maze and print it as ASCII art.
    Generate {
        /// Grid side length N (the maze has N×N cells).
        #[arg(long, default_value_t = 20)]
        size: usize,
        /// RNG seed; equal seeds reproduce equal mazes.
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Entry cell as `row,col` (default: top-left corner).
        #[arg(long)]
        start: Option<String>,
        /// Exit cell as `row,col` (default: bottom-right corner).
        #[arg(long)]
        end: Option<String>,
        /// Overlay the unique path between the entry and exit cells.
        #[arg(long)]
        solve: bool,
    },
    /// Generate a maze and print the unique path between two cells.
    Solve {
        /// Grid side length N (the maze has N×N cells).
        #[arg(long, default_value_t = 20)]
        size: usize,
        /// RNG seed; equal seeds reproduce equal mazes.
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Path origin as `row,col` (default: top-left corner).
        #[arg(long)]
        start: Option<String>,
        /// Path target as `row,col` (default: bottom-right corner).
        #[arg(long)]
        end: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            size,
            seed,
            start,
            end,
            solve,
        } => run_generate(size, seed, start, end, solve)?,
        Commands::Solve {
            size,
            seed,
            start,
            end,
        } => run_solve(size, seed, start, end)?,
    }

    Ok(())
}

fn run_generate(
    size: usize,
    seed: u64,
    start: Option<String>,
    end: Option<String>,
    solve: bool,
) -> Result<()> {
    let maze = build_maze(size, seed)?;
    let exits = resolve_exits(size, start, end)?;

    let path = if solve {
        Some(
            maze.find_path(exits.entry, exits.exit)
                .context("solving the maze failed")?,
        )
    } else {
        None
    };

    print!("{}", render_ascii(&maze, Some(exits), path.as_deref()));
    Ok(())
}

fn run_solve(size: usize, seed: u64, start: Option<String>, end: Option<String>) -> Result<()> {
    let maze = build_maze(size, seed)?;
    let exits = resolve_exits(size, start, end)?;

    let path = maze
        .find_path(exits.entry, exits.exit)
        .context("solving the maze failed")?;

    for cell in path {
        println!("{},{}", cell.row, cell.col);
    }
    Ok(())
}

fn build_maze(size: usize, seed: u64) -> Result<SpanningTree> {
    generate_maze(size, seed).with_context(|| format!("generating a {size}x{size} maze failed"))
}

/// Exit cells are configuration, defaulting to opposite corners.
fn resolve_exits(size: usize, start: Option<String>, end: Option<String>) -> Result<Exits> {
    let defaults = Exits::corners(size);
    Ok(Exits {
        entry: match start {
            Some(spec) => parse_cell(&spec)?,
            None => defaults.entry,
        },
        exit: match end {
            Some(spec) => parse_cell(&spec)?,
            None => defaults.exit,
        },
    })
}

fn parse_cell(spec: &str) -> Result<Vertex> {
    let Some((row, col)) = spec.split_once(',') else {
        bail!("cell {spec:?} is not of the form `row,col`");
    };
    let row = row
        .trim()
        .parse()
        .with_context(|| format!("bad row in cell {spec:?}"))?;
    let col = col
        .trim()
        .parse()
        .with_context(|| format!("bad column in cell {spec:?}"))?;
    Ok(Vertex::new(row, col))
}
