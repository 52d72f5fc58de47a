//! CLI for maze generation

use anahori_maze::maze_generator::MazeGenerator;
use anyhow::Context;
use clap::Parser;
use log::info;

/// Perfect maze generator, digging holes from a random starting point
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width, odd and at least 3
    #[arg(value_parser = parse_dimension)]
    width: usize,

    /// Maze height, odd and at least 3
    #[arg(value_parser = parse_dimension)]
    height: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Accept odd integers of at least 3
fn parse_dimension(s: &str) -> Result<usize, String> {
    let val: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a positive integer", s))?;
    if val < 3 || val % 2 == 0 {
        return Err(format!("{} must be odd and at least 3", val));
    }
    Ok(val)
}

/// Generate maze, print output
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    info!("Generating {}x{} maze, seed {:?}", args.width, args.height, args.seed);

    let mut gen = MazeGenerator::new(args.seed);
    let maze = gen
        .generate_maze(args.width, args.height)
        .context("Could not generate maze")?;
    println!("{}", maze);
    Ok(())
}
