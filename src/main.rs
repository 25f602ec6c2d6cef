use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use log::{error, info};

use backtrack_maze::config::{MazeConfig, DEFAULT_DIMS};
use backtrack_maze::generators::RandomPicker;
use backtrack_maze::grids::wall_grid::WallGrid;
use backtrack_maze::grids::Cell;
use backtrack_maze::{build_maze, pick_end, renderer};

/// Randomized depth-first maze generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of rows
    #[arg(short, long, default_value_t = DEFAULT_DIMS.0)]
    rows: usize,

    /// Number of columns
    #[arg(short, long, default_value_t = DEFAULT_DIMS.1)]
    cols: usize,

    /// Row of the start cell
    #[arg(long, default_value_t = 0)]
    start_row: usize,

    /// Column of the start cell
    #[arg(long, default_value_t = 0)]
    start_col: usize,

    /// Seed for reproducible mazes
    #[arg(short, long)]
    seed: Option<u64>,

    /// Read resize commands from stdin: up/+, down/-, r, q
    #[arg(short, long)]
    interactive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Grow,
    Shrink,
    Regenerate,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "up" | "+" => Some(Command::Grow),
            "down" | "-" => Some(Command::Shrink),
            "r" => Some(Command::Regenerate),
            "q" | "quit" => Some(Command::Quit),
            _ => None,
        }
    }
}

struct Maze {
    grid: WallGrid,
    start: Cell,
    end: Cell,
}

// a seeded config keeps producing the same maze for the same size
fn generate(config: &MazeConfig) -> backtrack_maze::Result<Maze> {
    let mut picker = match config.seed {
        Some(seed) => RandomPicker::seeded(seed),
        None => RandomPicker::new(),
    };

    let grid = build_maze(
        config.dims.rows,
        config.dims.columns,
        config.start,
        &mut picker,
    )?;
    let end = pick_end(grid.dims(), &mut picker);
    info!(
        "generated {}x{} maze, start {:?}, end {:?}",
        config.dims.rows, config.dims.columns, config.start, end
    );

    Ok(Maze {
        grid,
        start: config.start,
        end,
    })
}

fn show(maze: &Maze) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(renderer::render(&maze.grid, maze.start, maze.end).as_bytes())?;
    out.flush()
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = MazeConfig::with_dims(args.rows, args.cols);
    config.start = (args.start_row, args.start_col);
    config.seed = args.seed;

    show(&generate(&config)?)?;
    if !args.interactive {
        return Ok(());
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match Command::parse(&line) {
            Some(Command::Grow) => config.grow(),
            Some(Command::Shrink) => {
                if !config.shrink() {
                    info!(
                        "already at {}x{}, not shrinking",
                        config.dims.rows, config.dims.columns
                    );
                    continue;
                }
            }
            Some(Command::Regenerate) => {}
            Some(Command::Quit) => break,
            None => {
                eprintln!("unknown command {:?}, expected up, down, r or q", line.trim());
                continue;
            }
        }

        show(&generate(&config)?)?;
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
