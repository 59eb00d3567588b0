use std::{path::PathBuf, time::Instant};

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use weave::{
    error::Result,
    problems::sudoku::{board_from_str, format_grid, solution_grid},
    solver::{
        search::BacktrackingSearch,
        stats::{render_stats_table, SearchStats},
    },
};

/// Solve sudoku board files with AC-3 propagation and backtracking search.
#[derive(Debug, Parser)]
#[command(name = "weave", version)]
struct Args {
    /// Board files to solve: nine lines of nine digits, `0` for a blank.
    /// Defaults to the bundled boards, easiest first.
    boards: Vec<PathBuf>,

    /// Emit a JSON report instead of text output.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct BoardReport {
    board: String,
    solved: bool,
    grid: Option<Vec<String>>,
    stats: SearchStats,
    millis: u128,
}

fn default_boards() -> Vec<PathBuf> {
    ["easy", "medium", "hard", "veryhard"]
        .iter()
        .map(|name| PathBuf::from(format!("boards/{name}.txt")))
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let boards = if args.boards.is_empty() {
        default_boards()
    } else {
        args.boards
    };

    let mut reports = Vec::new();
    for path in &boards {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let text = std::fs::read_to_string(path)?;
        let store = board_from_str(&text)?;

        let started = Instant::now();
        let (solution, stats) = BacktrackingSearch::default().solve(&store);
        let millis = started.elapsed().as_millis();

        let grid = solution.and_then(|solution| solution_grid(&store, &solution));
        if !args.json {
            println!(">  Solving {name}\n");
            match &grid {
                Some(grid) => print!("{}", format_grid(grid)),
                None => println!("no solution"),
            }
            println!("\n{}", render_stats_table(&stats));
            println!("solved in {millis} ms\n");
        }

        reports.push(BoardReport {
            board: name,
            solved: grid.is_some(),
            grid: grid.map(|grid| {
                grid.iter()
                    .map(|row| row.iter().map(u8::to_string).collect::<String>())
                    .collect()
            }),
            stats,
            millis,
        });
    }

    if args.json {
        let rendered = serde_json::to_string_pretty(&reports).expect("reports are serializable");
        println!("{rendered}");
    }
    Ok(())
}
