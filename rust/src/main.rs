use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use point_fixture::{render_layout, render_text, run_with, write_json, Point, Scenario};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "point-fixture", version, about = "Run the Point struct fixture and exit with its result")]
struct Cli {
    /// Print each step of the run
    #[arg(long)]
    trace: bool,

    /// Emit the run as JSON
    #[arg(long)]
    json: bool,

    /// Output file for JSON (default stdout)
    #[arg(long, value_name = "file", requires = "json")]
    out: Option<PathBuf>,

    /// Print the memory layout of Point
    #[arg(long)]
    layout: bool,

    /// x passed to initialize
    #[arg(long, default_value_t = 16, allow_hyphen_values = true)]
    x: i32,

    /// y passed to initialize
    #[arg(long, default_value_t = 32, allow_hyphen_values = true)]
    y: i32,

    /// x delta passed to move
    #[arg(long, default_value_t = 32, allow_hyphen_values = true)]
    dx: i32,

    /// y delta passed to move
    #[arg(long, default_value_t = 16, allow_hyphen_values = true)]
    dy: i32,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let scenario = Scenario {
        init: (cli.x, cli.y),
        delta: (cli.dx, cli.dy),
        ..Scenario::default()
    };
    let trace = run_with(scenario);

    if cli.layout {
        print!("{}", render_layout(&Point::layout()));
    }
    if cli.trace {
        print!("{}", render_text(&trace));
    }
    if cli.json {
        match &cli.out {
            Some(p) => {
                let f = File::create(p).with_context(|| format!("Failed to create {}", p.display()))?;
                write_json(&trace, &mut BufWriter::new(f))?;
                eprintln!("{}", format!("Wrote trace to {}", p.display()).yellow());
            }
            None => {
                let mut out = io::stdout().lock();
                write_json(&trace, &mut out)?;
            }
        }
    }

    Ok(ExitCode::from(trace.exit_code))
}
