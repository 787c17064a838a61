//! Line-of-sight probe
//!
//! Loads a scenario (or an empty map), optionally places walls, evaluates one
//! origin/destination pair and prints the result.

use std::path::PathBuf;

use clap::Parser;
use hexsight::core::config::{load_config, SightConfig};
use hexsight::core::error::Result;
use hexsight::grid::{CellKind, HexCoord};
use hexsight::session::{LosSession, Scenario};
use hexsight::sight::EDGE_COUNT;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Line-of-sight probe - evaluate sight between two hex cells
#[derive(Parser, Debug)]
#[command(name = "los_probe")]
#[command(about = "Evaluate edge-sampled line of sight between two hex cells")]
struct Args {
    /// TOML config file (defaults are used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scenario to load from the config's scenario directory
    #[arg(long, default_value = "None")]
    scenario: Scenario,

    /// Map radius when no config file is given
    #[arg(long)]
    map_size: Option<i32>,

    /// Origin cell as q,r
    #[arg(long, value_parser = parse_coord, allow_hyphen_values = true)]
    from: HexCoord,

    /// Destination cell as q,r
    #[arg(long, value_parser = parse_coord, allow_hyphen_values = true)]
    to: HexCoord,

    /// Extra wall cells as q,r (repeatable)
    #[arg(long = "wall", value_parser = parse_coord, allow_hyphen_values = true)]
    walls: Vec<HexCoord>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,

    /// Print the single center line instead of the six best-edge lines
    #[arg(long)]
    center_line: bool,
}

fn parse_coord(s: &str) -> std::result::Result<HexCoord, String> {
    let (q, r) = s
        .split_once(',')
        .ok_or_else(|| format!("expected q,r but got {s:?}"))?;
    let q = q.trim().parse::<i32>().map_err(|e| format!("bad q in {s:?}: {e}"))?;
    let r = r.trim().parse::<i32>().map_err(|e| format!("bad r in {s:?}: {e}"))?;
    Ok(HexCoord::new(q, r))
}

/// JSON output structure
#[derive(Serialize)]
struct ProbeOutput {
    scenario: String,
    origin: HexCoord,
    destination: HexCoord,
    visible: bool,
    grade: Option<String>,
    best_edge: Option<usize>,
    best_blocked_count: Option<usize>,
    blocked: Option<[[bool; EDGE_COUNT]; EDGE_COUNT]>,
    lines: Vec<LineOutput>,
}

#[derive(Serialize)]
struct LineOutput {
    from: [f64; 2],
    to: [f64; 2],
    tone: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hexsight=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        tracing::error!(%err, "Probe failed");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SightConfig::default(),
    };
    if let Some(map_size) = args.map_size {
        config.map_size = map_size;
    }
    config.draw_all_lines = !args.center_line;

    let mut session = LosSession::new(config)?;
    session.load_scenario(args.scenario)?;
    for &wall in &args.walls {
        session.set_kind(wall, CellKind::Wall)?;
    }

    let result = session.try_evaluate(args.from, args.to).ok().cloned();
    let lines = session
        .sight_lines()
        .into_iter()
        .map(|line| LineOutput {
            from: line.from.to_array(),
            to: line.to.to_array(),
            tone: format!("{:?}", line.tone),
        })
        .collect();

    let output = ProbeOutput {
        scenario: args.scenario.name().to_string(),
        origin: args.from,
        destination: args.to,
        visible: result.as_ref().is_some_and(|r| r.best_blocked_count == 0),
        grade: result.as_ref().map(|r| format!("{:?}", r.grade())),
        best_edge: result.as_ref().map(|r| r.best_edge),
        best_blocked_count: result.as_ref().map(|r| r.best_blocked_count),
        blocked: result.as_ref().map(|r| r.blocked.0),
        lines,
    };

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_text(&output);
    }
    Ok(())
}

fn print_text(output: &ProbeOutput) {
    println!("=== LINE OF SIGHT ===");
    println!("Scenario:    {}", output.scenario);
    println!("Origin:      {}", output.origin);
    println!("Destination: {}", output.destination);

    let (Some(grade), Some(best_edge), Some(count), Some(blocked)) = (
        &output.grade,
        output.best_edge,
        output.best_blocked_count,
        &output.blocked,
    ) else {
        println!("No result: both cells must be distinct Empty/Base cells on the map");
        return;
    };

    println!("Grade:       {grade}");
    println!("Best edge:   {best_edge} ({count}/{EDGE_COUNT} blocked)");
    println!();
    println!("          dest 0 1 2 3 4 5");
    for (origin_edge, row) in blocked.iter().enumerate() {
        let marks: Vec<&str> = row.iter().map(|&b| if b { "X" } else { "." }).collect();
        let best = if origin_edge == best_edge { "*" } else { " " };
        println!("{best} origin {origin_edge}   {}", marks.join(" "));
    }
}
