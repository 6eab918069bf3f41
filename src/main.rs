//! Roicanvas - AI ROI & roadmap canvas toolkit.
//!
//! Reads structured use-case records from a JSON or YAML file, runs the
//! analytical pipeline (ROI metrics, portfolio selection, canvas
//! aggregation), and prints the result as JSON.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use roicanvas::core::{CanvasError, CoreResult, OrgMetadata, UseCase};
use roicanvas::{build_canvas, compute_roi, select_portfolio};

/// AI ROI & roadmap canvas toolkit
#[derive(Parser)]
#[command(name = "roicanvas")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute ROI metrics for every use case
    Roi {
        /// Use-case file (.json, .yaml, or .yml)
        #[arg(short, long)]
        input: String,
    },

    /// Select a portfolio within an effort budget
    Select {
        /// Use-case file (.json, .yaml, or .yml)
        #[arg(short, long)]
        input: String,

        /// Effort budget (sum of effort scores the portfolio may use)
        #[arg(short, long)]
        budget: u32,
    },

    /// Run the full pipeline and print the roadmap canvas
    Canvas {
        /// Use-case file (.json, .yaml, or .yml)
        #[arg(short, long)]
        input: String,

        /// Effort budget (sum of effort scores the portfolio may use)
        #[arg(short, long)]
        budget: u32,

        /// Organization name
        #[arg(long, default_value = "")]
        org: String,

        /// Team name
        #[arg(long, default_value = "")]
        team: String,

        /// Who designed the canvas
        #[arg(long, default_value = "")]
        designed_by: String,

        /// Who the canvas is for
        #[arg(long, default_value = "")]
        designed_for: String,

        /// Primary goal statement
        #[arg(long, default_value = "")]
        goal: String,

        /// Strategic focus statement
        #[arg(long, default_value = "")]
        focus: String,

        /// Timeline start and header date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        start_date: Option<NaiveDate>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("warn") };

    tracing_subscriber::registry().with(fmt::layer().with_target(false)).with(filter).init();

    match cli.command {
        Commands::Roi { input } => {
            cmd_roi(&input, cli.pretty)?;
        }
        Commands::Select { input, budget } => {
            cmd_select(&input, budget, cli.pretty)?;
        }
        Commands::Canvas {
            input,
            budget,
            org,
            team,
            designed_by,
            designed_for,
            goal,
            focus,
            start_date,
        } => {
            let org_metadata = OrgMetadata {
                name: org,
                team,
                designed_by,
                designed_for,
                primary_goal: goal,
                strategic_focus: focus,
            };
            cmd_canvas(&input, budget, &org_metadata, start_date, cli.pretty)?;
        }
        Commands::Completions { shell } => {
            cmd_completions(shell);
        }
    }

    Ok(())
}

fn cmd_roi(input: &str, pretty: bool) -> Result<()> {
    let use_cases = load_use_cases(input)
        .with_context(|| format!("failed to load use cases from '{input}'"))?;
    let evaluated = compute_roi(&use_cases)?;
    print_json(&evaluated, pretty)
}

fn cmd_select(input: &str, budget: u32, pretty: bool) -> Result<()> {
    let use_cases = load_use_cases(input)
        .with_context(|| format!("failed to load use cases from '{input}'"))?;
    let evaluated = compute_roi(&use_cases)?;
    let portfolio = select_portfolio(&evaluated, budget);
    print_json(&portfolio, pretty)
}

fn cmd_canvas(
    input: &str,
    budget: u32,
    org: &OrgMetadata,
    start_date: Option<NaiveDate>,
    pretty: bool,
) -> Result<()> {
    let use_cases = load_use_cases(input)
        .with_context(|| format!("failed to load use cases from '{input}'"))?;
    let evaluated = compute_roi(&use_cases)?;
    let portfolio = select_portfolio(&evaluated, budget);

    let today = start_date.unwrap_or_else(|| Utc::now().date_naive());
    let canvas = build_canvas(&use_cases, &portfolio, org, today);
    print_json(&canvas, pretty)
}

fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

/// Load use-case records from a JSON or YAML file, dispatching on the
/// extension.
fn load_use_cases(path: &str) -> CoreResult<Vec<UseCase>> {
    let content = std::fs::read_to_string(path)?;
    let extension =
        Path::new(path).extension().and_then(|e| e.to_str()).unwrap_or("").to_lowercase();

    match extension.as_str() {
        "json" => Ok(serde_json::from_str(&content)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
        other => Err(CanvasError::UnsupportedFormat(other.to_string())),
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
