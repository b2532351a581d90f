//! # aegis CLI entry point
//!
//! Parses command-line arguments, loads the reference pack, and dispatches
//! to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use aegis_cli::jurisdictions::{run_jurisdictions, JurisdictionsArgs};
use aegis_cli::ports::{run_ports, PortsArgs};
use aegis_cli::route::{run_route, RouteArgs};
use aegis_cli::shipments::{run_custody, run_shipments, CustodyArgs, ShipmentsArgs};
use aegis_cli::summary::{run_summary, SummaryArgs};
use aegis_registry::ReferenceData;

/// AEGIS sovereign logistics toolkit
///
/// Evaluates proposed shipment routes against the restricted-jurisdiction
/// registry and inspects the tracked fleet.
#[derive(Parser, Debug)]
#[command(name = "aegis", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Reference data pack (YAML). Defaults to the compiled-in pack.
    #[arg(long, global = true, env = "AEGIS_REFERENCE_DATA")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a proposed route and print its sovereignty verdict.
    Route(RouteArgs),

    /// List restricted jurisdictions.
    Jurisdictions(JurisdictionsArgs),

    /// List and filter tracked shipments.
    Shipments(ShipmentsArgs),

    /// Show one shipment's chain of custody.
    Custody(CustodyArgs),

    /// Fleet compliance summary.
    Summary(SummaryArgs),

    /// List the selectable origin, destination, and waypoint ports.
    Ports(PortsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("aegis CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = run(cli);

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let data = ReferenceData::load(cli.data.as_deref()).context("failed to load reference data")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Route(args) => run_route(&args, &data, &mut out),
        Commands::Jurisdictions(args) => run_jurisdictions(&args, &data, &mut out),
        Commands::Shipments(args) => run_shipments(&args, &data, &mut out),
        Commands::Custody(args) => run_custody(&args, &data, &mut out),
        Commands::Summary(args) => run_summary(&args, &data, &mut out),
        Commands::Ports(args) => run_ports(&args, &data, &mut out),
    }
}
