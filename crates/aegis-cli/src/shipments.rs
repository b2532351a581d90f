//! # Shipment Subcommands
//!
//! `aegis shipments` filters the fleet; `aegis custody` prints one
//! shipment's detail panel and chain of custody.

use std::io::Write;

use anyhow::Result;
use chrono::Utc;
use clap::Args;

use aegis_core::port::city_of;
use aegis_core::{CustodyStatus, ShipmentStatus};
use aegis_registry::{ReferenceData, ShipmentQuery};

use crate::output::write_json;
use crate::{EXIT_NOT_FOUND, EXIT_OK};

/// Arguments for the `aegis shipments` subcommand.
#[derive(Args, Debug, Default)]
pub struct ShipmentsArgs {
    /// Only list shipments in this status (`loading`, `in_transit`, `delivered`).
    #[arg(long)]
    pub status: Option<ShipmentStatus>,

    /// Case-insensitive search over id, cargo, and destination.
    #[arg(long)]
    pub search: Option<String>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the shipments subcommand.
pub fn run_shipments<W: Write>(
    args: &ShipmentsArgs,
    data: &ReferenceData,
    out: &mut W,
) -> Result<u8> {
    let query = ShipmentQuery {
        status: args.status,
        search: args.search.clone(),
    };
    let hits = data.query(&query);
    tracing::debug!(?query, hits = hits.len(), "fleet query");

    if args.json {
        write_json(out, &hits)?;
        return Ok(EXIT_OK);
    }

    if hits.is_empty() {
        writeln!(out, "No shipments match your filters")?;
        return Ok(EXIT_OK);
    }

    writeln!(
        out,
        "{:<14} {:<30} {:<12} {:<12} {:<11} {:>8} {:>11}",
        "Container ID", "Cargo", "Origin", "Destination", "Status", "Progress", "Sovereignty"
    )?;
    for s in &hits {
        writeln!(
            out,
            "{:<14} {:<30} {:<12} {:<12} {:<11} {:>7}% {:>10}%",
            s.id,
            s.cargo,
            city_of(&s.origin),
            city_of(&s.destination),
            s.status,
            s.progress,
            s.sovereignty_score
        )?;
    }
    writeln!(out, "{} shipment(s)", hits.len())?;
    Ok(EXIT_OK)
}

/// Arguments for the `aegis custody` subcommand.
#[derive(Args, Debug, Default)]
pub struct CustodyArgs {
    /// Container ID, exact match (e.g. `US-MIL-8842X`).
    #[arg(value_name = "SHIPMENT_ID")]
    pub id: String,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the custody subcommand.
pub fn run_custody<W: Write>(args: &CustodyArgs, data: &ReferenceData, out: &mut W) -> Result<u8> {
    let Some(ship) = data.find_shipment(&args.id) else {
        tracing::info!(id = %args.id, "shipment not found");
        writeln!(out, "No shipment with id {}", args.id)?;
        return Ok(EXIT_NOT_FOUND);
    };

    if args.json {
        write_json(out, ship)?;
        return Ok(EXIT_OK);
    }

    let badge = if ship.is_clean() {
        "CLEAN / NO ADVERSARY CONTACT"
    } else {
        "RESTRICTED CONTACT RECORDED"
    };
    writeln!(out, "{}  {}", ship.id, ship.cargo)?;
    writeln!(out, "Sovereignty: {}%  {badge}", ship.sovereignty_score)?;
    writeln!(out, "Classification: {}", ship.classification)?;
    writeln!(out, "Route: {} → {}", ship.origin, ship.destination)?;
    writeln!(out, "Vessel: {} ({} flag)", ship.vessel, ship.vessel_flag)?;
    writeln!(out, "Weight: {}", ship.weight)?;
    writeln!(
        out,
        "Status: {} ({}%), ETA {}",
        ship.status,
        ship.progress,
        ship.eta(Utc::now()).format("%Y-%m-%d")
    )?;
    writeln!(out)?;
    writeln!(out, "Chain of Custody")?;
    for step in &ship.custody_chain {
        let glyph = match step.status {
            CustodyStatus::Complete => "●",
            CustodyStatus::Active => "◉",
            CustodyStatus::Pending => "○",
        };
        writeln!(
            out,
            "  {glyph} {:<32} {:<28} {}",
            step.step, step.location, step.time
        )?;
    }
    Ok(EXIT_OK)
}
