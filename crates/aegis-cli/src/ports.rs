//! # Ports Subcommand
//!
//! Lists the selectable origin, destination, and waypoint catalogues that
//! `aegis route` accepts. Destinations show their alliance tag.

use std::io::Write;

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;

use aegis_core::Port;
use aegis_registry::ReferenceData;

use crate::output::write_json;
use crate::EXIT_OK;

/// Port catalogues in the reference pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PortRole {
    /// Departure ports.
    Origin,
    /// Allied arrival ports.
    Destination,
    /// Intermediate stops.
    Waypoint,
}

impl PortRole {
    fn heading(self) -> &'static str {
        match self {
            Self::Origin => "Origins",
            Self::Destination => "Destinations",
            Self::Waypoint => "Waypoints",
        }
    }

    fn catalogue(self, data: &ReferenceData) -> &[Port] {
        match self {
            Self::Origin => data.origins(),
            Self::Destination => data.destinations(),
            Self::Waypoint => data.waypoints(),
        }
    }
}

/// Arguments for the `aegis ports` subcommand.
#[derive(Args, Debug, Default)]
pub struct PortsArgs {
    /// Only list one catalogue.
    #[arg(long, value_enum)]
    pub role: Option<PortRole>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Default)]
struct PortsReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    origins: Option<&'a [Port]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    destinations: Option<&'a [Port]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    waypoints: Option<&'a [Port]>,
}

/// Execute the ports subcommand.
pub fn run_ports<W: Write>(args: &PortsArgs, data: &ReferenceData, out: &mut W) -> Result<u8> {
    let roles: &[PortRole] = match &args.role {
        Some(role) => std::slice::from_ref(role),
        None => &[PortRole::Origin, PortRole::Destination, PortRole::Waypoint],
    };

    if args.json {
        let mut report = PortsReport::default();
        for role in roles {
            let ports = Some(role.catalogue(data));
            match role {
                PortRole::Origin => report.origins = ports,
                PortRole::Destination => report.destinations = ports,
                PortRole::Waypoint => report.waypoints = ports,
            }
        }
        write_json(out, &report)?;
        return Ok(EXIT_OK);
    }

    for role in roles {
        writeln!(out, "{}:", role.heading())?;
        for port in role.catalogue(data) {
            match &port.alliance_tag {
                Some(tag) => writeln!(out, "  {:<22} {tag}", port.name)?,
                None => writeln!(out, "  {}", port.name)?,
            }
        }
    }
    Ok(EXIT_OK)
}
