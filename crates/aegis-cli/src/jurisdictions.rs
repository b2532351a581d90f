//! # Jurisdictions Subcommand
//!
//! Lists the restricted-jurisdiction registry, optionally narrowed to one
//! category.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use aegis_core::{Jurisdiction, JurisdictionCategory};
use aegis_registry::ReferenceData;

use crate::output::write_json;
use crate::EXIT_OK;

/// Arguments for the `aegis jurisdictions` subcommand.
#[derive(Args, Debug, Default)]
pub struct JurisdictionsArgs {
    /// Only list one category (`primary_adversary`, `itar_listed`, `sanctioned`).
    #[arg(long)]
    pub category: Option<JurisdictionCategory>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the jurisdictions subcommand.
pub fn run_jurisdictions<W: Write>(
    args: &JurisdictionsArgs,
    data: &ReferenceData,
    out: &mut W,
) -> Result<u8> {
    let registry = data.jurisdictions();
    let entries: Vec<&Jurisdiction> = match args.category {
        Some(cat) => registry.by_category(cat).collect(),
        None => registry.iter().collect(),
    };

    if args.json {
        write_json(out, &entries)?;
        return Ok(EXIT_OK);
    }

    for j in &entries {
        writeln!(out, "{:<4} {:<14} {}", j.code, j.name, j.category)?;
    }
    writeln!(out, "{} restricted jurisdiction(s)", entries.len())?;
    Ok(EXIT_OK)
}
