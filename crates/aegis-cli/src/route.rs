//! # Route Subcommand
//!
//! Evaluates one proposed route through the compliance engine and prints
//! the verdict panel: badge, route line, metrics, sovereignty score with
//! its three checks, and the recommended vessel.
//!
//! A request without an origin or destination prints the neutral
//! configure-route prompt and exits with [`EXIT_INVALID`](crate::EXIT_INVALID).

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use aegis_compliance::presentation::{
    recommended_vessel, restricted_display, RestrictedMarker, VesselRecommendation,
};
use aegis_compliance::{
    route_summary, ComplianceEngine, RandomSource, RouteVerdict, SeededRandom, ThreadRandom,
    VerdictBadge, CONFIGURE_ROUTE_PROMPT,
};
use aegis_registry::ReferenceData;

use crate::output::{group_thousands, mark, write_json};
use crate::{EXIT_INVALID, EXIT_OK};

/// Arguments for the `aegis route` subcommand.
///
/// Run `aegis ports` to list the catalogue ports.
#[derive(Args, Debug, Default)]
pub struct RouteArgs {
    /// Origin port.
    #[arg(long, default_value = "")]
    pub origin: String,

    /// Destination port. Catalogue destinations carry their alliance tag.
    #[arg(long, default_value = "")]
    pub destination: String,

    /// Optional intermediate stop.
    #[arg(long)]
    pub waypoint: Option<String>,

    /// Evaluate without excluding restricted jurisdictions (high risk).
    #[arg(long)]
    pub allow_restricted: bool,

    /// Seed the random source for a reproducible verdict.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RouteReport<'a> {
    badge: VerdictBadge,
    route: String,
    alliance: Option<&'a str>,
    verdict: &'a RouteVerdict,
    vessel: VesselRecommendation,
    restricted: Vec<RestrictedMarker>,
}

/// Execute the route subcommand.
pub fn run_route<W: Write>(args: &RouteArgs, data: &ReferenceData, out: &mut W) -> Result<u8> {
    let exclude = !args.allow_restricted;
    let request = data.request(
        &args.origin,
        args.waypoint.as_deref(),
        &args.destination,
        exclude,
    );

    let mut rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };

    let engine = ComplianceEngine::new(data.jurisdictions());
    let verdict = match engine.evaluate(&request, rng.as_mut()) {
        Ok(v) => v,
        Err(e) => {
            tracing::info!(error = %e, "route not evaluated");
            writeln!(out, "{CONFIGURE_ROUTE_PROMPT}")?;
            return Ok(EXIT_INVALID);
        }
    };

    let report = RouteReport {
        badge: VerdictBadge::for_verdict(&verdict),
        route: route_summary(&verdict),
        alliance: request.destination.alliance_tag.as_deref(),
        verdict: &verdict,
        vessel: recommended_vessel(),
        restricted: restricted_display(data.jurisdictions(), exclude),
    };

    if args.json {
        write_json(out, &report)?;
    } else {
        write_text(out, &report)?;
    }
    Ok(EXIT_OK)
}

fn write_text<W: Write>(out: &mut W, report: &RouteReport<'_>) -> Result<()> {
    let v = report.verdict;
    writeln!(out, "{}", report.badge)?;
    writeln!(out, "Route: {}", report.route)?;
    if let Some(alliance) = report.alliance {
        writeln!(out, "Alliance: {alliance}")?;
    }
    writeln!(out)?;
    writeln!(out, "Distance:      {} nm", group_thousands(v.distance_nautical_miles))?;
    writeln!(out, "Transit Time:  {} days", v.transit_days)?;
    writeln!(out, "Est. Cost:     ${}K", v.estimated_cost_kusd)?;
    writeln!(out, "Sovereignty Score: {}%", v.sovereignty_score)?;
    for check in &v.flags_checked {
        writeln!(out, "  {} {}", mark(check.passed), check.rationale)?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Recommended vessel: {} ({} Flag)",
        report.vessel.kind, report.vessel.flag
    )?;

    let codes: Vec<&str> = report.restricted.iter().map(|m| m.code.as_str()).collect();
    let heading = if report.restricted.iter().all(|m| m.excluded) {
        "Excluded jurisdictions"
    } else {
        "Restricted jurisdictions (NOT excluded)"
    };
    writeln!(out, "{heading}: {}", codes.join(" "))?;
    Ok(())
}
