//! # Summary Subcommand
//!
//! Fleet compliance figures: clean count, compliance score, and movement
//! breakdown, followed by licensing figures, the monthly trend, and the
//! audit log.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use aegis_compliance::{trend_low, AuditSummary, FleetSummary};
use aegis_core::{AuditRecord, ComplianceMetrics, MonthlyScore};
use aegis_registry::ReferenceData;

use crate::output::{mark, write_json};
use crate::EXIT_OK;

/// Arguments for the `aegis summary` subcommand.
#[derive(Args, Debug, Default)]
pub struct SummaryArgs {
    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryReport<'a> {
    #[serde(flatten)]
    fleet: FleetSummary,
    metrics: &'a ComplianceMetrics,
    audit_totals: AuditSummary,
    audits: &'a [AuditRecord],
    compliance_trend: &'a [MonthlyScore],
}

/// Execute the summary subcommand.
pub fn run_summary<W: Write>(args: &SummaryArgs, data: &ReferenceData, out: &mut W) -> Result<u8> {
    let summary = FleetSummary::from_shipments(data.shipments());
    let audit_totals = AuditSummary::from_audits(data.audits());

    if args.json {
        let report = SummaryReport {
            fleet: summary,
            metrics: data.metrics(),
            audit_totals,
            audits: data.audits(),
            compliance_trend: data.compliance_trend(),
        };
        write_json(out, &report)?;
        return Ok(EXIT_OK);
    }

    writeln!(out, "Compliance Score: {}%", summary.compliance_score)?;
    writeln!(out, "Fleet: {}", summary.label())?;
    writeln!(
        out,
        "Active: {} (in transit {}, loading {}), delivered {}",
        summary.active, summary.in_transit, summary.loading, summary.delivered
    )?;
    writeln!(out, "  {} Zero adversary contact", mark(summary.all_clean()))?;
    writeln!(out, "Restricted jurisdictions: {}", data.jurisdictions().len())?;

    let metrics = data.metrics();
    writeln!(out)?;
    writeln!(out, "Active Licenses:     {}", metrics.active_licenses)?;
    writeln!(out, "Days Since Incident: {}", metrics.days_since_incident)?;
    writeln!(out, "Audits (YTD):        {}", metrics.audits_ytd)?;

    let trend = data.compliance_trend();
    if !trend.is_empty() {
        let points: Vec<String> = trend
            .iter()
            .map(|p| format!("{} {}", p.month, p.score))
            .collect();
        writeln!(out)?;
        writeln!(out, "Monthly Trend: {}", points.join("  "))?;
        if let Some(low) = trend_low(trend) {
            writeln!(out, "  Low: {} {}%", low.month, low.score)?;
        }
    }

    if !data.audits().is_empty() {
        writeln!(out)?;
        writeln!(out, "Recent Audits ({}):", audit_totals.label())?;
        for a in data.audits() {
            writeln!(
                out,
                "  {} {:<14} {:<20} {} {} findings",
                mark(a.is_clean()),
                a.id,
                a.kind,
                a.date,
                a.findings
            )?;
        }
    }
    Ok(EXIT_OK)
}
