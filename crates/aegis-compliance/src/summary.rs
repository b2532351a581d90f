//! # Fleet Compliance Summary
//!
//! Aggregates the recorded sovereignty scores of a fleet, and the audit
//! log, into the headline figures on the compliance dashboard.

use serde::Serialize;

use aegis_core::{AuditRecord, AuditStatus, MonthlyScore, Shipment, ShipmentStatus};

/// Headline compliance figures for a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSummary {
    /// Shipments considered.
    pub total: usize,
    /// Shipments with a recorded score of 100.
    pub clean: usize,
    /// Shipments not yet delivered.
    pub active: usize,
    /// Shipments loading at origin.
    pub loading: usize,
    /// Shipments underway.
    pub in_transit: usize,
    /// Shipments delivered.
    pub delivered: usize,
    /// `clean * 100 / total`, truncated. 100 for an empty fleet.
    pub compliance_score: u32,
}

impl FleetSummary {
    /// Summarize a fleet.
    pub fn from_shipments(shipments: &[Shipment]) -> Self {
        let count = |status: ShipmentStatus| shipments.iter().filter(|s| s.status == status).count();

        let total = shipments.len();
        let clean = shipments.iter().filter(|s| s.is_clean()).count();
        let compliance_score = if total == 0 {
            100
        } else {
            u32::try_from(clean * 100 / total).unwrap_or(100)
        };

        let summary = Self {
            total,
            clean,
            active: shipments.iter().filter(|s| s.is_active()).count(),
            loading: count(ShipmentStatus::Loading),
            in_transit: count(ShipmentStatus::InTransit),
            delivered: count(ShipmentStatus::Delivered),
            compliance_score,
        };
        tracing::debug!(total, clean, compliance_score, "fleet summarized");
        summary
    }

    /// True when every shipment is clean.
    pub fn all_clean(&self) -> bool {
        self.clean == self.total
    }

    /// `"<clean>/<total> CLEAN"`.
    pub fn label(&self) -> String {
        format!("{}/{} CLEAN", self.clean, self.total)
    }
}

/// Audit log totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    pub total: usize,
    pub passed: usize,
    /// Findings raised across every audit.
    pub findings: u32,
    /// `passed * 100 / total`, truncated. 100 for an empty log.
    pub pass_rate: u32,
}

impl AuditSummary {
    pub fn from_audits(audits: &[AuditRecord]) -> Self {
        let total = audits.len();
        let passed = audits
            .iter()
            .filter(|a| a.status == AuditStatus::Passed)
            .count();
        let findings = audits.iter().map(|a| a.findings).sum();
        let pass_rate = if total == 0 {
            100
        } else {
            u32::try_from(passed * 100 / total).unwrap_or(100)
        };
        Self {
            total,
            passed,
            findings,
            pass_rate,
        }
    }

    /// `"<pass_rate>% passed"`.
    pub fn label(&self) -> String {
        format!("{}% passed", self.pass_rate)
    }
}

/// The month with the lowest compliance score. Ties keep the earliest.
pub fn trend_low(trend: &[MonthlyScore]) -> Option<&MonthlyScore> {
    trend.iter().reduce(|low, p| if p.score < low.score { p } else { low })
}
