//! # Compliance Records
//!
//! Read-only compliance reference data carried alongside the fleet: the
//! audit log, the monthly compliance trend, and the headline licensing
//! figures.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Outcome of a compliance audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    /// Audit closed with no blocking findings.
    Passed,
    /// Audit closed with blocking findings.
    Failed,
    /// Audit not yet closed.
    Pending,
}

impl AuditStatus {
    /// Every status, in display order.
    pub fn all() -> &'static [AuditStatus] {
        &[Self::Passed, Self::Failed, Self::Pending]
    }

    /// The snake_case identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Pending => "pending",
        }
    }

    /// Operator-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Passed => "Passed",
            Self::Failed => "Failed",
            Self::Pending => "Pending",
        }
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for AuditStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|a| a.as_str() == s || a.label() == s)
            .ok_or_else(|| format!("unknown audit status: \"{s}\""))
    }
}

/// One entry in the audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Audit reference, e.g. `AUD-2025-0123`.
    pub id: String,
    /// Audit programme, e.g. "ITAR Review".
    #[serde(rename = "type")]
    pub kind: String,
    pub status: AuditStatus,
    pub date: NaiveDate,
    /// Number of findings raised.
    pub findings: u32,
}

impl AuditRecord {
    /// Check display fields are present.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] for an empty id or type.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyField {
                owner: "audit".to_string(),
                field: "id",
            });
        }
        if self.kind.is_empty() {
            return Err(ValidationError::EmptyField {
                owner: self.id.clone(),
                field: "type",
            });
        }
        Ok(())
    }

    /// True for a passed audit with zero findings.
    pub fn is_clean(&self) -> bool {
        self.status == AuditStatus::Passed && self.findings == 0
    }
}

/// One point of the monthly compliance trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyScore {
    /// Short month label, e.g. `Aug`.
    pub month: String,
    /// Compliance percentage for the month.
    pub score: u32,
}

impl MonthlyScore {
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for an empty month label or a score
    /// above 100.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.month.is_empty() {
            return Err(ValidationError::EmptyField {
                owner: "compliance trend".to_string(),
                field: "month",
            });
        }
        if self.score > 100 {
            return Err(ValidationError::PercentageOutOfRange {
                owner: self.month.clone(),
                field: "score",
                value: self.score,
            });
        }
        Ok(())
    }
}

/// Headline licensing and incident figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ComplianceMetrics {
    /// Active ITAR/EAR authorizations.
    pub active_licenses: u32,
    pub days_since_incident: u32,
    /// Audits completed this year.
    pub audits_ytd: u32,
}
