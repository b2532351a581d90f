//! # Verdict Presentation Helpers
//!
//! Small pure functions the planner views use to render a verdict. None of
//! them touch the random source or alter a verdict.

use serde::Serialize;

use aegis_core::JurisdictionRegistry;

use crate::engine::RouteVerdict;

/// Separator between route legs.
pub const ROUTE_ARROW: &str = " → ";

/// `"Origin → Waypoint → Destination"`, skipping an absent waypoint.
pub fn route_summary(verdict: &RouteVerdict) -> String {
    let mut legs: Vec<&str> = Vec::with_capacity(3);
    legs.push(&verdict.origin);
    if let Some(w) = &verdict.waypoint {
        legs.push(w);
    }
    legs.push(&verdict.destination);
    legs.join(ROUTE_ARROW)
}

/// Headline badge for a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictBadge {
    /// Score of 100.
    Clean,
    /// Anything below 100.
    HighRisk,
}

impl VerdictBadge {
    /// Badge for a verdict, derived solely from `clean`.
    pub fn for_verdict(verdict: &RouteVerdict) -> Self {
        if verdict.clean {
            Self::Clean
        } else {
            Self::HighRisk
        }
    }

    /// Badge text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clean => "CLEAN ROUTE",
            Self::HighRisk => "HIGH RISK",
        }
    }
}

impl std::fmt::Display for VerdictBadge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// Vessel class the planner recommends for every route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VesselRecommendation {
    /// Vessel type.
    pub kind: &'static str,
    /// Required flag state.
    pub flag: &'static str,
}

/// The planner always recommends a US-flag container vessel.
pub fn recommended_vessel() -> VesselRecommendation {
    VesselRecommendation {
        kind: "US-Flag Container",
        flag: "US",
    }
}

/// A registry entry as shown in the "excluded jurisdictions" strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestrictedMarker {
    /// Jurisdiction code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Highlighted when exclusion is enabled, muted otherwise.
    pub excluded: bool,
}

/// One marker per registry entry, in registry order.
pub fn restricted_display(
    registry: &JurisdictionRegistry,
    exclude_restricted: bool,
) -> Vec<RestrictedMarker> {
    registry
        .iter()
        .map(|j| RestrictedMarker {
            code: j.code.to_string(),
            name: j.name.clone(),
            excluded: exclude_restricted,
        })
        .collect()
}
