//! # Route Compliance Engine
//!
//! Evaluates a proposed route and produces a [`RouteVerdict`]: distance,
//! transit time, cost, sovereignty score, and the three named compliance
//! checks shown on the route planner.
//!
//! ## Scoring Rule
//!
//! ```text
//! distance  ← uniform[4000, 7000] nm
//! transit   ← round_half_even(distance / 400) days
//! cost      ← uniform[200, 700] kUSD
//! score     ← 100                 if exclude_restricted
//!             uniform[50, 80]     otherwise
//! clean     ← score == 100
//! ```
//!
//! A clean evaluation consumes two draws from the [`RandomSource`], a
//! non-clean one consumes three. Invalid requests consume none.
//!
//! ## Known Limitation
//!
//! The score is decided by the `exclude_restricted` flag alone. The route's
//! origin, waypoint, and destination are never compared against the
//! [`JurisdictionRegistry`] or the alliance table, and the
//! "US-Flag vessel required" and "Allied port destination confirmed" checks
//! always pass. Downstream displays depend on this exact contract, so it is
//! kept as-is; [`is_restricted`] exists for display and is not consulted
//! during scoring.

use serde::Serialize;

use aegis_core::{Jurisdiction, JurisdictionRegistry, Port};

use crate::error::RouteError;
use crate::random::RandomSource;

// ---------------------------------------------------------------------------
// Draw ranges
// ---------------------------------------------------------------------------

/// Shortest drawn route, nautical miles.
pub const DISTANCE_MIN_NM: u32 = 4000;
/// Longest drawn route, nautical miles.
pub const DISTANCE_MAX_NM: u32 = 7000;
/// Cheapest drawn estimate, thousands of USD.
pub const COST_MIN_KUSD: u32 = 200;
/// Most expensive drawn estimate, thousands of USD.
pub const COST_MAX_KUSD: u32 = 700;
/// Lowest score drawn for a route evaluated without exclusion.
pub const RISK_SCORE_MIN: u32 = 50;
/// Highest score drawn for a route evaluated without exclusion.
pub const RISK_SCORE_MAX: u32 = 80;
/// Score of a clean route.
pub const CLEAN_SCORE: u32 = 100;
/// Nautical miles covered per transit day.
pub const NM_PER_TRANSIT_DAY: u32 = 400;

// ---------------------------------------------------------------------------
// Check names
// ---------------------------------------------------------------------------

/// Name of the adversary-contact check.
pub const CHECK_ADVERSARY_CONTACT: &str = "No adversary jurisdiction contact";
/// Name of the vessel-flag check.
pub const CHECK_US_FLAG_VESSEL: &str = "US-Flag vessel required";
/// Name of the allied-destination check.
pub const CHECK_ALLIED_DESTINATION: &str = "Allied port destination confirmed";

const RATIONALE_RESTRICTED_CONTACT: &str = "Route passes through restricted zones";

// ---------------------------------------------------------------------------
// Request / verdict
// ---------------------------------------------------------------------------

/// A proposed shipment route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    /// Departure port. Must be non-empty.
    pub origin: Port,
    /// Optional intermediate stop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waypoint: Option<Port>,
    /// Arrival port. Must be non-empty.
    pub destination: Port,
    /// Whether the route must avoid every restricted jurisdiction.
    pub exclude_restricted: bool,
}

impl RouteRequest {
    /// A direct route with restricted-jurisdiction exclusion enabled, which
    /// is the planner's default.
    pub fn new(origin: Port, destination: Port) -> Self {
        Self {
            origin,
            waypoint: None,
            destination,
            exclude_restricted: true,
        }
    }

    /// Route through an intermediate stop.
    pub fn via(mut self, waypoint: Port) -> Self {
        self.waypoint = Some(waypoint);
        self
    }

    /// Set the exclusion flag.
    pub fn exclude_restricted(mut self, exclude: bool) -> Self {
        self.exclude_restricted = exclude;
        self
    }

    /// Reject requests missing an origin or destination.
    ///
    /// Only emptiness is checked. Origin and destination may be equal.
    pub fn validate(&self) -> Result<(), RouteError> {
        if self.origin.is_empty() {
            return Err(RouteError::InvalidRequest { field: "origin" });
        }
        if self.destination.is_empty() {
            return Err(RouteError::InvalidRequest {
                field: "destination",
            });
        }
        Ok(())
    }
}

/// One named pass/fail check on a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceCheck {
    /// Check name.
    pub name: &'static str,
    /// Whether the check passed.
    pub passed: bool,
    /// Operator-facing explanation for the outcome.
    pub rationale: &'static str,
}

impl ComplianceCheck {
    fn passing(name: &'static str) -> Self {
        Self {
            name,
            passed: true,
            rationale: name,
        }
    }
}

/// The outcome of evaluating one [`RouteRequest`].
///
/// Produced fresh on every call. Two evaluations of the same request are
/// expected to differ whenever the random source yields different draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteVerdict {
    /// Origin name, as requested.
    pub origin: String,
    /// Waypoint name, if the route had one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waypoint: Option<String>,
    /// Destination name, as requested.
    pub destination: String,
    /// Route length, [4000, 7000].
    pub distance_nautical_miles: u32,
    /// `round_half_even(distance / 400)`.
    pub transit_days: u32,
    /// Estimated cost, [200, 700].
    #[serde(rename = "estimatedCostKUSD")]
    pub estimated_cost_kusd: u32,
    /// Sovereignty score percentage.
    pub sovereignty_score: u32,
    /// Exactly `sovereignty_score == 100`.
    pub clean: bool,
    /// The three named checks, in display order.
    pub flags_checked: Vec<ComplianceCheck>,
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Transit days for a distance, rounding half to even.
///
/// 4200 nm is exactly 10.5 days and rounds to 10; 4600 nm is 11.5 days and
/// rounds to 12.
pub fn transit_days(distance_nm: u32) -> u32 {
    let whole = distance_nm / NM_PER_TRANSIT_DAY;
    let twice_rem = 2 * (distance_nm % NM_PER_TRANSIT_DAY);
    match twice_rem.cmp(&NM_PER_TRANSIT_DAY) {
        std::cmp::Ordering::Less => whole,
        std::cmp::Ordering::Greater => whole + 1,
        std::cmp::Ordering::Equal => whole + whole % 2,
    }
}

/// Evaluate a route against the restricted-jurisdiction registry.
///
/// See the [module docs](self) for the scoring rule. The registry is
/// accepted for every call but does not influence the score.
///
/// # Errors
///
/// Returns [`RouteError::InvalidRequest`] if the origin or destination is
/// empty. No randomness is consumed in that case.
pub fn evaluate_route<R>(
    request: &RouteRequest,
    registry: &JurisdictionRegistry,
    rng: &mut R,
) -> Result<RouteVerdict, RouteError>
where
    R: RandomSource + ?Sized,
{
    if let Err(e) = request.validate() {
        tracing::debug!(error = %e, "route request rejected");
        return Err(e);
    }

    let distance = rng.uniform(DISTANCE_MIN_NM, DISTANCE_MAX_NM);
    let transit = transit_days(distance);
    let cost = rng.uniform(COST_MIN_KUSD, COST_MAX_KUSD);
    let score = if request.exclude_restricted {
        CLEAN_SCORE
    } else {
        rng.uniform(RISK_SCORE_MIN, RISK_SCORE_MAX)
    };
    let clean = score == CLEAN_SCORE;

    let adversary = if clean {
        ComplianceCheck::passing(CHECK_ADVERSARY_CONTACT)
    } else {
        ComplianceCheck {
            name: CHECK_ADVERSARY_CONTACT,
            passed: false,
            rationale: RATIONALE_RESTRICTED_CONTACT,
        }
    };

    tracing::debug!(
        origin = %request.origin,
        destination = %request.destination,
        exclude_restricted = request.exclude_restricted,
        restricted_entries = registry.len(),
        distance,
        cost,
        score,
        "route evaluated"
    );
    if !clean {
        tracing::warn!(
            origin = %request.origin,
            destination = %request.destination,
            score,
            "high-risk route: restricted jurisdictions not excluded"
        );
    }

    Ok(RouteVerdict {
        origin: request.origin.name.clone(),
        waypoint: request.waypoint.as_ref().map(|w| w.name.clone()),
        destination: request.destination.name.clone(),
        distance_nautical_miles: distance,
        transit_days: transit,
        estimated_cost_kusd: cost,
        sovereignty_score: score,
        clean,
        flags_checked: vec![
            adversary,
            ComplianceCheck::passing(CHECK_US_FLAG_VESSEL),
            ComplianceCheck::passing(CHECK_ALLIED_DESTINATION),
        ],
    })
}

/// True iff `code` exactly matches a registry entry's code.
///
/// Case-sensitive, no normalization.
pub fn is_restricted(code: &str, registry: &JurisdictionRegistry) -> bool {
    registry.contains(code)
}

/// Route evaluation bound to one registry.
#[derive(Debug, Clone, Copy)]
pub struct ComplianceEngine<'a> {
    registry: &'a JurisdictionRegistry,
}

impl<'a> ComplianceEngine<'a> {
    /// Bind an engine to a registry.
    pub fn new(registry: &'a JurisdictionRegistry) -> Self {
        Self { registry }
    }

    /// See [`evaluate_route`].
    pub fn evaluate<R>(
        &self,
        request: &RouteRequest,
        rng: &mut R,
    ) -> Result<RouteVerdict, RouteError>
    where
        R: RandomSource + ?Sized,
    {
        evaluate_route(request, self.registry, rng)
    }

    /// See [`is_restricted`].
    pub fn is_restricted(&self, code: &str) -> bool {
        is_restricted(code, self.registry)
    }

    /// The registry entries, in display order.
    pub fn restricted_jurisdictions(&self) -> impl Iterator<Item = &'a Jurisdiction> {
        self.registry.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use aegis_core::JurisdictionCategory;

    fn registry() -> JurisdictionRegistry {
        JurisdictionRegistry::new(vec![
            Jurisdiction::new("CN", "China", JurisdictionCategory::PrimaryAdversary).unwrap(),
            Jurisdiction::new("CU", "Cuba", JurisdictionCategory::ItarListed).unwrap(),
        ])
        .unwrap()
    }

    fn request(exclude: bool) -> RouteRequest {
        RouteRequest::new(
            Port::new("Los Angeles, CA"),
            Port::allied("Yokosuka, Japan", "US-Japan Treaty"),
        )
        .exclude_restricted(exclude)
    }

    #[test]
    fn transit_days_rounds_half_to_even() {
        assert_eq!(transit_days(4000), 10);
        assert_eq!(transit_days(4199), 10);
        assert_eq!(transit_days(4200), 10);
        assert_eq!(transit_days(4201), 11);
        assert_eq!(transit_days(4599), 11);
        assert_eq!(transit_days(4600), 12);
        assert_eq!(transit_days(5000), 12);
        assert_eq!(transit_days(5400), 14);
        assert_eq!(transit_days(7000), 18);
    }

    #[test]
    fn excluded_route_is_clean_with_two_draws() {
        let mut rng = ScriptedRandom::new([5000, 300, 65]);
        let v = evaluate_route(&request(true), &registry(), &mut rng).unwrap();
        assert_eq!(v.distance_nautical_miles, 5000);
        assert_eq!(v.transit_days, 12);
        assert_eq!(v.estimated_cost_kusd, 300);
        assert_eq!(v.sovereignty_score, 100);
        assert!(v.clean);
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn unexcluded_route_uses_third_draw() {
        let mut rng = ScriptedRandom::new([5000, 300, 65]);
        let v = evaluate_route(&request(false), &registry(), &mut rng).unwrap();
        assert_eq!(v.sovereignty_score, 65);
        assert!(!v.clean);
        assert_eq!(rng.draws(), 3);

        let adversary = &v.flags_checked[0];
        assert!(!adversary.passed);
        assert_eq!(adversary.rationale, "Route passes through restricted zones");
    }

    #[test]
    fn flags_are_fixed_and_ordered() {
        let mut rng = ScriptedRandom::new([6000, 250]);
        let v = evaluate_route(&request(true), &registry(), &mut rng).unwrap();
        let names: Vec<&str> = v.flags_checked.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "No adversary jurisdiction contact",
                "US-Flag vessel required",
                "Allied port destination confirmed",
            ]
        );
        assert!(v.flags_checked.iter().all(|c| c.passed));
        assert_eq!(v.flags_checked[0].rationale, "No adversary jurisdiction contact");
    }

    #[test]
    fn empty_endpoints_rejected_without_draws() {
        let mut rng = ScriptedRandom::new([5000, 300]);
        let req = RouteRequest::new(Port::new(""), Port::new("Rota, Spain"));
        let err = evaluate_route(&req, &registry(), &mut rng).unwrap_err();
        assert_eq!(err, RouteError::InvalidRequest { field: "origin" });

        let req = RouteRequest::new(Port::new("Norfolk, VA"), Port::new(""));
        let err = evaluate_route(&req, &registry(), &mut rng).unwrap_err();
        assert_eq!(err, RouteError::InvalidRequest { field: "destination" });
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn same_origin_and_destination_allowed() {
        let mut rng = ScriptedRandom::new([4500, 450]);
        let req = RouteRequest::new(Port::new("Guam"), Port::new("Guam"));
        assert!(evaluate_route(&req, &registry(), &mut rng).is_ok());
    }

    #[test]
    fn restricted_endpoint_names_do_not_affect_score() {
        let mut rng = ScriptedRandom::new([5000, 300]);
        let req = RouteRequest::new(Port::new("China"), Port::new("Cuba")).via(Port::new("CN"));
        let v = evaluate_route(&req, &registry(), &mut rng).unwrap();
        assert_eq!(v.sovereignty_score, 100);
        assert!(v.clean);
        assert_eq!(v.waypoint.as_deref(), Some("CN"));
    }

    #[test]
    fn engine_delegates() {
        let reg = registry();
        let engine = ComplianceEngine::new(&reg);
        assert!(engine.is_restricted("CN"));
        assert!(!engine.is_restricted("FR"));
        assert_eq!(engine.restricted_jurisdictions().count(), 2);

        let mut rng = ScriptedRandom::new([4200, 700, 80]);
        let v = engine.evaluate(&request(false), &mut rng).unwrap();
        assert_eq!(v.transit_days, 10);
        assert_eq!(v.sovereignty_score, 80);
    }

    #[test]
    fn verdict_serializes_with_data_model_names() {
        let mut rng = ScriptedRandom::new([5000, 300]);
        let v = evaluate_route(&request(true), &registry(), &mut rng).unwrap();
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["distanceNauticalMiles"], 5000);
        assert_eq!(json["transitDays"], 12);
        assert_eq!(json["estimatedCostKUSD"], 300);
        assert_eq!(json["sovereigntyScore"], 100);
        assert_eq!(json["clean"], true);
        assert_eq!(json["flagsChecked"].as_array().unwrap().len(), 3);
        assert!(json.get("waypoint").is_none());
    }
}
