//! # Shipments & Chain of Custody
//!
//! Read-only fleet records. A [`Shipment`] owns its ordered custody chain;
//! nothing in the stack mutates a shipment after the reference pack is
//! loaded.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::identity::ShipmentId;

/// Movement state of a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    /// Cargo is being loaded at origin.
    Loading,
    /// Underway.
    InTransit,
    /// Arrived and signed for.
    Delivered,
}

impl ShipmentStatus {
    /// Every status, in lifecycle order.
    pub fn all() -> &'static [ShipmentStatus] {
        &[Self::Loading, Self::InTransit, Self::Delivered]
    }

    /// The snake_case identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::InTransit => "in_transit",
            Self::Delivered => "delivered",
        }
    }

    /// Operator-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Loading => "Loading",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for ShipmentStatus {
    type Err = String;

    /// Accepts the snake_case identifier or the display label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|st| st.as_str() == s || st.label() == s)
            .ok_or_else(|| format!("unknown shipment status: \"{s}\""))
    }
}

/// Progress of a single custody step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustodyStatus {
    /// Step signed off.
    Complete,
    /// Step in progress.
    Active,
    /// Not yet reached.
    Pending,
}

impl CustodyStatus {
    /// The snake_case identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Active => "active",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for CustodyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One hand-off in a shipment's chain of custody.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustodyStep {
    /// Step label, e.g. `"Customs Cleared (US)"`.
    pub step: String,
    /// Step progress.
    pub status: CustodyStatus,
    /// Where the hand-off happens.
    pub location: String,
    /// Display timestamp or ETA text, kept verbatim.
    pub time: String,
}

/// Last reported position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    /// Latitude, [-90, 90].
    pub lat: f64,
    /// Longitude, [-180, 180].
    pub lng: f64,
}

/// A tracked shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    /// Container identifier.
    pub id: ShipmentId,
    /// Cargo description.
    pub cargo: String,
    /// Export-control label (`"ITAR"`, `"ITAR/EAR99"`). Display only.
    pub classification: String,
    /// Origin location.
    pub origin: String,
    /// Destination location.
    pub destination: String,
    /// Movement state.
    pub status: ShipmentStatus,
    /// Voyage progress percentage.
    pub progress: u32,
    /// Vessel name.
    pub vessel: String,
    /// Vessel flag state code.
    pub vessel_flag: String,
    /// ETA relative to the moment the fleet is viewed. Negative once delivered.
    pub eta_offset_days: i64,
    /// Declared weight, kept as display text.
    pub weight: String,
    /// Recorded sovereignty score percentage.
    pub sovereignty_score: u32,
    /// Last reported position.
    pub position: GeoPosition,
    /// Ordered custody chain.
    #[serde(default)]
    pub custody_chain: Vec<CustodyStep>,
}

impl Shipment {
    /// Check the record-level invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: empty cargo, a percentage above
    /// 100, or a position outside the coordinate space.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let owner = || self.id.to_string();

        for (field, value) in [
            ("cargo", &self.cargo),
            ("origin", &self.origin),
            ("destination", &self.destination),
        ] {
            if value.is_empty() {
                return Err(ValidationError::EmptyField {
                    owner: owner(),
                    field,
                });
            }
        }

        for (field, value) in [
            ("progress", self.progress),
            ("sovereignty score", self.sovereignty_score),
        ] {
            if value > 100 {
                return Err(ValidationError::PercentageOutOfRange {
                    owner: owner(),
                    field,
                    value,
                });
            }
        }

        let GeoPosition { lat, lng } = self.position;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(ValidationError::PositionOutOfRange {
                owner: owner(),
                lat,
                lng,
            });
        }

        Ok(())
    }

    /// Anything not yet delivered.
    pub fn is_active(&self) -> bool {
        self.status != ShipmentStatus::Delivered
    }

    /// A shipment is clean when its recorded sovereignty score is 100.
    pub fn is_clean(&self) -> bool {
        self.sovereignty_score == 100
    }

    /// ETA relative to `now`.
    pub fn eta(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + Duration::days(self.eta_offset_days)
    }

    /// The first step currently in progress, if any.
    pub fn current_step(&self) -> Option<&CustodyStep> {
        self.custody_chain
            .iter()
            .find(|s| s.status == CustodyStatus::Active)
    }

    /// Number of signed-off custody steps.
    pub fn completed_steps(&self) -> usize {
        self.custody_chain
            .iter()
            .filter(|s| s.status == CustodyStatus::Complete)
            .count()
    }

    /// Case-insensitive substring match over id, cargo, and destination.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.id.as_str().to_lowercase().contains(needle)
            || self.cargo.to_lowercase().contains(needle)
            || self.destination.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn step(label: &str, status: CustodyStatus) -> CustodyStep {
        CustodyStep {
            step: label.into(),
            status,
            location: "Port of Seattle".into(),
            time: "Pending".into(),
        }
    }

    fn shipment() -> Shipment {
        Shipment {
            id: ShipmentId::new("US-MIL-6655C").unwrap(),
            cargo: "Encrypted Comm Modules".into(),
            classification: "ITAR".into(),
            origin: "Seattle, WA".into(),
            destination: "Seoul, South Korea".into(),
            status: ShipmentStatus::Loading,
            progress: 15,
            vessel: "USNS Bob Hope".into(),
            vessel_flag: "US".into(),
            eta_offset_days: 13,
            weight: "340 kg".into(),
            sovereignty_score: 100,
            position: GeoPosition {
                lat: 47.6062,
                lng: -122.3321,
            },
            custody_chain: vec![
                step("Pickup (Secure Facility)", CustodyStatus::Complete),
                step("Customs Cleared (US)", CustodyStatus::Active),
                step("Loaded (US Flag Vessel)", CustodyStatus::Pending),
            ],
        }
    }

    #[test]
    fn valid_shipment_passes() {
        assert!(shipment().validate().is_ok());
    }

    #[test]
    fn progress_over_100_rejected() {
        let mut s = shipment();
        s.progress = 101;
        assert!(matches!(
            s.validate(),
            Err(ValidationError::PercentageOutOfRange { field: "progress", value: 101, .. })
        ));
    }

    #[test]
    fn bad_position_rejected() {
        let mut s = shipment();
        s.position.lng = 181.0;
        assert!(matches!(
            s.validate(),
            Err(ValidationError::PositionOutOfRange { .. })
        ));
    }

    #[test]
    fn empty_cargo_rejected() {
        let mut s = shipment();
        s.cargo.clear();
        assert!(matches!(
            s.validate(),
            Err(ValidationError::EmptyField { field: "cargo", .. })
        ));
    }

    #[test]
    fn custody_chain_queries() {
        let s = shipment();
        assert_eq!(s.current_step().unwrap().step, "Customs Cleared (US)");
        assert_eq!(s.completed_steps(), 1);
        assert!(s.is_active());
        assert!(s.is_clean());
    }

    #[test]
    fn eta_offsets_from_now() {
        let now = Utc.with_ymd_and_hms(2025, 1, 23, 12, 0, 0).unwrap();
        let eta = shipment().eta(now);
        assert_eq!(eta, Utc.with_ymd_and_hms(2025, 2, 5, 12, 0, 0).unwrap());
    }

    #[test]
    fn search_covers_id_cargo_destination() {
        let s = shipment();
        assert!(s.matches_search("6655"));
        assert!(s.matches_search("comm"));
        assert!(s.matches_search("korea"));
        assert!(!s.matches_search("seattle"));
    }

    #[test]
    fn status_parses_label_and_identifier() {
        assert_eq!("In Transit".parse::<ShipmentStatus>().unwrap(), ShipmentStatus::InTransit);
        assert_eq!("delivered".parse::<ShipmentStatus>().unwrap(), ShipmentStatus::Delivered);
        assert!("lost".parse::<ShipmentStatus>().is_err());
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(shipment()).unwrap();
        assert_eq!(json["vesselFlag"], "US");
        assert_eq!(json["sovereigntyScore"], 100);
        assert_eq!(json["status"], "loading");
        assert_eq!(json["custodyChain"][1]["status"], "active");
    }
}
