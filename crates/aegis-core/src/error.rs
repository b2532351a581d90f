//! # Error Hierarchy
//!
//! Validation errors for the domain primitives in this crate, built with
//! `thiserror`. Higher-level crates wrap [`ValidationError`] in their own
//! error enums (`RegistryError`, `RouteError`) rather than re-declaring it.
//!
//! Each variant carries the offending value so operators can locate the
//! bad record in a reference data pack without a debugger.

use thiserror::Error;

/// Domain primitive validation failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Jurisdiction code is empty or contains whitespace.
    #[error("invalid jurisdiction code: \"{0}\" (expected a non-empty code without whitespace)")]
    InvalidJurisdictionCode(String),

    /// Shipment identifier is empty or contains whitespace.
    #[error("invalid shipment id: \"{0}\" (expected a non-empty id without whitespace)")]
    InvalidShipmentId(String),

    /// Two registry entries share a jurisdiction code.
    #[error("duplicate jurisdiction code in registry: {0}")]
    DuplicateJurisdiction(String),

    /// Two fleet entries share a shipment id.
    #[error("duplicate shipment id in fleet: {0}")]
    DuplicateShipment(String),

    /// Two audit log entries share an id.
    #[error("duplicate audit id in audit log: {0}")]
    DuplicateAudit(String),

    /// A percentage field (progress, sovereignty score) exceeds 100.
    #[error("{field} for {owner} is {value}%, expected 0-100")]
    PercentageOutOfRange {
        /// The record the field belongs to.
        owner: String,
        /// The field name.
        field: &'static str,
        /// The rejected value.
        value: u32,
    },

    /// A latitude/longitude pair lies outside the valid coordinate space.
    #[error("position ({lat}, {lng}) for {owner} is outside [-90, 90] x [-180, 180]")]
    PositionOutOfRange {
        /// The record the position belongs to.
        owner: String,
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lng: f64,
    },

    /// An origin or waypoint carries an alliance tag. Only destinations may.
    #[error("{role} port \"{port}\" carries an alliance tag; only destinations may")]
    UnexpectedAlliance {
        /// `"origin"` or `"waypoint"`.
        role: &'static str,
        /// The port name.
        port: String,
    },

    /// A required display field is empty.
    #[error("{field} for {owner} must not be empty")]
    EmptyField {
        /// The record the field belongs to.
        owner: String,
        /// The field name.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_offending_value() {
        let err = ValidationError::DuplicateJurisdiction("CN".into());
        assert_eq!(err.to_string(), "duplicate jurisdiction code in registry: CN");

        let err = ValidationError::PercentageOutOfRange {
            owner: "US-MIL-8842X".into(),
            field: "progress",
            value: 140,
        };
        assert_eq!(err.to_string(), "progress for US-MIL-8842X is 140%, expected 0-100");
    }
}
