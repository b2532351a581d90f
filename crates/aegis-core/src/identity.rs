//! # Identity Newtypes
//!
//! Newtype wrappers for the identifiers used across the stack. You cannot
//! pass a [`ShipmentId`] where a [`JurisdictionCode`] is expected.
//!
//! ## Validation
//!
//! Both identifiers are validated at construction (non-empty, no
//! whitespace). Matching is always exact and case-sensitive; no
//! normalization is applied, so `"cn"` and `"CN"` are distinct codes.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

fn is_valid_token(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(char::is_whitespace)
}

/// Short identifier of a jurisdiction (ISO-like, e.g. `"CN"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JurisdictionCode(String);

impl JurisdictionCode {
    /// Create a jurisdiction code, validating format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidJurisdictionCode`] if the value is
    /// empty or contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !is_valid_token(&s) {
            return Err(ValidationError::InvalidJurisdictionCode(s));
        }
        Ok(Self(s))
    }

    /// Access the code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for JurisdictionCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JurisdictionCode> for String {
    fn from(code: JurisdictionCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for JurisdictionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// Container identifier of a shipment (e.g. `"US-MIL-8842X"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShipmentId(String);

impl ShipmentId {
    /// Create a shipment identifier, validating format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidShipmentId`] if the value is empty
    /// or contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !is_valid_token(&s) {
            return Err(ValidationError::InvalidShipmentId(s));
        }
        Ok(Self(s))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The trailing five characters, used as a compact map label.
    pub fn short_label(&self) -> &str {
        let start = self
            .0
            .char_indices()
            .rev()
            .nth(4)
            .map(|(i, _)| i)
            .unwrap_or(0);
        &self.0[start..]
    }
}

impl TryFrom<String> for ShipmentId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ShipmentId> for String {
    fn from(id: ShipmentId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ShipmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}
