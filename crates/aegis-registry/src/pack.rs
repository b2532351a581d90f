//! # Reference Pack Loading
//!
//! Parses a YAML reference pack into [`ReferenceData`] and validates every
//! record before handing it out. Validation runs once; the returned value
//! is immutable and `Send + Sync`.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use aegis_compliance::RouteRequest;
use aegis_core::{
    AuditRecord, ComplianceMetrics, Jurisdiction, JurisdictionRegistry, MonthlyScore, Port,
    Shipment, ShipmentStatus, ValidationError,
};

use crate::error::RegistryError;
use crate::query::ShipmentQuery;

/// The compiled-in reference pack.
pub const EMBEDDED_PACK: &str = include_str!("../data/reference.yaml");

const EMBEDDED_ORIGIN: &str = "<embedded>";

/// On-disk shape. Kept separate so registry invariants surface as
/// validation errors rather than YAML errors.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawPack {
    jurisdictions: Vec<Jurisdiction>,
    #[serde(default)]
    origins: Vec<Port>,
    #[serde(default)]
    destinations: Vec<Port>,
    #[serde(default)]
    waypoints: Vec<Port>,
    #[serde(default)]
    shipments: Vec<Shipment>,
    #[serde(default)]
    audits: Vec<AuditRecord>,
    #[serde(default)]
    compliance_trend: Vec<MonthlyScore>,
    #[serde(default)]
    metrics: ComplianceMetrics,
}

/// Validated, read-only reference data.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    jurisdictions: JurisdictionRegistry,
    origins: Vec<Port>,
    destinations: Vec<Port>,
    waypoints: Vec<Port>,
    shipments: Vec<Shipment>,
    audits: Vec<AuditRecord>,
    compliance_trend: Vec<MonthlyScore>,
    metrics: ComplianceMetrics,
}

impl ReferenceData {
    /// Load the compiled-in reference pack.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded pack itself is malformed.
    pub fn embedded() -> Result<Self, RegistryError> {
        Self::parse(EMBEDDED_PACK, EMBEDDED_ORIGIN)
    }

    /// Parse a pack from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RegistryError> {
        Self::parse(yaml, "<string>")
    }

    /// Read and parse a pack file.
    pub fn from_path(path: &Path) -> Result<Self, RegistryError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&yaml, &path.display().to_string())
    }

    /// Load from `path` if given, otherwise the embedded pack.
    pub fn load(path: Option<&Path>) -> Result<Self, RegistryError> {
        match path {
            Some(p) => Self::from_path(p),
            None => Self::embedded(),
        }
    }

    fn parse(yaml: &str, origin: &str) -> Result<Self, RegistryError> {
        let raw: RawPack = serde_yaml::from_str(yaml).map_err(|source| RegistryError::YamlParse {
            origin: origin.to_string(),
            source,
        })?;
        let data = Self::validate(raw).map_err(|source| RegistryError::Validation {
            origin: origin.to_string(),
            source,
        })?;

        tracing::info!(
            origin,
            jurisdictions = data.jurisdictions.len(),
            origins = data.origins.len(),
            destinations = data.destinations.len(),
            waypoints = data.waypoints.len(),
            shipments = data.shipments.len(),
            audits = data.audits.len(),
            trend_months = data.compliance_trend.len(),
            "reference pack loaded"
        );
        Ok(data)
    }

    fn validate(raw: RawPack) -> Result<Self, ValidationError> {
        let jurisdictions = JurisdictionRegistry::new(raw.jurisdictions)?;

        for (role, ports) in [
            ("origin", &raw.origins),
            ("destination", &raw.destinations),
            ("waypoint", &raw.waypoints),
        ] {
            for port in ports {
                if port.is_empty() {
                    return Err(ValidationError::EmptyField {
                        owner: format!("{role} catalogue"),
                        field: "name",
                    });
                }
                if role != "destination" && port.alliance_tag.is_some() {
                    return Err(ValidationError::UnexpectedAlliance {
                        role,
                        port: port.name.clone(),
                    });
                }
            }
        }

        let mut ids = HashSet::with_capacity(raw.shipments.len());
        for shipment in &raw.shipments {
            if !ids.insert(shipment.id.as_str()) {
                return Err(ValidationError::DuplicateShipment(shipment.id.to_string()));
            }
            shipment.validate()?;
        }

        let mut audit_ids = HashSet::with_capacity(raw.audits.len());
        for audit in &raw.audits {
            audit.validate()?;
            if !audit_ids.insert(audit.id.as_str()) {
                return Err(ValidationError::DuplicateAudit(audit.id.clone()));
            }
        }
        for point in &raw.compliance_trend {
            point.validate()?;
        }

        Ok(Self {
            jurisdictions,
            origins: raw.origins,
            destinations: raw.destinations,
            waypoints: raw.waypoints,
            shipments: raw.shipments,
            audits: raw.audits,
            compliance_trend: raw.compliance_trend,
            metrics: raw.metrics,
        })
    }

    /// The restricted-jurisdiction registry.
    pub fn jurisdictions(&self) -> &JurisdictionRegistry {
        &self.jurisdictions
    }

    /// Selectable origin ports.
    pub fn origins(&self) -> &[Port] {
        &self.origins
    }

    /// Selectable destination ports, with alliance tags.
    pub fn destinations(&self) -> &[Port] {
        &self.destinations
    }

    /// Selectable waypoints.
    pub fn waypoints(&self) -> &[Port] {
        &self.waypoints
    }

    /// The tracked fleet, in pack order.
    pub fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }

    /// The audit log, most recent first.
    pub fn audits(&self) -> &[AuditRecord] {
        &self.audits
    }

    /// Monthly compliance scores, oldest first.
    pub fn compliance_trend(&self) -> &[MonthlyScore] {
        &self.compliance_trend
    }

    pub fn metrics(&self) -> &ComplianceMetrics {
        &self.metrics
    }

    /// Destination catalogue entry by exact name.
    pub fn destination(&self, name: &str) -> Option<&Port> {
        self.destinations.iter().find(|p| p.name == name)
    }

    /// Shipment by exact id.
    pub fn find_shipment(&self, id: &str) -> Option<&Shipment> {
        self.shipments.iter().find(|s| s.id.as_str() == id)
    }

    /// Shipments not yet delivered.
    pub fn active_shipments(&self) -> impl Iterator<Item = &Shipment> + '_ {
        self.shipments.iter().filter(|s| s.is_active())
    }

    /// Shipments in one status.
    pub fn shipments_with_status(&self, status: ShipmentStatus) -> Vec<&Shipment> {
        ShipmentQuery::all().with_status(status).apply(&self.shipments)
    }

    /// Apply a fleet query.
    pub fn query(&self, query: &ShipmentQuery) -> Vec<&Shipment> {
        query.apply(&self.shipments)
    }

    /// Build a route request from operator selections.
    ///
    /// Destinations found in the catalogue carry their alliance tag. Names
    /// not in any catalogue pass through as plain ports; catalogue
    /// membership is never a reason to reject a route. An empty waypoint
    /// selection means no waypoint.
    pub fn request(
        &self,
        origin: &str,
        waypoint: Option<&str>,
        destination: &str,
        exclude_restricted: bool,
    ) -> RouteRequest {
        let destination = self
            .destination(destination)
            .cloned()
            .unwrap_or_else(|| Port::new(destination));

        let mut request =
            RouteRequest::new(Port::new(origin), destination).exclude_restricted(exclude_restricted);
        if let Some(w) = waypoint.filter(|w| !w.is_empty()) {
            request = request.via(Port::new(w));
        }
        request
    }
}
