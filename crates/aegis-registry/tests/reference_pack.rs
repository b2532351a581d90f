//! Integration tests for the compiled-in reference pack and for packs
//! loaded from disk.

use std::io::Write;

use aegis_compliance::{evaluate_route, AuditSummary, FleetSummary, ScriptedRandom};
use aegis_core::{
    AuditStatus, CustodyStatus, JurisdictionCategory, ShipmentStatus, ValidationError,
};
use aegis_registry::{ReferenceData, RegistryError, ShipmentQuery};

fn reference() -> ReferenceData {
    ReferenceData::embedded().expect("embedded pack must load")
}

#[test]
fn embedded_pack_shape() {
    let data = reference();
    assert_eq!(data.jurisdictions().len(), 8);
    assert_eq!(data.origins().len(), 6);
    assert_eq!(data.destinations().len(), 6);
    assert_eq!(data.waypoints().len(), 4);
    assert_eq!(data.shipments().len(), 6);
}

#[test]
fn embedded_registry_contents() {
    let data = reference();
    let reg = data.jurisdictions();
    let codes: Vec<&str> = reg.iter().map(|j| j.code.as_str()).collect();
    assert_eq!(codes, vec!["CN", "RU", "IR", "KP", "SY", "CU", "BY", "VE"]);
    assert!(reg.contains("CN"));
    assert!(!reg.contains("FR"));
    assert_eq!(reg.by_category(JurisdictionCategory::PrimaryAdversary).count(), 2);
    assert_eq!(reg.by_category(JurisdictionCategory::ItarListed).count(), 4);
    assert_eq!(reg.by_category(JurisdictionCategory::Sanctioned).count(), 2);
    assert_eq!(reg.get("KP").unwrap().name, "North Korea");
}

#[test]
fn catalogue_tags_only_on_destinations() {
    let data = reference();
    assert!(data.origins().iter().all(|p| p.alliance_tag.is_none()));
    assert!(data.waypoints().iter().all(|p| p.alliance_tag.is_none()));
    assert!(data.destinations().iter().all(|p| p.alliance_tag.is_some()));
    assert_eq!(
        data.destination("Darwin, Australia").unwrap().alliance_tag.as_deref(),
        Some("AUKUS")
    );
    assert!(data.destination("Shanghai, China").is_none());
}

#[test]
fn fleet_is_all_clean() {
    let data = reference();
    let summary = FleetSummary::from_shipments(data.shipments());
    assert_eq!(summary.label(), "6/6 CLEAN");
    assert_eq!(summary.compliance_score, 100);
    assert_eq!(summary.active, 5);
    assert_eq!(summary.in_transit, 4);
    assert_eq!(summary.loading, 1);
    assert_eq!(summary.delivered, 1);
    assert_eq!(data.active_shipments().count(), 5);
}

#[test]
fn embedded_compliance_records() {
    let data = reference();
    let ids: Vec<&str> = data.audits().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["AUD-2025-0123", "AUD-2025-0115", "AUD-2025-0108"]);
    assert!(data.audits().iter().all(|a| a.status == AuditStatus::Passed && a.findings == 0));
    assert_eq!(data.audits()[1].kind, "EAR Classification");
    assert_eq!(data.audits()[2].date.to_string(), "2025-01-08");

    let scores: Vec<u32> = data.compliance_trend().iter().map(|p| p.score).collect();
    assert_eq!(scores, vec![100, 100, 98, 100, 100, 100]);
    assert_eq!(data.compliance_trend()[0].month, "Aug");
    assert_eq!(data.compliance_trend()[5].month, "Jan");

    let m = data.metrics();
    assert_eq!((m.active_licenses, m.days_since_incident, m.audits_ytd), (24, 847, 12));

    let totals = AuditSummary::from_audits(data.audits());
    assert_eq!(totals.pass_rate, 100);
    assert_eq!(totals.findings, 0);
}

#[test]
fn empty_jurisdiction_name_fails_to_load() {
    let yaml = aegis_registry::pack::EMBEDDED_PACK.replacen("name: Syria", "name: \"\"", 1);
    assert!(matches!(
        ReferenceData::from_yaml_str(&yaml),
        Err(RegistryError::YamlParse { .. })
    ));
}

#[test]
fn status_and_search_filters_compose() {
    let data = reference();

    let in_transit = data.shipments_with_status(ShipmentStatus::InTransit);
    assert_eq!(in_transit.len(), 4);

    let japan = data.query(&ShipmentQuery::all().with_search("JAPAN"));
    let ids: Vec<&str> = japan.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["US-MIL-8842X", "US-MIL-7721A", "US-MIL-9034B"]);

    let query = ShipmentQuery::all()
        .with_status(ShipmentStatus::Delivered)
        .with_search("radar");
    let hits = data.query(&query);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id.as_str(), "US-MIL-3398D");

    let none = ShipmentQuery::all()
        .with_status(ShipmentStatus::Loading)
        .with_search("radar");
    assert!(data.query(&none).is_empty());

    assert_eq!(data.query(&ShipmentQuery::all().with_search("")).len(), 6);
}

#[test]
fn custody_chains() {
    let data = reference();
    let s = data.find_shipment("US-MIL-9034B").unwrap();
    assert_eq!(s.custody_chain.len(), 5);
    assert_eq!(s.current_step().unwrap().step, "Arrival (Allied Port)");
    assert_eq!(s.completed_steps(), 4);

    let delivered = data.find_shipment("US-MIL-3398D").unwrap();
    assert!(delivered.current_step().is_none());
    assert!(delivered
        .custody_chain
        .iter()
        .all(|c| c.status == CustodyStatus::Complete));
    assert!(delivered.eta_offset_days < 0);

    assert!(data.find_shipment("us-mil-9034b").is_none());
}

#[test]
fn catalogue_request_evaluates() {
    let data = reference();
    let req = data.request("Los Angeles, CA", Some("Pearl Harbor, HI"), "Yokosuka, Japan", true);
    let mut rng = ScriptedRandom::new([5000, 300]);
    let v = evaluate_route(&req, data.jurisdictions(), &mut rng).unwrap();
    assert!(v.clean);
    assert_eq!(v.waypoint.as_deref(), Some("Pearl Harbor, HI"));
}

#[test]
fn pack_loads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "jurisdictions:\n  - {{ code: IR, name: Iran, category: itar_listed }}\nwaypoints: [Guam]\n"
    )
    .unwrap();

    let data = ReferenceData::load(Some(file.path())).unwrap();
    assert_eq!(data.jurisdictions().len(), 1);
    assert_eq!(data.waypoints()[0].name, "Guam");
}

#[test]
fn load_without_path_uses_embedded() {
    let data = ReferenceData::load(None).unwrap();
    assert_eq!(data.shipments().len(), 6);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ReferenceData::from_path(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, RegistryError::Io { .. }));
}

#[test]
fn duplicate_shipment_rejected() {
    let yaml = reference_yaml_with_duplicate_shipment();
    let err = ReferenceData::from_yaml_str(&yaml).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Validation {
            source: ValidationError::DuplicateShipment(_),
            ..
        }
    ));
}

#[test]
fn out_of_range_progress_rejected() {
    let yaml = aegis_registry::pack::EMBEDDED_PACK.replacen("progress: 65", "progress: 165", 1);
    let err = ReferenceData::from_yaml_str(&yaml).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Validation {
            source: ValidationError::PercentageOutOfRange { field: "progress", value: 165, .. },
            ..
        }
    ));
}

fn reference_yaml_with_duplicate_shipment() -> String {
    aegis_registry::pack::EMBEDDED_PACK.replacen("id: US-MIL-7721A", "id: US-MIL-8842X", 1)
}
