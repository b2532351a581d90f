//! # aegis-registry — Reference Data Packs
//!
//! Everything the route planner and fleet views read but never write:
//!
//! - the restricted-jurisdiction registry,
//! - origin, destination (with alliance tags), and waypoint catalogues,
//! - the tracked fleet with custody chains.
//!
//! ## Data Format
//!
//! Packs are YAML documents with top-level keys `jurisdictions`, `origins`,
//! `destinations`, `waypoints`, and `shipments`. The reference pack is
//! compiled into the binary; operators may load their own from disk. Every
//! pack is validated once at load time and is immutable afterwards.

pub mod error;
pub mod pack;
pub mod query;

pub use error::RegistryError;
pub use pack::ReferenceData;
pub use query::ShipmentQuery;
