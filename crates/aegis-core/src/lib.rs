//! # aegis-core — Foundational Types for the AEGIS Stack
//!
//! Defines the domain primitives shared by every other crate in the
//! workspace. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `JurisdictionCode` and
//!    `ShipmentId` are validated at construction. No bare strings where an
//!    identifier is expected.
//!
//! 2. **Immutable registry.** [`JurisdictionRegistry`] is built once from a
//!    list of entries, rejects duplicate codes, and exposes no mutation.
//!
//! 3. **Single `JurisdictionCategory` enum.** Exhaustive `match` everywhere;
//!    adding a category forces every display path to handle it.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `aegis-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod audit;
pub mod error;
pub mod identity;
pub mod jurisdiction;
pub mod port;
pub mod shipment;

// Re-export primary types for ergonomic imports.
pub use audit::{AuditRecord, AuditStatus, ComplianceMetrics, MonthlyScore};
pub use error::ValidationError;
pub use identity::{JurisdictionCode, ShipmentId};
pub use jurisdiction::{Jurisdiction, JurisdictionCategory, JurisdictionRegistry};
pub use port::Port;
pub use shipment::{CustodyStatus, CustodyStep, GeoPosition, Shipment, ShipmentStatus};
