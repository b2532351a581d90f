//! # aegis-compliance — Route Compliance Engine
//!
//! Decides whether a proposed shipment route is clean and computes its
//! sovereignty verdict.
//!
//! - **Engine** (`engine.rs`): [`evaluate_route`], [`is_restricted`], and
//!   the [`ComplianceEngine`] wrapper bound to one registry.
//!
//! - **Random sources** (`random.rs`): the [`RandomSource`] seam. Every
//!   draw the engine makes goes through a caller-supplied source.
//!
//! - **Presentation** (`presentation.rs`): route summary line, verdict
//!   badge, vessel recommendation, restricted-jurisdiction markers.
//!
//! - **Summary** (`summary.rs`): fleet and audit-log compliance figures.
//!
//! ## Concurrency
//!
//! Evaluation is synchronous and stateless. The registry is shared
//! read-only; random sources are borrowed mutably per call, so concurrent
//! callers each bring their own (or use [`ThreadRandom`]).

pub mod engine;
pub mod error;
pub mod presentation;
pub mod random;
pub mod summary;

pub use engine::{
    evaluate_route, is_restricted, transit_days, ComplianceCheck, ComplianceEngine, RouteRequest,
    RouteVerdict,
};
pub use error::{RouteError, CONFIGURE_ROUTE_PROMPT};
pub use presentation::{route_summary, VerdictBadge};
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use summary::{trend_low, AuditSummary, FleetSummary};
