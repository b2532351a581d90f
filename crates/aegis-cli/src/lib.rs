//! # aegis-cli — Command-Line Interface
//!
//! Provides the `aegis` binary. Each subcommand is a library function so
//! it can be driven from tests with an in-memory writer.
//!
//! ## Subcommands
//!
//! - `aegis route`: evaluate a route and print its verdict.
//! - `aegis jurisdictions`: list the restricted-jurisdiction registry.
//! - `aegis shipments`: filter the fleet by status and search text.
//! - `aegis custody`: show one shipment's chain of custody.
//! - `aegis summary`: fleet compliance figures, licences, trend, and audits.
//! - `aegis ports`: list the selectable origin, destination, and waypoint ports.
//!
//! ```bash
//! aegis route --origin "Norfolk, VA" --destination "Rota, Spain" --seed 7
//! aegis shipments --status in_transit --search japan
//! aegis custody US-MIL-8842X --json
//! ```
//!
//! ## Exit Codes
//!
//! Handlers return `0` on success, `1` when a requested record does not
//! exist, and `2` when the request cannot be evaluated.

pub mod jurisdictions;
pub mod output;
pub mod ports;
pub mod route;
pub mod shipments;
pub mod summary;

/// Success.
pub const EXIT_OK: u8 = 0;
/// The requested record does not exist.
pub const EXIT_NOT_FOUND: u8 = 1;
/// The request cannot be evaluated.
pub const EXIT_INVALID: u8 = 2;
