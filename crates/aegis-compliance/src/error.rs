//! Route evaluation errors.

use thiserror::Error;

/// The one way route evaluation can fail.
///
/// Callers recover locally: show the neutral [`CONFIGURE_ROUTE_PROMPT`]
/// instead of a verdict. No variant is retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Origin or destination is missing.
    #[error("invalid route request: {field} is required")]
    InvalidRequest {
        /// `"origin"` or `"destination"`.
        field: &'static str,
    },
}

/// Prompt shown in place of a verdict when a request is not evaluable.
pub const CONFIGURE_ROUTE_PROMPT: &str =
    "Configure route parameters: select origin, destination, and calculate";
