//! # Shipment Queries
//!
//! Filters over the fleet. A status filter is an exact match; a search is a
//! case-insensitive substring over id, cargo, and destination. Both compose
//! with AND and results keep fleet order.

use aegis_core::{Shipment, ShipmentStatus};

/// Filter applied to the fleet list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShipmentQuery {
    /// Keep only shipments in this status.
    pub status: Option<ShipmentStatus>,
    /// Keep only shipments whose id, cargo, or destination contains this
    /// text, ignoring case. Empty text matches everything.
    pub search: Option<String>,
}

impl ShipmentQuery {
    /// A query matching every shipment.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to one status.
    pub fn with_status(mut self, status: ShipmentStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict to a search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Apply the query.
    pub fn apply<'a>(&self, shipments: &'a [Shipment]) -> Vec<&'a Shipment> {
        let needle = self
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        shipments
            .iter()
            .filter(|s| self.status.map_or(true, |st| s.status == st))
            .filter(|s| needle.as_deref().map_or(true, |n| s.matches_search(n)))
            .collect()
    }
}
