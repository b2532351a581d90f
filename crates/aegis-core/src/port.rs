//! # Ports
//!
//! Origin, waypoint, and destination locations. Only destinations carry an
//! alliance tag (treaty or bloc, e.g. `"NATO"`); origins and waypoints
//! always have `alliance_tag == None`.

use serde::{Deserialize, Serialize};

/// A named location on a route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "PortRepr")]
pub struct Port {
    /// Display name, e.g. `"Yokosuka, Japan"`.
    pub name: String,
    /// Alliance relationship of a destination port.
    #[serde(rename = "alliance", default, skip_serializing_if = "Option::is_none")]
    pub alliance_tag: Option<String>,
}

/// Packs list origins and waypoints as bare strings and destinations as
/// `{name, alliance}` maps. Both forms deserialize into [`Port`].
#[derive(Deserialize)]
#[serde(untagged)]
enum PortRepr {
    Bare(String),
    Tagged {
        name: String,
        #[serde(default)]
        alliance: Option<String>,
    },
}

impl From<PortRepr> for Port {
    fn from(repr: PortRepr) -> Self {
        match repr {
            PortRepr::Bare(name) => Self::new(name),
            PortRepr::Tagged { name, alliance } => Self {
                name,
                alliance_tag: alliance,
            },
        }
    }
}

impl Port {
    /// An untagged port (origin or waypoint).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alliance_tag: None,
        }
    }

    /// A destination port with its alliance relationship.
    pub fn allied(name: impl Into<String>, alliance: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alliance_tag: Some(alliance.into()),
        }
    }

    /// True when the name is the empty string.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// The part of the name before the first comma (`"Seattle, WA"` → `"Seattle"`).
    pub fn city(&self) -> &str {
        city_of(&self.name)
    }
}

/// The part of a location string before the first comma.
pub fn city_of(location: &str) -> &str {
    location.split(',').next().unwrap_or(location)
}

impl std::fmt::Display for Port {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.name)
    }
}
