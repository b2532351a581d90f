//! # Restricted Jurisdictions
//!
//! Defines [`Jurisdiction`], its [`JurisdictionCategory`], and the
//! immutable [`JurisdictionRegistry`] that route evaluation and the
//! display layers read from.
//!
//! ## Invariants
//!
//! - Codes are unique across a registry. Construction fails otherwise.
//! - A registry is never mutated after construction. It is `Send + Sync`
//!   and can be shared by any number of readers without locking.
//! - Membership is an exact, case-sensitive code comparison.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::identity::JurisdictionCode;

/// Why a jurisdiction is on the restricted list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JurisdictionCategory {
    /// Strategic adversary; no contact of any kind.
    PrimaryAdversary,
    /// Proscribed destination under ITAR §126.1.
    ItarListed,
    /// Subject to an active sanctions program.
    Sanctioned,
}

impl JurisdictionCategory {
    /// Every category, in display order.
    pub fn all() -> &'static [JurisdictionCategory] {
        &[Self::PrimaryAdversary, Self::ItarListed, Self::Sanctioned]
    }

    /// The snake_case identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PrimaryAdversary => "primary_adversary",
            Self::ItarListed => "itar_listed",
            Self::Sanctioned => "sanctioned",
        }
    }

    /// Operator-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PrimaryAdversary => "Primary Adversary",
            Self::ItarListed => "ITAR 126.1",
            Self::Sanctioned => "Sanctions",
        }
    }
}

impl fmt::Display for JurisdictionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for JurisdictionCategory {
    type Err = String;

    /// Accepts either the snake_case identifier or the display label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s || c.label() == s)
            .ok_or_else(|| format!("unknown jurisdiction category: \"{s}\""))
    }
}

/// A restricted country or entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawJurisdiction")]
pub struct Jurisdiction {
    /// Unique short code.
    pub code: JurisdictionCode,
    /// Display name.
    pub name: String,
    /// Restriction category.
    pub category: JurisdictionCategory,
}

impl Jurisdiction {
    /// Build an entry from raw parts.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the code is invalid or the name is
    /// empty.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        category: JurisdictionCategory,
    ) -> Result<Self, ValidationError> {
        let code = JurisdictionCode::new(code)?;
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyField {
                owner: code.to_string(),
                field: "name",
            });
        }
        Ok(Self {
            code,
            name,
            category,
        })
    }
}

/// Wire shape; validated through [`Jurisdiction::new`].
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawJurisdiction {
    code: String,
    name: String,
    category: JurisdictionCategory,
}

impl TryFrom<RawJurisdiction> for Jurisdiction {
    type Error = ValidationError;

    fn try_from(raw: RawJurisdiction) -> Result<Self, Self::Error> {
        Self::new(raw.code, raw.name, raw.category)
    }
}

/// The read-only set of restricted jurisdictions.
///
/// Entries keep their load order, which is also the display order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Jurisdiction>", into = "Vec<Jurisdiction>")]
pub struct JurisdictionRegistry {
    entries: Vec<Jurisdiction>,
}

impl JurisdictionRegistry {
    /// Build a registry, rejecting duplicate codes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateJurisdiction`] naming the first
    /// repeated code.
    pub fn new(entries: Vec<Jurisdiction>) -> Result<Self, ValidationError> {
        let mut seen = std::collections::HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.code.as_str()) {
                return Err(ValidationError::DuplicateJurisdiction(
                    entry.code.to_string(),
                ));
            }
        }
        Ok(Self { entries })
    }

    /// True iff `code` exactly matches some entry's code.
    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|j| j.code.as_str() == code)
    }

    /// Look up an entry by exact code.
    pub fn get(&self, code: &str) -> Option<&Jurisdiction> {
        self.entries.iter().find(|j| j.code.as_str() == code)
    }

    /// Entries in a single category, in registry order.
    pub fn by_category(
        &self,
        category: JurisdictionCategory,
    ) -> impl Iterator<Item = &Jurisdiction> + '_ {
        self.entries.iter().filter(move |j| j.category == category)
    }

    /// All entries in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, Jurisdiction> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<Jurisdiction>> for JurisdictionRegistry {
    type Error = ValidationError;

    fn try_from(entries: Vec<Jurisdiction>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<JurisdictionRegistry> for Vec<Jurisdiction> {
    fn from(registry: JurisdictionRegistry) -> Self {
        registry.entries
    }
}

impl<'a> IntoIterator for &'a JurisdictionRegistry {
    type Item = &'a Jurisdiction;
    type IntoIter = std::slice::Iter<'a, Jurisdiction>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> JurisdictionRegistry {
        JurisdictionRegistry::new(vec![
            Jurisdiction::new("CN", "China", JurisdictionCategory::PrimaryAdversary).unwrap(),
            Jurisdiction::new("IR", "Iran", JurisdictionCategory::ItarListed).unwrap(),
            Jurisdiction::new("KP", "North Korea", JurisdictionCategory::ItarListed).unwrap(),
            Jurisdiction::new("VE", "Venezuela", JurisdictionCategory::Sanctioned).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn contains_is_exact_and_case_sensitive() {
        let reg = registry();
        assert!(reg.contains("CN"));
        assert!(!reg.contains("cn"));
        assert!(!reg.contains("CN "));
        assert!(!reg.contains("FR"));
        assert!(!reg.contains(""));
    }

    #[test]
    fn duplicate_codes_rejected() {
        let err = JurisdictionRegistry::new(vec![
            Jurisdiction::new("CN", "China", JurisdictionCategory::PrimaryAdversary).unwrap(),
            Jurisdiction::new("CN", "Cathay", JurisdictionCategory::Sanctioned).unwrap(),
        ])
        .unwrap_err();
        assert_eq!(err, ValidationError::DuplicateJurisdiction("CN".into()));
    }

    #[test]
    fn empty_registry_is_valid() {
        let reg = JurisdictionRegistry::new(vec![]).unwrap();
        assert!(reg.is_empty());
        assert!(!reg.contains("CN"));
    }

    #[test]
    fn by_category_keeps_registry_order() {
        let reg = registry();
        let itar: Vec<&str> = reg
            .by_category(JurisdictionCategory::ItarListed)
            .map(|j| j.code.as_str())
            .collect();
        assert_eq!(itar, vec!["IR", "KP"]);
    }

    #[test]
    fn category_parses_identifier_and_label() {
        assert_eq!(
            "itar_listed".parse::<JurisdictionCategory>().unwrap(),
            JurisdictionCategory::ItarListed
        );
        assert_eq!(
            "ITAR 126.1".parse::<JurisdictionCategory>().unwrap(),
            JurisdictionCategory::ItarListed
        );
        assert!("embargoed".parse::<JurisdictionCategory>().is_err());
    }

    #[test]
    fn deserialize_rejects_duplicates() {
        let json = r#"[
            {"code": "RU", "name": "Russia", "category": "primary_adversary"},
            {"code": "RU", "name": "Russia", "category": "sanctioned"}
        ]"#;
        assert!(serde_json::from_str::<JurisdictionRegistry>(json).is_err());
    }

    #[test]
    fn empty_name_rejected() {
        assert!(Jurisdiction::new("SY", "", JurisdictionCategory::ItarListed).is_err());
    }

    #[test]
    fn deserialize_rejects_empty_name() {
        let json = r#"{"code": "SY", "name": "", "category": "itar_listed"}"#;
        let err = serde_json::from_str::<Jurisdiction>(json).unwrap_err();
        assert!(err.to_string().contains("name"));

        let json = r#"{"code": "SY", "name": "Syria", "category": "itar_listed"}"#;
        let j: Jurisdiction = serde_json::from_str(json).unwrap();
        assert_eq!(j.name, "Syria");
    }
}
