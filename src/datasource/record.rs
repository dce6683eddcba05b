//! Wire model for cve-search results.
//!
//! The cve-search service changed its JSON shape between API versions, and
//! deployed instances of both are still common. The types here accept both
//! encodings:
//! - `vulnerable_configuration` entries are bare CPE strings (API ≤ 2.1) or
//!   `{id, title}` objects (API ≥ 2.2);
//! - date fields are formatted strings (API ≤ 2.1) or `{"$date": <millis>}`
//!   objects (API ≥ 2.2), normalized here to a formatted UTC string.
//!
//! Unknown fields are ignored: the service attaches a large, shifting set
//! of per-distro cross-reference maps that the correlator does not consume.

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One entry of a CVE's vulnerable-configuration list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VulnerableConfiguration {
    /// Newer API shape: CPE plus a human-readable release title.
    Titled { id: String, title: String },
    /// Older API shape: the bare CPE.
    Plain(String),
}

impl VulnerableConfiguration {
    /// The CPE identifier of this configuration.
    pub fn cpe(&self) -> &str {
        match self {
            Self::Titled { id, .. } => id,
            Self::Plain(id) => id,
        }
    }

    /// Human-readable title; the older shape only carries the CPE.
    pub fn title(&self) -> &str {
        match self {
            Self::Titled { title, .. } => title,
            Self::Plain(id) => id,
        }
    }
}

/// A date field, normalized to a formatted string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDate")]
pub struct ApiDate(String);

impl ApiDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Formatted(String),
    Epoch {
        #[serde(rename = "$date")]
        millis: i64,
    },
}

impl From<RawDate> for ApiDate {
    fn from(raw: RawDate) -> Self {
        match raw {
            RawDate::Formatted(s) => Self(s),
            RawDate::Epoch { millis } => Self(
                Utc.timestamp_millis_opt(millis)
                    .single()
                    .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S%.3f").to_string())
                    .unwrap_or_default(),
            ),
        }
    }
}

/// One raw cve-search hit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// CVE identifier, e.g. `"CVE-2002-0438"`.
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Common Vulnerability Scoring System score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvss: Option<f64>,
    /// Common Weakness Enumeration identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwe: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<String>,
    #[serde(rename = "Published", default, skip_serializing_if = "Option::is_none")]
    pub published: Option<ApiDate>,
    #[serde(rename = "Modified", default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<ApiDate>,
    #[serde(rename = "cvss-time", default, skip_serializing_if = "Option::is_none")]
    pub cvss_time: Option<ApiDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vulnerable_configuration: Vec<VulnerableConfiguration>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub impact: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub access: BTreeMap<String, String>,
}

impl SearchRecord {
    /// Vulnerable configurations flattened to a CPE → title map.
    pub fn vulnerable_configuration_map(&self) -> BTreeMap<String, String> {
        self.vulnerable_configuration
            .iter()
            .map(|vc| (vc.cpe().to_owned(), vc.title().to_owned()))
            .collect()
    }
}
