//! Release metadata consumed by the correlation heuristic.
//!
//! A read-only view of what the surrounding service knows about one
//! software release: product name, version, vendor, and an optional CPE
//! identifier assigned by the data store.

use serde::{Deserialize, Serialize};

/// Identifying metadata of one software release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Product name, e.g. `"zywall10"`.
    pub name: String,
    /// Version string, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Owning vendor, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<Vendor>,
    /// CPE identifier, if the data store carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpe_id: Option<String>,
}

/// Vendor record attached to a release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl Release {
    /// A release with only the product name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Free-text vendor haystack: `"<short> <full>"` with unset halves
    /// empty.
    ///
    /// `None` when no vendor name is known at all, which sends the guesser
    /// down the product-only path.
    pub fn vendor_haystack(&self) -> Option<String> {
        let vendor = self.vendor.as_ref()?;
        if vendor.short_name.is_none() && vendor.full_name.is_none() {
            return None;
        }
        let short = vendor.short_name.as_deref().unwrap_or("");
        let full = vendor.full_name.as_deref().unwrap_or("");
        Some(format!("{short} {full}"))
    }
}
