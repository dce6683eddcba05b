//! Blocking HTTP client for a live cve-search host.
//!
//! Endpoints, per the cve-search REST API:
//! - `GET /api/cvefor/<cpe>` — CVEs matching a (wildcard) CPE
//! - `GET /api/browse` — all vendor names
//! - `GET /api/browse/<vendor>` — product names of one vendor

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info};

use crate::datasource::{CveSearchApi, SearchRecord};
use crate::error::CorrelatorResult;

/// Stock cve-search deployment host.
pub const DEFAULT_HOST: &str = "https://localhost:5000";

/// Per-request timeout. Wildcard CPE queries can fan out server-side.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// `GET /api/browse` response body.
#[derive(Deserialize)]
struct BrowseVendors {
    #[serde(default)]
    vendor: Vec<String>,
}

/// `GET /api/browse/<vendor>` response body.
#[derive(Deserialize)]
struct BrowseProducts {
    #[serde(default)]
    product: Vec<String>,
}

/// Blocking client for one cve-search host.
pub struct CveSearchClient {
    host: String,
    http: reqwest::blocking::Client,
}

impl CveSearchClient {
    /// Client for `host`, e.g. `https://localhost:5000`.
    pub fn new(host: impl Into<String>) -> CorrelatorResult<Self> {
        let host = host.into();
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            host: host.trim_end_matches('/').to_owned(),
            http,
        })
    }

    /// Client for the host named by `CVESEARCH_HOST`, or [`DEFAULT_HOST`].
    pub fn from_env() -> CorrelatorResult<Self> {
        let host =
            std::env::var("CVESEARCH_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_owned());
        info!(host = host.as_str(), "using cve-search host");
        Self::new(host)
    }

    fn get_text(&self, path: &str) -> CorrelatorResult<String> {
        let url = format!("{}{path}", self.host);
        debug!(url = url.as_str(), "cve-search request");
        let text = self.http.get(&url).send()?.error_for_status()?.text()?;
        Ok(text)
    }
}

impl CveSearchApi for CveSearchClient {
    fn cve_for(&self, needle: &str) -> CorrelatorResult<Vec<SearchRecord>> {
        let body = self.get_text(&format!("/api/cvefor/{needle}"))?;
        // The service answers an empty body (not `[]`) for unknown needles.
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&body)?)
    }

    fn all_vendor_names(&self) -> CorrelatorResult<Vec<String>> {
        let body = self.get_text("/api/browse")?;
        let parsed: BrowseVendors = serde_json::from_str(&body)?;
        Ok(parsed.vendor)
    }

    fn all_products_of_vendor(&self, vendor: &str) -> CorrelatorResult<Vec<String>> {
        let body = self.get_text(&format!("/api/browse/{vendor}"))?;
        let parsed: BrowseProducts = serde_json::from_str(&body)?;
        Ok(parsed.product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client =
            CveSearchClient::new("https://cve.example.org/").expect("client should build");
        assert_eq!(client.host, "https://cve.example.org");
    }

    #[test]
    fn test_browse_bodies_parse() {
        let vendors: BrowseVendors =
            serde_json::from_str(r#"{"vendor": ["zyxel", "cisco"]}"#)
                .expect("should parse vendor listing");
        assert_eq!(vendors.vendor, ["zyxel", "cisco"]);

        let products: BrowseProducts =
            serde_json::from_str(r#"{"vendor": "zyxel", "product": ["zywall10"]}"#)
                .expect("should parse product listing");
        assert_eq!(products.product, ["zywall10"]);
    }
}
