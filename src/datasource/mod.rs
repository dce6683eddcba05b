//! External cve-search service boundary.
//!
//! [`CveSearchApi`] is the narrow trait the heuristic talks to; the live
//! HTTP implementation lives behind the `http` feature, and tests
//! substitute a scripted fake. The vocabulary endpoints sit on the same
//! trait because the service that answers CVE queries also serves the
//! vendor/product dictionaries the guesser ranks against.

#[cfg(feature = "http")]
pub mod client;
pub mod record;

#[cfg(feature = "http")]
pub use client::CveSearchClient;
pub use record::{ApiDate, SearchRecord, VulnerableConfiguration};

use crate::error::CorrelatorResult;

/// Query surface of a cve-search service.
pub trait CveSearchApi {
    /// CVE entries whose affected-product data matches `needle`.
    ///
    /// `needle` is a CPE identifier, possibly in wildcard form.
    fn cve_for(&self, needle: &str) -> CorrelatorResult<Vec<SearchRecord>>;

    /// All vendor names the service knows.
    fn all_vendor_names(&self) -> CorrelatorResult<Vec<String>>;

    /// All product names of one vendor.
    fn all_products_of_vendor(&self, vendor: &str) -> CorrelatorResult<Vec<String>>;
}
