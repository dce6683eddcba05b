//! Vendor/product guessing against the cve-search vocabularies.
//!
//! When a release carries no usable CPE, its free-text vendor and product
//! fields are ranked against the dictionaries the search service itself
//! exposes. Surviving vendor × product pairs become the wildcard-CPE
//! needles of the guessing search levels.

use tracing::debug;

use crate::config::HeuristicConfig;
use crate::datasource::CveSearchApi;
use crate::error::CorrelatorResult;
use crate::matcher::{Distance, ListMatcher, Match};

/// Ranks release metadata against the service's vendor/product
/// dictionaries.
///
/// The vendor list is fetched once per guesser instance and cached;
/// product lists are fetched per surviving vendor.
pub struct CveSearchGuesser<'a> {
    api: &'a dyn CveSearchApi,
    vendors: Option<Vec<String>>,
    vendor_threshold: u32,
    product_threshold: u32,
    cutoff: usize,
}

impl<'a> CveSearchGuesser<'a> {
    pub fn new(api: &'a dyn CveSearchApi, config: &HeuristicConfig) -> Self {
        Self {
            api,
            vendors: None,
            vendor_threshold: config.vendor_threshold,
            product_threshold: config.product_threshold,
            cutoff: config.cutoff,
        }
    }

    /// Vendors whose names plausibly appear in `haystack`.
    pub fn guess_vendors(&mut self, haystack: &str) -> CorrelatorResult<Vec<Match>> {
        if self.vendors.is_none() {
            let vendors = self.api.all_vendor_names()?;
            debug!(count = vendors.len(), "fetched vendor vocabulary");
            self.vendors = Some(vendors);
        }
        let vendors = self.vendors.as_deref().unwrap_or_default();

        Ok(best_matches(
            ListMatcher::new(vendors.iter().map(String::as_str)).ranked(haystack),
            self.vendor_threshold,
            self.cutoff,
        ))
    }

    /// Products of `vendor` whose names plausibly appear in `haystack`.
    pub fn guess_products(
        &mut self,
        vendor: &str,
        haystack: &str,
    ) -> CorrelatorResult<Vec<Match>> {
        let products = self.api.all_products_of_vendor(vendor)?;
        Ok(best_matches(
            ListMatcher::new(products).ranked(haystack),
            self.product_threshold,
            self.cutoff,
        ))
    }

    /// Composite `vendor:product` candidates for one release.
    ///
    /// Every surviving vendor is crossed with its surviving products, the
    /// pairs are combined via [`Match::concat`], and the merged list is
    /// re-ranked and capped at the cutoff.
    pub fn guess_vendor_and_products(
        &mut self,
        vendor_haystack: &str,
        product_haystack: &str,
    ) -> CorrelatorResult<Vec<Match>> {
        let mut combined = Vec::new();
        for vendor in self.guess_vendors(vendor_haystack)? {
            for product in self.guess_products(vendor.needle(), product_haystack)? {
                combined.push(vendor.concat(&product));
            }
        }
        combined.sort();
        combined.truncate(self.cutoff);
        Ok(combined)
    }
}

/// Matches within `threshold` of the best finite distance, capped at
/// `cutoff`.
///
/// No-match entries never survive: a guessed needle must have confirmed
/// evidence in the haystack, or it would drag in vulnerabilities of
/// entirely unrelated products.
fn best_matches(ranked: Vec<Match>, threshold: u32, cutoff: usize) -> Vec<Match> {
    let Some(best) = ranked.first().and_then(|m| m.distance().found()) else {
        return Vec::new();
    };
    let limit = Distance::Found(best.saturating_add(threshold));

    ranked
        .into_iter()
        .filter(|m| m.distance() <= limit)
        .take(cutoff)
        .collect()
}
