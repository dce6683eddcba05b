//! Search level derivation.
//!
//! From a release's metadata, derives an ordered sequence of candidate
//! needle groups, most specific first:
//!
//! 1. the release's own CPE identifier, normalized
//! 2. guessed `vendor:product` wildcard CPEs including the version
//! 3. guessed `vendor:product` wildcard CPEs without the version
//!
//! Levels are produced lazily through [`LevelIter`]: the guessing levels
//! rank against the service's vocabularies, which is only worth paying for
//! once every earlier level has come up empty.

use crate::config::HeuristicConfig;
use crate::cpe::{cleanup_cpe, is_cpe};
use crate::datasource::CveSearchApi;
use crate::error::CorrelatorResult;
use crate::heuristics::guesser::CveSearchGuesser;
use crate::release::Release;

/// Prefix of guessed CPE needles. The part field stays a single-character
/// wildcard: release metadata does not say whether the product is an
/// application, an OS or hardware.
const CPE_NEEDLE_PREFIX: &str = "cpe:2.3:.:";

/// Wildcard suffix of guessed CPE needles.
const CPE_WILDCARD: &str = ".*";

/// One candidate needle plus the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeedleWithMeta {
    pub needle: String,
    /// Human-readable match strategy, kept for result provenance.
    pub description: String,
}

/// Derives the per-release search level sequence.
#[derive(Debug, Clone)]
pub struct SearchLevels {
    config: HeuristicConfig,
}

impl SearchLevels {
    pub fn new(config: HeuristicConfig) -> Self {
        Self { config }
    }

    /// Lazy iterator over the level groups for `release`.
    pub fn apply<'a>(
        &self,
        api: &'a dyn CveSearchApi,
        release: &'a Release,
    ) -> LevelIter<'a> {
        LevelIter {
            release,
            guesser: CveSearchGuesser::new(api, &self.config),
            next: 0,
        }
    }
}

/// Iterator over the level groups of one release.
///
/// Not restartable: each instance walks the levels once, caching the
/// vendor vocabulary across the two guessing levels.
pub struct LevelIter<'a> {
    release: &'a Release,
    guesser: CveSearchGuesser<'a>,
    next: u8,
}

impl LevelIter<'_> {
    fn cpe_level(&self) -> Vec<NeedleWithMeta> {
        match &self.release.cpe_id {
            Some(cpe) if is_cpe(cpe) => vec![NeedleWithMeta {
                needle: cleanup_cpe(cpe),
                description: "CPE".to_owned(),
            }],
            _ => Vec::new(),
        }
    }

    fn guessing_level(&mut self, use_version: bool) -> CorrelatorResult<Vec<NeedleWithMeta>> {
        let release = self.release;
        let version = if use_version {
            match release.version.as_deref() {
                Some(version) => version,
                None => return Ok(Vec::new()),
            }
        } else {
            ""
        };

        let product_haystack = release.name.as_str();
        let vendor_products = match release.vendor_haystack() {
            Some(vendor_haystack) => self
                .guesser
                .guess_vendor_and_products(&vendor_haystack, product_haystack)?,
            None => self
                .guesser
                .guess_vendor_and_products(product_haystack, product_haystack)?,
        };

        let version_rank = u8::from(!use_version);
        Ok(vendor_products
            .into_iter()
            .filter_map(|m| {
                let dist = m.distance().found()?;
                Some(NeedleWithMeta {
                    needle: format!(
                        "{CPE_NEEDLE_PREFIX}{}:{version}{CPE_WILDCARD}",
                        m.needle()
                    ),
                    description: format!("heuristic (dist. {version_rank}{dist})"),
                })
            })
            .collect())
    }
}

impl Iterator for LevelIter<'_> {
    type Item = CorrelatorResult<Vec<NeedleWithMeta>>;

    fn next(&mut self) -> Option<Self::Item> {
        let level = match self.next {
            0 => Ok(self.cpe_level()),
            1 => self.guessing_level(true),
            2 => self.guessing_level(false),
            _ => return None,
        };
        self.next += 1;
        Some(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::SearchRecord;
    use crate::release::Vendor;

    struct VocabApi {
        vendors: Vec<String>,
        products: Vec<String>,
    }

    impl CveSearchApi for VocabApi {
        fn cve_for(&self, _needle: &str) -> CorrelatorResult<Vec<SearchRecord>> {
            Ok(Vec::new())
        }

        fn all_vendor_names(&self) -> CorrelatorResult<Vec<String>> {
            Ok(self.vendors.clone())
        }

        fn all_products_of_vendor(&self, _vendor: &str) -> CorrelatorResult<Vec<String>> {
            Ok(self.products.clone())
        }
    }

    fn zyxel_api() -> VocabApi {
        VocabApi {
            vendors: vec!["zyxel".to_owned()],
            products: vec!["zywall10".to_owned()],
        }
    }

    fn zywall_release() -> Release {
        Release {
            version: Some("3.50".to_owned()),
            vendor: Some(Vendor {
                short_name: Some("Zyxel".to_owned()),
                full_name: None,
            }),
            cpe_id: Some("cpe:/h:zyxel:zywall10:3.50".to_owned()),
            ..Release::named("zywall10")
        }
    }

    fn collect_levels(api: &VocabApi, release: &Release) -> Vec<Vec<NeedleWithMeta>> {
        SearchLevels::new(HeuristicConfig::default())
            .apply(api, release)
            .map(|level| level.expect("vocabulary is available"))
            .collect()
    }

    #[test]
    fn test_cpe_level_normalizes_legacy_cpe() {
        let levels = collect_levels(&zyxel_api(), &zywall_release());

        assert_eq!(levels[0].len(), 1);
        assert_eq!(levels[0][0].needle, "cpe:2.3:h:zyxel:zywall10:3.50");
        assert_eq!(levels[0][0].description, "CPE");
    }

    #[test]
    fn test_cpe_level_empty_without_recognizable_cpe() {
        let release = Release {
            cpe_id: Some("not a cpe".to_owned()),
            ..zywall_release()
        };
        let levels = collect_levels(&zyxel_api(), &release);
        assert!(levels[0].is_empty());
    }

    #[test]
    fn test_versioned_guessing_level() {
        let levels = collect_levels(&zyxel_api(), &zywall_release());

        assert_eq!(levels[1].len(), 1);
        assert_eq!(levels[1][0].needle, "cpe:2.3:.:zyxel:zywall10:3.50.*");
        assert_eq!(levels[1][0].description, "heuristic (dist. 00)");
    }

    #[test]
    fn test_versionless_guessing_level() {
        let levels = collect_levels(&zyxel_api(), &zywall_release());

        assert_eq!(levels[2].len(), 1);
        assert_eq!(levels[2][0].needle, "cpe:2.3:.:zyxel:zywall10:.*");
        assert_eq!(levels[2][0].description, "heuristic (dist. 10)");
    }

    #[test]
    fn test_versioned_level_empty_without_version() {
        let release = Release {
            version: None,
            ..zywall_release()
        };
        let levels = collect_levels(&zyxel_api(), &release);
        assert!(levels[1].is_empty());
        assert!(!levels[2].is_empty());
    }

    #[test]
    fn test_guessing_without_vendor_uses_product_name_for_both() {
        let release = Release {
            vendor: None,
            ..Release::named("zyxel zywall10")
        };
        let levels = collect_levels(&zyxel_api(), &release);
        assert_eq!(levels[2].len(), 1);
        assert_eq!(levels[2][0].needle, "cpe:2.3:.:zyxel:zywall10:.*");
    }

    #[test]
    fn test_sequence_is_exactly_three_levels() {
        let api = zyxel_api();
        let release = zywall_release();
        let mut iter = SearchLevels::new(HeuristicConfig::default()).apply(&api, &release);

        assert!(iter.next().is_some());
        assert!(iter.next().is_some());
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
    }
}
