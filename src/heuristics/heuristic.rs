//! The search orchestrator.
//!
//! Walks the level sequence in order, queries the search service once per
//! needle, and stops at the first level that produces any results. A
//! failing query never aborts the run: it is logged and counted as zero
//! results for that needle, so one flaky needle cannot mask the rest of
//! its level.

use tracing::{debug, warn};

use crate::config::HeuristicConfig;
use crate::datasource::{CveSearchApi, SearchRecord};
use crate::heuristics::search_levels::{NeedleWithMeta, SearchLevels};
use crate::release::Release;

/// One search hit annotated with the needle and strategy that produced it.
///
/// The raw record is wrapped rather than stamped: [`SearchRecord`] values
/// coming out of the data source are never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationResult {
    pub record: SearchRecord,
    /// The needle whose query returned this record.
    pub used_needle: String,
    /// Description of the search level the needle came from.
    pub matched_by: String,
}

/// Level-by-level correlation search for one release.
pub struct Heuristic<'a> {
    api: &'a dyn CveSearchApi,
    search_levels: SearchLevels,
    max_depth: usize,
}

impl<'a> Heuristic<'a> {
    /// Orchestrator over `api` with the given tuning knobs.
    ///
    /// `config.max_depth` bounds how many levels may be evaluated; 0 means
    /// no bound.
    pub fn new(api: &'a dyn CveSearchApi, config: HeuristicConfig) -> Self {
        let max_depth = config.max_depth;
        Self {
            api,
            search_levels: SearchLevels::new(config),
            max_depth,
        }
    }

    /// Candidate vulnerability entries for `release`.
    ///
    /// Returns the tagged results of the first (most specific) level that
    /// produced any, or an empty list when every level within the depth
    /// bound came up dry. Query failures are swallowed per needle; a
    /// caller diagnosing an empty result needs the logs, not the return
    /// value.
    pub fn run(&self, release: &Release) -> Vec<CorrelationResult> {
        let mut levels = self.search_levels.apply(self.api, release);

        // The bound is checked before pulling the next level: deriving a
        // level past the bound would still rank against the vocabularies.
        let mut depth = 0;
        while self.max_depth == 0 || depth < self.max_depth {
            let Some(level) = levels.next() else {
                break;
            };

            let needles = match level {
                Ok(needles) => needles,
                Err(e) => {
                    warn!(depth, error = %e, "level generation failed, skipping level");
                    depth += 1;
                    continue;
                }
            };

            let results = self.query_level(&needles);
            if !results.is_empty() {
                debug!(depth, hits = results.len(), "level produced results");
                return results;
            }
            depth += 1;
        }

        Vec::new()
    }

    fn query_level(&self, needles: &[NeedleWithMeta]) -> Vec<CorrelationResult> {
        let mut results = Vec::new();

        for NeedleWithMeta { needle, description } in needles {
            let records = match self.api.cve_for(needle) {
                Ok(records) => records,
                Err(e) => {
                    warn!(needle = needle.as_str(), error = %e, "query failed, treating as empty");
                    continue;
                }
            };

            results.extend(records.into_iter().map(|record| CorrelationResult {
                record,
                used_needle: needle.clone(),
                matched_by: description.clone(),
            }));
        }

        results
    }
}
