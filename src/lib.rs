//! `cve-correlator` — vulnerability-correlation matcher.
//!
//! Given a software release's identifying metadata (vendor, product name,
//! version, optional CPE identifier), finds candidate vulnerability-database
//! entries whose free-text affected-product data approximately (not
//! exactly) describes that release, without dragging in vulnerabilities of
//! unrelated products.
//!
//! # Architecture
//!
//! ```text
//! Heuristic ──→ SearchLevels ──→ needle groups (most specific first)
//!     │              │
//!     │              └─→ CveSearchGuesser ──→ ListMatcher / Match / distance
//!     │
//!     └─→ CveSearchApi (one query per needle) ──→ tagged CorrelationResults
//! ```
//!
//! The distance function, match ranking and CPE handling are pure,
//! synchronous and lock-free; the only external collaborator is a
//! cve-search service behind the [`CveSearchApi`] trait (live HTTP client
//! under the `http` feature). [`Heuristic::run`] is the sole entry point a
//! surrounding service needs.

pub mod config;
pub mod cpe;
pub mod datasource;
pub mod error;
pub mod heuristics;
pub mod matcher;
pub mod release;

pub use config::HeuristicConfig;
pub use datasource::{CveSearchApi, SearchRecord};
pub use error::{CorrelatorError, CorrelatorResult};
pub use heuristics::{CorrelationResult, Heuristic, NeedleWithMeta, SearchLevels};
pub use matcher::{Distance, ListMatcher, Match, distance};
pub use release::{Release, Vendor};
