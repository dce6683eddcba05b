//! Common Platform Enumeration identifier handling.
//!
//! Recognizes both the modern `cpe:2.3:` syntax and the legacy `cpe:/`
//! URI syntax, and normalizes either to canonical lowercase 2.3 form.
//! Recognition is deliberately permissive: wildcard/pattern forms such as
//! `cpe:2.3:.*prod.*` are accepted, since they are exactly what the
//! guessing search levels feed to the search service.

/// Modern CPE 2.3 prefix.
pub const CPE_PREFIX: &str = "cpe:2.3:";

/// Legacy CPE 2.2 URI prefix.
pub const LEGACY_CPE_PREFIX: &str = "cpe:/";

/// Below this length a string cannot carry a vendor/product body, whatever
/// its prefix.
const MIN_CPE_LEN: usize = 11;

/// Whether `s` plausibly is a CPE identifier, in either syntax.
pub fn is_cpe(s: &str) -> bool {
    let lower = s.to_lowercase();
    (lower.starts_with(CPE_PREFIX) || lower.starts_with(LEGACY_CPE_PREFIX))
        && lower.len() >= MIN_CPE_LEN
}

/// Normalize a CPE identifier to canonical lowercase 2.3 form.
///
/// Legacy `cpe:/<part>:<vendor>:<product>:<version>[:...]` is rewritten to
/// the `cpe:2.3:` form: empty fields become `-`, tilde-separated edition
/// placeholders collapse, and a contentless tail is stripped. Never fails:
/// input that defeats the rewrite comes back as a lower-cased copy.
pub fn cleanup_cpe(cpe: &str) -> String {
    let cpe = cpe.to_lowercase();
    let Some(body) = cpe.strip_prefix(LEGACY_CPE_PREFIX) else {
        return cpe;
    };

    let rebuilt = format!("{CPE_PREFIX}{body}")
        .replace("::", ":-:")
        .replace("~-", "~")
        .replace('~', ":-:")
        .replace("::", ":");
    rebuilt.trim_end_matches([':', '-']).to_owned()
}
