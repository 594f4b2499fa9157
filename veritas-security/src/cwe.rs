//! CWE registry and finding-category lookup.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CweEntry {
    pub cwe_id: &'static str,
    pub name: &'static str,
    pub url: &'static str,
}

static CWE_REGISTRY: Lazy<HashMap<&'static str, CweEntry>> = Lazy::new(|| {
    let entries = [
        ("CWE-787", "Out-of-bounds Write", "https://cwe.mitre.org/data/definitions/787.html"),
        ("CWE-79", "Cross-site Scripting (XSS)", "https://cwe.mitre.org/data/definitions/79.html"),
        ("CWE-352", "Cross-Site Request Forgery (CSRF)", "https://cwe.mitre.org/data/definitions/352.html"),
        ("CWE-287", "Improper Authentication", "https://cwe.mitre.org/data/definitions/287.html"),
        ("CWE-862", "Missing Authorization", "https://cwe.mitre.org/data/definitions/862.html"),
        ("CWE-327", "Use of a Broken or Risky Cryptographic Algorithm", "https://cwe.mitre.org/data/definitions/327.html"),
        ("CWE-319", "Cleartext Transmission of Sensitive Information", "https://cwe.mitre.org/data/definitions/319.html"),
        ("CWE-20", "Improper Input Validation", "https://cwe.mitre.org/data/definitions/20.html"),
        ("CWE-601", "URL Redirection to Untrusted Site", "https://cwe.mitre.org/data/definitions/601.html"),
        ("CWE-525", "Use of Web Browser Cache Containing Sensitive Information", "https://cwe.mitre.org/data/definitions/525.html"),
        ("CWE-798", "Use of Hard-coded Credentials", "https://cwe.mitre.org/data/definitions/798.html"),
    ];
    entries
        .into_iter()
        .map(|(cwe_id, name, url)| (cwe_id, CweEntry { cwe_id, name, url }))
        .collect()
});

/// Substring match against a static category→CWE table, falling back to
/// a couple of catch-all categories, matching
/// `map_finding_to_cwe`'s precedence in the original source.
pub fn map_finding_to_cwe(finding_category: &str) -> Option<&'static CweEntry> {
    let category_lower = finding_category.to_ascii_lowercase();

    const CATEGORY_TO_CWE: &[(&str, &str)] = &[
        ("injection", "CWE-787"),
        ("xss", "CWE-79"),
        ("cross-site scripting", "CWE-79"),
        ("csrf", "CWE-352"),
        ("authorization", "CWE-287"),
        ("auth", "CWE-287"),
        ("authentication", "CWE-287"),
        ("crypto", "CWE-327"),
        ("encryption", "CWE-327"),
        ("ssl", "CWE-319"),
        ("tls", "CWE-319"),
        ("https", "CWE-319"),
        ("input", "CWE-20"),
        ("validation", "CWE-20"),
        ("phishing", "CWE-601"),
        ("redirect", "CWE-601"),
        ("credential", "CWE-798"),
        ("password", "CWE-798"),
        ("cache", "CWE-525"),
        ("access", "CWE-862"),
    ];

    for (keyword, cwe_id) in CATEGORY_TO_CWE {
        if category_lower.contains(keyword) {
            return CWE_REGISTRY.get(cwe_id);
        }
    }

    if category_lower.contains("malware") || category_lower.contains("virus") {
        return CWE_REGISTRY.get("CWE-20");
    }
    if category_lower.contains("scan") || category_lower.contains("suspicious") {
        return CWE_REGISTRY.get("CWE-862");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_categories() {
        assert_eq!(map_finding_to_cwe("reflected xss").unwrap().cwe_id, "CWE-79");
        assert_eq!(map_finding_to_cwe("phishing redirect").unwrap().cwe_id, "CWE-601");
    }

    #[test]
    fn falls_back_for_suspicious_scan_categories() {
        assert_eq!(map_finding_to_cwe("suspicious behavior scan").unwrap().cwe_id, "CWE-862");
    }

    #[test]
    fn returns_none_for_unrecognized_category() {
        assert!(map_finding_to_cwe("completely unrelated").is_none());
    }
}
