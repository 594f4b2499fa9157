//! CVSS preset lookup by severity.

use veritas_core::Severity;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CvssPreset {
    pub vector: &'static str,
    pub base_score: f64,
}

/// One fixed preset per severity tier, vectors lifted from the
/// original's `PRESET_METRICS` table (CVSS v4.0 shorthand).
pub fn preset_for_severity(severity: Severity) -> CvssPreset {
    match severity {
        Severity::Critical => CvssPreset {
            vector: "CVSS:4.0/AV:N/AC:L/PR:N/UI:N/VC:H/VI:H/VA:H",
            base_score: 9.8,
        },
        Severity::High => CvssPreset {
            vector: "CVSS:4.0/AV:N/AC:L/PR:L/UI:N/VC:H/VI:H/VA:M",
            base_score: 8.1,
        },
        Severity::Medium => CvssPreset {
            vector: "CVSS:4.0/AV:N/AC:L/PR:M/UI:R/VC:M/VI:M/VA:N",
            base_score: 5.5,
        },
        Severity::Low => CvssPreset {
            vector: "CVSS:4.0/AV:L/AC:H/PR:H/UI:R/VC:L/VI:L/VA:N",
            base_score: 3.1,
        },
        Severity::Info => CvssPreset { vector: "CVSS:4.0/AV:L/AC:H/PR:H/UI:R/VC:N/VI:N/VA:N", base_score: 0.0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_preset_scores_highest() {
        assert!(preset_for_severity(Severity::Critical).base_score > preset_for_severity(Severity::High).base_score);
    }

    #[test]
    fn info_preset_scores_zero() {
        assert_eq!(preset_for_severity(Severity::Info).base_score, 0.0);
    }
}
