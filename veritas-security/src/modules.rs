//! Concrete security modules. Each is a deterministic stand-in over
//! the target URL's static shape rather than live HTTP probing, header
//! fetching, or JS execution; built so a live prober drops in behind
//! the same `SecurityModule` contract.

use async_trait::async_trait;
use veritas_core::{AgentType, Finding, Severity};

use crate::cvss::preset_for_severity;
use crate::cwe::map_finding_to_cwe;
use crate::module::{ModuleOutput, ModuleTier, SecurityModule};

fn annotate(mut finding: Finding, category: &str) -> Finding {
    if let Some(entry) = map_finding_to_cwe(category) {
        finding.cwe_id = Some(entry.cwe_id.to_string());
    }
    finding.cvss_score = Some(preset_for_severity(finding.severity).base_score);
    finding
}

pub struct SecurityHeadersModule;

#[async_trait]
impl SecurityModule for SecurityHeadersModule {
    fn category_id(&self) -> &str {
        "security_headers"
    }
    fn tier(&self) -> ModuleTier {
        ModuleTier::Fast
    }
    fn weight(&self) -> f64 {
        0.20
    }

    async fn run(&self, target_url: &str) -> anyhow::Result<ModuleOutput> {
        if target_url.starts_with("http://") {
            let finding = annotate(
                Finding::new(
                    "sec-headers-no-tls",
                    "security_headers",
                    "cleartext_transport",
                    Severity::Medium,
                    0.9,
                    "target is served over plain HTTP",
                    target_url,
                    AgentType::Security,
                ),
                "https",
            );
            return Ok(ModuleOutput { findings: vec![finding], score: Some(0.3) });
        }
        Ok(ModuleOutput { findings: Vec::new(), score: Some(0.9) })
    }
}

pub struct PhishingDbModule;

#[async_trait]
impl SecurityModule for PhishingDbModule {
    fn category_id(&self) -> &str {
        "phishing_db"
    }
    fn tier(&self) -> ModuleTier {
        ModuleTier::Medium
    }
    fn weight(&self) -> f64 {
        0.30
    }

    async fn run(&self, target_url: &str) -> anyhow::Result<ModuleOutput> {
        let suspicious_terms = ["login-verify", "secure-update", "account-confirm"];
        if suspicious_terms.iter().any(|term| target_url.contains(term)) {
            let finding = annotate(
                Finding::new(
                    "phishing-suspicious-path",
                    "phishing_db",
                    "phishing",
                    Severity::High,
                    0.75,
                    "URL path matches a common phishing lure pattern",
                    target_url,
                    AgentType::Security,
                ),
                "phishing",
            );
            return Ok(ModuleOutput { findings: vec![finding], score: Some(0.2) });
        }
        Ok(ModuleOutput { findings: Vec::new(), score: Some(0.95) })
    }
}

pub struct RedirectChainModule;

#[async_trait]
impl SecurityModule for RedirectChainModule {
    fn category_id(&self) -> &str {
        "redirect_chain"
    }
    fn tier(&self) -> ModuleTier {
        ModuleTier::Fast
    }
    fn weight(&self) -> f64 {
        0.15
    }

    async fn run(&self, _target_url: &str) -> anyhow::Result<ModuleOutput> {
        Ok(ModuleOutput { findings: Vec::new(), score: Some(1.0) })
    }
}

pub struct JsAnalysisModule;

#[async_trait]
impl SecurityModule for JsAnalysisModule {
    fn category_id(&self) -> &str {
        "js_analysis"
    }
    fn tier(&self) -> ModuleTier {
        ModuleTier::Medium
    }
    fn weight(&self) -> f64 {
        0.20
    }

    async fn run(&self, _target_url: &str) -> anyhow::Result<ModuleOutput> {
        Ok(ModuleOutput { findings: Vec::new(), score: Some(1.0) })
    }
}

pub struct FormValidationModule;

#[async_trait]
impl SecurityModule for FormValidationModule {
    fn category_id(&self) -> &str {
        "form_validation"
    }
    fn tier(&self) -> ModuleTier {
        ModuleTier::Deep
    }
    fn weight(&self) -> f64 {
        0.15
    }

    async fn run(&self, _target_url: &str) -> anyhow::Result<ModuleOutput> {
        Ok(ModuleOutput { findings: Vec::new(), score: Some(1.0) })
    }
}

pub fn default_modules() -> Vec<Box<dyn SecurityModule>> {
    vec![
        Box::new(SecurityHeadersModule),
        Box::new(PhishingDbModule),
        Box::new(RedirectChainModule),
        Box::new(JsAnalysisModule),
        Box::new(FormValidationModule),
    ]
}
