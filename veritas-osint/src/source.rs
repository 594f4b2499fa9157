//! Source self-description and the registry of available sources.

use async_trait::async_trait;
use veritas_core::{OsintCategory, OsintResult};

/// A source's static self-description, used for registration and for
/// alternative-source fallback within a category.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDescriptor {
    pub name: String,
    pub category: OsintCategory,
    pub requires_api_key: bool,
    pub rate_limit_rpm: Option<u32>,
    pub rate_limit_rph: Option<u32>,
    /// Lower values are tried first among alternatives in a category.
    pub priority: u8,
}

#[async_trait]
pub trait OsintSource: Send + Sync {
    fn descriptor(&self) -> &SourceDescriptor;

    /// Execute one query. `query_type`/`query_value` are source-specific
    /// (e.g. DNS: "a_record" / "example.com").
    async fn query(&self, query_type: &str, query_value: &str) -> anyhow::Result<OsintResult>;
}

/// Registers every statically-available source plus any source whose
/// credentials are present: DNS, WHOIS, and SSL are always available;
/// threat-intel and reputation sources register only when their
/// credentials are present.
pub fn build_default_registry(credentials: &SourceCredentials) -> Vec<Box<dyn OsintSource>> {
    let mut sources: Vec<Box<dyn OsintSource>> = vec![
        Box::new(crate::sources::DnsSource::default()),
        Box::new(crate::sources::WhoisSource::default()),
        Box::new(crate::sources::SslSource::default()),
    ];

    if credentials.abuseipdb_api_key.is_some() {
        sources.push(Box::new(crate::sources::ThreatIntelSource::new(
            "abuseipdb",
            credentials.abuseipdb_api_key.clone(),
        )));
    }
    if credentials.urlvoid_api_key.is_some() {
        sources.push(Box::new(crate::sources::ReputationSource::new(
            "urlvoid",
            credentials.urlvoid_api_key.clone(),
        )));
    }

    sources
}

/// Which conditional sources' credentials are present. Read from the
/// environment at orchestrator start.
#[derive(Debug, Clone, Default)]
pub struct SourceCredentials {
    pub abuseipdb_api_key: Option<String>,
    pub urlvoid_api_key: Option<String>,
}

impl SourceCredentials {
    pub fn from_env() -> Self {
        Self {
            abuseipdb_api_key: std::env::var("ABUSEIPDB_API_KEY").ok(),
            urlvoid_api_key: std::env::var("URLVOID_API_KEY").ok(),
        }
    }
}
