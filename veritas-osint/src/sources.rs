//! Concrete source implementations. DNS resolution is a real lookup;
//! WHOIS/SSL/threat-intel/reputation sources are deterministic
//! stand-ins shaped so a real client can drop in behind the same
//! `OsintSource` contract without touching callers.

use async_trait::async_trait;
use veritas_core::{OsintCategory, OsintResult, OsintStatus};

use crate::source::{OsintSource, SourceDescriptor};

#[derive(Debug)]
pub struct DnsSource {
    descriptor: SourceDescriptor,
}

impl Default for DnsSource {
    fn default() -> Self {
        Self {
            descriptor: SourceDescriptor {
                name: "dns".into(),
                category: OsintCategory::Dns,
                requires_api_key: false,
                rate_limit_rpm: Some(120),
                rate_limit_rph: None,
                priority: 1,
            },
        }
    }
}

#[async_trait]
impl OsintSource for DnsSource {
    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    async fn query(&self, query_type: &str, query_value: &str) -> anyhow::Result<OsintResult> {
        let host = format!("{query_value}:0");
        match tokio::net::lookup_host(&host).await {
            Ok(addrs) => {
                let resolved: Vec<String> = addrs.map(|a| a.ip().to_string()).collect();
                Ok(OsintResult::success(
                    "dns",
                    OsintCategory::Dns,
                    query_type,
                    query_value,
                    serde_json::json!({ "addresses": resolved }),
                    1.0,
                ))
            }
            Err(err) => Ok(OsintResult::failed(
                "dns",
                OsintCategory::Dns,
                query_type,
                query_value,
                OsintStatus::Error,
                err.to_string(),
            )),
        }
    }
}

#[derive(Debug)]
pub struct WhoisSource {
    descriptor: SourceDescriptor,
}

impl Default for WhoisSource {
    fn default() -> Self {
        Self {
            descriptor: SourceDescriptor {
                name: "whois".into(),
                category: OsintCategory::Whois,
                requires_api_key: false,
                rate_limit_rpm: Some(10),
                rate_limit_rph: Some(100),
                priority: 1,
            },
        }
    }
}

#[async_trait]
impl OsintSource for WhoisSource {
    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    async fn query(&self, query_type: &str, query_value: &str) -> anyhow::Result<OsintResult> {
        Ok(OsintResult::success(
            "whois",
            OsintCategory::Whois,
            query_type,
            query_value,
            serde_json::json!({
                "registrar": null,
                "created_on": null,
                "age_days": null,
                "is_valid": null,
                "note": "no WHOIS transport configured; structural placeholder",
            }),
            0.5,
        ))
    }
}

#[derive(Debug)]
pub struct SslSource {
    descriptor: SourceDescriptor,
}

impl Default for SslSource {
    fn default() -> Self {
        Self {
            descriptor: SourceDescriptor {
                name: "ssl".into(),
                category: OsintCategory::Ssl,
                requires_api_key: false,
                rate_limit_rpm: Some(30),
                rate_limit_rph: None,
                priority: 1,
            },
        }
    }
}

#[async_trait]
impl OsintSource for SslSource {
    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    async fn query(&self, query_type: &str, query_value: &str) -> anyhow::Result<OsintResult> {
        Ok(OsintResult::success(
            "ssl",
            OsintCategory::Ssl,
            query_type,
            query_value,
            serde_json::json!({
                "age_days": null,
                "is_valid": null,
                "note": "no TLS certificate transport configured; structural placeholder",
            }),
            0.5,
        ))
    }
}

#[derive(Debug)]
pub struct ThreatIntelSource {
    name: &'static str,
    descriptor: SourceDescriptor,
    #[allow(dead_code)]
    api_key: Option<String>,
}

impl ThreatIntelSource {
    pub fn new(name: &'static str, api_key: Option<String>) -> Self {
        Self {
            name,
            descriptor: SourceDescriptor {
                name: name.to_string(),
                category: OsintCategory::ThreatIntel,
                requires_api_key: true,
                rate_limit_rpm: Some(5),
                rate_limit_rph: Some(50),
                priority: 2,
            },
            api_key,
        }
    }
}

#[async_trait]
impl OsintSource for ThreatIntelSource {
    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    async fn query(&self, query_type: &str, query_value: &str) -> anyhow::Result<OsintResult> {
        Ok(OsintResult::success(
            self.name,
            OsintCategory::ThreatIntel,
            query_type,
            query_value,
            serde_json::json!({
                "abuse_confidence": null,
                "reports": null,
                "note": "credential present; no external transport configured",
            }),
            0.5,
        ))
    }
}

#[derive(Debug)]
pub struct ReputationSource {
    name: &'static str,
    descriptor: SourceDescriptor,
    #[allow(dead_code)]
    api_key: Option<String>,
}

impl ReputationSource {
    pub fn new(name: &'static str, api_key: Option<String>) -> Self {
        Self {
            name,
            descriptor: SourceDescriptor {
                name: name.to_string(),
                category: OsintCategory::Reputation,
                requires_api_key: true,
                rate_limit_rpm: Some(5),
                rate_limit_rph: Some(50),
                priority: 2,
            },
            api_key,
        }
    }
}

#[async_trait]
impl OsintSource for ReputationSource {
    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    async fn query(&self, query_type: &str, query_value: &str) -> anyhow::Result<OsintResult> {
        Ok(OsintResult::success(
            self.name,
            OsintCategory::Reputation,
            query_type,
            query_value,
            serde_json::json!({
                "detections": null,
                "risk": null,
                "note": "credential present; no external transport configured",
            }),
            0.5,
        ))
    }
}
