//! OSINT result cache.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::client::DatabaseClient;
use crate::models::OsintCacheRow;

/// Per-source time-to-live for cached OSINT results.
fn ttl_for_source(source: &str) -> Duration {
    match source.to_ascii_lowercase().as_str() {
        "dns" => Duration::hours(24),
        "whois" => Duration::days(7),
        "ssl" => Duration::days(30),
        "abuseipdb" => Duration::hours(12),
        "urlvoid" => Duration::hours(24),
        "social" => Duration::hours(24),
        _ => Duration::hours(24),
    }
}

/// Lowercase-normalized hash of `(source, category, query_type, query_params)`
/// used as the cache key.
pub fn cache_key(source: &str, category: &str, query_type: &str, query_params: &str) -> String {
    let normalized = format!(
        "{}:{}:{}:{}",
        source.to_ascii_lowercase(),
        category.to_ascii_lowercase(),
        query_type.to_ascii_lowercase(),
        query_params.to_ascii_lowercase()
    );
    let digest = Sha256::digest(normalized.as_bytes());
    hex::encode(digest)
}

pub struct OsintCacheRepository {
    client: DatabaseClient,
}

impl OsintCacheRepository {
    pub fn new(client: DatabaseClient) -> Self {
        Self { client }
    }

    /// Returns the cached row iff it hasn't expired yet.
    pub async fn get(&self, query_key: &str) -> Result<Option<OsintCacheRow>> {
        let row: Option<OsintCacheRow> =
            sqlx::query_as("SELECT * FROM osint_cache WHERE query_key = ? AND expires_at > ?")
                .bind(query_key)
                .bind(Utc::now().to_rfc3339())
                .fetch_optional(self.client.pool())
                .await
                .context("failed to query osint cache")?;
        Ok(row)
    }

    /// Upsert by `query_key`, setting `expires_at = now() + TTL(source)`.
    pub async fn put(&self, source: &str, category: &str, query_key: &str, result_json: &str) -> Result<()> {
        let now: DateTime<Utc> = Utc::now();
        let expires_at = now + ttl_for_source(source);

        sqlx::query(
            "INSERT INTO osint_cache (id, query_key, source, category, result, created_at, expires_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(query_key) DO UPDATE SET
                source = excluded.source,
                category = excluded.category,
                result = excluded.result,
                created_at = excluded.created_at,
                expires_at = excluded.expires_at",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(query_key)
        .bind(source)
        .bind(category)
        .bind(result_json)
        .bind(now.to_rfc3339())
        .bind(expires_at.to_rfc3339())
        .execute(self.client.pool())
        .await
        .context("failed to upsert osint cache row")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_key_is_case_insensitive() {
        let a = cache_key("DNS", "Infra", "A_RECORD", "Example.com");
        let b = cache_key("dns", "infra", "a_record", "example.com");
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn put_then_get_round_trips_before_expiry() {
        let client = DatabaseClient::connect_in_memory().await.unwrap();
        let repo = OsintCacheRepository::new(client);
        let key = cache_key("dns", "infra", "a_record", "example.com");
        repo.put("dns", "infra", &key, r#"{"a": "1.2.3.4"}"#).await.unwrap();

        let row = repo.get(&key).await.unwrap().expect("should be cached");
        assert_eq!(row.result, r#"{"a": "1.2.3.4"}"#);
    }

    #[tokio::test]
    async fn get_returns_none_for_unknown_key() {
        let client = DatabaseClient::connect_in_memory().await.unwrap();
        let repo = OsintCacheRepository::new(client);
        assert!(repo.get("nonexistent").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn put_upserts_by_query_key() {
        let client = DatabaseClient::connect_in_memory().await.unwrap();
        let repo = OsintCacheRepository::new(client);
        let key = cache_key("ssl", "cert", "chain", "example.com");
        repo.put("ssl", "cert", &key, r#"{"v": 1}"#).await.unwrap();
        repo.put("ssl", "cert", &key, r#"{"v": 2}"#).await.unwrap();

        let row = repo.get(&key).await.unwrap().unwrap();
        assert_eq!(row.result, r#"{"v": 2}"#);
    }
}
