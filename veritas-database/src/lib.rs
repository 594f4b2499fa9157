//! Single-file embedded audit store under WAL concurrency.

pub mod client;
pub mod migrations;
pub mod models;
pub mod osint_cache;
pub mod repository;
pub mod schema;

pub use client::{DatabaseClient, DatabaseConfig};
pub use migrations::MigrationRunner;
pub use models::{AuditRow, AuditWithAssociations, EventRow, FindingRow, NewAudit, OsintCacheRow, ScreenshotRow};
pub use osint_cache::{cache_key, OsintCacheRepository};
pub use repository::{AuditRepository, SqliteAuditRepository};
