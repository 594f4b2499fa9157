//! Embedded schema DDL.

/// Issued once per connection, before any table creation, to establish
/// the WAL concurrency discipline.
pub const SESSION_PRAGMAS: &[&str] = &[
    "PRAGMA journal_mode = WAL",
    "PRAGMA synchronous = NORMAL",
    "PRAGMA cache_size = -64000",
    "PRAGMA temp_store = MEMORY",
    "PRAGMA wal_autocheckpoint = 1000",
    "PRAGMA foreign_keys = ON",
];

pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS audits (
    id              TEXT PRIMARY KEY,
    url             TEXT NOT NULL,
    status          TEXT NOT NULL,
    tier            TEXT NOT NULL,
    verdict_mode    TEXT NOT NULL,
    trust_score     REAL,
    risk_level      TEXT,
    site_type       TEXT,
    narrative       TEXT,
    error_message   TEXT,
    created_at      TEXT NOT NULL,
    updated_at      TEXT NOT NULL,
    completed_at    TEXT
);

CREATE TABLE IF NOT EXISTS audit_findings (
    id              TEXT PRIMARY KEY,
    audit_id        TEXT NOT NULL REFERENCES audits(id) ON DELETE CASCADE,
    agent_type      TEXT NOT NULL,
    pattern_type    TEXT NOT NULL,
    severity        TEXT NOT NULL,
    description     TEXT NOT NULL,
    evidence        TEXT,
    confidence      REAL NOT NULL,
    created_at      TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS audit_screenshots (
    id              TEXT PRIMARY KEY,
    audit_id        TEXT NOT NULL REFERENCES audits(id) ON DELETE CASCADE,
    filepath        TEXT NOT NULL,
    label           TEXT,
    size_bytes      INTEGER NOT NULL,
    created_at      TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS audit_events (
    id              TEXT PRIMARY KEY,
    audit_id        TEXT NOT NULL REFERENCES audits(id) ON DELETE CASCADE,
    event_type      TEXT NOT NULL,
    payload         TEXT NOT NULL,
    created_at      TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS osint_cache (
    id              TEXT PRIMARY KEY,
    query_key       TEXT NOT NULL UNIQUE,
    source          TEXT NOT NULL,
    category        TEXT NOT NULL,
    result          TEXT NOT NULL,
    created_at      TEXT NOT NULL,
    expires_at      TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_audits_status ON audits(status);
CREATE INDEX IF NOT EXISTS idx_audits_created_at ON audits(created_at);
CREATE INDEX IF NOT EXISTS idx_audits_trust_score ON audits(trust_score);
CREATE INDEX IF NOT EXISTS idx_audits_url ON audits(url);

CREATE INDEX IF NOT EXISTS idx_findings_audit_id ON audit_findings(audit_id);
CREATE INDEX IF NOT EXISTS idx_findings_pattern_type ON audit_findings(pattern_type);

CREATE INDEX IF NOT EXISTS idx_screenshots_audit_id ON audit_screenshots(audit_id);

CREATE INDEX IF NOT EXISTS idx_events_audit_id ON audit_events(audit_id);

CREATE UNIQUE INDEX IF NOT EXISTS idx_osint_cache_query_key ON osint_cache(query_key);
CREATE INDEX IF NOT EXISTS idx_osint_cache_source ON osint_cache(source);
CREATE INDEX IF NOT EXISTS idx_osint_cache_expires_at ON osint_cache(expires_at);
CREATE INDEX IF NOT EXISTS idx_osint_cache_category ON osint_cache(category);
"#;
