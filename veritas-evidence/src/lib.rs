//! Content-addressed screenshot filesystem anchored to an audit id, with
//! strict path containment.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use base64::Engine;
use rand::RngCore;
use tokio::fs;
use tracing::{info, warn};
use veritas_core::VeritasError;

/// Filesystem-backed store for one data directory's worth of audit
/// screenshots: `<root>/<audit_id>/<monotonic_ts>_<index>_<8hex>.png`.
#[derive(Debug, Clone)]
pub struct EvidenceStore {
    root: PathBuf,
}

fn reject_unsafe_audit_id(audit_id: &str) -> Result<(), VeritasError> {
    if audit_id.contains('/') || audit_id.contains('\\') || audit_id.contains("..") {
        return Err(VeritasError::ContainmentViolation(format!(
            "audit_id '{audit_id}' contains a path-traversal-unsafe character"
        )));
    }
    Ok(())
}

/// Canonicalize `candidate` and verify it falls under `root`. `root`
/// itself must already exist; `candidate` need not.
fn ensure_contained(root: &Path, candidate: &Path) -> Result<PathBuf, VeritasError> {
    let root_canon = root
        .canonicalize()
        .map_err(|e| VeritasError::Other(anyhow::anyhow!("evidence root unreadable: {e}")))?;

    // Canonicalize what exists of the candidate's ancestry, then rejoin
    // the non-existent tail, so containment holds for paths we're about
    // to create as well as paths that already exist.
    let mut existing = candidate.to_path_buf();
    let mut tail = Vec::new();
    while !existing.exists() {
        if let Some(name) = existing.file_name() {
            tail.push(name.to_owned());
        }
        if !existing.pop() {
            break;
        }
    }
    let existing_canon = existing
        .canonicalize()
        .map_err(|e| VeritasError::Other(anyhow::anyhow!("cannot resolve evidence path: {e}")))?;

    if !existing_canon.starts_with(&root_canon) {
        return Err(VeritasError::ContainmentViolation(format!(
            "path '{}' escapes evidence root '{}'",
            candidate.display(),
            root.display()
        )));
    }

    let mut full = existing_canon;
    for component in tail.into_iter().rev() {
        full.push(component);
    }
    Ok(full)
}

impl EvidenceStore {
    pub async fn new(root: impl Into<PathBuf>) -> Result<Self, VeritasError> {
        let root = root.into();
        fs::create_dir_all(&root)
            .await
            .map_err(|e| VeritasError::Other(anyhow::anyhow!("failed to create evidence root: {e}")))?;
        Ok(Self { root })
    }

    fn audit_dir(&self, audit_id: &str) -> Result<PathBuf, VeritasError> {
        reject_unsafe_audit_id(audit_id)?;
        Ok(self.root.join(audit_id))
    }

    fn next_filename(index: u32) -> String {
        let ts = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        let mut rnd = [0u8; 4];
        rand::thread_rng().fill_bytes(&mut rnd);
        let hex: String = rnd.iter().map(|b| format!("{b:02x}")).collect();
        format!("{ts}_{index}_{hex}.png")
    }

    /// Persist raw screenshot bytes for `audit_id` at `index`, returning
    /// the relative-to-root path and size in bytes.
    pub async fn save_bytes(
        &self,
        audit_id: &str,
        index: u32,
        bytes: &[u8],
    ) -> Result<(String, u64), VeritasError> {
        let dir = self.audit_dir(audit_id)?;
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| VeritasError::Other(anyhow::anyhow!("failed to create audit dir: {e}")))?;

        let filename = Self::next_filename(index);
        let candidate = dir.join(&filename);
        let contained = ensure_contained(&self.root, &candidate)?;

        fs::write(&contained, bytes)
            .await
            .map_err(|e| VeritasError::Other(anyhow::anyhow!("failed to write screenshot: {e}")))?;

        let relative = format!("{audit_id}/{filename}");
        info!(audit_id, bytes = bytes.len(), "saved screenshot");
        Ok((relative, bytes.len() as u64))
    }

    /// Persist a base64-encoded screenshot, decoding first.
    pub async fn save_base64(
        &self,
        audit_id: &str,
        index: u32,
        base64_data: &str,
    ) -> Result<(String, u64), VeritasError> {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(base64_data)
            .map_err(|e| VeritasError::Other(anyhow::anyhow!("invalid base64 screenshot data: {e}")))?;
        self.save_bytes(audit_id, index, &bytes).await
    }

    /// Read back a previously saved screenshot by its relative path.
    pub async fn read(&self, relative_path: &str) -> Result<Vec<u8>, VeritasError> {
        let candidate = self.root.join(relative_path);
        let contained = ensure_contained(&self.root, &candidate)?;
        fs::read(&contained)
            .await
            .map_err(|e| VeritasError::Other(anyhow::anyhow!("failed to read screenshot: {e}")))
    }

    /// Delete the whole evidence directory for one audit.
    pub async fn delete_audit(&self, audit_id: &str) -> Result<(), VeritasError> {
        let dir = self.audit_dir(audit_id)?;
        if !dir.exists() {
            return Ok(());
        }
        let contained = ensure_contained(&self.root, &dir)?;
        fs::remove_dir_all(&contained)
            .await
            .map_err(|e| VeritasError::Other(anyhow::anyhow!("failed to delete audit evidence: {e}")))?;
        warn!(audit_id, "deleted evidence directory");
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_and_read_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let store = EvidenceStore::new(tmp.path()).await.unwrap();
        let (path, size) = store.save_bytes("vrts_aaaaaaaa", 0, b"fakepngbytes").await.unwrap();
        assert_eq!(size, 12);
        let bytes = store.read(&path).await.unwrap();
        assert_eq!(bytes, b"fakepngbytes");
    }

    #[tokio::test]
    async fn rejects_audit_id_with_traversal() {
        let tmp = tempfile::tempdir().unwrap();
        let store = EvidenceStore::new(tmp.path()).await.unwrap();
        for bad in ["../etc", "a/b", "a\\b", ".."] {
            let result = store.save_bytes(bad, 0, b"x").await;
            assert!(result.is_err(), "expected containment rejection for {bad}");
        }
    }

    #[tokio::test]
    async fn read_rejects_escaping_relative_path() {
        let tmp = tempfile::tempdir().unwrap();
        let store = EvidenceStore::new(tmp.path()).await.unwrap();
        store.save_bytes("vrts_aaaaaaaa", 0, b"x").await.unwrap();
        let result = store.read("../../etc/passwd").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn delete_audit_removes_whole_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let store = EvidenceStore::new(tmp.path()).await.unwrap();
        let (path, _) = store.save_bytes("vrts_bbbbbbbb", 0, b"x").await.unwrap();
        store.delete_audit("vrts_bbbbbbbb").await.unwrap();
        assert!(store.read(&path).await.is_err());
    }
}
