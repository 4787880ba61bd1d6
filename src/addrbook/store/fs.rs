use crate::error::{AddrBookError, Result};
use crate::model::Record;
use chrono::Utc;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// What was found at a snapshot path.
#[derive(Debug)]
pub enum Snapshot {
    /// No file at the path
    Missing,
    /// Parsed name -> record mapping, exactly as stored on disk
    Loaded(BTreeMap<String, Record>),
    /// The file exists but is empty or cannot be parsed
    Corrupt(String),
}

/// Reads the snapshot at `path`.
///
/// Returns `Err` only for real I/O failures; a missing file and a file with
/// unusable content are both normal outcomes.
pub fn read_snapshot(path: &Path) -> Result<Snapshot> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Snapshot::Missing),
        Err(e) => return Err(AddrBookError::Io(e)),
    };

    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(Snapshot::Corrupt("file is empty".to_string()));
    }

    match serde_json::from_slice::<BTreeMap<String, Record>>(&bytes) {
        Ok(records) => Ok(Snapshot::Loaded(records)),
        Err(e) => Ok(Snapshot::Corrupt(e.to_string())),
    }
}

/// Writes the full mapping to `path`, replacing any previous content.
///
/// The JSON goes to a temp file in the same directory which is then renamed
/// over the target, so a crash never leaves a half-written snapshot.
pub fn write_snapshot(path: &Path, records: &BTreeMap<String, Record>) -> Result<()> {
    let dir = parent_dir(path);
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(AddrBookError::Io)?;
    }

    let content = serde_json::to_string_pretty(records).map_err(AddrBookError::Serialization)?;

    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("address_book");
    let tmp_path = dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));
    if let Err(e) = fs::write(&tmp_path, content).and_then(|_| fs::rename(&tmp_path, path)) {
        let _ = fs::remove_file(&tmp_path);
        return Err(AddrBookError::Io(e));
    }

    Ok(())
}

/// Moves an unusable snapshot out of the way so the next save cannot
/// overwrite it. Returns where it went.
///
/// Earlier backups are never replaced: a name already taken gets a numeric
/// suffix.
pub fn quarantine(path: &Path) -> Result<PathBuf> {
    let backup = free_backup_path(path, &Utc::now().format("%Y%m%d%H%M%S").to_string());
    fs::rename(path, &backup).map_err(AddrBookError::Io)?;
    Ok(backup)
}

fn free_backup_path(path: &Path, stamp: &str) -> PathBuf {
    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("address_book");
    let dir = parent_dir(path);

    let base = dir.join(format!("{}.corrupt-{}", file_name, stamp));
    if !base.exists() {
        return base;
    }
    (1..)
        .map(|n| dir.join(format!("{}.corrupt-{}-{}", file_name, stamp, n)))
        .find(|candidate| !candidate.exists())
        .unwrap_or(base)
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
