//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::TiccleError;

/// Read a file's bytes, returning `None` if the file doesn't exist
pub fn read_if_exists<P: AsRef<Path>>(path: P) -> io::Result<Option<Vec<u8>>> {
    let mut file = match File::open(path.as_ref()) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(Some(bytes))
}

/// Write bytes to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all, so a crash
/// or a failed write never leaves a truncated collection behind.
pub fn write_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> io::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)?;
    let mut writer = BufWriter::new(file);
    let written = writer
        .write_all(bytes)
        .and_then(|_| writer.flush())
        .and_then(|_| writer.get_ref().sync_all());

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        e
    })
}

/// Serialize a value as pretty JSON and write it atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), TiccleError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = serde_json::to_vec_pretty(data)
        .map_err(|e| TiccleError::Json(format!("Failed to serialize data: {}", e)))?;

    write_atomic(path, &bytes)
        .map_err(|e| TiccleError::Io(format!("Failed to write {}: {}", path.display(), e)))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
