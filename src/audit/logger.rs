//! Append-only JSONL audit log

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{TiccleError, TiccleResult};

use super::entry::AuditEntry;

/// Writes audit entries to a log file, one JSON object per line
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry and flush it
    pub fn log(&self, entry: &AuditEntry) -> TiccleResult<()> {
        let line = serde_json::to_string(entry)
            .map_err(|e| TiccleError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| TiccleError::Io(format!("Failed to open audit log: {}", e)))?;

        writeln!(file, "{}", line)
            .and_then(|_| file.flush())
            .map_err(|e| TiccleError::Io(format!("Failed to write audit entry: {}", e)))
    }

    /// Every entry in the log, oldest first
    ///
    /// Blank lines are skipped; a line that isn't a valid entry is an error.
    pub fn read_all(&self) -> TiccleResult<Vec<AuditEntry>> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(TiccleError::Io(format!("Failed to open audit log: {}", e))),
        };

        let mut entries = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                TiccleError::Io(format!("Failed to read audit log line {}: {}", index + 1, e))
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let entry = serde_json::from_str(&line).map_err(|e| {
                TiccleError::Json(format!("Bad audit entry at line {}: {}", index + 1, e))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> TiccleResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let skip = entries.len().saturating_sub(count);
        Ok(entries.split_off(skip))
    }

    /// Number of entries in the log
    pub fn entry_count(&self) -> TiccleResult<usize> {
        Ok(self.read_all()?.len())
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    fn expense_entry(i: usize) -> AuditEntry {
        AuditEntry::create(EntityType::Expense, format!("exp-{}", i), &json!({"amount": i}))
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        logger.log(&expense_entry(0)).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_type, EntityType::Expense);
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();
        for i in 0..10 {
            logger.log(&expense_entry(i)).unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        let ids: Vec<_> = recent.iter().map(|e| e.entity_id.as_str()).collect();
        assert_eq!(ids, vec!["exp-7", "exp-8", "exp-9"]);
        assert_eq!(logger.entry_count().unwrap(), 10);
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();
        assert!(!logger.path().exists());
        assert_eq!(logger.entry_count().unwrap(), 0);
        assert!(logger.read_recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_entries_survive_reopen() {
        let (logger, temp) = create_test_logger();
        logger.log(&expense_entry(1)).unwrap();

        let reopened = AuditLogger::new(temp.path().join("audit.log"));
        reopened.log(&expense_entry(2)).unwrap();

        assert_eq!(reopened.read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_garbage_line_is_reported() {
        let (logger, _temp) = create_test_logger();
        logger.log(&expense_entry(1)).unwrap();
        std::fs::OpenOptions::new()
            .append(true)
            .open(logger.path())
            .unwrap()
            .write_all(b"\nnot json\n")
            .unwrap();

        let err = logger.read_all().unwrap_err();
        assert!(matches!(err, TiccleError::Json(ref msg) if msg.contains("line 3")));
    }
}
