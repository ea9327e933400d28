//! Size-rotated append-only file for trace export.
//!
//! Each write appends one line. Before a write, a file larger than the limit
//! is renamed to `<name>.<timestamp>` and a fresh file is started; only the
//! newest backups are kept.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size at which the trace file is rotated (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Backups kept after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Backup suffix format. Lexicographic order matches chronological order.
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S%.6f";

/// Append-only line writer with size-based rotation.
///
/// The file is opened lazily on the first write, so construction never
/// fails. A `Mutex` guards the handle because exporters are `Send + Sync`.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    /// Writer with the default limits: 10 MB per file, 3 backups.
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Writer rotating past `max_bytes` and keeping `max_backups` backups.
    pub const fn with_limits(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            max_backups,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` and a newline, then flushes.
    ///
    /// # Errors
    ///
    /// Returns I/O errors from rotation, opening or writing, and an error if
    /// the handle's lock was poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::other(format!("trace file lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let file = handle
            .as_mut()
            .ok_or_else(|| io::Error::other("trace file not open"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|m| m.len() > self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let suffix = Utc::now().format(BACKUP_TIMESTAMP_FORMAT);
        let mut backup = self.path.clone().into_os_string();
        backup.push(format!(".{suffix}"));

        if self.path.exists() {
            fs::rename(&self.path, PathBuf::from(backup))?;
        }
        self.prune_backups()
    }

    /// Deletes all but the newest `max_backups` backups. Individual removal
    /// failures are ignored.
    fn prune_backups(&self) -> io::Result<()> {
        let mut backups = self.backups()?;
        backups.sort_unstable_by(|a, b| b.cmp(a));

        for stale in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(stale);
        }
        Ok(())
    }

    /// Existing backup files of this writer, in no particular order.
    fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let prefix = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| format!("{n}."))
            .ok_or_else(|| io::Error::other("trace file has no valid name"))?;

        Ok(fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect())
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("trace.json");
        let writer = RotatingFile::new(path.clone());

        writer.write_line("{\"a\":1}").expect("first write");
        writer.write_line("{\"b\":2}").expect("second write");

        let contents = fs::read_to_string(path).expect("readable");
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_past_limit_and_keeps_newest_backups() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("trace.json");
        let writer = RotatingFile::with_limits(path.clone(), 8, 2);

        for i in 0..6 {
            writer.write_line(&format!("line-{i}-padding")).expect("write");
            std::thread::sleep(std::time::Duration::from_millis(2));
        }

        let backups = writer.backups().expect("listable");
        assert_eq!(backups.len(), 2);
        assert_eq!(
            fs::read_to_string(&path).expect("readable"),
            "line-5-padding\n"
        );

        let mut newest = backups;
        newest.sort();
        let last = fs::read_to_string(newest.last().expect("a backup")).expect("readable");
        assert_eq!(last, "line-4-padding\n");
    }
}
