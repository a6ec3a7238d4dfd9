//! Size-rotating log file used as the `tracing` output.
//!
//! [`RotatingFileWriter`] appends to one file and, once that file has grown
//! past its size limit, shifts it into numbered backups before the next write:
//!
//! ```text
//! forkify.log   → forkify.log.1 → forkify.log.2 → forkify.log.3 → deleted
//! ```
//!
//! It implements [`MakeWriter`], so it plugs directly into a
//! `tracing_subscriber::fmt` layer.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MiB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe appending writer with size-based rotation.
///
/// The file is opened lazily on the first write, so construction never fails.
pub struct RotatingFileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    writer: Mutex<Option<File>>,
}

impl RotatingFileWriter {
    /// Creates a writer with the default limits (10 MiB, 3 backups).
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            writer: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Appends `bytes`, rotating first if the file is over its limit.
    ///
    /// # Errors
    ///
    /// Fails if rotation, opening or writing fails, or if the lock is poisoned.
    pub fn append(&self, bytes: &[u8]) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::other(format!("log writer lock poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            *writer = Some(OpenOptions::new().create(true).append(true).open(&self.file_path)?);
        }
        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::other("log file unavailable"))?;

        file.write_all(bytes)?;
        file.flush()
    }

    fn check_and_rotate(&self, writer: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.file_path.clone().into_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    /// Shifts `<file>.N-1` to `<file>.N` down to `<file>` → `<file>.1`.
    fn rotate_files(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return fs::remove_file(&self.file_path);
        }

        let oldest = self.backup_path(self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for index in (1..self.max_backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }

        if self.file_path.exists() {
            fs::rename(&self.file_path, self.backup_path(1))?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for RotatingFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

/// Per-event handle handed out by [`MakeWriter`].
#[derive(Debug)]
pub struct LogHandle<'a>(&'a RotatingFileWriter);

impl Write for LogHandle<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for RotatingFileWriter {
    type Writer = LogHandle<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LogHandle(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn appends_lines() {
        let dir = TempDir::new().unwrap();
        let writer = RotatingFileWriter::new(dir.path().join("forkify.log"));

        writer.append(b"one\n").unwrap();
        writer.make_writer().write_all(b"two\n").unwrap();

        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn rotates_past_the_limit_and_keeps_bounded_backups() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("forkify.log");
        let writer = RotatingFileWriter::with_limits(path.clone(), 4, 2);

        for line in ["aaaaa\n", "bbbbb\n", "ccccc\n", "ddddd\n"] {
            writer.append(line.as_bytes()).unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "ddddd\n");
        assert_eq!(fs::read_to_string(dir.path().join("forkify.log.1")).unwrap(), "ccccc\n");
        assert_eq!(fs::read_to_string(dir.path().join("forkify.log.2")).unwrap(), "bbbbb\n");
        assert!(!dir.path().join("forkify.log.3").exists());
    }
}
