//! Rotating file writer with size-based rotation and backup retention.
//!
//! This module provides a `MakeWriter` implementation that appends formatted
//! log lines to a file, rotating when it exceeds a size threshold and
//! keeping a fixed number of backups. This prevents unbounded disk usage
//! for log files.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Rotating log file writer.
///
/// Each `make_writer` call checks the current file size and rotates if
/// necessary before handing out an append handle. Rotation renames the
/// current file to `<name>.<timestamp>` and removes the oldest backups
/// beyond [`MAX_BACKUP_FILES`].
///
/// Failures are swallowed: observability must never take the plugin down,
/// so a writer that cannot open its file becomes a sink.
pub struct FileWriter {
    /// Path to the primary log file.
    file_path: PathBuf,
}

impl FileWriter {
    /// Creates a new file writer for the given path.
    ///
    /// The file is not opened until the first write, so construction always
    /// succeeds.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    /// Rotates the log file if it has grown past the size threshold.
    fn rotate_if_needed(&self) {
        let Ok(metadata) = fs::metadata(&self.file_path) else {
            return;
        };
        if metadata.len() <= MAX_FILE_SIZE_BYTES {
            return;
        }

        let stamp = chrono::Utc::now().timestamp();
        let backup = self.file_path.with_extension(format!("log.{stamp}"));
        if fs::rename(&self.file_path, &backup).is_err() {
            return;
        }

        self.cleanup_old_backups();
    }

    /// Removes backups beyond the retention count, oldest first.
    fn cleanup_old_backups(&self) {
        let Some(dir) = self.file_path.parent() else {
            return;
        };
        let Some(stem) = self.file_path.file_stem().and_then(|s| s.to_str()) else {
            return;
        };

        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };

        let mut backups: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .map(|e| e.path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(stem) && n.contains(".log."))
            })
            .collect();

        if backups.len() <= MAX_BACKUP_FILES {
            return;
        }

        // Timestamp suffixes sort lexicographically in creation order.
        backups.sort();
        let excess = backups.len() - MAX_BACKUP_FILES;
        for old in backups.into_iter().take(excess) {
            let _ = fs::remove_file(old);
        }
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = LogHandle;

    fn make_writer(&'a self) -> Self::Writer {
        self.rotate_if_needed();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)
            .ok();
        LogHandle { file }
    }
}

/// Append handle for one batch of formatted log output.
///
/// Writes go to the log file when it could be opened and are discarded
/// otherwise.
pub struct LogHandle {
    file: Option<fs::File>,
}

impl Write for LogHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.file.as_mut() {
            Some(file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_append_to_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("truthlens.log");
        let writer = FileWriter::new(path.clone());

        writer.make_writer().write_all(b"first line\n").unwrap();
        writer.make_writer().write_all(b"second line\n").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first line\nsecond line\n");
    }

    #[test]
    fn oversized_file_is_rotated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("truthlens.log");
        fs::write(&path, vec![b'x'; (MAX_FILE_SIZE_BYTES + 1) as usize]).unwrap();

        let writer = FileWriter::new(path.clone());
        writer.make_writer().write_all(b"fresh\n").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "fresh\n");

        let backups = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_name().to_string_lossy().contains(".log."))
            .count();
        assert_eq!(backups, 1);
    }

    #[test]
    fn missing_file_writer_discards_without_error() {
        let writer = FileWriter::new(PathBuf::from("/nonexistent-dir/truthlens.log"));
        let mut handle = writer.make_writer();
        assert_eq!(handle.write(b"dropped").unwrap(), 7);
        handle.flush().unwrap();
    }
}
