// File: ./src/storage.rs
use crate::error::{DownyError, Result};
use crate::model::Task;
use crate::tasklist::TaskList;
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// What [`Storage::load`] found in the data file
#[derive(Debug, Default)]
pub struct Loaded {
    pub tasks: TaskList,
    /// Lines that could not be turned back into tasks and were left out
    pub skipped: Vec<DownyError>,
}

/// Keeps the task list in a plain text file, one [`Task::to_line`] per line.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> io::Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Runs `f` while holding an exclusive advisory lock on `<path>.lock`
    pub fn with_lock<T, F>(path: &Path, f: F) -> io::Result<T>
    where
        F: FnOnce() -> io::Result<T>,
    {
        let lock_path = path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;
        lock_file.lock_exclusive()?;
        let result = f();
        if let Err(e) = FileExt::unlock(&lock_file) {
            tracing::debug!(path = ?lock_path, error = %e, "unlock failed, released on close");
        }
        result
    }

    fn ensure_parent(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    fn persist_err(&self, source: io::Error) -> DownyError {
        tracing::warn!(path = ?self.path, error = %source, "failed to persist tasks");
        DownyError::StoragePersist {
            path: self.path.clone(),
            source,
        }
    }

    /// Reads the whole file. A missing file is an empty list.
    pub fn load(&self) -> Result<Loaded> {
        if !self.path.exists() {
            tracing::debug!(path = ?self.path, "no data file yet, starting empty");
            return Ok(Loaded::default());
        }
        let bytes = fs::read(&self.path).map_err(|source| DownyError::StorageRead {
            path: self.path.clone(),
            source,
        })?;

        // Decoded line by line so one bad byte only costs its own line
        let mut loaded = Loaded::default();
        for (i, raw) in bytes.split(|&b| b == b'\n').enumerate() {
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            let parsed = std::str::from_utf8(raw)
                .map_err(|e| DownyError::CorruptEntry {
                    line: i + 1,
                    reason: format!("not valid UTF-8 ({})", e),
                })
                .and_then(|line| {
                    if line.trim().is_empty() {
                        Ok(None)
                    } else {
                        Task::from_line(line, i + 1).map(Some)
                    }
                });
            match parsed {
                Ok(Some(task)) => {
                    loaded.tasks.add(task);
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(path = ?self.path, "skipping entry: {}", e);
                    loaded.skipped.push(e);
                }
            }
        }
        tracing::debug!(path = ?self.path, count = loaded.tasks.len(), "loaded tasks");
        Ok(loaded)
    }

    /// Appends a single newly added task
    pub fn append(&self, task: &Task) -> Result<()> {
        let line = task.to_line();
        let result = self.ensure_parent().and_then(|_| {
            Self::with_lock(&self.path, || {
                let mut file = OpenOptions::new()
                    .create(true)
                    .read(true)
                    .append(true)
                    .open(&self.path)?;
                // A file cut off mid-line must not swallow the new entry
                if file.metadata()?.len() > 0 {
                    let mut last = [0u8; 1];
                    file.seek(SeekFrom::End(-1))?;
                    file.read_exact(&mut last)?;
                    if last[0] != b'\n' {
                        file.write_all(b"\n")?;
                    }
                }
                writeln!(file, "{}", line)?;
                file.sync_data()
            })
        });
        result.map_err(|e| self.persist_err(e))?;
        tracing::debug!(path = ?self.path, entry = %line, "appended task");
        Ok(())
    }

    /// Rewrites the file from the full list
    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        let mut contents = String::new();
        for task in tasks {
            contents.push_str(&task.to_line());
            contents.push('\n');
        }
        let result = self
            .ensure_parent()
            .and_then(|_| Self::with_lock(&self.path, || Self::atomic_write(&self.path, &contents)));
        result.map_err(|e| self.persist_err(e))?;
        tracing::debug!(path = ?self.path, count = tasks.len(), "rewrote data file");
        Ok(())
    }
}
