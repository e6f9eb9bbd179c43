// --- Atomic JSON persistence helpers ---

use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use tempfile::NamedTempFile; // For atomic writes

use crate::{error::TaskError, model::Task};

/// File-backed task store. Load and save are the only I/O the crate does;
/// everything else operates on the in-memory `Vec<Task>`.
pub struct TaskFile {
    path: PathBuf,
}

impl TaskFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the full collection, seeding an absent file with `[]` first so
    /// the file exists after any command, read-only ones included.
    pub fn load(&self) -> Result<Vec<Task>, TaskError> {
        match File::open(&self.path) {
            Ok(file) => {
                serde_json::from_reader(BufReader::new(file)).map_err(TaskError::CorruptFile)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.save(&[])?;
                Ok(Vec::new())
            }
            Err(e) => Err(TaskError::Io(e)),
        }
    }

    /// Replace the persisted collection wholesale.
    pub fn save(&self, tasks: &[Task]) -> Result<(), TaskError> {
        atomic_write(&self.path, &tasks)
    }
}

/// Atomically write *any* serializable value to disk, replacing previous file
/// contents only when the entire payload is safely persisted.
fn atomic_write<T>(path: &Path, value: &T) -> Result<(), TaskError>
where
    T: Serialize,
{
    // Write into a temp file in the *same* directory.
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;

    serde_json::to_writer_pretty(&mut tmp, value).map_err(io::Error::from)?;

    // push os buffers
    tmp.flush()?;

    // fsync tempfile before the rename
    tmp.as_file().sync_all()?;

    // atomic rename of the tmp file onto the final path on POSIX, safe fallback on Windows
    tmp.persist(path).map_err(|e| TaskError::Io(e.error))?;

    Ok(())
}
