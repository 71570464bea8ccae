//! Line loader for solver logs.

use crate::{LogError, LogResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Raw log contents, one entry per source line, in file order.
/// Immutable once loaded; extraction borrows it.
#[derive(Debug, Clone)]
pub struct RawLog {
    path: PathBuf,
    lines: Vec<String>,
}

impl RawLog {
    /// Read a solver log from disk. The file handle is closed before this
    /// returns. Any unreadable path is a `LogNotFound` error; there is no
    /// fallback to an empty log.
    pub fn load(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LogError::LogNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(path, &content))
    }

    /// Build a log from already-loaded text.
    pub fn from_text(path: impl AsRef<Path>, text: &str) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lines: text.lines().map(str::to_owned).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines paired with their 1-based line numbers, as used in error reports.
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| (i + 1, line.as_str()))
    }
}
