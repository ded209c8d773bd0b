use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Deserialize;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// One item of a sandbox layout, created in listing order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FsEntry {
    Dir {
        path: PathBuf,
    },
    File {
        path: PathBuf,
        #[serde(default)]
        size: u64,
        #[serde(default)]
        executable: bool,
        #[serde(default)]
        mtime: Option<Mtime>,
    },
    Symlink {
        path: PathBuf,
        target: PathBuf,
    },
}

impl FsEntry {
    pub fn path(&self) -> &Path {
        match self {
            FsEntry::Dir { path } | FsEntry::File { path, .. } | FsEntry::Symlink { path, .. } => {
                path
            }
        }
    }
}

/// Modification time for a file entry.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Mtime {
    /// Seconds since the Unix epoch, possibly fractional.
    Epoch(f64),
    /// Age relative to the moment the sandbox is built.
    Ago { days_ago: f64 },
}

impl Mtime {
    /// Returns `None` for negative, non-finite or out-of-range values.
    pub fn resolve(self, now: SystemTime) -> Option<SystemTime> {
        match self {
            Mtime::Epoch(secs) => {
                let offset = Duration::try_from_secs_f64(secs).ok()?;
                UNIX_EPOCH.checked_add(offset)
            }
            Mtime::Ago { days_ago } => {
                let age = Duration::try_from_secs_f64(days_ago * SECONDS_PER_DAY).ok()?;
                now.checked_sub(age)
            }
        }
    }
}
