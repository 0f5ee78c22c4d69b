//! Retrying directory operations
//!
//! The engine replaces whole directory trees on every run. Moves and
//! recursive removals can transiently fail right after the last write to a
//! tree, so both run under the bounded [`RetryPolicy`]. File writes are a
//! single attempt; their failures are per-file concerns the caller decides
//! how to handle.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::retry::{self, RetryPolicy, SleepFn};
use crate::{Error, Result, io};

/// Filesystem operations with bounded-retry semantics.
pub struct FileOps {
    policy: RetryPolicy,
    sleep: SleepFn,
}

impl Default for FileOps {
    fn default() -> Self {
        Self::new(RetryPolicy::default())
    }
}

impl FileOps {
    /// Create FileOps that really sleep between late retry attempts.
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            sleep: Box::new(std::thread::sleep),
        }
    }

    /// Create FileOps with an injected sleep function, for tests.
    pub fn with_sleep(policy: RetryPolicy, sleep: SleepFn) -> Self {
        Self { policy, sleep }
    }

    /// Create a single directory.
    ///
    /// An already existing directory is success. Other failures are returned
    /// for the caller to log; one uncreatable folder must not abort a run.
    pub fn create_dir(&self, path: &Path) -> Result<()> {
        match fs::create_dir(path) {
            Ok(()) => {
                debug!(path = %path.display(), "created directory");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!(path = %path.display(), "directory already exists");
                Ok(())
            }
            Err(e) => Err(Error::io(path, e)),
        }
    }

    /// Move `src` into the directory `dst_dir`.
    ///
    /// A missing `src` is a no-op success. If the rename fails (typically
    /// because a previous run left a non-empty entry at the destination),
    /// the destination entry is removed recursively and the rename retried
    /// once. A second failure is fatal to the caller.
    pub fn move_dir(&self, src: &Path, dst_dir: &Path) -> Result<()> {
        if !src.exists() {
            debug!(src = %src.display(), "nothing to move");
            return Ok(());
        }

        let dst = match src.file_name() {
            Some(name) => dst_dir.join(name),
            None => return Err(Error::io(src, ErrorKind::InvalidInput.into())),
        };

        match fs::rename(src, &dst) {
            Ok(()) => Ok(()),
            Err(first) => {
                warn!(
                    src = %src.display(),
                    dst = %dst.display(),
                    error = %first,
                    "move failed, clearing destination and retrying"
                );
                self.remove_dir_tree(&dst)?;
                fs::rename(src, &dst).map_err(|e| Error::MoveFailed {
                    src: src.to_path_buf(),
                    dst,
                    source: e,
                })
            }
        }
    }

    /// Remove a directory tree recursively.
    ///
    /// A missing path is a no-op success. Removal is retried under the
    /// policy because the OS may still report the tree as busy shortly
    /// after the last write to it.
    pub fn remove_dir_tree(&self, path: &Path) -> Result<()> {
        if !path.is_dir() {
            debug!(path = %path.display(), "no directory tree to remove");
            return Ok(());
        }

        debug!(path = %path.display(), "removing directory tree");
        retry::with_retries(&self.policy, &self.sleep, || match fs::remove_dir_all(path) {
            // Another remover got there first.
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            other => other,
        })
        .map_err(|(attempts, source)| Error::RemoveExhausted {
            path: path.to_path_buf(),
            attempts,
            source,
        })
    }

    /// Write a file atomically, single attempt.
    pub fn write_file(&self, path: &Path, content: &[u8]) -> Result<()> {
        debug!(path = %path.display(), "writing file");
        io::write_atomic(path, content)
    }
}
