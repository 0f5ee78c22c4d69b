//! Replace-in-place with a backup/swap through the temp directory
//!
//! The output tree is regenerated from scratch on every run, never merged.
//! To keep the destructive replace recoverable, a category's existing
//! output is moved into the transient `temp` directory first and only
//! removed once its fresh tree has been built. On failure the backup stays
//! on disk; no automatic rollback is attempted, because the partially built
//! output may already contain valid new content alongside the backup.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use fetcher_fs::FileOps;
use fetcher_model::Category;

use crate::{Error, Result};

/// Phase of a category's replace-in-place pass, reported with failures so
/// the operator knows whether the backup or the fresh tree is the one to
/// trust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Moving the existing output into the temp directory.
    BackingUp,
    /// Creating the fresh output directories and writing entities.
    Building,
    /// Removing the category's backup from the temp directory.
    Committing,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::BackingUp => "backup",
            Self::Building => "build",
            Self::Committing => "commit",
        };
        write!(f, "{label}")
    }
}

/// Run one category's full replace-in-place pass.
///
/// `dirs` are the category's output directories under `target_root`
/// (current categories own exactly one, but a legacy fetcher-script version
/// may bundle several). `build` writes the fresh trees; individual file
/// failures inside it are non-fatal and already logged by the writers.
pub fn replace_in_place<F>(
    ops: &FileOps,
    category: Category,
    target_root: &Path,
    temp_dir: &Path,
    dirs: &[&str],
    build: F,
) -> Result<()>
where
    F: FnOnce(),
{
    let fail = |phase: Phase| move |source: fetcher_fs::Error| Error::Category {
        category,
        phase,
        source,
    };

    info!(%category, "backing up existing output");
    for dir in dirs {
        ops.move_dir(&target_root.join(dir), temp_dir)
            .map_err(fail(Phase::BackingUp))?;
    }

    info!(%category, "building fresh tree");
    for dir in dirs {
        ops.create_dir(&target_root.join(dir))
            .map_err(fail(Phase::Building))?;
    }
    build();

    debug!(%category, "removing backup");
    for dir in dirs {
        ops.remove_dir_tree(&temp_dir.join(dir))
            .map_err(fail(Phase::Committing))?;
    }

    info!(%category, "done");
    Ok(())
}
