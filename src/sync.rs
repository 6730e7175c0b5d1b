//! Entry synchronization: copying one tracked file or directory between its
//! live location and a profile's backup store, in either direction.
//!
//! The target's base name is the sole join key between the live and backup
//! namespaces: a file entry backs up to `backup_dir/<basename>`, a directory
//! entry to `backup_dir/<basename>/<relative path>`. Two entries with the
//! same base name therefore share a backup slot, last writer wins.
//!
//! Per-item conditions - missing sources, individual copy failures - are
//! reported as [`SyncOutcome`] values, never as errors. One bad entry must
//! not stop the rest of the profile from syncing.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::fs_utils::copy_preserving;
use crate::paths::expand_tilde;

/// What the filesystem holds at a path, inspected at sync time.
///
/// Tracked entries never declare whether they are files or directories; this
/// is the dispatch point that decides between a single copy and a recursive
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Missing,
    File,
    Directory,
}

impl TargetKind {
    pub fn detect(path: &Path) -> Self {
        if path.is_file() {
            Self::File
        } else if path.is_dir() {
            Self::Directory
        } else {
            Self::Missing
        }
    }
}

/// Per-item result of a sync operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The file was copied to its destination.
    Copied { source: PathBuf, dest: PathBuf },
    /// Nothing to copy; expected situation, reported as a warning.
    Skipped { path: PathBuf, reason: String },
    /// The copy was attempted and failed; siblings continue regardless.
    Failed { path: PathBuf, error: String },
}

impl SyncOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Copy one tracked entry from its live location into `backup_dir`.
///
/// A missing target is a warning, not an error - tracked files that have
/// never been created are expected.
pub fn sync_to_backup(target: &str, backup_dir: &Path) -> Vec<SyncOutcome> {
    let live = expand_tilde(target);
    let Some(base_name) = live.file_name().map(ToOwned::to_owned) else {
        return vec![SyncOutcome::Failed {
            path: live,
            error: "target path has no base name".to_string(),
        }];
    };

    match TargetKind::detect(&live) {
        TargetKind::Missing => vec![SyncOutcome::Skipped {
            path: live,
            reason: "target does not exist".to_string(),
        }],
        TargetKind::File => vec![copy_one(&live, &backup_dir.join(&base_name))],
        TargetKind::Directory => copy_tree(&live, &backup_dir.join(&base_name)),
    }
}

/// Copy one tracked entry from `backup_dir` back to its live location.
///
/// The backup-side source is `backup_dir/<basename>`; a profile that was
/// never backed up for this entry yields a warning and the live target is
/// left untouched. Restores overwrite existing live files but never delete
/// files absent from the backup.
pub fn sync_from_backup(target: &str, backup_dir: &Path) -> Vec<SyncOutcome> {
    let live = expand_tilde(target);
    let Some(base_name) = live.file_name().map(ToOwned::to_owned) else {
        return vec![SyncOutcome::Failed {
            path: live,
            error: "target path has no base name".to_string(),
        }];
    };
    let source = backup_dir.join(&base_name);

    match TargetKind::detect(&source) {
        TargetKind::Missing => vec![SyncOutcome::Skipped {
            path: source,
            reason: format!("no backup exists for {}", live.display()),
        }],
        TargetKind::File => vec![copy_one(&source, &live)],
        TargetKind::Directory => copy_tree(&source, &live),
    }
}

/// Copy a single file, creating the destination's parent directory first.
fn copy_one(source: &Path, dest: &Path) -> SyncOutcome {
    match try_copy(source, dest) {
        Ok(()) => SyncOutcome::Copied {
            source: source.to_path_buf(),
            dest: dest.to_path_buf(),
        },
        Err(e) => SyncOutcome::Failed {
            path: source.to_path_buf(),
            error: format!("{e:#}"),
        },
    }
}

fn try_copy(source: &Path, dest: &Path) -> anyhow::Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    copy_preserving(source, dest)
}

/// Walk every non-directory entry under `src_root` and copy it to the
/// corresponding relative path under `dest_root`. Each file succeeds or
/// fails on its own.
fn copy_tree(src_root: &Path, dest_root: &Path) -> Vec<SyncOutcome> {
    let mut outcomes = Vec::new();

    for entry in WalkDir::new(src_root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(src_root).to_path_buf();
                outcomes.push(SyncOutcome::Failed {
                    path,
                    error: e.to_string(),
                });
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        // Walked paths always live under the walk root
        let Ok(rel) = entry.path().strip_prefix(src_root) else {
            continue;
        };

        outcomes.push(copy_one(entry.path(), &dest_root.join(rel)));
    }

    outcomes
}
