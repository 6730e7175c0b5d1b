//! Profile-level synchronization: run the entry synchronizer over every
//! tracked entry of a profile, in manifest order, and aggregate the
//! per-item outcomes.

use anyhow::Result;

use crate::manifest::Manifest;
use crate::paths::Paths;
use crate::sync::{SyncOutcome, sync_from_backup, sync_to_backup};

/// Back up every tracked entry of `name` from its live location into the
/// profile's backup store.
///
/// Entry-level warnings and failures are collected in the returned outcomes;
/// they never abort the run. The `Err` path is reserved for an unknown
/// profile or an uncreatable backup directory.
pub fn backup_profile(paths: &Paths, manifest: &Manifest, name: &str) -> Result<Vec<SyncOutcome>> {
    let spec = manifest.profile(name)?;
    let backup_dir = paths.resolve_backup_dir(spec, name)?;

    let mut outcomes = Vec::new();
    for entry in &spec.files {
        outcomes.extend(sync_to_backup(&entry.target, &backup_dir));
    }
    Ok(outcomes)
}

/// Restore every tracked entry of `name` from its backup store back to the
/// live locations. Mirror of [`backup_profile`].
pub fn restore_profile(paths: &Paths, manifest: &Manifest, name: &str) -> Result<Vec<SyncOutcome>> {
    let spec = manifest.profile(name)?;
    let backup_dir = paths.resolve_backup_dir(spec, name)?;

    let mut outcomes = Vec::new();
    for entry in &spec.files {
        outcomes.extend(sync_from_backup(&entry.target, &backup_dir));
    }
    Ok(outcomes)
}
