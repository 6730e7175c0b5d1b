//! Profile switching.
//!
//! The step ordering is the correctness property of the whole tool:
//!
//! 1. back up the outgoing profile's live files,
//! 2. move the active-profile pointer,
//! 3. restore the incoming profile's backup.
//!
//! A crash after (1) is safe to retry; a crash after (2) leaves the pointer
//! already naming the new profile, recoverable with an explicit `restore`.
//! The pointer is never moved before the outgoing data is captured.

use anyhow::{Result, bail};

use crate::manifest::Manifest;
use crate::paths::Paths;
use crate::profiles::{backup_profile, restore_profile};
use crate::state::{resolve_active_profile, write_active};
use crate::sync::SyncOutcome;

/// What a switch did.
#[derive(Debug)]
pub enum SwitchReport {
    /// The requested profile was already active; no files were touched.
    AlreadyActive { name: String },
    /// A full backup-then-restore switch ran.
    Switched {
        from: String,
        to: String,
        backup: Vec<SyncOutcome>,
        restore: Vec<SyncOutcome>,
    },
}

/// Switch the active profile to `new_name`.
///
/// The target profile is validated before any side effect; requesting the
/// profile that is already active is a no-op.
pub fn switch_profile(paths: &Paths, manifest: &Manifest, new_name: &str) -> Result<SwitchReport> {
    if !manifest.contains(new_name) {
        bail!(
            "Profile '{}' not found in manifest.\nHint: Use 'profman list' to see available profiles.",
            new_name
        );
    }

    let current = resolve_active_profile(paths, manifest)?;
    if current == new_name {
        return Ok(SwitchReport::AlreadyActive { name: current });
    }

    let backup = backup_profile(paths, manifest, &current)?;
    write_active(paths, new_name)?;
    let restore = restore_profile(paths, manifest, new_name)?;

    Ok(SwitchReport::Switched {
        from: current,
        to: new_name.to_string(),
        backup,
        restore,
    })
}
