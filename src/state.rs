//! The active-profile pointer: a plain-text file under the tool-data root
//! holding nothing but the name of the profile currently considered live.
//!
//! The pointer is the only persistent state this tool mutates. It is written
//! whole-file with no locking or atomicity; a garbled pointer is never an
//! error, it simply fails manifest validation on the next read and default
//! resolution takes over.

use anyhow::{Context, Result, bail};
use std::fs;

use crate::manifest::Manifest;
use crate::paths::Paths;

/// Read the stored pointer. Missing file, empty file, or undecodable content
/// all yield `None`.
pub fn read_active(paths: &Paths) -> Result<Option<String>> {
    if !paths.active_file.exists() {
        return Ok(None);
    }

    let bytes = fs::read(&paths.active_file).with_context(|| {
        format!(
            "Failed to read active profile file: {}",
            paths.active_file.display()
        )
    })?;

    let name = String::from_utf8_lossy(&bytes).trim().to_string();
    if name.is_empty() {
        Ok(None)
    } else {
        Ok(Some(name))
    }
}

/// Persist the pointer, creating the tool-data root on first use.
pub fn write_active(paths: &Paths, name: &str) -> Result<()> {
    fs::create_dir_all(&paths.base_dir).with_context(|| {
        format!("Failed to create data directory: {}", paths.base_dir.display())
    })?;

    fs::write(&paths.active_file, name).with_context(|| {
        format!(
            "Failed to write active profile file: {}",
            paths.active_file.display()
        )
    })
}

/// Determine the active profile.
///
/// The stored pointer wins when it names a profile that exists in the current
/// manifest. Otherwise the profile named `default` is preferred, then the
/// first profile in manifest order. A manifest with no profiles at all is
/// fatal - there is nothing to select.
pub fn resolve_active_profile(paths: &Paths, manifest: &Manifest) -> Result<String> {
    if let Some(stored) = read_active(paths)?
        && manifest.contains(&stored)
    {
        return Ok(stored);
    }

    if manifest.contains("default") {
        return Ok("default".to_string());
    }

    match manifest.profiles.keys().next() {
        Some(first) => Ok(first.clone()),
        None => bail!("No profiles defined in manifest."),
    }
}
