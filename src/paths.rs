use anyhow::{Context, Result};
use directories::BaseDirs;
use std::path::PathBuf;

use crate::manifest::ProfileSpec;

/// All computed paths used by profman
#[derive(Debug, Clone)]
pub struct Paths {
    /// Tool-data root: ~/.profman, or %APPDATA%\profman on Windows
    pub base_dir: PathBuf,
    /// ~/.profman/profiles - default internal backup store
    pub profiles_dir: PathBuf,
    /// ~/.profman/active_profile - plain-text active profile pointer
    pub active_file: PathBuf,
}

impl Paths {
    pub fn new() -> Result<Self> {
        let base_dirs = BaseDirs::new().context("Failed to determine home directory")?;

        let base_dir = if cfg!(windows) {
            base_dirs.data_dir().join("profman")
        } else {
            base_dirs.home_dir().join(".profman")
        };

        Ok(Self::at_root(base_dir))
    }

    /// Build the path set for an explicit root. Tests inject a temp dir here.
    pub fn at_root(base_dir: PathBuf) -> Self {
        let profiles_dir = base_dir.join("profiles");
        let active_file = base_dir.join("active_profile");

        Self {
            base_dir,
            profiles_dir,
            active_file,
        }
    }

    /// Default backup directory for a profile in the internal store
    pub fn profile_backup_dir(&self, name: &str) -> PathBuf {
        self.profiles_dir.join(name)
    }

    /// Resolve the backup directory for a profile: the manifest's explicit
    /// `backup_location` (tilde-expanded, used verbatim) when declared,
    /// otherwise the default internal location. Ensures the directory exists
    /// before returning; creation failure aborts the operation in progress.
    pub fn resolve_backup_dir(&self, spec: &ProfileSpec, name: &str) -> Result<PathBuf> {
        let backup_dir = match &spec.backup_location {
            Some(location) => expand_tilde(location),
            None => self.profile_backup_dir(name),
        };

        std::fs::create_dir_all(&backup_dir).with_context(|| {
            format!("Failed to create backup directory: {}", backup_dir.display())
        })?;

        Ok(backup_dir)
    }
}

/// Expand a leading `~` to the user's home directory. Paths without one come
/// back unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}
