//! The declarative manifest: which profiles exist and which files each one tracks.
//!
//! The manifest is read once per invocation and never mutated. Its shape:
//!
//! ```json
//! {
//!   "profiles": {
//!     "work": {
//!       "backup_location": "~/backups/work",
//!       "files": [{ "target": "~/.config/app/settings.conf" }]
//!     }
//!   }
//! }
//! ```
//!
//! `backup_location` is optional; without it a profile's backup lives in the
//! internal store under the tool-data root.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Parsed manifest, mapping profile names to their specs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileSpec>,
}

/// One profile: an optional explicit backup directory and the tracked entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileSpec {
    /// Explicit backup directory (absolute or `~`-relative). Absent means the
    /// default internal store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_location: Option<String>,

    /// Tracked entries in declaration order. Entries are independent; order
    /// only fixes the copy sequence.
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

/// One tracked file or directory. Whether the target is a file or a directory
/// is decided by inspecting the filesystem at sync time, never declared here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    pub target: String,
}

impl Manifest {
    /// Load a manifest from a JSON file. Read or parse failures are fatal for
    /// the whole invocation - without a manifest there is nothing to operate on.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse manifest: {}", path.display()))
    }

    /// Look up a profile's spec, failing when the name is unknown.
    pub fn profile(&self, name: &str) -> Result<&ProfileSpec> {
        match self.profiles.get(name) {
            Some(spec) => Ok(spec),
            None => bail!(
                "Profile '{}' not found in manifest.\nHint: Use 'profman list' to see available profiles.",
                name
            ),
        }
    }

    /// Check whether a profile is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{
        "profiles": {
            "work": {
                "backup_location": "~/backups/work",
                "files": [
                    { "target": "~/.config/app/settings.conf" },
                    { "target": "~/.config/app/keybindings.conf" }
                ]
            },
            "home": {
                "files": [
                    { "target": "~/.config/app/data" }
                ]
            }
        }
    }"#;

    #[test]
    fn test_parse_manifest() {
        let manifest: Manifest = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(manifest.profiles.len(), 2);

        let work = manifest.profile("work").unwrap();
        assert_eq!(work.backup_location.as_deref(), Some("~/backups/work"));
        assert_eq!(work.files.len(), 2);
        // Entry order must survive parsing
        assert_eq!(work.files[0].target, "~/.config/app/settings.conf");
        assert_eq!(work.files[1].target, "~/.config/app/keybindings.conf");

        let home = manifest.profile("home").unwrap();
        assert!(home.backup_location.is_none());
        assert_eq!(home.files.len(), 1);
    }

    #[test]
    fn test_unknown_profile() {
        let manifest: Manifest = serde_json::from_str(SAMPLE).unwrap();
        assert!(manifest.profile("gaming").is_err());
        assert!(!manifest.contains("gaming"));
        assert!(manifest.contains("work"));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.json");
        assert!(Manifest::load(&path).is_err());
    }

    #[test]
    fn test_load_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("manifest.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Manifest::load(&path).is_err());
    }

    #[test]
    fn test_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("manifest.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert!(manifest.contains("work"));
        assert!(manifest.contains("home"));
    }

    #[test]
    fn test_empty_profiles_key_optional() {
        let manifest: Manifest = serde_json::from_str("{}").unwrap();
        assert!(manifest.profiles.is_empty());
    }
}
