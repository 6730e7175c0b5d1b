//! Test utilities shared across test modules.

use crate::manifest::{FileEntry, Manifest, ProfileSpec};
use crate::paths::Paths;
use tempfile::TempDir;

/// Create a Paths struct rooted in a temporary directory, mirroring the real
/// ~/.profman layout.
pub fn setup_test_paths(temp_dir: &TempDir) -> Paths {
    Paths::at_root(temp_dir.path().join(".profman"))
}

/// Build an in-memory manifest from (profile name, targets) pairs, all using
/// the default internal backup location.
pub fn manifest_with(profiles: &[(&str, &[&str])]) -> Manifest {
    let mut manifest = Manifest::default();
    for (name, targets) in profiles {
        let spec = ProfileSpec {
            backup_location: None,
            files: targets
                .iter()
                .map(|t| FileEntry {
                    target: (*t).to_string(),
                })
                .collect(),
        };
        manifest.profiles.insert((*name).to_string(), spec);
    }
    manifest
}
