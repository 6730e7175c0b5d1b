//! Filesystem helpers shared by the sync engine.

use anyhow::{Context, Result};
use filetime::FileTime;
use std::fs;
use std::path::Path;

/// Copy a single file, carrying over its modification time.
///
/// Permission bits come along with `fs::copy` on Unix; the mtime has to be
/// re-applied explicitly so a backup/restore round trip leaves timestamps
/// intact.
pub fn copy_preserving(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst)
        .with_context(|| format!("Failed to copy {} -> {}", src.display(), dst.display()))?;

    let metadata = fs::metadata(src)
        .with_context(|| format!("Failed to read metadata: {}", src.display()))?;
    let mtime = FileTime::from_last_modification_time(&metadata);

    filetime::set_file_mtime(dst, mtime)
        .with_context(|| format!("Failed to set modification time: {}", dst.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_preserves_content_and_mtime() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("src.conf");
        let dst = temp_dir.path().join("dst.conf");

        fs::write(&src, "key = value\n").unwrap();
        let stamp = FileTime::from_unix_time(1_600_000_000, 0);
        filetime::set_file_mtime(&src, stamp).unwrap();

        copy_preserving(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), "key = value\n");
        let dst_mtime = FileTime::from_last_modification_time(&fs::metadata(&dst).unwrap());
        assert_eq!(dst_mtime, stamp);
    }

    #[test]
    fn test_copy_missing_source_fails() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("missing");
        let dst = temp_dir.path().join("dst");
        assert!(copy_preserving(&src, &dst).is_err());
    }
}
