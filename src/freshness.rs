use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::SystemTime;

use crate::error::{Error, Result};
use crate::post::output_name;

/// Whether the page for `record_name` has to be generated: its output file is
/// missing, or the record was modified strictly after the output was written.
///
/// Timestamps are compared as reported by the filesystem, without any
/// allowance for clock skew or coarse timestamp resolution.
pub fn is_new_post(post_output_dir: &Path, record_name: &str, record_modified: SystemTime) -> Result<bool> {
    let output_path = post_output_dir.join(output_name(record_name));
    let metadata = match fs::metadata(&output_path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(true),
        Err(e) => return Err(Error::io(&output_path, e)),
    };

    let output_modified = metadata.modified().map_err(|e| Error::io(&output_path, e))?;
    Ok(record_modified > output_modified)
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::time::Duration;

    use tempfile::TempDir;

    use super::*;

    fn output_written_at(dir: &TempDir, name: &str, at: SystemTime) {
        let path = dir.path().join(name);
        let file = File::create(&path).unwrap();
        file.set_modified(at).unwrap();
    }

    #[test]
    fn test_missing_output_is_new() {
        let dir = TempDir::new().unwrap();
        assert!(is_new_post(dir.path(), "2024-01-10-foo.ini", SystemTime::UNIX_EPOCH).unwrap());
    }

    #[test]
    fn test_newer_record_is_new() {
        let dir = TempDir::new().unwrap();
        let written = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        output_written_at(&dir, "2024-01-10-foo.html", written);

        let record_modified = written + Duration::from_secs(1);
        assert!(is_new_post(dir.path(), "2024-01-10-foo.ini", record_modified).unwrap());
    }

    #[test]
    fn test_equal_or_older_record_is_not_new() {
        let dir = TempDir::new().unwrap();
        let written = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        output_written_at(&dir, "2024-01-10-foo.html", written);

        assert!(!is_new_post(dir.path(), "2024-01-10-foo.ini", written).unwrap());
        let older = written - Duration::from_secs(60);
        assert!(!is_new_post(dir.path(), "2024-01-10-foo.ini", older).unwrap());
    }
}
