use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

use crate::error::{Error, Result};
use crate::post::RECORD_EXTENSION;

/// Record files found in the posts directory.
pub struct PostList {
    pub root_dir: PathBuf,
}

impl PostList {
    pub fn new(root_dir: PathBuf) -> PostList {
        PostList { root_dir }
    }

    /// Every record file name paired with its last-modified time, sorted by
    /// file name so that scans are reproducible across platforms.
    pub fn retrieve_files(&self) -> Result<Vec<(String, SystemTime)>> {
        let mut posts = vec![];
        let entries = fs::read_dir(&self.root_dir).map_err(|e| Error::io(&self.root_dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(&self.root_dir, e))?;
            let path = entry.path();
            // follows symlinks, unlike DirEntry::metadata
            let metadata = fs::metadata(&path).map_err(|e| Error::io(&path, e))?;
            if !metadata.is_file() {
                continue;
            }

            let Some(file_name) = entry.file_name().to_str().map(|s| s.to_string()) else {
                continue;
            };
            if !file_name.ends_with(RECORD_EXTENSION) {
                continue;
            }

            let modified = metadata.modified().map_err(|e| Error::io(&path, e))?;
            posts.push((file_name, modified));
        }

        posts.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(posts)
    }

    pub fn retrieve_names(&self) -> Result<Vec<String>> {
        Ok(self.retrieve_files()?
            .into_iter()
            .map(|(name, _)| name)
            .collect())
    }

    /// Record file names starting with `month`, newest first.
    pub fn retrieve_month(&self, month: &str) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.retrieve_names()?
            .into_iter()
            .filter(|name| name.starts_with(month))
            .collect();
        names.sort_by(|a, b| b.cmp(a));
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn post_dir(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for file in files {
            fs::write(dir.path().join(file), "").unwrap();
        }
        dir
    }

    #[test]
    fn test_retrieve_files() {
        let dir = post_dir(&["2024-01-10-foo.ini", "2023-12-01-bar.ini", "notes.txt", ".DS_Store"]);
        fs::create_dir(dir.path().join("drafts.ini")).unwrap();

        let post_list = PostList::new(dir.path().to_path_buf());
        let names = post_list.retrieve_names().unwrap();
        assert_eq!(names, ["2023-12-01-bar.ini", "2024-01-10-foo.ini"]);
    }

    #[test]
    fn test_retrieve_month() {
        let dir = post_dir(&[
            "2024-02-05-a.ini",
            "2024-03-01-b.ini",
            "2024-03-20-c.ini",
            "2024-03-07-d.ini",
        ]);

        let post_list = PostList::new(dir.path().to_path_buf());
        assert_eq!(post_list.retrieve_month("2024-03").unwrap(),
                   ["2024-03-20-c.ini", "2024-03-07-d.ini", "2024-03-01-b.ini"]);
        assert_eq!(post_list.retrieve_month("2024-02").unwrap(), ["2024-02-05-a.ini"]);
        assert!(post_list.retrieve_month("2024-04").unwrap().is_empty());
    }

    #[test]
    fn test_missing_dir() {
        let post_list = PostList::new(PathBuf::from("/does/not/exist/posts"));
        assert!(matches!(post_list.retrieve_files(), Err(Error::NotFound { .. })));
    }
}
