use std::fs;
use std::path::Path;

use spdlog::debug;
use walkdir::WalkDir;

use crate::config::Paths;
use crate::error::{Error, Result};

pub const INDEX_FILE: &str = "index.html";

/// Creates the source and output directories that are missing. Existing
/// directories are left alone.
pub fn create_output_dirs(paths: &Paths) -> Result<()> {
    for dir in [
        paths.posts_dir.clone(),
        paths.assets_dir.clone(),
        paths.post_output_dir(),
        paths.tags_output_dir(),
        paths.assets_output_dir(),
    ] {
        create_dir_if_needed(&dir)?;
    }
    Ok(())
}

fn create_dir_if_needed(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}

/// Replaces `dst` with a full copy of `src`. Whatever was in `dst` before is
/// gone, including files that no longer exist in `src`. Symlinks are copied
/// as the files and directories they point to.
pub fn copy_assets(src: &Path, dst: &Path) -> Result<()> {
    let _ = fs::remove_dir_all(dst);
    create_dir_if_needed(dst)?;

    for entry in WalkDir::new(src).follow_links(true).min_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            Error::io(&path, e.into())
        })?;
        let relative = match entry.path().strip_prefix(src) {
            Ok(relative) => relative,
            Err(_) => continue,
        };
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            create_dir_if_needed(&target)?;
        } else {
            debug!("Copying asset {}", relative.display());
            fs::copy(entry.path(), &target).map_err(|e| Error::io(entry.path(), e))?;
        }
    }

    Ok(())
}

/// Writes `html` to `path`, replacing any previous content.
pub fn write_page(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).map_err(|e| Error::io(path, e))
}

/// Makes the overview of `month` the landing page of the site.
pub fn copy_month_to_index(output_dir: &Path, month: &str) -> Result<()> {
    let month_page = output_dir.join(format!("{}.html", month));
    fs::copy(&month_page, output_dir.join(INDEX_FILE)).map_err(|e| Error::io(&month_page, e))?;
    Ok(())
}
