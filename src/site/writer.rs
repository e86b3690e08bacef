use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

/// Removes the output directory with everything in it and creates it again, empty.
pub fn clear_site_dir(site_dir: &Path) -> io::Result<()> {
    if site_dir.exists() {
        fs::remove_dir_all(site_dir)?;
    }
    fs::create_dir_all(site_dir)
}

/// Writes `html` to `site_dir/relative_path`, creating the parent directories.
pub fn write_page(site_dir: &Path, relative_path: &str, html: &str) -> io::Result<()> {
    let full_path = site_dir.join(relative_path);
    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(full_path, html)
}

/// Copies the assets tree into `target_dir`, returning the number of files copied.
pub fn copy_assets(assets_dir: &Path, target_dir: &Path) -> io::Result<usize> {
    if !assets_dir.exists() {
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(assets_dir) {
        let entry = entry.map_err(io::Error::from)?;
        let relative = entry.path().strip_prefix(assets_dir)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let target = target_dir.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}
