use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Lists every Markdown file below `root_dir`, sorted by path.
///
/// Files whose name starts with `_` are drafts and left out. A missing
/// directory yields an empty list.
pub fn list_markdown_files(root_dir: &Path) -> io::Result<Vec<PathBuf>> {
    if !root_dir.exists() {
        return Ok(vec![]);
    }

    let mut files = vec![];
    for entry in WalkDir::new(root_dir).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };
        if file_name.ends_with(".md") && !file_name.starts_with('_') {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
