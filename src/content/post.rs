use std::path::Path;

use crate::content::{ContentError, Post, strip_md_extension};
use crate::content::markdown::to_html;
use crate::content::metadata::read_prefixed;
use crate::text_utils::slugify;

/// Example of post, stored in posts/2025/03/java-21.md
/// @title Java 21: O que há de novo
/// @description Um resumo das novidades do Java 21
///
/// # Java 21
impl Post {
    pub fn from_string(file_path: &Path, md: &str) -> Result<Post, ContentError> {
        let metadata = read_prefixed(md);
        let (year, month) = Self::extract_year_month(file_path)?;

        let file_name = match file_path.file_name().and_then(|f| f.to_str()) {
            Some(name) => strip_md_extension(name),
            None => return Err(invalid_path(file_path, "missing file name")),
        };

        let title = metadata.get("title").cloned().unwrap_or_else(|| file_name.to_string());
        let description = metadata.get("description").cloned().unwrap_or_default();

        Ok(Post {
            title,
            slug: slugify(file_name),
            content: to_html(md),
            year,
            month,
            description,
        })
    }

    /// Year and month come from the two directories enclosing the file.
    fn extract_year_month(file_path: &Path) -> Result<(i32, u32), ContentError> {
        let month_dir = file_path.parent();
        let year_dir = month_dir.and_then(Path::parent);

        let dir_name = |dir: Option<&Path>| -> Result<String, ContentError> {
            dir.and_then(|d| d.file_name())
                .and_then(|d| d.to_str())
                .map(|d| d.to_string())
                .ok_or_else(|| invalid_path(file_path, "expected posts/<year>/<month>/<name>.md"))
        };

        let year_name = dir_name(year_dir)?;
        let month_name = dir_name(month_dir)?;

        let year = year_name.parse::<i32>()
            .map_err(|_| invalid_path(file_path, &format!("year directory '{}' is not a number", year_name)))?;
        let month = month_name.parse::<u32>()
            .map_err(|_| invalid_path(file_path, &format!("month directory '{}' is not a number", month_name)))?;

        if !(1..=12).contains(&month) {
            return Err(invalid_path(file_path, &format!("month {} is out of range", month)));
        }

        Ok((year, month))
    }
}

fn invalid_path(file_path: &Path, reason: &str) -> ContentError {
    ContentError::InvalidPostPath {
        path: file_path.to_path_buf(),
        reason: reason.to_string(),
    }
}
