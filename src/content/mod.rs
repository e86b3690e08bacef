use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

pub mod metadata;
pub mod markdown;
pub mod description;
pub mod post;
pub mod event;
pub mod member;
pub mod ordering;

/// Key to trimmed value, built from the metadata lines of a single document.
pub type Metadata = HashMap<String, String>;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Invalid post path {}: {reason}", path.display())]
    InvalidPostPath {
        path: PathBuf,
        reason: String,
    },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A blog post found at `posts/<year>/<month>/<name>.md`.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub title: String,
    pub slug: String,
    /// Rendered HTML
    pub content: String,
    pub year: i32,
    pub month: u32,
    pub description: String,
}

/// A community event found at `events/<name>.md`.
///
/// `is_upcoming` is computed when the event is built and never refreshed,
/// so it is only valid for the build that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub date: NaiveDate,
    pub location: String,
    pub description: String,
    pub event_type: String,
    pub is_upcoming: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub name: String,
    pub github_username: String,
    pub avatar_url: String,
    pub content: String,
    /// Platform label to profile URL
    pub social_links: BTreeMap<String, String>,
}

/// Returns the file name without its `.md` extension.
pub(crate) fn strip_md_extension(file_name: &str) -> &str {
    file_name.strip_suffix(".md").unwrap_or(file_name)
}
