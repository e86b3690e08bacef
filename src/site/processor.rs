use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use rayon::prelude::*;
use spdlog::{debug, warn};

use crate::content::ordering::{sort_events, sort_posts};
use crate::content::{ContentError, Event, Member, Post, strip_md_extension};
use crate::site::discovery::list_markdown_files;

/// Builds every post below `posts_dir`, most recent first.
///
/// A post whose enclosing directories are not a valid year and month aborts
/// the whole build. Unreadable files are skipped.
pub fn process_posts(posts_dir: &Path) -> Result<Vec<Post>, ContentError> {
    let files = list_markdown_files(posts_dir)?;

    let posts = files.par_iter()
        .map(|path| -> Result<Option<Post>, ContentError> {
            let Some(md) = read_source(path) else {
                return Ok(None);
            };
            debug!("Processing post {}", path.display());
            Post::from_string(path, &md).map(Some)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut posts: Vec<Post> = posts.into_iter().flatten().collect();
    sort_posts(&mut posts);
    Ok(posts)
}

/// Builds every event below `events_dir`, upcoming ones first.
pub fn process_events(events_dir: &Path, today: NaiveDate) -> Result<Vec<Event>, ContentError> {
    let files = list_markdown_files(events_dir)?;

    let mut events: Vec<Event> = files.par_iter()
        .filter_map(|path| {
            let file_name = path.file_name()?.to_str()?;
            let md = read_source(path)?;
            debug!("Processing event {}", path.display());
            Some(Event::from_string(file_name, &md, today))
        })
        .collect();

    sort_events(&mut events);
    Ok(events)
}

/// Builds every member below `members_dir`, in file name order.
pub fn process_members(members_dir: &Path) -> Result<Vec<Member>, ContentError> {
    let files = list_markdown_files(members_dir)?;

    let members = files.par_iter()
        .filter_map(|path| {
            let file_name = path.file_name()?.to_str()?;
            let md = read_source(path)?;
            debug!("Processing member {}", path.display());
            Some(Member::from_string(strip_md_extension(file_name), &md))
        })
        .collect();

    Ok(members)
}

fn read_source(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(md) => Some(md),
        Err(e) => {
            warn!("Skipping {}: {}", path.display(), e);
            None
        }
    }
}
