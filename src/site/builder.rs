use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use rayon::prelude::*;
use spdlog::info;

use crate::config::Config;
use crate::site::processor::{process_events, process_members, process_posts};
use crate::site::renderer::{PageRenderer, Templates, event_link, member_link, post_link};
use crate::site::writer::{clear_site_dir, copy_assets, write_page};

#[derive(Debug, Clone, PartialEq)]
pub struct BuildSummary {
    pub posts: usize,
    pub events: usize,
    pub members: usize,
    pub assets: usize,
    pub elapsed: Duration,
}

/// Regenerates the whole site for the local current date.
pub fn build_site(config: &Config) -> Result<BuildSummary> {
    build_site_at(config, Local::now().date_naive())
}

/// Regenerates the whole site. `today` decides which events are upcoming.
///
/// Content is read and validated before the output directory is touched, so
/// a fatal content error leaves the previous site in place.
pub fn build_site_at(config: &Config, today: NaiveDate) -> Result<BuildSummary> {
    let start = Instant::now();
    let paths = &config.paths;

    let templates = Templates::load(&paths.template_dir)
        .with_context(|| format!("Error loading templates from {}", paths.template_dir.display()))?;

    let posts = process_posts(&paths.posts_dir).context("Error processing posts")?;
    let events = process_events(&paths.events_dir, today).context("Error processing events")?;
    let members = process_members(&paths.members_dir).context("Error processing members")?;

    let renderer = PageRenderer::new(templates, config.site.clone(), config.defaults.clone(), today.year());
    let site_dir = &paths.site_dir;

    clear_site_dir(site_dir)
        .with_context(|| format!("Error clearing {}", site_dir.display()))?;

    posts.par_iter()
        .try_for_each(|post| write_page(site_dir, &post_link(post), &renderer.render_post(post)))
        .context("Error writing posts")?;
    events.par_iter()
        .try_for_each(|event| write_page(site_dir, &event_link(event), &renderer.render_event(event)))
        .context("Error writing events")?;
    members.par_iter()
        .try_for_each(|member| write_page(site_dir, &member_link(member), &renderer.render_member(member)))
        .context("Error writing members")?;

    write_page(site_dir, "index.html", &renderer.render_index(&posts, &events, &members))?;
    info!("Index generated");
    write_page(site_dir, "all-posts.html", &renderer.render_all_posts(&posts))?;
    info!("All posts page generated");
    write_page(site_dir, "all-events.html", &renderer.render_all_events(&events))?;
    info!("All events page generated");
    write_page(site_dir, "all-members.html", &renderer.render_all_members(&members))?;
    info!("All members page generated");

    let assets = copy_assets(&paths.assets_dir, &site_dir.join("assets"))
        .with_context(|| format!("Error copying assets from {}", paths.assets_dir.display()))?;
    if assets > 0 {
        info!("{} assets copied", assets);
    }

    let summary = BuildSummary {
        posts: posts.len(),
        events: events.len(),
        members: members.len(),
        assets,
        elapsed: start.elapsed(),
    };

    info!("Site generated in {}", site_dir.display());
    info!("Posts: {}, events: {}, members: {}", summary.posts, summary.events, summary.members);
    info!("Total time: {} ms", summary.elapsed.as_millis());

    Ok(summary)
}
