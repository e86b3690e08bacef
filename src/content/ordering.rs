use std::cmp::Ordering;

use crate::content::{Event, Post};

/// Most recent first, by year then month. Posts from the same month keep
/// their discovery order.
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by(compare_posts);
}

/// Upcoming events before past ones, latest date first inside each group.
pub fn sort_events(events: &mut [Event]) {
    events.sort_by(compare_events);
}

fn compare_posts(a: &Post, b: &Post) -> Ordering {
    b.year.cmp(&a.year)
        .then_with(|| b.month.cmp(&a.month))
}

fn compare_events(a: &Event, b: &Event) -> Ordering {
    b.is_upcoming.cmp(&a.is_upcoming)
        .then_with(|| b.date.cmp(&a.date))
}
