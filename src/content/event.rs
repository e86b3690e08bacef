use chrono::{Days, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use spdlog::warn;

use crate::content::description::extract_description;
use crate::content::markdown::to_html;
use crate::content::metadata::read_comments;
use crate::content::{Event, strip_md_extension};
use crate::text_utils::slugify;

/// Example of event, stored in events/Workshop Spring.md
/// <!-- date: 2025-03-15 -->
/// <!-- location: Luanda, Angola -->
/// <!-- type: workshop -->
///
/// # Workshop de Spring Boot
impl Event {
    /// Builds an event, using `today` both as the fallback date and to decide
    /// whether the event is still upcoming.
    pub fn from_string(file_name: &str, md: &str, today: NaiveDate) -> Event {
        let metadata = read_comments(md);

        let title = strip_md_extension(file_name).to_string();
        let slug = slugify(&title);
        let content = to_html(remove_comments(md).trim());

        let date = match metadata.get("date") {
            Some(date_str) => parse_iso_date(date_str).unwrap_or_else(|| {
                warn!("Invalid date '{}' in event {}, using {}", date_str, file_name, today);
                today
            }),
            None => today,
        };

        let location = metadata.get("location").cloned().unwrap_or_else(|| "Online".to_string());
        let description = metadata.get("description").cloned().unwrap_or_else(|| extract_description(md));
        let event_type = metadata.get("type").cloned().unwrap_or_else(|| "meetup".to_string());

        Event {
            title,
            slug,
            content,
            date,
            location,
            description,
            event_type,
            is_upcoming: is_upcoming(date, today),
        }
    }
}

/// Accepts only `yyyy-MM-dd`. chrono alone also takes `2025-1-5` or `+2025-01-05`.
fn parse_iso_date(date_str: &str) -> Option<NaiveDate> {
    lazy_static! {
        static ref ISO_DATE_REGEX: Regex = Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap();
    }
    if !ISO_DATE_REGEX.is_match(date_str) {
        return None;
    }
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()
}

/// An event happening today still counts as upcoming.
fn is_upcoming(date: NaiveDate, today: NaiveDate) -> bool {
    match today.checked_sub_days(Days::new(1)) {
        Some(yesterday) => date > yesterday,
        None => true,
    }
}

/// Drops every `<!-- ... -->` block, including the ones spanning several lines.
fn remove_comments(md: &str) -> String {
    lazy_static! {
        static ref COMMENT_REGEX: Regex = Regex::new(r"(?s)<!--.*?-->").unwrap();
    }
    COMMENT_REGEX.replace_all(md, "").to_string()
}

#[cfg(test)]
mod tests {
    use crate::content::description::FALLBACK_DESCRIPTION;
    use crate::test_data::EVENT_DATA;

    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_string() {
        let today = day(2025, 3, 1);
        let event = Event::from_string("Workshop Spring Boot.md", EVENT_DATA, today);
        assert_eq!(event.title, "Workshop Spring Boot");
        assert_eq!(event.slug, "workshop-spring-boot");
        assert_eq!(event.date, day(2025, 3, 15));
        assert_eq!(event.location, "Luanda, Angola");
        assert_eq!(event.event_type, "workshop");
        assert!(event.is_upcoming);
        assert_eq!(event.content, r##"<h1>Workshop de Spring Boot</h1>
<p>Venha aprender **Spring Boot** connosco.</p>
<ul>
<li>Traga o seu portátil</li>
<li>Java 17+ instalado</li>
</ul>
"##);
    }

    #[test]
    fn test_description_from_raw_content() {
        // Metadata comments are part of the raw content the description is taken from
        let event = Event::from_string("x.md", EVENT_DATA, day(2025, 3, 1));
        assert_eq!(event.description, "<! date: 20250315");

        let event = Event::from_string("x.md", "# Title\nFirst *line*", day(2025, 3, 1));
        assert_eq!(event.description, "First line");

        let event = Event::from_string("x.md", "# Title", day(2025, 3, 1));
        assert_eq!(event.description, FALLBACK_DESCRIPTION);
    }

    #[test]
    fn test_description_metadata() {
        let md = "<!-- description: Encontro mensal -->\n# Meetup";
        let event = Event::from_string("meetup.md", md, day(2025, 3, 1));
        assert_eq!(event.description, "Encontro mensal");
    }

    #[test]
    fn test_defaults() {
        let today = day(2025, 6, 10);
        let event = Event::from_string("Java Meetup.md", "# Java Meetup\nbody", today);
        assert_eq!(event.date, today);
        assert_eq!(event.location, "Online");
        assert_eq!(event.event_type, "meetup");
        assert!(event.is_upcoming);
    }

    #[test]
    fn test_invalid_date_falls_back_to_today() {
        let today = day(2025, 6, 10);
        let event = Event::from_string("e.md", "<!-- date: 10/01/2025 -->\n# E", today);
        assert_eq!(event.date, today);
        let event = Event::from_string("e.md", "<!-- date: 2025-02-30 -->\n# E", today);
        assert_eq!(event.date, today);
        let event = Event::from_string("e.md", "<!-- date: 2025-1-5 -->\n# E", today);
        assert_eq!(event.date, today);
        assert!(event.is_upcoming);
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2025-01-05"), Some(day(2025, 1, 5)));
        assert_eq!(parse_iso_date("2024-02-29"), Some(day(2024, 2, 29)));
        assert_eq!(parse_iso_date("2025-1-5"), None);
        assert_eq!(parse_iso_date("2025 - 01 - 05"), None);
        assert_eq!(parse_iso_date("+2025-01-05"), None);
        assert_eq!(parse_iso_date("2025-13-01"), None);
        assert_eq!(parse_iso_date("20250105"), None);
    }

    #[test]
    fn test_is_upcoming() {
        let today = day(2025, 6, 10);
        assert!(is_upcoming(day(2025, 6, 10), today));
        assert!(is_upcoming(day(2025, 6, 11), today));
        assert!(!is_upcoming(day(2025, 6, 9), today));

        let event = Event::from_string("old.md", "<!-- date: 2024-01-01 -->\n# Old", today);
        assert!(!event.is_upcoming);
    }

    #[test]
    fn test_multiline_comments_removed() {
        let md = "<!-- date: 2025-01-01 -->\n# T\n<!--\nhidden\nnotes\n-->\nshown";
        let event = Event::from_string("t.md", md, day(2025, 1, 1));
        assert_eq!(event.content, "<h1>T</h1>\n<p>shown</p>\n");
    }
}
