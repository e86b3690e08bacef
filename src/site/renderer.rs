use std::collections::BTreeMap;
use std::fmt::Write;
use std::io;
use std::io::ErrorKind;
use std::path::Path;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::config::{Defaults, Site};
use crate::content::{Event, Member, Post};
use crate::text_utils::{escape_html, format_date, format_day, month_abbr, month_name, month_title};

/// Raw page templates. Placeholders have the form `${name}` and are replaced
/// literally, nothing else is interpreted.
pub struct Templates {
    pub base: String,
    pub index: String,
    pub post: String,
    pub event: String,
    pub member: String,
    pub all_posts: String,
    pub all_events: String,
    pub all_members: String,
}

impl Templates {
    pub fn load(template_dir: &Path) -> io::Result<Templates> {
        let templates = Templates {
            base: read_template(template_dir, "base.html")?,
            index: read_template(template_dir, "index.html")?,
            post: read_template(template_dir, "post.html")?,
            event: read_template(template_dir, "event.html")?,
            member: read_template(template_dir, "member.html")?,
            all_posts: read_template(template_dir, "all-posts.html")?,
            all_events: read_template(template_dir, "all-events.html")?,
            all_members: read_template(template_dir, "all-members.html")?,
        };
        check_placeholder(&templates.base, "base.html", "page_content")?;

        Ok(templates)
    }
}

pub fn read_template(tpl_dir: &Path, file_name: &str) -> io::Result<String> {
    let full_path = tpl_dir.join(file_name);
    std::fs::read_to_string(&full_path).map_err(|e| {
        io::Error::new(e.kind(), format!("Error loading template {}: {}", full_path.display(), e))
    })
}

/// Replaces each `${key}` in the template with its value in a single scan.
/// Inserted values are never scanned again. Unknown placeholders are kept.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    lazy_static! {
        static ref PLACEHOLDER_REGEX: Regex = Regex::new(r"\$\{([A-Za-z0-9_]+)\}").unwrap();
    }
    PLACEHOLDER_REGEX.replace_all(template, |caps: &Captures| {
        match values.iter().find(|(key, _)| *key == &caps[1]) {
            Some((_, value)) => value.to_string(),
            None => caps[0].to_string(),
        }
    }).into_owned()
}

pub fn post_link(post: &Post) -> String {
    format!("posts/{}/{:02}/{}.html", post.year, post.month, post.slug)
}

pub fn event_link(event: &Event) -> String {
    format!("events/{}.html", event.slug)
}

pub fn member_link(member: &Member) -> String {
    format!("members/{}.html", member.github_username)
}

pub struct PageRenderer {
    templates: Templates,
    site: Site,
    defaults: Defaults,
    current_year: i32,
}

impl PageRenderer {
    pub fn new(templates: Templates, site: Site, defaults: Defaults, current_year: i32) -> PageRenderer {
        PageRenderer {
            templates,
            site,
            defaults,
            current_year,
        }
    }

    pub fn render_index(&self, posts: &[Post], events: &[Event], members: &[Member]) -> String {
        let mut posts_html = String::new();
        for post in posts.iter().take(self.defaults.recent_posts) {
            let _ = write!(&mut posts_html,
                           "<div class='post-preview'><h3><a href='{}'>{}</a></h3><p class='post-meta'>{:02}/{}</p><p>{}</p></div>",
                           post_link(post), escape_html(&post.title), post.month, post.year, escape_html(&post.description));
        }

        let mut events_html = String::new();
        for event in events.iter().filter(|e| e.is_upcoming).take(self.defaults.upcoming_events) {
            let link = event_link(event);
            let _ = write!(&mut events_html,
                           "<div class='event'><div class='event-date'><span class='event-day'>{}</span><span class='event-month'>{}</span></div>\
                           <div class='event-details'><h3><a href='{}'>{}</a></h3><p class='event-location'>{}</p><p>{}</p>\
                           <a href='{}' class='event-link'>Mais informações</a></div></div>",
                           format_day(&event.date), month_name(&event.date), link, escape_html(&event.title),
                           escape_html(&event.location), escape_html(&event.description), link);
        }

        let members_html = Self::render_member_cards(members);

        let content = fill(&self.templates.index, &[
            ("recent_posts", posts_html.as_str()),
            ("upcoming_events", events_html.as_str()),
            ("members", members_html.as_str()),
            ("event_totals", events.len().to_string().as_str()),
            ("post_totals", posts.len().to_string().as_str()),
            ("member_totals", members.len().to_string().as_str()),
        ]);

        self.apply_base(&content, &self.site.title, &self.site.description, "")
    }

    pub fn render_post(&self, post: &Post) -> String {
        let post_date = format!("{:02}/{}", post.month, post.year);
        let title = escape_html(&post.title);
        let content = fill(&self.templates.post, &[
            ("post_title", title.as_str()),
            ("post_content", post.content.as_str()),
            ("post_date", post_date.as_str()),
        ]);

        self.apply_base(&content, &self.page_title(&post.title), &post.description, "../../../")
    }

    pub fn render_all_posts(&self, posts: &[Post]) -> String {
        let mut by_year_month: BTreeMap<i32, BTreeMap<u32, Vec<&Post>>> = BTreeMap::new();
        for post in posts {
            by_year_month.entry(post.year).or_default()
                .entry(post.month).or_default()
                .push(post);
        }

        let mut posts_html = String::new();
        for (year, by_month) in by_year_month.iter().rev() {
            let _ = write!(&mut posts_html, "<div class='year-section'><h2>{}</h2>", year);
            for (month, month_posts) in by_month.iter().rev() {
                let _ = write!(&mut posts_html, "<div class='month-section'><h3>{}</h3><div class='posts-list'>", month_title(*month));
                for post in month_posts {
                    let read_time = if post.description.chars().count() > 100 { "5 min read" } else { "2 min read" };
                    let _ = write!(&mut posts_html,
                                   "<div class='post-item'><div class='post-date'><span class='post-day'>{:02}</span><span class='post-month'>{}</span></div>\
                                   <div class='post-content'><h4><a href='{}'>{}</a></h4><p class='post-excerpt'>{}</p>\
                                   <div class='post-meta'><span class='post-category'>Java</span><span>{}</span></div></div></div>",
                                   month, month_abbr(*month), post_link(post), escape_html(&post.title),
                                   escape_html(&post.description), read_time);
                }
                posts_html.push_str("</div></div>");
            }
            posts_html.push_str("</div>");
        }

        let content = fill(&self.templates.all_posts, &[
            ("all_posts", posts_html.as_str()),
            ("total_posts", posts.len().to_string().as_str()),
            ("total_years", by_year_month.len().to_string().as_str()),
        ]);

        self.apply_base(&content, &self.page_title("Todos os Posts"),
                        &format!("Lista completa de artigos e tutoriais da comunidade {}", self.site.name), "")
    }

    pub fn render_event(&self, event: &Event) -> String {
        let title = escape_html(&event.title);
        let location = escape_html(&event.location);
        let event_type = escape_html(&event.event_type);
        let content = fill(&self.templates.event, &[
            ("event_title", title.as_str()),
            ("event_content", event.content.as_str()),
            ("event_date", format_date(&event.date).as_str()),
            ("event_location", location.as_str()),
            ("event_type", event_type.as_str()),
        ]);

        self.apply_base(&content, &self.page_title(&event.title), &event.description, "../")
    }

    pub fn render_all_events(&self, events: &[Event]) -> String {
        let (upcoming, past): (Vec<&Event>, Vec<&Event>) = events.iter().partition(|e| e.is_upcoming);

        let mut events_html = String::new();
        for (heading, section) in [("Próximos Eventos", &upcoming), ("Eventos Passados", &past)] {
            if section.is_empty() {
                continue;
            }
            let _ = write!(&mut events_html, "<div class='events-section'><h2>{}</h2><div class='events-list'>", heading);
            for event in section {
                events_html.push_str(&Self::render_event_item(event));
            }
            events_html.push_str("</div></div>");
        }

        let content = fill(&self.templates.all_events, &[
            ("all_events", events_html.as_str()),
            ("total_events", events.len().to_string().as_str()),
            ("upcoming_count", upcoming.len().to_string().as_str()),
            ("past_count", past.len().to_string().as_str()),
        ]);

        self.apply_base(&content, &self.page_title("Todos os Eventos"),
                        &format!("Calendário completo de eventos, meetups e workshops da comunidade {}", self.site.name), "")
    }

    pub fn render_member(&self, member: &Member) -> String {
        let mut socials_html = String::new();
        for (label, url) in member.social_links.iter() {
            let _ = write!(&mut socials_html, "<a href='{}' target='_blank'>{}</a>", escape_html(url), escape_html(label));
        }

        let name = escape_html(&member.name);
        let avatar_url = escape_html(&member.avatar_url);
        let content = fill(&self.templates.member, &[
            ("member_name", name.as_str()),
            ("member_avatar_url", avatar_url.as_str()),
            ("member_content", member.content.as_str()),
            ("member_socials", socials_html.as_str()),
        ]);

        self.apply_base(&content, &self.page_title(&member.name), &member.github_username, "../")
    }

    pub fn render_all_members(&self, members: &[Member]) -> String {
        let members_html = Self::render_member_cards(members);
        let content = fill(&self.templates.all_members, &[("all_members", members_html.as_str())]);

        self.apply_base(&content, &self.page_title("Membros"),
                        &format!("Conheça os membros da comunidade {}", self.site.name), "")
    }

    fn render_member_cards(members: &[Member]) -> String {
        let mut html = String::new();
        for member in members {
            let name = escape_html(&member.name);
            let _ = write!(&mut html,
                           "<div class='member-card'><a href='{}'><img src='{}' alt='{}'><h3>{}</h3></a></div>",
                           member_link(member), escape_html(&member.avatar_url), name, name);
        }
        html
    }

    fn render_event_item(event: &Event) -> String {
        let link = event_link(event);
        let event_type = escape_html(&event.event_type);
        format!("<div class='event-item'><div class='event-date'><span class='event-day'>{}</span><span class='event-month'>{}</span>\
                 <span class='event-year'>{}</span></div><div class='event-content'><h3><a href='{}'>{}</a></h3>\
                 <p class='event-meta'><span class='event-location'>📍 {}</span><span class='event-type'>{} {}</span></p>\
                 <p class='event-description'>{}</p><a href='{}' class='btn btn-outline'>Ver Detalhes</a></div></div>",
                format_day(&event.date), month_name(&event.date), event.date.format("%Y"), link,
                escape_html(&event.title), escape_html(&event.location), event_type_icon(&event.event_type),
                event_type, escape_html(&event.description), link)
    }

    fn page_title(&self, title: &str) -> String {
        format!("{} - {}", title, self.site.name)
    }

    /// Wraps page content in the base template. `title` and `description` are raw text.
    fn apply_base(&self, content: &str, title: &str, description: &str, base_path: &str) -> String {
        let title = escape_html(title);
        let description = escape_html(description);
        fill(&self.templates.base, &[
            ("page_title", title.as_str()),
            ("page_description", description.as_str()),
            ("page_content", content),
            ("current_year", self.current_year.to_string().as_str()),
            ("base_path", base_path),
        ])
    }
}

pub fn event_type_icon(event_type: &str) -> &'static str {
    match event_type.to_lowercase().as_str() {
        "workshop" => "🔧",
        "meetup" => "👥",
        "conference" => "🎤",
        "hackathon" => "💻",
        _ => "📅",
    }
}

fn check_placeholder(template: &str, name: &str, key: &str) -> io::Result<()> {
    if template.contains(&format!("${{{}}}", key)) {
        Ok(())
    } else {
        Err(io::Error::new(ErrorKind::InvalidData, format!("Template {} has no ${{{}}} placeholder", name, key)))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::NaiveDate;

    use super::*;

    fn templates() -> Templates {
        Templates {
            base: "<title>${page_title}</title><meta content='${page_description}'><base href='${base_path}'>${page_content}<footer>${current_year}</footer>".to_string(),
            index: "${recent_posts}|${upcoming_events}|${members}|${post_totals}/${event_totals}/${member_totals}".to_string(),
            post: "<h1>${post_title}</h1><time>${post_date}</time>${post_content}".to_string(),
            event: "<h1>${event_title}</h1>${event_date}|${event_location}|${event_type}|${event_content}".to_string(),
            member: "<h1>${member_name}</h1><img src='${member_avatar_url}'>${member_socials}${member_content}".to_string(),
            all_posts: "${total_posts} posts in ${total_years} years${all_posts}".to_string(),
            all_events: "${upcoming_count}+${past_count}=${total_events}${all_events}".to_string(),
            all_members: "${all_members}".to_string(),
        }
    }

    fn renderer() -> PageRenderer {
        PageRenderer::new(templates(), Site::default(), Defaults::default(), 2025)
    }

    fn post(slug: &str, year: i32, month: u32) -> Post {
        Post {
            title: format!("Post <{}>", slug),
            slug: slug.to_string(),
            content: "<p>body</p>\n".to_string(),
            year,
            month,
            description: "Tom & Jerry".to_string(),
        }
    }

    fn event(slug: &str, day: u32, is_upcoming: bool) -> Event {
        Event {
            title: slug.to_string(),
            slug: slug.to_string(),
            content: "<p>event</p>\n".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
            location: "Luanda".to_string(),
            description: "desc".to_string(),
            event_type: "workshop".to_string(),
            is_upcoming,
        }
    }

    fn member(username: &str) -> Member {
        let mut social_links = BTreeMap::new();
        social_links.insert("twitter".to_string(), "https://x.com/u".to_string());
        Member {
            name: format!("{} O'Neil", username),
            github_username: username.to_string(),
            avatar_url: format!("https://github.com/{}.png", username),
            content: "<p>bio</p>\n".to_string(),
            social_links,
        }
    }

    #[test]
    fn test_fill() {
        assert_eq!(fill("${a} and ${b} and ${a}", &[("a", "1"), ("b", "2")]), "1 and 2 and 1");
        assert_eq!(fill("${unknown} $a {a}", &[("a", "1")]), "${unknown} $a {a}");
    }

    #[test]
    fn test_fill_does_not_rescan_values() {
        assert_eq!(fill("${a}|${b}", &[("a", "${b}"), ("b", "2")]), "${b}|2");
    }

    #[test]
    fn test_placeholders_in_user_text_kept_literal() {
        let mut p = post("hello", 2025, 3);
        p.description = "see ${page_content}".to_string();
        p.content = "<p>${base_path} and ${current_year}</p>\n".to_string();
        let html = renderer().render_post(&p);
        assert!(html.contains("<meta content='see ${page_content}'>"));
        assert!(html.contains("<p>${base_path} and ${current_year}</p>"));
        assert!(html.contains("<base href='../../../'>"));
    }

    #[test]
    fn test_links() {
        assert_eq!(post_link(&post("hello", 2025, 3)), "posts/2025/03/hello.html");
        assert_eq!(event_link(&event("meetup", 1, true)), "events/meetup.html");
        assert_eq!(member_link(&member("jdoe")), "members/jdoe.html");
    }

    #[test]
    fn test_render_post_escapes_once() {
        let html = renderer().render_post(&post("hello", 2025, 3));
        assert!(html.contains("<title>Post &lt;hello&gt; - Kambas do Java</title>"));
        assert!(html.contains("<h1>Post &lt;hello&gt;</h1>"));
        assert!(html.contains("content='Tom &amp; Jerry'"));
        assert!(!html.contains("&amp;amp;"));
        assert!(html.contains("<time>03/2025</time><p>body</p>"));
        assert!(html.contains("<base href='../../../'>"));
        assert!(html.contains("<footer>2025</footer>"));
    }

    #[test]
    fn test_render_index() {
        let posts = vec![post("a", 2025, 6), post("b", 2025, 5), post("c", 2025, 4), post("d", 2025, 3)];
        let events = vec![event("up1", 20, true), event("up2", 15, true), event("up3", 12, true), event("past", 1, false)];
        let members = vec![member("ana")];

        let html = renderer().render_index(&posts, &events, &members);
        assert!(html.contains("posts/2025/06/a.html"));
        assert!(html.contains("posts/2025/04/c.html"));
        assert!(!html.contains("posts/2025/03/d.html"));
        assert!(html.contains("events/up1.html"));
        assert!(html.contains("events/up2.html"));
        assert!(!html.contains("events/up3.html"));
        assert!(!html.contains("events/past.html"));
        assert!(html.contains("<h3>ana O&#39;Neil</h3>"));
        assert!(html.contains("|4/4/1"));
        assert!(html.contains("<title>Kambas do Java - Comunidade Java de Luanda</title>"));
    }

    #[test]
    fn test_render_all_posts_grouped() {
        let posts = vec![post("new", 2025, 6), post("mid", 2025, 1), post("old", 2024, 12)];
        let html = renderer().render_all_posts(&posts);
        assert!(html.contains("3 posts in 2 years"));

        let y2025 = html.find("<h2>2025</h2>").unwrap();
        let y2024 = html.find("<h2>2024</h2>").unwrap();
        let june = html.find("<h3>Junho</h3>").unwrap();
        let january = html.find("<h3>Janeiro</h3>").unwrap();
        assert!(y2025 < june && june < january && january < y2024);
        assert!(html.contains("<span class='post-month'>DEZ</span>"));
        assert!(html.contains("2 min read"));
    }

    #[test]
    fn test_render_all_events_sections() {
        let events = vec![event("soon", 20, true), event("gone", 1, false)];
        let html = renderer().render_all_events(&events);
        assert!(html.contains("1+1=2"));
        let upcoming = html.find("Próximos Eventos").unwrap();
        let past = html.find("Eventos Passados").unwrap();
        assert!(upcoming < html.find("events/soon.html").unwrap());
        assert!(past < html.find("events/gone.html").unwrap());
        assert!(upcoming < past);
        assert!(html.contains("🔧 workshop"));

        let html = renderer().render_all_events(&[event("soon", 20, true)]);
        assert!(!html.contains("Eventos Passados"));
    }

    #[test]
    fn test_render_event() {
        let html = renderer().render_event(&event("meetup", 7, true));
        assert!(html.contains("07/06/2025|Luanda|workshop|<p>event</p>"));
        assert!(html.contains("<base href='../'>"));
    }

    #[test]
    fn test_render_member() {
        let html = renderer().render_member(&member("ana"));
        assert!(html.contains("<h1>ana O&#39;Neil</h1>"));
        assert!(html.contains("<img src='https://github.com/ana.png'>"));
        assert!(html.contains("<a href='https://x.com/u' target='_blank'>twitter</a>"));
        assert!(html.contains("<p>bio</p>"));
        assert!(html.contains("content='ana'"));
    }

    #[test]
    fn test_render_all_members() {
        let html = renderer().render_all_members(&[member("ana"), member("rui")]);
        assert!(html.contains("<a href='members/ana.html'>"));
        assert!(html.contains("<a href='members/rui.html'>"));
        assert!(html.contains("<title>Membros - Kambas do Java</title>"));
    }

    #[test]
    fn test_event_type_icon() {
        assert_eq!(event_type_icon("Workshop"), "🔧");
        assert_eq!(event_type_icon("meetup"), "👥");
        assert_eq!(event_type_icon("conference"), "🎤");
        assert_eq!(event_type_icon("hackathon"), "💻");
        assert_eq!(event_type_icon("party"), "📅");
    }

    #[test]
    fn test_missing_content_placeholder() {
        assert!(check_placeholder("<html>${page_content}</html>", "base.html", "page_content").is_ok());
        let err = check_placeholder("<html></html>", "base.html", "page_content").unwrap_err();
        assert!(err.to_string().contains("${page_content}"));
    }
}
