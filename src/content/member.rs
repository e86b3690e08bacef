use std::collections::BTreeMap;

use crate::content::Member;
use crate::content::markdown::to_html;
use crate::content::metadata::read_prefixed;

/// Example of member, stored in members/anasilva.md
/// @name Ana Silva
/// @socials twitter:https://x.com/anasilva, linkedin:https://linkedin.com/in/anasilva
/// @avatar-url https://example.com/ana.png
impl Member {
    pub fn from_string(github_username: &str, md: &str) -> Member {
        let metadata = read_prefixed(md);

        let name = metadata.get("name").cloned().unwrap_or_else(|| github_username.to_string());
        let socials = metadata.get("socials").map(String::as_str).unwrap_or("");
        let avatar_url = metadata.get("avatar-url").cloned()
            .unwrap_or_else(|| format!("https://github.com/{}.png", github_username));

        Member {
            name,
            github_username: github_username.to_string(),
            avatar_url,
            content: to_html(&strip_metadata(md)),
            social_links: parse_social_links(socials),
        }
    }
}

/// Drops `@` lines but keeps blank ones, so `- a\n\n- b` still renders as two lists.
fn strip_metadata(md: &str) -> String {
    md.lines()
        .filter(|line| !line.trim_start().starts_with('@'))
        .fold(String::new(), |mut content, line| {
            content.push_str(line);
            content.push('\n');
            content
        })
}

/// Parses `label:url` pairs separated by commas. Pairs without a colon are dropped.
fn parse_social_links(socials: &str) -> BTreeMap<String, String> {
    socials.split(',')
        .filter_map(|pair| pair.split_once(':'))
        .map(|(label, url)| (label.trim().to_string(), url.trim().to_string()))
        .collect()
}
