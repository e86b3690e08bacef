use crate::text_utils::escape_html;

/// Line-oriented Markdown subset: `#`, `##` and `###` headings, `- ` list
/// items, `> ` quotes and paragraphs. Lines starting with `@` are metadata
/// and never reach the output. Inline formatting is not interpreted.
///
/// Every emitted block is terminated by a newline.
pub fn to_html(md: &str) -> String {
    let (mut blocks, in_list) = md.lines().fold((Vec::new(), false), |(mut blocks, in_list), line| {
        let in_list = render_line(line, in_list, &mut blocks);
        (blocks, in_list)
    });

    if in_list {
        blocks.push("</ul>".to_string());
    }

    blocks.iter().fold(String::new(), |mut html, block| {
        html.push_str(block);
        html.push('\n');
        html
    })
}

/// Pushes the blocks produced by `line` and returns whether a list is open afterwards.
fn render_line(line: &str, in_list: bool, blocks: &mut Vec<String>) -> bool {
    if line.starts_with('@') {
        return in_list;
    }

    if let Some(item) = line.strip_prefix("- ") {
        if !in_list {
            blocks.push("<ul>".to_string());
        }
        blocks.push(wrap("li", item));
        return true;
    }

    if in_list {
        blocks.push("</ul>".to_string());
    }

    if let Some(block) = render_block(line) {
        blocks.push(block);
    }
    false
}

fn render_block(line: &str) -> Option<String> {
    if let Some(text) = line.strip_prefix("### ") {
        Some(wrap("h3", text))
    } else if let Some(text) = line.strip_prefix("## ") {
        Some(wrap("h2", text))
    } else if let Some(text) = line.strip_prefix("# ") {
        Some(wrap("h1", text))
    } else if let Some(text) = line.strip_prefix("> ") {
        Some(wrap("blockquote", text))
    } else if line.trim().is_empty() {
        None
    } else {
        Some(wrap("p", line))
    }
}

fn wrap(tag: &str, text: &str) -> String {
    format!("<{tag}>{}</{tag}>", escape_html(text))
}
