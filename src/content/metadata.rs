use crate::content::Metadata;

/// Reads `@key value` lines from anywhere in the document.
///
/// Keys are kept as written (trimmed). The value is optional and defaults to an
/// empty string. When a key repeats, the first occurrence wins.
pub fn read_prefixed(md: &str) -> Metadata {
    let mut metadata = Metadata::new();

    for line in md.lines() {
        let Some((key, val)) = extract_prefixed(line) else {
            continue;
        };
        metadata.entry(key).or_insert_with(|| val.to_string());
    }

    metadata
}

/// Reads `<!-- key: value -->` lines until the first heading.
///
/// Keys are lower-cased. Lines that are not comments are skipped and anything
/// after the first line starting with `#` is ignored.
pub fn read_comments(md: &str) -> Metadata {
    let mut metadata = Metadata::new();

    for line in md.lines() {
        if line.starts_with('#') {
            break;
        }
        if let Some((key, val)) = extract_comment(line) {
            metadata.insert(key.to_lowercase(), val.to_string());
        }
    }

    metadata
}

fn extract_prefixed(line: &str) -> Option<(String, &str)> {
    let rest = line.strip_prefix('@')?;
    let (key, val) = rest.split_once(' ').unwrap_or((rest, ""));
    Some((key.replace('@', "").trim().to_string(), val.trim()))
}

fn extract_comment(line: &str) -> Option<(String, String)> {
    if !line.starts_with("<!--") || !line.contains(':') {
        return None;
    }

    let clean_line = line.replace("<!--", "").replace("-->", "");
    let (key, val) = clean_line.trim().split_once(':')?;
    Some((key.trim().to_string(), val.trim().to_string()))
}
