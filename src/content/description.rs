pub const FALLBACK_DESCRIPTION: &str = "Artigo da comunidade Kambas do Java";

const STRIPPED_SYMBOLS: [char; 5] = ['#', '*', '-', '_', '>'];

/// Summary taken from the first non-blank line that is not a heading, with
/// Markdown symbols removed.
///
/// Metadata lines are not treated specially: an `@key value` line can be picked.
pub fn extract_description(md: &str) -> String {
    md.lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.replace(STRIPPED_SYMBOLS, "").trim().to_string())
        .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_text_line() {
        assert_eq!(extract_description("\n\nHello *world*\n# Title"), "Hello world");
    }

    #[test]
    fn test_skips_headings() {
        assert_eq!(extract_description("# Title\n## Sub\n   \n> - quoted _item_ "), "quoted item");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(extract_description(""), FALLBACK_DESCRIPTION);
        assert_eq!(extract_description("# Only\n\n## Headings"), FALLBACK_DESCRIPTION);
    }

    #[test]
    fn test_metadata_line_is_picked() {
        assert_eq!(extract_description("@description Some-thing\nBody"), "@description Something");
    }

    #[test]
    fn test_comment_markers_are_stripped() {
        assert_eq!(extract_description("<!-- date: 2025-01-10 -->\n# T"), "<! date: 20250110");
    }
}
