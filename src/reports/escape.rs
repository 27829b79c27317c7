//! Escaping utilities for report generation.
//!
//! Catalogue text, organisation names and report titles can come from
//! user-supplied files. They are escaped before being embedded in Markdown
//! or CSV so that a stray `|` or quote cannot corrupt a table.

/// Escape a string for safe inclusion in Markdown table cells.
///
/// Markdown tables use `|` as column separators and can be broken
/// by unescaped pipe characters. Newlines are flattened to spaces.
///
/// # Examples
///
/// ```
/// use dsar_readiness::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("a | b"), "a \\| b");
/// assert_eq!(escape_markdown_table("line1\nline2"), "line1 line2");
/// assert_eq!(escape_markdown_table("`code`"), "\\`code\\`");
/// ```
pub fn escape_markdown_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '\n' => result.push(' '),
            '\r' => {}
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for safe inclusion in Markdown inline content.
///
/// # Examples
///
/// ```
/// use dsar_readiness::reports::escape::escape_markdown_inline;
///
/// assert_eq!(escape_markdown_inline("**bold**"), "\\*\\*bold\\*\\*");
/// assert_eq!(escape_markdown_inline("[link](url)"), "\\[link\\](url)");
/// ```
pub fn escape_markdown_inline(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' => result.push_str("\\*"),
            '_' => result.push_str("\\_"),
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '#' => result.push_str("\\#"),
            '!' => result.push_str("\\!"),
            '~' => result.push_str("\\~"),
            '|' => result.push_str("\\|"),
            '<' => result.push_str("\\<"),
            '>' => result.push_str("\\>"),
            '\n' => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Helper to escape an `Option<&str>` for Markdown tables, returning "-" for None.
pub fn escape_md_opt(s: Option<&str>) -> String {
    s.map_or_else(|| "-".to_string(), escape_markdown_table)
}

/// Quote a CSV field per RFC 4180.
///
/// Every field is wrapped in double quotes with embedded quotes doubled.
/// Newlines are flattened so each record stays on one line.
///
/// # Examples
///
/// ```
/// use dsar_readiness::reports::escape::csv_field;
///
/// assert_eq!(csv_field("plain"), "\"plain\"");
/// assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
/// ```
pub fn csv_field(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\"\""),
            '\n' => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result.push('"');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markdown_table_malicious() {
        let injected = "Owner | [click](http://evil)\n| --- |";
        let escaped = escape_markdown_table(injected);
        assert!(!escaped.contains('\n'));
        assert!(escaped.contains("\\|"));
        assert!(escaped.contains("\\["));
    }

    #[test]
    fn test_escape_markdown_inline() {
        assert_eq!(escape_markdown_inline("# Heading"), "\\# Heading");
        assert_eq!(escape_markdown_inline("a_b"), "a\\_b");
        assert_eq!(escape_markdown_inline("<b>"), "\\<b\\>");
    }

    #[test]
    fn test_escape_md_opt() {
        assert_eq!(escape_md_opt(None), "-");
        assert_eq!(escape_md_opt(Some("x|y")), "x\\|y");
    }

    #[test]
    fn test_csv_field_flattens_newlines() {
        assert_eq!(csv_field("one\r\ntwo"), "\"one two\"");
        assert_eq!(csv_field(""), "\"\"");
    }

    #[test]
    fn test_unicode_preservation() {
        assert_eq!(escape_markdown_table("Moderate (1–5 days)"), "Moderate (1–5 days)");
        assert_eq!(csv_field("§1 Governance"), "\"§1 Governance\"");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(escape_markdown_table(""), "");
        assert_eq!(escape_markdown_inline(""), "");
    }
}
