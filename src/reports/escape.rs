//! Escaping utilities for safe report generation.
//!
//! Paths, summaries and descriptions come from the compared API documents
//! and may contain characters with meaning in Markdown. Embedding them
//! unescaped could turn a path segment into emphasis or break a list item.
//!
//! Two contexts matter for Markdown reports:
//! - list item text, where backslash escapes work ([`escape_markdown_inline`])
//! - indented code lines, where escapes render literally, so only line
//!   breaks are neutralized ([`flatten_line`])
//!
//! HTTP methods are written as code spans ([`code_span`]).

/// Escape a string for safe inclusion in Markdown inline content.
///
/// Escapes characters that have special meaning in Markdown and folds line
/// breaks into spaces.
///
/// # Examples
///
/// ```
/// use openapi_diff::reports::escape::escape_markdown_inline;
///
/// assert_eq!(escape_markdown_inline("**bold**"), "\\*\\*bold\\*\\*");
/// assert_eq!(escape_markdown_inline("/pets/{id}"), "/pets/{id}");
/// assert_eq!(escape_markdown_inline("/users/{user_id}"), "/users/{user\\_id}");
/// ```
pub fn escape_markdown_inline(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => result.push_str("\\\\"),
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
            // CR LF folds into the LF's space; a bare CR is a line ending too
            '\r' if chars.peek() != Some(&'\n') => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Fold line breaks into spaces so text stays on a single line.
///
/// ```
/// use openapi_diff::reports::escape::flatten_line;
///
/// assert_eq!(flatten_line("first\r\nsecond"), "first second");
/// assert_eq!(flatten_line("*kept*"), "*kept*");
/// ```
pub fn flatten_line(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\n' => result.push(' '),
            '\r' if chars.peek() != Some(&'\n') => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Helper to flatten an `Option<&str>`, returning "-" for None.
pub fn flatten_line_opt(s: Option<&str>) -> String {
    match s {
        Some(v) => flatten_line(v),
        None => "-".to_string(),
    }
}

/// Wrap text in a Markdown code span.
///
/// The fence is one backtick longer than the longest backtick run inside
/// the text, and the content is padded with spaces when it starts or ends
/// with a backtick.
///
/// ```
/// use openapi_diff::reports::escape::code_span;
///
/// assert_eq!(code_span("GET"), "`GET`");
/// assert_eq!(code_span("A`B"), "``A`B``");
/// assert_eq!(code_span("`X"), "`` `X ``");
/// ```
pub fn code_span(s: &str) -> String {
    let text = flatten_line(s);

    let mut longest = 0;
    let mut run = 0;
    for c in text.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }

    let fence = "`".repeat(longest + 1);
    if text.starts_with('`') || text.ends_with('`') {
        format!("{fence} {text} {fence}")
    } else {
        format!("{fence}{text}{fence}")
    }
}
