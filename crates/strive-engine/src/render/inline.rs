//! # Inline Formatting
//!
//! Turns the text of one heading, list item, or plain line into markup.
//!
//! Passes run in a fixed order so no pass sees markup it could corrupt:
//!
//! 1. escape `& < > " '`
//! 2. `[text](url)` links
//! 3. bare URL auto-links, only in the text between pass-2 anchors
//! 4. `**bold**`
//! 5. `*italic*`

use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};
use url::Url;

static MARKDOWN_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\((https?://[^\s)]+|www\.[^\s)]+)\)")
        .expect("markdown link regex is valid")
});
static BARE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b((?:https?://)?(?:www\.)?[^\s]+\.[^\s]+)\b").expect("bare url regex is valid")
});
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold regex is valid"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\n]+)\*").expect("italic regex is valid"));

/// Applies every inline pass to `text`.
pub fn render_inline(text: &str) -> String {
    let escaped = html_escape::encode_quoted_attribute(text);
    let linked = link(&escaped);
    let bold = BOLD.replace_all(&linked, "<strong>${1}</strong>");
    ITALIC.replace_all(&bold, "<em>${1}</em>").into_owned()
}

/// Converts `**text**` spans only. Used for todo titles, which are already
/// plain text and never carry links.
pub fn format_bold(text: &str) -> String {
    BOLD.replace_all(text, "<strong>${1}</strong>").into_owned()
}

/// Builds an anchor that opens in a new tab.
pub fn anchor(href: &str, text: &str) -> String {
    format!(r#"<a href="{href}" target="_blank" rel="noopener">{text}</a>"#)
}

/// Runs the markdown-link pass, then auto-links whatever text lies between
/// the anchors it produced.
fn link(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut last = 0;

    for caps in MARKDOWN_LINK.captures_iter(escaped) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&autolink(&escaped[last..whole.start()]));
        out.push_str(&markdown_anchor(&caps));
        last = whole.end();
    }

    out.push_str(&autolink(&escaped[last..]));
    out
}

fn markdown_anchor(caps: &Captures<'_>) -> String {
    let text = caps.get(1).map_or("", |m| m.as_str());
    let url = caps.get(2).map_or("", |m| m.as_str());
    anchor(&with_scheme(url), text)
}

fn autolink(segment: &str) -> Cow<'_, str> {
    BARE_URL.replace_all(segment, |caps: &Captures<'_>| {
        let token = caps.get(1).map_or("", |m| m.as_str());
        let href = with_scheme(token);
        match display_host(&href) {
            Some(host) => anchor(&href, &host),
            None => token.to_string(),
        }
    })
}

/// Targets without an `http` prefix are assumed to be https.
fn with_scheme(url: &str) -> Cow<'_, str> {
    if url.starts_with("http") {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("https://{url}"))
    }
}

/// The hostname shown as link text, minus a leading `www.`.
///
/// `None` when the href is not a parseable URL with a host; the caller then
/// leaves the token as plain text.
fn display_host(href: &str) -> Option<String> {
    let parsed = Url::parse(href).ok()?;
    let host = parsed.host_str()?;
    if host.is_empty() {
        return None;
    }
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(render_inline("just words"), "just words");
    }

    #[test]
    fn escapes_metacharacters() {
        let html = render_inline(r#"a < b && c > "d" 'e'"#);
        assert!(html.contains("&lt;"));
        assert!(html.contains("&gt;"));
        assert!(html.contains("&amp;&amp;"));
        assert!(html.contains("&quot;d&quot;"));
        assert!(!html.contains('<'));
        assert!(!html.contains('\''));
    }

    #[test]
    fn markdown_link_keeps_label() {
        assert_eq!(
            render_inline("[Docs](https://docs.rs/regex)"),
            r#"<a href="https://docs.rs/regex" target="_blank" rel="noopener">Docs</a>"#
        );
    }

    #[test]
    fn markdown_link_to_www_gets_scheme() {
        assert_eq!(
            render_inline("[Site](www.example.org)"),
            r#"<a href="https://www.example.org" target="_blank" rel="noopener">Site</a>"#
        );
    }

    #[test]
    fn markdown_link_is_not_relinked() {
        let html = render_inline("see [the guide](https://example.com/guide) now");
        assert_eq!(html.matches("<a ").count(), 1);
        assert!(html.contains(">the guide</a>"));
    }

    #[rstest]
    #[case("https://example.com/page", "https://example.com/page", "example.com")]
    #[case("www.rust-lang.org", "https://www.rust-lang.org", "rust-lang.org")]
    #[case(
        "docs.python.org/3/tutorial",
        "https://docs.python.org/3/tutorial",
        "docs.python.org"
    )]
    fn bare_urls_show_hostname(#[case] input: &str, #[case] href: &str, #[case] text: &str) {
        assert_eq!(render_inline(input), anchor(href, text));
    }

    #[test]
    fn trailing_sentence_dot_is_not_part_of_url() {
        assert_eq!(
            render_inline("Visit example.com."),
            format!("Visit {}.", anchor("https://example.com", "example.com"))
        );
    }

    #[test]
    fn unparseable_url_stays_text() {
        // Starts with "http" so no scheme is added, and has no valid scheme
        assert_eq!(render_inline("httpfoo.bar"), "httpfoo.bar");
    }

    #[test]
    fn bold_and_italic() {
        assert_eq!(
            render_inline("**bold** and *italic*"),
            "<strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn unclosed_emphasis_is_literal() {
        assert_eq!(render_inline("**half done"), "**half done");
        assert_eq!(render_inline("*half done"), "*half done");
    }

    #[test]
    fn bold_only_formatter_ignores_italics() {
        assert_eq!(
            format_bold("**Build** a *small* app"),
            "<strong>Build</strong> a *small* app"
        );
    }
}
