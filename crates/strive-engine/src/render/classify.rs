use std::sync::LazyLock;

use regex::Regex;

use super::lists::ListKind;

static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s+(.*)$").expect("unordered item regex is valid"));
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s+(.*)$").expect("ordered item regex is valid"));
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").expect("heading regex is valid"));

/// Number of leading whitespace characters that make up one nesting level.
pub const INDENT_WIDTH: usize = 2;

/// What a line is, judged only from its own text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A `-`/`*` bullet or `N.` numbered item with its text after the marker.
    Item { kind: ListKind, content: &'a str },
    /// A `#` to `######` heading with its text after the hashes.
    Heading { level: u8, content: &'a str },
    /// Whitespace only.
    Blank,
    /// Anything else; rendered from the raw line including indentation.
    Text,
}

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently; nesting decisions are left to
/// the [`ListStack`](super::lists::ListStack).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// The line exactly as it appeared in the input.
    pub raw: &'a str,
    /// Leading whitespace count divided by [`INDENT_WIDTH`].
    pub level: usize,
    pub kind: LineKind<'a>,
}

/// Classifies lines for the rendering pass.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies `raw` into a [`LineClass`].
    ///
    /// Patterns are tried in priority order: unordered item, ordered item,
    /// heading. A line matching none of them is blank or plain text.
    pub fn classify<'a>(&self, raw: &'a str) -> LineClass<'a> {
        let (leading, body_start) = leading_whitespace(raw);
        let body = &raw[body_start..];
        let level = leading / INDENT_WIDTH;

        let kind = if let Some(caps) = UNORDERED_ITEM.captures(body) {
            LineKind::Item {
                kind: ListKind::Unordered,
                content: caps.get(1).map_or("", |m| m.as_str()),
            }
        } else if let Some(caps) = ORDERED_ITEM.captures(body) {
            LineKind::Item {
                kind: ListKind::Ordered,
                content: caps.get(1).map_or("", |m| m.as_str()),
            }
        } else if let Some(caps) = HEADING.captures(body) {
            LineKind::Heading {
                level: caps.get(1).map_or(1, |m| m.as_str().len()) as u8,
                content: caps.get(2).map_or("", |m| m.as_str()),
            }
        } else if raw.trim().is_empty() {
            LineKind::Blank
        } else {
            LineKind::Text
        };

        LineClass { raw, level, kind }
    }
}

/// Returns the number of leading whitespace characters and the byte index
/// where the rest of the line begins.
fn leading_whitespace(line: &str) -> (usize, usize) {
    let mut count = 0;
    for (idx, ch) in line.char_indices() {
        if !ch.is_whitespace() {
            return (count, idx);
        }
        count += 1;
    }
    (count, line.len())
}
