//! # Markdown Rendering
//!
//! Converts the markdown subset used by generated curricula and chat
//! replies into HTML.
//!
//! ## Rendering Phases
//!
//! 1. **Line Classification** (`classify`): each `\n`-delimited line is
//!    classified into a `LineClass` holding its indentation level and
//!    whether it is a list item, heading, blank, or plain text
//!
//! 2. **Markup Construction** (`MarkupRenderer`): a `ListStack` of open
//!    containers decides where `<ul>`/`<ol>` open and close, and each line's
//!    text goes through the `inline` passes
//!
//! ## Modules
//!
//! - **`classify`**: `LineClassifier` produces a `LineClass` for each line
//! - **`lists`**: `ListStack` and `ListFrame` for list nesting
//! - **`inline`**: escaping, links, auto-links, emphasis
//!
//! ## Key Invariants
//!
//! - Rendering is a pure function of the input; nothing survives between calls
//! - Every container opened during a pass is closed by the end of it
//! - Headings, plain lines and blank lines close every open list; a list
//!   never resumes after them
//!
//! The streaming typewriter re-renders growing prefixes of a reply, so the
//! output for a prefix must be valid markup on its own.

pub mod classify;
pub mod inline;
pub mod lists;

#[cfg(test)]
mod tests;

pub use classify::{LineClass, LineClassifier, LineKind};
pub use inline::{format_bold, render_inline};
pub use lists::{ListFrame, ListKind, ListStack};

/// Line break emitted after plain lines and for blank lines.
pub const LINE_BREAK: &str = "<br>";

/// Renders `text` to HTML.
pub fn render(text: &str) -> String {
    render_fragments(text).concat()
}

/// Renders `text` to the ordered fragments that [`render`] concatenates.
pub fn render_fragments(text: &str) -> Vec<String> {
    let classifier = LineClassifier;
    let mut renderer = MarkupRenderer::new();

    for line in text.split('\n') {
        renderer.push(&classifier.classify(line));
    }

    renderer.finish()
}

/// Accumulates markup one classified line at a time.
pub struct MarkupRenderer {
    lists: ListStack,
    out: Vec<String>,
}

impl MarkupRenderer {
    pub fn new() -> Self {
        Self {
            lists: ListStack::default(),
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &LineClass<'_>) {
        match line.kind {
            LineKind::Item { kind, content } => {
                self.lists.enter(kind, line.level, &mut self.out);
                self.out.push(format!("<li>{}</li>", render_inline(content)));
            }
            LineKind::Heading { level, content } => {
                self.lists.close_all(&mut self.out);
                let level = level.min(6);
                self.out.push(format!("<h{level}>{}</h{level}>", render_inline(content)));
            }
            LineKind::Blank => {
                self.lists.close_all(&mut self.out);
                self.out.push(LINE_BREAK.to_string());
            }
            LineKind::Text => {
                self.lists.close_all(&mut self.out);
                self.out.push(render_inline(line.raw));
                self.out.push(LINE_BREAK.to_string());
            }
        }
    }

    /// The containers currently open, outermost first.
    pub fn open_lists(&self) -> &[ListFrame] {
        self.lists.frames()
    }

    pub fn finish(mut self) -> Vec<String> {
        // EOF close
        self.lists.close_all(&mut self.out);
        self.out
    }
}

impl Default for MarkupRenderer {
    fn default() -> Self {
        Self::new()
    }
}
