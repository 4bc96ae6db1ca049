//! Growing-prefix rendering for the streamed "typing" effect.
//!
//! Each frame re-renders the whole revealed prefix from scratch; the
//! renderer keeps no state between calls, so every frame is well-formed
//! markup on its own.

use crate::render::render;

/// One step of the typewriter effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<'a> {
    /// The revealed prefix of the source text.
    pub shown: &'a str,
    /// `shown` rendered to HTML.
    pub html: String,
}

/// Iterator over frames revealing `chunk` more characters each step.
pub struct Typewriter<'a> {
    text: &'a str,
    chunk: usize,
    end: usize,
}

impl<'a> Typewriter<'a> {
    /// A chunk size of zero is treated as one character per frame.
    pub fn new(text: &'a str, chunk: usize) -> Self {
        Self {
            text,
            chunk: chunk.max(1),
            end: 0,
        }
    }

    /// Byte index `chunk` characters past `self.end`, clamped to the text.
    fn next_end(&self) -> usize {
        self.text[self.end..]
            .char_indices()
            .nth(self.chunk)
            .map_or(self.text.len(), |(idx, _)| self.end + idx)
    }
}

impl<'a> Iterator for Typewriter<'a> {
    type Item = Frame<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.end >= self.text.len() {
            return None;
        }
        self.end = self.next_end();
        let shown = &self.text[..self.end];
        Some(Frame {
            shown,
            html: render(shown),
        })
    }
}

/// Collects the HTML of every frame.
pub fn render_frames(text: &str, chunk: usize) -> Vec<String> {
    Typewriter::new(text, chunk).map(|f| f.html).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reveals_in_chunks() {
        let shown: Vec<_> = Typewriter::new("abcdefg", 3).map(|f| f.shown).collect();
        assert_eq!(shown, vec!["abc", "abcdef", "abcdefg"]);
    }

    #[test]
    fn last_frame_is_full_render() {
        let text = "- one\n- two";
        let frames = render_frames(text, 4);
        assert_eq!(frames.last(), Some(&render(text)));
    }

    #[test]
    fn empty_text_has_no_frames() {
        assert!(render_frames("", 3).is_empty());
    }

    #[test]
    fn zero_chunk_reveals_one_char_at_a_time() {
        assert_eq!(Typewriter::new("abc", 0).count(), 3);
    }

    #[test]
    fn respects_char_boundaries() {
        let shown: Vec<_> = Typewriter::new("héllo wörld", 2).map(|f| f.shown).collect();
        assert_eq!(shown[0], "hé");
        assert_eq!(shown[3], "héllo wö");
        assert_eq!(shown.last(), Some(&"héllo wörld"));
    }

    #[test]
    fn partial_list_frames_are_closed() {
        for html in render_frames("- first\n  - second\n- third", 3) {
            let opens = html.matches("<ul>").count();
            let closes = html.matches("</ul>").count();
            assert_eq!(opens, closes, "unbalanced frame {html:?}");
        }
    }
}
