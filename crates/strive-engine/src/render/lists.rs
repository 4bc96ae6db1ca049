/// The two list container flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `-` or `*` bullets, rendered as `<ul>`.
    Unordered,
    /// `N.` items, rendered as `<ol>`.
    Ordered,
}

impl ListKind {
    pub fn open_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }
}

/// A frame in the list stack representing one open container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListFrame {
    pub kind: ListKind,
    /// Indentation level the container was opened at.
    pub level: usize,
}

/// Open list containers, outermost first.
///
/// Every method that opens or closes a container pushes the matching tag
/// onto the caller's output so the tag sequence always mirrors the stack.
#[derive(Debug, Default, Clone)]
pub struct ListStack(Vec<ListFrame>);

impl ListStack {
    /// Makes the top of the stack a container of `kind` at `level`, closing
    /// and opening containers as needed.
    ///
    /// A deeper item nests a new container. Otherwise containers are closed
    /// while they sit deeper than `level`, or at `level` with the other kind;
    /// a same-level kind change therefore closes one list and opens another.
    pub fn enter(&mut self, kind: ListKind, level: usize, out: &mut Vec<String>) {
        match self.top() {
            None => self.open(kind, level, out),
            Some(top) if level > top.level => self.open(kind, level, out),
            Some(_) => {
                while let Some(top) = self.top() {
                    let deeper = top.level > level;
                    let other_kind = top.level == level && top.kind != kind;
                    if !(deeper || other_kind) {
                        break;
                    }
                    self.close_top(out);
                }
                if self.top() != Some(ListFrame { kind, level }) {
                    self.open(kind, level, out);
                }
            }
        }
    }

    /// Closes every open container, innermost first.
    pub fn close_all(&mut self, out: &mut Vec<String>) {
        while !self.0.is_empty() {
            self.close_top(out);
        }
    }

    pub fn frames(&self) -> &[ListFrame] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn top(&self) -> Option<ListFrame> {
        self.0.last().copied()
    }

    fn open(&mut self, kind: ListKind, level: usize, out: &mut Vec<String>) {
        self.0.push(ListFrame { kind, level });
        out.push(kind.open_tag().to_string());
    }

    fn close_top(&mut self, out: &mut Vec<String>) {
        if let Some(frame) = self.0.pop() {
            out.push(frame.kind.close_tag().to_string());
        }
    }
}
