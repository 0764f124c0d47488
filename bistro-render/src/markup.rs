//! HTML output buffer with an explicit trust split.
//!
//! Stored field text goes through [`Html::raw`]: editors are trusted
//! authors and their markup must reach the document verbatim. Everything
//! that is not editor prose, attribute values in particular, goes through
//! the escaping writers. The two paths are separate named methods so a
//! template always states which one it means.

use std::fmt::Write;

/// Append-only HTML buffer.
#[derive(Debug, Default)]
pub struct Html {
    out: String,
}

impl Html {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append markup or trusted editor content verbatim, without escaping.
    pub fn raw(&mut self, markup: &str) -> &mut Self {
        self.out.push_str(markup);
        self
    }

    /// Append text content with `& < > " '` replaced by entities.
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.out
            .push_str(&html_escape::encode_quoted_attribute(text));
        self
    }

    /// Append a value escaped for a double-quoted attribute position.
    pub fn attr(&mut self, value: &str) -> &mut Self {
        self.out
            .push_str(&html_escape::encode_double_quoted_attribute(value));
        self
    }

    /// Append a full line of markup followed by a newline.
    pub fn line(&mut self, markup: &str) -> &mut Self {
        let _ = writeln!(self.out, "{}", markup);
        self
    }

    pub fn finish(self) -> String {
        self.out
    }
}
