use fltk::enums::Font;
use fltk::prelude::*;
use fltk::text::TextEditor;

use super::document::Document;
use super::syntax::DotHighlighter;
use super::syntax::dictionary::PLAIN_STYLE;

/// Runs the highlighter against the document on every edit
/// notification, splicing the recomputed style characters into the
/// style buffer. Synchronous: the cost of a keystroke is bounded by the
/// resolved range, not the document size.
pub struct HighlightController {
    highlighter: DotHighlighter,
    pub highlighting_enabled: bool,
}

impl HighlightController {
    pub fn new(font: Font, font_size: i32, highlighting_enabled: bool) -> Self {
        Self {
            highlighter: DotHighlighter::new(font, font_size),
            highlighting_enabled,
        }
    }

    /// Bind the document's style buffer and the style table to the
    /// editor widget. Called once at startup.
    pub fn attach(&self, document: &Document, editor: &mut TextEditor) {
        editor.set_highlight_data(document.style_buffer.clone(), self.highlighter.style_table());
    }

    /// Re-tag the minimal range around an edit of `inserted` bytes at
    /// `pos`. A multi-byte insertion (paste) is rescanned across its
    /// full extent, not just the word at the insertion point.
    pub fn rehighlight(
        &self,
        document: &mut Document,
        editor: &mut TextEditor,
        pos: i32,
        inserted: i32,
    ) {
        if !self.highlighting_enabled {
            return;
        }
        let text = document.text();
        let restyle = self
            .highlighter
            .restyle_edit(&text, pos.max(0) as usize, inserted.max(0) as usize);
        let start = restyle.byte_start as i32;
        let end = start + restyle.style_chars.len() as i32;
        document.style_buffer.replace(start, end, &restyle.style_chars);
        editor.redraw();
    }

    /// Re-tag the whole document (after open / new).
    pub fn highlight_all(&self, document: &mut Document, editor: &mut TextEditor) {
        let text = document.text();
        let styles = if self.highlighting_enabled {
            self.highlighter.restyle_all(&text)
        } else {
            PLAIN_STYLE.to_string().repeat(text.len())
        };
        document.style_buffer.set_text(&styles);
        editor.redraw();
    }
}
