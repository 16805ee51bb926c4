pub mod dictionary;
pub mod highlighter;
pub mod range;

use fltk::enums::{Color, Font};
use fltk::text::StyleTableEntry;

use dictionary::TokenDictionary;
use highlighter::style_range;
use range::{HighlightRange, resolve_range};

/// Facade over the token dictionary and the pure scanning functions.
/// Owns the style table handed to FLTK's `set_highlight_data`.
pub struct DotHighlighter {
    dictionary: TokenDictionary,
    font: Font,
    font_size: i32,
}

/// Styles recomputed for one slice of the document.
pub struct RangeRestyle {
    /// Byte offset in the style buffer where the new chars go.
    pub byte_start: usize,
    pub style_chars: String,
}

impl DotHighlighter {
    pub fn new(font: Font, font_size: i32) -> Self {
        Self {
            dictionary: TokenDictionary::dot(),
            font,
            font_size,
        }
    }

    /// Restyle the minimal range affected by inserting `edit_len` bytes
    /// at `edit_pos` (0 for a pure deletion). The range is the union of
    /// the resolved ranges at both ends of the insertion, so every word
    /// of a multi-word paste gets rescanned.
    pub fn restyle_edit(&self, text: &str, edit_pos: usize, edit_len: usize) -> RangeRestyle {
        let head = resolve_range(text, edit_pos);
        let tail = resolve_range(text, edit_pos.saturating_add(edit_len));
        let range = HighlightRange {
            start: head.start.min(tail.start),
            end: head.end.max(tail.end),
        };
        RangeRestyle {
            byte_start: range.start,
            style_chars: style_range(text, range, &self.dictionary),
        }
    }

    /// Restyle the whole document (after open / new / paste-all).
    pub fn restyle_all(&self, text: &str) -> String {
        let range = HighlightRange { start: 0, end: text.len() };
        style_range(text, range, &self.dictionary)
    }

    /// Style table indexed by style char: 'A' plain, 'B' keyword,
    /// 'C' symbol. Keyword styling follows the original bold dark green.
    pub fn style_table(&self) -> Vec<StyleTableEntry> {
        vec![
            StyleTableEntry {
                color: Color::Foreground,
                font: self.font,
                size: self.font_size,
            },
            StyleTableEntry {
                color: Color::from_rgb(0, 100, 0),
                font: Font::CourierBold,
                size: self.font_size,
            },
            StyleTableEntry {
                color: Color::from_rgb(0, 64, 128),
                font: self.font,
                size: self.font_size,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dictionary::{KEYWORD_STYLE, SYMBOL_STYLE};

    #[test]
    fn test_restyle_edit_covers_edited_word() {
        let hl = DotHighlighter::new(Font::Courier, 14);
        let text = "digraph G { a; }";
        // Single-char edit inside "digraph".
        let restyle = hl.restyle_edit(text, 3, 1);
        assert_eq!(restyle.byte_start, 0);
        assert_eq!(restyle.style_chars, KEYWORD_STYLE.to_string().repeat(7));
    }

    #[test]
    fn test_restyle_edit_covers_multi_word_insertion() {
        let hl = DotHighlighter::new(Font::Courier, 14);
        // "node edge " pasted at offset 2: the restyle must span the
        // whole insertion, not just the first word.
        let text = "a node edge b";
        let restyle = hl.restyle_edit(text, 2, 10);
        assert_eq!(restyle.byte_start, 2);
        assert_eq!(restyle.style_chars, "BBBBABBBBAA");
    }

    #[test]
    fn test_restyle_edit_deletion_rescans_joined_word() {
        let hl = DotHighlighter::new(Font::Courier, 14);
        // After deleting the interior of "nodXe" the rejoined word is
        // rescanned as one token.
        let text = "a node b";
        let restyle = hl.restyle_edit(text, 4, 0);
        assert_eq!(restyle.byte_start, 2);
        assert_eq!(restyle.style_chars, "BBBB");
    }

    #[test]
    fn test_restyle_all_tags_keywords_and_symbols() {
        let hl = DotHighlighter::new(Font::Courier, 14);
        let text = "digraph G {\n    a -> b;\n}";
        let styles = hl.restyle_all(text);
        assert_eq!(styles.len(), text.len());
        assert!(styles.starts_with(&KEYWORD_STYLE.to_string().repeat(7)));
        let arrow = text.find("->").unwrap();
        assert_eq!(&styles[arrow..arrow + 2], SYMBOL_STYLE.to_string().repeat(2));
    }

    #[test]
    fn test_style_table_covers_all_style_chars() {
        let hl = DotHighlighter::new(Font::Courier, 14);
        let table = hl.style_table();
        // One entry per style char 'A'..='C'.
        assert_eq!(table.len(), 3);
    }
}
