use super::dictionary::{PLAIN_STYLE, TokenCategory, TokenDef, TokenDictionary};
use super::range::HighlightRange;

/// One tagged occurrence of a dictionary token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpan {
    /// Index of the matched definition in the dictionary.
    pub def_index: usize,
    pub start: usize,
    pub end: usize,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Word-boundary test for keywords: the match must neither start nor end
/// inside a word, checked against the full text so `graph` never matches
/// inside `subgraph`.
fn on_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let starts_word = text[..start]
        .chars()
        .next_back()
        .map(|c| !is_word_char(c))
        .unwrap_or(true);
    let ends_word = text[end..]
        .chars()
        .next()
        .map(|c| !is_word_char(c))
        .unwrap_or(true);
    starts_word && ends_word
}

/// Separation test for symbols: whitespace (newline included) or the
/// text edges on both sides. Symbols carry no word characters, so a
/// word-boundary test would hold trivially and is not what we want.
fn whitespace_separated(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start]
        .chars()
        .next_back()
        .map(|c| c.is_whitespace())
        .unwrap_or(true);
    let after = text[end..]
        .chars()
        .next()
        .map(|c| c.is_whitespace())
        .unwrap_or(true);
    before && after
}

fn boundary_ok(text: &str, def: &TokenDef, start: usize, end: usize) -> bool {
    match def.category {
        TokenCategory::Keyword => on_word_boundaries(text, start, end),
        TokenCategory::Symbol => whitespace_separated(text, start, end),
    }
}

/// Scan `range` for every dictionary token, in dictionary order.
///
/// Scanning resumes from the end of each literal occurrence whether or
/// not the boundary test passed, so each token costs at most one pass
/// over the range.
pub fn scan_range(text: &str, range: HighlightRange, dict: &TokenDictionary) -> Vec<TagSpan> {
    let mut spans = Vec::new();
    let end = range.end.min(text.len());
    let start = range.start.min(end);

    for (def_index, def) in dict.defs().iter().enumerate() {
        let mut from = start;
        while let Some(found) = text[from..end].find(&def.pattern) {
            let match_start = from + found;
            let match_end = match_start + def.pattern.len();
            if match_end > end {
                break;
            }
            if boundary_ok(text, def, match_start, match_end) {
                spans.push(TagSpan {
                    def_index,
                    start: match_start,
                    end: match_end,
                });
            }
            from = match_end;
        }
    }

    spans
}

/// Produce the style characters for `range`: plain filler everywhere,
/// then each matched span overwritten with its token's style char in
/// dictionary order, so later definitions win on overlap.
///
/// The result has exactly one char per byte of the range, the format
/// FLTK's style buffer expects.
pub fn style_range(text: &str, range: HighlightRange, dict: &TokenDictionary) -> String {
    let end = range.end.min(text.len());
    let start = range.start.min(end);
    let mut styles: Vec<u8> = vec![PLAIN_STYLE as u8; end - start];

    for span in scan_range(text, HighlightRange { start, end }, dict) {
        // Style chars are validated as ASCII by TokenDictionary::new,
        // so the cast is lossless.
        let style = dict.defs()[span.def_index].style as u8;
        for b in &mut styles[span.start - start..span.end - start] {
            *b = style;
        }
    }

    String::from_utf8(styles).expect("style chars are ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::syntax::dictionary::{KEYWORD_STYLE, SYMBOL_STYLE};

    fn full(text: &str) -> HighlightRange {
        HighlightRange { start: 0, end: text.len() }
    }

    fn spans_for(text: &str) -> Vec<(String, usize, usize)> {
        let dict = TokenDictionary::dot();
        scan_range(text, full(text), &dict)
            .into_iter()
            .map(|s| (dict.defs()[s.def_index].pattern.clone(), s.start, s.end))
            .collect()
    }

    #[test]
    fn test_keyword_word_boundaries() {
        // `graph` is a substring of `subgraph` but must not be tagged there.
        let text = "subgraph cluster0 { a }";
        let spans = spans_for(text);
        assert_eq!(spans, vec![("subgraph".to_string(), 0, 8)]);
    }

    #[test]
    fn test_keyword_standalone() {
        let text = "digraph G { graph [rankdir=LR]; }";
        let spans = spans_for(text);
        assert_eq!(
            spans,
            vec![
                ("graph".to_string(), 12, 17),
                ("digraph".to_string(), 0, 7),
            ]
        );
    }

    #[test]
    fn test_symbol_requires_whitespace_separation() {
        // Glued to identifiers: not tagged.
        assert!(spans_for("a->b").is_empty());
        // Separated: tagged.
        assert_eq!(spans_for("a -> b"), vec![("->".to_string(), 2, 4)]);
        // Broken apart: no literal occurrence at all.
        assert!(spans_for("a - > b").is_empty());
    }

    #[test]
    fn test_symbol_at_text_edges() {
        assert_eq!(spans_for("->"), vec![("->".to_string(), 0, 2)]);
        assert_eq!(spans_for("-> b"), vec![("->".to_string(), 0, 2)]);
        assert_eq!(spans_for("a ->"), vec![("->".to_string(), 2, 4)]);
    }

    #[test]
    fn test_symbol_before_line_end() {
        let text = "a ->\nb";
        assert_eq!(spans_for(text), vec![("->".to_string(), 2, 4)]);
    }

    #[test]
    fn test_undirected_edge_operator() {
        assert_eq!(spans_for("a -- b"), vec![("--".to_string(), 2, 4)]);
    }

    #[test]
    fn test_scanning_is_idempotent() {
        let dict = TokenDictionary::dot();
        let text = "digraph G {\n    a -> b;\n    subgraph cluster0 { c }\n}\n";
        let first = style_range(text, full(text), &dict);
        let second = style_range(text, full(text), &dict);
        assert_eq!(first, second);
    }

    #[test]
    fn test_style_range_length_matches_range() {
        let dict = TokenDictionary::dot();
        let text = "strict digraph G { a -> b; }";
        let styles = style_range(text, full(text), &dict);
        assert_eq!(styles.len(), text.len());
    }

    #[test]
    fn test_style_range_marks_exact_spans() {
        let dict = TokenDictionary::dot();
        let text = "node a -> b";
        let styles = style_range(text, full(text), &dict);
        let expected: String = text
            .char_indices()
            .map(|(i, _)| {
                if i < 4 {
                    KEYWORD_STYLE
                } else if i == 7 || i == 8 {
                    SYMBOL_STYLE
                } else {
                    'A'
                }
            })
            .collect();
        assert_eq!(styles, expected);
    }

    #[test]
    fn test_style_subrange_only_covers_range() {
        let dict = TokenDictionary::dot();
        let text = "node a; node b;";
        // Rescan only the second statement.
        let range = HighlightRange { start: 8, end: 15 };
        let styles = style_range(text, range, &dict);
        assert_eq!(styles.len(), 7);
        assert!(styles.starts_with(&KEYWORD_STYLE.to_string().repeat(4)));
    }

    #[test]
    fn test_match_straddling_range_end_is_dropped() {
        let dict = TokenDictionary::dot();
        let text = "node";
        // Range cuts the keyword short; no complete occurrence inside.
        let range = HighlightRange { start: 0, end: 3 };
        assert!(scan_range(text, range, &dict).is_empty());
    }

    #[test]
    fn test_range_clamped_to_text() {
        let dict = TokenDictionary::dot();
        let range = HighlightRange { start: 2, end: 50 };
        let styles = style_range("a edge", range, &dict);
        assert_eq!(styles.len(), 4);
        assert_eq!(styles, KEYWORD_STYLE.to_string().repeat(4));
    }

    #[test]
    fn test_later_definition_wins_on_overlap() {
        let dict = TokenDictionary::new(vec![
            TokenDef::new("ab", TokenCategory::Keyword, 'B'),
            TokenDef::new("abc", TokenCategory::Keyword, 'C'),
        ])
        .unwrap();
        let text = "ab abc";
        let styles = style_range(text, full(text), &dict);
        assert_eq!(styles, "BBACCC");
    }
}
