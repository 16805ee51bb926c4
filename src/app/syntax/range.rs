/// Byte range of the text that must be rescanned after an edit.
/// Half-open, transient: computed per edit and consumed immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightRange {
    pub start: usize,
    pub end: usize,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Snap a byte offset down to the nearest char boundary, clamped to the
/// text length.
fn snap_to_boundary(text: &str, pos: usize) -> usize {
    let mut pos = pos.min(text.len());
    while pos > 0 && !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// Compute the contiguous span that can contain every token match
/// created, destroyed, or altered by an edit at `edit_pos`.
///
/// Token matches are bounded by word or line context, so an edit can only
/// change matches whose boundary overlaps the edit point:
///
/// - An edit at the start of a line is widened to the previous line
///   through the end of the next line, because line-anchored context may
///   be affected.
/// - Anywhere else, the range grows backward to the start of the
///   enclosing word and forward to its end. Word characters never
///   include `\n`, so growth cannot cross a line end.
pub fn resolve_range(text: &str, edit_pos: usize) -> HighlightRange {
    let pos = snap_to_boundary(text, edit_pos);
    let line_start = text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0);

    if pos == line_start {
        // Previous line's start, or text start on the first line.
        let start = if line_start == 0 {
            0
        } else {
            text[..line_start - 1].rfind('\n').map(|i| i + 1).unwrap_or(0)
        };
        // End of the next line, newline included when present.
        let mut end = pos;
        for _ in 0..2 {
            match text[end..].find('\n') {
                Some(i) => end += i + 1,
                None => {
                    end = text.len();
                    break;
                }
            }
        }
        return HighlightRange { start, end };
    }

    let mut start = pos;
    while let Some(c) = text[..start].chars().next_back() {
        if !is_word_char(c) {
            break;
        }
        start -= c.len_utf8();
    }

    let mut end = pos;
    while let Some(c) = text[end..].chars().next() {
        if !is_word_char(c) {
            break;
        }
        end += c.len_utf8();
    }

    HighlightRange { start, end }
}
