use std::cell::Cell;
use std::rc::Rc;

use fltk::app::Sender;
use fltk::text::TextBuffer;

use super::messages::Message;
use super::syntax::dictionary::PLAIN_STYLE;

/// Starter graph loaded into a fresh document, as in the original tool.
pub const NEW_GRAPH_TEXT: &str = "digraph G {\n    a -> b;\n}";

/// The edited DOT document: the text buffer, its parallel style buffer
/// (one style char per byte), the file it came from, and a modified flag
/// cleared by save and by a completed compile staging.
pub struct Document {
    pub buffer: TextBuffer,
    pub style_buffer: TextBuffer,
    pub file_path: Option<String>,
    has_unsaved_changes: Rc<Cell<bool>>,
}

impl Document {
    /// Create the document and wire its modify callback. The callback
    /// keeps the style buffer length in sync (plain filler on insert,
    /// removal on delete) and forwards the edit offset over the channel
    /// so highlighting runs once per mutation.
    pub fn new(sender: Sender<Message>) -> Self {
        let mut buffer = TextBuffer::default();
        let style_buffer = TextBuffer::default();
        let has_unsaved_changes = Rc::new(Cell::new(false));

        let changes = has_unsaved_changes.clone();
        let mut style_buf = style_buffer.clone();
        buffer.add_modify_callback(move |pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                changes.set(true);
                if inserted > 0 {
                    let filler: String =
                        std::iter::repeat(PLAIN_STYLE).take(inserted as usize).collect();
                    style_buf.insert(pos, &filler);
                }
                if deleted > 0 {
                    style_buf.remove(pos, pos + deleted);
                }
                sender.send(Message::BufferModified(pos, inserted));
            }
        });

        Self {
            buffer,
            style_buffer,
            file_path: None,
            has_unsaved_changes,
        }
    }

    /// Snapshot of the full document text.
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// Replace the whole text (new document / file open). The modify
    /// callback fires and marks the document dirty; callers decide
    /// whether to clear the flag afterwards.
    pub fn set_text(&mut self, content: &str) {
        self.buffer.set_text(content);
    }

    pub fn is_dirty(&self) -> bool {
        self.has_unsaved_changes.get()
    }

    pub fn mark_clean(&self) {
        self.has_unsaved_changes.set(false);
    }
}
