/// All messages that can be sent through the FLTK channel.
/// Each menu callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    FileQuit,

    // Graph
    CompileGraph,

    // View
    ToggleLineNumbers,

    /// Emitted by the buffer modify callback with the edit offset and
    /// the number of bytes inserted (0 for a pure deletion).
    BufferModified(i32, i32),
}
