use std::fs;

use fltk::{
    app::Sender,
    dialog,
    enums::Font,
    frame::Frame,
    image::PngImage,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use super::compile::{CompileError, DotCompiler, RenderedImage};
use super::document::{Document, NEW_GRAPH_TEXT};
use super::highlight_controller::HighlightController;
use super::messages::Message;
use super::settings::AppSettings;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};

const DOT_FILTER: &str = "*.dot";

/// Application coordinator: owns the document, the widgets the handlers
/// touch, the highlight controller, and the compiler. One instance,
/// driven by the message dispatch loop in main.
pub struct AppState {
    pub document: Document,
    pub editor: TextEditor,
    pub image_frame: Frame,
    pub window: Window,
    pub settings: AppSettings,
    pub highlight: HighlightController,
    compiler: DotCompiler,
    /// The artifact currently on screen. Held here so the temp file
    /// outlives its display; replaced (and the old file deleted) only
    /// by the next successful compile.
    pub current_image: Option<RenderedImage>,
    show_linenumbers: bool,
}

impl AppState {
    pub fn new(
        editor: TextEditor,
        image_frame: Frame,
        window: Window,
        settings: AppSettings,
        sender: Sender<Message>,
    ) -> Self {
        let document = Document::new(sender);
        let highlight = HighlightController::new(
            Font::Courier,
            settings.font_size as i32,
            settings.highlighting_enabled,
        );
        let compiler = DotCompiler::new(settings.renderer_path.clone());
        let show_linenumbers = settings.line_numbers_enabled;

        let mut state = Self {
            document,
            editor,
            image_frame,
            window,
            settings,
            highlight,
            compiler,
            current_image: None,
            show_linenumbers,
        };

        state.editor.set_buffer(state.document.buffer.clone());
        state.highlight.attach(&state.document, &mut state.editor);
        state.apply_linenumbers();
        state
    }

    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::FileNew => self.file_new(),
            Message::FileOpen => self.file_open(),
            Message::FileSave => self.file_save(),
            Message::FileSaveAs => self.file_save_as(),
            Message::FileQuit => fltk::app::quit(),
            Message::CompileGraph => self.compile_graph(),
            Message::ToggleLineNumbers => self.toggle_linenumbers(),
            Message::BufferModified(pos, inserted) => {
                self.highlight
                    .rehighlight(&mut self.document, &mut self.editor, pos, inserted);
            }
        }
    }

    pub fn load_starter_graph(&mut self) {
        self.document.set_text(NEW_GRAPH_TEXT);
        self.document.mark_clean();
        self.highlight
            .highlight_all(&mut self.document, &mut self.editor);
        self.compile_graph();
    }

    fn file_new(&mut self) {
        self.document.set_text(NEW_GRAPH_TEXT);
        self.document.file_path = None;
        self.document.mark_clean();
        self.highlight
            .highlight_all(&mut self.document, &mut self.editor);
        self.update_title();
        self.compile_graph();
    }

    fn file_open(&mut self) {
        let Some(path) = native_open_dialog(DOT_FILTER) else {
            return;
        };
        match fs::read_to_string(&path) {
            Ok(content) => {
                self.document.set_text(&content);
                self.document.file_path = Some(path);
                self.document.mark_clean();
                self.highlight
                    .highlight_all(&mut self.document, &mut self.editor);
                self.update_title();
                self.compile_graph();
            }
            Err(e) => dialog::alert_default(&format!("Error opening file: {}", e)),
        }
    }

    fn file_save(&mut self) {
        match self.document.file_path.clone() {
            Some(path) => self.write_to(&path),
            None => self.file_save_as(),
        }
    }

    fn file_save_as(&mut self) {
        let Some(path) = native_save_dialog(DOT_FILTER) else {
            return;
        };
        self.document.file_path = Some(path.clone());
        self.write_to(&path);
        self.update_title();
    }

    fn write_to(&mut self, path: &str) {
        match fs::write(path, self.document.text()) {
            Ok(()) => self.document.mark_clean(),
            Err(e) => dialog::alert_default(&format!("Error saving file: {}", e)),
        }
    }

    /// Stage the buffer text, run the renderer, and display the result.
    /// A failed render leaves the previously displayed image in place.
    fn compile_graph(&mut self) {
        let text = self.document.text();
        match self.compiler.compile(&text) {
            Ok(image) => {
                // Staging completed, so disk and buffer are in sync.
                self.document.mark_clean();
                self.show_image(image);
            }
            Err(err @ CompileError::Staging(_)) => {
                dialog::alert_default(&err.to_string());
            }
            Err(err) => {
                self.document.mark_clean();
                dialog::alert_default(&err.to_string());
            }
        }
    }

    fn show_image(&mut self, image: RenderedImage) {
        match PngImage::load(image.path()) {
            Ok(mut png) => {
                png.scale(self.image_frame.w(), self.image_frame.h(), true, true);
                self.image_frame.set_image(Some(png));
                self.image_frame.redraw();
                // Dropping the previous artifact deletes its temp file.
                self.current_image = Some(image);
            }
            Err(e) => dialog::alert_default(&format!("Failed to load rendered image: {}", e)),
        }
    }

    fn toggle_linenumbers(&mut self) {
        self.show_linenumbers = !self.show_linenumbers;
        self.apply_linenumbers();
        self.settings.line_numbers_enabled = self.show_linenumbers;
        if let Err(e) = self.settings.save() {
            eprintln!("Failed to save settings: {}", e);
        }
    }

    fn apply_linenumbers(&mut self) {
        if self.show_linenumbers {
            self.editor.set_linenumber_width(40);
        } else {
            self.editor.set_linenumber_width(0);
        }
        self.editor.redraw();
    }

    fn update_title(&mut self) {
        let title = match self.document.file_path {
            Some(ref path) => format!("graphview - {}", path),
            None => "graphview".to_string(),
        };
        self.window.set_label(&title);
    }
}
