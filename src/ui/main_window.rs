use fltk::{
    app::Sender,
    enums::{Color, FrameType, Shortcut},
    frame::Frame,
    group::{Flex, FlexType},
    menu::{MenuBar, MenuFlag},
    prelude::*,
    text::TextEditor,
    window::Window,
};

use crate::app::messages::Message;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
    pub image_frame: Frame,
}

/// Build the main window: menu bar on top, then the editor pane on the
/// left and the rendered-graph pane on the right, mirroring the
/// original's paned layout.
pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 800, 600, "graphview");
    wind.set_xclass("graphview");

    let mut column = Flex::new(0, 0, 800, 600, None);
    column.set_type(FlexType::Column);

    let mut menu = MenuBar::new(0, 0, 0, 30, "");
    column.fixed(&menu, 30);

    let mut panes = Flex::new(0, 0, 0, 0, None);
    panes.set_type(FlexType::Row);

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_linenumber_bgcolor(Color::from_rgb(240, 240, 240));
    text_editor.set_linenumber_fgcolor(Color::from_rgb(100, 100, 100));

    let mut image_frame = Frame::new(0, 0, 0, 0, "");
    image_frame.set_frame(FrameType::DownBox);
    image_frame.set_color(Color::White);

    panes.end();
    column.end();
    wind.resizable(&column);

    build_menu(&mut menu, sender);

    MainWidgets {
        wind,
        menu,
        text_editor,
        image_frame,
    }
}

fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let items = [
        ("File/New", Shortcut::Ctrl | 'n', MenuFlag::Normal, Message::FileNew),
        ("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, Message::FileOpen),
        ("File/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, Message::FileSave),
        (
            "File/Save As...",
            Shortcut::Ctrl | Shortcut::Shift | 's',
            MenuFlag::MenuDivider,
            Message::FileSaveAs,
        ),
        ("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, Message::FileQuit),
        (
            "Graph/Compile",
            Shortcut::Ctrl | 'r',
            MenuFlag::Normal,
            Message::CompileGraph,
        ),
        (
            "View/Toggle Line Numbers",
            Shortcut::None,
            MenuFlag::Toggle,
            Message::ToggleLineNumbers,
        ),
    ];

    for (label, shortcut, flag, msg) in items {
        let s = sender.clone();
        menu.add(label, shortcut, flag, move |_| s.send(msg.clone()));
    }
}
