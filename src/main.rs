mod app;
mod ui;

use app::messages::Message;
use fltk::prelude::{GroupExt, WidgetExt};
use app::settings::AppSettings;
use app::state::AppState;
use ui::main_window::build_main_window;

fn main() {
    let fltk_app = fltk::app::App::default();
    let (sender, receiver) = fltk::app::channel::<Message>();

    let settings = AppSettings::load();
    let widgets = build_main_window(&sender);

    let mut state = AppState::new(
        widgets.text_editor,
        widgets.image_frame,
        widgets.wind.clone(),
        settings,
        sender,
    );

    let mut wind = widgets.wind;
    wind.end();
    wind.show();

    state.load_starter_graph();

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            state.handle(msg);
        }
    }
}
