//! Application layer.
//!
//! The two engines live here: `syntax` (incremental token highlighting)
//! and `compile` (staging + external renderer invocation). Everything
//! else is the thin coordination around them: the document model, the
//! settings file, and the message-driven `AppState`.

pub mod compile;
pub mod document;
pub mod error;
pub mod highlight_controller;
pub mod messages;
pub mod settings;
pub mod state;
pub mod syntax;

pub use compile::{CompileError, DotCompiler, RenderedImage};
pub use document::Document;
pub use messages::Message;
pub use settings::AppSettings;
pub use state::AppState;
