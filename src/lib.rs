//! codefield - mode-aware code field controller
//!
//! Binds a code-editing widget to a form field's `{code, type}` value.
//! Picks the editing mode, materializes starter snippets with placeholder
//! substitution, keeps the value record in sync on blur and drives a
//! filterable mode picker. Field events go through the Elm-style
//! [`update`](update::update) function.

pub mod assets;
pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod controller;
pub mod editor;
pub mod messages;
pub mod picker;
pub mod registry;
pub mod snippet;
pub mod tracing;
pub mod update;
pub mod util;
pub mod widget;

// Re-export commonly used types
pub use catalog::{EditorValueRecord, ModeCatalog, ModeDescriptor};
pub use commands::FieldCmd;
pub use config::FieldConfig;
pub use controller::ModeController;
pub use editor::{EditorHandle, MemoryEditor};
pub use messages::FieldMsg;
pub use picker::ModePicker;
pub use registry::EditorRegistry;
pub use widget::FieldWidget;
