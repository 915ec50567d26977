//! Editor widget capability
//!
//! The controller never talks to a concrete text widget. It drives anything
//! implementing [`EditorHandle`]:
//!
//! - [`EditorHandle`]: text, mode, selection, find/replace and event subscriptions
//! - [`FindOptions`]: search flags, with a preset for the snippet placeholder
//! - [`Subscription`]: handle for a focus/blur listener, released on teardown
//! - [`MemoryEditor`]: headless implementation backed by `ropey::Rope`
//!
//! # Example
//!
//! ```
//! use codefield::editor::{EditorHandle, FindOptions, MemoryEditor};
//!
//! let mut editor = MemoryEditor::new();
//! editor.set_text("fn main() { @code-here }");
//! assert!(editor.find("@code-here", &FindOptions::placeholder()).is_some());
//! editor.replace_selection("run();");
//! assert_eq!(editor.text(), "fn main() { run(); }");
//! ```

mod handle;
mod memory;
mod selection;

pub use handle::{
    mode_id_from_path, mode_path, EditorEventKind, EditorHandle, EditorOptions, FindOptions,
    Subscription,
};
pub use memory::MemoryEditor;
pub use selection::Selection;
