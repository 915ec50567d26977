//! The capability surface the controller needs from a text widget.

use std::collections::BTreeMap;
use std::ops::Range;

/// Free-form widget options forwarded from field configuration
pub type EditorOptions = BTreeMap<String, serde_json::Value>;

/// Widget events the controller listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorEventKind {
    Focus,
    Blur,
}

/// Handle returned by [`EditorHandle::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    pub id: u64,
    pub event: EditorEventKind,
}

/// Search flags for [`EditorHandle::find`]
///
/// Needles are always literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindOptions {
    /// Search towards the start of the document
    pub backwards: bool,
    /// Continue from the other end when nothing is found past the cursor
    pub wrap: bool,
    pub case_sensitive: bool,
    /// Reject matches glued to neighbouring word characters
    pub whole_word: bool,
}

impl FindOptions {
    /// Flags used to locate the snippet placeholder
    pub fn placeholder() -> Self {
        Self {
            backwards: false,
            wrap: true,
            case_sensitive: true,
            whole_word: true,
        }
    }
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            backwards: false,
            wrap: true,
            case_sensitive: false,
            whole_word: false,
        }
    }
}

/// Opaque text widget
///
/// Implementations must not panic on out-of-range input; `find` reports a
/// miss as `None`.
pub trait EditorHandle {
    /// Full document text
    fn text(&self) -> String;

    /// Replace the whole document, collapsing the selection to the start
    fn set_text(&mut self, text: &str);

    /// Current mode path, e.g. `ace/mode/javascript`
    fn mode(&self) -> String;

    fn set_mode(&mut self, mode_path: &str);

    fn set_theme(&mut self, theme_path: &str);

    fn set_options(&mut self, options: &EditorOptions);

    /// Text covered by the current selection (empty when collapsed)
    fn selected_text(&self) -> String;

    /// Replace the current selection (or insert at the cursor)
    fn replace_selection(&mut self, text: &str);

    /// Find `needle` and select the match. Returns the matched char range.
    fn find(&mut self, needle: &str, options: &FindOptions) -> Option<Range<usize>>;

    fn subscribe(&mut self, event: EditorEventKind) -> Subscription;

    fn unsubscribe(&mut self, subscription: Subscription);
}

/// Widget mode path for a mode name (`ace/mode/` + `Python` -> `ace/mode/python`)
pub fn mode_path(prefix: &str, mode_name: &str) -> String {
    format!("{}{}", prefix, mode_name.to_lowercase())
}

/// Mode id from a widget mode path (`ace/mode/python` -> `python`)
pub fn mode_id_from_path(mode_path: &str) -> &str {
    mode_path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(mode_path)
}
