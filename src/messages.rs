//! Message types for the Elm-style architecture
//!
//! The host translates widget and DOM events into these messages and feeds
//! them to [`crate::update::update`].

/// Events a mounted code field reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldMsg {
    /// Editor lost focus: copy its state into the value record
    Blur,
    /// Editor gained focus: closes the options panel if open
    Focus,
    /// Mode picker entry clicked
    SelectMode {
        name: String,
        /// Title attribute of the clicked entry, if any
        title: Option<String>,
    },
    /// Mode picker search input changed
    FilterModes(String),
    /// Save-selection key binding pressed
    SaveSelection,
    /// Copy-options button clicked
    CopyOptions,
    /// Options panel button clicked
    ToggleOptions,
}

impl FieldMsg {
    pub fn select_mode(name: impl Into<String>) -> Self {
        FieldMsg::SelectMode {
            name: name.into(),
            title: None,
        }
    }
}
